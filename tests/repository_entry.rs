//! Entry repository contract over the in-memory blob store.

mod common;

use chrono::{Duration, Utc};
use std::sync::Arc;

use quantumleap::domain::entities::{ClickEvent, Entry};
use quantumleap::domain::repositories::EntryRepository;
use quantumleap::prelude::*;

fn repository() -> Arc<KvEntryRepository> {
    Arc::new(KvEntryRepository::new(Arc::new(MemoryBlobStore::new())))
}

#[tokio::test]
async fn test_save_then_find_round_trips_every_field() {
    let repo = repository();
    let now = Utc::now();

    let mut entry = Entry::new(
        "https://example.com/path?q=1".to_string(),
        "RtAbc9".to_string(),
        now,
        Some(now + Duration::minutes(30)),
    );
    entry.clicks.push(ClickEvent::new(
        now + Duration::minutes(1),
        "Social Media".to_string(),
        "South America".to_string(),
    ));

    repo.save(&entry).await.unwrap();
    let found = repo.find_by_shortcode("RtAbc9").await.unwrap().unwrap();

    assert_eq!(found, entry);
}

#[tokio::test]
async fn test_round_trip_preserves_permanent_expiry() {
    let repo = repository();
    let entry = Entry::new(
        "https://example.com".to_string(),
        "perm99".to_string(),
        Utc::now(),
        None,
    );

    repo.save(&entry).await.unwrap();
    let found = repo.find_by_shortcode("perm99").await.unwrap().unwrap();

    assert!(found.expires_at.is_none());
    assert_eq!(found, entry);
}

#[tokio::test]
async fn test_racing_inserts_on_same_code_yield_one_winner() {
    let repo = repository();

    let spawn_insert = |repo: Arc<KvEntryRepository>, target: &str| {
        let entry = Entry::new(
            target.to_string(),
            "raced1".to_string(),
            Utc::now(),
            None,
        );
        tokio::spawn(async move { repo.insert_new(entry).await })
    };

    let a = spawn_insert(repo.clone(), "https://a.com");
    let b = spawn_insert(repo.clone(), "https://b.com");

    let results = [a.await.unwrap(), b.await.unwrap()];
    let winners = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(winners, 1);
}

#[tokio::test]
async fn test_concurrent_appends_are_all_kept() {
    const CLICKS: usize = 40;
    let repo = repository();
    let now = Utc::now();

    repo.insert_new(Entry::new(
        "https://example.com".to_string(),
        "busy01".to_string(),
        now,
        None,
    ))
    .await
    .unwrap();

    let mut handles = Vec::new();
    for i in 0..CLICKS {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.append_click(
                "busy01",
                ClickEvent::new(
                    now + Duration::seconds(i as i64),
                    "Direct".to_string(),
                    "Europe".to_string(),
                ),
            )
            .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    let found = repo.find_by_shortcode("busy01").await.unwrap().unwrap();
    assert_eq!(found.click_count(), CLICKS);
}
