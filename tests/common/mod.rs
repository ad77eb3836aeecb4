#![allow(dead_code)]

use chrono::Utc;
use std::sync::Arc;

use quantumleap::prelude::*;
use quantumleap::utils::code_generator::RandomCodeGenerator;

pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;
pub const BASE_URL: &str = "http://sho.rt";

/// A fully wired application over the in-memory store, with the clock and
/// repository exposed so tests can steer time and inspect storage.
pub struct TestHarness {
    pub state: AppState,
    pub registry: Arc<RegistryService<KvEntryRepository>>,
    pub repository: Arc<KvEntryRepository>,
    pub clock: Arc<ManualClock>,
}

pub fn create_test_harness() -> TestHarness {
    let store = Arc::new(MemoryBlobStore::new());
    let repository = Arc::new(KvEntryRepository::new(store));
    let clock = Arc::new(ManualClock::new(Utc::now()));

    let registry = Arc::new(RegistryService::new(
        repository.clone(),
        Arc::new(RandomCodeGenerator::new()),
        clock.clone(),
        Arc::new(RandomClassifier::new()),
        DEFAULT_VALIDITY_MINUTES,
    ));

    let state = AppState::new(
        registry.clone(),
        Arc::new(LocalSummarizer::new()),
        BASE_URL.to_string(),
    );

    TestHarness {
        state,
        registry,
        repository,
        clock,
    }
}
