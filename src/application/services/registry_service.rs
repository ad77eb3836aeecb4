//! Shortcode registry engine: creation, resolution, click recording.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::domain::classifier::{Classification, ClickClassifier, ClickContext};
use crate::domain::clock::Clock;
use crate::domain::entities::{ClickEvent, Entry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Upper bound on random generation attempts per create call.
///
/// Tunable. Two attempts keep worst-case latency deterministic; at a
/// 62^6 candidate space a second collision in a row is effectively
/// unreachable, so looping further buys nothing.
pub const MAX_GENERATION_ATTEMPTS: usize = 2;

/// Validity status of a resolved entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStatus {
    Active,
    Expired,
}

/// Result of resolving a shortcode.
///
/// Expired entries are returned with their data intact so callers can
/// still display what the code would have pointed to.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub entry: Entry,
    pub status: ResolveStatus,
}

impl Resolution {
    pub fn is_active(&self) -> bool {
        self.status == ResolveStatus::Active
    }
}

/// Outcome of a click-recording attempt.
///
/// Click recording is best-effort telemetry: a missing or expired entry
/// yields `Ignored`, not an error. Storage failures still propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Recorded,
    Ignored,
}

/// The shortcode registry and resolution engine.
///
/// Orchestrates creation (uniqueness + bounded collision retry),
/// resolution (expiry check against the injected clock), and click
/// recording. Holds no state of its own beyond its collaborators.
pub struct RegistryService<R: EntryRepository> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    classifier: Arc<dyn ClickClassifier>,
    default_validity_minutes: u32,
}

impl<R: EntryRepository> RegistryService<R> {
    pub fn new(
        repository: Arc<R>,
        generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
        classifier: Arc<dyn ClickClassifier>,
        default_validity_minutes: u32,
    ) -> Self {
        Self {
            repository,
            generator,
            clock,
            classifier,
            default_validity_minutes,
        }
    }

    /// Registers a new shortcode for `target`.
    ///
    /// A non-empty `custom_code` (after trimming) is used verbatim; if it
    /// is already registered the call fails with [`AppError::CodeTaken`],
    /// with no fallback to auto-generation. Otherwise a random candidate is
    /// drawn, with at most [`MAX_GENERATION_ATTEMPTS`] attempts before
    /// [`AppError::GenerationExhausted`].
    ///
    /// `validity_minutes = Some(0)` makes the entry permanent; `None`
    /// falls back to the configured default validity.
    ///
    /// The store is not touched unless creation succeeds in full.
    ///
    /// # Errors
    ///
    /// [`AppError::EmptyTarget`], [`AppError::CodeTaken`],
    /// [`AppError::GenerationExhausted`], [`AppError::StorageUnavailable`].
    pub async fn create(
        &self,
        target: &str,
        custom_code: Option<&str>,
        validity_minutes: Option<u32>,
    ) -> Result<Entry, AppError> {
        let target = target.trim();
        if target.is_empty() {
            return Err(AppError::EmptyTarget);
        }

        let custom = custom_code.map(str::trim).filter(|c| !c.is_empty());

        let code = match custom {
            Some(code) => {
                if self.repository.find_by_shortcode(code).await?.is_some() {
                    return Err(AppError::code_taken(code));
                }
                code.to_string()
            }
            None => self.generate_unique_code().await?,
        };

        let now = self.clock.now();
        let entry = Entry::new(
            target.to_string(),
            code,
            now,
            self.expiry_for(now, validity_minutes),
        );

        match self.repository.insert_new(entry).await {
            // A concurrent create won the race after our uniqueness check
            // passed. For a generated code the caller supplied nothing to
            // conflict with, so surface it as exhaustion instead.
            Err(AppError::CodeTaken { .. }) if custom.is_none() => {
                Err(AppError::GenerationExhausted)
            }
            other => other,
        }
    }

    /// Resolves a shortcode to its entry plus validity status.
    ///
    /// A pure read: no mutation, no click recorded. Expired entries are
    /// returned with [`ResolveStatus::Expired`] rather than an error.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`], [`AppError::StorageUnavailable`].
    pub async fn resolve(&self, code: &str) -> Result<Resolution, AppError> {
        let entry = self
            .repository
            .find_by_shortcode(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))?;

        let status = if entry.is_expired_at(self.clock.now()) {
            ResolveStatus::Expired
        } else {
            ResolveStatus::Active
        };

        Ok(Resolution { entry, status })
    }

    /// Records a click against a live shortcode.
    ///
    /// Missing or expired entries are silently ignored. Classifier failure
    /// degrades to `Unknown` labels; the click is still recorded.
    ///
    /// # Errors
    ///
    /// [`AppError::StorageUnavailable`].
    pub async fn record_click(
        &self,
        code: &str,
        ctx: ClickContext,
    ) -> Result<ClickOutcome, AppError> {
        let Some(entry) = self.repository.find_by_shortcode(code).await? else {
            debug!(code, "click on unknown shortcode dropped");
            return Ok(ClickOutcome::Ignored);
        };

        let now = self.clock.now();
        if entry.is_expired_at(now) {
            debug!(code, "click on expired shortcode dropped");
            return Ok(ClickOutcome::Ignored);
        }

        let classification = match self.classifier.classify(&ctx).await {
            Ok(c) => c,
            Err(e) => {
                warn!(code, error = %e, "click classifier failed, using fallback labels");
                Classification::unknown()
            }
        };

        let click = ClickEvent::new(now, classification.source, classification.location);

        let appended = self.repository.append_click(code, click).await?;
        Ok(if appended {
            ClickOutcome::Recorded
        } else {
            ClickOutcome::Ignored
        })
    }

    /// Lists all entries, most recently created first.
    ///
    /// # Errors
    ///
    /// [`AppError::StorageUnavailable`].
    pub async fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        self.repository.list_all().await
    }

    /// Computes the expiry instant from the requested validity.
    fn expiry_for(&self, now: DateTime<Utc>, validity_minutes: Option<u32>) -> Option<DateTime<Utc>> {
        let minutes = validity_minutes.unwrap_or(self.default_validity_minutes);

        if minutes == 0 {
            None
        } else {
            Some(now + Duration::minutes(i64::from(minutes)))
        }
    }

    /// Draws random candidates until one is free, bounded by
    /// [`MAX_GENERATION_ATTEMPTS`].
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = self.generator.generate();

            if self
                .repository
                .find_by_shortcode(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        Err(AppError::GenerationExhausted)
    }
}
