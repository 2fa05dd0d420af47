//! Batch lifecycle control
//!
//! Owns the authoritative status for a single batch: `active` is the only
//! live state, `dispatched` and `expired` are terminal. The scoring engine
//! never mutates status; callers observe the expiry condition on read and
//! drive every transition through this controller, one batch at a time.

use chrono::{DateTime, Utc};

use crate::core::errors::{Error, Result};
use crate::core::types::{
    BatchSnapshot, BatchStatus, DestinationClass, DispatchRecord, FreshnessTier,
};
use crate::risk::scoring::elapsed_days;
use crate::risk::validate_shelf_life;

/// State machine for one batch's status
#[derive(Debug, Clone, PartialEq)]
pub struct BatchLifecycle {
    batch_id: String,
    status: BatchStatus,
    dispatch: Option<DispatchRecord>,
    expired_at: Option<DateTime<Utc>>,
}

impl BatchLifecycle {
    /// A freshly stored batch starts `active`
    pub fn new(batch_id: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            status: BatchStatus::Active,
            dispatch: None,
            expired_at: None,
        }
    }

    /// Rehydrate a controller from a persisted status
    pub fn resume(batch_id: impl Into<String>, status: BatchStatus) -> Self {
        Self {
            batch_id: batch_id.into(),
            status,
            dispatch: None,
            expired_at: None,
        }
    }

    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }

    pub fn status(&self) -> BatchStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Where and when the batch was dispatched, if it was
    pub fn dispatch_record(&self) -> Option<&DispatchRecord> {
        self.dispatch.as_ref()
    }

    pub fn expired_at(&self) -> Option<DateTime<Utc>> {
        self.expired_at
    }

    /// `active -> dispatched`, recording destination and date.
    ///
    /// Fails with [`Error::InvalidTransition`] from any other state; the
    /// batch state is left unchanged on failure.
    pub fn dispatch(
        &mut self,
        destination: DestinationClass,
        dispatch_date: DateTime<Utc>,
    ) -> Result<()> {
        self.guard(BatchStatus::Dispatched)?;
        self.dispatch = Some(DispatchRecord {
            destination,
            dispatch_date,
        });
        self.status = BatchStatus::Dispatched;
        log::info!(
            "batch {} dispatched to {} at {}",
            self.batch_id,
            destination,
            dispatch_date
        );
        Ok(())
    }

    /// `active -> expired`, recording when the expiry was observed.
    ///
    /// The engine does not poll time; callers invoke this after observing
    /// [`is_past_shelf_life`] on read.
    pub fn expire(&mut self, expired_at: DateTime<Utc>) -> Result<()> {
        self.guard(BatchStatus::Expired)?;
        self.expired_at = Some(expired_at);
        self.status = BatchStatus::Expired;
        log::info!("batch {} expired at {}", self.batch_id, expired_at);
        Ok(())
    }

    // No transition leaves a terminal state
    fn guard(&self, attempted: BatchStatus) -> Result<()> {
        if self.status != BatchStatus::Active {
            return Err(Error::invalid_transition(
                self.batch_id.clone(),
                self.status,
                attempted,
            ));
        }
        Ok(())
    }
}

/// Whether a batch has consumed its full shelf life as of `now`.
///
/// Read-side check sharing the scorer's shelf-life contract: a non-positive
/// shelf life is surfaced, never defaulted.
pub fn is_past_shelf_life(snapshot: &BatchSnapshot, now: DateTime<Utc>) -> Result<bool> {
    validate_shelf_life(snapshot)?;
    Ok(elapsed_days(snapshot.entry_date, now) >= snapshot.shelf_life_days)
}

/// Whether an operator should be prompted to dispatch a batch in this tier
pub fn should_prompt_dispatch(tier: FreshnessTier) -> bool {
    matches!(tier, FreshnessTier::Moderate | FreshnessTier::High)
}
