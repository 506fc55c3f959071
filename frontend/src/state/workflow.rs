//! Cross-page state of the contractor check-in workflow.
//!
//! The contractor id issued at check-in and the last training score live in
//! client storage so they survive navigation; pages read them through
//! [`CheckinProgress`] instead of touching storage keys.

use crate::{
    api::{SettingsApi, SystemSettings},
    router::{CHECKIN_PATH, HOME_PATH, TRAINING_PATH},
    utils::storage::{use_storage, AppStorage, StorageError},
};
use thiserror::Error;

pub const CONTRACTOR_ID_KEY: &str = "contractorId";
pub const LAST_SCORE_KEY: &str = "lastScore";

pub const MISSING_CHECKIN_ALERT: &str =
    "We could not find your check-in. Please complete the check-in form first.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("{}", MISSING_CHECKIN_ALERT)]
    MissingContractor,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl WorkflowError {
    /// Where the visitor is sent when this error stops a workflow page.
    pub fn recovery_path(&self) -> &'static str {
        CHECKIN_PATH
    }
}

#[derive(Clone)]
pub struct CheckinProgress {
    store: AppStorage,
}

impl CheckinProgress {
    pub fn new(store: AppStorage) -> Self {
        Self { store }
    }

    pub fn contractor_id(&self) -> Option<String> {
        match self.store.get(CONTRACTOR_ID_KEY) {
            Ok(value) => value.filter(|id| !id.trim().is_empty()),
            Err(err) => {
                log::warn!("failed to read contractor id: {}", err);
                None
            }
        }
    }

    pub fn require_contractor_id(&self) -> Result<String, WorkflowError> {
        self.contractor_id().ok_or(WorkflowError::MissingContractor)
    }

    /// Starts a new workflow for `contractor_id`, dropping any score left
    /// over from a previous visitor on this device.
    pub fn begin(&self, contractor_id: &str) -> Result<(), WorkflowError> {
        self.store.set(CONTRACTOR_ID_KEY, contractor_id)?;
        self.store.remove(LAST_SCORE_KEY)?;
        Ok(())
    }

    pub fn record_score(&self, score: i32) -> Result<(), WorkflowError> {
        self.store.set(LAST_SCORE_KEY, &score.to_string())?;
        Ok(())
    }

    pub fn last_score(&self) -> Option<i32> {
        self.store
            .get(LAST_SCORE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse().ok())
    }

    pub fn finish(&self) -> Result<(), WorkflowError> {
        self.store.remove(LAST_SCORE_KEY)?;
        self.store.remove(CONTRACTOR_ID_KEY)?;
        Ok(())
    }
}

pub fn use_checkin_progress() -> CheckinProgress {
    CheckinProgress::new(use_storage())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Training,
    Home,
}

impl NextStep {
    pub fn path(self) -> &'static str {
        match self {
            NextStep::Training => TRAINING_PATH,
            NextStep::Home => HOME_PATH,
        }
    }
}

pub fn next_step_for(settings: &SystemSettings) -> NextStep {
    if settings.training_required {
        NextStep::Training
    } else {
        NextStep::Home
    }
}

/// Where a freshly checked-in contractor goes. Settings that cannot be
/// fetched count as training not required.
pub async fn decide_next_step<A>(api: &A) -> NextStep
where
    A: SettingsApi + ?Sized,
{
    let settings = match api.fetch_settings().await {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("system settings unavailable, assuming defaults: {}", err);
            SystemSettings::default()
        }
    };
    next_step_for(&settings)
}
