use crate::{
    api::{ApiError, ContractorIntake},
    pages::checkin::utils::{success_message, ContractorForm},
    state::workflow::CheckinProgress,
};

/// Shown right after a successful check-in, before the training decision is
/// known.
pub const TRAINING_ANNOUNCEMENT: &str =
    "You're checked in. You will now be redirected to complete the required site training.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinReceipt {
    pub contractor_id: String,
    pub message: String,
}

/// Validates and submits the contractor form, then starts the workflow for
/// the contractor id the server issued. Nothing is persisted on failure.
pub async fn submit_checkin<A>(
    api: &A,
    progress: &CheckinProgress,
    form: &ContractorForm,
) -> Result<CheckinReceipt, ApiError>
where
    A: ContractorIntake + ?Sized,
{
    let validated = form.validate()?;
    let response = api.submit_contractor(&validated.submission).await?;
    let contractor_id = response.contractor.id;
    progress.begin(&contractor_id).map_err(|err| {
        log::error!("check-in accepted but contractor id not stored: {}", err);
        ApiError::unknown(err.to_string())
    })?;
    log::info!("contractor checked in as {}", contractor_id);
    Ok(CheckinReceipt {
        contractor_id,
        message: success_message(&validated.submission, validated.visit_date),
    })
}
