pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod shell;

use crate::error::{RosterError, Result};
use crate::output;
use crate::sync::{ListSynchronizer, LoadOutcome, MutationOutcome};

/// Turn a mutation outcome into a CLI result, printing the refreshed list.
async fn report_mutation(
    sync: &ListSynchronizer,
    outcome: MutationOutcome,
    success: &str,
) -> Result<()> {
    let endpoint = sync.client().endpoint().to_string();
    match outcome {
        MutationOutcome::Refreshed(LoadOutcome::Failed) => {
            output::print_status(success);
            Err(RosterError::LoadFailed(endpoint))
        }
        MutationOutcome::Refreshed(_) => {
            output::print_status(success);
            output::print_view(&*sync.view().await);
            Ok(())
        }
        MutationOutcome::Rejected { status, message } => Err(RosterError::ApiError {
            status,
            message: message.unwrap_or_else(|| "<no message>".to_string()),
        }),
        MutationOutcome::Failed(reason) => Err(RosterError::RequestFailed { endpoint, reason }),
    }
}
