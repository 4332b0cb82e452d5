use crate::error::{RosterError, Result};
use crate::output;
use crate::sync::{ListSynchronizer, LoadOutcome};

pub async fn run(sync: &ListSynchronizer) -> Result<()> {
    if sync.load().await == LoadOutcome::Failed {
        return Err(RosterError::LoadFailed(sync.client().endpoint().to_string()));
    }

    output::print_view(&*sync.view().await);
    Ok(())
}
