use crate::error::{RosterError, Result};
use crate::sync::{ListSynchronizer, LoadOutcome};

use super::report_mutation;

/// Delete needs the full record, so the list is loaded first to find it.
pub async fn run(sync: &ListSynchronizer, id: &str) -> Result<()> {
    if sync.load().await == LoadOutcome::Failed {
        return Err(RosterError::LoadFailed(sync.client().endpoint().to_string()));
    }

    let record = sync
        .view()
        .await
        .find_by_id(id)
        .map(|row| row.record.clone())
        .ok_or_else(|| RosterError::RecordNotFound(id.to_string()))?;

    let success = format!("Removed {} ({})", record.full_name(), record.id);
    let outcome = sync.remove(&record).await;
    report_mutation(sync, outcome, &success).await
}
