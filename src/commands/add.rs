use crate::cli::AddArgs;
use crate::error::Result;
use crate::sync::ListSynchronizer;
use crate::types::NewRecord;

use super::report_mutation;

pub async fn run(sync: &ListSynchronizer, args: AddArgs) -> Result<()> {
    let record = NewRecord {
        first_name: args.first_name,
        last_name: args.last_name,
        role: args.role,
    };
    let success = format!("Added {} {}", record.first_name, record.last_name);

    let outcome = sync.create(&record).await;
    report_mutation(sync, outcome, &success).await
}
