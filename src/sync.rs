//! Keeps the local view in step with the collection endpoint.
//!
//! Every mutation that the server accepts is followed by a full reload; there
//! is no optimistic update. Failures are logged and reported as outcomes,
//! never raised, so a failed request leaves the last good view in place.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::client::RosterClient;
use crate::types::{NewRecord, Record};
use crate::view::ViewState;

/// Something the user did.
#[derive(Debug, Clone)]
pub enum Event {
    PageLoad,
    Submit(NewRecord),
    DeleteClicked(Record),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied { rows: usize },
    /// A newer load already produced the current view.
    Stale,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Refreshed(LoadOutcome),
    Rejected { status: u16, message: Option<String> },
    /// Transport or decode failure, with its cause.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Load(LoadOutcome),
    Mutation(MutationOutcome),
}

pub struct ListSynchronizer {
    client: RosterClient,
    view: Mutex<ViewState>,
    issued: AtomicU64,
}

impl ListSynchronizer {
    pub fn new(client: RosterClient) -> Self {
        Self {
            client,
            view: Mutex::new(ViewState::new()),
            issued: AtomicU64::new(0),
        }
    }

    pub fn client(&self) -> &RosterClient {
        &self.client
    }

    pub async fn view(&self) -> MutexGuard<'_, ViewState> {
        self.view.lock().await
    }

    pub async fn handle(&self, event: Event) -> Outcome {
        match event {
            Event::PageLoad => Outcome::Load(self.load().await),
            Event::Submit(record) => Outcome::Mutation(self.create(&record).await),
            Event::DeleteClicked(record) => Outcome::Mutation(self.remove(&record).await),
        }
    }

    /// Fetch the whole collection and rebuild the view from it.
    ///
    /// The view is only touched once a response has been fully parsed, and
    /// only if no later load has been applied in the meantime.
    pub async fn load(&self) -> LoadOutcome {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(sequence, "load issued");

        let records = match self.client.fetch_all().await {
            Ok(records) => records,
            Err(e) => {
                error!(sequence, error = %e, "failed to load employee list");
                return LoadOutcome::Failed;
            }
        };

        let mut view = self.view.lock().await;
        if sequence <= view.sequence() {
            warn!(
                sequence,
                current = view.sequence(),
                "discarding stale load response"
            );
            return LoadOutcome::Stale;
        }

        let rows = records.len();
        view.rebuild(sequence, records);
        info!(sequence, rows, "employee list refreshed");
        LoadOutcome::Applied { rows }
    }

    pub async fn create(&self, record: &NewRecord) -> MutationOutcome {
        match self.client.create(record).await {
            Ok(reply) if reply.is_ok() => {
                info!(reply = ?reply.message, "employee added");
                MutationOutcome::Refreshed(self.load().await)
            }
            Ok(reply) => {
                warn!(status = reply.status.as_u16(), reply = ?reply.message, "create rejected");
                MutationOutcome::Rejected {
                    status: reply.status.as_u16(),
                    message: reply.message,
                }
            }
            Err(e) => {
                error!(error = %e, "failed to add employee");
                MutationOutcome::Failed(e.to_string())
            }
        }
    }

    pub async fn remove(&self, record: &Record) -> MutationOutcome {
        match self.client.delete(record).await {
            Ok(reply) if reply.is_ok() => {
                info!(id = %record.id, reply = ?reply.message, "employee removed");
                MutationOutcome::Refreshed(self.load().await)
            }
            Ok(reply) => {
                warn!(
                    id = %record.id,
                    status = reply.status.as_u16(),
                    reply = ?reply.message,
                    "delete rejected"
                );
                MutationOutcome::Rejected {
                    status: reply.status.as_u16(),
                    message: reply.message,
                }
            }
            Err(e) => {
                error!(id = %record.id, error = %e, "failed to remove employee");
                MutationOutcome::Failed(e.to_string())
            }
        }
    }
}
