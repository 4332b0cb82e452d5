//! Owned view of the employee list, rebuilt wholesale from each load.

use chrono::{DateTime, Local};

use crate::types::Record;

/// One rendered entry. Carries the record its delete control removes.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub role: String,
    pub record: Record,
}

impl From<Record> for Row {
    fn from(record: Record) -> Self {
        Self {
            name: record.full_name(),
            role: record.role.clone(),
            record,
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    rows: Vec<Row>,
    /// Sequence number of the load that produced `rows`; 0 before the first.
    sequence: u64,
    refreshed_at: Option<DateTime<Local>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with the given records, keeping server order.
    pub fn rebuild(&mut self, sequence: u64, records: Vec<Record>) {
        self.rows = records.into_iter().map(Row::from).collect();
        self.sequence = sequence;
        self.refreshed_at = Some(Local::now());
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.refreshed_at
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row whose record id renders as `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.record.id.to_string() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordId;
    use serde_json::json;

    fn record(id: i64, first: &str, last: &str, role: &str) -> Record {
        Record {
            id: RecordId(json!(id)),
            first_name: first.to_string(),
            last_name: last.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_new_view_is_empty() {
        let view = ViewState::new();
        assert!(view.is_empty());
        assert_eq!(view.sequence(), 0);
        assert!(view.refreshed_at().is_none());
    }

    #[test]
    fn test_rebuild_replaces_all_rows() {
        let mut view = ViewState::new();
        view.rebuild(1, vec![record(1, "Ada", "Lovelace", "Engineer")]);
        view.rebuild(
            2,
            vec![
                record(2, "Grace", "Hopper", "Admiral"),
                record(3, "Alan", "Turing", "Researcher"),
            ],
        );

        assert_eq!(view.len(), 2);
        assert_eq!(view.sequence(), 2);
        assert_eq!(view.rows()[0].name, "Grace Hopper");
        assert_eq!(view.rows()[1].role, "Researcher");
        assert!(view.find_by_id("1").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let mut view = ViewState::new();
        view.rebuild(1, vec![record(9, "Ada", "Lovelace", "Engineer")]);

        let row = view.find_by_id("9").unwrap();
        assert_eq!(row.record.first_name, "Ada");
        assert!(view.row(1).is_none());
    }
}
