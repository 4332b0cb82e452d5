use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier. Kept as raw JSON so it is echoed back
/// exactly as the server sent it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct RecordId(pub serde_json::Value);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Record {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create payload; the server assigns the id.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}
