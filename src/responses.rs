//! Wire bodies returned by the collection endpoint.

use serde::Deserialize;

use crate::types::Record;

/// Body of `GET /`.
#[derive(Deserialize, Debug)]
pub struct CollectionResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub users: Vec<Record>,
}

/// Body of `POST /` and `DELETE /`, success or failure.
#[derive(Deserialize, Debug, Default)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub received_data: Option<serde_json::Value>,
}
