use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{RosterError, Result};
use crate::responses::{CollectionResponse, MutationResponse};
use crate::types::{NewRecord, Record};

pub struct RosterClient {
    http: Client,
    endpoint: Url,
}

/// Status and message of a create or delete call.
#[derive(Debug)]
pub struct MutationReply {
    pub status: StatusCode,
    pub message: Option<String>,
}

impl MutationReply {
    /// The endpoint signals success with exactly 200.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

impl RosterClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn fetch_all(&self) -> Result<Vec<Record>> {
        debug!(endpoint = %self.endpoint, "GET collection");
        let response = self.http.get(self.endpoint.clone()).send().await?;

        // Any non-2xx load is a failure, even if the body still lists users.
        if !response.status().is_success() {
            return Err(RosterError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body: CollectionResponse = response.json().await?;
        if let Some(message) = &body.message {
            debug!(server_message = %message, count = body.users.len(), "collection received");
        }
        Ok(body.users)
    }

    pub async fn create(&self, record: &NewRecord) -> Result<MutationReply> {
        self.mutate(Method::POST, record).await
    }

    /// Deletes by sending the full record, id included.
    pub async fn delete(&self, record: &Record) -> Result<MutationReply> {
        self.mutate(Method::DELETE, record).await
    }

    async fn mutate<B: Serialize>(&self, method: Method, body: &B) -> Result<MutationReply> {
        debug!(method = method.as_str(), endpoint = %self.endpoint, "sending mutation");
        let response = self
            .http
            .request(method, self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let body: MutationResponse = response.json().await?;
        if let Some(received) = &body.received_data {
            debug!(%received, "server echoed rejected payload");
        }

        Ok(MutationReply {
            status,
            message: body.message,
        })
    }
}
