//! # wasp-client -- HTTP storage gateway
//!
//! Implements [`wasp_core::StorageGateway`] over HTTP with `reqwest`.
//!
//! Each write is a `PUT` to `<origin>/space/<uuid>/resource/<name>` carrying
//! the file's bytes, a `Content-Type` when one is known, and an
//! `Authorization: Signature ...` header made by the space controller's key
//! (see [`signature`]).
//!
//! ## Failure Reporting
//!
//! Every HTTP response is returned as a [`PutOutcome`], whatever its status.
//! Transport failures are retried with backoff and then reported as
//! [`GatewayError::Transport`].

pub mod config;
pub mod error;
pub(crate) mod retry;
pub mod signature;

pub use config::StorageConfig;
pub use error::ClientError;

use std::time::Duration;

use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use wasp_core::{GatewayError, PutOutcome, PutRequest, SpaceHandle, StorageGateway};

use crate::signature::{authorization_header, SignatureInput};

/// Storage gateway backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    config: StorageConfig,
}

impl StorageClient {
    pub fn new(config: StorageConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| ClientError::Http { source })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl StorageGateway for StorageClient {
    async fn put(
        &self,
        space: &SpaceHandle,
        request: PutRequest<'_>,
    ) -> Result<PutOutcome, GatewayError> {
        let url = space.resource_url(request.resource)?;
        let target = url.to_string();

        let response = retry::retry_send(self.config.max_retries, &target, || {
            let input = SignatureInput::new("PUT", &url, Utc::now());
            let mut builder = self
                .http
                .put(url.clone())
                .header(AUTHORIZATION, authorization_header(space.identity(), &input))
                .body(request.body.clone());
            if let Some(media_type) = request.media_type {
                builder = builder.header(CONTENT_TYPE, media_type.to_string());
            }
            builder.send()
        })
        .await
        .map_err(|e| {
            if e.is_builder() {
                GatewayError::Request {
                    resource: target.clone(),
                    reason: e.to_string(),
                }
            } else {
                GatewayError::Transport {
                    resource: target.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        tracing::debug!(url = %target, status, "storage responded");
        Ok(PutOutcome { status })
    }
}
