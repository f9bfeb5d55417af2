//! Fake-volume checker backed by a Pocker Universe-style
//! liquidity-authenticity service.
//!
//! API: `POST {api_url}` with body `{ "address": "<token>" }`
//! Response: `{ "fake_volume": <bool> }`
//!
//! Verdict mapping is stricter than the authenticity checker's: a token is
//! `Fake` when the service says so, AND when the service cannot be reached
//! or returns garbage. The pipeline denylists on `Fake`, so an outage here
//! blocks tokens rather than waving them through.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::{CheckError, FakeVolumeCheck, VolumeVerdict};

/// Per-call timeout; a stalled volume service must not stall the poll loop.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct PockerResponse {
    #[serde(default)]
    fake_volume: bool,
}

/// Client for the fake-volume detection service.
pub struct PockerClient {
    http: Client,
    api_url: String,
}

impl PockerClient {
    pub fn new(api_url: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent("SENTINEL/0.1.0")
            .build()?;
        Ok(Self { http, api_url })
    }

    async fn query(&self, address: &str) -> Result<PockerResponse, CheckError> {
        let resp = self
            .http
            .post(&self.api_url)
            .json(&json!({ "address": address }))
            .send()
            .await
            .map_err(CheckError::Transport)?;

        if !resp.status().is_success() {
            return Err(CheckError::Status(resp.status()));
        }

        resp.json::<PockerResponse>()
            .await
            .map_err(|e| CheckError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl FakeVolumeCheck for PockerClient {
    async fn check(&self, address: &str) -> VolumeVerdict {
        match self.query(address).await {
            Ok(report) => {
                let verdict = if report.fake_volume {
                    VolumeVerdict::Fake
                } else {
                    VolumeVerdict::Genuine
                };
                debug!(address, fake_volume = report.fake_volume, ?verdict, "Pocker verdict");
                verdict
            }
            Err(e) => {
                // Fail closed toward the stricter outcome: unverifiable
                // volume is treated as fraudulent, not as genuine.
                warn!(address, error = %e, "Pocker unavailable, treating volume as fake");
                VolumeVerdict::Fake
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
