//! Authenticity checker backed by a rugcheck-style scoring service.
//!
//! API: `GET {base_url}/api/check/{address}`
//! Response: `{ "score": <number>, "is_bundle": <bool> }`
//!
//! A token is `Trusted` only when the score is strictly above
//! [`SCORE_THRESHOLD`] AND the service does not flag it as a bundle
//! (one deployer controlling several wallets to fake organic trading).
//! Any failure — transport, timeout, non-2xx, unparsable body — yields
//! `Untrusted`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{AuthVerdict, AuthenticityCheck, CheckError};

/// Minimum score (exclusive) for a token to be considered trustworthy.
const SCORE_THRESHOLD: f64 = 80.0;

/// Per-call timeout; a stalled scoring service must not stall the poll loop.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct RugcheckResponse {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    is_bundle: bool,
}

/// Client for the authenticity scoring service.
pub struct RugcheckClient {
    http: Client,
    base_url: String,
}

impl RugcheckClient {
    pub fn new(base_url: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent("SENTINEL/0.1.0")
            .build()?;
        Ok(Self { http, base_url })
    }

    async fn query(&self, address: &str) -> Result<RugcheckResponse, CheckError> {
        let url = format!("{}/api/check/{}", self.base_url, address);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(CheckError::Transport)?;

        if !resp.status().is_success() {
            return Err(CheckError::Status(resp.status()));
        }

        resp.json::<RugcheckResponse>()
            .await
            .map_err(|e| CheckError::Malformed(e.to_string()))
    }

    fn verdict(report: &RugcheckResponse) -> AuthVerdict {
        if report.score > SCORE_THRESHOLD && !report.is_bundle {
            AuthVerdict::Trusted
        } else {
            AuthVerdict::Untrusted
        }
    }
}

#[async_trait]
impl AuthenticityCheck for RugcheckClient {
    async fn check(&self, address: &str) -> AuthVerdict {
        match self.query(address).await {
            Ok(report) => {
                let verdict = Self::verdict(&report);
                debug!(
                    address,
                    score = report.score,
                    is_bundle = report.is_bundle,
                    ?verdict,
                    "Rugcheck verdict"
                );
                verdict
            }
            Err(e) => {
                // Fail closed: an unscoreable token is an untrusted token.
                warn!(address, error = %e, "Rugcheck unavailable, treating as untrusted");
                AuthVerdict::Untrusted
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
