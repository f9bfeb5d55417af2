//! DexScreener new-pairs feed client.
//!
//! API: `GET {endpoint}?limit={n}`
//! Response: `{ "pairs": [ { baseToken, creator, liquidity, volume,
//! pairCreatedAt, priceUsd }, ... ] }`
//!
//! We only deserialize the fields we need. Pairs missing an address or a
//! creator are dropped with a warning rather than failing the whole batch.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::MarketFeed;
use crate::types::PairCandidate;

const FEED_NAME: &str = "dexscreener";

/// Per-call timeout for the feed fetch.
const REQUEST_TIMEOUT_SECS: u64 = 15;

// ---------------------------------------------------------------------------
// API response types (DexScreener JSON → Rust)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct NewPairsResponse {
    #[serde(default)]
    pairs: Vec<RawPair>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPair {
    #[serde(default)]
    base_token: RawToken,
    #[serde(default)]
    creator: String,
    #[serde(default)]
    liquidity: RawLiquidity,
    #[serde(default)]
    volume: RawVolume,
    /// Pair creation timestamp, epoch milliseconds.
    #[serde(default)]
    pair_created_at: i64,
    /// Price as a decimal string, e.g. "0.005".
    #[serde(default)]
    price_usd: String,
}

#[derive(Debug, Deserialize, Default)]
struct RawToken {
    #[serde(default)]
    address: String,
    #[serde(default)]
    symbol: String,
}

#[derive(Debug, Deserialize, Default)]
struct RawLiquidity {
    #[serde(default)]
    usd: f64,
}

#[derive(Debug, Deserialize, Default)]
struct RawVolume {
    #[serde(default)]
    h24: f64,
}

impl RawPair {
    fn into_candidate(self) -> Option<PairCandidate> {
        // Addresses are the identity of everything downstream; a pair
        // without them is unusable.
        if self.base_token.address.is_empty() || self.creator.is_empty() {
            return None;
        }
        Some(PairCandidate {
            address: self.base_token.address,
            symbol: self.base_token.symbol,
            creator: self.creator,
            liquidity_usd: self.liquidity.usd,
            volume_h24: self.volume.h24,
            created_at_ms: self.pair_created_at,
            price_usd: self.price_usd,
        })
    }
}

fn parse_pairs(body: NewPairsResponse) -> Vec<PairCandidate> {
    let total = body.pairs.len();
    let candidates: Vec<PairCandidate> = body
        .pairs
        .into_iter()
        .filter_map(RawPair::into_candidate)
        .collect();

    if candidates.len() < total {
        warn!(
            dropped = total - candidates.len(),
            "Feed returned pairs with missing addresses, dropped"
        );
    }
    candidates
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// DexScreener feed client.
pub struct DexScreenerClient {
    http: Client,
    endpoint: String,
}

impl DexScreenerClient {
    pub fn new(endpoint: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent("SENTINEL/0.1.0")
            .build()
            .context("Failed to build feed HTTP client")?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl MarketFeed for DexScreenerClient {
    async fn fetch_new_pairs(&self, limit: u32) -> Result<Vec<PairCandidate>> {
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("limit", limit)])
            .send()
            .await
            .context("DexScreener request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            anyhow::bail!("DexScreener API error: {status}");
        }

        let body: NewPairsResponse = resp
            .json()
            .await
            .context("Failed to parse DexScreener response")?;

        let candidates = parse_pairs(body);
        debug!(count = candidates.len(), "New pairs fetched");
        Ok(candidates)
    }

    fn name(&self) -> &str {
        FEED_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
