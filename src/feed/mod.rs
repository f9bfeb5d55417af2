//! Market feed.
//!
//! Defines the `MarketFeed` trait and the DexScreener implementation.
//! The feed is a pure I/O boundary: it fetches recently created pairs and
//! converts them into `PairCandidate`s, nothing more. All screening logic
//! lives in the evaluation pipeline.

pub mod dexscreener;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::PairCandidate;

/// Source of newly created trading pairs.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Fetch up to `limit` recently created pairs, in feed order.
    async fn fetch_new_pairs(&self, limit: u32) -> Result<Vec<PairCandidate>>;

    /// Feed name for logging.
    fn name(&self) -> &str;
}
