//! Trade executor.
//!
//! Placeholder for the external trade-execution integration (ToxiSol-style
//! Telegram trading API). Until that lands, accepting a candidate produces
//! a notification and a ledger row but no order.

use anyhow::Result;
use tracing::debug;

use crate::types::PairCandidate;

/// Not-yet-implemented trade execution. No-op contract: logs and returns.
pub struct TradeExecutor;

impl TradeExecutor {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, pair: &PairCandidate) -> Result<()> {
        debug!(
            address = %pair.address,
            symbol = %pair.symbol,
            "Trade execution not implemented, skipping"
        );
        Ok(())
    }
}

impl Default for TradeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_is_noop() {
        let trader = TradeExecutor::new();
        let pair = PairCandidate {
            address: "Mint111".into(),
            symbol: "FOO".into(),
            creator: "Dev111".into(),
            liquidity_usd: 5000.0,
            volume_h24: 2000.0,
            created_at_ms: 0,
            price_usd: "0.005".into(),
        };
        assert!(trader.execute(&pair).await.is_ok());
    }
}
