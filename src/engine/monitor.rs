//! Rug monitor.
//!
//! Placeholder for the rug-detection routine that will watch recorded
//! tokens for liquidity withdrawal and price collapse, flipping the
//! `is_rug`/`is_pump` flags in the ledger. Nothing is implemented yet;
//! the per-cycle call is a deliberate no-op.

use anyhow::Result;
use tracing::debug;

/// Not-yet-implemented rug detection. No-op contract: logs and returns.
pub struct RugMonitor;

impl RugMonitor {
    pub fn new() -> Self {
        Self
    }

    pub async fn scan(&self) -> Result<()> {
        debug!("Rug monitoring not implemented, skipping");
        Ok(())
    }
}

impl Default for RugMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scan_is_noop() {
        assert!(RugMonitor::new().scan().await.is_ok());
    }
}
