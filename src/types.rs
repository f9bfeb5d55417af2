//! Core domain types shared across modules.

use serde::{Deserialize, Serialize};

/// A newly created trading pair as reported by the market feed.
///
/// Addresses are opaque identifier strings; the screener never interprets
/// them beyond equality. Liquidity and volume are in USD. The price is kept
/// as the feed's string representation so notifications show exactly what
/// the feed reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairCandidate {
    /// Base token address (the new token being listed).
    pub address: String,
    pub symbol: String,
    /// Address of the wallet that created the pair.
    pub creator: String,
    pub liquidity_usd: f64,
    pub volume_h24: f64,
    /// Pair creation time, epoch milliseconds.
    pub created_at_ms: i64,
    pub price_usd: String,
}

/// The persisted record for a token that passed the full pipeline.
///
/// One row per address; writes are replace-on-conflict. The rug/pump flags
/// are always false at write time — flipping them is the job of a future
/// monitoring routine that is not implemented yet.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    pub address: String,
    pub symbol: String,
    /// Pair creation time, epoch milliseconds (as reported by the feed).
    pub created_at: i64,
    /// Last observed 24h volume in USD.
    pub volume: f64,
    pub is_rug: bool,
    pub is_pump: bool,
    pub dev_address: String,
    /// Wall-clock time of the write, epoch seconds.
    pub last_checked: i64,
}

impl TokenRecord {
    /// Build a record from an accepted candidate. `now_secs` is the
    /// wall-clock write time.
    pub fn from_candidate(pair: &PairCandidate, now_secs: i64) -> Self {
        Self {
            address: pair.address.clone(),
            symbol: pair.symbol.clone(),
            created_at: pair.created_at_ms,
            volume: pair.volume_h24,
            is_rug: false,
            is_pump: false,
            dev_address: pair.creator.clone(),
            last_checked: now_secs,
        }
    }
}

/// Outcome of running one candidate through the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected(RejectReason),
}

/// Why a candidate was rejected. Only `FakeVolume` has a side effect
/// (the token address joins the denylist); every other reason is silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TokenDenylisted,
    CreatorDenylisted,
    LowLiquidity,
    LowVolume,
    TooOld,
    FakeVolume,
    Untrusted,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pair() -> PairCandidate {
        PairCandidate {
            address: "TokenAddr111".into(),
            symbol: "FOO".into(),
            creator: "DevAddr222".into(),
            liquidity_usd: 5000.0,
            volume_h24: 2000.0,
            created_at_ms: 1_700_000_000_000,
            price_usd: "0.005".into(),
        }
    }

    #[test]
    fn test_record_from_candidate() {
        let pair = sample_pair();
        let rec = TokenRecord::from_candidate(&pair, 1_700_000_500);

        assert_eq!(rec.address, "TokenAddr111");
        assert_eq!(rec.symbol, "FOO");
        assert_eq!(rec.created_at, 1_700_000_000_000);
        assert_eq!(rec.volume, 2000.0);
        assert_eq!(rec.dev_address, "DevAddr222");
        assert_eq!(rec.last_checked, 1_700_000_500);
        assert!(!rec.is_rug);
        assert!(!rec.is_pump);
    }
}
