//! Screening engine.
//!
//! `pipeline` holds the candidate evaluation pipeline (the core of the
//! system); `trade` and `monitor` are explicit not-yet-implemented
//! capabilities kept as no-op stubs.

pub mod monitor;
pub mod pipeline;
pub mod trade;

use crate::types::{Decision, RejectReason};

/// Per-cycle counters for the summary log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleStats {
    pub fetched: usize,
    pub filtered: usize,
    pub denylisted: usize,
    pub untrusted: usize,
    pub accepted: usize,
    pub errors: usize,
}

impl CycleStats {
    /// Fold one pipeline decision into the counters.
    pub fn record(&mut self, decision: &Decision) {
        match decision {
            Decision::Accepted => self.accepted += 1,
            Decision::Rejected(RejectReason::FakeVolume) => self.denylisted += 1,
            Decision::Rejected(RejectReason::Untrusted) => self.untrusted += 1,
            Decision::Rejected(_) => self.filtered += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_record() {
        let mut stats = CycleStats::default();
        stats.record(&Decision::Accepted);
        stats.record(&Decision::Rejected(RejectReason::LowLiquidity));
        stats.record(&Decision::Rejected(RejectReason::TokenDenylisted));
        stats.record(&Decision::Rejected(RejectReason::FakeVolume));
        stats.record(&Decision::Rejected(RejectReason::Untrusted));

        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.filtered, 2);
        assert_eq!(stats.denylisted, 1);
        assert_eq!(stats.untrusted, 1);
    }
}
