//! Candidate evaluation pipeline.
//!
//! Turns one `PairCandidate` into an accept/reject decision by applying,
//! in a fixed short-circuiting order:
//!
//! 1. Static filter — denylists and liquidity/volume/age thresholds.
//!    Cheap, local, no side effects; failing candidates never reach the
//!    network checks.
//! 2. Fake-volume check — the only step that mutates the denylist: a
//!    `Fake` verdict blocks the token address for the rest of the run.
//! 3. Authenticity check — a non-`Trusted` verdict rejects without any
//!    denylist mutation (untrusted is not provably fraudulent).
//! 4. Accept — upsert the token record, send the buy notification, and
//!    hand the pair to the (stubbed) trade executor.
//!
//! A ledger write failure surfaces as a per-candidate error; notification
//! failures are absorbed by the notifier itself.

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::FilterConfig;
use crate::denylist::Denylist;
use crate::ledger::TokenLedger;
use crate::notify::Notifier;
use crate::risk::{AuthVerdict, AuthenticityCheck, FakeVolumeCheck, VolumeVerdict};
use crate::types::{Decision, PairCandidate, RejectReason, TokenRecord};

use super::trade::TradeExecutor;

/// The evaluation pipeline and its collaborators.
///
/// Owns the denylist so that mutations from one candidate are visible to
/// every later candidate in the same batch. Evaluation is sequential;
/// `evaluate` takes `&mut self` and there is no concurrent caller.
pub struct Evaluator {
    filters: FilterConfig,
    denylist: Denylist,
    volume_check: Box<dyn FakeVolumeCheck>,
    auth_check: Box<dyn AuthenticityCheck>,
    ledger: Box<dyn TokenLedger>,
    notifier: Box<dyn Notifier>,
    trader: TradeExecutor,
}

impl Evaluator {
    pub fn new(
        filters: FilterConfig,
        denylist: Denylist,
        volume_check: Box<dyn FakeVolumeCheck>,
        auth_check: Box<dyn AuthenticityCheck>,
        ledger: Box<dyn TokenLedger>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            filters,
            denylist,
            volume_check,
            auth_check,
            ledger,
            notifier,
            trader: TradeExecutor::new(),
        }
    }

    /// Read access to the denylist (reporting and tests).
    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Run one candidate through the full pipeline.
    ///
    /// Returns `Err` only for a ledger write failure; the caller logs it
    /// and moves on to the next candidate.
    pub async fn evaluate(&mut self, pair: &PairCandidate) -> Result<Decision> {
        if let Some(reason) = self.static_filter(pair) {
            debug!(address = %pair.address, ?reason, "Rejected by static filter");
            return Ok(Decision::Rejected(reason));
        }

        if self.volume_check.check(&pair.address).await == VolumeVerdict::Fake {
            self.denylist.block_token(&pair.address);
            info!(
                address = %pair.address,
                symbol = %pair.symbol,
                "Fake volume detected, token denylisted"
            );
            return Ok(Decision::Rejected(RejectReason::FakeVolume));
        }

        if self.auth_check.check(&pair.address).await != AuthVerdict::Trusted {
            debug!(address = %pair.address, "Authenticity check failed");
            return Ok(Decision::Rejected(RejectReason::Untrusted));
        }

        self.accept(pair).await?;
        Ok(Decision::Accepted)
    }

    /// Cheap local disqualification, evaluated before any network call.
    /// First failing condition wins; later conditions are not evaluated.
    fn static_filter(&self, pair: &PairCandidate) -> Option<RejectReason> {
        if self.denylist.is_token_blocked(&pair.address) {
            return Some(RejectReason::TokenDenylisted);
        }
        if self.denylist.is_creator_blocked(&pair.creator) {
            return Some(RejectReason::CreatorDenylisted);
        }
        if pair.liquidity_usd <= self.filters.min_liquidity {
            return Some(RejectReason::LowLiquidity);
        }
        if pair.volume_h24 <= self.filters.min_volume {
            return Some(RejectReason::LowVolume);
        }

        let age_secs = (Utc::now().timestamp_millis() - pair.created_at_ms) as f64 / 1000.0;
        if age_secs >= self.filters.max_age_secs {
            return Some(RejectReason::TooOld);
        }

        None
    }

    async fn accept(&mut self, pair: &PairCandidate) -> Result<()> {
        let record = TokenRecord::from_candidate(pair, Utc::now().timestamp());
        self.ledger.upsert(&record).await?;

        info!(
            address = %pair.address,
            symbol = %pair.symbol,
            price = %pair.price_usd,
            liquidity = pair.liquidity_usd,
            "Candidate accepted"
        );

        let message = format!("🚀 Buy {} at {}", pair.symbol, pair.price_usd);
        self.notifier.notify(&message).await;

        if let Err(e) = self.trader.execute(pair).await {
            // The executor is a stub today; keep accepted candidates even
            // if a future implementation fails here.
            warn!(address = %pair.address, error = %e, "Trade execution failed");
        }

        Ok(())
    }
}
