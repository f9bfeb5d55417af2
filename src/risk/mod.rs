//! Risk checkers.
//!
//! Two independently pluggable verdict sources consulted by the pipeline
//! after the static filter:
//! - Authenticity (rugcheck) — score/bundle based trust verdict.
//! - Fake volume (Pocker Universe) — liquidity-authenticity verdict.
//!
//! Both fail closed, but asymmetrically: an unreachable authenticity
//! service yields `Untrusted` (reject, no lasting mark), while an
//! unreachable fake-volume service yields `Fake` (reject AND denylist).
//! Uncertainty must never let a bad token through.

pub mod pocker;
pub mod rugcheck;

use async_trait::async_trait;
use thiserror::Error;

/// Verdict of the authenticity checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthVerdict {
    Trusted,
    Untrusted,
}

/// Verdict of the fake-volume checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeVerdict {
    Genuine,
    Fake,
}

/// Failure modes of a risk-service call. Every variant maps to the same
/// pessimistic verdict within a given checker; the taxonomy exists so logs
/// distinguish an unreachable service from one returning garbage.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("service returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Authenticity verdict source. Implementations must not error: transport
/// or parse failures map to `Untrusted` internally.
#[async_trait]
pub trait AuthenticityCheck: Send + Sync {
    async fn check(&self, address: &str) -> AuthVerdict;
}

/// Fake-volume verdict source. Implementations must not error: transport
/// or parse failures map to `Fake` internally.
#[async_trait]
pub trait FakeVolumeCheck: Send + Sync {
    async fn check(&self, address: &str) -> VolumeVerdict;
}
