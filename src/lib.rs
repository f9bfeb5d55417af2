//! SENTINEL — Autonomous DEX New-Pair Screener
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod denylist;
pub mod feed;
pub mod risk;
pub mod ledger;
pub mod notify;
pub mod engine;
