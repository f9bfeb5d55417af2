//! Token ledger.
//!
//! Persistent record of every token that passed the full pipeline, one row
//! per address. Writes are upserts with replace-on-conflict semantics (last
//! write wins, no field merging); there is no delete. The pipeline never
//! reads the table back — reporting over it is an external concern.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing::{debug, info};

use crate::types::TokenRecord;

/// Upsert-only persistence for accepted tokens.
#[async_trait]
pub trait TokenLedger: Send + Sync {
    /// Insert or replace the row for `record.address`.
    async fn upsert(&self, record: &TokenRecord) -> Result<()>;
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tokens (
    address TEXT PRIMARY KEY,
    symbol TEXT,
    created_at INTEGER,
    volume REAL,
    is_rug INTEGER,
    is_pump INTEGER,
    dev_address TEXT,
    last_checked INTEGER
)";

/// SQLite-backed ledger.
pub struct SqliteLedger {
    pool: SqlitePool,
}

impl SqliteLedger {
    /// Open (creating if missing) the database at `path` and ensure the
    /// schema exists.
    pub async fn open(path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("Failed to open token database: {path}"))?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .context("Failed to create tokens table")?;

        info!(path, "Token ledger ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl TokenLedger for SqliteLedger {
    async fn upsert(&self, record: &TokenRecord) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO tokens
             (address, symbol, created_at, volume, is_rug, is_pump, dev_address, last_checked)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&record.address)
        .bind(&record.symbol)
        .bind(record.created_at)
        .bind(record.volume)
        .bind(record.is_rug)
        .bind(record.is_pump)
        .bind(&record.dev_address)
        .bind(record.last_checked)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to upsert token {}", record.address))?;

        debug!(address = %record.address, symbol = %record.symbol, "Token recorded");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
