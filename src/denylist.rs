//! Denylist store.
//!
//! Two sets of opaque identifiers: blocked token addresses and blocked
//! creator addresses. Loaded once at startup from newline-delimited files;
//! grown in memory during a run when the fake-volume checker condemns a
//! token. Additions are deliberately NOT written back to the source files —
//! a run's discoveries last for the process lifetime only.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// In-memory denylist of token and creator addresses.
#[derive(Debug, Default)]
pub struct Denylist {
    tokens: HashSet<String>,
    creators: HashSet<String>,
}

impl Denylist {
    /// Create an empty denylist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both lists from newline-delimited files. Blank lines are
    /// ignored; everything else is taken verbatim (addresses are opaque).
    pub fn load(token_path: &Path, creator_path: &Path) -> Result<Self> {
        let tokens = read_address_file(token_path)
            .with_context(|| format!("Failed to read token denylist: {}", token_path.display()))?;
        let creators = read_address_file(creator_path).with_context(|| {
            format!("Failed to read creator denylist: {}", creator_path.display())
        })?;

        info!(
            tokens = tokens.len(),
            creators = creators.len(),
            "Denylists loaded"
        );

        Ok(Self { tokens, creators })
    }

    pub fn is_token_blocked(&self, address: &str) -> bool {
        self.tokens.contains(address)
    }

    pub fn is_creator_blocked(&self, address: &str) -> bool {
        self.creators.contains(address)
    }

    /// Add a token address to the denylist for the remainder of the run.
    /// Returns true if the address was not already present.
    pub fn block_token(&mut self, address: &str) -> bool {
        let added = self.tokens.insert(address.to_string());
        if added {
            debug!(address, "Token added to denylist");
        }
        added
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

fn read_address_file(path: &Path) -> Result<HashSet<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("sentinel_test_{}_{}", uuid::Uuid::new_v4(), name));
        std::fs::write(&p, contents).unwrap();
        p
    }

    #[test]
    fn test_load_from_files() {
        let tokens = temp_file("tokens.txt", "AddrA\nAddrB\n\n  AddrC  \n");
        let creators = temp_file("creators.txt", "DevX\n");

        let list = Denylist::load(&tokens, &creators).unwrap();
        assert_eq!(list.token_count(), 3);
        assert!(list.is_token_blocked("AddrA"));
        assert!(list.is_token_blocked("AddrC"));
        assert!(!list.is_token_blocked("AddrZ"));
        assert!(list.is_creator_blocked("DevX"));
        assert!(!list.is_creator_blocked("AddrA"));

        std::fs::remove_file(tokens).unwrap();
        std::fs::remove_file(creators).unwrap();
    }

    #[test]
    fn test_load_missing_file_fails() {
        let tokens = PathBuf::from("/tmp/sentinel_does_not_exist_tokens.txt");
        let creators = PathBuf::from("/tmp/sentinel_does_not_exist_creators.txt");
        assert!(Denylist::load(&tokens, &creators).is_err());
    }

    #[test]
    fn test_block_token() {
        let mut list = Denylist::new();
        assert!(!list.is_token_blocked("Mint1"));

        assert!(list.block_token("Mint1"));
        assert!(list.is_token_blocked("Mint1"));

        // Re-blocking is a no-op
        assert!(!list.block_token("Mint1"));
        assert_eq!(list.token_count(), 1);
    }

    #[test]
    fn test_token_and_creator_sets_are_independent() {
        let mut list = Denylist::new();
        list.block_token("SharedAddr");
        assert!(list.is_token_blocked("SharedAddr"));
        assert!(!list.is_creator_blocked("SharedAddr"));
    }
}
