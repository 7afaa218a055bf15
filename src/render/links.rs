// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block-explorer link construction.

/// Builds mintscan.io URLs for a configured project.
#[derive(Debug, Clone)]
pub struct ExplorerLinks {
    project: String,
}

impl ExplorerLinks {
    /// Create a link builder for the given mintscan project slug.
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
        }
    }

    fn join(&self, suffix: &str) -> String {
        format!("https://mintscan.io/{}/{}", self.project, suffix)
    }

    /// Link to a transaction by hash.
    pub fn tx(&self, hash: &str) -> String {
        self.join(&format!("txs/{hash}"))
    }

    /// Link to a block by height.
    pub fn block(&self, height: u64) -> String {
        self.join(&format!("blocks/{height}"))
    }

    /// Link to an account page.
    pub fn account(&self, address: &str) -> String {
        self.join(&format!("account/{address}"))
    }

    /// Link to a validator page.
    pub fn validator(&self, address: &str) -> String {
        self.join(&format!("validators/{address}"))
    }

    /// Link to the proposals overview.
    pub fn proposals(&self) -> String {
        self.join("proposals")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        let links = ExplorerLinks::new("cosmos");
        assert_eq!(links.tx("ABCD"), "https://mintscan.io/cosmos/txs/ABCD");
        assert_eq!(links.block(42), "https://mintscan.io/cosmos/blocks/42");
        assert_eq!(
            links.account("cosmos1xyz"),
            "https://mintscan.io/cosmos/account/cosmos1xyz"
        );
        assert_eq!(
            links.validator("cosmosvaloper1xyz"),
            "https://mintscan.io/cosmos/validators/cosmosvaloper1xyz"
        );
    }
}
