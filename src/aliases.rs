// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! User-assigned address labels.
//!
//! The directory is read by the pipeline's rendering step and written by the
//! chat command surface, which runs concurrently; all access goes through an
//! internal lock, and callers never assume exclusive access.
//!
//! Labels persist as a TOML file so they survive restarts. A missing file is
//! created on first load; a directory constructed with [`disabled`] serves no
//! labels and ignores writes.
//!
//! [`disabled`]: AliasDirectory::disabled

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::ConfigError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct AliasFile {
    #[serde(default)]
    wallets: HashMap<String, String>,
}

/// Concurrency-safe address → label store.
pub struct AliasDirectory {
    labels: RwLock<HashMap<String, String>>,
    path: Option<PathBuf>,
}

impl AliasDirectory {
    /// A directory that serves no labels and ignores writes.
    pub fn disabled() -> Self {
        info!("Alias store path not provided, aliases are disabled");
        Self {
            labels: RwLock::new(HashMap::new()),
            path: None,
        }
    }

    /// Load the directory from `path`, creating an empty file if none exists.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            info!(path = %path.display(), "Alias store does not exist, creating");
            std::fs::write(path, "").map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: AliasFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(count = file.wallets.len(), "Alias store loaded");
        Ok(Self {
            labels: RwLock::new(file.wallets),
            path: Some(path.to_path_buf()),
        })
    }

    /// Whether the directory is backed by a store.
    pub fn enabled(&self) -> bool {
        self.path.is_some()
    }

    /// The label assigned to `address`, if any.
    pub fn lookup(&self, address: &str) -> Option<String> {
        if self.path.is_none() {
            return None;
        }
        self.labels.read().expect("alias lock poisoned").get(address).cloned()
    }

    /// Assign `label` to `address`, replacing any previous label.
    pub fn set(&self, address: &str, label: &str) {
        if self.path.is_none() {
            debug!("Alias store disabled, ignoring set");
            return;
        }
        self.labels
            .write()
            .expect("alias lock poisoned")
            .insert(address.to_string(), label.to_string());
        self.persist();
    }

    /// Remove the label for `address`. Returns whether one was present.
    pub fn clear(&self, address: &str) -> bool {
        if self.path.is_none() {
            debug!("Alias store disabled, ignoring clear");
            return false;
        }
        let removed = self
            .labels
            .write()
            .expect("alias lock poisoned")
            .remove(address)
            .is_some();
        if removed {
            self.persist();
        }
        removed
    }

    /// All labels, sorted by address.
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .labels
            .read()
            .expect("alias lock poisoned")
            .iter()
            .map(|(a, l)| (a.clone(), l.clone()))
            .collect();
        entries.sort();
        entries
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let file = AliasFile {
            wallets: self.labels.read().expect("alias lock poisoned").clone(),
        };

        match toml::to_string_pretty(&file) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(path, contents) {
                    warn!(path = %path.display(), error = %e, "Could not save alias store");
                }
            }
            Err(e) => warn!(error = %e, "Could not serialize alias store"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_directory_serves_nothing() {
        let dir = AliasDirectory::disabled();
        dir.set("cosmos1xyz", "alice");
        assert_eq!(dir.lookup("cosmos1xyz"), None);
        assert!(!dir.enabled());
    }

    #[test]
    fn test_set_lookup_clear() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let dir = AliasDirectory::load(file.path()).unwrap();

        dir.set("cosmos1xyz", "alice");
        assert_eq!(dir.lookup("cosmos1xyz"), Some("alice".to_string()));

        assert!(dir.clear("cosmos1xyz"));
        assert_eq!(dir.lookup("cosmos1xyz"), None);
        assert!(!dir.clear("cosmos1xyz"));
    }

    #[test]
    fn test_labels_persist_across_loads() {
        let file = tempfile::NamedTempFile::new().unwrap();

        {
            let dir = AliasDirectory::load(file.path()).unwrap();
            dir.set("cosmos1xyz", "alice");
            dir.set("cosmos1abc", "bob");
        }

        let reloaded = AliasDirectory::load(file.path()).unwrap();
        assert_eq!(reloaded.lookup("cosmos1xyz"), Some("alice".to_string()));
        assert_eq!(
            reloaded.list(),
            vec![
                ("cosmos1abc".to_string(), "bob".to_string()),
                ("cosmos1xyz".to_string(), "alice".to_string()),
            ]
        );
    }
}
