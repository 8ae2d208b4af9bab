//! On-disk layout under the kith home directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Env var that overrides the default `$HOME/.kith` location.
pub const HOME_ENV: &str = "KITH_HOME";

/// Root of the local state: config plus the friend store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KithHome {
    root: PathBuf,
}

impl KithHome {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$KITH_HOME` if set, else `$HOME/.kith`.
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(dir));
        }
        let home = std::env::var_os("HOME").context("neither KITH_HOME nor HOME is set")?;
        Ok(Self::new(PathBuf::from(home).join(".kith")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory tree on first write.
    pub fn ensure(&self) -> Result<&Self> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("create {}", self.root.display()))?;
        Ok(self)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn friends_path(&self) -> PathBuf {
        self.root.join("friends.json")
    }
}
