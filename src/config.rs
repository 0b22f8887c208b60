//! Configuration loaded from `staffgen.toml`.
//!
//! [`StaffgenConfig`] holds the default generation parameters and optional
//! replacement name tables. Fields missing from the file fall back to
//! defaults. The `STAFFGEN_SEED` environment variable takes precedence over
//! the file's seed.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;

use crate::generator::{NameTables, TablesConfig};
use crate::model::{AgeRange, GenerationRequest};

pub const DEFAULT_CONFIG_FILE: &str = "staffgen.toml";
pub const SEED_ENV: &str = "STAFFGEN_SEED";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffgenConfig {
    /// Number of records when not given on the command line.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Age bounds when not given on the command line.
    #[serde(default = "default_age_range")]
    pub age_range: AgeRangeConfig,

    /// RNG seed; absent means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Replacement name tables.
    #[serde(default)]
    pub tables: Option<TablesConfig>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AgeRangeConfig {
    pub min_age: f64,
    pub max_age: f64,
}

fn default_count() -> usize {
    10
}

fn default_age_range() -> AgeRangeConfig {
    AgeRangeConfig {
        min_age: 19.0,
        max_age: 35.0,
    }
}

impl Default for StaffgenConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            age_range: default_age_range(),
            seed: None,
            tables: None,
        }
    }
}

impl StaffgenConfig {
    /// Loads `staffgen.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            debug!("loading config from {}", path.display());
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<StaffgenConfig>(&contents)
                .with_context(|| format!("parsing {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(raw) = std::env::var(SEED_ENV) {
            config.apply_seed_override(&raw);
        }

        Ok(config)
    }

    fn apply_seed_override(&mut self, raw: &str) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => self.seed = Some(seed),
            Err(_) if raw.trim().is_empty() => {}
            Err(e) => warn!("ignoring {SEED_ENV}={raw:?}: {e}"),
        }
    }

    /// The request described by this configuration alone.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            count: self.count,
            age_range: AgeRange {
                min_age: self.age_range.min_age,
                max_age: self.age_range.max_age,
            },
        }
    }

    /// Name tables from `[tables]`, or the built-in ones.
    pub fn name_tables(&self) -> Result<NameTables> {
        match &self.tables {
            Some(tables) => Ok(NameTables::try_from(tables.clone())?),
            None => Ok(NameTables::default()),
        }
    }
}
