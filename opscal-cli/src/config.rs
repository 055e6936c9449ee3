use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_opscal_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub seed: SeedSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSection {
    /// Where `opscal sync` and `opscal assign` fetch cohorts and the
    /// assignee roster from.
    pub url: String,

    /// Seconds to wait for the seed before giving up. The fetch is never
    /// retried automatically.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: SeedSection {
                url: String::new(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_opscal_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}

/// The seed URL, or a pointer at the config file when it was never set.
pub fn require_seed_url(cfg: &Config) -> Result<String> {
    if cfg.seed.url.trim().is_empty() {
        anyhow::bail!("seed.url is not set; edit {}", config_path()?.display());
    }
    Ok(cfg.seed.url.clone())
}
