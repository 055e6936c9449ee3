use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use opscal_core::Registry;

pub fn opscal_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".opscal"))
}

pub fn ensure_opscal_home() -> Result<PathBuf> {
    let dir = opscal_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn registry_path() -> Result<PathBuf> {
    Ok(ensure_opscal_home()?.join("tasks.v1.json"))
}

/// Load the persisted registry. An absent or unreadable file means an
/// empty registry, not an error; the next sync rebuilds the baseline.
pub fn load_registry() -> Result<Registry> {
    let p = registry_path()?;
    let Ok(raw) = fs::read_to_string(&p) else {
        return Ok(Registry::new());
    };
    Ok(serde_json::from_str(&raw).unwrap_or_default())
}

/// Persist the registry. A write failure downgrades to a warning: the
/// in-memory registry stays authoritative for the rest of the command.
pub fn save_registry(registry: &Registry) {
    let result = registry_path().and_then(|p| {
        let json = serde_json::to_string_pretty(registry).context("serialize registry")?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))
    });
    if let Err(e) = result {
        eprintln!("warning: task registry not saved: {e:#}");
    }
}

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
