use crate::api::RosterApi;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";

pub struct RosterContext {
    pub api: RosterApi<InMemoryStore>,
    pub config: RosterConfig,
}

/// Picks the config directory: explicit path, then `ROSTER_CONFIG_DIR`, then
/// the platform config dir.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine config dir".to_string()))
}

/// Builds a store holding `names` in order. Blank names are skipped.
pub fn seeded_store<N: AsRef<str>>(names: &[N]) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    for name in names {
        if store.add(name.as_ref()).is_err() {
            warn!("skipping blank seed entry");
        }
    }
    store
}

pub fn initialize(config_dir: PathBuf, seed: bool) -> Result<RosterContext> {
    let config = RosterConfig::load(&config_dir)?;
    let store = if seed {
        seeded_store(&config.seed)
    } else {
        InMemoryStore::new()
    };
    info!(
        config_dir = %config_dir.display(),
        records = store.len(),
        "roster initialized"
    );

    Ok(RosterContext {
        api: RosterApi::new(store, config_dir),
        config,
    })
}
