use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Duration, Utc};
use crate::api::endpoints::DATA_DRAGON_VERSION;
use crate::api::models::DataDragonChampions;
use crate::error::AppError;
use tracing::{debug, warn};

const CATALOG_FILE: &str = "champions.json";
pub const MAX_AGE_DAYS: i64 = 7;

/// Champion key → display name, persisted between runs.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChampionCatalog {
    pub version: String,
    pub fetched_at: DateTime<Utc>,
    pub champions: HashMap<i64, String>,
}

impl ChampionCatalog {
    pub fn empty() -> Self {
        ChampionCatalog {
            version: String::new(),
            fetched_at: DateTime::<Utc>::default(),
            champions: HashMap::new(),
        }
    }

    /// Builds the catalog from Data Dragon's champion list. Entries with a
    /// non-numeric key are dropped.
    pub fn from_data_dragon(version: &str, data: DataDragonChampions) -> Self {
        let champions = data
            .data
            .into_values()
            .filter_map(|info| info.key.parse::<i64>().ok().map(|key| (key, info.name)))
            .collect();

        ChampionCatalog {
            version: version.to_string(),
            fetched_at: Utc::now(),
            champions,
        }
    }

    pub fn get_cache_path(cache_dir: &Path) -> PathBuf {
        cache_dir.join(CATALOG_FILE)
    }

    /// Returns `Ok(None)` when nothing has been cached yet.
    pub fn load(cache_dir: &Path) -> Result<Option<Self>, AppError> {
        let path = Self::get_cache_path(cache_dir);

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map(Some)
                .map_err(|e| AppError::CacheError(format!("Failed to parse champion cache: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::CacheError(format!("Failed to read champion cache: {}", e))),
        }
    }

    pub fn save(&self, cache_dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(cache_dir).map_err(|e| {
            AppError::CacheError(format!("Failed to create cache directory: {}", e))
        })?;

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::CacheError(format!("Failed to serialize champion cache: {}", e))
        })?;

        fs::write(Self::get_cache_path(cache_dir), json).map_err(|e| {
            AppError::CacheError(format!("Failed to write champion cache: {}", e))
        })
    }

    pub fn is_stale(&self, version: &str, max_age: Duration) -> bool {
        self.version != version
            || self.champions.is_empty()
            || Utc::now().signed_duration_since(self.fetched_at) > max_age
    }

    /// Uses the cached catalog while it is fresh, otherwise calls `fetch`.
    /// A failed fetch falls back to whatever was cached (possibly nothing);
    /// champion names are cosmetic and never fail a command.
    pub fn load_or_refresh<F>(cache_dir: &Path, force_refresh: bool, fetch: F) -> Self
    where
        F: FnOnce() -> Result<DataDragonChampions, AppError>,
    {
        let cached = match Self::load(cache_dir) {
            Ok(cached) => cached,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable champion cache");
                None
            }
        };

        if let Some(catalog) = &cached {
            if !force_refresh && !catalog.is_stale(DATA_DRAGON_VERSION, Duration::days(MAX_AGE_DAYS)) {
                debug!(champions = catalog.champions.len(), "using cached champion catalog");
                return catalog.clone();
            }
        }

        match fetch() {
            Ok(data) => {
                let catalog = Self::from_data_dragon(DATA_DRAGON_VERSION, data);
                if let Err(e) = catalog.save(cache_dir) {
                    warn!(error = %e, "could not save champion catalog");
                }
                catalog
            }
            Err(e) => {
                warn!(error = %e, "could not fetch champion catalog");
                cached.unwrap_or_else(Self::empty)
            }
        }
    }

    pub fn name_of(&self, champion_id: i64) -> String {
        self.champions
            .get(&champion_id)
            .cloned()
            .unwrap_or_else(|| format!("Champion {}", champion_id))
    }
}
