use crate::error::AppError;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_REGION: &str = "br1";

/// Platform region (BR1, EUW1, ...) paired with the regional routing cluster
/// that serves account and match lookups for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    platform: &'static str,
    routing: &'static str,
}

const REGIONS: [Region; 11] = [
    Region { platform: "br1", routing: "americas" },
    Region { platform: "na1", routing: "americas" },
    Region { platform: "la1", routing: "americas" },
    Region { platform: "la2", routing: "americas" },
    Region { platform: "eun1", routing: "europe" },
    Region { platform: "euw1", routing: "europe" },
    Region { platform: "tr1", routing: "europe" },
    Region { platform: "ru", routing: "europe" },
    Region { platform: "jp1", routing: "asia" },
    Region { platform: "kr", routing: "asia" },
    Region { platform: "oc1", routing: "sea" },
];

impl Region {
    /// Host prefix for summoner, league and mastery endpoints.
    pub fn platform(&self) -> &'static str {
        self.platform
    }

    /// Host prefix for account and match endpoints.
    pub fn routing(&self) -> &'static str {
        self.routing
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        REGIONS
            .iter()
            .find(|r| r.platform == wanted)
            .copied()
            .ok_or_else(|| AppError::InvalidRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.platform.to_ascii_uppercase())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: Region,
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("RIOT_API_KEY").ok(),
            env::var("RIOT_REGION").ok(),
            env::var("RIFTMATE_CACHE_DIR").ok(),
        )
    }

    pub fn from_vars(
        api_key: Option<String>,
        region: Option<String>,
        cache_dir: Option<String>,
    ) -> Result<Self, AppError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("RIOT_API_KEY not found in environment or .env file".to_string())
            })?;

        let region = region.as_deref().unwrap_or(DEFAULT_REGION).parse()?;

        let cache_dir = cache_dir.map(PathBuf::from).unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".riftmate")
        });

        Ok(Config {
            api_key,
            region,
            cache_dir,
        })
    }
}
