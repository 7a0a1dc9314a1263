use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Riot API returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Invalid Riot ID '{0}'. Use format: Name#TAG")]
    InvalidRiotId(String),

    #[error("Invalid region '{0}'. Expected one of: BR1, NA1, LA1, LA2, EUN1, EUW1, TR1, RU, JP1, KR, OC1")]
    InvalidRegion(String),

    #[error("Unknown lane '{0}'. Expected TOP, JUNGLE, MID, ADC, SUPPORT or UNKNOWN")]
    InvalidLane(String),

    #[error("Riot ID '{0}' was not found")]
    PlayerNotFound(String),

    #[error("{0} exists but has no League of Legends profile in region {1}")]
    NoProfileInRegion(String, String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Status { code: 404, .. })
    }
}
