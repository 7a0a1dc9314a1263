use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// A Riot ID such as `Faker#KR1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotId {
    type Err = AppError;

    /// Splits at the last `#` so game names containing `#` still parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (game_name, tag_line) = s
            .rsplit_once('#')
            .ok_or_else(|| AppError::InvalidRiotId(s.to_string()))?;

        let game_name = game_name.trim();
        let tag_line = tag_line.trim();
        if game_name.is_empty() || tag_line.is_empty() {
            return Err(AppError::InvalidRiotId(s.to_string()));
        }

        Ok(RiotId {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}
