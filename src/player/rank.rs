use crate::api::models::LeagueEntryDto;

pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";
pub const FLEX_QUEUE: &str = "RANKED_FLEX_SR";

#[derive(Debug, Clone, PartialEq)]
pub struct RankSummary {
    pub tier: String,
    pub division: String,
    pub league_points: i32,
    pub wins: u32,
    pub losses: u32,
}

impl RankSummary {
    pub fn from_entry(entry: &LeagueEntryDto) -> Self {
        RankSummary {
            tier: entry.tier.clone(),
            division: entry.rank.clone(),
            league_points: entry.league_points,
            wins: entry.wins,
            losses: entry.losses,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Percentage in 0..=100; 0 when no games were played.
    pub fn win_rate(&self) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games()) * 100.0
        }
    }

    /// "Gold II", "Master I", ...
    pub fn label(&self) -> String {
        let lower = self.tier.to_lowercase();
        let mut chars = lower.chars();
        let tier: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{} {}", tier, self.division)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedQueues {
    pub solo: Option<RankSummary>,
    pub flex: Option<RankSummary>,
}

impl RankedQueues {
    pub fn from_entries(entries: &[LeagueEntryDto]) -> Self {
        let find = |queue: &str| {
            entries
                .iter()
                .find(|e| e.queue_type == queue)
                .map(RankSummary::from_entry)
        };

        RankedQueues {
            solo: find(SOLO_QUEUE),
            flex: find(FLEX_QUEUE),
        }
    }
}
