use crate::api::client::RiotApi;
use crate::api::models::MatchDto;
use crate::cache::ChampionCatalog;
use crate::config::Region;
use crate::error::AppError;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

pub const DEFAULT_HISTORY_SIZE: u8 = 10;
/// Riot rejects larger `count` values on the match id list.
pub const MAX_HISTORY_SIZE: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchParticipant {
    pub game_name: String,
    pub tag_line: String,
    pub champion_id: i64,
    pub champion_name: String,
    pub team_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub match_id: String,
    pub win: bool,
    pub game_duration_secs: i64,
    pub game_end_timestamp_ms: i64,
    pub queue_id: u32,
    pub team_id: i32,
    pub champion_id: i64,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub summoner_spells: [i32; 2],
    /// Item ids by slot; 0 is an empty slot.
    pub items: [i64; 7],
    pub participants: Vec<MatchParticipant>,
}

impl MatchSummary {
    /// `None` when the player is not among the participants.
    pub fn from_match(data: &MatchDto, puuid: &str, catalog: &ChampionCatalog) -> Option<Self> {
        let me = data.info.participants.iter().find(|p| p.puuid == puuid)?;

        let participants = data
            .info
            .participants
            .iter()
            .map(|p| MatchParticipant {
                game_name: p
                    .riot_id_game_name
                    .clone()
                    .unwrap_or_else(|| "Player Not Found".to_string()),
                tag_line: p.riot_id_tagline.clone().unwrap_or_default(),
                champion_id: p.champion_id,
                champion_name: champion_name(&p.champion_name, p.champion_id, catalog),
                team_id: p.team_id,
            })
            .collect();

        Some(MatchSummary {
            match_id: data.metadata.match_id.clone(),
            win: me.win,
            game_duration_secs: data.info.game_duration,
            game_end_timestamp_ms: data.info.game_end_timestamp,
            queue_id: data.info.queue_id,
            team_id: me.team_id,
            champion_id: me.champion_id,
            champion_name: champion_name(&me.champion_name, me.champion_id, catalog),
            kills: me.kills,
            deaths: me.deaths,
            assists: me.assists,
            summoner_spells: [me.summoner1_id, me.summoner2_id],
            items: me.items(),
            participants,
        })
    }

    pub fn team(&self, team_id: i32) -> impl Iterator<Item = &MatchParticipant> {
        self.participants.iter().filter(move |p| p.team_id == team_id)
    }
}

impl MatchParticipant {
    /// "Name#TAG", or just the name when Riot sent no tag.
    pub fn riot_id(&self) -> String {
        if self.tag_line.is_empty() {
            self.game_name.clone()
        } else {
            format!("{}#{}", self.game_name, self.tag_line)
        }
    }
}

fn champion_name(from_match: &str, champion_id: i64, catalog: &ChampionCatalog) -> String {
    if from_match.is_empty() {
        catalog.name_of(champion_id)
    } else {
        from_match.to_string()
    }
}

/// Bar for the per-match fetch loop; its length is set once the ids are known.
pub fn history_progress() -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:30.cyan/blue}] {pos}/{len}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb.set_message("Fetching match history");
    pb
}

/// Most recent matches first. Matches that fail to load are skipped; a 404
/// on the id list means the player has no history.
pub fn fetch_match_history<C: RiotApi>(
    client: &C,
    catalog: &ChampionCatalog,
    region: Region,
    puuid: &str,
    count: usize,
    pb: &ProgressBar,
) -> Result<Vec<MatchSummary>, AppError> {
    let match_ids = match client.get_match_ids(region, puuid, None, count) {
        Ok(ids) => ids,
        Err(e) if e.is_not_found() => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    pb.set_length(match_ids.len() as u64);
    let mut history = Vec::with_capacity(match_ids.len());

    for match_id in &match_ids {
        match client.get_match(region, match_id) {
            Ok(data) => match MatchSummary::from_match(&data, puuid, catalog) {
                Some(summary) => history.push(summary),
                None => debug!(match_id = %match_id, "player not in match"),
            },
            Err(e) => warn!(match_id = %match_id, error = %e, "skipping match"),
        }
        pb.inc(1);
    }

    Ok(history)
}
