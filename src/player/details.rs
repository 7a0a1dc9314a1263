use crate::analysis::lane::{Lane, LaneTally};
use crate::analysis::scorer::{PlayerProfile, POOL_SIZE};
use crate::api::client::RiotApi;
use crate::api::endpoints::RANKED_SOLO_QUEUE;
use crate::api::models::{AccountDto, ChampionMasteryDto, MatchDto, SummonerDto};
use crate::cache::ChampionCatalog;
use crate::config::Region;
use crate::error::AppError;
use tracing::{debug, warn};

use super::rank::RankedQueues;
use super::riot_id::RiotId;

/// Ranked ids requested when looking for a player's lane.
const LANE_SAMPLE_IDS: usize = 15;
/// Of those, how many matches are actually opened.
const LANE_SAMPLE_MATCHES: usize = 5;

/// Everything shown on a player card, plus what the duo scorer needs.
#[derive(Debug, Clone)]
pub struct PlayerDetails {
    pub riot_id: RiotId,
    pub region: Region,
    pub account: AccountDto,
    pub summoner: SummonerDto,
    pub ranked: RankedQueues,
    pub masteries: Vec<ChampionMasteryDto>,
    pub main_lane: Lane,
    /// Names of the best mastery champions, main champion first.
    pub top_champions: Vec<String>,
}

impl PlayerDetails {
    pub fn duo_profile(&self) -> PlayerProfile {
        PlayerProfile::new(
            self.main_lane,
            self.masteries
                .iter()
                .take(POOL_SIZE)
                .map(|m| m.champion_id)
                .collect(),
        )
    }

    pub fn display_name(&self) -> String {
        if self.account.game_name.is_empty() {
            self.riot_id.to_string()
        } else {
            format!("{}#{}", self.account.game_name, self.account.tag_line)
        }
    }
}

pub fn fetch_player_details<C: RiotApi>(
    client: &C,
    catalog: &ChampionCatalog,
    riot_id: &RiotId,
    region: Region,
) -> Result<PlayerDetails, AppError> {
    let account = client
        .get_account(region, &riot_id.game_name, &riot_id.tag_line)
        .map_err(|e| account_error(e, riot_id))?;
    debug!(riot_id = %riot_id, "resolved account");

    let summoner = client
        .get_summoner(region, &account.puuid)
        .map_err(|e| summoner_error(e, riot_id, region))?;

    let league = client.get_league_entries(region, &account.puuid)?;

    let masteries = client
        .get_champion_masteries(region, &account.puuid)
        .unwrap_or_else(|e| {
            warn!(riot_id = %riot_id, error = %e, "champion mastery unavailable");
            Vec::new()
        });

    let main_lane = determine_main_lane(client, region, &account.puuid);
    let top_champions = masteries
        .iter()
        .take(POOL_SIZE)
        .map(|m| catalog.name_of(m.champion_id))
        .collect();

    Ok(PlayerDetails {
        riot_id: riot_id.clone(),
        region,
        account,
        summoner,
        ranked: RankedQueues::from_entries(&league),
        masteries,
        main_lane,
        top_champions,
    })
}

/// A missing account means the Riot ID itself does not exist.
fn account_error(e: AppError, riot_id: &RiotId) -> AppError {
    if e.is_not_found() {
        AppError::PlayerNotFound(riot_id.to_string())
    } else {
        e
    }
}

/// The account exists but never played League in this region.
fn summoner_error(e: AppError, riot_id: &RiotId, region: Region) -> AppError {
    if e.is_not_found() {
        AppError::NoProfileInRegion(riot_id.to_string(), region.to_string())
    } else {
        e
    }
}

/// Most played position over the player's latest ranked solo games.
/// Any failure along the way means the lane is unknown.
pub fn determine_main_lane<C: RiotApi>(client: &C, region: Region, puuid: &str) -> Lane {
    let match_ids = match client.get_match_ids(region, puuid, Some(RANKED_SOLO_QUEUE), LANE_SAMPLE_IDS) {
        Ok(ids) => ids,
        Err(e) => {
            warn!(error = %e, "could not list ranked matches");
            return Lane::Unknown;
        }
    };

    let tally: LaneTally = match_ids
        .iter()
        .take(LANE_SAMPLE_MATCHES)
        .filter_map(|id| match client.get_match(region, id) {
            Ok(data) => lane_in_match(&data, puuid),
            Err(e) => {
                debug!(match_id = %id, error = %e, "skipping match for lane detection");
                None
            }
        })
        .collect();

    tally.main_lane()
}

/// The player's position in one match, if they took part in it.
pub fn lane_in_match(data: &MatchDto, puuid: &str) -> Option<Lane> {
    data.info
        .participants
        .iter()
        .find(|p| p.puuid == puuid)
        .map(|p| Lane::from_riot_position(&p.individual_position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::StubApi;
    use crate::player::history::tests::sample_match;

    fn details(masteries: &[i64], lane: Lane) -> PlayerDetails {
        PlayerDetails {
            riot_id: "Xayah Main#BR1".parse().unwrap(),
            region: "br1".parse().unwrap(),
            account: AccountDto {
                puuid: "me".into(),
                game_name: String::new(),
                tag_line: String::new(),
            },
            summoner: SummonerDto { summoner_level: 312 },
            ranked: RankedQueues::default(),
            masteries: mastery_list(masteries),
            main_lane: lane,
            top_champions: Vec::new(),
        }
    }

    fn mastery_list(ids: &[i64]) -> Vec<ChampionMasteryDto> {
        ids.iter()
            .map(|&id| ChampionMasteryDto {
                champion_id: id,
                champion_level: 7,
                champion_points: 100_000,
            })
            .collect()
    }

    fn xayah() -> RiotId {
        "Xayah Main#BR1".parse().unwrap()
    }

    fn br1() -> Region {
        "br1".parse().unwrap()
    }

    /// Stub whose ranked history holds `ids`, each one being the sample match.
    fn with_ranked_matches(ids: &[&str]) -> StubApi {
        let mut api = StubApi::new("me");
        api.match_ids = Ok(ids.iter().map(|id| id.to_string()).collect());
        for id in ids {
            api.matches.insert(id.to_string(), sample_match());
        }
        api
    }

    #[test]
    fn lane_comes_from_individual_position() {
        let data = sample_match();
        assert_eq!(lane_in_match(&data, "me"), Some(Lane::Adc));
        assert_eq!(lane_in_match(&data, "duo"), Some(Lane::Support));
        assert_eq!(lane_in_match(&data, "nobody"), None);
    }

    #[test]
    fn duo_profile_keeps_top_three_masteries() {
        let profile = details(&[222, 51, 21, 498], Lane::Adc).duo_profile();
        assert_eq!(profile.main_lane, Lane::Adc);
        assert_eq!(profile.top_mastery_champions, vec![222, 51, 21]);
    }

    #[test]
    fn display_name_prefers_account_casing() {
        let mut player = details(&[], Lane::Unknown);
        assert_eq!(player.display_name(), "Xayah Main#BR1");

        player.account.game_name = "xayah main".into();
        player.account.tag_line = "br1".into();
        assert_eq!(player.display_name(), "xayah main#br1");
    }

    #[test]
    fn missing_account_is_player_not_found() {
        let mut api = StubApi::new("me");
        api.account = Err(404);

        let err = fetch_player_details(&api, &ChampionCatalog::empty(), &xayah(), br1()).unwrap_err();
        assert!(matches!(err, AppError::PlayerNotFound(ref id) if id == "Xayah Main#BR1"));
    }

    #[test]
    fn missing_summoner_is_no_profile_in_region() {
        let mut api = StubApi::new("me");
        api.summoner = Err(404);

        let err = fetch_player_details(&api, &ChampionCatalog::empty(), &xayah(), br1()).unwrap_err();
        assert!(matches!(
            err,
            AppError::NoProfileInRegion(ref id, ref region) if id == "Xayah Main#BR1" && region == "BR1"
        ));
    }

    #[test]
    fn other_account_errors_pass_through() {
        let err = account_error(AppError::RateLimited, &xayah());
        assert!(matches!(err, AppError::RateLimited));

        let err = summoner_error(AppError::Status { code: 403, message: "Forbidden".into() }, &xayah(), br1());
        assert!(matches!(err, AppError::Status { code: 403, .. }));
    }

    #[test]
    fn mastery_failure_leaves_pool_empty() {
        let mut api = with_ranked_matches(&["BR1_1"]);
        api.masteries = Err(500);

        let player = fetch_player_details(&api, &ChampionCatalog::empty(), &xayah(), br1()).unwrap();
        assert!(player.masteries.is_empty());
        assert!(player.top_champions.is_empty());
        assert_eq!(player.main_lane, Lane::Adc);
    }

    #[test]
    fn names_top_three_mastery_champions() {
        let mut api = StubApi::new("me");
        api.masteries = Ok(mastery_list(&[222, 497, 51, 21]));
        let mut catalog = ChampionCatalog::empty();
        catalog.champions.insert(222, "Jinx".to_string());
        catalog.champions.insert(497, "Rakan".to_string());

        let player = fetch_player_details(&api, &catalog, &xayah(), br1()).unwrap();
        assert_eq!(player.top_champions, vec!["Jinx", "Rakan", "Champion 51"]);
        assert_eq!(player.duo_profile().top_mastery_champions, vec![222, 497, 51]);
    }

    #[test]
    fn lane_sample_failure_is_unknown() {
        let mut api = StubApi::new("me");
        api.match_ids = Err(503);
        assert_eq!(determine_main_lane(&api, br1(), "me"), Lane::Unknown);

        api.match_ids = Ok(Vec::new());
        assert_eq!(determine_main_lane(&api, br1(), "me"), Lane::Unknown);
    }

    #[test]
    fn lane_sample_opens_five_matches() {
        let api = with_ranked_matches(&["BR1_1", "BR1_2", "BR1_3", "BR1_4", "BR1_5", "BR1_6", "BR1_7"]);
        assert_eq!(determine_main_lane(&api, br1(), "me"), Lane::Adc);
        assert_eq!(api.matches_opened.get(), LANE_SAMPLE_MATCHES);
    }

    #[test]
    fn unreadable_sample_matches_are_skipped() {
        let mut api = with_ranked_matches(&["BR1_1"]);
        api.match_ids = Ok(vec!["BR1_gone".to_string(), "BR1_1".to_string()]);
        assert_eq!(determine_main_lane(&api, br1(), "duo"), Lane::Support);
    }
}
