use crate::config::Region;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoints;
use super::models::*;

const USER_AGENT: &str = concat!("riftmate/", env!("CARGO_PKG_VERSION"));
const REQUESTS_PER_SECOND: NonZeroU32 = NonZeroU32::MIN.saturating_add(19);
const MAX_RETRIES: u32 = 3;

/// Blocking Riot API client. Safe to share between threads: the agent and
/// the rate limiter are both `Sync`.
pub struct RiotApiClient {
    api_key: String,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(20))
            .user_agent(USER_AGENT)
            .build();

        RiotApiClient {
            api_key: api_key.into(),
            agent,
            rate_limiter: RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND)),
        }
    }

    fn wait_for_quota(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        send_with_retries(url, || self.attempt(url), thread::sleep)
    }

    fn attempt(&self, url: &str) -> Attempt {
        self.wait_for_quota();
        debug!(url, "riot api request");

        let response = self
            .agent
            .get(url)
            .set("X-Riot-Token", &self.api_key)
            .call();

        match response {
            Ok(resp) => match resp.into_string() {
                Ok(body) => Attempt::Body(body),
                Err(e) => Attempt::Failed(AppError::HttpError(e.to_string())),
            },
            Err(ureq::Error::Status(429, _)) => Attempt::Throttled,
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Attempt::Failed(status_error(code, &body))
            }
            Err(e) => Attempt::Failed(AppError::HttpError(e.to_string())),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let body = self.execute_request(url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    /// Data Dragon is a static CDN: no token, no quota.
    pub fn get_champion_data(&self) -> Result<DataDragonChampions, AppError> {
        let url = endpoints::data_dragon_champions();
        debug!(url = %url, "data dragon request");

        let body = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| AppError::HttpError(e.to_string()))?
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }
}

/// The Riot endpoints player lookups are built on.
pub trait RiotApi {
    fn get_account(&self, region: Region, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError>;

    fn get_summoner(&self, region: Region, puuid: &str) -> Result<SummonerDto, AppError>;

    fn get_league_entries(&self, region: Region, puuid: &str) -> Result<Vec<LeagueEntryDto>, AppError>;

    /// Sorted by mastery points, highest first.
    fn get_champion_masteries(&self, region: Region, puuid: &str) -> Result<Vec<ChampionMasteryDto>, AppError>;

    /// Most recent first. `queue` filters by queue id.
    fn get_match_ids(
        &self,
        region: Region,
        puuid: &str,
        queue: Option<u32>,
        count: usize,
    ) -> Result<Vec<String>, AppError>;

    fn get_match(&self, region: Region, match_id: &str) -> Result<MatchDto, AppError>;
}

impl RiotApi for RiotApiClient {
    fn get_account(&self, region: Region, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError> {
        self.get_json(&endpoints::account_by_riot_id(region.routing(), game_name, tag_line))
    }

    fn get_summoner(&self, region: Region, puuid: &str) -> Result<SummonerDto, AppError> {
        self.get_json(&endpoints::summoner_by_puuid(region.platform(), puuid))
    }

    fn get_league_entries(&self, region: Region, puuid: &str) -> Result<Vec<LeagueEntryDto>, AppError> {
        self.get_json(&endpoints::league_entries_by_puuid(region.platform(), puuid))
    }

    fn get_champion_masteries(&self, region: Region, puuid: &str) -> Result<Vec<ChampionMasteryDto>, AppError> {
        self.get_json(&endpoints::champion_masteries_by_puuid(region.platform(), puuid))
    }

    fn get_match_ids(
        &self,
        region: Region,
        puuid: &str,
        queue: Option<u32>,
        count: usize,
    ) -> Result<Vec<String>, AppError> {
        self.get_json(&endpoints::match_ids_by_puuid(region.routing(), puuid, queue, count))
    }

    fn get_match(&self, region: Region, match_id: &str) -> Result<MatchDto, AppError> {
        self.get_json(&endpoints::match_by_id(region.routing(), match_id))
    }
}

/// Outcome of a single request.
enum Attempt {
    Body(String),
    Throttled,
    Failed(AppError),
}

/// Runs `attempt` until it stops being throttled, sleeping 2s, 4s, 6s between
/// tries. A fourth 429 gives up with `RateLimited`.
fn send_with_retries(
    url: &str,
    mut attempt: impl FnMut() -> Attempt,
    mut backoff: impl FnMut(Duration),
) -> Result<String, AppError> {
    let mut retry_count = 0;

    loop {
        match attempt() {
            Attempt::Body(body) => return Ok(body),
            Attempt::Failed(e) => return Err(e),
            Attempt::Throttled => {
                if retry_count >= MAX_RETRIES {
                    return Err(AppError::RateLimited);
                }
                let wait_ms = 2000 * u64::from(retry_count + 1);
                warn!(url, wait_ms, "rate limited by riot api, retrying");
                backoff(Duration::from_millis(wait_ms));
                retry_count += 1;
            }
        }
    }
}

fn status_error(code: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<RiotErrorBody>(body)
        .map(|b| b.status.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Unknown error from Riot API".to_string());

    AppError::Status { code, message }
}
