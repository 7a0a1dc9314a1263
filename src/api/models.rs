use serde::Deserialize;
use std::collections::HashMap;

// Account V1 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub summoner_level: i64,
}

// League V4 response (one entry per ranked queue)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: u32,
    pub losses: u32,
}

// Champion Mastery V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    #[serde(default)]
    pub champion_level: i32,
    #[serde(default)]
    pub champion_points: i64,
}

// Match V5 response
#[derive(Debug, Deserialize, Clone)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_duration: i64,
    #[serde(default)]
    pub game_end_timestamp: i64,
    #[serde(default)]
    pub queue_id: u32,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_id: i64,
    #[serde(default)]
    pub champion_name: String,
    pub team_id: i32,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub individual_position: String, // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY, Invalid
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub summoner1_id: i32,
    #[serde(default)]
    pub summoner2_id: i32,
    #[serde(default)]
    pub item0: i64,
    #[serde(default)]
    pub item1: i64,
    #[serde(default)]
    pub item2: i64,
    #[serde(default)]
    pub item3: i64,
    #[serde(default)]
    pub item4: i64,
    #[serde(default)]
    pub item5: i64,
    #[serde(default)]
    pub item6: i64,
    #[serde(default)]
    pub riot_id_game_name: Option<String>,
    #[serde(default)]
    pub riot_id_tagline: Option<String>,
}

impl ParticipantDto {
    pub fn items(&self) -> [i64; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

// Data Dragon Champion response
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

// `data` is keyed by the champion's string id; `key` is its numeric id.
#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub name: String,
    pub key: String,
}

// Error body returned by Riot on non-2xx statuses
#[derive(Debug, Deserialize, Default)]
pub struct RiotErrorBody {
    #[serde(default)]
    pub status: RiotErrorStatus,
}

#[derive(Debug, Deserialize, Default)]
pub struct RiotErrorStatus {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_match_with_missing_optional_fields() {
        let body = r#"{
            "metadata": { "matchId": "BR1_123", "participants": ["a", "b"] },
            "info": {
                "gameDuration": 1820,
                "queueId": 420,
                "participants": [
                    {
                        "puuid": "a", "championId": 222, "championName": "Jinx",
                        "teamId": 100, "win": true, "individualPosition": "BOTTOM",
                        "kills": 9, "deaths": 2, "assists": 7,
                        "item0": 3031, "item6": 3363,
                        "riotIdGameName": "Rakan", "riotIdTagline": "BR1"
                    },
                    { "puuid": "b", "championId": 412, "teamId": 200 }
                ]
            }
        }"#;

        let parsed: MatchDto = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.metadata.match_id, "BR1_123");
        assert_eq!(parsed.info.game_end_timestamp, 0);
        assert_eq!(parsed.info.queue_id, 420);

        let jinx = &parsed.info.participants[0];
        assert_eq!(jinx.individual_position, "BOTTOM");
        assert_eq!(jinx.items(), [3031, 0, 0, 0, 0, 0, 3363]);
        assert_eq!(jinx.riot_id_game_name.as_deref(), Some("Rakan"));

        let other = &parsed.info.participants[1];
        assert!(!other.win);
        assert_eq!(other.individual_position, "");
        assert!(other.riot_id_game_name.is_none());
    }

    #[test]
    fn parses_league_entries_and_masteries() {
        let league: Vec<LeagueEntryDto> = serde_json::from_str(
            r#"[{"queueType":"RANKED_SOLO_5x5","tier":"GOLD","rank":"II","leaguePoints":41,"wins":30,"losses":25,"hotStreak":false}]"#,
        )
        .unwrap();
        assert_eq!(league[0].tier, "GOLD");
        assert_eq!(league[0].wins, 30);

        let mastery: Vec<ChampionMasteryDto> = serde_json::from_str(
            r#"[{"championId":497,"championLevel":7,"championPoints":250000,"puuid":"x"}]"#,
        )
        .unwrap();
        assert_eq!(mastery[0].champion_id, 497);
        assert_eq!(mastery[0].champion_points, 250_000);
    }

    #[test]
    fn parses_riot_error_body() {
        let body: RiotErrorBody = serde_json::from_str(
            r#"{"status":{"message":"Data not found - No results found for player with riot id","status_code":404}}"#,
        )
        .unwrap();
        assert!(body.status.message.starts_with("Data not found"));
    }
}
