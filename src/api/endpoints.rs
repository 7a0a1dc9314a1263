// URL builders for the Riot and Data Dragon endpoints used by the client.

pub const DATA_DRAGON_VERSION: &str = "14.9.1";

/// Queue id of ranked solo/duo games.
pub const RANKED_SOLO_QUEUE: u32 = 420;

fn riot_host(prefix: &str) -> String {
    format!("https://{}.api.riotgames.com", prefix)
}

pub fn account_by_riot_id(routing: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
        riot_host(routing),
        encode_path_segment(game_name),
        encode_path_segment(tag_line)
    )
}

pub fn summoner_by_puuid(platform: &str, puuid: &str) -> String {
    format!("{}/lol/summoner/v4/summoners/by-puuid/{}", riot_host(platform), puuid)
}

pub fn league_entries_by_puuid(platform: &str, puuid: &str) -> String {
    format!("{}/lol/league/v4/entries/by-puuid/{}", riot_host(platform), puuid)
}

pub fn champion_masteries_by_puuid(platform: &str, puuid: &str) -> String {
    format!(
        "{}/lol/champion-mastery/v4/champion-masteries/by-puuid/{}",
        riot_host(platform),
        puuid
    )
}

pub fn match_ids_by_puuid(routing: &str, puuid: &str, queue: Option<u32>, count: usize) -> String {
    let mut url = format!(
        "{}/lol/match/v5/matches/by-puuid/{}/ids?",
        riot_host(routing),
        puuid
    );
    if let Some(queue) = queue {
        url.push_str(&format!("queue={}&", queue));
    }
    url.push_str(&format!("count={}", count));
    url
}

pub fn match_by_id(routing: &str, match_id: &str) -> String {
    format!("{}/lol/match/v5/matches/{}", riot_host(routing), match_id)
}

pub fn data_dragon_champions() -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/data/en_US/champion.json",
        DATA_DRAGON_VERSION
    )
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
/// Riot IDs may contain spaces and non-ASCII letters.
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_url_encodes_riot_id() {
        assert_eq!(
            account_by_riot_id("americas", "Hide on bush", "KR1"),
            "https://americas.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Hide%20on%20bush/KR1"
        );
    }

    #[test]
    fn encodes_non_ascii_as_utf8_bytes() {
        assert_eq!(encode_path_segment("Pãe"), "P%C3%A3e");
        assert_eq!(encode_path_segment("a#b/c"), "a%23b%2Fc");
    }

    #[test]
    fn match_ids_url_with_and_without_queue() {
        assert_eq!(
            match_ids_by_puuid("europe", "abc", Some(RANKED_SOLO_QUEUE), 15),
            "https://europe.api.riotgames.com/lol/match/v5/matches/by-puuid/abc/ids?queue=420&count=15"
        );
        assert_eq!(
            match_ids_by_puuid("europe", "abc", None, 10),
            "https://europe.api.riotgames.com/lol/match/v5/matches/by-puuid/abc/ids?count=10"
        );
    }

    #[test]
    fn platform_endpoints_use_platform_host() {
        assert_eq!(
            league_entries_by_puuid("br1", "p"),
            "https://br1.api.riotgames.com/lol/league/v4/entries/by-puuid/p"
        );
        assert!(champion_masteries_by_puuid("kr", "p").starts_with("https://kr.api.riotgames.com/"));
        assert!(summoner_by_puuid("na1", "p").ends_with("/summoners/by-puuid/p"));
    }
}
