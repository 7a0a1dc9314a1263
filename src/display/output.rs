use crate::analysis::scorer::{MatchResult, Verdict};
use crate::api::models::ChampionMasteryDto;
use crate::cache::ChampionCatalog;
use crate::player::details::PlayerDetails;
use crate::player::history::{MatchParticipant, MatchSummary};
use crate::player::rank::{RankSummary, RankedQueues};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

use super::format::{compact_number, duration, kda_ratio, queue_name, spell_name, time_ago};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "match")]
    match_id: String,
    queue: String,
    when: String,
    result: String,
    champion: String,
    kda: String,
    spells: String,
    items: String,
    duration: String,
    allies: String,
    enemies: String,
}

#[derive(Tabled)]
struct MasteryRow {
    rank: String,
    champion: String,
    level: String,
    points: String,
}

fn in_verdict_color(text: &str, verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::PerfectDuo => text.green(),
        Verdict::GreatPotential => text.yellow(),
        Verdict::NeedsRefining => text.truecolor(251, 146, 60),
        Verdict::NotThisLifetime => text.red(),
    }
}

pub fn display_match_result(result: &MatchResult) {
    println!("\n{}", "🤝 DUO COMPATIBILITY".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!(
        "  {}",
        in_verdict_color(&format!("{}%", result.score), result.verdict).bold()
    );
    println!("  {}", in_verdict_color(result.title, result.verdict).bold());
    println!("\n  {}\n", result.summary);
}

pub fn display_duo(a: &PlayerDetails, b: &PlayerDetails, result: &MatchResult) {
    display_player_card(a);
    display_player_card(b);
    display_match_result(result);
}

pub fn display_player_card(player: &PlayerDetails) {
    println!("\n{}", format!("🎮 {}", player.display_name()).bold().cyan());
    println!("{}", "-".repeat(60).cyan());
    println!(
        "  Region: {}   Level: {}   Main lane: {}",
        player.region,
        player.summoner.summoner_level,
        player.main_lane.to_string().bold()
    );

    match &player.ranked.solo {
        Some(solo) => println!("  Solo/Duo: {}", rank_line(solo)),
        None => println!("  Solo/Duo: {}", "Unranked".dimmed()),
    }

    if !player.top_champions.is_empty() {
        println!("  Top champions: {}", player.top_champions.join(", ").bold());
    }
}

fn rank_line(rank: &RankSummary) -> String {
    format!(
        "{} {} LP ({}W / {}L, {:.1}% WR)",
        rank.label().bold(),
        rank.league_points,
        rank.wins.to_string().green(),
        rank.losses.to_string().red(),
        rank.win_rate()
    )
}

pub fn display_ranked_queues(ranked: &RankedQueues) {
    println!("\n{}", "🏆 RANKED".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    for (label, queue) in [("Solo/Duo", &ranked.solo), ("Flex", &ranked.flex)] {
        match queue {
            Some(rank) => println!("  {:<9} {}", label, rank_line(rank)),
            None => println!("  {:<9} {}", label, "Unranked".dimmed()),
        }
    }
}

pub fn display_masteries(masteries: &[ChampionMasteryDto], catalog: &ChampionCatalog, top_n: usize) {
    println!("\n{}", "⭐ CHAMPION MASTERY".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if masteries.is_empty() {
        println!("{}", "No champion mastery data available".yellow());
        return;
    }

    let rows: Vec<MasteryRow> = masteries
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, m)| MasteryRow {
            rank: format!("#{}", idx + 1),
            champion: catalog.name_of(m.champion_id),
            level: m.champion_level.to_string(),
            points: compact_number(m.champion_points),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_match_history(matches: &[MatchSummary], now_ms: i64) {
    println!("\n{}", format!("📊 MATCH HISTORY (Last {} Games)", matches.len()).bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if matches.is_empty() {
        println!("{}", "No recent matches found".yellow());
        return;
    }

    let wins = matches.iter().filter(|m| m.win).count();
    let losses = matches.len() - wins;
    let win_rate = wins as f64 / matches.len() as f64 * 100.0;
    println!(
        "{} {} W / {} L ({:.1}% WR)\n",
        "📈 Overall:".bold(),
        wins.to_string().green(),
        losses.to_string().red(),
        win_rate
    );

    let mut table = Table::new(history_rows(matches, now_ms));
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn history_rows(matches: &[MatchSummary], now_ms: i64) -> Vec<MatchRow> {
    matches
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let result = if m.win {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            };
            let when = if m.game_end_timestamp_ms > 0 {
                time_ago(m.game_end_timestamp_ms, now_ms)
            } else {
                "-".to_string()
            };
            let items: Vec<String> = m
                .items
                .iter()
                .filter(|&&item| item != 0)
                .map(|item| item.to_string())
                .collect();
            let allies = m
                .team(m.team_id)
                .filter(|p| p.champion_id != m.champion_id)
                .map(player_label)
                .collect::<Vec<_>>()
                .join("\n");
            let enemies = m
                .participants
                .iter()
                .filter(|p| p.team_id != m.team_id)
                .map(player_label)
                .collect::<Vec<_>>()
                .join("\n");

            MatchRow {
                number: format!("{}", idx + 1),
                match_id: m.match_id.clone(),
                queue: queue_name(m.queue_id).to_string(),
                when,
                result,
                champion: m.champion_name.clone(),
                kda: format!(
                    "{}/{}/{} ({})",
                    m.kills,
                    m.deaths,
                    m.assists,
                    kda_ratio(m.kills, m.deaths, m.assists)
                ),
                spells: m
                    .summoner_spells
                    .iter()
                    .map(|&id| spell_name(id))
                    .collect::<Vec<_>>()
                    .join(" + "),
                items: if items.is_empty() {
                    "-".to_string()
                } else {
                    items.join(" ")
                },
                duration: duration(m.game_duration_secs),
                allies,
                enemies,
            }
        })
        .collect()
}

fn player_label(p: &MatchParticipant) -> String {
    format!("{} ({})", p.champion_name, p.riot_id())
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
