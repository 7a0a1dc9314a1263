mod analysis;
mod api;
mod cache;
mod config;
mod display;
mod error;
mod player;

use analysis::lane::Lane;
use analysis::scorer::{DuoScorer, MatchResult, PlayerProfile};
use anyhow::Context;
use api::client::RiotApiClient;
use cache::ChampionCatalog;
use clap::{Parser, Subcommand};
use config::{Config, Region};
use display::output::{
    display_duo, display_error, display_info, display_match_history, display_match_result,
    display_masteries, display_player_card, display_ranked_queues, display_success,
};
use indicatif::ProgressBar;
use player::details::{fetch_player_details, PlayerDetails};
use player::history::{fetch_match_history, history_progress, DEFAULT_HISTORY_SIZE, MAX_HISTORY_SIZE};
use player::riot_id::RiotId;
use std::thread;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "RiftMate")]
#[command(about = "Find out whether two League of Legends players make a good duo", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Refetch the champion list from Data Dragon (ignore cache)
    #[arg(long, global = true)]
    refresh: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch two players and score them as a duo
    Duo {
        /// First player, as Name#TAG
        player_a: RiotId,

        /// Second player, as Name#TAG
        player_b: RiotId,

        /// Region of both players (default: RIOT_REGION or br1)
        #[arg(short, long)]
        region: Option<Region>,

        /// Region of the second player, when it differs
        #[arg(long)]
        region_b: Option<Region>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show rank, champion mastery and recent matches of one player
    Profile {
        /// Player, as Name#TAG
        player: RiotId,

        /// Region (default: RIOT_REGION or br1)
        #[arg(short, long)]
        region: Option<Region>,

        /// Number of recent matches to show (1-100)
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_HISTORY_SIZE,
            value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_HISTORY_SIZE))
        )]
        matches: u8,

        /// Number of mastery champions to show
        #[arg(short, long, default_value = "5")]
        top_n: usize,
    },

    /// Score two hand-written profiles without calling the Riot API
    Score {
        /// Main lane of the first player
        #[arg(long, default_value = "UNKNOWN")]
        lane_a: Lane,

        /// Champion ids of the first player, best mastery first
        #[arg(long, value_delimiter = ',')]
        champions_a: Vec<i64>,

        /// Main lane of the second player
        #[arg(long, default_value = "UNKNOWN")]
        lane_b: Lane,

        /// Champion ids of the second player, best mastery first
        #[arg(long, value_delimiter = ',')]
        champions_b: Vec<i64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Duo {
            player_a,
            player_b,
            region,
            region_b,
            json,
        } => run_duo(&player_a, &player_b, region, region_b, json, args.refresh),
        Command::Profile {
            player,
            region,
            matches,
            top_n,
        } => run_profile(&player, region, usize::from(matches), top_n, args.refresh),
        Command::Score {
            lane_a,
            champions_a,
            lane_b,
            champions_b,
            json,
        } => {
            let result = DuoScorer::score(
                &PlayerProfile::new(lane_a, champions_a),
                &PlayerProfile::new(lane_b, champions_b),
            );
            print_result(&result, json)
        }
    }
}

fn load_catalog(client: &RiotApiClient, config: &Config, refresh: bool) -> ChampionCatalog {
    ChampionCatalog::load_or_refresh(&config.cache_dir, refresh, || client.get_champion_data())
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn run_duo(
    player_a: &RiotId,
    player_b: &RiotId,
    region: Option<Region>,
    region_b: Option<Region>,
    json: bool,
    refresh: bool,
) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let region_a = region.unwrap_or(config.region);
    let region_b = region_b.or(region).unwrap_or(config.region);

    let client = RiotApiClient::new(config.api_key.clone());
    let catalog = load_catalog(&client, &config, refresh);

    let pb = (!json).then(|| spinner(format!("Analyzing {} and {}...", player_a, player_b)));

    let (a, b) = thread::scope(|s| {
        let a = s.spawn(|| fetch_player_details(&client, &catalog, player_a, region_a));
        let b = s.spawn(|| fetch_player_details(&client, &catalog, player_b, region_b));
        (join(a), join(b))
    });

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    let a = a.with_context(|| format!("Could not load {}", player_a))?;
    let b = b.with_context(|| format!("Could not load {}", player_b))?;

    let result = DuoScorer::score(&a.duo_profile(), &b.duo_profile());

    if json {
        return print_result(&result, true);
    }

    display_duo(&a, &b, &result);
    Ok(())
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}

fn run_profile(
    riot_id: &RiotId,
    region: Option<Region>,
    matches: usize,
    top_n: usize,
    refresh: bool,
) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let region = region.unwrap_or(config.region);

    display_info(&format!("Fetching data for {} in region {}", riot_id, region));

    let client = RiotApiClient::new(config.api_key.clone());
    let catalog = load_catalog(&client, &config, refresh);

    let pb = spinner("Loading profile".to_string());
    let details = fetch_player_details(&client, &catalog, riot_id, region);
    pb.finish_and_clear();
    let details: PlayerDetails = details.with_context(|| format!("Could not load {}", riot_id))?;
    display_success(&format!("Found {}", details.display_name()));

    let pb = history_progress();
    let history = fetch_match_history(
        &client,
        &catalog,
        region,
        &details.account.puuid,
        matches,
        &pb,
    )
    .context("Could not load match history")?;
    pb.finish_and_clear();

    display_player_card(&details);
    display_ranked_queues(&details.ranked);
    display_masteries(&details.masteries, &catalog, top_n);
    display_match_history(&history, chrono::Utc::now().timestamp_millis());

    Ok(())
}

fn print_result(result: &MatchResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        display_match_result(result);
    }
    Ok(())
}
