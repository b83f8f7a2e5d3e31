use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use poker_hands::hand::{sort_hands, Hand};

/// Hands ranked when none are given on the command line.
const DEMO_HANDS: [&str; 2] = ["2S 3S 4S 5S 6S", "TC 4H 7D KC 2S"];

/// Rank five-card poker hands from weakest to strongest.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Hands to rank, each as five cards like "KC KH 7D 2C 5S".
    hands: Vec<String>,
    /// Print the strongest hand first.
    #[clap(long, short)]
    strongest_first: bool,
    /// Log classification details (same as RUST_LOG=debug).
    #[clap(long, short)]
    verbose: bool,
}

fn parse_hands(inputs: &[String]) -> Result<Vec<Hand>> {
    inputs
        .iter()
        .map(|input| input.parse::<Hand>().with_context(|| format!("invalid hand \"{input}\"")))
        .collect()
}

fn demo_inputs() -> Vec<String> {
    DEMO_HANDS.iter().map(|s| s.to_string()).collect()
}

/// One `<position>. <hand>  <category>` line per hand, weakest first unless reversed.
fn render(hands: &[Hand], strongest_first: bool) -> Vec<String> {
    let mut ranked = hands.to_vec();
    sort_hands(&mut ranked);
    if strongest_first {
        ranked.reverse();
    }

    ranked
        .iter()
        .enumerate()
        .map(|(i, hand)| format!("{}. {hand}  {}", i + 1, hand.category()))
        .collect()
}

fn run(cli: Cli) -> Result<()> {
    let inputs = if cli.hands.is_empty() {
        info!("no hands given, ranking the demo hands");
        demo_inputs()
    } else {
        cli.hands
    };

    let hands = parse_hands(&inputs)?;
    for line in render(&hands, cli.strongest_first) {
        println!("{line}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    run(cli)
}
