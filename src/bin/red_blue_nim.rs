use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use rust_minimax::games::nim::{MarbleCountEval, RedBlueNim, Variant};
use rust_minimax::play::{HumanPlayer, Match, Seat};
use rust_minimax::search::{RandomStrategy, SearchConfig, SearchStrategy, TerminalScoring};
use rust_minimax::Player;

/// Rule variant as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Version {
    Standard,
    Misere,
}

impl From<Version> for Variant {
    fn from(version: Version) -> Self {
        match version {
            Version::Standard => Variant::Standard,
            Version::Misere => Variant::Misere,
        }
    }
}

/// Terminal scoring policy as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Scoring {
    Evaluator,
    Utility,
}

impl From<Scoring> for TerminalScoring {
    fn from(scoring: Scoring) -> Self {
        match scoring {
            Scoring::Evaluator => TerminalScoring::Evaluator,
            Scoring::Utility => TerminalScoring::Utility,
        }
    }
}

/// Who sits in the first seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Role {
    Computer,
    Human,
}

/// Who plays against the computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Human,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "red_blue_nim", about = "Play Red-Blue Nim against a minimax search")]
struct Cli {
    /// Initial number of red marbles
    num_red: u32,

    /// Initial number of blue marbles
    num_blue: u32,

    /// Rule variant
    #[arg(value_enum, default_value_t = Version::Standard)]
    version: Version,

    /// Who moves first
    #[arg(value_enum, default_value_t = Role::Computer)]
    first_player: Role,

    /// Search depth in plies; full search when omitted
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<u32>,

    /// How the depth-limited search scores terminal states
    #[arg(long, value_enum, default_value_t = Scoring::Evaluator)]
    terminal_scoring: Scoring,

    /// Opponent of the computer
    #[arg(long, value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    info!("{:?}", cli);

    let variant = Variant::from(cli.version);
    let game = RedBlueNim::builder()
        .red(cli.num_red)
        .blue(cli.num_blue)
        .variant(variant)
        .build();

    let config = SearchConfig::default()
        .with_depth_limit(cli.depth)
        .with_terminal_scoring(cli.terminal_scoring.into());

    let computer = Seat::new("Computer", SearchStrategy::new(config, MarbleCountEval));
    let other = match cli.opponent {
        Opponent::Human => Seat::new("Human", HumanPlayer::new(io::stdin().lock(), io::stdout())),
        Opponent::Random => Seat::new("Random", RandomStrategy::new(cli.seed)),
    };

    let (first, second, computer_player) = match cli.first_player {
        Role::Computer => (computer, other, Player::First),
        Role::Human => (other, computer, Player::Second),
    };

    println!("\n===== Red-Blue Nim =====");
    println!(
        "Version: {} | First player: {} | Depth: {}\n",
        variant,
        first.label.to_lowercase(),
        cli.depth
            .map_or_else(|| "Full search".to_string(), |d| d.to_string())
    );

    let mut game_match = Match::new(&game, first, second, io::stdout());
    let record = game_match.play().context("game aborted")?;

    println!("\n===== Game Over =====");
    for player in [computer_player, computer_player.opponent()] {
        println!(
            "{} utility: {}",
            game_match.label(player),
            record.utility(&game, player)
        );
    }

    Ok(())
}
