#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_solo::{
    coord_to_string, describe, init_logging, print_player_view, render_board, CliPlayer,
    GameSession, GameStatus, Player, ScoreError, ScoreLedger, Turn, MAX_NAME_LEN,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use std::time::Instant;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "records.json")]
        scores: PathBuf,
        #[arg(long, default_value_t = 600, help = "Pause before each computer shot, in milliseconds")]
        think_ms: u64,
    },
    /// Show the high-score table.
    Scores {
        #[arg(long, default_value = "records.json")]
        scores: PathBuf,
    },
}

#[cfg(feature = "std")]
fn print_scores(ledger: &ScoreLedger) {
    if ledger.records().is_empty() {
        println!("No records yet.");
        return;
    }
    println!("Best times:");
    for (i, rec) in ledger.records().iter().enumerate() {
        println!("{:2}. {:<20} {}", i + 1, rec.name, rec.time);
    }
}

/// Ask the winner for a name and store the time. Blank input skips saving.
#[cfg(feature = "std")]
fn save_result(cli: &mut CliPlayer, ledger: &mut ScoreLedger, seconds: u64) {
    let prompt = format!("Your name (max {} chars, blank to skip): ", MAX_NAME_LEN);
    let Some(name) = cli.prompt(&prompt) else {
        return;
    };
    let name: String = name.chars().take(MAX_NAME_LEN).collect();
    match ledger.add_record(&name, seconds) {
        Ok(Some(rank)) => println!("Saved! You placed #{}.", rank + 1),
        Ok(None) => println!("Not fast enough for the table this time."),
        Err(ScoreError::EmptyName) => println!("Not saved."),
        Err(e) => println!("Could not save: {}", e),
    }
    print_scores(ledger);
}

#[cfg(feature = "std")]
async fn play(seed: Option<u64>, scores: PathBuf, think: Duration) -> anyhow::Result<()> {
    let mut rng = if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut ledger = ScoreLedger::load(scores);
    let mut cli = CliPlayer::new();
    let mut session = GameSession::new(&mut rng)?;

    loop {
        let first = session.coin_toss(&mut rng);
        println!(
            "Coin toss: {} first.",
            if first == Turn::Human { "you go" } else { "the computer goes" }
        );
        let started = Instant::now();

        while !session.is_over() {
            match session.turn() {
                Turn::Human => {
                    print_player_view(&session);
                    let Some(coord) = cli.select_target(&mut rng, session.ai_board()) else {
                        println!("Bye.");
                        return Ok(());
                    };
                    let result = session.player_shot(coord.0, coord.1)?;
                    cli.handle_shot_result(coord, result, session.ai_board());
                }
                Turn::Ai => {
                    tokio::time::sleep(think).await;
                    if let Some((coord, result)) = session.ai_turn(&mut rng)? {
                        println!("Computer fired at {} -> {}", coord_to_string(coord), describe(result));
                    }
                }
            }
        }

        let elapsed = started.elapsed().as_secs();
        print_player_view(&session);
        match session.status() {
            GameStatus::Won => {
                println!("You won in {}!", battleship_solo::format_time(elapsed));
                save_result(&mut cli, &mut ledger, elapsed);
            }
            GameStatus::Lost => {
                println!("The computer sank your fleet. Its ships were:");
                print!("{}", render_board(session.ai_board(), true));
            }
            GameStatus::InProgress => {}
        }

        match cli.prompt("Play again? [y/N] ") {
            Some(answer) if answer.eq_ignore_ascii_case("y") => session.restart(&mut rng)?,
            _ => return Ok(()),
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, scores, think_ms } => {
            play(seed, scores, Duration::from_millis(think_ms)).await?;
        }
        Commands::Scores { scores } => {
            print_scores(&ScoreLedger::load(scores));
        }
    }
    Ok(())
}
