use battleship_solo::{init_logging, AiPlayer, Board, Player, ShotResult};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Shots one side needs to sink the other's fleet.
fn shots_to_win(rng: &mut SmallRng, player: &mut AiPlayer, enemy: &mut Board) -> usize {
    let mut shots = 0;
    while !enemy.all_sunk() {
        let Some(coord) = player.select_target(rng, enemy) else {
            break;
        };
        let result = enemy.shoot(coord.0, coord.1);
        if result != ShotResult::Repeat {
            shots += 1;
        }
        player.handle_shot_result(coord, result, enemy);
    }
    shots
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut shots = Vec::with_capacity(games);
    let mut wins = [0usize; 2];
    for _ in 0..games {
        let mut p1 = AiPlayer::new();
        let mut p2 = AiPlayer::new();
        let mut b1 = Board::new();
        let mut b2 = Board::new();
        p1.place_ships(&mut rng, &mut b1)?;
        p2.place_ships(&mut rng, &mut b2)?;

        let s1 = shots_to_win(&mut rng, &mut p1, &mut b2);
        let s2 = shots_to_win(&mut rng, &mut p2, &mut b1);
        // Fewer shots wins; ties go to player1.
        wins[usize::from(s2 < s1)] += 1;
        shots.push(json!({"player1": s1, "player2": s2}));
    }

    let winner = match wins {
        [a, b] if a > b => Some("player1"),
        [a, b] if b > a => Some("player2"),
        _ => None,
    };
    let result = json!({
        "seed": seed,
        "games": shots,
        "wins": {"player1": wins[0], "player2": wins[1]},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
