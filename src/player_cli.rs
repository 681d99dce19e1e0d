#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{CellShot, Coord, ShotResult},
    config::GRID_SIZE,
    game::GameSession,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player typing coordinates such as `B7` at the terminal.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Read moves from standard input.
    pub fn new() -> Self {
        Self::with_input(io::BufReader::new(io::stdin()))
    }

    /// Read moves from any line source; used by tests.
    pub fn with_input<R: BufRead + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    /// Prompt and read one trimmed line. `None` on end of input.
    pub fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{}", text);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// `(x, y)` rendered as column letter plus 1-based row, e.g. `(1, 6)` is `B7`.
pub fn coord_to_string((x, y): Coord) -> String {
    let col = (b'A' + x as u8) as char;
    format!("{}{}", col, y + 1)
}

/// Parse `B7`-style input into `(x, y)`; case-insensitive.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let x = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().trim().parse().ok()?;
    if x >= GRID_SIZE || row == 0 || row > GRID_SIZE {
        return None;
    }
    Some((x, row - 1))
}

/// Text rendering of a board. Ships are only drawn when `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for x in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
    for y in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..GRID_SIZE {
            let ch = match board.shot_state(x, y) {
                Some(CellShot::Hit) => 'X',
                Some(CellShot::Miss) => 'o',
                _ if reveal && board.owner(x, y).is_some() => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// One line summary of the ships still afloat, e.g. `4x1 3x2 2x3 1x4`.
pub fn render_fleet_status(board: &Board) -> String {
    board
        .remaining_fleet()
        .iter()
        .map(|(len, count)| format!("{}x{}", len, count))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view(session: &GameSession) {
    println!("Enemy waters (afloat: {}):", render_fleet_status(session.ai_board()));
    print!("{}", render_board(session.ai_board(), false));
    println!("\nYour fleet (afloat: {}):", render_fleet_status(session.human_board()));
    print!("{}", render_board(session.human_board(), true));
}

pub fn describe(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "miss",
        ShotResult::Hit => "hit",
        ShotResult::Sunk => "sunk!",
        ShotResult::Repeat => "already resolved, fire again",
    }
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, enemy: &Board) -> Option<Coord> {
        loop {
            let line = self.prompt("Fire at (e.g. E5, q to quit): ")?;
            if line.eq_ignore_ascii_case("q") {
                return None;
            }
            match parse_coord(&line) {
                Some(coord) if enemy.is_untouched(coord) => return Some(coord),
                Some(coord) => println!("{} is already resolved", coord_to_string(coord)),
                None => println!("Invalid coordinate"),
            }
        }
    }

    fn handle_shot_result(&mut self, coord: Coord, result: ShotResult, _enemy: &Board) {
        println!("You fired at {} -> {}", coord_to_string(coord), describe(result));
    }
}
