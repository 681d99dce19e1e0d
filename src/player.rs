use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coord, ShotResult},
};

/// Interface implemented by different player types.
///
/// A player places its own fleet, picks cells to fire at on the opponent's
/// board and hears back what each shot did.
pub trait Player {
    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        board.place_all_ships(rng)
    }

    /// Choose the next cell to fire at, or `None` to stop.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> Option<Coord>;

    /// Inform the player of the result of its last shot, after `enemy` was updated.
    fn handle_shot_result(&mut self, _coord: Coord, _result: ShotResult, _enemy: &Board) {}

    /// Drop any per-game memory before a new game.
    fn new_game(&mut self) {}
}
