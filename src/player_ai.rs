use rand::rngs::SmallRng;

use crate::{
    ai::AiEngine,
    board::Board,
    common::{Coord, ShotResult},
};

use crate::player::Player;

/// Computer opponent driven by the hunt/target engine.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    engine: AiEngine,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &AiEngine {
        &self.engine
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> Option<Coord> {
        self.engine.choose_shot(rng, enemy)
    }

    fn handle_shot_result(&mut self, coord: Coord, result: ShotResult, enemy: &Board) {
        self.engine.process_result(coord, result, enemy);
    }

    fn new_game(&mut self) {
        self.engine.reset();
    }
}
