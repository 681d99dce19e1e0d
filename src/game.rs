use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Coord, ShotResult},
    player::Player,
    player_ai::AiPlayer,
};

/// Whose shot it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Ai,
}

/// Current status of a game, seen from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Shots the session refuses to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("it is not this side's turn")]
    NotYourTurn,
    #[error("the game is already over")]
    GameOver,
}

/// One human-vs-computer game: both boards, the computer player and the turn.
///
/// A hit or a sink keeps the turn, a miss passes it, and a repeat shot is
/// rejected without consuming the turn.
#[derive(Debug, Clone)]
pub struct GameSession {
    human_board: Board,
    ai_board: Board,
    ai: AiPlayer,
    turn: Turn,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with freshly placed fleets on both boards. The human
    /// moves first until `coin_toss` says otherwise.
    pub fn new(rng: &mut SmallRng) -> Result<Self, BoardError> {
        let mut ai = AiPlayer::new();
        let mut human_board = Board::new();
        let mut ai_board = Board::new();
        human_board.place_all_ships(rng)?;
        ai.place_ships(rng, &mut ai_board)?;
        Ok(Self {
            human_board,
            ai_board,
            ai,
            turn: Turn::Human,
            status: GameStatus::InProgress,
        })
    }

    /// Play again on the same session: new fleets, a reset computer player.
    pub fn restart(&mut self, rng: &mut SmallRng) -> Result<(), BoardError> {
        self.human_board.place_all_ships(rng)?;
        self.ai.place_ships(rng, &mut self.ai_board)?;
        self.ai.new_game();
        self.turn = Turn::Human;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Pick the starting side at random.
    pub fn coin_toss(&mut self, rng: &mut SmallRng) -> Turn {
        self.turn = if rng.random_bool(0.5) {
            Turn::Human
        } else {
            Turn::Ai
        };
        log::info!("{:?} moves first", self.turn);
        self.turn
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The human's fleet, fired upon by the computer.
    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    /// The computer's fleet, fired upon by the human.
    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn ai(&self) -> &AiPlayer {
        &self.ai
    }

    fn ensure_turn(&self, side: Turn) -> Result<(), SessionError> {
        if self.is_over() {
            Err(SessionError::GameOver)
        } else if self.turn != side {
            Err(SessionError::NotYourTurn)
        } else {
            Ok(())
        }
    }

    /// The human fires at `(x, y)` on the computer's board.
    pub fn player_shot(&mut self, x: usize, y: usize) -> Result<ShotResult, SessionError> {
        self.ensure_turn(Turn::Human)?;
        let result = self.ai_board.shoot(x, y);
        match result {
            ShotResult::Hit | ShotResult::Sunk => {
                if self.ai_board.all_sunk() {
                    log::info!("human sank the last ship");
                    self.status = GameStatus::Won;
                }
            }
            ShotResult::Miss => self.turn = Turn::Ai,
            ShotResult::Repeat => {}
        }
        Ok(result)
    }

    /// Let the computer take one shot. `None` means it found nothing left to
    /// fire at and the turn went back to the human.
    pub fn ai_turn(&mut self, rng: &mut SmallRng) -> Result<Option<(Coord, ShotResult)>, SessionError> {
        self.ensure_turn(Turn::Ai)?;
        let Some(coord) = self.ai.select_target(rng, &self.human_board) else {
            self.turn = Turn::Human;
            return Ok(None);
        };
        let result = self.human_board.shoot(coord.0, coord.1);
        self.ai.handle_shot_result(coord, result, &self.human_board);
        match result {
            ShotResult::Hit | ShotResult::Sunk => {
                if self.human_board.all_sunk() {
                    log::info!("computer sank the last ship");
                    self.status = GameStatus::Lost;
                }
            }
            ShotResult::Miss | ShotResult::Repeat => self.turn = Turn::Human,
        }
        Ok(Some((coord, result)))
    }
}
