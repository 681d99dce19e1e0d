//! Randomized fleet layout under the no-touch rule.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{FLEET, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS, MAX_PLACEMENT_RESTARTS};
use crate::ship::{Orientation, Ship};

/// Uniform orientation and an anchor that keeps a ship of `length` on the grid.
pub fn random_anchor<R: Rng + ?Sized>(rng: &mut R, length: usize) -> (Coord, Orientation) {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_x, max_y) = match orientation {
        Orientation::Horizontal => (GRID_SIZE - length, GRID_SIZE - 1),
        Orientation::Vertical => (GRID_SIZE - 1, GRID_SIZE - length),
    };
    let x = rng.random_range(0..=max_x);
    let y = rng.random_range(0..=max_y);
    ((x, y), orientation)
}

/// Try to drop one ship of `length` somewhere legal. Returns `false` when
/// every attempt was blocked.
fn place_one<R: Rng + ?Sized>(board: &mut Board, rng: &mut R, length: usize) -> bool {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let (anchor, orientation) = random_anchor(rng, length);
        let Ok(ship) = Ship::new(anchor, orientation, length) else {
            continue;
        };
        if board.can_place(ship.cells()) && board.place(ship).is_ok() {
            return true;
        }
    }
    false
}

/// Reset `board` and lay out the whole fleet, longest ship first.
///
/// A ship that cannot be placed after `MAX_PLACEMENT_ATTEMPTS` throws away the
/// whole layout and starts again from an empty board.
pub fn place_fleet<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    'restart: for restart in 0..=MAX_PLACEMENT_RESTARTS {
        board.reset();
        for &length in FLEET.iter() {
            if !place_one(board, rng, length) {
                log::debug!(
                    "no room for ship of length {} after {} attempts, restart #{}",
                    length,
                    MAX_PLACEMENT_ATTEMPTS,
                    restart + 1
                );
                continue 'restart;
            }
        }
        return Ok(());
    }
    board.reset();
    Err(BoardError::PlacementExhausted {
        restarts: MAX_PLACEMENT_RESTARTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn anchors_keep_ship_on_grid() {
        let mut rng = SmallRng::seed_from_u64(7);
        for length in 1..=4 {
            for _ in 0..500 {
                let (anchor, orientation) = random_anchor(&mut rng, length);
                assert!(Ship::new(anchor, orientation, length).is_ok());
            }
        }
    }

    #[test]
    fn place_one_gives_up_on_full_board() {
        let mut board = Board::new();
        // Eight horizontal 4-ships whose halos cover every cell.
        for y in [1, 4, 7, 9] {
            for x in [0, 5] {
                board
                    .place(Ship::new((x, y), Orientation::Horizontal, 4).unwrap())
                    .unwrap();
            }
        }
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(!place_one(&mut board, &mut rng, 1));
        assert_eq!(board.ships().len(), 8);
    }

    /// Always yields zero, so every attempt picks the same anchor and orientation.
    struct StuckRng;

    impl rand::RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn fleet_gives_up_after_restart_cap() {
        let mut board = Board::new();
        board.shoot(5, 5);
        let result = place_fleet(&mut board, &mut StuckRng);
        assert_eq!(
            result,
            Err(BoardError::PlacementExhausted {
                restarts: MAX_PLACEMENT_RESTARTS
            })
        );
        assert!(board.ships().is_empty());
        assert_eq!(board.untouched_cells().len(), GRID_SIZE * GRID_SIZE);
    }
}
