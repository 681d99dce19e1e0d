//! Game board state: ship ownership, shot outcomes and the ships themselves.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{moore_block, BoardError, CellShot, Coord, ShotResult};
use crate::config::{FLEET, GRID_SIZE, MAX_SHIP_LEN, NUM_SHIPS};
use crate::placement;
use crate::ship::Ship;

/// One player's grid: who owns each cell and what has been fired at it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ownership: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
    shots: [[CellShot; GRID_SIZE]; GRID_SIZE],
    ships: Vec<Ship>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed, nothing fired).
    pub fn new() -> Self {
        Board {
            ownership: [[None; GRID_SIZE]; GRID_SIZE],
            shots: [[CellShot::Untouched; GRID_SIZE]; GRID_SIZE],
            ships: Vec::with_capacity(NUM_SHIPS),
        }
    }

    /// Clear every ship and every shot.
    pub(crate) fn reset(&mut self) {
        *self = Board::new();
    }

    /// Randomly lay out the standard fleet, replacing whatever was there.
    pub fn place_all_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        placement::place_fleet(self, rng)
    }

    /// Ships on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Index of the ship occupying `(x, y)`, if any.
    pub fn owner(&self, x: usize, y: usize) -> Option<usize> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return None;
        }
        self.ownership[x][y].map(usize::from)
    }

    /// Shot state of `(x, y)`; out-of-bounds cells read as `None`.
    pub fn shot_state(&self, x: usize, y: usize) -> Option<CellShot> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return None;
        }
        Some(self.shots[x][y])
    }

    pub fn is_untouched(&self, (x, y): Coord) -> bool {
        self.shot_state(x, y) == Some(CellShot::Untouched)
    }

    /// All cells currently in `state`, column-major.
    pub fn cells_with(&self, state: CellShot) -> impl Iterator<Item = Coord> + '_ {
        (0..GRID_SIZE)
            .flat_map(|x| (0..GRID_SIZE).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.shots[x][y] == state)
    }

    pub fn untouched_cells(&self) -> Vec<Coord> {
        self.cells_with(CellShot::Untouched).collect()
    }

    /// Number of cells owned by a ship.
    pub fn occupied_cells(&self) -> usize {
        self.ownership.iter().flatten().filter(|o| o.is_some()).count()
    }

    /// `true` when every cell is on the grid and neither it nor any of its
    /// eight neighbours belongs to a ship.
    pub fn can_place(&self, cells: &[Coord]) -> bool {
        self.first_conflict(cells).is_none()
    }

    fn first_conflict(&self, cells: &[Coord]) -> Option<BoardError> {
        for &(x, y) in cells {
            if x >= GRID_SIZE || y >= GRID_SIZE {
                return Some(BoardError::OutOfBounds { x, y });
            }
            if moore_block((x, y)).any(|(nx, ny)| self.ownership[nx][ny].is_some()) {
                return Some(BoardError::Occupied { x, y });
            }
        }
        None
    }

    /// Register `ship` on the board, returning its index.
    pub fn place(&mut self, ship: Ship) -> Result<usize, BoardError> {
        if self.ships.len() >= NUM_SHIPS {
            return Err(BoardError::FleetComplete);
        }
        if ship.is_empty() || ship.len() > MAX_SHIP_LEN {
            return Err(BoardError::InvalidLength(ship.len()));
        }
        if let Some(err) = self.first_conflict(ship.cells()) {
            return Err(err);
        }
        let index = self.ships.len();
        for &(x, y) in ship.cells() {
            self.ownership[x][y] = Some(index as u8);
        }
        self.ships.push(ship);
        Ok(index)
    }

    /// Fire at `(x, y)`.
    ///
    /// Sinking a ship also marks every untouched cell around it as a miss,
    /// since ships never touch.
    pub fn shoot(&mut self, x: usize, y: usize) -> ShotResult {
        if x >= GRID_SIZE || y >= GRID_SIZE || self.shots[x][y] != CellShot::Untouched {
            return ShotResult::Repeat;
        }
        let Some(index) = self.ownership[x][y] else {
            self.shots[x][y] = CellShot::Miss;
            return ShotResult::Miss;
        };

        self.shots[x][y] = CellShot::Hit;
        let ship = &mut self.ships[usize::from(index)];
        ship.register_hit((x, y));
        if !ship.is_sunk() {
            return ShotResult::Hit;
        }

        log::debug!("ship {} of length {} sunk at ({}, {})", index, ship.len(), x, y);
        let cells = ship.cells().to_vec();
        for cell in cells {
            for (nx, ny) in moore_block(cell) {
                if self.shots[nx][ny] == CellShot::Untouched {
                    self.shots[nx][ny] = CellShot::Miss;
                }
            }
        }
        ShotResult::Sunk
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Afloat ship count per length, longest first: `[(4, n), (3, n), (2, n), (1, n)]`.
    pub fn remaining_fleet(&self) -> [(usize, usize); MAX_SHIP_LEN] {
        let mut counts: [(usize, usize); MAX_SHIP_LEN] = core::array::from_fn(|i| (MAX_SHIP_LEN - i, 0));
        for ship in self.ships.iter().filter(|s| !s.is_sunk()) {
            counts[MAX_SHIP_LEN - ship.len()].1 += 1;
        }
        counts
    }

    /// `true` once the board holds every ship of the standard fleet.
    pub fn is_fully_placed(&self) -> bool {
        self.ships.len() == NUM_SHIPS
            && self.ships.iter().map(Ship::len).eq(FLEET.iter().copied())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for y in 0..GRID_SIZE {
            write!(f, "  ")?;
            for x in 0..GRID_SIZE {
                let ch = match (self.shots[x][y], self.ownership[x][y]) {
                    (CellShot::Hit, _) => 'X',
                    (CellShot::Miss, _) => 'o',
                    (CellShot::Untouched, Some(_)) => 'S',
                    (CellShot::Untouched, None) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ships: {:?}\n}}", self.ships)
    }
}
