//! Common types for the game: coordinates, shot outcomes and board errors.

use crate::config::GRID_SIZE;

/// Grid coordinate `(x, y)`; `x` is the column, `y` the row.
pub type Coord = (usize, usize);

/// Outcome of a shot at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
    /// Cell was out of bounds or already resolved; the turn is not consumed.
    Repeat,
}

impl ShotResult {
    /// `true` for `Hit` and `Sunk`: the shooter keeps the turn.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// What is known about a cell from the shooter's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellShot {
    #[default]
    Untouched,
    /// Fired upon and empty, or deduced empty next to a sunk ship.
    Miss,
    Hit,
}

/// Errors returned by board placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A ship cell falls outside the grid.
    #[error("ship cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },
    /// A ship cell overlaps or touches an already placed ship.
    #[error("ship cell ({x}, {y}) overlaps or touches another ship")]
    Occupied { x: usize, y: usize },
    /// Ship length is not part of the fleet.
    #[error("invalid ship length {0}")]
    InvalidLength(usize),
    /// Board already holds the whole fleet.
    #[error("board already holds a full fleet")]
    FleetComplete,
    /// Random placement kept failing after every restart.
    #[error("unable to place fleet after {restarts} restarts")]
    PlacementExhausted { restarts: usize },
}

/// `true` when `(x, y)` lies on the grid.
#[inline]
pub fn in_bounds(x: isize, y: isize) -> bool {
    (0..GRID_SIZE as isize).contains(&x) && (0..GRID_SIZE as isize).contains(&y)
}

/// Shift a coordinate by `(dx, dy)`, returning `None` when it leaves the grid.
#[inline]
pub fn offset((x, y): Coord, dx: isize, dy: isize) -> Option<Coord> {
    let nx = x as isize + dx;
    let ny = y as isize + dy;
    in_bounds(nx, ny).then_some((nx as usize, ny as usize))
}

/// In-bounds cells of the 3×3 block centred on `coord`, including itself.
pub fn moore_block(coord: Coord) -> impl Iterator<Item = Coord> {
    (-1..=1).flat_map(move |dx| (-1..=1).filter_map(move |dy| offset(coord, dx, dy)))
}
