//! Ship definitions: occupied cells and accumulated hits.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{offset, BoardError, Coord};
use crate::config::MAX_SHIP_LEN;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Grows along +x from the anchor.
    Horizontal,
    /// Grows along +y from the anchor.
    Vertical,
}

/// A ship placed on the grid, with hits tracked per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
    hits: BTreeSet<Coord>,
}

impl Ship {
    /// Lay out a ship of `length` cells starting at `anchor`.
    pub fn new(anchor: Coord, orientation: Orientation, length: usize) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LEN {
            return Err(BoardError::InvalidLength(length));
        }
        let mut cells = Vec::with_capacity(length);
        for i in 0..length as isize {
            let (dx, dy) = match orientation {
                Orientation::Horizontal => (i, 0),
                Orientation::Vertical => (0, i),
            };
            let cell = offset(anchor, dx, dy).ok_or(BoardError::OutOfBounds {
                x: anchor.0 + dx as usize,
                y: anchor.1 + dy as usize,
            })?;
            cells.push(cell);
        }
        Ok(Ship {
            cells,
            hits: BTreeSet::new(),
        })
    }

    /// Register a hit at `coord`. Returns `true` if the ship occupies it.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.cells.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Occupied cells, anchor first.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn hits(&self) -> &BTreeSet<Coord> {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ cells: {:?}, hits: {}/{} }}",
            self.cells,
            self.hits.len(),
            self.cells.len(),
        )
    }
}
