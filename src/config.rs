/// Side length of both square grids.
pub const GRID_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;
/// Ship lengths in placement order, longest first.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Longest ship in the fleet.
pub const MAX_SHIP_LEN: usize = 4;

/// Random anchor/orientation attempts per ship before the whole fleet restarts.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Full-fleet restarts before placement is declared impossible.
pub const MAX_PLACEMENT_RESTARTS: usize = 1000;

/// Entries kept in the high-score table.
pub const SCORE_TABLE_LIMIT: usize = 10;

/// Longest player name accepted by the terminal front-end.
pub const MAX_NAME_LEN: usize = 20;
