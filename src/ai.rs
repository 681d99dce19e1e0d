// Hunt/target shooting logic against an opponent board.
// Fires at random until something is hit, then works outward from the hits.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{offset, Coord, ShotResult};

/// Axis neighbours probed after a first hit, in probing order: +x, -x, +y, -y.
const AXIS_STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Where the engine is in its hunt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AiMode {
    /// No partially hit ship known; fire at random.
    #[default]
    Searching,
    /// Working on a wounded ship.
    Targeting {
        /// Hits on the ship being hunted, in the order they landed.
        cluster: Vec<Coord>,
        /// Candidate cells still to try, earliest found first.
        frontier: VecDeque<Coord>,
    },
}

/// Stateful hunt/target shooter.
#[derive(Debug, Clone, Default)]
pub struct AiEngine {
    state: AiMode,
}

impl AiEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; used when a new game starts.
    pub fn reset(&mut self) {
        self.state = AiMode::Searching;
    }

    pub fn state(&self) -> &AiMode {
        &self.state
    }

    pub fn is_targeting(&self) -> bool {
        matches!(self.state, AiMode::Targeting { .. })
    }

    /// Hits on the ship currently hunted; empty while searching.
    pub fn cluster(&self) -> &[Coord] {
        match &self.state {
            AiMode::Searching => &[],
            AiMode::Targeting { cluster, .. } => cluster,
        }
    }

    /// Queued follow-up cells, front first; empty while searching.
    pub fn frontier(&self) -> Vec<Coord> {
        match &self.state {
            AiMode::Searching => Vec::new(),
            AiMode::Targeting { frontier, .. } => frontier.iter().copied().collect(),
        }
    }

    /// Pick the next cell to fire at on `enemy`, or `None` when nothing is left.
    pub fn choose_shot<R: Rng + ?Sized>(&mut self, rng: &mut R, enemy: &Board) -> Option<Coord> {
        if let AiMode::Targeting { frontier, .. } = &mut self.state {
            // Sunk-ship halos and earlier shots can resolve queued cells.
            while frontier.front().is_some_and(|&c| !enemy.is_untouched(c)) {
                frontier.pop_front();
            }
            match frontier.pop_front() {
                Some(next) => return Some(next),
                None => {
                    log::debug!("frontier exhausted, back to searching");
                    self.state = AiMode::Searching;
                }
            }
        }
        enemy.untouched_cells().choose(rng).copied()
    }

    /// Feed back the outcome of the shot at `coord` against `enemy`.
    pub fn process_result(&mut self, coord: Coord, result: ShotResult, enemy: &Board) {
        match result {
            ShotResult::Hit => {
                if let AiMode::Searching = self.state {
                    self.state = AiMode::Targeting {
                        cluster: Vec::new(),
                        frontier: VecDeque::new(),
                    };
                }
                if let AiMode::Targeting { cluster, frontier } = &mut self.state {
                    cluster.push(coord);
                    update_targets(cluster, frontier, enemy);
                }
            }
            ShotResult::Sunk => self.state = AiMode::Searching,
            ShotResult::Miss | ShotResult::Repeat => {}
        }
    }
}

/// Extend `frontier` with candidates derived from the hits in `cluster`.
///
/// A single hit queues its four axis neighbours. Two or more hits on one line
/// queue the cell just past each end of the line; cells between non-adjacent
/// hits are not added here.
fn update_targets(cluster: &[Coord], frontier: &mut VecDeque<Coord>, enemy: &Board) {
    let mut push = |candidate: Option<Coord>| {
        if let Some(c) = candidate {
            if enemy.is_untouched(c) && !frontier.contains(&c) {
                frontier.push_back(c);
            }
        }
    };

    let Some(&first) = cluster.first() else {
        return;
    };
    if cluster.len() == 1 {
        for (dx, dy) in AXIS_STEPS {
            push(offset(first, dx, dy));
        }
        return;
    }

    let (x0, y0) = first;
    if cluster.iter().all(|&(x, _)| x == x0) {
        let min_y = cluster.iter().map(|c| c.1).min().unwrap_or(y0);
        let max_y = cluster.iter().map(|c| c.1).max().unwrap_or(y0);
        push(offset((x0, min_y), 0, -1));
        push(offset((x0, max_y), 0, 1));
    } else if cluster.iter().all(|&(_, y)| y == y0) {
        let min_x = cluster.iter().map(|c| c.0).min().unwrap_or(x0);
        let max_x = cluster.iter().map(|c| c.0).max().unwrap_or(x0);
        push(offset((min_x, y0), -1, 0));
        push(offset((max_x, y0), 1, 0));
    }
}
