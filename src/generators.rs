use std::iter;

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cells::{Direction, DirectionSmallVec, Position, ALL_DIRECTIONS};
use crate::grid::Grid;

/// Where a `PathCarver` is in its walk.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CarverState {
    /// The last step carved a passage to an unvisited island.
    Advancing,
    /// The last step found no unvisited neighbour and moved back down the path.
    Backtracking,
    /// The path stack is empty, every reachable island has been visited.
    Done,
}

/// What a completed carving run did.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct CarveSummary {
    pub islands_visited: usize,
    pub passages_carved: usize,
    pub steps: usize,
    pub max_stack_depth: usize,
}

/// Randomized depth first backtracking over the islands of a grid.
///
/// The carver keeps the path from the start to the current island on an explicit stack.
/// Each step either carves through to a random unvisited neighbour of the island on top of
/// the stack and pushes it, or pops the stack when there is none. Passages are only carved
/// into unvisited islands so the carved walls form a spanning tree of every island
/// reachable from the start.
#[derive(Clone, Debug)]
pub struct PathCarver {
    stack: Vec<Position>,
    state: CarverState,
    summary: CarveSummary,
}

impl PathCarver {
    /// Begin a walk from `start`, carving it open.
    pub fn new(grid: &mut Grid, start: Position) -> PathCarver {
        let mut stack = Vec::with_capacity(grid.islands_count());
        let mut summary = CarveSummary::default();

        let state = if grid.is_valid_position(start) && start.is_island_position() {
            grid.open(start);
            stack.push(start);
            summary.islands_visited = 1;
            summary.max_stack_depth = 1;
            CarverState::Advancing
        } else {
            CarverState::Done
        };

        PathCarver {
            stack,
            state,
            summary,
        }
    }

    #[inline]
    pub fn state(&self) -> CarverState {
        self.state
    }

    #[inline]
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// The island on top of the path stack.
    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.stack.last().cloned()
    }

    #[inline]
    pub fn summary(&self) -> CarveSummary {
        self.summary
    }

    /// Advance or backtrack once. Once `Done`, stepping does nothing.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> CarverState {
        let current = match self.stack.last() {
            Some(pos) => *pos,
            None => {
                self.state = CarverState::Done;
                return self.state;
            }
        };
        self.summary.steps += 1;

        let moves = candidate_moves(grid, current);
        self.state = match moves.choose(rng) {
            Some(&(direction, next)) => {
                carve_passage(grid, current, next);
                trace!("Carved {:?} from {:?} to {:?}", direction, current, next);
                self.stack.push(next);
                self.summary.islands_visited += 1;
                self.summary.passages_carved += 1;
                self.summary.max_stack_depth = self.summary.max_stack_depth.max(self.stack.len());
                CarverState::Advancing
            }
            None => {
                let _ = self.stack.pop();
                trace!("Backtracked from {:?}", current);
                if self.stack.is_empty() {
                    CarverState::Done
                } else {
                    CarverState::Backtracking
                }
            }
        };

        self.state
    }

    /// Step until the stack is empty.
    pub fn run<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> CarveSummary {
        while self.step(grid, rng) != CarverState::Done {}
        debug!("Finished carving: {:?}", self.summary);
        self.summary
    }
}

/// Carve a perfect maze into `grid` by randomized depth first backtracking from `start`.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut Grid,
                                              start: Position,
                                              rng: &mut R)
                                              -> CarveSummary {
    PathCarver::new(grid, start).run(grid, rng)
}

/// Directions from `pos` whose island two cells away is on the grid and unvisited, in
/// Up, Down, Left, Right order.
pub fn candidate_directions(grid: &Grid, pos: Position) -> DirectionSmallVec {
    candidate_moves(grid, pos).iter().map(|&(direction, _)| direction).collect()
}

/// Candidate directions paired with the unvisited island each one leads to.
fn candidate_moves(grid: &Grid, pos: Position) -> SmallVec<[(Direction, Position); 4]> {
    ALL_DIRECTIONS.iter()
        .filter_map(|&direction| {
            grid.neighbour_at_direction(pos, direction, 2)
                .filter(|&neighbour| grid.is_unvisited_island(neighbour))
                .map(|neighbour| (direction, neighbour))
        })
        .collect()
}

/// Open `from`, the wall between it and `to`, and `to`.
fn carve_passage(grid: &mut Grid, from: Position, to: Position) {
    let wall = from.midpoint(to);
    debug_assert!(wall.is_some(), "{:?} and {:?} are not two cells apart", from, to);
    for pos in iter::once(from).chain(wall).chain(iter::once(to)) {
        grid.open(pos);
    }
}
