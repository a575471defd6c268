use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info, trace, warn};

use crate::error::{GridError, Result};
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::heuristic::{Heuristic, Manhattan};
use crate::observer::{Flow, SearchEvent, SearchObserver, Snapshot};
use crate::{Cost, UNIT_COST};

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Start-to-goal path, both ends included.
    Found(Vec<Point>),
    /// The frontier ran dry before the goal was expanded.
    Unreachable,
    /// The observer asked the search to stop.
    Cancelled,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
    /// The found path, or an empty one if there is none.
    pub fn into_path(self) -> Vec<Point> {
        match self {
            SearchOutcome::Found(path) => path,
            _ => Vec::new(),
        }
    }
}

/// Forwards events to an optional observer and remembers whether it asked to stop.
struct Emitter<'o> {
    observer: Option<&'o mut dyn SearchObserver>,
    start: Point,
    goal: Point,
    stopped: bool,
}

impl Emitter<'_> {
    fn emit(&mut self, grid: &Grid, current: Point, path: &[Point], event: SearchEvent) {
        if let Some(observer) = self.observer.as_deref_mut() {
            let snapshot = Snapshot {
                grid,
                start: self.start,
                goal: self.goal,
                current,
                path,
                event,
            };
            if observer.observe(&snapshot) == Flow::Stop {
                self.stopped = true;
            }
        }
    }
}

/// A* over a [Grid] with unit step cost and 4-directional moves.
///
/// The solver itself is stateless apart from its heuristic; all search state lives in the
/// cells of the grid being searched. Searching a grid that still carries the state of an
/// earlier search gives undefined results, call [Grid::reset_search] in between.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver<H = Manhattan> {
    pub heuristic: H,
}

impl AstarSolver<Manhattan> {
    pub fn new() -> AstarSolver<Manhattan> {
        AstarSolver {
            heuristic: Manhattan,
        }
    }
}

impl<H: Heuristic> AstarSolver<H> {
    /// Uses a custom heuristic. Only admissible heuristics keep the result optimal.
    pub fn with_heuristic(heuristic: H) -> AstarSolver<H> {
        AstarSolver { heuristic }
    }

    /// Computes a shortest path from `start` to `goal`. An unreachable goal, or a search
    /// stopped by the observer, gives an empty path.
    pub fn find_path(
        &self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<Vec<Point>> {
        self.search(grid, start, goal, observer)
            .map(SearchOutcome::into_path)
    }

    /// Runs the search and reports how it ended. Start and goal are validated before any
    /// cell is touched.
    pub fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<SearchOutcome> {
        let start_ix = member_index(grid, start, "start")?;
        let goal_ix = member_index(grid, goal, "goal")?;
        debug!("Searching path from {} to {}", start, goal);

        let mut emitter = Emitter {
            observer,
            start,
            goal,
            stopped: false,
        };
        let start_h = self.heuristic.estimate(&start, &goal);
        let start_cell = grid.cell_at_mut(start_ix);
        start_cell.relax(0, start_h, None);
        if start_cell.is_wall {
            warn!("Start {} is a wall and will not be expanded", start);
        }

        let mut frontier = Frontier::new();
        frontier.push(start_ix, 0, start_h);
        let mut expansions = 0usize;
        loop {
            if emitter.stopped {
                info!("Search from {} to {} was stopped by its observer", start, goal);
                return Ok(SearchOutcome::Cancelled);
            }
            let Some(entry) = frontier.pop() else {
                break;
            };
            let cell = grid.cell_at(entry.index);
            // We may have pushed a cell several times if a cheaper route was found later.
            // Only the entry carrying its current cost is expanded.
            if entry.cost > cell.g {
                continue;
            }
            let current = cell.position();
            let current_g = cell.g;
            let blocked = cell.is_wall;
            expansions += 1;
            trace!(
                "Expanding {} (g = {}, f = {}, frontier = {})",
                current,
                current_g,
                entry.estimated_cost,
                frontier.len()
            );

            if entry.index == goal_ix {
                let path = grid.path_to(current)?;
                emitter.emit(grid, current, &path, SearchEvent::Expand);
                if emitter.stopped {
                    continue;
                }
                emitter.emit(grid, current, &path, SearchEvent::Complete);
                debug!(
                    "Found path of {} cells from {} to {} after {} expansions",
                    path.len(),
                    start,
                    goal,
                    expansions
                );
                return Ok(SearchOutcome::Found(path));
            }

            emitter.emit(grid, current, &[], SearchEvent::Expand);
            if emitter.stopped || blocked {
                continue;
            }
            for neighbor in grid.neighbors(current)? {
                let n_ix = grid.index(neighbor)?;
                let tentative_g = current_g + UNIT_COST;
                let n_cell = grid.cell_at(n_ix);
                if n_cell.is_wall || tentative_g >= n_cell.g {
                    continue;
                }
                let h = self.heuristic.estimate(&neighbor, &goal);
                let n_cell = grid.cell_at_mut(n_ix);
                n_cell.relax(tentative_g, h, Some(current));
                frontier.push(n_ix, tentative_g, n_cell.f);
                emitter.emit(grid, current, &[], SearchEvent::Relax { neighbor });
                if emitter.stopped {
                    break;
                }
            }
        }
        info!(
            "{} is not reachable from {} ({} cells expanded)",
            goal, start, expansions
        );
        Ok(SearchOutcome::Unreachable)
    }
}

/// Computes a shortest path with the [Manhattan] heuristic, see [AstarSolver::find_path].
pub fn find_path(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    observer: Option<&mut dyn SearchObserver>,
) -> Result<Vec<Point>> {
    AstarSolver::new().find_path(grid, start, goal, observer)
}

/// Cost of walking `path`, or [None] if two consecutive points are not 4-adjacent.
pub fn path_cost(path: &[Point]) -> Option<Cost> {
    let mut total: Cost = 0;
    for (a, b) in path.iter().tuple_windows() {
        if a.manhattan_distance(b) != 1 {
            return None;
        }
        total += UNIT_COST;
    }
    Some(total)
}

fn member_index(grid: &Grid, point: Point, name: &'static str) -> Result<usize> {
    grid.index(point).map_err(|e| GridError::InvalidArgument {
        name,
        reason: e.to_string(),
    })
}
