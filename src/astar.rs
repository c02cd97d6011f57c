use fxhash::FxHashMap;
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;

use crate::closed_list::ClosedList;
use crate::error::{Endpoint, PlanError};
use crate::lazy_pq::LazyPq;
use crate::motion::motions;
use crate::node::{CellId, Coord, Node, Rank};
use crate::occupancy_grid::{Cell, OccupancyGrid};

/// Tunables of [AstarPlanner].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Consult the precomputed connected components before searching, so that an unreachable
    /// goal is reported without flood-filling its side of the grid.
    pub reachability_check: bool,
    /// Upper bound on expanded nodes per call. [None] searches until the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig {
            reachability_check: true,
            max_expansions: None,
        }
    }
}

impl PlannerConfig {
    pub fn with_reachability_check(mut self, enabled: bool) -> PlannerConfig {
        self.reachability_check = enabled;
        self
    }
    pub fn with_max_expansions(mut self, limit: usize) -> PlannerConfig {
        self.max_expansions = Some(limit);
        self
    }
}

/// Outcome of a single search.
#[derive(Clone, Debug)]
pub struct Plan {
    pub found: bool,
    /// Goal first, start last. Empty if no path was found.
    pub path: Vec<Node>,
    /// Number of nodes moved to the closed list.
    pub expanded: usize,
    /// The working copy of the grid, with expanded cells marked [Cell::Visited].
    pub explored: OccupancyGrid,
}

impl Plan {
    fn not_found(explored: OccupancyGrid, expanded: usize) -> Plan {
        Plan {
            found: false,
            path: Vec::new(),
            expanded,
            explored,
        }
    }
    /// The path in start-to-goal order.
    pub fn path_from_start(&self) -> Vec<Node> {
        self.path.iter().rev().copied().collect()
    }
    /// Coordinates of the path, goal first.
    pub fn coords(&self) -> Vec<Coord> {
        self.path.iter().map(Node::coord).collect()
    }
    /// Number of steps, one less than the number of cells on the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A* search on a 4-connected [OccupancyGrid] using the Manhattan distance as heuristic.
///
/// The planner owns the grid it was built with and never mutates it: every call to
/// [plan](Self::plan) works on a fresh copy along with its own frontier and closed list, so
/// repeated calls with the same endpoints give identical results.
#[derive(Clone, Debug)]
pub struct AstarPlanner {
    grid: OccupancyGrid,
    components: UnionFind<usize>,
    config: PlannerConfig,
}

impl AstarPlanner {
    pub fn new(grid: OccupancyGrid) -> AstarPlanner {
        AstarPlanner::with_config(grid, PlannerConfig::default())
    }

    pub fn with_config(grid: OccupancyGrid, config: PlannerConfig) -> AstarPlanner {
        let components = grid.generate_components();
        AstarPlanner {
            grid,
            components,
            config,
        }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Checks if start and goal are free cells on the same connected component.
    pub fn reachable(&self, start: Coord, goal: Coord) -> bool {
        self.grid.is_free(start)
            && self.grid.is_free(goal)
            && self
                .components
                .equiv(self.grid.id_of(start).0, self.grid.id_of(goal).0)
    }

    fn check_endpoint(&self, which: Endpoint, coord: Coord) -> Result<(), PlanError> {
        match self.grid.get(coord) {
            None => Err(PlanError::OutOfBounds {
                which,
                coord,
                size: self.grid.size(),
            }),
            Some(Cell::Obstacle) => Err(PlanError::BlockedEndpoint { which, coord }),
            Some(_) => Ok(()),
        }
    }

    /// Searches a shortest path from `start` to `goal`.
    ///
    /// Returns a [Plan] with `found == false` and an empty path if the goal cannot be reached.
    /// Errors are reserved for invalid endpoints, an exhausted expansion budget and internal
    /// inconsistencies while rebuilding the path.
    pub fn plan(&self, start: Coord, goal: Coord) -> Result<Plan, PlanError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::Goal, goal)?;
        if self.config.reachability_check && !self.reachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(Plan::not_found(self.grid.clone(), 0));
        }

        let n = self.grid.size();
        let mut working = self.grid.clone();
        let mut frontier: LazyPq<Rank, CellId> = LazyPq::new();
        let mut open: FxHashMap<CellId, Node> = FxHashMap::default();
        let mut closed = ClosedList::new();

        let start_node = Node::new(
            start.x,
            start.y,
            0,
            start.manhattan_distance(&goal),
            working.id_of(start),
        );
        enqueue(&mut frontier, &mut open, start_node);

        while let Some((_, id)) = frontier.pop() {
            let Some(mut current) = open.remove(&id) else {
                warn!("Frontier entry {} has no open node, skipping", id);
                continue;
            };
            current.id = working.id_of(current.coord());
            if current.coord() == goal {
                working.mark_visited(goal);
                closed.insert(current);
                let path = closed.reconstruct_path(start, goal, |id| working.coord_of(id))?;
                debug!(
                    "Found path of {} steps from {} to {} after {} expansions",
                    path.len() - 1,
                    start,
                    goal,
                    closed.len()
                );
                return Ok(Plan {
                    found: true,
                    path,
                    expanded: closed.len(),
                    explored: working,
                });
            }
            if let Some(limit) = self.config.max_expansions {
                if closed.len() >= limit {
                    debug!("Expansion budget of {} exhausted", limit);
                    return Err(PlanError::ExpansionLimit { limit });
                }
            }
            working.mark_visited(current.coord());
            for motion in motions() {
                let mut next = current + motion;
                next.heuristic = next.coord().manhattan_distance(&goal);
                next.parent = Some(current.id);
                // The goal skips the free check and ends the expansion of this node: any route
                // through a remaining sibling is at least one step longer.
                if next.coord() == goal {
                    next.id = working.id_of(goal);
                    enqueue(&mut frontier, &mut open, next);
                    break;
                }
                if next.is_outside(n) || !working.is_free(next.coord()) {
                    continue;
                }
                next.id = working.id_of(next.coord());
                enqueue(&mut frontier, &mut open, next);
            }
            closed.insert(current);
        }
        if self.config.reachability_check {
            warn!("Reachable goal could not be pathed to, are the components correct?");
        }
        debug!(
            "No path from {} to {} after {} expansions",
            start,
            goal,
            closed.len()
        );
        Ok(Plan::not_found(working, closed.len()))
    }
}

/// Queues `node` unless its cell is already queued at an equal or better rank.
fn enqueue(frontier: &mut LazyPq<Rank, CellId>, open: &mut FxHashMap<CellId, Node>, node: Node) {
    let rank = node.rank();
    if frontier
        .key_of(&node.id)
        .is_some_and(|queued| queued <= rank)
    {
        return;
    }
    frontier.insert(rank, node.id);
    open.insert(node.id, node);
}
