//! # grid_astar
//!
//! Single-source shortest paths on a square occupancy grid with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Moves are 4-connected with unit
//! cost and the heuristic is the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), which is admissible
//! and consistent for this motion model, so returned paths are shortest paths.
//!
//! The frontier is a [LazyPq]: a binary heap with lazy deletion, which gives decrease-key by
//! identity without mutating the heap. Connected components are precomputed so that an
//! unreachable goal is reported without flood-filling the grid.
//!
//! ```
//! use grid_astar::{AstarPlanner, Coord, OccupancyGrid};
//!
//! let grid = OccupancyGrid::parse(
//!     "
//!     ...
//!     .#.
//!     ...
//!     ",
//! )
//! .unwrap();
//! let plan = AstarPlanner::new(grid).plan(Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! assert!(plan.found);
//! assert_eq!(plan.path.len(), 5);
//! // Paths are returned goal first.
//! assert_eq!(plan.path[0].coord(), Coord::new(2, 2));
//! ```
pub mod astar;
pub mod closed_list;
pub mod error;
pub mod lazy_pq;
pub mod motion;
pub mod node;
pub mod occupancy_grid;

pub use astar::{AstarPlanner, Plan, PlannerConfig};
pub use closed_list::ClosedList;
pub use error::{Endpoint, GridError, PlanError};
pub use lazy_pq::LazyPq;
pub use motion::{motions, Motion, MOTIONS};
pub use node::{CellId, Coord, Cost, Node, Rank};
pub use occupancy_grid::{Cell, OccupancyGrid};
