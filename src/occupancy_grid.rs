use core::fmt;

use itertools::Itertools;
use petgraph::unionfind::UnionFind;

use crate::error::GridError;
use crate::motion::motions;
use crate::node::{CellId, Coord, Node};

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Free,
    Obstacle,
    /// Expanded during a search.
    Visited,
    /// Lies on a returned path.
    Path,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Obstacle => '#',
            Cell::Visited => 'o',
            Cell::Path => '*',
        }
    }
}

/// Square `n`×`n` occupancy grid. Cell `(x, y)` is stored at index `x * n + y`, which is also
/// its [CellId].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    n: usize,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// An obstacle-free grid. A zero size yields an empty grid that no coordinate fits in.
    pub fn new(n: usize) -> OccupancyGrid {
        OccupancyGrid {
            n,
            cells: vec![Cell::Free; n * n],
        }
    }

    /// Builds a grid from rows of obstacle flags, `rows[x][y] == true` marking an obstacle.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<OccupancyGrid, GridError> {
        let n = rows.len();
        if n == 0 {
            return Err(GridError::Empty);
        }
        let mut grid = OccupancyGrid::new(n);
        for (x, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GridError::NotSquare {
                    row: x,
                    len: row.len(),
                    expected: n,
                });
            }
            for (y, &blocked) in row.iter().enumerate() {
                grid.set_obstacle(x as i32, y as i32, blocked);
            }
        }
        Ok(grid)
    }

    /// Parses a text map where line `x`, column `y` describes cell `(x, y)`: `.` is free and `#`
    /// is an obstacle. Blank lines and surrounding whitespace are ignored.
    pub fn parse(map: &str) -> Result<OccupancyGrid, GridError> {
        let rows = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, ch)| match ch {
                        '.' => Ok(false),
                        '#' => Ok(true),
                        _ => Err(GridError::InvalidCell { ch, row, column }),
                    })
                    .collect::<Result<Vec<bool>, GridError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        OccupancyGrid::from_rows(&rows)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        !coord.is_outside(self.n)
    }

    /// The cell at `coord`, or [None] outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.cells[self.id_of(coord).0])
        } else {
            None
        }
    }

    /// True iff `coord` is inside the grid and [Cell::Free].
    pub fn is_free(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Free)
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if self.in_bounds(coord) {
            let ix = self.id_of(coord).0;
            self.cells[ix] = cell;
        }
    }

    pub fn set_obstacle(&mut self, x: i32, y: i32, blocked: bool) {
        let cell = if blocked { Cell::Obstacle } else { Cell::Free };
        self.set(Coord::new(x, y), cell);
    }

    /// Identity of an in-bounds coordinate.
    pub fn id_of(&self, coord: Coord) -> CellId {
        debug_assert!(self.in_bounds(coord));
        CellId(coord.x as usize * self.n + coord.y as usize)
    }

    /// Inverse of [id_of](Self::id_of).
    pub fn coord_of(&self, id: CellId) -> Coord {
        Coord::new((id.0 / self.n) as i32, (id.0 % self.n) as i32)
    }

    pub fn mark_visited(&mut self, coord: Coord) {
        self.set(coord, Cell::Visited);
    }

    /// Marks every node of `path` as [Cell::Path].
    pub fn mark_path(&mut self, path: &[Node]) {
        for node in path {
            self.set(node.coord(), Cell::Path);
        }
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Links every free cell to its free 4-neighbours. Two cells are mutually reachable iff they
    /// end up in the same component.
    pub fn generate_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for x in 0..self.n as i32 {
            for y in 0..self.n as i32 {
                let point = Coord::new(x, y);
                if !self.is_free(point) {
                    continue;
                }
                let parent_ix = self.id_of(point).0;
                // Linking forward is enough, the backward moves are covered from the other side.
                motions()
                    .map(|m| Coord::new(x + m.dx, y + m.dy))
                    .filter(|p| (p.x > x || p.y > y) && self.is_free(*p))
                    .for_each(|p| {
                        components.union(parent_ix, self.id_of(p).0);
                    });
            }
        }
        components
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells.iter().chunks(self.n.max(1)) {
            writeln!(f, "{}", row.map(|c| c.symbol()).join(" "))?;
        }
        Ok(())
    }
}
