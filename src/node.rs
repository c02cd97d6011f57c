use core::fmt;
use std::cmp::Ordering;
use std::ops::{Add, Sub};

use crate::motion::Motion;

/// Path cost type. All motions have unit cost, so integers suffice.
pub type Cost = i32;

/// Grid coordinate. This is the identity key of a cell: two nodes are the same place iff their
/// coordinates match, whatever their search bookkeeping says.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }
    pub fn manhattan_distance(&self, other: &Coord) -> Cost {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
    /// True iff either component is negative or not smaller than the grid dimension `n`.
    pub fn is_outside(&self, n: usize) -> bool {
        self.x < 0 || self.y < 0 || self.x as usize >= n || self.y as usize >= n
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dense identity of an in-bounds cell, `x * n + y` on an n×n grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Frontier ranking key. Lower ranks are expanded first: the smallest total estimated cost wins,
/// and among equal totals the entry further from the start (larger accumulated cost, hence
/// smaller heuristic) wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rank {
    pub total: Cost,
    pub heuristic: Cost,
}

impl Rank {
    pub fn new(cost: Cost, heuristic: Cost) -> Rank {
        Rank {
            total: cost + heuristic,
            heuristic,
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.total.cmp(&other.total) {
            Ordering::Equal => self.heuristic.cmp(&other.heuristic),
            s => s,
        }
    }
}

/// A grid cell together with its search bookkeeping.
///
/// [Node] intentionally has no [PartialEq]: use [Node::same_place] (identity) or
/// [Node::rank] (ordering) depending on which of the two is meant.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub x: i32,
    pub y: i32,
    /// Accumulated cost from the start.
    pub cost: Cost,
    /// Estimated remaining cost to the goal.
    pub heuristic: Cost,
    pub id: CellId,
    /// Identity of the node this one was generated from, [None] for the start.
    pub parent: Option<CellId>,
}

impl Node {
    pub fn new(x: i32, y: i32, cost: Cost, heuristic: Cost, id: CellId) -> Node {
        Node {
            x,
            y,
            cost,
            heuristic,
            id,
            parent: None,
        }
    }
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
    pub fn rank(&self) -> Rank {
        Rank::new(self.cost, self.heuristic)
    }
    pub fn same_place(&self, other: &Node) -> bool {
        self.x == other.x && self.y == other.y
    }
    pub fn is_outside(&self, n: usize) -> bool {
        self.coord().is_outside(n)
    }
}

/// Applies a motion: coordinates and accumulated cost are summed. The heuristic, identity and
/// parent are left for the caller to fill in.
impl Add<Motion> for Node {
    type Output = Node;

    fn add(self, motion: Motion) -> Node {
        Node {
            x: self.x + motion.dx,
            y: self.y + motion.dy,
            cost: self.cost + motion.cost,
            heuristic: 0,
            id: self.id,
            parent: None,
        }
    }
}

/// Coordinate delta only.
impl Sub for Node {
    type Output = Coord;

    fn sub(self, other: Node) -> Coord {
        Coord::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} g={} h={} id={}",
            self.coord(),
            self.cost,
            self.heuristic,
            self.id
        )
    }
}
