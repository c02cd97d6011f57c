use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::error;

use crate::error::PlanError;
use crate::node::{CellId, Coord, Node};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The expanded nodes of one search, keyed by coordinate and kept in expansion order.
#[derive(Clone, Debug, Default)]
pub struct ClosedList {
    nodes: FxIndexMap<Coord, Node>,
}

impl ClosedList {
    pub fn new() -> ClosedList {
        ClosedList::default()
    }
    /// Records an expanded node. The first node recorded for a coordinate is kept.
    pub fn insert(&mut self, node: Node) -> bool {
        match self.nodes.entry(node.coord()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(e) => {
                e.insert(node);
                true
            }
        }
    }
    pub fn contains(&self, coord: &Coord) -> bool {
        self.nodes.contains_key(coord)
    }
    pub fn get(&self, coord: &Coord) -> Option<&Node> {
        self.nodes.get(coord)
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Expanded nodes in the order they were closed.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Resolves the parent of `node` through `coord_of`, which maps an identity back to its
    /// coordinate.
    pub fn parent_of<F>(&self, node: &Node, coord_of: F) -> Option<&Node>
    where
        F: Fn(CellId) -> Coord,
    {
        node.parent.and_then(|id| self.get(&coord_of(id)))
    }

    /// Walks parent links from `goal` back to `start` and returns the visited nodes in
    /// goal-to-start order, both ends included.
    ///
    /// Fails with [PlanError::BrokenParentChain] if a link cannot be resolved, or if the walk
    /// takes more steps than there are closed nodes (a parent cycle).
    pub fn reconstruct_path<F>(
        &self,
        start: Coord,
        goal: Coord,
        coord_of: F,
    ) -> Result<Vec<Node>, PlanError>
    where
        F: Fn(CellId) -> Coord,
    {
        let mut current = match self.get(&goal) {
            Some(node) => node,
            None => {
                error!("Goal {} was never closed", goal);
                return Err(PlanError::BrokenParentChain { cell: goal });
            }
        };
        let mut path = Vec::new();
        while current.coord() != start {
            if path.len() > self.nodes.len() {
                error!("Parent links from {} loop without reaching {}", goal, start);
                return Err(PlanError::BrokenParentChain {
                    cell: current.coord(),
                });
            }
            path.push(*current);
            current = match self.parent_of(current, &coord_of) {
                Some(parent) => parent,
                None => {
                    error!("Parent of {} is not in the closed list", current);
                    return Err(PlanError::BrokenParentChain {
                        cell: current.coord(),
                    });
                }
            };
        }
        path.push(*current);
        Ok(path)
    }
}
