use crate::node::{Coord, Cost};

/// A single step on the grid with its cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub dx: i32,
    pub dy: i32,
    pub cost: Cost,
}

impl Motion {
    pub const fn new(dx: i32, dy: i32, cost: Cost) -> Motion {
        Motion { dx, dy, cost }
    }
    /// Looks up the motion that produces the given coordinate delta, if any.
    pub fn from_delta(delta: Coord) -> Option<Motion> {
        motions().find(|m| m.dx == delta.x && m.dy == delta.y)
    }
}

/// The 4-connected unit-cost motion table, in expansion order. Diagonal moves are left out
/// because the Manhattan heuristic overestimates once they are allowed.
pub const MOTIONS: [Motion; 4] = [
    Motion::new(0, 1, 1),
    Motion::new(1, 0, 1),
    Motion::new(0, -1, 1),
    Motion::new(-1, 0, 1),
];

/// Iterates over [MOTIONS]. Stateless, so every call starts over.
pub fn motions() -> impl Iterator<Item = Motion> {
    MOTIONS.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn four_connected_unit_cost() {
        assert_eq!(motions().count(), 4);
        assert!(motions().all(|m| m.cost == 1 && m.dx.abs() + m.dy.abs() == 1));
        assert!(motions().map(|m| (m.dx, m.dy)).all_unique());
    }

    #[test]
    fn restartable() {
        let first: Vec<Motion> = motions().collect();
        let second: Vec<Motion> = motions().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], Motion::new(0, 1, 1));
    }

    #[test]
    fn delta_lookup() {
        assert_eq!(Motion::from_delta(Coord::new(-1, 0)), Some(MOTIONS[3]));
        assert_eq!(Motion::from_delta(Coord::new(1, 1)), None);
        assert_eq!(Motion::from_delta(Coord::new(0, 0)), None);
    }
}
