#![allow(dead_code)]

use grid_astar::{motions, Coord, Node, OccupancyGrid};
use rand::prelude::*;
use std::collections::VecDeque;

/// Obstacle density used by the demos, about one blocked cell per row.
pub fn sparse_density(n: usize) -> f64 {
    1.0 / n as f64
}

/// Random grid with the given obstacle density. Start and goal cells are cleared.
pub fn random_grid(
    n: usize,
    density: f64,
    rng: &mut StdRng,
    start: Coord,
    goal: Coord,
) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(n);
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            grid.set_obstacle(x, y, rng.gen_bool(density));
        }
    }
    grid.set_obstacle(start.x, start.y, false);
    grid.set_obstacle(goal.x, goal.y, false);
    grid
}

pub fn random_point(n: usize, rng: &mut StdRng) -> Coord {
    Coord::new(rng.gen_range(0..n) as i32, rng.gen_range(0..n) as i32)
}

/// Breadth-first step count from `start` to `goal`, independent of the A* code path.
pub fn bfs_distance(grid: &OccupancyGrid, start: Coord, goal: Coord) -> Option<usize> {
    let n = grid.size();
    let mut dist = vec![usize::MAX; n * n];
    let ix = |c: Coord| c.x as usize * n + c.y as usize;
    let mut queue = VecDeque::from([start]);
    dist[ix(start)] = 0;
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(dist[ix(current)]);
        }
        for m in motions() {
            let next = Coord::new(current.x + m.dx, current.y + m.dy);
            if grid.is_free(next) && dist[ix(next)] == usize::MAX {
                dist[ix(next)] = dist[ix(current)] + 1;
                queue.push_back(next);
            }
        }
    }
    None
}

pub fn visualize_grid(grid: &OccupancyGrid, path: &[Node]) {
    let mut grid = grid.clone();
    grid.mark_path(path);
    println!("{grid}");
}
