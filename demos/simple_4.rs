use grid_astar::{AstarPlanner, Coord, OccupancyGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = OccupancyGrid::new(3);
    grid.set_obstacle(1, 1, true);
    println!("{}", grid);
    let planner = AstarPlanner::new(grid);
    let start = Coord::new(0, 0);
    let end = Coord::new(2, 2);
    let plan = planner.plan(start, end).unwrap();
    println!("Path (start to goal):");
    for node in plan.path_from_start() {
        println!("{}", node);
    }
    let mut marked = plan.explored.clone();
    marked.mark_path(&plan.path);
    println!("\n{}", marked);
}
