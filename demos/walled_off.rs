use grid_astar::{AstarPlanner, Coord, OccupancyGrid, PlannerConfig};

// The goal sits behind a full wall. With the components check the planner answers right away,
// without it the reachable half of the grid is flood-filled first.

fn main() {
    let grid = OccupancyGrid::parse(
        "
        ...#...
        ...#...
        ...#...
        ...#...
        ...#...
        ...#...
        ...#...
        ",
    )
    .unwrap();
    let start = Coord::new(0, 0);
    let goal = Coord::new(6, 6);
    for check in [true, false] {
        let config = PlannerConfig::default().with_reachability_check(check);
        let plan = AstarPlanner::with_config(grid.clone(), config)
            .plan(start, goal)
            .unwrap();
        println!(
            "components check: {}, found: {}, expanded: {}",
            check, plan.found, plan.expanded
        );
        println!("{}", plan.explored);
    }
}
