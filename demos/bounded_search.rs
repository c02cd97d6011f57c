use grid_astar::{AstarPlanner, Coord, OccupancyGrid, PlanError, PlannerConfig};

fn main() {
    let grid = OccupancyGrid::new(20);
    let start = Coord::new(0, 0);
    for limit in [10, 40] {
        let planner = AstarPlanner::with_config(
            grid.clone(),
            PlannerConfig::default().with_max_expansions(limit),
        );
        for goal in [Coord::new(5, 5), Coord::new(19, 19)] {
            match planner.plan(start, goal) {
                Ok(plan) => println!("{} -> {}: {} steps", start, goal, plan.steps()),
                Err(e @ PlanError::ExpansionLimit { .. }) => println!("{} -> {}: {}", start, goal, e),
                Err(e) => println!("{} -> {}: unexpected error: {}", start, goal, e),
            }
        }
    }
}
