use grid_sandbox::{run_search, Algorithm, GridConfig, PathingGrid, SearchOptions};

// In this example a path is found on a grid with shape
// S . . . .
// . # # # .
// . # . . .
// . # . # .
// . . . # F
// S marks the start
// F marks the finish
fn main() {
    let mut pathing_grid = PathingGrid::new(&GridConfig::new(5, 5)).unwrap();
    for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 1), (3, 1), (3, 3), (4, 3)] {
        pathing_grid.set_wall(row, col, true);
    }
    pathing_grid.update();
    print!("{pathing_grid}");
    let outcome = run_search(&pathing_grid, Algorithm::AStar, &SearchOptions::default());
    if outcome.success {
        println!("A path has been found:");
        for id in outcome.path() {
            println!("{:?}", pathing_grid.node(id).position());
        }
        println!("Cost: {:?}", outcome.cost());
    }
}
