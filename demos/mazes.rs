use grid_sandbox::{
    generate_maze_seeded, run_search, Algorithm, GridConfig, MazeKind, MazeTarget, NodeStatus,
    PathingGrid, SearchOptions,
};

// Generates a walled maze on the default grid and compares how much of it
// every algorithm explores before reaching the finish
fn main() {
    let mut pathing_grid = PathingGrid::new(&GridConfig::default()).unwrap();
    let changed = generate_maze_seeded(
        &mut pathing_grid,
        MazeKind::RecursiveDivision,
        MazeTarget::Wall,
        Some(2),
    );
    generate_maze_seeded(&mut pathing_grid, MazeKind::Random, MazeTarget::Weight, Some(2));
    println!("{} walls placed", changed.len());
    print!("{pathing_grid}");

    for algorithm in Algorithm::ALL {
        let outcome = run_search(&pathing_grid, algorithm, &SearchOptions::default());
        let visited = (0..pathing_grid.len())
            .filter(|&id| outcome.context.status_of(&pathing_grid, id) == NodeStatus::Visited)
            .count();
        println!(
            "{algorithm:>8}: success {}, visited {visited}, path length {}",
            outcome.success,
            outcome.path().len()
        );
    }
}
