use gridbot_grid::{BoundedGrid, Direction, GridError};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=gridbot_grid=debug shows every accepted and rejected move
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Start two cells from the top-right corner of a 10x10 grid
    let mut grid = match BoundedGrid::at(8, 8) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to build grid: {}", e);
            return;
        }
    };

    println!("Initial grid:\n{}", grid);

    let route = [
        Direction::Up,
        Direction::Left,
        Direction::Up,
        Direction::Up,
        Direction::None,
    ];

    for (i, direction) in route.into_iter().enumerate() {
        match grid.step(direction) {
            Ok(p) => println!("Step {:>2}: {:<5} -> {}", i + 1, direction, p),
            Err(GridError::OutOfBounds(ctx)) => {
                eprintln!(
                    "Step {:>2}: cannot move {} from {} on a {} grid",
                    i + 1,
                    ctx.direction_label(),
                    ctx.position(),
                    ctx.bounds()
                );
                break; // Abandon the rest of the route
            }
            Err(e) => {
                eprintln!("Step {:>2}: {}", i + 1, e);
                break;
            }
        }
    }

    println!("\nFinal grid:\n{}", grid);
}
