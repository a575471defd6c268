use grid_util::point::Point;
use log::debug;
use rand::Rng;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Share of cells turned into walls when no other density is asked for.
pub const DEFAULT_OBSTACLE_DENSITY: f64 = 0.25;

/// Turns every cell except `start` and `goal` into a wall with probability `density`.
/// Cells that are already walls stay walls. Returns the number of walls placed.
pub fn generate_random_obstacles<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    density: f64,
    rng: &mut R,
) -> Result<usize> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GridError::InvalidArgument {
            name: "density",
            reason: format!("{density} is not within [0, 1]"),
        });
    }
    let mut placed = 0;
    for y in 0..grid.rows() as i32 {
        for x in 0..grid.cols() as i32 {
            let p = Point::new(x, y);
            if p != start && p != goal && rng.gen_bool(density) {
                grid.set_wall(p, true)?;
                placed += 1;
            }
        }
    }
    debug!("Placed {} random walls at density {}", placed, density);
    Ok(placed)
}
