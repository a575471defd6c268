use grid_astar::{
    generate_random_obstacles, AstarSolver, Flow, Grid, SearchEvent, Snapshot,
    DEFAULT_OBSTACLE_DENSITY,
};
use grid_util::point::Point;
use rand::{rngs::StdRng, SeedableRng};

// A 15x20 grid gets random obstacles and a path is searched from the top left to the bottom
// right corner. The observer prints every expansion the way a visualiser would draw a frame.
// In the final picture
// - # marks an obstacle
// - S and G mark start and goal
// - * marks the path
// - o marks cells that were reached but are not on the path

const ROWS: usize = 15;
const COLS: usize = 20;

fn draw(grid: &Grid, start: Point, goal: Point, path: &[Point]) {
    for y in 0..grid.rows() as i32 {
        let line: String = (0..grid.cols() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                let cell = grid.cell(p).unwrap();
                if p == start {
                    'S'
                } else if p == goal {
                    'G'
                } else if cell.is_wall() {
                    '#'
                } else if path.contains(&p) {
                    '*'
                } else if cell.is_reached() {
                    'o'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{}", line);
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(ROWS, COLS).unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(COLS as i32 - 1, ROWS as i32 - 1);
    generate_random_obstacles(&mut grid, start, goal, DEFAULT_OBSTACLE_DENSITY, &mut rng).unwrap();
    println!("{}", grid);

    let mut frame = 0;
    let mut observer = |snapshot: &Snapshot<'_>| {
        if snapshot.event == SearchEvent::Expand {
            frame += 1;
            let cell = snapshot.grid.cell(snapshot.current).unwrap();
            println!(
                "frame {:>3}: expanding {} (g = {}, h = {}, f = {})",
                frame,
                snapshot.current,
                cell.g(),
                cell.h(),
                cell.f()
            );
        }
        Flow::Continue
    };
    let path = AstarSolver::new()
        .find_path(&mut grid, start, goal, Some(&mut observer))
        .unwrap();

    println!();
    draw(&grid, start, goal, &path);
    if path.is_empty() {
        println!("No path from {} to {}", start, goal);
    } else {
        println!("Path of {} cells from {} to {}", path.len(), start, goal);
    }
}
