use std::collections::VecDeque;

use grid_astar::{find_path, path_cost, Grid, INFINITE_COST};
use grid_util::point::Point;

/// Breadth-first step counts from `start` over open cells, [INFINITE_COST] where unreachable.
fn bfs_distances(grid: &Grid, start: Point) -> Vec<u32> {
    let ix = |p: Point| p.y as usize * grid.cols() + p.x as usize;
    let mut dist = vec![INFINITE_COST; grid.len()];
    dist[ix(start)] = 0;
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        for n in grid.neighbors(p).unwrap() {
            if !grid.is_wall(n).unwrap() && dist[ix(n)] == INFINITE_COST {
                dist[ix(n)] = dist[ix(p)] + 1;
                queue.push_back(n);
            }
        }
    }
    dist
}

#[test]
fn open_grid_paths_are_manhattan_optimal() {
    for (rows, cols) in [(1, 1), (1, 7), (4, 1), (3, 3), (5, 8), (12, 9)] {
        let mut grid = Grid::new(rows, cols).unwrap();
        let start = Point::new(0, 0);
        let goal = Point::new(cols as i32 - 1, rows as i32 - 1);
        let path = find_path(&mut grid, start, goal, None).unwrap();
        assert_eq!(path.len(), (rows - 1) + (cols - 1) + 1);
        assert_eq!(path_cost(&path), Some((path.len() - 1) as u32));
    }
}

/// Any monotone staircase of five cells is accepted.
#[test]
fn three_by_three_corner_to_corner() {
    let mut grid = Grid::new(3, 3).unwrap();
    let path = find_path(&mut grid, Point::new(0, 0), Point::new(2, 2), None).unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path[0], Point::new(0, 0));
    assert_eq!(path[4], Point::new(2, 2));
    assert!(path_cost(&path).is_some());
}

#[test]
fn full_middle_column_blocks_everything() {
    let mut grid = Grid::new(3, 3).unwrap();
    for y in 0..3 {
        grid.set_wall(Point::new(1, y), true).unwrap();
    }
    let path = find_path(&mut grid, Point::new(0, 0), Point::new(2, 0), None).unwrap();
    assert!(path.is_empty());
}

#[test]
fn walled_in_start_has_no_path() {
    let mut grid = Grid::new(5, 5).unwrap();
    let start = Point::new(2, 2);
    for n in grid.neighbors(start).unwrap() {
        grid.set_wall(n, true).unwrap();
    }
    let path = find_path(&mut grid, start, Point::new(4, 4), None).unwrap();
    assert!(path.is_empty());
    // Only the start itself was ever reached.
    assert_eq!(grid.cells().filter(|c| c.is_reached()).count(), 1);
}

#[test]
fn start_equals_goal() {
    let mut grid = Grid::from_ascii("...\n.#.\n...").unwrap();
    let p = Point::new(2, 1);
    assert_eq!(find_path(&mut grid, p, p, None).unwrap(), vec![p]);
}

#[test]
fn identical_grids_give_identical_paths() {
    let map = "
..........
.####.###.
.#......#.
.#.####.#.
...#..#...
.###..###.
..........
";
    let start = Point::new(0, 0);
    let goal = Point::new(4, 4);
    let mut a = Grid::from_ascii(map).unwrap();
    let mut b = Grid::from_ascii(map).unwrap();
    let path_a = find_path(&mut a, start, goal, None).unwrap();
    let path_b = find_path(&mut b, start, goal, None).unwrap();
    assert!(!path_a.is_empty());
    assert_eq!(path_a, path_b);

    // Searching again after a reset reproduces the same path as well.
    a.reset_search();
    assert_eq!(find_path(&mut a, start, goal, None).unwrap(), path_a);
}

#[test]
fn costs_match_breadth_first_distances() {
    let map = "
....#.....
.##.#.###.
.#..#...#.
.#.####.#.
.#......#.
.########.
..........
";
    let mut grid = Grid::from_ascii(map).unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(5, 2);
    let dist = bfs_distances(&grid, start);
    let path = find_path(&mut grid, start, goal, None).unwrap();
    assert_eq!(path.len() as u32 - 1, dist[2 * grid.cols() + 5]);
    for (i, p) in path.iter().enumerate() {
        assert_eq!(grid.cell(*p).unwrap().g(), i as u32);
    }
    for (cell, d) in grid.cells().zip(dist) {
        if cell.is_reached() {
            assert!(cell.g() >= d);
            assert_eq!(cell.f(), cell.g() + cell.h());
        }
    }
}
