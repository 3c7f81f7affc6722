//! Searches against one grid from several threads.

use gridstar_core::{Grid, Passability, Point, RandomObstacles};
use gridstar_paths::{Heuristic, PathError, Pathfinder, PathfinderConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn requests(grid: &Grid) -> Vec<(Point, Point)> {
    let open: Vec<Point> = grid
        .iter()
        .filter(|c| c.passability == Passability::Passable)
        .map(|c| c.pos)
        .collect();
    open.iter()
        .step_by(7)
        .zip(open.iter().rev().step_by(5))
        .map(|(&a, &b)| (a, b))
        .collect()
}

#[test]
fn parallel_searches_match_sequential_ones() {
    let grid = Grid::create(40, 30, &mut RandomObstacles::new(StdRng::seed_from_u64(42))).unwrap();
    let config = PathfinderConfig::default().with_heuristic(Heuristic::Octile);
    let reqs = requests(&grid);
    assert!(!reqs.is_empty());

    let mut pf = Pathfinder::with_config(config);
    let sequential: Vec<Result<_, PathError>> = reqs
        .iter()
        .map(|&(s, g)| pf.find_path(&grid, s, g))
        .collect();

    let parallel: Vec<Vec<Result<_, PathError>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let grid = &grid;
                let reqs = &reqs;
                scope.spawn(move || {
                    let mut pf = Pathfinder::with_config(config);
                    reqs.iter()
                        .map(|&(s, g)| pf.find_path(grid, s, g))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for results in parallel {
        assert_eq!(results, sequential);
    }
}

#[test]
fn random_map_with_default_obstacles() {
    let grid = Grid::create(5, 5, &mut RandomObstacles::new(StdRng::seed_from_u64(3))).unwrap();
    let mut pf = Pathfinder::new();
    for (s, g) in requests(&grid) {
        match pf.find_path(&grid, s, g) {
            Ok(path) => {
                assert_eq!(path.start(), s);
                assert_eq!(path.goal(), g);
            }
            Err(PathError::NoPathFound { .. }) => {}
            Err(other) => panic!("unexpected {other}"),
        }
    }
}
