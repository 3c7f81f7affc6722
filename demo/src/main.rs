//! `gridstar` — build an obstacle grid, search it, and print the result.
//!
//! ```text
//! gridstar --width 12 --height 8 --seed 7 --start 0,0 --goal 11,7
//! gridstar --map maze.txt --start 1,1 --goal 20,5 --heuristic octile
//! RUST_LOG=debug gridstar
//! ```

mod render;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use gridstar_core::{DEFAULT_OBSTACLE_PCT, Grid, Point, RandomObstacles};
use gridstar_paths::{Diagonals, Heuristic, Pathfinder, PathfinderConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Command line arguments for the gridstar demo.
#[derive(Parser, Debug)]
#[command(name = "gridstar")]
#[command(about = "A* shortest paths on obstacle grids")]
#[command(version)]
struct Args {
    /// Grid width for a random map
    #[arg(long, default_value_t = 5)]
    width: i32,

    /// Grid height for a random map
    #[arg(long, default_value_t = 5)]
    height: i32,

    /// Percentage of blocked cells in a random map
    #[arg(long, default_value_t = DEFAULT_OBSTACLE_PCT)]
    obstacles: u32,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read the map from a text file (`.` floor, `#` wall) instead of
    /// generating one
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Start cell as `x,y`
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    start: Point,

    /// Goal cell as `x,y`; defaults to the bottom-right corner
    #[arg(long, value_parser = parse_point)]
    goal: Option<Point>,

    /// manhattan, octile, chebyshev or zero
    #[arg(long, default_value_t = Heuristic::default())]
    heuristic: Heuristic,

    /// always, no-corner-cutting or never
    #[arg(long, default_value_t = Diagonals::default())]
    diagonals: Diagonals,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got \u{201c}{s}\u{201d}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y: {e}"))?;
    Ok(Point::new(x, y))
}

fn build_grid(args: &Args) -> Result<Grid, Box<dyn Error>> {
    if let Some(path) = &args.map {
        let text = std::fs::read_to_string(path)?;
        let grid = Grid::from_ascii(&text)?;
        log::info!("loaded {}x{} map from {}", grid.width(), grid.height(), path.display());
        return Ok(grid);
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("random {}x{} map, seed {seed}", args.width, args.height);
    let mut source = RandomObstacles::with_percent(StdRng::seed_from_u64(seed), args.obstacles);
    Ok(Grid::create(args.width, args.height, &mut source)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let grid = build_grid(&args)?;
    let goal = args
        .goal
        .unwrap_or_else(|| Point::new(grid.width() - 1, grid.height() - 1));
    let config = PathfinderConfig::default()
        .with_heuristic(args.heuristic)
        .with_diagonals(args.diagonals);
    if !config.is_optimal() {
        log::debug!(
            "{} heuristic with {} diagonals may return a longer path",
            args.heuristic,
            args.diagonals
        );
    }

    let mut pathfinder = Pathfinder::with_config(config);
    match pathfinder.find_path(&grid, args.start, goal) {
        Ok(path) => {
            log::info!(
                "path of {} cells, cost {:.3}, {} cells expanded",
                path.len(),
                path.cost(),
                path.expanded()
            );
            println!("{}", render::render(&grid, Some(&path), args.start, goal));
            println!("{path}");
        }
        Err(err) => {
            log::warn!("{err}");
            println!("{}", render::render(&grid, None, args.start, goal));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" -1 , 2 "), Ok(Point::new(-1, 2)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn defaults_match_reference_harness() {
        let args = Args::parse_from(["gridstar"]);
        assert_eq!((args.width, args.height), (5, 5));
        assert_eq!(args.obstacles, 20);
        assert_eq!(args.start, Point::ZERO);
        assert_eq!(args.heuristic, Heuristic::Manhattan);
    }

    #[test]
    fn seeded_grid_is_reproducible() {
        let args = Args::parse_from(["gridstar", "--seed", "9", "--width", "10", "--height", "6"]);
        let a = build_grid(&args).unwrap();
        let b = build_grid(&args).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), Point::new(10, 6));
    }
}
