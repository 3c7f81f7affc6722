//! Text rendering of a grid with a path drawn on it.

use gridstar_core::{Grid, Point};
use gridstar_paths::Path;

const START: char = 'S';
const GOAL: char = 'G';
const STEP: char = '*';

/// One line per row: `#` walls, `.` floor, `*` path, `S`/`G` endpoints.
/// Endpoints outside the grid are not drawn.
pub fn render(grid: &Grid, path: Option<&Path>, start: Point, goal: Point) -> String {
    let w = grid.width() as usize;
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    let mut mark = |p: Point, ch: char| {
        if grid.contains(p) {
            rows[p.y as usize][p.x as usize] = ch;
        }
    };
    if let Some(path) = path {
        for &p in path {
            mark(p, STEP);
        }
    }
    mark(start, START);
    mark(goal, GOAL);

    let mut out = String::with_capacity(rows.len() * (w + 1));
    for (y, row) in rows.iter().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        out.extend(row.iter());
    }
    out
}
