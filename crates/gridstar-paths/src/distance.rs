use gridstar_core::Point;

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal step (√2).
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Octile distance: the exact cost between two points on an open 8-way grid
/// with orthogonal cost 1 and diagonal cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    f64::from(hi - lo) * ORTHOGONAL_COST + f64::from(lo) * DIAGONAL_COST
}

/// Cost of moving between two adjacent points.
#[inline]
pub fn step_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_step(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Sum of the step costs along `points`. Consecutive points must be adjacent.
pub fn path_cost(points: &[Point]) -> f64 {
    points.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}
