//! Geometry primitives on the unit torus
//!
//! Circumcircle computation via perpendicular-bisector intersection, plus the
//! coordinate wrap that folds generated points back into the fundamental
//! domain `[0,1) x [0,1)`.

use glam::DVec2;

use crate::error::{IvsError, Result};

/// Determinant threshold below which two direction vectors are treated as
/// parallel (the input triangle is collinear).
const PARALLEL_EPSILON: f64 = 1e-12;

/// Rotate a vector 90 degrees counter-clockwise (multiplication by i, were
/// the vector a complex number).
#[inline]
pub fn rotate(v: DVec2) -> DVec2 {
    v.perp()
}

/// Intersect two lines given in point/direction form
///
/// The lines are `l0(t) = p0 + t * v0` and `l1(t) = p1 + t * v1`; the
/// intersection point is `l0(m0)` (equivalently `l1(m1)`).
///
/// `m0` is solved with Cramer's rule. `m1` is then derived from whichever of
/// `v1.x` and `v1.y` has the larger magnitude, so the division never picks a
/// near-zero component.
///
/// # Returns
///
/// `Some((m0, m1))`, or `None` when the lines are parallel.
pub fn line_line_intersection(
    p0: DVec2,
    v0: DVec2,
    p1: DVec2,
    v1: DVec2,
) -> Option<(f64, f64)> {
    let det = v0.x * v1.y - v0.y * v1.x;

    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let m0 = ((p0.y - p1.y) * v1.x - (p0.x - p1.x) * v1.y) / det;

    let m1 = if v1.x.abs() >= v1.y.abs() {
        (p0.x + m0 * v0.x - p1.x) / v1.x
    } else {
        (p0.y + m0 * v0.y - p1.y) / v1.y
    };

    Some((m0, m1))
}

/// Compute the center of the circumcircle of three points
///
/// Intersects the perpendicular bisectors of `(p0, p1)` and `(p1, p2)`.
///
/// # Errors
///
/// Returns `DegenerateTriangle` when the points are collinear (the bisectors
/// are parallel and no circumcircle exists).
pub fn circumcenter(p0: DVec2, p1: DVec2, p2: DVec2) -> Result<DVec2> {
    let mp0 = 0.5 * (p0 + p1);
    let mp1 = 0.5 * (p1 + p2);

    let v0 = rotate(p0 - p1);
    let v1 = rotate(p1 - p2);

    match line_line_intersection(mp0, v0, mp1, v1) {
        Some((m0, _m1)) => Ok(mp0 + m0 * v0),
        None => Err(IvsError::DegenerateTriangle { p0, p1, p2 }),
    }
}

/// Compute the circumradius of three points
///
/// Defined as the distance from the circumcenter to `p0`; every call site
/// uses `p0` so radii are bit-for-bit reproducible.
///
/// # Errors
///
/// Returns `DegenerateTriangle` when the points are collinear.
pub fn circumradius(p0: DVec2, p1: DVec2, p2: DVec2) -> Result<f64> {
    Ok(circumcenter(p0, p1, p2)?.distance(p0))
}

/// Wrap a point into the fundamental domain `[0,1) x [0,1)`
///
/// Implemented as bounded increment/decrement loops rather than modulo, which
/// preserves the exact floating-point semantics for coordinates within one
/// domain width of the valid range (the only inputs the driver produces).
pub fn wrap_unit(mut p: DVec2) -> DVec2 {
    while p.x < 0.0 {
        p.x += 1.0;
    }
    while p.x >= 1.0 {
        p.x -= 1.0;
    }
    while p.y < 0.0 {
        p.y += 1.0;
    }
    while p.y >= 1.0 {
        p.y -= 1.0;
    }

    p
}

/// Nearest-image distance between two points on the unit torus
pub fn toroidal_distance(a: DVec2, b: DVec2) -> f64 {
    let mut d = (a - b).abs();
    if d.x > 0.5 {
        d.x = 1.0 - d.x;
    }
    if d.y > 0.5 {
        d.y = 1.0 - d.y;
    }
    d.length()
}
