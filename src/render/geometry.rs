//! Geometry primitives in pixel space: slope, circle/line intersection and
//! perpendicular offsets.
//!
//! Every marking that needs "a point at distance d across a line" goes through
//! [`circle_line_segment_intersection`]: the answer is where a circle of radius d
//! around the point meets the perpendicular line.

use glam::{DVec2, dvec2};

use crate::log::trace;

/// Two intersections closer than this are a tangent and collapse to one point.
pub const TANGENT_TOLERANCE: f64 = 1e-9;

/// Slope of the line through two points.
///
/// Vertical segments give `±inf`, coincident points `NaN`; callers branch on
/// those instead of feeding them into coordinates.
pub fn slope(p1: DVec2, p2: DVec2) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

/// Whether two directions are parallel (same slope), regardless of sense.
pub fn same_slope(d1: DVec2, d2: DVec2) -> bool {
    let scale = d1.length() * d2.length();
    scale > 0.0 && d1.perp_dot(d2).abs() <= 1e-6 * scale
}

/// Circle/line intersection over the full line through `p1` and `p2`.
pub fn circle_line_intersection(center: DVec2, radius: f64, p1: DVec2, p2: DVec2) -> Vec<DVec2> {
    circle_line_segment_intersection(center, radius, p1, p2, true, TANGENT_TOLERANCE)
}

/// Points where a circle meets the line through `p1` and `p2`: 0, 1 or 2 of them.
///
/// With `full_line = false` only intersections whose fraction along the segment
/// lies in `[0, 1]` are kept. Results are ordered along the direction p1 → p2.
/// Two results within `tangent_tol` of each other are reported once.
/// Coincident `p1`/`p2` define no line and give no points.
///
/// Follows <http://mathworld.wolfram.com/Circle-LineIntersection.html>.
pub fn circle_line_segment_intersection(
    center: DVec2,
    radius: f64,
    p1: DVec2,
    p2: DVec2,
    full_line: bool,
    tangent_tol: f64,
) -> Vec<DVec2> {
    // Work relative to the circle center
    let a = p1 - center;
    let b = p2 - center;
    let d = b - a;
    let dr_sq = d.length_squared();
    if dr_sq == 0.0 || !dr_sq.is_finite() {
        return Vec::new();
    }

    let big_d = a.perp_dot(b);
    let discriminant = radius * radius * dr_sq - big_d * big_d;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let root = discriminant.sqrt();
    let sign_dy = if d.y < 0.0 { -1.0 } else { 1.0 };
    // Order the two solutions along p1 -> p2
    let signs = if d.y < 0.0 { [1.0, -1.0] } else { [-1.0, 1.0] };
    let mut points: Vec<DVec2> = signs
        .iter()
        .map(|sign| {
            center
                + dvec2(
                    (big_d * d.y + sign * sign_dy * d.x * root) / dr_sq,
                    (-big_d * d.x + sign * d.y.abs() * root) / dr_sq,
                )
        })
        .collect();

    if !full_line {
        points.retain(|pt| {
            let fraction = if d.x.abs() > d.y.abs() {
                (pt.x - p1.x) / d.x
            } else {
                (pt.y - p1.y) / d.y
            };
            (0.0..=1.0).contains(&fraction)
        });
    }

    if points.len() == 2 && points[0].distance(points[1]) <= tangent_tol {
        points.truncate(1);
    }

    points
}

/// The two points at `distance` from `point` on the perpendicular to `slope`.
///
/// Returns `None` for a `NaN` slope (no direction) or when the circle only
/// touches the line (zero distance).
pub fn perpendicular_points(point: DVec2, slope: f64, distance: f64) -> Option<[DVec2; 2]> {
    let direction = if slope.is_nan() {
        return None;
    } else if slope.is_infinite() {
        // vertical line: the perpendicular is horizontal
        trace!("perpendicular of a vertical segment");
        dvec2(1.0, 0.0)
    } else if slope == 0.0 {
        // horizontal line: the perpendicular is vertical
        dvec2(0.0, 1.0)
    } else {
        dvec2(1.0, -1.0 / slope)
    };

    match circle_line_intersection(point, distance, point, point + direction)[..] {
        [one, two] => Some([one, two]),
        _ => None,
    }
}
