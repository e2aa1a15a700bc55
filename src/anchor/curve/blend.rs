use geo::{Coord, LineInterpolatePoint, LineString, Point};

/// Smooth S-shaped blend weight on `[0, 1]`.
///
/// Shape-preserving cubic through the control points (−1, 0), (0, 0),
/// (1, 1), (2, 1): the flat neighbouring intervals force zero tangents at
/// both inner knots, so the middle interval collapses to the Hermite form
/// `3α² − 2α³`. Monotone, 0 at the start, 1 at the end.
pub(crate) fn transition_weight(alpha: f64) -> f64 {
    let alpha = alpha.clamp(0.0, 1.0);
    alpha * alpha * (3.0 - 2.0 * alpha)
}

/// Blends two discontinuous curves into a single `samples`-point curve.
///
/// Both curves are parameterized independently by normalized arc length;
/// the point pair at each position is combined under [`transition_weight`]
/// so the result leaves with the heading of `first` and arrives with the
/// heading of `second`, without a heading discontinuity at either end.
pub(crate) fn blend(first: &LineString, second: &LineString, samples: usize) -> LineString {
    let samples = samples.max(2);

    (0..samples)
        .map(|step| {
            let alpha = step as f64 / (samples - 1) as f64;
            let weight = transition_weight(alpha);

            let a = point_at(first, alpha);
            let b = point_at(second, alpha);

            Coord {
                x: a.x() * (1.0 - weight) + b.x() * weight,
                y: a.y() * (1.0 - weight) + b.y() * weight,
            }
        })
        .collect()
}

/// Point at the normalized position, tolerating degenerate inputs.
fn point_at(line: &LineString, fraction: f64) -> Point {
    line.line_interpolate_point(fraction).unwrap_or_else(|| {
        line.0
            .first()
            .copied()
            .map(Point::from)
            .unwrap_or_else(|| Point::new(0.0, 0.0))
    })
}
