use geo::{Coord, Distance, Euclidean, Length, LineInterpolatePoint, LineString, Point};

/// Prefix of `line` with the given arc length.
///
/// The final point is interpolated onto the segment the cut falls in.
/// Lengths at or beyond the full curve return the whole curve; degenerate
/// inputs collapse onto the first coordinate.
pub(crate) fn head(line: &LineString, length: f64) -> LineString {
    let coords = &line.0;

    if coords.len() < 2 || length <= 0.0 {
        return match coords.first() {
            Some(first) => LineString::new(vec![*first, *first]),
            None => line.clone(),
        };
    }

    let mut out = Vec::with_capacity(coords.len());
    out.push(coords[0]);

    let mut travelled = 0.0;
    for pair in coords.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let segment = Euclidean.distance(Point::from(a), Point::from(b));

        if travelled + segment >= length {
            let ratio = if segment <= f64::EPSILON {
                1.0
            } else {
                ((length - travelled) / segment).clamp(0.0, 1.0)
            };

            out.push(Coord {
                x: a.x + (b.x - a.x) * ratio,
                y: a.y + (b.y - a.y) * ratio,
            });
            return LineString::new(out);
        }

        out.push(b);
        travelled += segment;
    }

    LineString::new(out)
}

/// Suffix of `line` from the normalized position `fraction` to its end.
///
/// The first point is interpolated onto the segment the cut falls in.
/// Fractions outside `[0, 1]` are clamped; a cut at the very end yields a
/// zero-length curve pinned to the final coordinate.
pub(crate) fn tail(line: &LineString, fraction: f64) -> LineString {
    let coords = &line.0;
    if coords.len() < 2 {
        return line.clone();
    }

    let total = Euclidean.length(line);
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 || total <= f64::EPSILON {
        return line.clone();
    }

    let target = fraction * total;
    let mut out: Vec<Coord> = Vec::new();
    let mut travelled = 0.0;

    for pair in coords.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let segment = Euclidean.distance(Point::from(a), Point::from(b));

        if !out.is_empty() {
            out.push(b);
        } else if travelled + segment >= target {
            let ratio = if segment <= f64::EPSILON {
                1.0
            } else {
                ((target - travelled) / segment).clamp(0.0, 1.0)
            };

            out.push(Coord {
                x: a.x + (b.x - a.x) * ratio,
                y: a.y + (b.y - a.y) * ratio,
            });

            if ratio < 1.0 {
                out.push(b);
            }
        }

        travelled += segment;
    }

    // Accumulated float error can push the cut past the final coordinate.
    if out.is_empty() {
        let last = coords[coords.len() - 1];
        out.push(last);
    }
    if out.len() == 1 {
        out.push(out[0]);
    }

    LineString::new(out)
}

/// Resamples `line` at `samples` evenly spaced normalized positions.
pub(crate) fn resample(line: &LineString, samples: usize) -> LineString {
    let samples = samples.max(2);

    if line.0.len() < 2 {
        return match line.0.first() {
            Some(first) => LineString::new(vec![*first; samples]),
            None => line.clone(),
        };
    }

    (0..samples)
        .filter_map(|step| {
            let fraction = step as f64 / (samples - 1) as f64;
            line.line_interpolate_point(fraction).map(Coord::from)
        })
        .collect()
}
