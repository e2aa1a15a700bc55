use geo::{Coord, LineString, Polygon};

/// Consecutive coordinates closer than this are treated as coincident.
const COINCIDENT: f64 = 1e-9;

/// Inflates a polyline into a closed ribbon polygon of the given
/// half-width.
///
/// Both sides are offset along the averaged normals of the adjacent
/// segments with flat end caps. Degenerate inputs (fewer than two distinct
/// points) inflate to an axis-aligned square cap, so identical degenerate
/// curves still compare as identical areas.
pub(crate) fn inflate(line: &LineString, half_width: f64) -> Polygon {
    let coords = distinct(&line.0);

    if coords.len() < 2 {
        let center = coords.first().copied().unwrap_or(Coord { x: 0.0, y: 0.0 });
        return square_cap(center, half_width);
    }

    // Unit direction of every segment between distinct coordinates.
    let directions = coords
        .windows(2)
        .map(|pair| {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            let length = (dx * dx + dy * dy).sqrt();
            (dx / length, dy / length)
        })
        .collect::<Vec<_>>();

    let mut left = Vec::with_capacity(coords.len());
    let mut right = Vec::with_capacity(coords.len());

    for (index, coord) in coords.iter().enumerate() {
        let incoming = index.checked_sub(1).and_then(|i| directions.get(i));
        let outgoing = directions.get(index);

        let (dx, dy) = match (incoming, outgoing) {
            // Interior vertex: average the adjacent directions, falling
            // back to the outgoing one across a full reversal.
            (Some(a), Some(b)) => {
                let sum = (a.0 + b.0, a.1 + b.1);
                let length = (sum.0 * sum.0 + sum.1 * sum.1).sqrt();
                if length <= COINCIDENT {
                    *b
                } else {
                    (sum.0 / length, sum.1 / length)
                }
            }
            (Some(a), None) => *a,
            (None, Some(b)) => *b,
            (None, None) => (1.0, 0.0),
        };

        // Left normal of the travel direction.
        let normal = (-dy, dx);

        left.push(Coord {
            x: coord.x + normal.0 * half_width,
            y: coord.y + normal.1 * half_width,
        });
        right.push(Coord {
            x: coord.x - normal.0 * half_width,
            y: coord.y - normal.1 * half_width,
        });
    }

    let mut ring = left;
    ring.extend(right.into_iter().rev());

    Polygon::new(LineString::new(ring), vec![])
}

/// Drops consecutive coincident coordinates.
fn distinct(coords: &[Coord]) -> Vec<Coord> {
    let mut out: Vec<Coord> = Vec::with_capacity(coords.len());

    for coord in coords {
        let duplicate = out
            .last()
            .is_some_and(|last| (last.x - coord.x).abs() <= COINCIDENT && (last.y - coord.y).abs() <= COINCIDENT);

        if !duplicate {
            out.push(*coord);
        }
    }

    out
}

fn square_cap(center: Coord, half_width: f64) -> Polygon {
    Polygon::new(
        LineString::new(vec![
            Coord {
                x: center.x - half_width,
                y: center.y - half_width,
            },
            Coord {
                x: center.x + half_width,
                y: center.y - half_width,
            },
            Coord {
                x: center.x + half_width,
                y: center.y + half_width,
            },
            Coord {
                x: center.x - half_width,
                y: center.y + half_width,
            },
        ]),
        vec![],
    )
}
