use geo::{Coord, LineInterpolatePoint, LineString};
use log::debug;
use rustc_hash::FxHashMap;

use crate::map::{CurveKind, LaneMap, LaneRelation, RelationType, SegmentId};

/// Sample count used when deriving a midline from the two boundaries.
const MIDLINE_SAMPLES: usize = 100;

/// Geometry carried by a single lane segment.
#[derive(Clone, Debug)]
struct SegmentShape {
    left: LineString,
    right: LineString,
    center: LineString,
}

/// Reference in-memory [`LaneMap`] backend.
///
/// Intended for fixtures, examples and small synthetic maps; a production
/// backend would adapt its own storage to the [`LaneMap`] queries instead.
///
/// ### Example
///
/// ```rust
/// use geo::line_string;
/// use lane_anchors::map::{MemoryLaneMap, RelationType, SegmentId};
///
/// let mut map = MemoryLaneMap::new();
/// map.insert_segment(
///     SegmentId::new(1),
///     line_string![(x: 0.0, y: 4.0), (x: 50.0, y: 4.0)],
///     line_string![(x: 0.0, y: 0.0), (x: 50.0, y: 0.0)],
/// );
/// map.insert_segment(
///     SegmentId::new(2),
///     line_string![(x: 50.0, y: 4.0), (x: 100.0, y: 4.0)],
///     line_string![(x: 50.0, y: 0.0), (x: 100.0, y: 0.0)],
/// );
/// map.connect(SegmentId::new(1), SegmentId::new(2), RelationType::Successor);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryLaneMap {
    segments: FxHashMap<SegmentId, SegmentShape>,
    relations: FxHashMap<SegmentId, Vec<LaneRelation>>,
}

impl MemoryLaneMap {
    pub fn new() -> MemoryLaneMap {
        MemoryLaneMap::default()
    }

    /// Number of segments held by the map.
    pub fn size(&self) -> usize {
        self.segments.len()
    }

    /// Inserts a segment from its two boundaries, deriving the midline by
    /// averaging both at evenly spaced normalized positions.
    ///
    /// Boundaries are ordered in the direction of travel.
    pub fn insert_segment(&mut self, id: SegmentId, left: LineString, right: LineString) {
        let center = midline(&left, &right);
        self.insert_segment_with_center(id, left, right, center);
    }

    /// Inserts a segment with an explicit midline, bypassing derivation.
    pub fn insert_segment_with_center(
        &mut self,
        id: SegmentId,
        left: LineString,
        right: LineString,
        center: LineString,
    ) {
        debug!("inserting segment {id} ({} centerline points)", center.0.len());

        self.segments.insert(
            id,
            SegmentShape {
                left,
                right,
                center,
            },
        );
        self.relations.entry(id).or_default();
    }

    /// Adds a directed connectivity edge from `source` to `target`.
    ///
    /// Any [`RelationType`] is accepted here; discovery rejects the
    /// non-following kinds at query time, which makes the in-memory map a
    /// convenient stand-in for a non-conformant provider in tests.
    pub fn connect(&mut self, source: SegmentId, target: SegmentId, kind: RelationType) {
        self.relations
            .entry(source)
            .or_default()
            .push(LaneRelation::new(kind, target));
    }
}

impl LaneMap for MemoryLaneMap {
    fn contains(&self, segment: SegmentId) -> bool {
        self.segments.contains_key(&segment)
    }

    fn following_relations(&self, segment: SegmentId) -> Vec<LaneRelation> {
        self.relations.get(&segment).cloned().unwrap_or_default()
    }

    fn boundary(&self, segment: SegmentId, kind: CurveKind) -> Option<LineString> {
        self.segments.get(&segment).map(|shape| match kind {
            CurveKind::Left => shape.left.clone(),
            CurveKind::Right => shape.right.clone(),
            CurveKind::Center => shape.center.clone(),
        })
    }
}

/// Midline of two boundary polylines: both are sampled at the same
/// normalized positions and averaged pointwise.
fn midline(left: &LineString, right: &LineString) -> LineString {
    let samples = MIDLINE_SAMPLES.max(2);

    (0..samples)
        .filter_map(|step| {
            let fraction = step as f64 / (samples - 1) as f64;

            let l = left.line_interpolate_point(fraction)?;
            let r = right.line_interpolate_point(fraction)?;

            Some(Coord {
                x: (l.x() + r.x()) / 2.0,
                y: (l.y() + r.y()) / 2.0,
            })
        })
        .collect::<LineString>()
}
