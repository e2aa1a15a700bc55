use geo::LineString;
use strum::{Display, EnumString};

use crate::map::{LaneRelation, SegmentId};

/// Selects one of the three polylines a lane segment carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CurveKind {
    /// Left lane boundary.
    Left,
    /// Right lane boundary.
    Right,
    /// Lane midline.
    Center,
}

/// Capability interface onto the lane-level map this crate consumes.
///
/// The crate makes no assumption about how the map stores its graph; any
/// backend able to answer the two queries below (plus existence) can drive
/// anchor generation. See [`MemoryLaneMap`] for a reference implementation.
///
/// ### Contract
///
/// - [`LaneMap::following_relations`] must only yield relations for which
///   [`RelationType::is_following`] holds. Anything else is treated as a
///   fatal provider violation rather than silently misclassified.
/// - [`LaneMap::boundary`] must yield the segment's polyline for every
///   [`CurveKind`] of every segment the map [contains](LaneMap::contains),
///   ordered in the direction of travel.
///
/// [`MemoryLaneMap`]: crate::map::MemoryLaneMap
/// [`RelationType::is_following`]: crate::map::RelationType::is_following
pub trait LaneMap {
    /// Whether `segment` exists within the map.
    fn contains(&self, segment: SegmentId) -> bool;

    /// All outgoing relations a vehicle on `segment` can follow next,
    /// lane changes included.
    fn following_relations(&self, segment: SegmentId) -> Vec<LaneRelation>;

    /// The requested polyline of `segment`, ordered in travel direction.
    /// `None` when the segment is unknown to the map.
    fn boundary(&self, segment: SegmentId, kind: CurveKind) -> Option<LineString>;
}
