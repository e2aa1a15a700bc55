use strum::Display;

use crate::map::SegmentId;

/// How one lane segment connects to another within the lane graph.
///
/// Only the *following* relations (see [`RelationType::is_following`])
/// describe a segment a vehicle can drive onto next. The adjacency and
/// conflict variants exist so a provider can expose its full connectivity
/// vocabulary; feeding them into anchor discovery is a contract violation
/// on the provider's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum RelationType {
    /// Straight continuation onto the next segment.
    Successor,
    /// Lateral move onto the adjacent lane to the left.
    LeftChange,
    /// Lateral move onto the adjacent lane to the right.
    RightChange,
    /// Side-by-side neighbour to the left which may not be entered.
    AdjacentLeft,
    /// Side-by-side neighbour to the right which may not be entered.
    AdjacentRight,
    /// Crossing or merging segment competing for the same area.
    Conflicting,
}

impl RelationType {
    /// Whether the relation leads onto a segment a vehicle can follow.
    #[inline]
    pub const fn is_following(&self) -> bool {
        matches!(
            self,
            RelationType::Successor | RelationType::LeftChange | RelationType::RightChange
        )
    }

    /// Whether the relation represents a lateral lane change.
    #[inline]
    pub const fn is_lane_change(&self) -> bool {
        matches!(self, RelationType::LeftChange | RelationType::RightChange)
    }
}

/// An outgoing connectivity edge of the lane graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneRelation {
    pub kind: RelationType,
    pub target: SegmentId,
}

impl LaneRelation {
    pub const fn new(kind: RelationType, target: SegmentId) -> LaneRelation {
        LaneRelation { kind, target }
    }
}
