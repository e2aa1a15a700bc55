use crate::anchor::curve::SynthesisOptions;
use crate::anchor::discover::Discovery;
use crate::anchor::entity::Anchor;
use crate::anchor::error::Result;
use crate::anchor::rank::{DistanceMetric, Ranker};
use crate::map::{LaneMap, SegmentId};

/// Parameters for end-to-end anchor generation.
#[derive(Clone, Copy, Debug)]
pub struct AnchorParams {
    /// Desired anchor length in map units, measured along the centerline
    /// with the start segment excluded. Anchors fall short of this at dead
    /// ends, and terminal segments may overshoot it.
    pub max_length: f64,
    /// Metric ordering the discovered anchors.
    pub metric: DistanceMetric,
    /// Curve synthesis tuning shared by discovery and ranking.
    pub synthesis: SynthesisOptions,
}

impl Default for AnchorParams {
    fn default() -> Self {
        AnchorParams {
            max_length: 100.0,
            metric: DistanceMetric::AreaOverlap,
            synthesis: SynthesisOptions::default(),
        }
    }
}

/// End-to-end anchor generation over any [`LaneMap`].
///
/// ### Example
///
/// ```rust
/// use geo::line_string;
/// use lane_anchors::anchor::{AnchorParams, Anchored};
/// use lane_anchors::map::{MemoryLaneMap, RelationType, SegmentId};
///
/// let mut map = MemoryLaneMap::new();
/// map.insert_segment(
///     SegmentId::new(1),
///     line_string![(x: 0.0, y: 4.0), (x: 60.0, y: 4.0)],
///     line_string![(x: 0.0, y: 0.0), (x: 60.0, y: 0.0)],
/// );
/// map.insert_segment(
///     SegmentId::new(2),
///     line_string![(x: 60.0, y: 4.0), (x: 120.0, y: 4.0)],
///     line_string![(x: 60.0, y: 0.0), (x: 120.0, y: 0.0)],
/// );
/// map.connect(SegmentId::new(1), SegmentId::new(2), RelationType::Successor);
///
/// let anchors = map
///     .anchors_for_segment(SegmentId::new(1), AnchorParams::default())
///     .expect("start segment exists");
///
/// assert_eq!(anchors.len(), 1);
/// assert_eq!(anchors[0].start(), SegmentId::new(1));
/// ```
pub trait Anchored {
    /// Discovers and diversity-ranks the anchors leaving `start`. The
    /// most representative anchor sits at index 0.
    fn anchors_for_segment(&self, start: SegmentId, params: AnchorParams) -> Result<Vec<Anchor>>;
}

impl<M: LaneMap> Anchored for M {
    fn anchors_for_segment(&self, start: SegmentId, params: AnchorParams) -> Result<Vec<Anchor>> {
        let discovered =
            Discovery::with_options(self, params.synthesis).discover(start, params.max_length)?;

        Ranker::with_options(self, params.synthesis).rank(discovered, params.metric)
    }
}
