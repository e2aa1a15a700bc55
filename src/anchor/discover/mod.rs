//! Constrained depth-limited search over the lane connectivity graph.

mod node;


use geo::{Euclidean, Length};
use log::{info, trace};

use crate::anchor::curve::{SynthesisOptions, Synthesizer};
use crate::anchor::entity::Anchor;
use crate::anchor::error::{InputError, ProviderError, Result};
use crate::map::{CurveKind, LaneMap, RelationType, SegmentId};
use node::{NodeId, SearchTree};

/// Enumerates every topologically distinct downstream path of a start
/// segment, bounded by a maximum centerline length.
///
/// ### Pruning
///
/// Two rules bound the otherwise exponential expansion:
///
/// - **Lane-change exclusivity.** A path that has changed left can never
///   change right for the remainder of the anchor, and vice versa. A child
///   whose path would contain both directions is rejected outright and its
///   subtree is never explored.
/// - **Length.** Once the centerline of a node's path — start segment
///   excluded — exceeds the maximum length, the node becomes a leaf. It is
///   kept, not rejected, so terminal segments may overshoot the bound
///   while every non-terminal prefix stays within it.
///
/// One anchor is produced per leaf: the segment path from the root to it.
pub struct Discovery<'a, M: LaneMap> {
    map: &'a M,
    synthesizer: Synthesizer<'a, M>,
}

impl<'a, M: LaneMap> Discovery<'a, M> {
    pub fn new(map: &'a M) -> Discovery<'a, M> {
        Discovery::with_options(map, SynthesisOptions::default())
    }

    pub fn with_options(map: &'a M, options: SynthesisOptions) -> Discovery<'a, M> {
        Discovery {
            map,
            synthesizer: Synthesizer::with_options(map, options),
        }
    }

    /// Discovers all anchors reachable from `start`.
    ///
    /// `max_length` is the desired anchor length in map units, measured
    /// along the centerline with the start segment excluded; it must be
    /// positive, and `start` must exist within the map. A start segment
    /// without outgoing relations yields the single one-segment anchor.
    pub fn discover(&self, start: SegmentId, max_length: f64) -> Result<Vec<Anchor>> {
        if max_length <= 0.0 {
            return Err(InputError::NonPositiveLength(max_length).into());
        }
        if !self.map.contains(start) {
            return Err(InputError::UnknownSegment(start).into());
        }

        let mut tree = SearchTree::rooted(start);
        let mut leaves: Vec<NodeId> = Vec::new();

        // Explicit work stack; recursion depth would otherwise be bounded
        // only by max_length over the shortest segment in the graph.
        let mut frontier = vec![SearchTree::ROOT];

        while let Some(current) = frontier.pop() {
            let path = tree.path_segments(current);

            if self.length_ahead(&path)? > max_length {
                trace!("length bound reached at segment {}", tree.segment(current));
                leaves.push(current);
                continue;
            }

            let relations = self.map.following_relations(tree.segment(current));
            let (changed_left, changed_right) = tree.change_directions(current);
            let mut expanded = false;

            for relation in relations {
                if !relation.kind.is_following() {
                    return Err(ProviderError::NonFollowingRelation {
                        segment: tree.segment(current),
                        kind: relation.kind,
                    }
                    .into());
                }

                // A vehicle that has changed left can never subsequently
                // change right within the same anchor, and vice versa.
                let excluded = match relation.kind {
                    RelationType::LeftChange => changed_right,
                    RelationType::RightChange => changed_left,
                    _ => false,
                };

                if excluded {
                    trace!(
                        "rejecting {} onto segment {}: opposing lane change upstream",
                        relation.kind,
                        relation.target
                    );
                    continue;
                }

                frontier.push(tree.insert(current, relation.kind, relation.target));
                expanded = true;
            }

            // Dead ends, and nodes whose every child was rejected.
            if !expanded {
                leaves.push(current);
            }
        }

        let anchors = leaves
            .into_iter()
            .map(|leaf| Anchor::from(tree.path_segments(leaf)))
            .collect::<Vec<_>>();

        info!(
            "discovered {} anchors from segment {start} across {} expansions",
            anchors.len(),
            tree.len()
        );

        Ok(anchors)
    }

    /// Centerline length of `path` with its root segment excluded.
    fn length_ahead(&self, path: &[SegmentId]) -> Result<f64> {
        let ahead = &path[1..];
        if ahead.is_empty() {
            return Ok(0.0);
        }

        let centerline = self
            .synthesizer
            .synthesize(ahead, CurveKind::Center, None)?;

        Ok(Euclidean.length(&centerline))
    }
}
