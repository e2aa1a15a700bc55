//! Diversity ordering of discovered anchors.

mod matrix;
mod metric;


pub use metric::{DistanceMetric, RIBBON_HALF_WIDTH, WARP_SAMPLES};

use log::{debug, info};

use crate::anchor::curve::{SynthesisOptions, Synthesizer};
use crate::anchor::entity::Anchor;
use crate::anchor::error::Result;
use crate::map::{CurveKind, LaneMap};
use matrix::DistanceMatrix;

/// Orders anchors from most representative to most redundant.
///
/// ### Ordering
///
/// Every unordered pair of anchors is measured over their centerline
/// curves, forming a complete weighted graph. The anchor with the smallest
/// total distance to the remaining set — the one currently most redundant —
/// is removed repeatedly until a single anchor survives; the reversed
/// removal sequence is the ranking. Index 0 is therefore the anchor that
/// stayed most dissimilar to the rest the longest: a greedy reverse
/// farthest-point-sampling construction, not a sort by any intrinsic
/// attribute of a single anchor. The ordering is defined purely relative
/// to the input set and changes when the set changes.
pub struct Ranker<'a, M: LaneMap> {
    synthesizer: Synthesizer<'a, M>,
}

impl<'a, M: LaneMap> Ranker<'a, M> {
    pub fn new(map: &'a M) -> Ranker<'a, M> {
        Ranker::with_options(map, SynthesisOptions::default())
    }

    pub fn with_options(map: &'a M, options: SynthesisOptions) -> Ranker<'a, M> {
        Ranker {
            synthesizer: Synthesizer::with_options(map, options),
        }
    }

    /// Reorders `anchors` most-diverse-first under the given metric.
    ///
    /// The output is always a permutation of the input. Inputs of one (or
    /// zero) anchors are returned unchanged. Ties are broken toward the
    /// lowest input index when selecting the next removal, so among fully
    /// tied anchors — e.g. an input of exactly two — later inputs rank
    /// earlier.
    pub fn rank(&self, anchors: Vec<Anchor>, metric: DistanceMetric) -> Result<Vec<Anchor>> {
        if anchors.len() < 2 {
            return Ok(anchors);
        }

        let centerlines = anchors
            .iter()
            .map(|anchor| {
                self.synthesizer
                    .synthesize(anchor.as_ref(), CurveKind::Center, None)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut matrix = DistanceMatrix::build(&centerlines, metric);
        debug!(
            "assembled {} pairwise `{metric}` distances across {} anchors",
            anchors.len() * (anchors.len() - 1) / 2,
            anchors.len()
        );

        // Greedy smallest-total removal. Inherently sequential: every
        // removal depends on the graph the previous one left behind.
        let mut removal = Vec::with_capacity(anchors.len());
        while matrix.len() > 1 {
            let Some(redundant) = matrix.most_redundant() else {
                break;
            };

            matrix.remove(redundant);
            removal.push(redundant);
        }
        removal.extend(matrix.survivors());
        removal.reverse();

        // Move the anchors into ranked order without cloning their paths.
        let mut slots = anchors.into_iter().map(Some).collect::<Vec<_>>();
        let ranked = removal
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect::<Vec<_>>();

        info!("ranked {} anchors under `{metric}`", ranked.len());
        Ok(ranked)
    }
}
