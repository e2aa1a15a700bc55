use geo::LineString;
use itertools::Itertools;
use petgraph::prelude::UnGraphMap;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use super::metric::DistanceMetric;

/// Symmetric pairwise distance table over a set of anchor centerlines.
///
/// Realized as a complete weighted graph keyed by anchor input index.
/// Built once per ranking call and discarded afterwards.
pub(crate) struct DistanceMatrix {
    graph: UnGraphMap<usize, f64>,
}

impl DistanceMatrix {
    /// Assembles the full matrix.
    ///
    /// Pairwise distances carry no ordering dependency and are computed
    /// across worker threads; the graph itself is assembled sequentially
    /// once every weight is available.
    pub fn build(curves: &[LineString], metric: DistanceMetric) -> DistanceMatrix {
        let weights = (0..curves.len())
            .tuple_combinations()
            .collect::<Vec<(usize, usize)>>()
            .into_par_iter()
            .map(|(a, b)| (a, b, metric.measure(&curves[a], &curves[b])))
            .collect::<Vec<_>>();

        let mut graph = UnGraphMap::with_capacity(curves.len(), weights.len());
        for index in 0..curves.len() {
            graph.add_node(index);
        }
        for (a, b, weight) in weights {
            graph.add_edge(a, b, weight);
        }

        DistanceMatrix { graph }
    }

    /// Remaining anchor count.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// The remaining anchor most similar to the rest: smallest total
    /// incident distance, ties broken toward the lowest input index.
    pub fn most_redundant(&self) -> Option<usize> {
        self.graph
            .nodes()
            .map(|node| (node, self.total_distance(node)))
            .sorted_by(|(a, wa), (b, wb)| wa.total_cmp(wb).then(a.cmp(b)))
            .next()
            .map(|(node, _)| node)
    }

    pub fn remove(&mut self, node: usize) {
        self.graph.remove_node(node);
    }

    /// Remaining anchors, lowest input index first.
    pub fn survivors(&self) -> Vec<usize> {
        self.graph.nodes().sorted().collect()
    }

    /// Sum of distances from `node` to every other remaining anchor.
    fn total_distance(&self, node: usize) -> f64 {
        self.graph.edges(node).map(|(_, _, weight)| *weight).sum()
    }
}
