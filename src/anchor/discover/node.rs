use crate::map::{RelationType, SegmentId};

pub(crate) type NodeId = usize;

/// A single expansion within the search tree.
///
/// Nodes are never mutated after creation. The arena is discarded once
/// discovery completes; its only durable output is the derived anchor
/// list.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    pub segment: SegmentId,
    /// Relation of the edge that created this node; `None` for the root.
    pub relation: Option<RelationType>,
    pub parent: Option<NodeId>,
}

/// Flat arena backing the search tree.
///
/// Ancestor queries walk parent links instead of maintaining a separate
/// graph structure. Node identity is unique per path, not per segment, so
/// the same segment may legitimately appear in several paths.
pub(crate) struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub const ROOT: NodeId = 0;

    pub fn rooted(segment: SegmentId) -> SearchTree {
        SearchTree {
            nodes: vec![SearchNode {
                segment,
                relation: None,
                parent: None,
            }],
        }
    }

    pub fn insert(&mut self, parent: NodeId, relation: RelationType, segment: SegmentId) -> NodeId {
        let id = self.nodes.len();

        self.nodes.push(SearchNode {
            segment,
            relation: Some(relation),
            parent: Some(parent),
        });

        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn segment(&self, node: NodeId) -> SegmentId {
        self.nodes[node].segment
    }

    /// Segments along the path root → `node`, root first.
    pub fn path_segments(&self, node: NodeId) -> Vec<SegmentId> {
        let mut segments = self.walk(node).map(|n| n.segment).collect::<Vec<_>>();
        segments.reverse();
        segments
    }

    /// Which lane-change directions appear along the path root → `node`,
    /// as `(left, right)`.
    pub fn change_directions(&self, node: NodeId) -> (bool, bool) {
        let mut left = false;
        let mut right = false;

        for entry in self.walk(node) {
            match entry.relation {
                Some(RelationType::LeftChange) => left = true,
                Some(RelationType::RightChange) => right = true,
                _ => {}
            }
        }

        (left, right)
    }

    /// Nodes from `node` up to the root, leaf end first.
    fn walk(&self, node: NodeId) -> impl Iterator<Item = &SearchNode> {
        std::iter::successors(Some(&self.nodes[node]), |current| {
            current.parent.map(|parent| &self.nodes[parent])
        })
    }
}
