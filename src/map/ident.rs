use std::fmt::{Display, Formatter};

/// Identifies a lane segment within the backing map.
///
/// The identifier is opaque to the crate; it is only ever handed back
/// to the [`LaneMap`](crate::map::LaneMap) that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(i64);

impl SegmentId {
    pub const fn new(identifier: i64) -> SegmentId {
        SegmentId(identifier)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for SegmentId {
    fn from(identifier: i64) -> Self {
        SegmentId(identifier)
    }
}

impl Display for SegmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
