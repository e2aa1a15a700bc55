use thiserror::Error;

use crate::map::{CurveKind, RelationType, SegmentId};

pub type Result<T> = std::result::Result<T, AnchorError>;

/// Top-level failure of an anchor generation call.
///
/// No variant is retried internally; the crate performs no I/O and has no
/// transient failure modes.
#[derive(Error, Debug)]
pub enum AnchorError {
    /// The caller supplied input outside the contract. Surfaced
    /// immediately, never retried.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The lane-map provider returned data outside its contract. Fatal;
    /// the backing map is non-conformant, this is not a recoverable
    /// runtime condition.
    #[error("lane map violated its contract: {0}")]
    ProviderViolation(#[from] ProviderError),
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("segment {0} does not exist in the lane map")]
    UnknownSegment(SegmentId),

    #[error("maximum anchor length must be positive, got {0}")]
    NonPositiveLength(f64),

    #[error("a curve requires at least one segment")]
    EmptySegmentSequence,

    #[error("unknown distance metric `{0}`, expected one of `iou`, `dtw`, `hausdorff`")]
    UnknownMetric(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum ProviderError {
    #[error("`{kind}` from segment {segment} is not a following relation")]
    NonFollowingRelation {
        segment: SegmentId,
        kind: RelationType,
    },

    #[error("segment {segment} is missing its {kind} boundary")]
    MissingBoundary {
        segment: SegmentId,
        kind: CurveKind,
    },
}
