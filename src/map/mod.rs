//! The capability boundary onto the backing lane-level map.
//!
//! Anchor generation only ever asks a map two questions: which segments
//! follow a given segment (including by lane change), and what a segment's
//! boundary polylines look like. Everything else — parsing, projection,
//! routing metadata — stays on the provider's side of the [`LaneMap`] trait.

#[doc(hidden)]
pub mod ident;
#[doc(hidden)]
pub mod memory;
#[doc(hidden)]
pub mod provider;
#[doc(hidden)]
pub mod relation;


#[doc(inline)]
pub use ident::SegmentId;
#[doc(inline)]
pub use memory::MemoryLaneMap;
#[doc(inline)]
pub use provider::{CurveKind, LaneMap};
#[doc(inline)]
pub use relation::{LaneRelation, RelationType};
