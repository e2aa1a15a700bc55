//! Candidate future-path ("anchor") generation.
//!
//! Three components cooperate: [`Discovery`] enumerates the topologically
//! distinct downstream paths of a start segment, [`Ranker`] orders them
//! most-diverse-first, and [`Synthesizer`] turns any path into a single
//! smooth curve. The [`Anchored`] trait chains the first two for the
//! common case; curves are synthesized on demand by consumers.

pub mod ahead;
pub mod curve;
pub mod discover;
pub mod entity;
pub mod error;
pub mod generate;
pub mod rank;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use ahead::{find_vehicle_ahead, Vehicle, VehicleAhead};
#[doc(inline)]
pub use curve::{SynthesisOptions, Synthesizer};
#[doc(inline)]
pub use discover::Discovery;
#[doc(inline)]
pub use entity::Anchor;
#[doc(inline)]
pub use error::{AnchorError, Result};
#[doc(inline)]
pub use generate::{AnchorParams, Anchored};
#[doc(inline)]
pub use rank::{DistanceMetric, Ranker};
