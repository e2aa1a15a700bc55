#![doc = include_str!("../readme.md")]

pub mod anchor;
pub mod map;

#[doc(inline)]
pub use anchor::{
    Anchor, AnchorError, AnchorParams, Anchored, DistanceMetric, Discovery, Ranker, Result,
    SynthesisOptions, Synthesizer,
};
