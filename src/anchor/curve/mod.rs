//! Stitching per-segment boundary polylines into one smooth curve.

pub(crate) mod blend;
pub(crate) mod ribbon;
pub(crate) mod slice;


use geo::{Coord, Distance, Euclidean, LineLocatePoint, LineString, Point, Polygon, Simplify};
use itertools::{EitherOrBoth, Itertools};
use log::trace;

use crate::anchor::error::{InputError, ProviderError, Result};
use crate::anchor::Anchor;
use crate::map::{CurveKind, LaneMap, SegmentId};

/// Planar gap between consecutive boundaries above which a junction is
/// classified as a lane-change discontinuity.
pub const DEFAULT_DISCONTINUITY_THRESHOLD: f64 = 0.1;
/// Tolerance of the geometric simplification applied to combined curves.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.01;
/// Sample count used for blends and boundary resampling.
pub const DEFAULT_BLEND_SAMPLES: usize = 100;

/// Tuning knobs of curve synthesis.
///
/// The defaults mirror the thresholds the rest of the crate was validated
/// against; both assume map units of meters and may need revisiting for
/// other coordinate systems.
#[derive(Clone, Copy, Debug)]
pub struct SynthesisOptions {
    /// See [`DEFAULT_DISCONTINUITY_THRESHOLD`].
    pub discontinuity_threshold: f64,
    /// See [`DEFAULT_SIMPLIFY_TOLERANCE`].
    pub simplify_tolerance: f64,
    /// See [`DEFAULT_BLEND_SAMPLES`].
    pub blend_samples: usize,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        SynthesisOptions {
            discontinuity_threshold: DEFAULT_DISCONTINUITY_THRESHOLD,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            blend_samples: DEFAULT_BLEND_SAMPLES,
        }
    }
}

/// Combines the boundary polylines of a segment sequence into a single
/// smooth curve.
///
/// ### Synthesis
///
/// The chosen boundary is extracted for every segment in order. Each
/// junction between consecutive boundaries is classified by the planar gap
/// between the first curve's end and the second curve's start: gaps above
/// the discontinuity threshold mark a lane change. Runs of consecutive
/// discontinuous junctions collapse into a single blend spanning the first
/// and last curve of the run — the narrow transitional boundaries between
/// them are not part of the intended path and are dropped. Discontinuous
/// junctions are bridged by a smoothstep blend; continuous ones concatenate
/// directly. The combined curve is simplified before being returned.
pub struct Synthesizer<'a, M: LaneMap> {
    map: &'a M,
    options: SynthesisOptions,
}

impl<'a, M: LaneMap> Synthesizer<'a, M> {
    pub fn new(map: &'a M) -> Synthesizer<'a, M> {
        Synthesizer::with_options(map, SynthesisOptions::default())
    }

    pub fn with_options(map: &'a M, options: SynthesisOptions) -> Synthesizer<'a, M> {
        Synthesizer { map, options }
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Synthesizes the combined `kind` curve of `segments`.
    ///
    /// With a `trim_point`, the point is projected onto the combined curve
    /// and only the sub-curve from that position onward is returned; a
    /// projection outside the curve clamps to its ends rather than failing.
    /// An empty segment sequence is invalid input.
    pub fn synthesize(
        &self,
        segments: &[SegmentId],
        kind: CurveKind,
        trim_point: Option<Point>,
    ) -> Result<LineString> {
        if segments.is_empty() {
            return Err(InputError::EmptySegmentSequence.into());
        }

        let lines = segments
            .iter()
            .map(|&segment| self.boundary_of(segment, kind))
            .collect::<Result<Vec<_>>>()?;

        let mut combined = self.combine(&lines);

        if let Some(point) = trim_point {
            let progress = combined.line_locate_point(&point).unwrap_or(0.0);
            combined = slice::tail(&combined, progress);
        }

        Ok(combined)
    }

    /// The corridor swept by an anchor: its left boundary forward, right
    /// boundary backward, closed into a polygon.
    pub fn corridor(&self, anchor: &Anchor) -> Result<Polygon> {
        let left = self.synthesize(anchor.as_ref(), CurveKind::Left, None)?;
        let right = self.synthesize(anchor.as_ref(), CurveKind::Right, None)?;

        let mut ring = left.0;
        ring.extend(right.0.into_iter().rev());

        Ok(Polygon::new(LineString::new(ring), vec![]))
    }

    /// Longitudinal line across a single segment at the lateral `ratio`:
    /// 0 follows the right boundary, 1 the left, 0.5 the midline. Both
    /// boundaries are resampled at the blend sample count and combined
    /// pointwise.
    pub fn interpolate(&self, segment: SegmentId, ratio: f64) -> Result<LineString> {
        let samples = self.options.blend_samples;

        let left = slice::resample(&self.boundary_of(segment, CurveKind::Left)?, samples);
        let right = slice::resample(&self.boundary_of(segment, CurveKind::Right)?, samples);

        let line = left
            .0
            .iter()
            .zip(right.0.iter())
            .map(|(l, r)| Coord {
                x: l.x * ratio + r.x * (1.0 - ratio),
                y: l.y * ratio + r.y * (1.0 - ratio),
            })
            .collect::<LineString>();

        Ok(line)
    }

    fn boundary_of(&self, segment: SegmentId, kind: CurveKind) -> Result<LineString> {
        match self.map.boundary(segment, kind) {
            Some(line) => Ok(line),
            None if self.map.contains(segment) => {
                Err(ProviderError::MissingBoundary { segment, kind }.into())
            }
            None => Err(InputError::UnknownSegment(segment).into()),
        }
    }

    /// Combines the extracted boundaries into one simplified curve.
    fn combine(&self, lines: &[LineString]) -> LineString {
        // Every consecutive pair, the final curve paired with nothing.
        let pairs = lines
            .iter()
            .zip_longest(lines.iter().skip(1))
            .filter_map(|entry| match entry {
                EitherOrBoth::Both(a, b) => Some((a, Some(b))),
                EitherOrBoth::Left(a) => Some((a, None)),
                EitherOrBoth::Right(_) => None,
            })
            .collect::<Vec<_>>();

        // Collapse runs of discontinuous junctions into a single pair
        // spanning the run; the curves strictly in between are dropped.
        let mut collapsed = Vec::with_capacity(pairs.len());
        for (discontinuous, run) in &pairs
            .into_iter()
            .chunk_by(|&(a, b)| self.is_discontinuous(a, b))
        {
            let run = run.collect::<Vec<_>>();

            if discontinuous {
                trace!("collapsing a run of {} discontinuous junctions", run.len());
                collapsed.push((run[0].0, run[run.len() - 1].1));
            } else {
                collapsed.extend(run);
            }
        }

        let mut coords: Vec<Coord> = Vec::new();
        let mut junctions = collapsed.into_iter();

        while let Some((current, next)) = junctions.next() {
            match next {
                Some(next) if self.is_discontinuous(current, Some(next)) => {
                    let blended = blend::blend(current, next, self.options.blend_samples);
                    coords.extend(blended.0);

                    // The blend replaces both curves at this junction.
                    junctions.next();
                }
                _ => coords.extend(current.0.iter().copied()),
            }
        }

        LineString::new(coords).simplify(&self.options.simplify_tolerance)
    }

    fn is_discontinuous(&self, first: &LineString, second: Option<&LineString>) -> bool {
        let Some(second) = second else {
            return false;
        };

        match (first.0.last(), second.0.first()) {
            (Some(end), Some(start)) => {
                Euclidean.distance(Point::from(*end), Point::from(*start))
                    > self.options.discontinuity_threshold
            }
            _ => false,
        }
    }
}
