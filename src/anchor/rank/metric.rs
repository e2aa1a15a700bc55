use std::str::FromStr;

use geo::{Area, BooleanOps, Distance, Euclidean, HausdorffDistance, Length, LineString, Point};
use strum::{Display, EnumString};

use crate::anchor::curve::{ribbon, slice};
use crate::anchor::error::{InputError, Result};

/// Half-width of the ribbons each curve is inflated to for
/// [`DistanceMetric::AreaOverlap`].
pub const RIBBON_HALF_WIDTH: f64 = 1.0;

/// Sample count both curves are resampled at for
/// [`DistanceMetric::DynamicTimeWarp`].
pub const WARP_SAMPLES: usize = 100;

/// Geometric distance between two anchor centerlines.
///
/// All metrics are symmetric and non-negative, and tolerate degenerate
/// curves: two identical single points measure distance 0 under every
/// metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum DistanceMetric {
    /// `1 − intersection / union` of the two curves inflated into ribbons
    /// of half-width [`RIBBON_HALF_WIDTH`]. Ranges over `[0, 1]`; 0 means
    /// identical ribbons.
    #[strum(serialize = "iou")]
    AreaOverlap,

    /// Dynamic-time-warping cost between the curves resampled at
    /// [`WARP_SAMPLES`] evenly spaced normalized positions, with Euclidean
    /// per-point cost.
    #[strum(serialize = "dtw")]
    DynamicTimeWarp,

    /// Standard two-sided Hausdorff distance.
    #[strum(serialize = "hausdorff")]
    Hausdorff,
}

impl DistanceMetric {
    /// Resolves a metric from its caller-facing name (`iou`, `dtw` or
    /// `hausdorff`); anything else is invalid input.
    pub fn parse(name: &str) -> Result<DistanceMetric> {
        DistanceMetric::from_str(name)
            .map_err(|_| InputError::UnknownMetric(name.to_string()).into())
    }

    /// Distance between two centerlines.
    ///
    /// Both curves are first truncated (from their start) to the shorter
    /// of the two lengths, so a long and a short anchor sharing a prefix
    /// compare over their shared extent only.
    pub(crate) fn measure(&self, a: &LineString, b: &LineString) -> f64 {
        let shorter = Euclidean.length(a).min(Euclidean.length(b));

        let a = slice::head(a, shorter);
        let b = slice::head(b, shorter);

        match self {
            DistanceMetric::AreaOverlap => area_overlap(&a, &b),
            DistanceMetric::DynamicTimeWarp => warp_cost(&a, &b),
            DistanceMetric::Hausdorff => a.hausdorff_distance(&b),
        }
    }
}

fn area_overlap(a: &LineString, b: &LineString) -> f64 {
    let a = ribbon::inflate(a, RIBBON_HALF_WIDTH);
    let b = ribbon::inflate(b, RIBBON_HALF_WIDTH);

    let union = a.union(&b).unsigned_area();
    if union <= f64::EPSILON {
        // Two empty ribbons cover the same (zero) area.
        return 0.0;
    }

    let intersection = a.intersection(&b).unsigned_area();

    1.0 - intersection / union
}

fn warp_cost(a: &LineString, b: &LineString) -> f64 {
    let a = slice::resample(a, WARP_SAMPLES).0;
    let b = slice::resample(b, WARP_SAMPLES).0;

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Rolling-row dynamic program over the full warp lattice.
    let mut previous = vec![f64::INFINITY; b.len() + 1];
    let mut current = vec![f64::INFINITY; b.len() + 1];
    previous[0] = 0.0;

    for i in 1..=a.len() {
        current[0] = f64::INFINITY;

        for j in 1..=b.len() {
            let cost = Euclidean.distance(Point::from(a[i - 1]), Point::from(b[j - 1]));
            let reachable = previous[j].min(current[j - 1]).min(previous[j - 1]);

            current[j] = cost + reachable;
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
