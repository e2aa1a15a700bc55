use geo::{Euclidean, Length, LineLocatePoint, Point};
use rustc_hash::FxHashMap;

use crate::anchor::curve::Synthesizer;
use crate::anchor::entity::Anchor;
use crate::anchor::error::Result;
use crate::map::{CurveKind, LaneMap, SegmentId};

/// Minimal along-path distance for a projection to count as "ahead".
/// Guards against the ego vehicle detecting itself.
pub const MIN_AHEAD_DISTANCE: f64 = 0.01;

/// A vehicle observed somewhere on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vehicle {
    pub identifier: u64,
    pub position: Point,
}

impl Vehicle {
    pub const fn new(identifier: u64, position: Point) -> Vehicle {
        Vehicle {
            identifier,
            position,
        }
    }
}

/// The nearest preceding vehicle along an anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleAhead {
    pub vehicle: Vehicle,
    /// Distance from the ego position along the anchor, in map units.
    pub distance: f64,
}

/// Finds the closest vehicle ahead of `position` along `anchor`.
///
/// `occupancy` assigns each segment the vehicles currently on it. The
/// anchor centerline is trimmed at the ego position, every occupant of the
/// anchor's segments is projected onto the remainder, and projections
/// closer than `min_ahead` (see [`MIN_AHEAD_DISTANCE`]) are discarded
/// before picking the nearest. `None` when nothing is ahead.
pub fn find_vehicle_ahead<M: LaneMap>(
    map: &M,
    anchor: &Anchor,
    occupancy: &FxHashMap<SegmentId, Vec<Vehicle>>,
    position: Point,
    min_ahead: f64,
) -> Result<Option<VehicleAhead>> {
    let synthesizer = Synthesizer::new(map);

    let remainder = synthesizer.synthesize(anchor.as_ref(), CurveKind::Center, Some(position))?;
    let length = Euclidean.length(&remainder);

    let nearest = anchor
        .iter()
        .filter_map(|segment| occupancy.get(segment))
        .flatten()
        .filter_map(|vehicle| {
            let progress = remainder.line_locate_point(&vehicle.position)?;

            Some(VehicleAhead {
                vehicle: *vehicle,
                distance: progress * length,
            })
        })
        .filter(|ahead| ahead.distance > min_ahead)
        .min_by(|a, b| a.distance.total_cmp(&b.distance));

    Ok(nearest)
}
