use approx::assert_relative_eq;
use geo::{line_string, point};
use rustc_hash::FxHashMap;

use crate::anchor::ahead::{find_vehicle_ahead, Vehicle, MIN_AHEAD_DISTANCE};
use crate::anchor::{Anchor, AnchorParams, Anchored, DistanceMetric};
use crate::map::{MemoryLaneMap, RelationType, SegmentId};

fn straight_lane(map: &mut MemoryLaneMap, id: i64, from: f64, to: f64, offset: f64) -> SegmentId {
    let id = SegmentId::new(id);

    map.insert_segment(
        id,
        line_string![(x: from, y: offset + 4.0), (x: to, y: offset + 4.0)],
        line_string![(x: from, y: offset), (x: to, y: offset)],
    );

    id
}

fn two_segment_lane(map: &mut MemoryLaneMap) -> (SegmentId, SegmentId) {
    let first = straight_lane(map, 1, 0.0, 50.0, 0.0);
    let second = straight_lane(map, 2, 50.0, 100.0, 0.0);
    map.connect(first, second, RelationType::Successor);

    (first, second)
}

#[test_log::test]
fn generation_chains_discovery_and_ranking() {
    let mut map = MemoryLaneMap::new();
    let start = straight_lane(&mut map, 10, 0.0, 50.0, 0.0);
    let straight = straight_lane(&mut map, 11, 50.0, 100.0, 0.0);
    let shifted = straight_lane(&mut map, 12, 50.0, 100.0, 1.0);
    let veering = straight_lane(&mut map, 13, 50.0, 100.0, 40.0);

    map.connect(start, straight, RelationType::Successor);
    map.connect(start, shifted, RelationType::LeftChange);
    map.connect(start, veering, RelationType::LeftChange);

    let anchors = map
        .anchors_for_segment(start, AnchorParams::default())
        .expect("generation succeeds");

    assert_eq!(anchors.len(), 3);
    assert!(anchors.iter().all(|anchor| anchor.start() == start));

    // The distinct branch leads the ranking.
    assert_eq!(anchors[0].terminal(), veering);
}

#[test_log::test]
fn generation_on_a_dead_end_is_metric_independent() {
    for metric in [
        DistanceMetric::AreaOverlap,
        DistanceMetric::DynamicTimeWarp,
        DistanceMetric::Hausdorff,
    ] {
        let mut map = MemoryLaneMap::new();
        let start = straight_lane(&mut map, 1, 0.0, 50.0, 0.0);

        let params = AnchorParams {
            metric,
            ..AnchorParams::default()
        };
        let anchors = map
            .anchors_for_segment(start, params)
            .expect("generation succeeds");

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].segments(), &[start]);
    }
}

#[test]
fn anchors_are_value_objects() {
    let a = Anchor::from(vec![SegmentId::new(1), SegmentId::new(2)]);
    let b = Anchor::from(vec![SegmentId::new(1), SegmentId::new(2)]);
    let c = Anchor::from(vec![SegmentId::new(2), SegmentId::new(1)]);

    assert_eq!(a, b);
    assert_ne!(a, c);

    assert_eq!(a.start(), SegmentId::new(1));
    assert_eq!(a.terminal(), SegmentId::new(2));
    assert_eq!(a.len(), 2);
    assert_eq!(a.to_string(), "[1 -> 2]");
}

#[test]
fn vehicle_ahead_measures_along_the_remaining_path() {
    let mut map = MemoryLaneMap::new();
    let (first, second) = two_segment_lane(&mut map);
    let anchor = Anchor::from(vec![first, second]);

    let mut occupancy: FxHashMap<SegmentId, Vec<Vehicle>> = FxHashMap::default();
    occupancy.insert(
        second,
        vec![Vehicle::new(7, point! { x: 80.0, y: 2.5 })],
    );

    let ahead = find_vehicle_ahead(
        &map,
        &anchor,
        &occupancy,
        point! { x: 40.0, y: 2.0 },
        MIN_AHEAD_DISTANCE,
    )
    .expect("lookup succeeds")
    .expect("a vehicle is ahead");

    assert_eq!(ahead.vehicle.identifier, 7);
    assert_relative_eq!(ahead.distance, 40.0, max_relative = 1e-6);
}

#[test]
fn vehicle_ahead_prefers_the_nearest_occupant() {
    let mut map = MemoryLaneMap::new();
    let (first, second) = two_segment_lane(&mut map);
    let anchor = Anchor::from(vec![first, second]);

    let mut occupancy: FxHashMap<SegmentId, Vec<Vehicle>> = FxHashMap::default();
    occupancy.insert(
        second,
        vec![
            Vehicle::new(7, point! { x: 90.0, y: 2.0 }),
            Vehicle::new(8, point! { x: 60.0, y: 2.0 }),
        ],
    );

    let ahead = find_vehicle_ahead(
        &map,
        &anchor,
        &occupancy,
        point! { x: 40.0, y: 2.0 },
        MIN_AHEAD_DISTANCE,
    )
    .expect("lookup succeeds")
    .expect("vehicles are ahead");

    assert_eq!(ahead.vehicle.identifier, 8);
    assert_relative_eq!(ahead.distance, 20.0, max_relative = 1e-6);
}

#[test]
fn vehicles_behind_are_ignored() {
    let mut map = MemoryLaneMap::new();
    let (first, second) = two_segment_lane(&mut map);
    let anchor = Anchor::from(vec![first, second]);

    let mut occupancy: FxHashMap<SegmentId, Vec<Vehicle>> = FxHashMap::default();
    occupancy.insert(first, vec![Vehicle::new(7, point! { x: 10.0, y: 2.0 })]);

    let ahead = find_vehicle_ahead(
        &map,
        &anchor,
        &occupancy,
        point! { x: 40.0, y: 2.0 },
        MIN_AHEAD_DISTANCE,
    )
    .expect("lookup succeeds");

    // Behind the ego position the occupant projects onto the trimmed
    // curve's start, inside the self-detection guard.
    assert!(ahead.is_none());
}

#[test]
fn the_ego_vehicle_does_not_detect_itself() {
    let mut map = MemoryLaneMap::new();
    let (first, second) = two_segment_lane(&mut map);
    let anchor = Anchor::from(vec![first, second]);

    let position = point! { x: 40.0, y: 2.0 };
    let mut occupancy: FxHashMap<SegmentId, Vec<Vehicle>> = FxHashMap::default();
    occupancy.insert(first, vec![Vehicle::new(0, position)]);

    let ahead = find_vehicle_ahead(&map, &anchor, &occupancy, position, MIN_AHEAD_DISTANCE)
        .expect("lookup succeeds");

    assert!(ahead.is_none());
}
