use criterion::{criterion_group, criterion_main, Criterion};
use geo::line_string;

use lane_anchors::anchor::{Discovery, DistanceMetric, Ranker};
use lane_anchors::map::{MemoryLaneMap, RelationType, SegmentId};

const SECTION_LENGTH: f64 = 50.0;
const LANE_WIDTH: f64 = 4.0;

/// A synthetic motorway: `lanes` parallel lanes split into `sections`
/// successive segments, with lane changes toward both neighbours.
fn motorway(lanes: i64, sections: i64) -> MemoryLaneMap {
    let mut map = MemoryLaneMap::new();

    let id = |lane: i64, section: i64| SegmentId::new(lane * 1000 + section);

    for lane in 0..lanes {
        for section in 0..sections {
            let from = section as f64 * SECTION_LENGTH;
            let to = from + SECTION_LENGTH;
            let offset = lane as f64 * LANE_WIDTH;

            map.insert_segment(
                id(lane, section),
                line_string![(x: from, y: offset + LANE_WIDTH), (x: to, y: offset + LANE_WIDTH)],
                line_string![(x: from, y: offset), (x: to, y: offset)],
            );
        }
    }

    for lane in 0..lanes {
        for section in 0..sections - 1 {
            map.connect(id(lane, section), id(lane, section + 1), RelationType::Successor);

            if lane + 1 < lanes {
                map.connect(
                    id(lane, section),
                    id(lane + 1, section + 1),
                    RelationType::LeftChange,
                );
            }
            if lane > 0 {
                map.connect(
                    id(lane, section),
                    id(lane - 1, section + 1),
                    RelationType::RightChange,
                );
            }
        }
    }

    map
}

fn anchor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchors");
    group.significance_level(0.1).sample_size(30);

    let map = motorway(3, 5);
    let start = SegmentId::new(1000);

    group.bench_function("discover: 3x5 motorway", |b| {
        b.iter(|| {
            let anchors = Discovery::new(&map)
                .discover(start, 180.0)
                .expect("discovery succeeds");

            assert!(!anchors.is_empty());
        })
    });

    let anchors = Discovery::new(&map)
        .discover(start, 180.0)
        .expect("discovery succeeds");

    for metric in [
        DistanceMetric::AreaOverlap,
        DistanceMetric::DynamicTimeWarp,
        DistanceMetric::Hausdorff,
    ] {
        group.bench_function(format!("rank: {metric}"), |b| {
            b.iter(|| {
                let ranked = Ranker::new(&map)
                    .rank(anchors.clone(), metric)
                    .expect("ranking succeeds");

                assert_eq!(ranked.len(), anchors.len());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, anchor_benchmark);
criterion_main!(benches);
