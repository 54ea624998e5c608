// Host-side tests for the wire lattice generator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod paths {
    include!("../src/core/paths.rs");
}

use config::SceneConfig;
use paths::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generate(seed: u64) -> (SceneConfig, PathTable) {
    let config = SceneConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let table = PathTable::generate(&config, &mut rng);
    (config, table)
}

#[test]
fn generates_exactly_the_configured_count() {
    let (config, table) = generate(7);
    assert_eq!(config.segment_count, 80);
    assert_eq!(table.len(), 80);
    assert_eq!(table.segments().len(), 80);
    assert!(!table.is_empty());
}

#[test]
fn all_lengths_positive_and_in_range() {
    let (config, table) = generate(7);
    for segment in table.segments() {
        assert!(segment.length > 0.0);
        assert!(segment.length >= config.length_min);
        assert!(segment.length <= config.length_max);
    }
}

#[test]
fn segments_are_strictly_axis_aligned() {
    let (_, table) = generate(11);
    for segment in table.segments() {
        let delta = segment.end - segment.start;
        match segment.axis {
            Axis::Horizontal => {
                assert_eq!(delta.y, 0.0);
                assert!((delta.x - segment.length).abs() < 1e-5);
            }
            Axis::Vertical => {
                assert_eq!(delta.x, 0.0);
                assert!((delta.y - segment.length).abs() < 1e-5);
            }
        }
        // Depth never varies along a wire
        assert_eq!(delta.z, 0.0);
    }
}

#[test]
fn anchors_stay_within_the_configured_extent() {
    let (config, table) = generate(13);
    let half = config.lattice_extent * 0.5;
    for segment in table.segments() {
        assert!(segment.start.x >= -half && segment.start.x <= half);
        assert!(segment.start.y >= -half && segment.start.y <= half);
        assert!(segment.start.z >= config.depth_min && segment.start.z <= config.depth_max);
    }
}

#[test]
fn same_seed_reproduces_the_same_lattice() {
    let (_, a) = generate(42);
    let (_, b) = generate(42);
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.segments().iter().zip(b.segments()) {
        assert_eq!(sa.start, sb.start);
        assert_eq!(sa.end, sb.end);
        assert_eq!(sa.axis, sb.axis);
    }
}

#[test]
fn empty_table_reports_empty() {
    let table = PathTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(table.segments().is_empty());
}
