// Host-side tests for the pulse simulation.
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
mod pulses {
    include!("../src/core/pulses.rs");
}

use config::SceneConfig;
use paths::PathTable;
use pulses::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_scene(seed: u64) -> (SceneConfig, PathTable, PulseField) {
    let config = SceneConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let table = PathTable::generate(&config, &mut rng);
    let field = PulseField::new(&config, &table, seed ^ 0x9E37_79B9_7F4A_7C15);
    (config, table, field)
}

#[test]
fn progress_stays_in_domain_after_every_advance() {
    let (_, table, mut field) = make_scene(3);
    for _ in 0..200 {
        field.advance(&table);
        for pulse in field.pulses() {
            assert!(
                (0.0..1.0).contains(&pulse.progress),
                "progress out of domain: {}",
                pulse.progress
            );
            assert!(pulse.path_index < table.len());
        }
    }
}

#[test]
fn respawn_resamples_path_and_speed_in_range() {
    let mut config = SceneConfig::default();
    // Fast pulses so every one respawns within a couple of ticks
    config.speed_min = 0.6;
    config.speed_max = 0.9;
    let mut rng = StdRng::seed_from_u64(5);
    let table = PathTable::generate(&config, &mut rng);
    let mut field = PulseField::new(&config, &table, 99);
    for _ in 0..20 {
        field.advance(&table);
        for pulse in field.pulses() {
            assert!(pulse.path_index < table.len());
            assert!(pulse.speed >= config.speed_min && pulse.speed <= config.speed_max);
            assert!(pulse.progress < 1.0);
        }
    }
}

#[test]
fn travel_scale_fades_in_and_out() {
    let peak = 1.5;
    assert!(PulseField::scale_at(0.0, peak).abs() < 1e-6);
    assert!(PulseField::scale_at(1.0, peak).abs() < 1e-6);
    assert!((PulseField::scale_at(0.5, peak) - peak).abs() < 1e-6);
    // Midpoint is the maximum over the whole travel
    let mid = PulseField::scale_at(0.5, peak);
    for i in 0..=100 {
        let p = i as f32 / 100.0;
        assert!(PulseField::scale_at(p, peak) <= mid + 1e-6);
    }
}

#[test]
fn long_run_stays_finite_with_full_instance_count() {
    let (config, table, mut field) = make_scene(17);
    assert_eq!(config.pulse_count, 50);
    for _ in 0..1000 {
        field.advance(&table);
    }
    assert_eq!(field.instances().len(), 50);
    for instance in field.instances() {
        assert!(instance.position.is_finite());
        assert!(instance.scale.is_finite());
        assert!(instance.scale >= 0.0);
    }
}

#[test]
fn empty_lattice_degrades_to_no_pulses() {
    let config = SceneConfig::default();
    let table = PathTable::empty();
    let mut field = PulseField::new(&config, &table, 1);
    assert!(field.is_empty());
    // Must be a no-op, not a fault
    field.advance(&table);
    assert!(field.instances().is_empty());
}
