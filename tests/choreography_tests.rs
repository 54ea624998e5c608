// Host-side tests for phase bands and scene choreography.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod choreography {
    include!("../src/core/choreography.rs");
}

use choreography::*;
use config::{PhaseBand, SceneConfig};
use glam::{Mat4, Vec2};

fn make_choreographer() -> Choreographer {
    Choreographer::new(&SceneConfig::default())
}

#[test]
fn presence_ramps_across_band_edges() {
    let band = PhaseBand {
        start: 2.5,
        end: 5.0,
        ease_in: 0.5,
        ease_out: 0.5,
    };
    assert_eq!(band.presence(2.0), 0.0);
    assert_eq!(band.presence(2.5), 0.0);
    assert!((band.presence(2.75) - 0.5).abs() < 1e-6);
    assert_eq!(band.presence(3.0), 1.0);
    assert_eq!(band.presence(4.0), 1.0);
    assert!((band.presence(4.75) - 0.5).abs() < 1e-6);
    assert_eq!(band.presence(5.0), 0.0);
    assert_eq!(band.presence(6.0), 0.0);
}

#[test]
fn always_band_is_always_fully_present() {
    for phase in [-100.0, -1.0, 0.0, 2.5, 1e6] {
        assert_eq!(PhaseBand::ALWAYS.presence(phase), 1.0);
    }
}

#[test]
fn object_state_tags_follow_presence() {
    let choreographer = make_choreographer();
    assert_eq!(choreographer.hero_state(0.0), ObjectState::Idle);
    assert!(matches!(
        choreographer.hero_state(1.2),
        ObjectState::Transitioning { .. }
    ));
    assert_eq!(choreographer.hero_state(2.0), ObjectState::Inactive);
    assert_eq!(choreographer.drone_state(2.0), ObjectState::Inactive);
    assert!(matches!(
        choreographer.drone_state(2.6),
        ObjectState::Transitioning { .. }
    ));
    assert_eq!(choreographer.drone_state(3.5), ObjectState::Idle);
    assert_eq!(choreographer.drone_state(5.5), ObjectState::Inactive);
}

#[test]
fn visibility_gating_is_independent_per_object() {
    let choreographer = make_choreographer();
    let pointer = Vec2::ZERO;

    let top = choreographer.pose_scene(1.0, 0.0, pointer);
    assert!(top.hero.visible);
    assert!(!top.drone.visible);

    let mid = choreographer.pose_scene(1.0, 3.0, pointer);
    assert!(!mid.hero.visible);
    assert!(mid.drone.visible);

    // Between the bands both are hidden; ambient objects never are
    let gap = choreographer.pose_scene(1.0, 1.8, pointer);
    assert!(!gap.hero.visible);
    assert!(!gap.drone.visible);
    assert!(gap.particles.visible);
    assert!(gap.sweep.visible);
    assert!(gap.circuit.visible);
}

#[test]
fn hero_children_follow_the_group() {
    let choreographer = make_choreographer();
    let poses = choreographer.pose_scene(2.0, 0.0, Vec2::new(0.3, -0.2));
    for child in [&poses.ring_inner, &poses.ring_outer, &poses.core] {
        assert_eq!(child.visible, poses.hero.visible);
        assert_eq!(child.position, poses.hero.position);
    }
    let gone = choreographer.pose_scene(2.0, 2.0, Vec2::ZERO);
    assert!(!gone.ring_inner.visible);
    assert!(!gone.ring_outer.visible);
    assert!(!gone.core.visible);
}

#[test]
fn poses_are_continuous_across_band_edges() {
    let choreographer = make_choreographer();
    let pointer = Vec2::new(0.4, 0.1);
    let time = 3.7;
    let epsilon = 1e-3;
    for boundary in [1.0, 1.5, 2.5, 3.0, 4.5, 5.0] {
        let below = choreographer.pose_scene(time, boundary - epsilon, pointer);
        let above = choreographer.pose_scene(time, boundary + epsilon, pointer);
        for (a, b) in [
            (&below.hero, &above.hero),
            (&below.drone, &above.drone),
            (&below.core, &above.core),
        ] {
            assert!(
                a.position.distance(b.position) < 0.05,
                "position pops at phase {boundary}"
            );
            assert!(
                (a.scale - b.scale).length() < 0.05,
                "scale pops at phase {boundary}"
            );
        }
    }
}

#[test]
fn out_of_range_phase_never_extrapolates() {
    let choreographer = make_choreographer();
    for phase in [-50.0, -1.0, 42.0, 1e9] {
        let poses = choreographer.pose_scene(10.0, phase, Vec2::new(1.0, 1.0));
        for pose in [
            &poses.circuit,
            &poses.hero,
            &poses.ring_inner,
            &poses.ring_outer,
            &poses.core,
            &poses.drone,
            &poses.particles,
            &poses.sweep,
        ] {
            assert!(pose.position.is_finite());
            assert!(pose.scale.is_finite());
            assert!(pose.scale.x >= 0.0 && pose.scale.x <= 20.0);
        }
    }
    // Negative scroll keeps the hero fully on stage
    let poses = choreographer.pose_scene(10.0, -50.0, Vec2::ZERO);
    assert!(poses.hero.visible);
    assert_eq!(poses.hero.scale.x, 1.0);
}

#[test]
fn circuit_parallax_tracks_the_pointer() {
    let choreographer = make_choreographer();
    let poses = choreographer.pose_scene(0.0, 0.0, Vec2::new(1.0, -0.5));
    assert!((poses.circuit.position.x - -0.5).abs() < 1e-6);
    assert!((poses.circuit.position.y - 0.25).abs() < 1e-6);
    assert!((poses.circuit.rotation.z - 0.02).abs() < 1e-6);
    // Centered pointer leaves the lattice untouched
    let centered = choreographer.pose_scene(0.0, 0.0, Vec2::ZERO);
    assert_eq!(centered.circuit.matrix(), Mat4::IDENTITY);
}

#[test]
fn ease_in_out_sine_hits_endpoints_and_clamps() {
    assert!(ease_in_out_sine(0.0).abs() < 1e-6);
    assert!((ease_in_out_sine(1.0) - 1.0).abs() < 1e-6);
    assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(ease_in_out_sine(-2.0), ease_in_out_sine(0.0));
    assert_eq!(ease_in_out_sine(3.0), ease_in_out_sine(1.0));
}
