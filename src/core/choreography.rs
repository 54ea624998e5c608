use super::config::{PhaseBand, SceneConfig};
use super::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use std::f32::consts::PI;

/// Where an object sits relative to its phase band this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObjectState {
    Inactive,
    Idle,
    Transitioning { t: f32 },
}

impl ObjectState {
    /// Derive the state from a band's presence value.
    pub fn from_presence(presence: f32) -> Self {
        if presence <= 0.0 {
            ObjectState::Inactive
        } else if presence >= 1.0 {
            ObjectState::Idle
        } else {
            ObjectState::Transitioning { t: presence }
        }
    }
}

/// Transform for one named scene object, rebuilt every frame and handed
/// straight to the render sink.
#[derive(Clone, Copy, Debug)]
pub struct ObjectPose {
    pub position: Vec3,
    pub rotation: Vec3, // XYZ Euler, radians
    pub scale: Vec3,
    pub visible: bool,
}

impl Default for ObjectPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
        }
    }
}

impl ObjectPose {
    /// World matrix for the render sink.
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Per-frame poses for every named object in the scene.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScenePoses {
    pub circuit: ObjectPose,
    pub hero: ObjectPose,
    pub ring_inner: ObjectPose,
    pub ring_outer: ObjectPose,
    pub core: ObjectPose,
    pub drone: ObjectPose,
    pub particles: ObjectPose,
    pub sweep: ObjectPose,
}

/// Maps (elapsed time, scroll phase, smoothed pointer) to object poses.
///
/// Every pose is a continuous function of phase: band edges ramp presence to
/// zero before visibility cuts, so nothing pops on screen. Band boundaries are
/// tuning values carried in [`SceneConfig`], not fixed contracts.
pub struct Choreographer {
    hero_band: PhaseBand,
    drone_band: PhaseBand,
}

impl Choreographer {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            hero_band: config.hero_band,
            drone_band: config.drone_band,
        }
    }

    pub fn hero_state(&self, phase: f32) -> ObjectState {
        ObjectState::from_presence(self.hero_band.presence(phase))
    }

    pub fn drone_state(&self, phase: f32) -> ObjectState {
        ObjectState::from_presence(self.drone_band.presence(phase))
    }

    /// Compute all object poses for this frame.
    pub fn pose_scene(&self, time: f32, phase: f32, pointer: Vec2) -> ScenePoses {
        let hero = self.hero_pose(time, phase, pointer);
        ScenePoses {
            circuit: circuit_pose(pointer),
            ring_inner: ring_pose(&hero, time, RING_INNER_SPIN, RING_INNER_SCALE),
            ring_outer: ring_pose(&hero, time, RING_OUTER_SPIN, RING_OUTER_SCALE),
            core: core_pose(&hero, time),
            drone: self.drone_pose(time, phase, pointer),
            particles: particles_pose(time),
            sweep: sweep_pose(time),
            hero,
        }
    }

    fn hero_pose(&self, time: f32, phase: f32, pointer: Vec2) -> ObjectPose {
        let presence = self.hero_band.presence(phase);
        let eased = ease_in_out_sine(presence);
        let parallax = Vec3::new(pointer.x, pointer.y, 0.0) * HERO_PARALLAX;
        ObjectPose {
            position: parallax + Vec3::new(0.0, -(1.0 - eased) * HERO_EXIT_DROP, 0.0),
            rotation: Vec3::new(pointer.y * HERO_TILT, time * HERO_SPIN_RATE, 0.0),
            scale: Vec3::splat(eased),
            visible: presence > 0.0,
        }
    }

    fn drone_pose(&self, time: f32, phase: f32, pointer: Vec2) -> ObjectPose {
        let presence = self.drone_band.presence(phase);
        let eased = ease_in_out_sine(presence);
        let bob = Vec3::new(
            (time * DRONE_BOB_RATE_X).cos() * DRONE_BOB_AMOUNT_X,
            (time * DRONE_BOB_RATE_Y).sin() * DRONE_BOB_AMOUNT_Y,
            0.0,
        );
        let parallax = Vec3::new(pointer.x, pointer.y, 0.0) * DRONE_PARALLAX;
        ObjectPose {
            position: DRONE_ANCHOR + bob + parallax
                - Vec3::new(0.0, (1.0 - eased) * DRONE_ENTER_DROP, 0.0),
            rotation: Vec3::new(0.0, time * DRONE_SPIN_RATE, -pointer.x * DRONE_BANK),
            scale: Vec3::splat(eased),
            visible: presence > 0.0,
        }
    }
}

fn circuit_pose(pointer: Vec2) -> ObjectPose {
    ObjectPose {
        position: Vec3::new(
            -pointer.x * CIRCUIT_PARALLAX,
            -pointer.y * CIRCUIT_PARALLAX,
            0.0,
        ),
        rotation: Vec3::new(0.0, 0.0, pointer.x * CIRCUIT_ROLL),
        ..ObjectPose::default()
    }
}

fn ring_pose(hero: &ObjectPose, time: f32, spin: f32, base_scale: f32) -> ObjectPose {
    ObjectPose {
        position: hero.position,
        rotation: Vec3::new(time * RING_ROLL_RATE, hero.rotation.y, time * spin),
        scale: hero.scale * base_scale,
        visible: hero.visible,
    }
}

fn core_pose(hero: &ObjectPose, time: f32) -> ObjectPose {
    let breath = 1.0 + (time * CORE_BREATH_RATE).sin() * CORE_BREATH_AMOUNT;
    ObjectPose {
        position: hero.position,
        rotation: hero.rotation,
        scale: hero.scale * CORE_SCALE * breath,
        visible: hero.visible,
    }
}

fn particles_pose(time: f32) -> ObjectPose {
    ObjectPose {
        position: PARTICLE_FIELD_POS,
        rotation: Vec3::new(0.0, time * PARTICLE_FIELD_SPIN, 0.0),
        scale: Vec3::splat(PARTICLE_FIELD_SCALE),
        ..ObjectPose::default()
    }
}

fn sweep_pose(time: f32) -> ObjectPose {
    ObjectPose {
        position: SWEEP_POS + Vec3::new((time * SWEEP_RATE).sin() * SWEEP_SPAN, 0.0, 0.0),
        scale: Vec3::splat(SWEEP_SCALE),
        ..ObjectPose::default()
    }
}

/// Smooth ease through `[0, 1]` with zero slope at both ends.
#[inline]
pub fn ease_in_out_sine(t: f32) -> f32 {
    0.5 - 0.5 * (t.clamp(0.0, 1.0) * PI).cos()
}
