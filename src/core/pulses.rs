use super::config::SceneConfig;
use super::paths::PathTable;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::PI;

/// A light point bound to one wire, advancing along it and respawning on a
/// fresh wire when it reaches the end. Mutated only by [`PulseField`].
#[derive(Clone, Copy, Debug)]
pub struct Pulse {
    pub path_index: usize,
    pub progress: f32,
    pub speed: f32,
}

/// World position and visual scale for one pulse, ready for instanced
/// rendering. Scale is zero at both wire ends and peaks at the midpoint.
#[derive(Clone, Copy, Debug)]
pub struct PulseInstance {
    pub position: Vec3,
    pub scale: f32,
}

/// Fixed-cardinality pulse simulation. `advance` touches every pulse exactly
/// once and rewrites the instance buffer in place; nothing is allocated after
/// construction, so it is safe to run every frame indefinitely.
pub struct PulseField {
    pulses: Vec<Pulse>,
    instances: Vec<PulseInstance>,
    rng: StdRng,
    speed_min: f32,
    speed_max: f32,
    peak_scale: f32,
}

impl PulseField {
    pub fn new(config: &SceneConfig, paths: &PathTable, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        // An empty lattice degrades to no pulses rather than faulting.
        let count = if paths.is_empty() {
            0
        } else {
            config.pulse_count
        };
        let pulses = (0..count)
            .map(|_| Pulse {
                path_index: rng.gen_range(0..paths.len()),
                progress: rng.gen::<f32>(),
                speed: rng.gen_range(config.speed_min..=config.speed_max),
            })
            .collect::<Vec<_>>();
        let instances = vec![
            PulseInstance {
                position: Vec3::ZERO,
                scale: 0.0,
            };
            pulses.len()
        ];
        Self {
            pulses,
            instances,
            rng,
            speed_min: config.speed_min,
            speed_max: config.speed_max,
            peak_scale: config.pulse_peak_scale,
        }
    }

    /// Advance every pulse one tick. Speed is a fraction of the wire per tick
    /// (tick-rate-coupled on purpose; the motion is purely cosmetic). A pulse
    /// that runs off the end respawns at the start of a freshly drawn wire, so
    /// it never visibly teleports mid-travel.
    pub fn advance(&mut self, paths: &PathTable) {
        if paths.is_empty() {
            return;
        }
        for (pulse, instance) in self.pulses.iter_mut().zip(self.instances.iter_mut()) {
            pulse.progress += pulse.speed;
            if pulse.progress >= 1.0 {
                pulse.progress = 0.0;
                pulse.path_index = self.rng.gen_range(0..paths.len());
                pulse.speed = self.rng.gen_range(self.speed_min..=self.speed_max);
            }
            let segment = &paths.segments()[pulse.path_index];
            instance.position = segment.start.lerp(segment.end, pulse.progress);
            instance.scale = (pulse.progress * PI).sin() * self.peak_scale;
        }
    }

    /// Dense instance transforms, one per pulse, in pulse order.
    #[inline]
    pub fn instances(&self) -> &[PulseInstance] {
        &self.instances
    }

    /// Read-only view of the underlying pulse records.
    #[inline]
    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    /// Visual scale along a wire at the given progress, exposed for tests and
    /// for sizing glow in the render sink.
    #[inline]
    pub fn scale_at(progress: f32, peak_scale: f32) -> f32 {
        (progress * PI).sin() * peak_scale
    }
}
