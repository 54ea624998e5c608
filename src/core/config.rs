use super::constants::*;

/// Half-open phase range `[start, end)` within which a scene object is active,
/// with linear entry/exit ramps expressed as widths in phase units.
///
/// A ramp width of zero means the object is at full presence immediately on
/// that edge; an unbounded edge (`f32::NEG_INFINITY` / `f32::INFINITY`) means
/// the object never leaves on that side.
#[derive(Clone, Copy, Debug)]
pub struct PhaseBand {
    pub start: f32,
    pub end: f32,
    pub ease_in: f32,
    pub ease_out: f32,
}

impl PhaseBand {
    pub const ALWAYS: PhaseBand = PhaseBand {
        start: f32::NEG_INFINITY,
        end: f32::INFINITY,
        ease_in: 0.0,
        ease_out: 0.0,
    };

    /// Continuous presence in `[0, 1]`: 0 outside the band, ramping linearly
    /// across the ease widths, 1 in the interior. Clamped, so arbitrary phase
    /// values (negative scroll, overscroll) never extrapolate.
    pub fn presence(&self, phase: f32) -> f32 {
        if !(phase >= self.start && phase < self.end) {
            return 0.0;
        }
        let rise = if self.ease_in > 0.0 {
            ((phase - self.start) / self.ease_in).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let fall = if self.ease_out > 0.0 {
            ((self.end - phase) / self.ease_out).clamp(0.0, 1.0)
        } else {
            1.0
        };
        rise.min(fall)
    }
}

/// All startup tuning in one record, validated once before the scene is built.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub segment_count: usize,
    pub lattice_extent: f32,
    pub depth_min: f32,
    pub depth_max: f32,
    pub length_min: f32,
    pub length_max: f32,

    pub pulse_count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    pub pulse_peak_scale: f32,

    pub pointer_smoothing: f32,
    pub scroll_smoothing: f32,

    pub hero_band: PhaseBand,
    pub drone_band: PhaseBand,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            segment_count: 80,
            lattice_extent: LATTICE_EXTENT,
            depth_min: LATTICE_DEPTH_MIN,
            depth_max: LATTICE_DEPTH_MAX,
            length_min: WIRE_LENGTH_MIN,
            length_max: WIRE_LENGTH_MAX,
            pulse_count: 50,
            speed_min: PULSE_SPEED_MIN,
            speed_max: PULSE_SPEED_MAX,
            pulse_peak_scale: PULSE_PEAK_SCALE,
            pointer_smoothing: POINTER_SMOOTHING,
            scroll_smoothing: SCROLL_SMOOTHING,
            hero_band: PhaseBand {
                start: f32::NEG_INFINITY,
                end: HERO_BAND_END,
                ease_in: 0.0,
                ease_out: HERO_EASE_OUT,
            },
            drone_band: PhaseBand {
                start: DRONE_BAND_START,
                end: DRONE_BAND_END,
                ease_in: DRONE_EASE_IN,
                ease_out: DRONE_EASE_OUT,
            },
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.segment_count > 0, "segment_count must be positive");
        anyhow::ensure!(self.lattice_extent > 0.0, "lattice_extent must be positive");
        anyhow::ensure!(
            self.depth_min <= self.depth_max,
            "depth range must be ordered"
        );
        anyhow::ensure!(
            0.0 < self.length_min && self.length_min <= self.length_max,
            "wire length range must be positive and ordered"
        );
        anyhow::ensure!(
            0.0 < self.speed_min && self.speed_min <= self.speed_max,
            "pulse speed range must be positive and ordered"
        );
        anyhow::ensure!(
            self.pulse_peak_scale > 0.0,
            "pulse_peak_scale must be positive"
        );
        for (name, alpha) in [
            ("pointer_smoothing", self.pointer_smoothing),
            ("scroll_smoothing", self.scroll_smoothing),
        ] {
            anyhow::ensure!(
                alpha > 0.0 && alpha <= 1.0,
                "{name} must lie in (0, 1], got {alpha}"
            );
        }
        for (name, band) in [("hero_band", self.hero_band), ("drone_band", self.drone_band)] {
            anyhow::ensure!(band.start < band.end, "{name} must be ordered");
            anyhow::ensure!(
                band.ease_in >= 0.0 && band.ease_out >= 0.0,
                "{name} ease widths must be non-negative"
            );
        }
        Ok(())
    }
}
