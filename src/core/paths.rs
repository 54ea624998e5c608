use super::config::SceneConfig;
use glam::Vec3;
use rand::prelude::*;

/// Orientation of a wire segment. Every wire is purely one or the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One immutable axis-aligned wire for pulses to travel along.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    pub length: f32,
    pub axis: Axis,
}

/// Decorative lattice of wire segments, generated once at startup. Segments
/// are unrelated to each other; no connectivity is implied.
pub struct PathTable {
    segments: Vec<Segment>,
}

impl PathTable {
    pub fn generate(config: &SceneConfig, rng: &mut StdRng) -> Self {
        let half = config.lattice_extent * 0.5;
        let segments = (0..config.segment_count)
            .map(|_| {
                let start = Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(config.depth_min..=config.depth_max),
                );
                let length = rng.gen_range(config.length_min..=config.length_max);
                let axis = if rng.gen_bool(0.5) {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                };
                let end = match axis {
                    Axis::Horizontal => start + Vec3::new(length, 0.0, 0.0),
                    Axis::Vertical => start + Vec3::new(0.0, length, 0.0),
                };
                Segment {
                    start,
                    end,
                    length,
                    axis,
                }
            })
            .collect();
        Self { segments }
    }

    /// An empty table, over which the pulse simulator degrades to no pulses.
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
