use glam::Vec2;

/// Exponentially smoothed 1D signal. Event handlers write `target`; the frame
/// driver steps `current` toward it once per frame. The filter is contractive
/// and never overshoots.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedScalar {
    pub current: f32,
    pub target: f32,
    alpha: f32,
}

impl SmoothedScalar {
    pub fn new(initial: f32, alpha: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            alpha,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[inline]
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.alpha;
    }
}

/// Exponentially smoothed 2D signal, used for the pointer.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedVec2 {
    pub current: Vec2,
    pub target: Vec2,
    alpha: f32,
}

impl SmoothedVec2 {
    pub fn new(initial: Vec2, alpha: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            alpha,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    #[inline]
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.alpha;
    }
}

/// The two smoothed input signals the choreography consumes, stepped together
/// once per frame before anything reads `current`.
pub struct InputSignals {
    pub pointer: SmoothedVec2,
    pub scroll: SmoothedScalar,
}

impl InputSignals {
    pub fn new(pointer_alpha: f32, scroll_alpha: f32) -> Self {
        Self {
            pointer: SmoothedVec2::new(Vec2::ZERO, pointer_alpha),
            scroll: SmoothedScalar::new(0.0, scroll_alpha),
        }
    }

    #[inline]
    pub fn step_frame(&mut self) {
        self.pointer.step();
        self.scroll.step();
    }
}

/// Normalize pointer pixel coordinates to `[-1, 1]` with +Y up. A degenerate
/// viewport maps to the origin.
#[inline]
pub fn pointer_ndc(x_px: f32, y_px: f32, width_px: f32, height_px: f32) -> Vec2 {
    if width_px <= 0.0 || height_px <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (x_px / width_px) * 2.0 - 1.0,
        -(y_px / height_px) * 2.0 + 1.0,
    )
}

/// Scroll offset expressed in viewport heights. The page section logic keys
/// off this value. A zero-height viewport maps to phase 0.
#[inline]
pub fn scroll_phase(scroll_px: f32, viewport_height_px: f32) -> f32 {
    if viewport_height_px <= 0.0 {
        return 0.0;
    }
    scroll_px / viewport_height_px
}
