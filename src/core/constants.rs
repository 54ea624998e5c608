use glam::Vec3;

// Shared scene tuning constants used by the web frontend.

// Circuit lattice layout
pub const LATTICE_EXTENT: f32 = 40.0; // XY span the wire anchors are scattered over
pub const LATTICE_DEPTH_MIN: f32 = -15.0;
pub const LATTICE_DEPTH_MAX: f32 = -5.0;
pub const WIRE_LENGTH_MIN: f32 = 5.0;
pub const WIRE_LENGTH_MAX: f32 = 15.0;

// Pulse travel
pub const PULSE_SPEED_MIN: f32 = 0.005; // fraction of path per tick
pub const PULSE_SPEED_MAX: f32 = 0.015;
pub const PULSE_PEAK_SCALE: f32 = 1.5; // instance scale at path midpoint

// Input smoothing factors, per-frame lerp toward target
pub const POINTER_SMOOTHING: f32 = 0.05;
pub const SCROLL_SMOOTHING: f32 = 0.1;

// Scroll phase bands (phase = scroll offset / viewport height)
pub const HERO_BAND_END: f32 = 1.5;
pub const HERO_EASE_OUT: f32 = 0.5;
pub const DRONE_BAND_START: f32 = 2.5;
pub const DRONE_BAND_END: f32 = 5.0;
pub const DRONE_EASE_IN: f32 = 0.5;
pub const DRONE_EASE_OUT: f32 = 0.5;

// Hero group motion
pub const HERO_SPIN_RATE: f32 = 0.15; // radians per second about Y
pub const HERO_TILT: f32 = 0.12; // pointer-driven pitch
pub const HERO_PARALLAX: f32 = 0.4; // pointer-driven offset
pub const HERO_EXIT_DROP: f32 = 5.0; // world units the group slides down while leaving

// Hero children
pub const RING_INNER_SCALE: f32 = 2.2;
pub const RING_OUTER_SCALE: f32 = 3.1;
pub const RING_INNER_SPIN: f32 = 0.4;
pub const RING_OUTER_SPIN: f32 = -0.25;
pub const RING_ROLL_RATE: f32 = 0.1;
pub const CORE_SCALE: f32 = 1.4;
pub const CORE_BREATH_RATE: f32 = 2.0;
pub const CORE_BREATH_AMOUNT: f32 = 0.05;

// Drone motion
pub const DRONE_ANCHOR: Vec3 = Vec3::new(2.0, 0.2, 1.0);
pub const DRONE_ENTER_DROP: f32 = 4.0; // how far below the anchor it starts
pub const DRONE_BOB_RATE_Y: f32 = 1.3;
pub const DRONE_BOB_AMOUNT_Y: f32 = 0.25;
pub const DRONE_BOB_RATE_X: f32 = 0.9;
pub const DRONE_BOB_AMOUNT_X: f32 = 0.15;
pub const DRONE_BANK: f32 = 0.3; // pointer-driven roll
pub const DRONE_SPIN_RATE: f32 = 0.5;
pub const DRONE_PARALLAX: f32 = 0.15;

// Always-on ambient objects
pub const PARTICLE_FIELD_SPIN: f32 = 0.02;
pub const PARTICLE_FIELD_POS: Vec3 = Vec3::new(0.0, 0.0, -8.0);
pub const PARTICLE_FIELD_SCALE: f32 = 12.0;
pub const SWEEP_RATE: f32 = 0.3;
pub const SWEEP_SPAN: f32 = 8.0;
pub const SWEEP_POS: Vec3 = Vec3::new(0.0, 4.0, -2.0);
pub const SWEEP_SCALE: f32 = 3.0;

// Circuit group parallax
pub const CIRCUIT_ROLL: f32 = 0.02; // roll per unit of pointer x
pub const CIRCUIT_PARALLAX: f32 = 0.5; // counter-offset per unit of pointer
