/// Rendering and interaction tuning constants for the web frontend.
///
/// These keep magic numbers out of the wiring code; scene-motion tuning lives
/// in `core::constants`.

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Background clear color (deep blue-black, matches the page)
pub const CLEAR_COLOR: [f64; 4] = [0.043, 0.059, 0.078, 1.0];

// Wire traces: dark grey, mostly transparent
pub const WIRE_COLOR: [f32; 4] = [0.188, 0.208, 0.251, 0.2];

// Accent blue shared by pulses and the hero core
pub const ACCENT_COLOR: [f32; 4] = [0.227, 0.525, 1.0, 1.0];

// Sprite tints for the remaining scene objects
pub const RING_COLOR: [f32; 4] = [0.35, 0.45, 0.65, 0.55];
pub const DRONE_COLOR: [f32; 4] = [0.85, 0.9, 1.0, 0.9];
pub const PARTICLE_COLOR: [f32; 4] = [0.227, 0.525, 1.0, 0.08];
pub const SWEEP_COLOR: [f32; 4] = [0.227, 0.525, 1.0, 0.15];

// Base edge length of one pulse sprite before the travel scale is applied
pub const PULSE_SPRITE_SIZE: f32 = 0.15;

// RNG seed for the lattice and pulse bindings; structure is random but the
// layout is reproducible across reloads
pub const SCENE_SEED: u64 = 42;

// Capacity of the sprite instance buffer (objects, not pulses)
pub const SPRITE_CAPACITY: usize = 8;
