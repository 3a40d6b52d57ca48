// Shared visual and motion tuning constants used by both web and native frontends.

// Population
pub const PX_PER_PARTICLE: f32 = 10.0; // one particle per this many px of surface width
pub const MAX_PARTICLES: usize = 80; // keeps the O(n²) link scan cheap per frame
pub const MIN_PARTICLES: usize = 1;

// Motion
pub const MAX_SPEED: f32 = 0.25; // px/frame per axis, drawn once at spawn

// Particle look
pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_MAX: f32 = 3.0;
pub const OPACITY_MIN: f32 = 0.2;
pub const OPACITY_MAX: f32 = 0.7;

// Links
pub const LINK_DISTANCE: f32 = 150.0; // particle-particle cut-off in px
pub const POINTER_REACH: f32 = 1.5; // pointer cut-off = LINK_DISTANCE * POINTER_REACH
pub const PAIR_ALPHA: f32 = 0.3; // opacity of a pair link at distance 0
pub const POINTER_ALPHA: f32 = 0.5; // opacity of a pointer link at distance 0
pub const PAIR_LINE_WIDTH: f32 = 0.8;
pub const POINTER_LINE_WIDTH: f32 = 1.0;

// Palette: every fill and stroke is this colour at a varying alpha
pub const PARTICLE_RGB: [u8; 3] = [100, 200, 255];

// Native render thread cadence
pub const DEFAULT_FPS: f32 = 60.0; // used when the requested rate is not a positive number
pub const MIN_FPS: f32 = 1.0; // slower rates are raised to this so cancel never waits long
