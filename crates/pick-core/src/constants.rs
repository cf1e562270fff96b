// Shared scene/interaction tuning constants used by the core and the web frontend.

// Scene layout
pub const OBJECT_COUNT: usize = 5;
pub const OBJECT_SPACING: f32 = 3.0; // x distance between neighbouring objects
pub const OBJECT_HEIGHT: f32 = 1.0; // y of every object centre
pub const GROUND_SIZE: f32 = 20.0;

// Object materials
pub const OBJECT_SATURATION: f32 = 0.7;
pub const OBJECT_LIGHTNESS: f32 = 0.5;
pub const OBJECT_METALNESS: f32 = 0.4;
pub const OBJECT_ROUGHNESS: f32 = 0.2;
pub const GROUND_COLOR: u32 = 0x303030;
pub const GROUND_METALNESS: f32 = 0.3;
pub const GROUND_ROUGHNESS: f32 = 0.8;
pub const BACKGROUND_COLOR: u32 = 0x1a1a1a;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: [f32; 3] = [0.0, 15.0, 25.0];
pub const AUTO_ROTATE_RADIUS: f32 = 25.0;

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SCALE: f32 = 0.95; // per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 0.0;
pub const ORBIT_MAX_DISTANCE: f32 = f32::INFINITY;
pub const ORBIT_POLE_EPSILON: f32 = 1e-6;

// Hover
pub const HOVER_EMISSIVE: u32 = 0x888888;
pub const HOVER_SCALE: f32 = 1.1;

// Selection / outline
pub const OUTLINE_DEFAULT_COLOR: u32 = 0xffaa00;
pub const OUTLINE_DEFAULT_THICKNESS: f32 = 0.1;
pub const OUTLINE_THICKNESS_MIN: f32 = 0.05;
pub const OUTLINE_THICKNESS_MAX: f32 = 0.3;
pub const SCORE_PER_CLICK: u32 = 10;

// Particle burst
pub const BURST_POINT_COUNT: usize = 100;
pub const BURST_HALF_EXTENT: f32 = 0.5; // offsets are uniform in [-0.5, 0.5] per axis
pub const BURST_POINT_SIZE: f32 = 0.1;
pub const BURST_LIFETIME_MS: u64 = 500;

// Torus sphere tracing
pub const TORUS_MARCH_STEPS: usize = 96;
pub const TORUS_MARCH_EPSILON: f32 = 1e-4;
