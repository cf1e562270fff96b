/// DOM hooks and renderer tuning for the web front-end.
///
/// Element ids must match `index.html`.
pub const CANVAS_ID: &str = "app-canvas";
pub const SCORE_ID: &str = "score";
pub const PANEL_ID: &str = "outline-panel";
pub const OUTLINE_COLOR_INPUT_ID: &str = "outline-color";
pub const OUTLINE_THICKNESS_INPUT_ID: &str = "outline-thickness";
pub const OUTLINE_THICKNESS_LABEL_ID: &str = "outline-thickness-value";

// Score overlay styling
pub const SCORE_STYLE: &str =
    "position:absolute;top:10px;left:10px;color:white;font-size:24px;font-family:Arial;user-select:none;pointer-events:none;";
pub const DIAGNOSTIC_STYLE: &str =
    "position:absolute;top:10px;left:10px;color:#ff8080;font-size:16px;font-family:Arial;max-width:60ch;";

// Slider step for the thickness input
pub const OUTLINE_THICKNESS_STEP: f32 = 0.01;

// Per-object uniform slots are bound with dynamic offsets; WebGPU requires
// 256-byte alignment for those.
pub const OBJECT_UNIFORM_STRIDE: u64 = 256;

// Initial capacity of the point instance buffer (grows on demand)
pub const POINT_INSTANCE_CAPACITY: usize = 1024;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
