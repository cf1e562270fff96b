//! Scene model, raycast picking and the hover/selection controller.
//!
//! Nothing here touches web APIs; the web frontend drives `PickController`
//! from its event listeners and renders whatever `Scene` holds.

pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod controller;
pub mod controls;
pub mod deferred;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod intersect;
pub mod particles;
pub mod scene;

pub use camera::*;
pub use color::Rgb;
pub use config::*;
pub use controller::*;
pub use controls::OrbitControls;
pub use deferred::DeferredRemovals;
pub use engine::*;
pub use error::PickError;
pub use geometry::{MeshData, Shape, Vertex};
pub use input::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../../shaders/scene.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../../shaders/points.wgsl");
