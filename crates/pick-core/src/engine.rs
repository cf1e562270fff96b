//! Capability surfaces the picking controller is written against.
//!
//! `SceneEngine` is what a scene graph has to offer for picking and visual
//! overrides; `DisplaySink` receives the score. `Scene` is the in-crate
//! engine and the web frontend supplies the DOM-backed sink.

use crate::camera::{Camera, Ray};
use crate::scene::{Material, PickableObject, PointCloud};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// Handle of a transient scene node (particle bursts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub object: ObjectId,
    pub distance: f32,
}

/// Intersections ordered nearest first.
pub type Hits = SmallVec<[Hit; 8]>;

pub trait SceneEngine {
    /// All pickable objects met by `ray`, nearest first. Equal distances
    /// keep collection order.
    fn intersect(&self, ray: &Ray) -> Hits;

    fn object(&self, id: ObjectId) -> Option<&PickableObject>;
    fn object_mut(&mut self, id: ObjectId) -> Option<&mut PickableObject>;

    /// Shared material swapped onto selected objects.
    fn outline_material(&self) -> MaterialId;
    fn material(&self, id: MaterialId) -> Option<&Material>;
    fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material>;

    fn add_points(&mut self, cloud: PointCloud) -> NodeId;
    /// Removes a transient node; false when it is already gone.
    fn remove_node(&mut self, id: NodeId) -> bool;

    fn camera(&self) -> &Camera;
    fn camera_mut(&mut self) -> &mut Camera;

    /// Output surface size in pixels; also updates the camera aspect.
    fn set_viewport(&mut self, width: u32, height: u32);
    fn viewport(&self) -> (u32, u32);
}

pub trait DisplaySink {
    fn set_score(&mut self, score: u32);
}

/// Text shown by score displays.
#[inline]
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}
