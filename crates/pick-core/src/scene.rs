//! In-memory scene graph: the pickable objects, their materials, transient
//! point clouds, the camera and the output viewport.

use crate::camera::{Camera, Ray};
use crate::color::Rgb;
use crate::constants::{
    GROUND_COLOR, GROUND_METALNESS, GROUND_ROUGHNESS, OBJECT_HEIGHT, OBJECT_LIGHTNESS,
    OBJECT_METALNESS, OBJECT_ROUGHNESS, OBJECT_SATURATION, OBJECT_SPACING,
};
use crate::engine::{Hit, Hits, MaterialId, NodeId, ObjectId, SceneEngine};
use crate::geometry::Shape;
use crate::intersect::intersect_object;
use fnv::FnvHashMap;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Lit surface.
    Standard {
        color: Rgb,
        metalness: f32,
        roughness: f32,
    },
    /// Unlit back faces in a flat colour; shared by every selected object.
    Outline { color: Rgb },
}

impl Material {
    pub fn color(&self) -> Rgb {
        match self {
            Material::Standard { color, .. } | Material::Outline { color } => *color,
        }
    }

    pub fn set_color(&mut self, value: Rgb) {
        match self {
            Material::Standard { color, .. } | Material::Outline { color } => *color = value,
        }
    }

    pub fn is_outline(&self) -> bool {
        matches!(self, Material::Outline { .. })
    }
}

/// Values an override restores to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Originals {
    pub scale: Vec3,
    pub material: MaterialId,
    pub emissive: Rgb,
}

#[derive(Clone, Debug)]
pub struct PickableObject {
    pub id: ObjectId,
    pub shape: Shape,
    pub position: Vec3,
    pub scale: Vec3,
    pub material: MaterialId,
    pub emissive: Rgb,
    pub originals: Originals,
}

impl PickableObject {
    pub fn new(id: ObjectId, shape: Shape, position: Vec3, material: MaterialId) -> Self {
        let originals = Originals {
            scale: Vec3::ONE,
            material,
            emissive: Rgb::BLACK,
        };
        Self {
            id,
            shape,
            position,
            scale: originals.scale,
            material,
            emissive: originals.emissive,
            originals,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    pub points: Vec<Vec3>,
    pub color: Rgb,
    pub size: f32,
}

pub struct Scene {
    objects: Vec<PickableObject>,
    materials: Vec<Material>,
    outline: MaterialId,
    ground: MaterialId,
    clouds: FnvHashMap<NodeId, PointCloud>,
    next_node: u64,
    camera: Camera,
    viewport: (u32, u32),
}

impl Scene {
    pub fn empty(outline_color: Rgb) -> Self {
        let mut scene = Self {
            objects: Vec::new(),
            materials: Vec::new(),
            outline: MaterialId(0),
            ground: MaterialId(0),
            clouds: FnvHashMap::default(),
            next_node: 0,
            camera: Camera::default(),
            viewport: (1, 1),
        };
        scene.outline = scene.add_material(Material::Outline {
            color: outline_color,
        });
        scene.ground = scene.add_material(Material::Standard {
            color: Rgb::from_hex(GROUND_COLOR),
            metalness: GROUND_METALNESS,
            roughness: GROUND_ROUGHNESS,
        });
        scene
    }

    /// The five primitives in a row along X, each with its own random hue.
    pub fn demo<R: Rng>(rng: &mut R, outline_color: Rgb) -> Self {
        let mut scene = Self::empty(outline_color);
        for (i, shape) in Shape::ALL.into_iter().enumerate() {
            let x = (i as f32 - 2.0) * OBJECT_SPACING;
            let color = Rgb::from_hsl(rng.gen(), OBJECT_SATURATION, OBJECT_LIGHTNESS);
            scene.add_object(
                shape,
                Vec3::new(x, OBJECT_HEIGHT, 0.0),
                Material::Standard {
                    color,
                    metalness: OBJECT_METALNESS,
                    roughness: OBJECT_ROUGHNESS,
                },
            );
        }
        scene
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_object(&mut self, shape: Shape, position: Vec3, material: Material) -> ObjectId {
        let material = self.add_material(material);
        let id = ObjectId(self.objects.len());
        self.objects
            .push(PickableObject::new(id, shape, position, material));
        id
    }

    pub fn objects(&self) -> &[PickableObject] {
        &self.objects
    }

    pub fn ground_material(&self) -> MaterialId {
        self.ground
    }

    pub fn point_clouds(&self) -> impl Iterator<Item = (NodeId, &PointCloud)> + '_ {
        self.clouds.iter().map(|(id, cloud)| (*id, cloud))
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.clouds.contains_key(&id)
    }
}

impl SceneEngine for Scene {
    fn intersect(&self, ray: &Ray) -> Hits {
        let mut hits: Hits = self
            .objects
            .iter()
            .filter_map(|o| {
                intersect_object(ray, o.shape, o.position, o.scale).map(|distance| Hit {
                    object: o.id,
                    distance,
                })
            })
            .collect();
        // stable: equal distances keep collection order
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn object(&self, id: ObjectId) -> Option<&PickableObject> {
        self.objects.get(id.0)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut PickableObject> {
        self.objects.get_mut(id.0)
    }

    fn outline_material(&self) -> MaterialId {
        self.outline
    }

    fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id.0)
    }

    fn add_points(&mut self, cloud: PointCloud) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        _ = self.clouds.insert(id, cloud);
        id
    }

    fn remove_node(&mut self, id: NodeId) -> bool {
        self.clouds.remove(&id).is_some()
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.aspect = width as f32 / height as f32;
    }

    fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}
