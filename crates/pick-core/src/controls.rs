//! Damped orbit controls.
//!
//! Pointer drags and wheel notches accumulate a spherical delta which
//! `update` feeds into the camera a fraction at a time, so the view keeps
//! gliding after the pointer stops.

use crate::camera::Camera;
use crate::constants::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLE_EPSILON,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SCALE,
};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct SphericalDelta {
    theta: f32,
    phi: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    /// Gates pointer/wheel input. When false the host auto-rotates the camera.
    pub enabled: bool,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    delta: SphericalDelta,
    dolly_scale: f32,
    drag_from: Option<Vec2>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            target: Vec3::ZERO,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            delta: SphericalDelta::default(),
            dolly_scale: 1.0,
            drag_from: None,
        }
    }
}

impl OrbitControls {
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn pointer_down(&mut self, px: Vec2) {
        if self.enabled {
            self.drag_from = Some(px);
        }
    }

    /// Rotate by the pointer travel since the last call; `viewport_height` in the same pixel units.
    pub fn pointer_move(&mut self, px: Vec2, viewport_height: f32) {
        if !self.enabled {
            return;
        }
        let Some(from) = self.drag_from else {
            return;
        };
        let travel = px - from;
        let h = viewport_height.max(1.0);
        self.rotate_left(TAU * travel.x / h * self.rotate_speed);
        self.rotate_up(TAU * travel.y / h * self.rotate_speed);
        self.drag_from = Some(px);
    }

    pub fn pointer_up(&mut self) {
        self.drag_from = None;
    }

    /// Negative `delta_y` (wheel away from the user) moves the camera closer.
    pub fn wheel(&mut self, delta_y: f32) {
        if !self.enabled {
            return;
        }
        if delta_y < 0.0 {
            self.dolly_scale *= ORBIT_ZOOM_SCALE;
        } else if delta_y > 0.0 {
            self.dolly_scale /= ORBIT_ZOOM_SCALE;
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    /// Apply pending rotation/dolly to `camera`. Returns true if the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.eye - self.target;
        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, 0.0)
        };

        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        theta += self.delta.theta * step;
        phi += self.delta.phi * step;
        phi = phi.clamp(ORBIT_POLE_EPSILON, PI - ORBIT_POLE_EPSILON);
        radius = (radius * self.dolly_scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        let eye = self.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );

        if self.enable_damping {
            self.delta.theta *= 1.0 - self.damping_factor;
            self.delta.phi *= 1.0 - self.damping_factor;
        } else {
            self.delta = SphericalDelta::default();
        }
        self.dolly_scale = 1.0;

        let moved = eye.distance_squared(camera.eye) > 1e-12;
        camera.eye = eye;
        camera.look_at(self.target);
        moved
    }
}
