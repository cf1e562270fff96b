//! Hover/selection state machine driven by pointer raycasts.
//!
//! At most one object is hovered and at most one is selected; the two slots
//! are independent and may name the same object. Hover and click each cast
//! their own ray, so a click can land on a different object than the one
//! currently hovered.

use crate::camera::auto_rotate_eye;
use crate::color::Rgb;
use crate::config::{OutlineSettings, OverridePolicy, SceneConfig};
use crate::constants::{BURST_LIFETIME_MS, HOVER_EMISSIVE, HOVER_SCALE, SCORE_PER_CLICK};
use crate::controls::OrbitControls;
use crate::deferred::DeferredRemovals;
use crate::engine::{DisplaySink, NodeId, ObjectId, SceneEngine};
use crate::error::PickError;
use crate::particles::burst_cloud;
use crate::scene::Scene;
use glam::{Vec2, Vec3};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub object: ObjectId,
    /// Outline thickness in effect when the object was selected.
    pub thickness: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOutcome {
    pub object: ObjectId,
    pub score: u32,
    pub burst: NodeId,
}

pub struct PickController<E, D> {
    engine: E,
    display: D,
    controls: OrbitControls,
    outline: OutlineSettings,
    policy: OverridePolicy,
    hovered: Option<ObjectId>,
    selected: Option<Selection>,
    score: u32,
    removals: DeferredRemovals,
    rng: StdRng,
}

/// Seeded generator when the config names a seed, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl<D: DisplaySink> PickController<Scene, D> {
    /// The five-object demo scene wired to `display`.
    pub fn demo(display: D, config: &SceneConfig) -> Self {
        let mut rng = make_rng(config.seed);
        let scene = Scene::demo(&mut rng, config.outline.color);
        Self::with_rng(scene, display, config, rng)
    }
}

impl<E: SceneEngine, D: DisplaySink> PickController<E, D> {
    pub fn new(engine: E, display: D, config: &SceneConfig) -> Self {
        Self::with_rng(engine, display, config, make_rng(config.seed))
    }

    pub fn with_rng(mut engine: E, display: D, config: &SceneConfig, rng: StdRng) -> Self {
        let outline_id = engine.outline_material();
        if let Some(m) = engine.material_mut(outline_id) {
            m.set_color(config.outline.color);
        }
        Self {
            engine,
            display,
            controls: OrbitControls::default(),
            outline: config.outline,
            policy: config.policy,
            hovered: None,
            selected: None,
            score: 0,
            removals: DeferredRemovals::default(),
            rng,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    pub fn selected(&self) -> Option<Selection> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outline(&self) -> OutlineSettings {
        self.outline
    }

    pub fn policy(&self) -> OverridePolicy {
        self.policy
    }

    pub fn pending_removals(&self) -> usize {
        self.removals.len()
    }

    /// Re-raycast under the pointer and move the hover override if the
    /// nearest object changed. Returns the hovered object afterwards.
    pub fn update_hover(&mut self, pointer_ndc: Vec2) -> Option<ObjectId> {
        let hit = self.pick(pointer_ndc);
        if hit == self.hovered {
            return hit;
        }
        let previous = std::mem::replace(&mut self.hovered, hit);
        match self.policy {
            OverridePolicy::Compounding => {
                // restore before caching the next object's emissive
                if let Some(prev) = previous {
                    self.leave_hover(prev);
                }
                if let Some(next) = hit {
                    self.enter_hover(next);
                }
            }
            OverridePolicy::Recomputed => {
                if let Some(prev) = previous {
                    self.refresh(prev);
                }
                if let Some(next) = hit {
                    self.refresh(next);
                }
            }
        }
        log::debug!("[hover] {:?} -> {:?}", previous, hit);
        hit
    }

    /// Select the nearest object under the pointer, score it and spawn a
    /// particle burst whose removal is due at `now + 500ms`. A click that
    /// hits nothing, or hits an object the engine no longer resolves,
    /// changes nothing and returns `None`.
    pub fn handle_click(&mut self, pointer_ndc: Vec2, now: Instant) -> Option<ClickOutcome> {
        let object = self.pick(pointer_ndc)?;
        let center = self.engine.object(object)?.position;
        let selection = Selection {
            object,
            thickness: self.outline.thickness,
        };
        let previous = self.selected.replace(selection);
        match self.policy {
            OverridePolicy::Compounding => {
                // runs for the same object too: reset, then re-apply
                if let Some(prev) = previous {
                    self.clear_selection(prev.object);
                }
                self.apply_selection(selection);
            }
            OverridePolicy::Recomputed => {
                if let Some(prev) = previous {
                    self.refresh(prev.object);
                }
                self.refresh(object);
            }
        }

        self.score += SCORE_PER_CLICK;
        self.display.set_score(self.score);

        let cloud = burst_cloud(center, self.outline.color, &mut self.rng);
        let burst = self.engine.add_points(cloud);
        self.removals
            .schedule(now + Duration::from_millis(BURST_LIFETIME_MS), burst);

        log::info!("[click] selected {:?}, score {}", object, self.score);
        Some(ClickOutcome {
            object,
            score: self.score,
            burst,
        })
    }

    /// Pass a new output size through to the camera and surface.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("[resize] ignoring empty viewport {}x{}", width, height);
            return;
        }
        self.engine.set_viewport(width, height);
        log::info!("[resize] {}x{}", width, height);
    }

    /// Per-frame housekeeping: expire bursts, auto-rotate while the orbit
    /// controls are disabled, then let the controls settle the camera.
    pub fn frame(&mut self, now: Instant, clock_secs: f64) {
        _ = self.removals.run_due(now, &mut self.engine);
        if !self.controls.enabled {
            let camera = self.engine.camera_mut();
            camera.eye = auto_rotate_eye(clock_secs, camera.eye.y);
            camera.look_at(Vec3::ZERO);
        }
        _ = self.controls.update(self.engine.camera_mut());
    }

    /// Recolour the shared outline material; visible on the current selection at once.
    pub fn set_outline_color(&mut self, color: Rgb) {
        self.outline.color = color;
        let id = self.engine.outline_material();
        if let Some(material) = self.engine.material_mut(id) {
            material.set_color(color);
        }
    }

    pub fn set_outline_color_css(&mut self, text: &str) -> Result<(), PickError> {
        let color = Rgb::from_css_hex(text)?;
        self.set_outline_color(color);
        Ok(())
    }

    /// Takes effect on the next selection. Returns the clamped value.
    pub fn set_outline_thickness(&mut self, thickness: f32) -> f32 {
        self.outline.thickness = OutlineSettings::clamp_thickness(thickness);
        self.outline.thickness
    }

    fn pick(&self, pointer_ndc: Vec2) -> Option<ObjectId> {
        let ray = self.engine.camera().ray_from_ndc(pointer_ndc);
        self.engine.intersect(&ray).first().map(|h| h.object)
    }

    fn enter_hover(&mut self, id: ObjectId) {
        if let Some(o) = self.engine.object_mut(id) {
            o.originals.emissive = o.emissive;
            o.emissive = Rgb::from_hex(HOVER_EMISSIVE);
            o.scale *= HOVER_SCALE;
        }
    }

    fn leave_hover(&mut self, id: ObjectId) {
        if let Some(o) = self.engine.object_mut(id) {
            o.emissive = o.originals.emissive;
            o.scale = o.originals.scale;
        }
    }

    fn apply_selection(&mut self, selection: Selection) {
        let outline = self.engine.outline_material();
        if let Some(o) = self.engine.object_mut(selection.object) {
            o.originals.material = o.material;
            o.material = outline;
            o.scale *= 1.0 + selection.thickness;
        }
    }

    fn clear_selection(&mut self, id: ObjectId) {
        if let Some(o) = self.engine.object_mut(id) {
            o.material = o.originals.material;
            o.scale = o.originals.scale;
        }
    }

    /// Rebuild an object's visuals from its originals and current slots.
    fn refresh(&mut self, id: ObjectId) {
        let hovered = self.hovered == Some(id);
        let selected = self.selected.filter(|s| s.object == id);
        let outline = self.engine.outline_material();
        let Some(o) = self.engine.object_mut(id) else {
            return;
        };
        let mut scale = o.originals.scale;
        if hovered {
            scale *= HOVER_SCALE;
        }
        if let Some(s) = selected {
            scale *= 1.0 + s.thickness;
        }
        o.scale = scale;
        o.material = if selected.is_some() {
            outline
        } else {
            o.originals.material
        };
        o.emissive = if hovered {
            Rgb::from_hex(HOVER_EMISSIVE)
        } else {
            o.originals.emissive
        };
    }
}
