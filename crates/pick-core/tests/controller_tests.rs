// Host-side tests for the hover/selection controller against the demo scene.

use glam::{Vec2, Vec3};
use instant::Instant;
use pick_core::constants::{self, BURST_POINT_COUNT, HOVER_EMISSIVE};
use pick_core::geometry::TORUS_RADIUS;
use pick_core::*;
use std::time::Duration;

#[derive(Default)]
struct RecordingSink {
    scores: Vec<u32>,
}

impl DisplaySink for RecordingSink {
    fn set_score(&mut self, score: u32) {
        self.scores.push(score);
    }
}

type Controller = PickController<Scene, RecordingSink>;

fn make(policy: OverridePolicy) -> Controller {
    let config = SceneConfig {
        seed: Some(7),
        policy,
        ..SceneConfig::default()
    };
    let mut c = PickController::demo(RecordingSink::default(), &config);
    c.on_resize(800, 600);
    c
}

/// NDC of a point on the object as seen from the current camera. The torus
/// is aimed at its ring rather than its hole.
fn aim(c: &Controller, index: usize) -> Vec2 {
    let o = &c.engine().objects()[index];
    let pos = match o.shape {
        Shape::Torus => o.position + Vec3::X * TORUS_RADIUS,
        _ => o.position,
    };
    let p = c.engine().camera().view_projection().project_point3(pos);
    Vec2::new(p.x, p.y)
}

// Above the horizon: hits nothing.
const SKY: Vec2 = Vec2::new(0.0, 0.98);

fn obj(c: &Controller, index: usize) -> &PickableObject {
    &c.engine().objects()[index]
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-5
}

#[test]
fn demo_scene_lays_out_five_objects_in_a_row() {
    let c = make(OverridePolicy::Compounding);
    let xs: Vec<Vec3> = c.engine().objects().iter().map(|o| o.position).collect();
    assert_eq!(xs.len(), constants::OBJECT_COUNT);
    assert_eq!(
        xs,
        vec![
            Vec3::new(-6.0, 1.0, 0.0),
            Vec3::new(-3.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(6.0, 1.0, 0.0),
        ]
    );
    for o in c.engine().objects() {
        assert_eq!(o.scale, Vec3::ONE);
        assert_eq!(o.emissive, Rgb::BLACK);
        assert!(!c.engine().material(o.material).unwrap().is_outline());
    }
}

#[test]
fn aiming_at_each_object_hits_it_first() {
    let c = make(OverridePolicy::Compounding);
    for i in 0..5 {
        let ray = c.engine().camera().ray_from_ndc(aim(&c, i));
        let hits = c.engine().intersect(&ray);
        assert_eq!(hits.first().map(|h| h.object), Some(ObjectId(i)));
    }
}

#[test]
fn hover_applies_highlight_and_leaving_restores_exactly() {
    let mut c = make(OverridePolicy::Compounding);
    assert_eq!(c.update_hover(aim(&c, 1)), Some(ObjectId(1)));
    assert_eq!(obj(&c, 1).emissive, Rgb::from_hex(HOVER_EMISSIVE));
    assert!(approx_vec(obj(&c, 1).scale, Vec3::splat(1.1)));

    assert_eq!(c.update_hover(SKY), None);
    assert_eq!(c.hovered(), None);
    assert_eq!(obj(&c, 1).emissive, Rgb::BLACK);
    assert_eq!(obj(&c, 1).scale, Vec3::ONE);
}

#[test]
fn moving_between_objects_keeps_a_single_hover() {
    let mut c = make(OverridePolicy::Compounding);
    c.update_hover(aim(&c, 0));
    let next = aim(&c, 4);
    c.update_hover(next);
    assert_eq!(c.hovered(), Some(ObjectId(4)));
    assert_eq!(obj(&c, 0).scale, Vec3::ONE);
    assert_eq!(obj(&c, 0).emissive, Rgb::BLACK);
    let highlighted = c
        .engine()
        .objects()
        .iter()
        .filter(|o| o.emissive == Rgb::from_hex(HOVER_EMISSIVE))
        .count();
    assert_eq!(highlighted, 1);
}

#[test]
fn hovering_the_same_object_again_does_not_grow_it() {
    let mut c = make(OverridePolicy::Compounding);
    let p = aim(&c, 2);
    c.update_hover(p);
    c.update_hover(p);
    c.update_hover(p);
    assert!(approx_vec(obj(&c, 2).scale, Vec3::splat(1.1)));
}

#[test]
fn empty_hover_without_prior_hover_is_a_no_op() {
    let mut c = make(OverridePolicy::Compounding);
    assert_eq!(c.update_hover(SKY), None);
    for o in c.engine().objects() {
        assert_eq!(o.scale, Vec3::ONE);
    }
}

#[test]
fn click_selects_outlines_and_scores() {
    let mut c = make(OverridePolicy::Compounding);
    let outline = c.engine().outline_material();
    let out = c.handle_click(aim(&c, 2), Instant::now()).unwrap();
    assert_eq!(out.object, ObjectId(2));
    assert_eq!(out.score, 10);
    assert_eq!(c.score(), 10);
    assert_eq!(c.display().scores, vec![10]);
    assert_eq!(obj(&c, 2).material, outline);
    assert!(approx_vec(obj(&c, 2).scale, Vec3::splat(1.1)));
}

#[test]
fn selecting_another_object_restores_the_first() {
    let mut c = make(OverridePolicy::Compounding);
    let original_a = obj(&c, 0).material;
    let now = Instant::now();
    c.handle_click(aim(&c, 0), now);
    c.handle_click(aim(&c, 3), now);

    assert_eq!(c.selected().map(|s| s.object), Some(ObjectId(3)));
    assert_eq!(obj(&c, 0).material, original_a);
    assert_eq!(obj(&c, 0).scale, Vec3::ONE);
    assert_eq!(obj(&c, 3).material, c.engine().outline_material());
    assert!(approx_vec(obj(&c, 3).scale, Vec3::splat(1.1)));
    let outlined = c
        .engine()
        .objects()
        .iter()
        .filter(|o| o.material == c.engine().outline_material())
        .count();
    assert_eq!(outlined, 1);
}

#[test]
fn reclicking_scores_again_and_keeps_true_original_material() {
    let mut c = make(OverridePolicy::Compounding);
    let original = obj(&c, 1).material;
    let now = Instant::now();
    c.handle_click(aim(&c, 1), now);
    c.handle_click(aim(&c, 1), now);
    assert_eq!(c.score(), 20);
    assert_eq!(c.display().scores, vec![10, 20]);
    // reset then re-applied, not compounded
    assert!(approx_vec(obj(&c, 1).scale, Vec3::splat(1.1)));
    assert_eq!(obj(&c, 1).originals.material, original);

    c.handle_click(aim(&c, 4), now);
    assert_eq!(obj(&c, 1).material, original);
}

#[test]
fn empty_click_changes_nothing() {
    let mut c = make(OverridePolicy::Compounding);
    let now = Instant::now();
    c.update_hover(aim(&c, 2));
    c.handle_click(aim(&c, 2), now);
    let before: Vec<(Vec3, MaterialId)> = c
        .engine()
        .objects()
        .iter()
        .map(|o| (o.scale, o.material))
        .collect();

    assert!(c.handle_click(SKY, now).is_none());
    assert_eq!(c.score(), 10);
    assert_eq!(c.hovered(), Some(ObjectId(2)));
    assert_eq!(c.selected().map(|s| s.object), Some(ObjectId(2)));
    assert_eq!(c.pending_removals(), 1);
    let after: Vec<(Vec3, MaterialId)> = c
        .engine()
        .objects()
        .iter()
        .map(|o| (o.scale, o.material))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn hover_then_select_compounds_scale() {
    let mut c = make(OverridePolicy::Compounding);
    let p = aim(&c, 2);
    c.update_hover(p);
    c.handle_click(p, Instant::now());
    let expected = 1.1 * (1.0 + c.outline().thickness);
    assert!(approx_vec(obj(&c, 2).scale, Vec3::splat(expected)));
    assert_eq!(c.hovered(), c.selected().map(|s| s.object));

    // leaving hover falls back to the creation-time scale, outline stays
    c.update_hover(SKY);
    assert_eq!(obj(&c, 2).scale, Vec3::ONE);
    assert_eq!(obj(&c, 2).material, c.engine().outline_material());
}

#[test]
fn burst_has_one_hundred_points_around_the_object_and_expires() {
    let mut c = make(OverridePolicy::Compounding);
    let t0 = Instant::now();
    let out = c.handle_click(aim(&c, 3), t0).unwrap();
    let centre = obj(&c, 3).position;
    {
        let (_, cloud) = c
            .engine()
            .point_clouds()
            .find(|(id, _)| *id == out.burst)
            .unwrap();
        assert_eq!(cloud.points.len(), BURST_POINT_COUNT);
        for p in &cloud.points {
            assert!((*p - centre).abs().max_element() <= 0.5);
        }
        assert_eq!(cloud.color, c.outline().color);
    }

    c.frame(t0 + Duration::from_millis(499), 0.0);
    assert!(c.engine().contains_node(out.burst));
    c.frame(t0 + Duration::from_millis(500), 0.0);
    assert!(!c.engine().contains_node(out.burst));
    assert_eq!(c.pending_removals(), 0);
}

#[test]
fn removal_of_an_already_missing_burst_is_harmless() {
    let mut c = make(OverridePolicy::Compounding);
    let t0 = Instant::now();
    let out = c.handle_click(aim(&c, 0), t0).unwrap();
    assert!(c.engine_mut().remove_node(out.burst));
    c.frame(t0 + Duration::from_secs(1), 0.0);
    assert_eq!(c.pending_removals(), 0);
    assert!(!c.engine().contains_node(out.burst));
}

#[test]
fn outline_colour_applies_to_current_selection_immediately() {
    let mut c = make(OverridePolicy::Compounding);
    c.handle_click(aim(&c, 1), Instant::now());
    c.set_outline_color(Rgb::from_hex(0x00ff00));
    let m = c.engine().material(obj(&c, 1).material).unwrap();
    assert_eq!(m.color(), Rgb::from_hex(0x00ff00));
    assert_eq!(c.outline().color, Rgb::from_hex(0x00ff00));

    assert!(c.set_outline_color_css("#0000ff").is_ok());
    assert!(c.set_outline_color_css("blue").is_err());
    let m = c.engine().material(obj(&c, 1).material).unwrap();
    assert_eq!(m.color(), Rgb::from_hex(0x0000ff));
}

#[test]
fn thickness_applies_to_future_selections_only() {
    let mut c = make(OverridePolicy::Compounding);
    let now = Instant::now();
    c.handle_click(aim(&c, 0), now);
    assert_eq!(c.set_outline_thickness(0.3), 0.3);
    assert!(approx_vec(obj(&c, 0).scale, Vec3::splat(1.1)));
    c.handle_click(aim(&c, 4), now);
    assert!(approx_vec(obj(&c, 4).scale, Vec3::splat(1.3)));

    assert_eq!(c.set_outline_thickness(5.0), 0.3);
    assert_eq!(c.set_outline_thickness(0.0), 0.05);
}

#[test]
fn resize_updates_aspect_and_viewport() {
    let mut c = make(OverridePolicy::Compounding);
    c.on_resize(1920, 1080);
    assert_eq!(c.engine().viewport(), (1920, 1080));
    assert!((c.engine().camera().aspect - 1920.0 / 1080.0).abs() < 1e-6);

    c.on_resize(0, 500);
    assert_eq!(c.engine().viewport(), (1920, 1080));
}

#[test]
fn recomputed_policy_rebuilds_visuals_from_originals() {
    let mut c = make(OverridePolicy::Recomputed);
    let original = obj(&c, 2).material;
    let outline = c.engine().outline_material();
    let p = aim(&c, 2);
    let now = Instant::now();

    c.update_hover(p);
    c.handle_click(p, now);
    assert!(approx_vec(obj(&c, 2).scale, Vec3::splat(1.1 * 1.1)));

    // leaving hover keeps the selection override
    c.update_hover(SKY);
    assert!(approx_vec(obj(&c, 2).scale, Vec3::splat(1.1)));
    assert_eq!(obj(&c, 2).material, outline);
    assert_eq!(obj(&c, 2).emissive, Rgb::BLACK);

    // re-clicking never caches the outline as the original
    c.handle_click(p, now);
    c.handle_click(p, now);
    c.handle_click(aim(&c, 0), now);
    assert_eq!(obj(&c, 2).material, original);
    assert_eq!(obj(&c, 2).scale, Vec3::ONE);
    assert_eq!(c.score(), 40);
}

#[test]
fn auto_rotation_runs_only_while_controls_are_disabled() {
    let mut c = make(OverridePolicy::Compounding);
    let start = c.engine().camera().eye;
    c.frame(Instant::now(), 1.0);
    assert!((c.engine().camera().eye - start).abs().max_element() < 1e-3);

    c.controls_mut().enabled = false;
    c.frame(Instant::now(), std::f64::consts::FRAC_PI_2);
    let eye = c.engine().camera().eye;
    assert!((eye - Vec3::new(25.0, 15.0, 0.0)).abs().max_element() < 1e-3);
    assert_eq!(c.engine().camera().target, Vec3::ZERO);

    // stateless: the same time always gives the same eye
    c.frame(Instant::now(), std::f64::consts::FRAC_PI_2);
    assert!((c.engine().camera().eye - eye).abs().max_element() < 1e-3);
}

#[test]
fn end_to_end_click_on_the_middle_object() {
    let mut c = make(OverridePolicy::Compounding);
    let t0 = Instant::now();
    let out = c.handle_click(aim(&c, 2), t0).unwrap();

    assert_eq!(c.score(), 10);
    assert_eq!(out.object, ObjectId(2));
    let thickness = c.outline().thickness;
    assert!(approx_vec(obj(&c, 2).scale, Vec3::splat(1.0 + thickness)));

    let (_, cloud) = c.engine().point_clouds().next().unwrap();
    let mean = cloud.points.iter().copied().sum::<Vec3>() / cloud.points.len() as f32;
    assert!((mean - Vec3::new(0.0, 1.0, 0.0)).length() < 0.25);

    c.frame(t0 + Duration::from_millis(500), 0.0);
    assert_eq!(c.engine().point_clouds().count(), 0);
}

#[test]
fn controller_accepts_any_prepared_engine() {
    let config = SceneConfig::from_query("seed=3&policy=recomputed");
    let mut rng = make_rng(config.seed);
    let mut scene = Scene::demo(&mut rng, Rgb::WHITE);
    scene.set_viewport(640, 480);
    let mut c = PickController::new(scene, RecordingSink::default(), &config);
    assert_eq!(c.policy(), OverridePolicy::Recomputed);
    // the configured outline colour wins over the scene's
    let outline = c.engine().outline_material();
    assert_eq!(
        c.engine().material(outline).unwrap().color(),
        OutlineSettings::default().color
    );

    c.handle_click(aim(&c, 1), Instant::now());
    c.display_mut().scores.clear();
    c.handle_click(aim(&c, 1), Instant::now());
    assert_eq!(c.display().scores, vec![20]);
}

/// Demo scene whose ray casts also report an object it does not hold.
struct StaleHits(Scene);

impl SceneEngine for StaleHits {
    fn intersect(&self, ray: &Ray) -> Hits {
        let mut hits = self.0.intersect(ray);
        if !hits.is_empty() {
            hits.insert(
                0,
                Hit {
                    object: ObjectId(99),
                    distance: 0.0,
                },
            );
        }
        hits
    }
    fn object(&self, id: ObjectId) -> Option<&PickableObject> {
        self.0.object(id)
    }
    fn object_mut(&mut self, id: ObjectId) -> Option<&mut PickableObject> {
        self.0.object_mut(id)
    }
    fn outline_material(&self) -> MaterialId {
        self.0.outline_material()
    }
    fn material(&self, id: MaterialId) -> Option<&Material> {
        self.0.material(id)
    }
    fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.0.material_mut(id)
    }
    fn add_points(&mut self, cloud: PointCloud) -> NodeId {
        self.0.add_points(cloud)
    }
    fn remove_node(&mut self, id: NodeId) -> bool {
        self.0.remove_node(id)
    }
    fn camera(&self) -> &Camera {
        self.0.camera()
    }
    fn camera_mut(&mut self) -> &mut Camera {
        self.0.camera_mut()
    }
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.0.set_viewport(width, height)
    }
    fn viewport(&self) -> (u32, u32) {
        self.0.viewport()
    }
}

#[test]
fn click_on_an_unresolvable_object_changes_nothing() {
    let config = SceneConfig {
        seed: Some(7),
        ..SceneConfig::default()
    };
    let mut rng = make_rng(config.seed);
    let mut scene = Scene::demo(&mut rng, Rgb::WHITE);
    scene.set_viewport(800, 600);
    let target = scene.objects()[2].position;
    let p = scene.camera().view_projection().project_point3(target);
    let mut c = PickController::new(StaleHits(scene), RecordingSink::default(), &config);

    assert!(c.handle_click(Vec2::new(p.x, p.y), Instant::now()).is_none());
    assert_eq!(c.score(), 0);
    assert!(c.selected().is_none());
    assert!(c.display().scores.is_empty());
    assert_eq!(c.pending_removals(), 0);
    assert_eq!(c.engine().0.point_clouds().count(), 0);
}
