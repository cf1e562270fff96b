use crate::dom;
use crate::SharedController;
use glam::Vec2;
use instant::Instant;
use pick_core::pointer_ndc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub controller: SharedController,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_click(&w);
    wire_wheel(&w);
}

fn ndc_for(window: &web::Window, ev: &web::MouseEvent) -> Vec2 {
    let (width, height) = dom::window_inner_size(window);
    pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, width, height)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.window.clone();
    dom::listen(&target, "pointermove", move |ev: web::PointerEvent| {
        let ndc = ndc_for(&w.window, &ev);
        let px = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let (_, height) = dom::window_inner_size(&w.window);
        let mut ctrl = w.controller.borrow_mut();
        ctrl.controls_mut().pointer_move(px, height);
        ctrl.update_hover(ndc);
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let px = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w.controller.borrow_mut().controls_mut().pointer_down(px);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let target = w.window.clone();
    dom::listen(&target, "pointerup", move |_: web::PointerEvent| {
        w.controller.borrow_mut().controls_mut().pointer_up();
    });
}

// Clicks are raycast independently of the hover state.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let target = w.window.clone();
    dom::listen(&target, "click", move |ev: web::MouseEvent| {
        let ndc = ndc_for(&w.window, &ev);
        let outcome = w.controller.borrow_mut().handle_click(ndc, Instant::now());
        if let Some(outcome) = outcome {
            log::info!(
                "[burst] node {:?} at {:?}",
                outcome.burst,
                outcome.object
            );
        }
    });
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "wheel", move |ev: web::WheelEvent| {
        w.controller
            .borrow_mut()
            .controls_mut()
            .wheel(ev.delta_y() as f32);
        ev.prevent_default();
    });
}
