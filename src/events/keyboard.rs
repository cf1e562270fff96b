use crate::dom;
use crate::panel;
use crate::SharedController;
use pick_core::{key_action, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, controller: &SharedController) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    // typing into the panel inputs must not toggle anything
    if let Some(target) = ev.target() {
        if target.dyn_ref::<web::HtmlInputElement>().is_some() {
            return;
        }
    }
    match key_action(&ev.key()) {
        Some(KeyAction::ToggleAutoRotate) => {
            let mut ctrl = controller.borrow_mut();
            let controls = ctrl.controls_mut();
            controls.enabled = !controls.enabled;
            if !controls.enabled {
                controls.pointer_up();
            }
            log::info!(
                "[keys] orbit controls {}",
                if controls.enabled { "on" } else { "off (auto-rotate)" }
            );
        }
        Some(KeyAction::TogglePanel) => {
            if let Some(document) = dom::window_document() {
                panel::toggle(&document);
                log::info!("[keys] panel hidden={}", panel::is_hidden(&document));
            }
        }
        None => {}
    }
}

pub fn wire_global_keydown(window: &web::Window, controller: SharedController) {
    dom::listen(window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &controller);
    });
}
