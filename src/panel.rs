use crate::constants::{
    OUTLINE_COLOR_INPUT_ID, OUTLINE_THICKNESS_INPUT_ID, OUTLINE_THICKNESS_LABEL_ID,
    OUTLINE_THICKNESS_STEP, PANEL_ID,
};
use crate::dom;
use crate::SharedController;
use pick_core::constants::{OUTLINE_THICKNESS_MAX, OUTLINE_THICKNESS_MIN};
use pick_core::OutlineSettings;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .map(|el| {
            el.class_list().contains("hidden")
                || el
                    .get_attribute("style")
                    .map(|s| s.contains("display:none"))
                    .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

fn show_thickness(document: &web::Document, thickness: f32) {
    if let Some(el) = document.get_element_by_id(OUTLINE_THICKNESS_LABEL_ID) {
        el.set_text_content(Some(&format!("{:.2}", thickness)));
    }
}

/// Seed the inputs from `initial` and bind them to the controller.
pub fn wire_outline_panel(
    document: &web::Document,
    controller: SharedController,
    initial: OutlineSettings,
) {
    match dom::input_by_id(document, OUTLINE_COLOR_INPUT_ID) {
        Some(input) => {
            input.set_value(&initial.color.to_css_hex());
            let ctrl = controller.clone();
            let source = input.clone();
            dom::listen(&input, "input", move |_: web::Event| {
                let value = source.value();
                match ctrl.borrow_mut().set_outline_color_css(&value) {
                    Ok(()) => log::info!("[panel] outline color {}", value),
                    Err(e) => log::warn!("[panel] {}", e),
                }
            });
        }
        None => log::warn!("[panel] missing #{}", OUTLINE_COLOR_INPUT_ID),
    }

    match dom::input_by_id(document, OUTLINE_THICKNESS_INPUT_ID) {
        Some(input) => {
            input.set_min(&OUTLINE_THICKNESS_MIN.to_string());
            input.set_max(&OUTLINE_THICKNESS_MAX.to_string());
            input.set_step(&OUTLINE_THICKNESS_STEP.to_string());
            input.set_value(&initial.thickness.to_string());
            show_thickness(document, initial.thickness);
            let ctrl = controller;
            let source = input.clone();
            let doc = document.clone();
            dom::listen(&input, "input", move |_: web::Event| {
                let Ok(value) = source.value().parse::<f32>() else {
                    return;
                };
                let applied = ctrl.borrow_mut().set_outline_thickness(value);
                show_thickness(&doc, applied);
                log::info!("[panel] outline thickness {:.2}", applied);
            });
        }
        None => log::warn!("[panel] missing #{}", OUTLINE_THICKNESS_INPUT_ID),
    }
}
