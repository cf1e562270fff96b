#![cfg(target_arch = "wasm32")]
use pick_core::{PickController, Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod panel;
mod render;

pub(crate) type Controller = PickController<Scene, overlay::ScoreOverlay>;
pub(crate) type SharedController = Rc<RefCell<Controller>>;

fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    controller: SharedController,
) {
    let canvas_resize = canvas.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        controller.borrow_mut().on_resize(w, h);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pick-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let query = window.location().search().unwrap_or_default();
    let config = SceneConfig::from_query(&query);
    log::info!(
        "[config] seed={:?} policy={:?} outline={} thickness={:.2}",
        config.seed,
        config.policy,
        config.outline.color.to_css_hex(),
        config.outline.thickness
    );

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let score = overlay::ScoreOverlay::attach(&document)?;
    let mut controller: Controller = PickController::demo(score, &config);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    controller.on_resize(w, h);

    // Nothing is wired or drawn unless the GPU comes up.
    let gpu = match frame::init_gpu(&canvas, controller.engine()).await {
        Ok(gpu) => gpu,
        Err(e) => {
            log::error!("[gpu] {}", e);
            overlay::show_diagnostic(&document, &e.to_string());
            return Err(e.into());
        }
    };

    let controller: SharedController = Rc::new(RefCell::new(controller));
    wire_canvas_resize(&window, &canvas, controller.clone());
    events::wire_input_handlers(events::pointer::InputWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        controller: controller.clone(),
    });
    events::wire_global_keydown(&window, controller.clone());
    panel::wire_outline_panel(&document, controller.clone(), config.outline);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { controller, gpu }));
    frame::start_loop(frame_ctx);
    Ok(())
}
