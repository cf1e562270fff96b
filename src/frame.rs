use crate::render;
use crate::SharedController;
use instant::Instant;
use pick_core::{PickError, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: SharedController,
    pub gpu: render::GpuState,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // auto-rotation follows the wall clock, not frame time
        let clock_secs = js_sys::Date::now() * 0.001;

        let mut ctrl = self.controller.borrow_mut();
        ctrl.frame(now, clock_secs);
        if let Err(e) = self.gpu.render(ctrl.engine()) {
            log::error!("[gpu] render error: {:?}", e);
        }
    }
}

/// GPU failures surface as `PickError::EngineUnavailable`.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Result<render::GpuState, PickError> {
    render::GpuState::new(canvas, scene)
        .await
        .map_err(|e| PickError::EngineUnavailable(format!("{:#}", e)))
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
