use crate::core::{Animator, InstantClock, MotionState};
use crate::dom;
use crate::render::PointRenderer;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub motion: Rc<RefCell<MotionState>>,
    pub animator: Animator<InstantClock, StdRng>,
    pub gpu: PointRenderer,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let size = dom::canvas_size(&self.canvas);
        let mut motion = self.motion.borrow_mut();
        if let Err(e) = self.animator.tick(&mut motion, &mut self.gpu, size) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    animator: &Animator<InstantClock, StdRng>,
) -> Option<PointRenderer> {
    let cloud = &animator.cloud;
    match PointRenderer::new(canvas, cloud.positions(), cloud.colors()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Stops the requestAnimationFrame loop at the next tick when dropped or
/// when [`LoopHandle::stop`] is called.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    /// Leave the loop running for the lifetime of the page.
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    LoopHandle { running }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
