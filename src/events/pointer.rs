use crate::core::{InputSample, MotionState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer fallback: always live, normalized against the canvas box.
pub fn wire_pointermove(canvas: web::HtmlCanvasElement, motion: Rc<RefCell<MotionState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = dom::canvas_rect(&canvas);
        if let Some(sample) = InputSample::pointer(ev.client_x() as f32, ev.client_y() as f32, rect)
        {
            motion.borrow_mut().push(sample);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
