use crate::constants::{HIDE_CLASS, MAX_PIXEL_RATIO};
use crate::core::{CanvasRect, CanvasSize};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn hide_element(element_id: &str) {
    if let Some(el) = window_document().and_then(|d| d.get_element_by_id(element_id)) {
        _ = el.class_list().add_1(HIDE_CLASS);
    }
}

/// Layout size of the canvas and the (clamped) pixel ratio for its backing store.
pub fn canvas_size(canvas: &web::HtmlCanvasElement) -> CanvasSize {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0)
        .min(MAX_PIXEL_RATIO);
    CanvasSize {
        css_width: canvas.client_width().max(0) as u32,
        css_height: canvas.client_height().max(0) as u32,
        pixel_ratio: dpr as f32,
    }
}

#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}
