use crate::constants::MOTION_BUTTON_ID;
use crate::core::{InputSample, MotionAccess, MotionError, MotionState, TiltCapability, TiltPhase};
use crate::dom;
use js_sys::{Function, Promise, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn orientation_event_ctor() -> Option<JsValue> {
    let ctor = Reflect::get(&js_sys::global(), &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    (!ctor.is_undefined() && !ctor.is_null()).then_some(ctor)
}

// Safari exposes DeviceOrientationEvent.requestPermission; other engines don't.
fn permission_request_fn(ctor: &JsValue) -> Option<Function> {
    Reflect::get(ctor, &JsValue::from_str("requestPermission"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn detect_tilt_capability() -> TiltCapability {
    match orientation_event_ctor() {
        None => TiltCapability::Unavailable,
        Some(ctor) if permission_request_fn(&ctor).is_some() => TiltCapability::PermissionGated,
        Some(_) => TiltCapability::Automatic,
    }
}

/// Issue the permission prompt. Runs synchronously inside the click handler
/// so the call still carries the user gesture; `None` means no prompt exists.
fn begin_permission_request() -> Result<Option<Promise>, MotionError> {
    let Some(ctor) = orientation_event_ctor() else {
        return Ok(None);
    };
    let Some(request) = permission_request_fn(&ctor) else {
        return Ok(None);
    };
    let promise = request
        .call0(&ctor)
        .map_err(|e| MotionError::PermissionRequest(format!("{:?}", e)))?
        .dyn_into::<Promise>()
        .map_err(|v| MotionError::PermissionRequest(format!("not a promise: {:?}", v)))?;
    Ok(Some(promise))
}

async fn await_permission(pending: Result<Option<Promise>, MotionError>) -> Result<(), MotionError> {
    let Some(promise) = pending? else {
        return Ok(());
    };
    let state = JsFuture::from(promise)
        .await
        .map_err(|e| MotionError::PermissionRequest(format!("{:?}", e)))?
        .as_string()
        .unwrap_or_default();
    if state == "granted" {
        Ok(())
    } else {
        Err(MotionError::PermissionDenied(state))
    }
}

/// Resolve orientation access. Failures are logged, never raised: the
/// pointer fallback keeps driving the swarm.
async fn resolve_motion_access(
    capability: TiltCapability,
    pending: Result<Option<Promise>, MotionError>,
) -> MotionAccess {
    if capability == TiltCapability::Unavailable {
        log::warn!("[gyro] device orientation not supported");
        return MotionAccess::Unsupported;
    }
    match await_permission(pending).await {
        Ok(()) => MotionAccess::Granted,
        Err(e) => {
            log::warn!("[gyro] not available or permission denied: {}", e);
            MotionAccess::Denied
        }
    }
}

fn wire_deviceorientation(motion: Rc<RefCell<MotionState>>) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
            let sample = InputSample::Tilt {
                beta: ev.beta().map(|b| b as f32),
                gamma: ev.gamma().map(|g| g as f32),
            };
            if motion.borrow_mut().push(sample) {
                dom::hide_element(MOTION_BUTTON_ID);
            }
        }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "deviceorientation",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}

/// Start a tilt permission request unless one is pending or tilt is already
/// live. On grant the orientation listener is attached.
pub fn enable_tilt(motion: Rc<RefCell<MotionState>>) {
    if !motion.borrow_mut().begin_tilt_request() {
        return;
    }
    let capability = motion.borrow().capability();
    let pending = begin_permission_request();
    spawn_local(async move {
        let access = resolve_motion_access(capability, pending).await;
        let phase = motion.borrow_mut().finish_tilt_request(access);
        if phase == TiltPhase::Active {
            log::info!("[gyro] tilt input active");
            wire_deviceorientation(motion);
        }
    });
}

/// The motion button doubles as the user gesture gated platforms require.
pub fn wire_motion_button(document: &web::Document, motion: Rc<RefCell<MotionState>>) {
    dom::add_click_listener(document, MOTION_BUTTON_ID, move || {
        enable_tilt(motion.clone());
    });
}
