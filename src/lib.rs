#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{Animator, Camera, ClientClass, InstantClock, MotionState, Palette, PointCloud, SWARM_RADIUS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("swarm-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn build_animator() -> Animator<InstantClock, StdRng> {
    let class = ClientClass::from_user_agent(&dom::user_agent());
    let mut rng = StdRng::from_entropy();
    let cloud = PointCloud::generate(
        &mut rng,
        class.point_count(),
        SWARM_RADIUS,
        &Palette::default(),
    );
    log::info!(
        "[cloud] {:?} client: {} points, radius {:.1}",
        class,
        cloud.len(),
        cloud.radius()
    );
    let camera = Camera::looking_at_origin(CAMERA_Z, CAMERA_FOVY_DEG, CAMERA_NEAR, CAMERA_FAR);
    Animator::new(cloud, camera, InstantClock::start(), rng)
}

fn wire_motion(document: &web::Document, canvas: &web::HtmlCanvasElement) -> Rc<RefCell<MotionState>> {
    let capability = events::detect_tilt_capability();
    log::info!("[gyro] capability {:?}", capability);
    let motion = Rc::new(RefCell::new(MotionState::new(capability)));

    events::wire_pointermove(canvas.clone(), motion.clone());
    events::wire_motion_button(document, motion.clone());
    // Platforms without a permission prompt try tilt right away.
    if motion.borrow().auto_request() {
        events::enable_tilt(motion.clone());
    }
    motion
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let motion = wire_motion(&document, &canvas);

    // Size the backing store before the surface is created; later changes are
    // picked up by the per-frame resize check.
    let initial = dom::canvas_size(&canvas).viewport();
    canvas.set_width(initial.width);
    canvas.set_height(initial.height);

    let animator = build_animator();
    let Some(gpu) = frame::init_gpu(&canvas, &animator).await else {
        return Ok(());
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        motion,
        animator,
        gpu,
    }));
    // Runs for the lifetime of the page
    frame::start_loop(frame_ctx).detach();
    Ok(())
}
