#![cfg(target_arch = "wasm32")]
use crate::camera::{Lens, OrbitCamera, OrbitSettings};
use crate::core::lighting::stage_rig;
use crate::core::{
    CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_TARGET, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};
use instant::Duration;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod canvas_text;
mod constants;
mod core;
mod countdown;
mod dom;
mod events;
mod frame;
mod greeting;
mod input;
mod loader;
mod playback;
mod render;
mod scene;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn stage_camera(canvas: &web::HtmlCanvasElement) -> OrbitCamera {
    let aspect = if canvas.height() > 0 {
        canvas.width() as f32 / canvas.height() as f32
    } else {
        1.0
    };
    OrbitCamera::new(
        CAMERA_EYE,
        CAMERA_TARGET,
        Lens {
            fov_y_deg: CAMERA_FOV_Y_DEG,
            aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        },
        OrbitSettings {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
        },
    )
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gramophone-web starting");

    greeting::wire_greeting();

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

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let camera = Rc::new(RefCell::new(stage_camera(&canvas)));
    let playback = Rc::new(RefCell::new(playback::PlaybackState::default()));
    let media = dom::audio_by_id(&document, constants::AUDIO_ID);
    match &media {
        Some(m) => audio::wire_media_events(m, &playback),
        None => log::warn!("[audio] missing #{}", constants::AUDIO_ID),
    }

    // Without a GPU there is no button, so taps stay unarmed
    let mut taps = input::TapController::new(Duration::from_millis(constants::TAP_DEBOUNCE_MS));
    let mut gpu = frame::init_gpu(&canvas).await;
    if let Some(g) = gpu.as_mut() {
        taps.clickable = Some(scene::build_stage(g));
    }

    events::wire_tap_handlers(events::TapWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        taps: Rc::new(RefCell::new(taps)),
        media,
        playback: playback.clone(),
    });
    events::wire_orbit_handlers(events::OrbitWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        drag: Rc::new(RefCell::new(input::DragTracker::default())),
    });

    let pending_model: loader::PendingModel = Rc::new(RefCell::new(None));
    let pending_countdown: countdown::PendingCountdown = Rc::new(RefCell::new(None));
    loader::spawn_model_load(pending_model.clone());
    countdown::spawn(pending_countdown.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        canvas,
        camera,
        rig: stage_rig(),
        pending_model,
        pending_countdown,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
