use crate::audio;
use crate::camera::OrbitCamera;
use crate::input::{self, Ray, TapController};
use crate::playback::PlaybackState;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct TapWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub taps: Rc<RefCell<TapController>>,
    pub media: Option<web::HtmlAudioElement>,
    pub playback: Rc<RefCell<PlaybackState>>,
}

pub fn wire_tap_handlers(w: TapWiring) {
    wire_click(&w);
    wire_touchstart(&w);
    wire_touchend(&w);
}

fn non_passive() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    opts
}

fn handle_tap(w: &TapWiring, client_x: f64, client_y: f64) {
    let rect = w.canvas.get_bounding_client_rect();
    let Some(ndc) = input::client_to_ndc(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    ) else {
        return;
    };
    let Some(ray) = Ray::from_ndc(ndc, w.camera.borrow().inverse_view_proj()) else {
        return;
    };
    let fire = w.taps.borrow_mut().register_tap(&ray, Instant::now());
    if fire {
        log::info!("[tap] play button");
        audio::toggle_playback(w.media.as_ref(), &w.playback);
    }
}

fn wire_click(w: &TapWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        handle_tap(&w, ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Swallowing touchstart keeps the browser from synthesizing a second click.
fn wire_touchstart(w: &TapWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w.canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        closure.as_ref().unchecked_ref(),
        &non_passive(),
    );
    closure.forget();
}

fn wire_touchend(w: &TapWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(touch) = ev.changed_touches().get(0) {
            handle_tap(&w, touch.client_x() as f64, touch.client_y() as f64);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        closure.as_ref().unchecked_ref(),
        &non_passive(),
    );
    closure.forget();
}
