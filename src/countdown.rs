use crate::canvas_text;
use crate::constants::{COUNTDOWN_REFRESH_MS, FONT_FAMILY, FONT_SOURCE, TARGET_DATE};
use crate::core::countdown::{days_remaining, label};
use crate::dom;
use image::RgbaImage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Latest countdown raster, waiting for the frame loop to upload it.
pub type PendingCountdown = Rc<RefCell<Option<RgbaImage>>>;

/// Midnight local time of the target date, in epoch milliseconds.
pub fn target_ms() -> f64 {
    let (year, month, day) = TARGET_DATE;
    js_sys::Date::new_with_year_month_day(year, month as i32 - 1, day as i32).get_time()
}

async fn load_font() -> anyhow::Result<()> {
    let face = web::FontFace::new_with_str(FONT_FAMILY, FONT_SOURCE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let loaded = face.load().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(loaded)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .fonts()
        .add(&face)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Display font, fetched until one load succeeds.
#[derive(Default)]
struct FontGate {
    loaded: Cell<bool>,
}

impl FontGate {
    async fn ensure(&self) {
        if self.loaded.get() {
            return;
        }
        match load_font().await {
            Ok(()) => {
                self.loaded.set(true);
                log::info!("[countdown] font {} ready", FONT_FAMILY);
            }
            Err(e) => log::error!("[countdown] font load failed, using Arial: {:?}", e),
        }
    }
}

async fn refresh(font: &FontGate, pending: &PendingCountdown) {
    font.ensure().await;
    let days = days_remaining(target_ms(), js_sys::Date::now());
    match canvas_text::draw_countdown(&label(days), dom::pixel_ratio()) {
        Ok(img) => {
            log::debug!("[countdown] {} days", days);
            *pending.borrow_mut() = Some(img);
        }
        Err(e) => log::error!("[countdown] raster failed: {:?}", e),
    }
}

/// Draw the countdown now and again on every refresh tick.
pub fn spawn(pending: PendingCountdown) {
    let font = Rc::new(FontGate::default());

    {
        let font = font.clone();
        let pending = pending.clone();
        spawn_local(async move { refresh(&font, &pending).await });
    }

    let tick = Closure::wrap(Box::new(move || {
        let font = font.clone();
        let pending = pending.clone();
        spawn_local(async move { refresh(&font, &pending).await });
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            COUNTDOWN_REFRESH_MS,
        ) {
            log::error!("[countdown] setInterval failed: {:?}", e);
        }
    }
    tick.forget();
}
