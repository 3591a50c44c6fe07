use crate::core::countdown::{raster_size, GLOW_PASSES};
use crate::core::{
    BUTTON_CORNER_RADIUS, BUTTON_TEXTURE_SIZE, COUNTDOWN_FONT_PX, COUNTDOWN_RASTER_BASE,
    MAX_PIXEL_RATIO,
};
use crate::constants::FONT_FAMILY;
use image::RgbaImage;
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Offscreen 2D canvas of `width` x `height` backing pixels.
fn scratch_canvas(
    width: u32,
    height: u32,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((canvas, ctx))
}

fn read_back(ctx: &web::CanvasRenderingContext2d, width: u32, height: u32) -> anyhow::Result<RgbaImage> {
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_err)?
        .data();
    RgbaImage::from_raw(width, height, data.0)
        .ok_or_else(|| anyhow::anyhow!("canvas readback size mismatch"))
}

/// Rounded dark plate with "play" over "pause", for the top of the button.
pub fn draw_button_face() -> anyhow::Result<RgbaImage> {
    let (w, h) = BUTTON_TEXTURE_SIZE;
    let (_canvas, ctx) = scratch_canvas(w, h)?;
    let (wf, hf, r) = (w as f64, h as f64, BUTTON_CORNER_RADIUS);

    ctx.begin_path();
    ctx.move_to(r, 0.0);
    ctx.line_to(wf - r, 0.0);
    ctx.quadratic_curve_to(wf, 0.0, wf, r);
    ctx.line_to(wf, hf - r);
    ctx.quadratic_curve_to(wf, hf, wf - r, hf);
    ctx.line_to(r, hf);
    ctx.quadratic_curve_to(0.0, hf, 0.0, hf - r);
    ctx.line_to(0.0, r);
    ctx.quadratic_curve_to(0.0, 0.0, r, 0.0);
    ctx.close_path();
    ctx.set_fill_style_str("#1a1a1a");
    ctx.fill();

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 60px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text("play", wf / 2.0, hf / 2.0 - 30.0).map_err(js_err)?;
    ctx.fill_text("pause", wf / 2.0, hf / 2.0 + 30.0).map_err(js_err)?;

    read_back(&ctx, w, h)
}

/// Glowing `text` centred on a transparent 2:1 raster sized for the display.
pub fn draw_countdown(text: &str, device_pixel_ratio: f64) -> anyhow::Result<RgbaImage> {
    let (w, h, ratio) = raster_size(COUNTDOWN_RASTER_BASE, device_pixel_ratio, MAX_PIXEL_RATIO);
    let (_canvas, ctx) = scratch_canvas(w, h)?;
    ctx.scale(ratio, ratio).map_err(js_err)?;

    let (base_w, base_h) = COUNTDOWN_RASTER_BASE;
    let (cx, cy) = (base_w as f64 / 2.0, base_h as f64 / 2.0);
    ctx.clear_rect(0.0, 0.0, base_w as f64, base_h as f64);
    ctx.set_font(&format!("bold {}px {}, Arial", COUNTDOWN_FONT_PX, FONT_FAMILY));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_shadow_offset_x(0.0);
    ctx.set_shadow_offset_y(0.0);

    for pass in GLOW_PASSES.iter() {
        match pass.shadow {
            Some((color, blur)) => {
                ctx.set_shadow_color(&color.css());
                ctx.set_shadow_blur(blur);
            }
            None => ctx.set_shadow_blur(0.0),
        }
        ctx.set_fill_style_str(&pass.fill.css());
        ctx.fill_text(text, cx, cy).map_err(js_err)?;
    }

    read_back(&ctx, w, h)
}
