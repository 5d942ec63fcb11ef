use crate::constants::{DEFAULT_MODEL_URL, MODEL_URL_ATTR};
use viewer_core::{ViewerConfig, OVERRIDE_KEYS};
use web_sys as web;

#[inline]
fn window_document(window: &web::Window) -> Option<web::Document> {
    window.document()
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Defaults overridden by `data-<option>` attributes on the canvas.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> anyhow::Result<ViewerConfig> {
    let mut config = ViewerConfig::default();
    for key in OVERRIDE_KEYS {
        if let Some(value) = canvas.get_attribute(&format!("data-{key}")) {
            config.apply_override(key, &value)?;
        }
    }
    config.validate()?;
    Ok(config)
}

pub fn model_url(canvas: &web::HtmlCanvasElement) -> String {
    canvas
        .get_attribute(MODEL_URL_ATTR)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL_URL.to_string())
}

/// `(scroll offset, document height, viewport height)` in CSS pixels.
pub fn scroll_metrics(window: &web::Window) -> Option<(f32, f32, f32)> {
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document = window_document(window)?.document_element()?.scroll_height();
    Some((offset as f32, document as f32, viewport as f32))
}
