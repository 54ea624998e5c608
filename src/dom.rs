use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(2.0);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Current vertical scroll offset in CSS pixels.
#[inline]
pub fn scroll_offset_px(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Viewport size in CSS pixels. Zero when the window reports nothing useful;
/// callers treat that as "no viewport" rather than dividing by it.
pub fn viewport_size_px(window: &web::Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    (width, height)
}

/// Update the page scroll progress bar, if the host page has one.
pub fn set_scroll_progress(document: &web::Document, fraction: f32) {
    if let Some(el) = document.get_element_by_id("scroll-progress") {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            let pct = (fraction * 100.0).clamp(0.0, 100.0);
            _ = el.style().set_property("width", &format!("{pct:.2}%"));
        }
    }
}

/// Fraction of the page scrolled, for the progress bar. Degenerate page
/// heights map to zero.
pub fn scroll_fraction(window: &web::Window, document: &web::Document) -> f32 {
    let Some(root) = document.document_element() else {
        return 0.0;
    };
    let scrollable = root.scroll_height() as f32 - root.client_height() as f32;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_offset_px(window) / scrollable).clamp(0.0, 1.0)
}
