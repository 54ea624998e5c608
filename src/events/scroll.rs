use super::InputWiring;
use crate::dom;
use crate::frame::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let Some(wnd) = web::window() else { return };
        w.signals
            .borrow_mut()
            .scroll
            .set_target(dom::scroll_offset_px(&wnd));
        if let Some(doc) = wnd.document() {
            dom::set_scroll_progress(&doc, dom::scroll_fraction(&wnd, &doc));
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_resize(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let Some(wnd) = web::window() else { return };
        dom::sync_canvas_backing_size(&w.canvas);
        let (width, height) = dom::viewport_size_px(&wnd);
        *w.viewport.borrow_mut() = Viewport { width, height };
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
