use super::InputWiring;
use crate::core::pointer_ndc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let viewport = *w.viewport.borrow();
        let ndc = pointer_ndc(
            ev.client_x() as f32,
            ev.client_y() as f32,
            viewport.width,
            viewport.height,
        );
        w.signals.borrow_mut().pointer.set_target(ndc);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
