use crate::core::InputSignals;
use crate::frame::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;
mod scroll;

/// Shared handles the event listeners close over. Listeners only ever write
/// the `target` side of the smoothed signals (or refresh the viewport); the
/// `current` side belongs to the frame tick.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub signals: Rc<RefCell<InputSignals>>,
    pub viewport: Rc<RefCell<Viewport>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_pointermove(&w);
    scroll::wire_scroll(&w);
    scroll::wire_resize(&w);
}
