use crate::core::{scroll_phase, Choreographer, InputSignals, PathTable, PulseField};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport size in CSS pixels, refreshed by the resize listener.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Everything the per-frame tick needs, owned in one place and driven by the
/// requestAnimationFrame loop.
pub struct FrameContext {
    pub paths: PathTable,
    pub pulses: PulseField,
    pub choreographer: Choreographer,

    pub signals: Rc<RefCell<InputSignals>>,
    pub viewport: Rc<RefCell<Viewport>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,

    pub last_instant: Instant,
    pub elapsed_sec: f32,
}

impl FrameContext {
    /// One tick: smooth inputs, derive the scroll phase, choreograph the
    /// scene, advance the pulses, hand everything to the render sink.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.elapsed_sec += dt.as_secs_f32();

        // Step the smoothers before anything reads `current`.
        let (pointer, scroll_px) = {
            let mut signals = self.signals.borrow_mut();
            signals.step_frame();
            (signals.pointer.current, signals.scroll.current)
        };
        let viewport = *self.viewport.borrow();
        let phase = scroll_phase(scroll_px, viewport.height);

        let poses = self
            .choreographer
            .pose_scene(self.elapsed_sec, phase, pointer);
        self.pulses.advance(&self.paths);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&poses, self.pulses.instances()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    paths: &PathTable,
    pulse_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, paths, pulse_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Handle to a running frame loop. `stop` prevents any further
/// requestAnimationFrame scheduling; without it the callback would live
/// forever.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    FrameLoop { running }
}
