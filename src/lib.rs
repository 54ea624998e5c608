#![cfg(target_arch = "wasm32")]
use crate::constants::SCENE_SEED;
use crate::core::{Choreographer, InputSignals, PathTable, PulseField, SceneConfig, SmoothedScalar};
use crate::frame::Viewport;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

thread_local! {
    static ACTIVE_LOOP: RefCell<Option<frame::FrameLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("circuit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear down the frame loop; no further ticks are scheduled after this
/// returns. Exposed so the host page can stop the background when it removes
/// the canvas.
#[wasm_bindgen]
pub fn shutdown() {
    ACTIVE_LOOP.with(|slot| {
        if let Some(active) = slot.borrow_mut().take() {
            active.stop();
            log::info!("[scene] frame loop stopped");
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let config = SceneConfig::default();
    config.validate()?;

    // Static wire lattice and the pulses that travel it. Separate RNG streams
    // so the lattice layout is independent of pulse bindings.
    let mut rng = StdRng::seed_from_u64(SCENE_SEED);
    let paths = PathTable::generate(&config, &mut rng);
    let pulses = PulseField::new(
        &config,
        &paths,
        SCENE_SEED ^ 0x9E37_79B9_7F4A_7C15,
    );
    log::info!(
        "[scene] lattice segments={} pulses={}",
        paths.len(),
        pulses.len()
    );

    let signals = Rc::new(RefCell::new(InputSignals::new(
        config.pointer_smoothing,
        config.scroll_smoothing,
    )));
    {
        // Start at the page's current offset so a mid-page reload doesn't
        // animate the whole journey from the top.
        let offset = dom::scroll_offset_px(&window);
        signals.borrow_mut().scroll = SmoothedScalar::new(offset, config.scroll_smoothing);
    }
    let (width, height) = dom::viewport_size_px(&window);
    let viewport = Rc::new(RefCell::new(Viewport { width, height }));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        signals: signals.clone(),
        viewport: viewport.clone(),
    });

    let gpu = frame::init_gpu(&canvas, &paths, pulses.len()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        choreographer: Choreographer::new(&config),
        paths,
        pulses,
        signals,
        viewport,
        canvas,
        gpu,
        last_instant: Instant::now(),
        elapsed_sec: 0.0,
    }));
    let frame_loop = frame::start_loop(frame_ctx);
    ACTIVE_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));

    Ok(())
}
