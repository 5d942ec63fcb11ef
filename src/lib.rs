#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{GestureEvent, GestureMode, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[init] model-viewer starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[init] {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Configuration errors are fatal and must surface before any listener exists.
    let config = dom::read_config(&canvas)?;
    log::info!("[config] {:?}", config);
    let session = Rc::new(RefCell::new(Session::new(config)?));

    wire_canvas_resize(&canvas);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
    });

    let gpu = frame::init_gpu(&canvas)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session.clone(),
        canvas.clone(),
        gpu,
    )));
    frame::start_loop(frame_ctx.clone());

    let url = dom::model_url(&canvas);
    let started = Instant::now();
    match load_model(&url).await {
        Ok(mesh) => {
            log::info!(
                "[load] {} decoded in {:.0} ms",
                url,
                started.elapsed().as_secs_f64() * 1000.0
            );
            frame_ctx.borrow_mut().gpu.upload_mesh(&mesh);
            attach(&session, &mesh);
        }
        // The session stays idle; gestures keep no-opping.
        Err(e) => log::error!("[load] {}: {:?}", url, e),
    }
    Ok(())
}

async fn load_model(url: &str) -> anyhow::Result<loader::MeshData> {
    let bytes = loader::fetch_bytes(url).await?;
    loader::decode_glb(&bytes)
}

fn attach(session: &Rc<RefCell<Session>>, mesh: &loader::MeshData) {
    let Some(bounds) = mesh.bounds() else {
        log::error!("[load] mesh has no vertices; nothing to frame");
        return;
    };
    let mut s = session.borrow_mut();
    if let Err(e) = s.attach_asset(bounds) {
        log::error!("[frame] {}; showing the asset unframed", e);
    }
    // Scroll mode reads the page position, which may already be non-zero.
    if s.mode() == GestureMode::Scroll {
        if let Some((offset, document_height, viewport_height)) =
            web::window().as_ref().and_then(dom::scroll_metrics)
        {
            s.handle(GestureEvent::Scroll {
                offset,
                document_height,
                viewport_height,
            });
        }
    }
}
