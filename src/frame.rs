use crate::render;
use glam::Mat4;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::Session;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_INTERVAL_SEC: f32 = 5.0;

/// Everything the render loop reads. It only copies the session's last
/// committed state into the GPU; all view math happens in the handlers.
pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,

    pub last_instant: Instant,
    pub stats_elapsed: f32,
    pub stats_frames: u32,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        session: Rc<RefCell<Session>>,
        canvas: web::HtmlCanvasElement,
        gpu: render::GpuState<'a>,
    ) -> Self {
        Self {
            session,
            canvas,
            gpu,
            last_instant: Instant::now(),
            stats_elapsed: 0.0,
            stats_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        {
            let session = self.session.borrow();
            let model = session
                .asset()
                .map(|a| a.model_matrix())
                .unwrap_or(Mat4::IDENTITY);
            self.gpu.set_model(model);
            self.gpu.set_camera(*session.camera());
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        match self.gpu.render() {
            Ok(()) => {}
            // Transient while the canvas is being resized or hidden
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::warn!("[frame] surface outdated; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("[frame] render error: {:?}", e),
        }

        self.stats_elapsed += dt_sec;
        self.stats_frames += 1;
        if self.stats_elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps",
                self.stats_frames as f32 / self.stats_elapsed
            );
            self.stats_elapsed = 0.0;
            self.stats_frames = 0;
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
