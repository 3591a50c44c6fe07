use crate::camera::OrbitCamera;
use crate::core::lighting::Rig;
use crate::countdown::PendingCountdown;
use crate::loader::PendingModel;
use crate::render;
use crate::scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub rig: Rig,

    // Filled by async loaders, drained here
    pub pending_model: PendingModel,
    pub pending_countdown: PendingCountdown,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let Some(g) = &mut self.gpu else {
            return;
        };

        if let Some(model) = self.pending_model.borrow_mut().take() {
            scene::attach_model(g, model);
        }
        if let Some(img) = self.pending_countdown.borrow_mut().take() {
            scene::attach_countdown(g, &mut self.rig, img);
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        g.resize_if_needed(w, h);

        let mut camera = self.camera.borrow_mut();
        if h > 0 {
            camera.set_aspect(w as f32 / h as f32);
        }
        camera.update();

        match g.render(&camera, &self.rig) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
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
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
