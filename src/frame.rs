use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::meter::FrameMeter;
use crate::render::CanvasSurface;
use hero_core::{Field, FrameHandle, FrameLoop, Start};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct RafState {
    frame_loop: FrameLoop,
    // id of the pending requestAnimationFrame, if any
    request_id: Option<i32>,
    // taken out while it runs so a cancel from inside it never drops it mid-call
    callback: Option<Box<dyn FnMut()>>,
    tick: Option<Closure<dyn FnMut()>>,
}

/// `requestAnimationFrame` loop with an explicit, idempotent cancel.
pub struct RafScheduler {
    state: Rc<RefCell<RafState>>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(RafState {
                frame_loop: FrameLoop::new(),
                request_id: None,
                callback: None,
                tick: None,
            })),
        }
    }

    /// Begin calling `callback` once per display frame. If a loop is already
    /// live its handle is returned and `callback` is dropped unused.
    pub fn start(&self, callback: impl FnMut() + 'static) -> FrameHandle {
        let mut s = self.state.borrow_mut();
        let handle = match s.frame_loop.begin() {
            Start::Started(h) => h,
            Start::AlreadyRunning(h) => {
                log::warn!("[frame] loop {} already running; ignoring start", h.id());
                return h;
            }
        };
        if s.tick.is_none() {
            s.tick = Some(make_tick(Rc::downgrade(&self.state)));
        }
        s.callback = Some(Box::new(callback));
        request_frame(&mut s);
        log::info!("[frame] loop {} started", handle.id());
        handle
    }

    pub fn cancel(&self, handle: FrameHandle) {
        let mut s = self.state.borrow_mut();
        if !s.frame_loop.cancel(handle) {
            return;
        }
        s.callback = None;
        if let (Some(id), Some(w)) = (s.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop {} cancelled", handle.id());
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        let active = self.state.borrow().frame_loop.active();
        if let Some(h) = active {
            self.cancel(h);
        }
    }
}

fn make_tick(state: Weak<RefCell<RafState>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        let (handle, callback) = {
            let mut s = state.borrow_mut();
            s.request_id = None;
            (s.frame_loop.active(), s.callback.take())
        };
        let (Some(handle), Some(mut callback)) = (handle, callback) else {
            return;
        };
        callback();
        let mut s = state.borrow_mut();
        // a cancel (or cancel + restart) inside the callback wins
        if s.frame_loop.is_live(handle) && s.callback.is_none() {
            s.callback = Some(callback);
            request_frame(&mut s);
        }
    }) as Box<dyn FnMut()>)
}

fn request_frame(s: &mut RafState) {
    let Some(w) = web::window() else {
        log::error!("[frame] no window; cannot request animation frame");
        return;
    };
    let Some(tick) = s.tick.as_ref() else {
        return;
    };
    match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(id) => s.request_id = Some(id),
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}

/// Drive `field` onto `surface` every display frame.
pub fn start_loop(
    scheduler: &RafScheduler,
    field: Rc<RefCell<Field>>,
    surface: Rc<RefCell<CanvasSurface>>,
) -> FrameHandle {
    let mut meter = FrameMeter::new(FPS_LOG_INTERVAL_SEC);
    scheduler.start(move || {
        let stats = field.borrow_mut().step(&mut *surface.borrow_mut());
        if let Some(fps) = meter.tick() {
            log::debug!(
                "[frame] {:.1} fps particles={} pairs={} pointer={}",
                fps,
                stats.particles,
                stats.pair_links,
                stats.pointer_links
            );
        }
    })
}
