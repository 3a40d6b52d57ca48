#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, LOG_LEVEL};
use hero_core::{Field, FieldParams, FrameHandle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod meter;
mod render;

/// Sole owner of the field and surface. Event handlers only hold weak
/// references, so taking the `App` out of `APP` releases everything.
struct App {
    field: Rc<RefCell<Field>>,
    surface: Rc<RefCell<render::CanvasSurface>>,
    scheduler: frame::RafScheduler,
    // None while paused
    handle: Option<FrameHandle>,
}

impl App {
    fn pause(&mut self) {
        if let Some(h) = self.handle.take() {
            self.scheduler.cancel(h);
        }
    }

    fn resume(&mut self) {
        if self.handle.is_some() {
            return;
        }
        // the viewport may have changed while the page was cached
        let size = dom::sync_canvas_to_viewport(self.surface.borrow().canvas());
        self.field.borrow_mut().resize(size.width, size.height);
        self.handle = Some(frame::start_loop(
            &self.scheduler,
            self.field.clone(),
            self.surface.clone(),
        ));
    }
}

thread_local! {
    // the one live animation; `stop` takes it out
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|a| {
        if let Some(app) = a.borrow_mut().as_mut() {
            f(app);
        }
    });
}

/// Stop scheduling frames but keep the field, e.g. while the page sits in the
/// back/forward cache.
pub(crate) fn pause() {
    with_app(|app| {
        app.pause();
        log::info!("hero-web paused");
    });
}

pub(crate) fn resume() {
    with_app(|app| {
        app.resume();
        log::info!("hero-web resumed");
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("hero-web starting");

    if APP.with(|a| a.borrow().is_some()) {
        log::warn!("hero-web already running; ignoring start");
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&e.to_string()));
    }
    Ok(())
}

/// Teardown hook for the host page: cancels the frame loop and drops the
/// field. Safe to call more than once.
#[wasm_bindgen]
pub fn stop() {
    let Some(mut app) = APP.with(|a| a.borrow_mut().take()) else {
        log::debug!("stop: nothing running");
        return;
    };
    app.pause();
    let released = app.field.borrow().particles().len();
    drop(app);
    log::info!("hero-web stopped ({} particles released)", released);
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    // Size the canvas before the field so the population matches the viewport
    let size = dom::sync_canvas_to_viewport(&canvas);
    let surface = Rc::new(RefCell::new(render::CanvasSurface::new(canvas.clone())?));

    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(Field::new(
        size,
        FieldParams::default(),
        &mut rng,
    )?));

    events::wire_pointer(&canvas, Rc::downgrade(&field));
    events::wire_resize(&canvas, Rc::downgrade(&field), Rc::downgrade(&surface));
    events::wire_page_lifecycle();

    let mut app = App {
        field,
        surface,
        scheduler: frame::RafScheduler::new(),
        handle: None,
    };
    app.handle = Some(frame::start_loop(
        &app.scheduler,
        app.field.clone(),
        app.surface.clone(),
    ));
    APP.with(|a| *a.borrow_mut() = Some(app));
    Ok(())
}
