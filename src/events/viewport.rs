use crate::constants::{EV_PAGE_HIDE, EV_PAGE_SHOW, EV_RESIZE};
use crate::dom;
use crate::lifecycle::{page_action, PageAction, PageTransition};
use crate::render::CanvasSurface;
use hero_core::Field;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

/// Keep the canvas matched to the viewport. Every resize event is handled
/// immediately; existing particles stay where they are. Does nothing once the
/// field has been torn down.
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    field: Weak<RefCell<Field>>,
    surface: Weak<RefCell<CanvasSurface>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    dom::add_listener(&window, EV_RESIZE, move |_: web::Event| {
        let (Some(field), Some(surface)) = (field.upgrade(), surface.upgrade()) else {
            return;
        };
        let size = dom::sync_canvas_to_viewport(&canvas);
        let mut f = field.borrow_mut();
        f.resize(size.width, size.height);
        f.draw(&mut *surface.borrow_mut());
        log::info!("[resize] {}x{}", size.width, size.height);
    });
}

/// Pause while the page sits in the back/forward cache, resume when it comes
/// back, tear down when it is unloaded for good.
pub fn wire_page_lifecycle() {
    let Some(window) = web::window() else {
        return;
    };
    for (event, transition) in [
        (EV_PAGE_HIDE, PageTransition::Hide),
        (EV_PAGE_SHOW, PageTransition::Show),
    ] {
        dom::add_listener(&window, event, move |ev: web::PageTransitionEvent| {
            match page_action(transition, ev.persisted()) {
                PageAction::Pause => crate::pause(),
                PageAction::Resume => crate::resume(),
                PageAction::Teardown => crate::stop(),
                PageAction::Nothing => {}
            }
        });
    }
}
