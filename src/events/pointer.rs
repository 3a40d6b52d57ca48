use crate::constants::{EV_BLUR, EV_POINTER_LEAVE, EV_POINTER_MOVE};
use crate::dom;
use crate::input;
use hero_core::Field;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

/// Feed pointer positions into the field; leaving the page or losing focus
/// means "no pointer" rather than a stale position. Handlers go quiet once the
/// field has been torn down.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, field: Weak<RefCell<Field>>) {
    let Some(window) = web::window() else {
        return;
    };

    {
        let canvas = canvas.clone();
        let field = field.clone();
        dom::add_listener(&window, EV_POINTER_MOVE, move |ev: web::PointerEvent| {
            let Some(field) = field.upgrade() else {
                return;
            };
            let pos = input::pointer_canvas_px(&ev, &canvas);
            if pos.is_finite() {
                field.borrow_mut().set_pointer(pos.x, pos.y);
            }
        });
    }

    if let Some(root) = dom::window_document().and_then(|d| d.document_element()) {
        let field = field.clone();
        dom::add_listener(&root, EV_POINTER_LEAVE, move |_: web::PointerEvent| {
            clear_pointer(&field);
        });
    }

    dom::add_listener(&window, EV_BLUR, move |_: web::Event| {
        clear_pointer(&field);
    });
}

fn clear_pointer(field: &Weak<RefCell<Field>>) {
    if let Some(field) = field.upgrade() {
        field.borrow_mut().clear_pointer();
    }
}
