use hero_core::Size;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))
}

/// Current viewport size in CSS pixels (`innerWidth` x `innerHeight`).
pub fn viewport_size() -> Option<Size> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Size::new(width as f32, height as f32))
}

/// Resize the canvas backing store to the viewport. Setting the size also
/// clears whatever the canvas was showing.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Size {
    let size = viewport_size().unwrap_or_else(|| {
        log::warn!("[dom] viewport size unavailable; keeping canvas size");
        Size::new(canvas.width() as f32, canvas.height() as f32)
    });
    canvas.set_width(size.width.max(0.0) as u32);
    canvas.set_height(size.height.max(0.0) as u32);
    size
}

pub fn add_listener<T>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(T) + 'static,
) where
    T: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: T| handler(ev)) as Box<dyn FnMut(T)>
    );
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}
