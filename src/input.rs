use glam::Vec2;
use web_sys as web;

/// Map a client-space point into canvas pixel space, given the canvas's
/// on-page rect and its backing-store size. A zero-area rect falls back to a
/// plain offset so a collapsed canvas never yields NaN.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_min: Vec2,
    rect_size: Vec2,
    canvas_px: Vec2,
) -> Vec2 {
    let local = client - rect_min;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * canvas_px
    } else {
        local
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
