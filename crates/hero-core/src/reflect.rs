use crate::surface::Size;
use glam::Vec2;

/// Flip `velocity` when `position` has left `[0, bound]`.
///
/// This is a one-step correction, not a clamp: the position is left where it
/// is, so a particle may sit just outside the surface for one frame before the
/// flipped velocity carries it back. A non-positive or NaN bound counts as 0.
#[inline]
pub fn reflect(position: f32, velocity: f32, bound: f32) -> f32 {
    let bound = if bound > 0.0 { bound } else { 0.0 };
    if position < 0.0 || position > bound {
        -velocity
    } else {
        velocity
    }
}

/// Apply [`reflect`] to each axis independently: x against width, y against height.
#[inline]
pub fn reflect_point(position: Vec2, velocity: Vec2, size: Size) -> Vec2 {
    Vec2::new(
        reflect(position.x, velocity.x, size.width),
        reflect(position.y, velocity.y, size.height),
    )
}
