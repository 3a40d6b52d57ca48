use crate::field::FieldParams;
use crate::reflect::reflect_point;
use crate::surface::Size;
use glam::Vec2;
use rand::Rng;

/// A single drifting point.
///
/// `radius` and `opacity` are fixed for the particle's lifetime; `velocity`
/// only ever changes sign, one axis at a time, when the particle bounces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    /// Random particle somewhere on a `size` surface.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, size: Size, params: &FieldParams) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * size.width.max(0.0),
            rng.gen::<f32>() * size.height.max(0.0),
        );
        // uniform in [-max_speed, max_speed) per axis
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * params.max_speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * params.max_speed,
        );
        let radius = lerp(params.radius_range, rng.gen::<f32>());
        let opacity = lerp(params.opacity_range, rng.gen::<f32>());
        Self::new(position, velocity, radius, opacity)
    }

    /// Move one frame, then bounce off whichever edges the new position crossed.
    #[inline]
    pub fn advance(&mut self, bounds: Size) {
        self.position += self.velocity;
        self.velocity = reflect_point(self.position, self.velocity, bounds);
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

#[inline]
fn lerp([lo, hi]: [f32; 2], t: f32) -> f32 {
    lo + (hi - lo) * t
}
