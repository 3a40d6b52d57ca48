use crate::constants::*;
use crate::error::FieldError;
use crate::linker::{links, LinkKind};
use crate::particle::Particle;
use crate::surface::{Rgba, Size, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub px_per_particle: f32,
    pub max_particles: usize,
    pub max_speed: f32,
    pub radius_range: [f32; 2],
    pub opacity_range: [f32; 2],
    pub link_distance: f32,
    pub pointer_reach: f32,
    pub pair_alpha: f32,
    pub pointer_alpha: f32,
    pub pair_line_width: f32,
    pub pointer_line_width: f32,
    pub rgb: [u8; 3],
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            px_per_particle: PX_PER_PARTICLE,
            max_particles: MAX_PARTICLES,
            max_speed: MAX_SPEED,
            radius_range: [RADIUS_MIN, RADIUS_MAX],
            opacity_range: [OPACITY_MIN, OPACITY_MAX],
            link_distance: LINK_DISTANCE,
            pointer_reach: POINTER_REACH,
            pair_alpha: PAIR_ALPHA,
            pointer_alpha: POINTER_ALPHA,
            pair_line_width: PAIR_LINE_WIDTH,
            pointer_line_width: POINTER_LINE_WIDTH,
            rgb: PARTICLE_RGB,
        }
    }
}

impl FieldParams {
    /// Cut-off distance for particle-to-pointer links.
    #[inline]
    pub fn pointer_distance(&self) -> f32 {
        self.link_distance * self.pointer_reach
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(FieldError::InvalidParams(format!("{name} must be > 0, got {v}")))
            }
        };
        positive("px_per_particle", self.px_per_particle)?;
        positive("link_distance", self.link_distance)?;
        positive("pointer_reach", self.pointer_reach)?;
        if self.max_particles < MIN_PARTICLES {
            return Err(FieldError::InvalidParams("max_particles must be at least 1".into()));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(FieldError::InvalidParams(format!(
                "max_speed must be >= 0, got {}",
                self.max_speed
            )));
        }
        for (name, [lo, hi]) in [
            ("radius_range", self.radius_range),
            ("opacity_range", self.opacity_range),
        ] {
            if !(lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi) {
                return Err(FieldError::InvalidParams(format!(
                    "{name} must satisfy 0 <= lo <= hi, got [{lo}, {hi}]"
                )));
            }
        }
        Ok(())
    }
}

/// How many particles a surface of `width` px gets: one per `px_per_particle`,
/// capped at `max_particles`, never fewer than one.
pub fn particle_count(width: f32, params: &FieldParams) -> usize {
    let raw = width / params.px_per_particle;
    let n = if raw.is_finite() && raw > 0.0 {
        raw.floor() as usize
    } else {
        0
    };
    n.clamp(MIN_PARTICLES, params.max_particles.max(MIN_PARTICLES))
}

/// What one call to [`Field::step`] drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub pair_links: usize,
    pub pointer_links: usize,
}

/// Owner of the particle population, the pointer and the current surface size.
///
/// Event handlers never own any of this state; they hold a shared reference
/// to the `Field` and call [`Field::set_pointer`] or [`Field::resize`].
#[derive(Clone, Debug)]
pub struct Field {
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    size: Size,
    params: FieldParams,
}

impl Field {
    pub fn new<R: Rng + ?Sized>(
        size: Size,
        params: FieldParams,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        params.validate()?;
        let count = particle_count(size.width, &params);
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut *rng, size, &params))
            .collect();
        log::info!(
            "[field] spawned {} particles on {}x{}",
            count,
            size.width,
            size.height
        );
        Ok(Self {
            particles,
            pointer: None,
            size,
            params,
        })
    }

    /// Field with a caller-chosen population instead of a random one.
    pub fn with_particles(
        particles: Vec<Particle>,
        size: Size,
        params: FieldParams,
    ) -> Result<Self, FieldError> {
        params.validate()?;
        if particles.is_empty() {
            return Err(FieldError::EmptyPopulation);
        }
        Ok(Self {
            particles,
            pointer: None,
            size,
            params,
        })
    }

    /// Advance every particle one frame and draw the result.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        self.advance();
        self.draw(surface)
    }

    /// Move every particle once. All of them bounce against the same `size`.
    pub fn advance(&mut self) {
        let bounds = self.size;
        for p in &mut self.particles {
            p.advance(bounds);
        }
    }

    /// Draw the current state without moving anything: clear, particle
    /// circles, then links.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> FrameStats {
        let rgb = self.params.rgb;
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius(), Rgba::new(rgb, p.opacity()));
        }

        let mut stats = FrameStats {
            particles: self.particles.len(),
            ..Default::default()
        };
        for link in links(&self.particles, self.pointer, &self.params) {
            let width = match link.kind {
                LinkKind::Pair => {
                    stats.pair_links += 1;
                    self.params.pair_line_width
                }
                LinkKind::Pointer => {
                    stats.pointer_links += 1;
                    self.params.pointer_line_width
                }
            };
            surface.stroke_line(link.from, link.to, width, Rgba::new(rgb, link.opacity));
        }
        stats
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Track a new surface size. Existing particles keep their positions, even
    /// ones a shrink has left outside the surface.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}
