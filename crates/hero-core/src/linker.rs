//! Proximity linking between particles, and between particles and the pointer.
//!
//! Every frame the field asks for all links afresh; nothing is cached. The
//! pair scan is O(n²), which is fine because the population is capped.

use crate::field::FieldParams;
use crate::particle::Particle;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Pair,
    Pointer,
}

/// A line segment to draw, with opacity already faded by distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
    pub kind: LinkKind,
}

/// Linear fade: `alpha` at distance 0, reaching 0 at `cutoff`. `None` at or past the cut-off.
#[inline]
pub fn falloff(distance: f32, cutoff: f32, alpha: f32) -> Option<f32> {
    (distance < cutoff).then(|| (1.0 - distance / cutoff) * alpha)
}

/// All links for one frame: for each particle `i`, its pairs `(i, j > i)` and
/// then its pointer link, if any.
pub fn links<'a>(
    particles: &'a [Particle],
    pointer: Option<Vec2>,
    params: &'a FieldParams,
) -> impl Iterator<Item = Link> + 'a {
    (0..particles.len()).flat_map(move |i| {
        pairs_from(particles, i, params).chain(pointer_link(&particles[i], pointer, params))
    })
}

/// Every unordered particle pair closer than `params.link_distance`.
pub fn pair_links<'a>(
    particles: &'a [Particle],
    params: &'a FieldParams,
) -> impl Iterator<Item = Link> + 'a {
    (0..particles.len()).flat_map(move |i| pairs_from(particles, i, params))
}

/// Every particle within pointer reach. Empty when the pointer is absent.
pub fn pointer_links<'a>(
    particles: &'a [Particle],
    pointer: Option<Vec2>,
    params: &'a FieldParams,
) -> impl Iterator<Item = Link> + 'a {
    particles
        .iter()
        .filter_map(move |p| pointer_link(p, pointer, params))
}

fn pairs_from<'a>(
    particles: &'a [Particle],
    i: usize,
    params: &'a FieldParams,
) -> impl Iterator<Item = Link> + 'a {
    let a = particles[i].position;
    particles[i + 1..].iter().filter_map(move |other| {
        let b = other.position;
        falloff(a.distance(b), params.link_distance, params.pair_alpha).map(|opacity| Link {
            from: a,
            to: b,
            opacity,
            kind: LinkKind::Pair,
        })
    })
}

fn pointer_link(particle: &Particle, pointer: Option<Vec2>, params: &FieldParams) -> Option<Link> {
    let target = pointer?;
    let from = particle.position;
    falloff(from.distance(target), params.pointer_distance(), params.pointer_alpha).map(
        |opacity| Link {
            from,
            to: target,
            opacity,
            kind: LinkKind::Pointer,
        },
    )
}
