pub mod constants;
pub mod error;
pub mod field;
pub mod linker;
pub mod particle;
pub mod reflect;
pub mod schedule;
pub mod surface;

pub use constants::*;
pub use error::FieldError;
pub use field::{particle_count, Field, FieldParams, FrameStats};
pub use linker::{links, pair_links, pointer_links, Link, LinkKind};
pub use particle::Particle;
pub use reflect::{reflect, reflect_point};
pub use schedule::{FrameHandle, FrameLoop, Start};
#[cfg(not(target_arch = "wasm32"))]
pub use schedule::ThreadScheduler;
pub use surface::{DrawCommand, RecordingSurface, Rgba, Size, Surface};
