//! Drifting particle field background.
//!
//! A [`field::ParticleField`] owns a fixed population of particles and
//! renders them through any [`graphics::DrawSurface`]. The binary mounts it
//! as a [`data::Background`] in a window or a terminal.

pub mod data;
pub mod error;
pub mod field;
pub mod graphics;
pub mod math;
pub mod modes;

pub use data::{config::Config, Background};
pub use error::{Error, Result};
pub use field::{FieldParams, Particle, ParticleField};
