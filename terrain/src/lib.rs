//! # Terrain
//!
//! `terrain` holds sampled elevation profiles between two radio
//! endpoints and transforms them into a frame aligned with the line of
//! sight.

mod error;
pub mod math;
mod normalize;
mod profile;

pub use crate::{
    error::TerrainError,
    normalize::{denormalize, Clearances, NormalizedPath},
    profile::Profile,
};
pub use geo;
