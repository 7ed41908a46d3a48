//! # Knife-Edge Diffraction
//!
//! `diffraction` estimates how much irregular terrain obstructs a
//! radio line of sight. A terrain [`Profile`] is reduced to a single
//! equivalent knife edge, either the highest obstruction
//! ([`fresnel_kirchhoff`]) or the intersection of both endpoints'
//! steepest horizon rays ([`bullington`]), and the knife edge is turned
//! into an attenuation estimate.

mod bullington;
mod error;
pub mod fresnel;
mod impingement;
mod knife_edge;
mod link;
pub mod loss;
pub mod units;

pub use {
    crate::{
        bullington::{bullington, horizon_angles, solve_knife_edge, HorizonAngles},
        error::DiffractionError,
        impingement::{
            max_impingement, Clearance, Impingement, FRESNEL_OBSTRUCTION_IDEAL,
            FRESNEL_OBSTRUCTION_OK,
        },
        knife_edge::{fresnel_kirchhoff, KnifeEdge},
        link::{Diffraction, Link, LinkAnalysis, LinkBuilder},
        units::{Decibels, Hertz, Meters},
    },
    terrain::{self, Profile},
};

/// Speed of light in m/s
const C: usize = 299_792_458;

/// Fresnel zone math is only meaningful when both distances to the
/// endpoints are at least this many wavelengths.
pub const MIN_WAVELENGTHS: usize = 10;
