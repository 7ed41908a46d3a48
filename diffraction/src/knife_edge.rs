use crate::{
    error::DiffractionError,
    fresnel::{fresnel_kirchhoff_loss, fresnel_kirchhoff_param},
    units::{Decibels, Hertz, Meters},
};
use log::debug;
use num_traits::{AsPrimitive, Float};
use terrain::{Clearances, Profile};

/// A single idealized obstruction standing in for an entire terrain
/// profile.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnifeEdge<T = f64> {
    /// Distance from the start endpoint along the line of sight
    /// (meters).
    pub distance_m: T,

    /// Distance from the knife edge to the end endpoint along the line
    /// of sight (meters).
    pub remaining_m: T,

    /// Height of the edge above the line of sight (meters, negative
    /// when the edge is below it).
    pub height_m: T,
}

impl<T> KnifeEdge<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
    f64: AsPrimitive<T>,
{
    /// Fresnel-Kirchhoff diffraction parameter of this edge at `freq`.
    pub fn param(&self, freq: Hertz<T>) -> Result<T, DiffractionError> {
        fresnel_kirchhoff_param(
            freq,
            Meters::new(self.distance_m),
            Meters::new(self.remaining_m),
            Meters::new(self.height_m),
        )
    }

    /// Approximate diffraction loss caused by this edge at `freq`.
    pub fn loss(&self, freq: Hertz<T>) -> Result<Decibels<T>, DiffractionError> {
        self.param(freq).and_then(fresnel_kirchhoff_loss)
    }
}

/// Reduces `profile` to its single highest obstruction.
///
/// When adjacent samples share the greatest height, the edge is placed
/// at the middle of that run so flat-topped obstacles don't snap to
/// either side.
pub fn fresnel_kirchhoff<T>(profile: &Profile<T>) -> KnifeEdge<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    let Clearances { values, step_m } = profile.clearances();
    let height_m = values.iter().copied().fold(T::neg_infinity(), T::max);
    // `Profile` guarantees at least two finite samples, so the maximum
    // is always present.
    let first = values.iter().position(|&v| v == height_m).unwrap_or(0);
    let run = values[first..]
        .iter()
        .take_while(|&&v| v == height_m)
        .count();
    let two = T::one() + T::one();
    let middle = first.as_() + run.saturating_sub(1).as_() / two;
    let distance_m = middle * step_m;
    debug!(
        "fresnel_kirchhoff; idx: {first}, run: {run}, height_m: {:?}, distance_m: {:?}",
        height_m.to_f64(),
        distance_m.to_f64()
    );
    KnifeEdge {
        distance_m,
        remaining_m: profile.path_length_m() - distance_m,
        height_m,
    }
}
