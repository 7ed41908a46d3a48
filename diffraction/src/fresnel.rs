//! Fresnel zone and Fresnel-Kirchhoff knife-edge primitives.
//!
//! Zone radii are only valid when the distances involved are much
//! greater than the wavelength, see [`MIN_WAVELENGTHS`].
//!
//! [`MIN_WAVELENGTHS`]: crate::MIN_WAVELENGTHS

use crate::{
    error::{f64_of, DiffractionError},
    units::{Decibels, Hertz, Meters},
    C,
};
use num_traits::{AsPrimitive, Float};
use std::{iter::Iterator, ops::Range};

/// Returns the wavelength of `freq`.
pub fn freq_to_wavelen<T>(freq: Hertz<T>) -> Meters<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    Meters::new(C.as_() / freq.get())
}

/// Returns the frequency of `wavelen`.
pub fn wavelen_to_freq<T>(wavelen: Meters<T>) -> Hertz<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    Hertz::new(C.as_() / wavelen.get())
}

/// Returns the radius of the `zone`th Fresnel zone at a point `d1`
/// from one endpoint and `d2` from the other.
///
/// Fails when either distance is shorter than `min_wavelengths`
/// wavelengths.
pub fn fresnel_zone_radius<T>(
    zone: u8,
    freq: Hertz<T>,
    d1: Meters<T>,
    d2: Meters<T>,
    min_wavelengths: T,
) -> Result<Meters<T>, DiffractionError>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
    u8: AsPrimitive<T>,
{
    let wavelen = freq_to_wavelen(freq).get();
    let (d1, d2) = (d1.get(), d2.get());
    let shortest = d1.min(d2);
    if shortest < wavelen * min_wavelengths {
        return Err(DiffractionError::DistanceTooShort {
            distance_m: f64_of(shortest),
            wavelength_m: f64_of(wavelen),
        });
    }
    Ok(Meters::new(
        (zone.as_() * wavelen * d1 * d2 / (d1 + d2)).sqrt(),
    ))
}

/// Returns the radius of the first Fresnel zone at the middle of a
/// `distance` long path, where it is widest.
pub fn fresnel_first_zone_max<T>(
    freq: Hertz<T>,
    distance: Meters<T>,
    min_wavelengths: T,
) -> Result<Meters<T>, DiffractionError>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    let wavelen = freq_to_wavelen(freq).get();
    let distance = distance.get();
    if distance < wavelen * min_wavelengths {
        return Err(DiffractionError::DistanceTooShort {
            distance_m: f64_of(distance),
            wavelength_m: f64_of(wavelen),
        });
    }
    let half = T::one() / (T::one() + T::one());
    Ok(Meters::new(half * (wavelen * distance).sqrt()))
}

/// Returns the dimensionless Fresnel-Kirchhoff diffraction parameter
/// `v` for a knife edge `height` above the line of sight, `d1` and `d2`
/// from the endpoints.
pub fn fresnel_kirchhoff_param<T>(
    freq: Hertz<T>,
    d1: Meters<T>,
    d2: Meters<T>,
    height: Meters<T>,
) -> Result<T, DiffractionError>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    let (d1, d2) = (d1.get(), d2.get());
    if let Some(bad) = [d1, d2].into_iter().find(|d| *d <= T::zero()) {
        return Err(DiffractionError::Distance(f64_of(bad)));
    }
    let wavelen = freq_to_wavelen(freq).get();
    let two = T::one() + T::one();
    Ok(height.get() * (two * (d1 + d2) / (wavelen * d1 * d2)).sqrt())
}

/// Approximates knife-edge diffraction loss for parameter `v` (ITU-R
/// P.526).
///
/// The approximation only holds for `v > -0.7`.
pub fn fresnel_kirchhoff_loss<T>(v: T) -> Result<Decibels<T>, DiffractionError>
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    let min_v: T = (-0.7_f64).as_();
    if v < min_v {
        return Err(DiffractionError::ParamOutOfRange(f64_of(v)));
    }
    let offset: T = 0.1_f64.as_();
    let base: T = 6.9_f64.as_();
    let twenty: T = 20_f64.as_();
    let v = v - offset;
    Ok(Decibels::new(
        base + twenty * ((v.powi(2) + T::one()).sqrt() + v).log10(),
    ))
}

/// Represents the lower nth fresnel zone of a radio link.
#[derive(Debug)]
pub struct FresnelZone<T> {
    /// Which fresnel zone we're interested in.
    zone: u8,
    wavelength: T,
    distance_m: T,
}

impl<T> FresnelZone<T> {
    /// Returns a new FesnelZone object.
    pub fn new(zone: u8, freq: Hertz<T>, distance: Meters<T>) -> Self
    where
        T: Float + 'static,
        usize: AsPrimitive<T>,
    {
        Self {
            zone,
            wavelength: freq_to_wavelen(freq).get(),
            distance_m: distance.get(),
        }
    }

    /// Returns a new FresnelZoneIter of length `len`.
    pub fn iter(&self, len: usize) -> FresnelZoneIter<T>
    where
        T: Copy + 'static,
        u8: AsPrimitive<T>,
    {
        FresnelZoneIter {
            zone: self.zone.as_(),
            wavelength: self.wavelength,
            distance_m: self.distance_m,
            range: 0..len,
        }
    }
}

/// Zone radius at `len` evenly spaced points along the path,
/// endpoints included.
#[derive(Debug)]
pub struct FresnelZoneIter<T> {
    zone: T,
    wavelength: T,
    range: Range<usize>,
    distance_m: T,
}

impl<T> Iterator for FresnelZoneIter<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.range.next().map(|n| {
            let d1 = self.distance_m * (n.as_() / (self.range.end - 1).as_());
            let d2 = self.distance_m - d1;
            (self.zone * self.wavelength * d1 * d2 / (self.distance_m)).sqrt()
        })
    }
}
