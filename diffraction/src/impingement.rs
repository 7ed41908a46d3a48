use crate::{
    fresnel::fresnel_zone_radius,
    units::{Hertz, Meters},
};
use log::trace;
use num_traits::{AsPrimitive, Float};
use terrain::Profile;

/// Largest fraction of the first Fresnel zone that should be obstructed
/// on a well engineered link.
pub const FRESNEL_OBSTRUCTION_IDEAL: f64 = 0.2;

/// Largest fraction of the first Fresnel zone that can be obstructed
/// before diffraction loss becomes significant.
pub const FRESNEL_OBSTRUCTION_OK: f64 = 0.4;

/// How much of the first Fresnel zone is blocked at one point.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impingement<T = f64> {
    /// 0 is full clearance, 1 is terrain at least half a zone radius
    /// above the line of sight.
    pub fraction: T,

    /// Position along the line of sight (meters).
    pub distance_m: T,
}

/// Qualitative rating of a link's worst Fresnel zone impingement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clearance {
    Ideal,
    Acceptable,
    Obstructed,
}

impl Clearance {
    pub fn from_fraction<T: Float>(fraction: T) -> Self {
        let fraction = fraction.to_f64().unwrap_or(f64::NAN);
        if fraction <= FRESNEL_OBSTRUCTION_IDEAL {
            Self::Ideal
        } else if fraction <= FRESNEL_OBSTRUCTION_OK {
            Self::Acceptable
        } else {
            Self::Obstructed
        }
    }
}

/// Linear fraction of a zone of `radius_m` blocked by terrain `height_m`
/// above the line of sight.
///
/// Terrain grazing the line of sight blocks half the zone, 0.5.
fn zone_fraction<T: Float>(height_m: T, radius_m: T) -> T {
    let half = radius_m / (T::one() + T::one());
    if height_m > half {
        T::one()
    } else if height_m < -half {
        T::zero()
    } else {
        (height_m + half) / radius_m
    }
}

/// Scans every interior sample of `profile` and returns the worst first
/// Fresnel zone impingement at `freq`.
///
/// Samples closer than `min_wavelengths` wavelengths to either endpoint
/// are skipped. If every sample is skipped, the result is zero
/// impingement at the middle of the path.
pub fn max_impingement<T>(
    profile: &Profile<T>,
    freq: Hertz<T>,
    min_wavelengths: T,
) -> Impingement<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
    u8: AsPrimitive<T>,
{
    let path = profile.normalize();
    let length_m = path.length_m;
    path.interior()
        .filter_map(|(x, y)| {
            let (d1, d2) = (Meters::new(x), Meters::new(length_m - x));
            match fresnel_zone_radius(1, freq, d1, d2, min_wavelengths) {
                Ok(radius) => Some(Impingement {
                    fraction: zone_fraction(y, radius.get()),
                    distance_m: x,
                }),
                Err(e) => {
                    trace!("max_impingement; skipping x: {:?}, {e}", x.to_f64());
                    None
                }
            }
        })
        .fold(None, |worst: Option<Impingement<T>>, this| match worst {
            Some(worst) if worst.fraction >= this.fraction => Some(worst),
            _ => Some(this),
        })
        .unwrap_or(Impingement {
            fraction: T::zero(),
            distance_m: length_m / (T::one() + T::one()),
        })
}
