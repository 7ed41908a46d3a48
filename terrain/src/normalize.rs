//! Line-of-sight aligned terrain.
//!
//! Normalizing rotates the (ground distance, elevation) profile about
//! the start endpoint so that the line of sight lies on the x-axis.
//! Throughout this crate, a positive `y` means terrain rises *above*
//! the line of sight and obstructs it; a negative `y` is clearance.

use crate::Profile;
use log::debug;
use num_traits::{AsPrimitive, Float};

/// A terrain profile in line-of-sight coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPath<T = f64> {
    /// Position of each sample along the line of sight (meters).
    pub x: Vec<T>,

    /// Height of each sample above the line of sight (meters,
    /// positive obstructs).
    pub y: Vec<T>,

    /// Length of the line of sight (meters).
    pub length_m: T,
}

/// Perpendicular terrain height above the line of sight without
/// projecting each sample's position onto the sightline.
#[derive(Debug, Clone, PartialEq)]
pub struct Clearances<T = f64> {
    /// Height of each sample above the line of sight (meters,
    /// positive obstructs).
    pub values: Vec<T>,

    /// Distance between samples measured along the line of sight
    /// (meters).
    pub step_m: T,
}

impl<T> Profile<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    /// Transforms this profile into line-of-sight coordinates.
    pub fn normalize(&self) -> NormalizedPath<T> {
        let (sin, cos) = self.inclination().sin_cos();
        let (x, y): (Vec<T>, Vec<T>) = self
            .ground_distances_m()
            .zip(self.los_elev_m())
            .zip(self.terrain_elev_m())
            .map(|((dist, los), &elev)| {
                let clearance = los - elev;
                (dist / cos - sin * clearance, -cos * clearance)
            })
            .unzip();
        let length_m = self.path_length_m();
        debug!(
            "normalize; len: {}, θ: {:?}, length_m: {:?}",
            x.len(),
            self.inclination().to_f64(),
            length_m.to_f64()
        );
        NormalizedPath { x, y, length_m }
    }

    /// Returns every sample's height above the line of sight.
    pub fn clearances(&self) -> Clearances<T> {
        let cos = self.inclination().cos();
        let values = self
            .los_elev_m()
            .zip(self.terrain_elev_m())
            .map(|(los, &elev)| cos * (elev - los))
            .collect();
        Clearances {
            values,
            step_m: self.step_m() / cos,
        }
    }

    /// Converts a line-of-sight point back to (ground distance,
    /// elevation) for this profile's endpoints.
    pub fn denormalize(&self, x: T, y: T) -> (T, T) {
        denormalize(self.start_elev_m(), self.end_elev_m(), self.distance_m(), x, y)
    }
}

impl<T: Float> NormalizedPath<T> {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates `(x, y)` pairs, excluding the two endpoints.
    pub fn interior(&self) -> impl Iterator<Item = (T, T)> + '_ {
        let end = self.len().saturating_sub(1);
        self.x
            .iter()
            .zip(self.y.iter())
            .take(end)
            .skip(1)
            .map(|(&x, &y)| (x, y))
    }
}

/// Converts a point in line-of-sight coordinates back to (ground
/// distance, elevation) for a path from `start_elev_m` to `end_elev_m`
/// over `distance_m` of ground.
pub fn denormalize<T: Float>(start_elev_m: T, end_elev_m: T, distance_m: T, x: T, y: T) -> (T, T) {
    let (sin, cos) = (end_elev_m - start_elev_m).atan2(distance_m).sin_cos();
    let ground_m = x * cos - y * sin;
    let elev_m = x * sin + y * cos + start_elev_m;
    (ground_m, elev_m)
}
