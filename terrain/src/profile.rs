use crate::{math::linspace, TerrainError};
use num_traits::{AsPrimitive, Float};

/// Elevation samples between two radio endpoints.
///
/// Samples are evenly spaced along the ground from the start endpoint
/// (index 0) to the end endpoint (last index).
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<T = f64> {
    /// Absolute height of the start endpoint's antenna (meters).
    start_elev_m: T,

    /// Absolute height of the end endpoint's antenna (meters).
    end_elev_m: T,

    /// Ground distance from start to end (meters).
    distance_m: T,

    /// Terrain elevation at each step from start to end (meters).
    terrain_elev_m: Vec<T>,
}

impl<T> Profile<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    /// Returns a new profile after validating its geometry.
    ///
    /// # Parameters
    ///
    /// - `start_elev_m`: absolute antenna height at the first sample
    /// - `end_elev_m`: absolute antenna height at the last sample
    /// - `distance_m`: ground distance between first and last sample
    /// - `terrain_elev_m`: at least two evenly spaced elevation samples
    pub fn new(
        start_elev_m: T,
        end_elev_m: T,
        distance_m: T,
        terrain_elev_m: Vec<T>,
    ) -> Result<Self, TerrainError> {
        if terrain_elev_m.len() < 2 {
            return Err(TerrainError::TooFewSamples(terrain_elev_m.len()));
        }
        if !(distance_m.is_finite() && distance_m > T::zero()) {
            return Err(TerrainError::Distance(
                distance_m.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if let Some(idx) = terrain_elev_m.iter().position(|elev| !elev.is_finite()) {
            return Err(TerrainError::Elevation(idx));
        }
        if !(start_elev_m.is_finite() && end_elev_m.is_finite()) {
            return Err(TerrainError::EndpointElevation {
                start: start_elev_m.to_f64().unwrap_or(f64::NAN),
                end: end_elev_m.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            start_elev_m,
            end_elev_m,
            distance_m,
            terrain_elev_m,
        })
    }

    pub fn start_elev_m(&self) -> T {
        self.start_elev_m
    }

    pub fn end_elev_m(&self) -> T {
        self.end_elev_m
    }

    pub fn distance_m(&self) -> T {
        self.distance_m
    }

    pub fn terrain_elev_m(&self) -> &[T] {
        &self.terrain_elev_m
    }

    /// Number of elevation samples, always 2 or more.
    pub fn len(&self) -> usize {
        self.terrain_elev_m.len()
    }

    /// A profile always holds at least two samples.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Ground distance between adjacent samples (meters).
    pub fn step_m(&self) -> T {
        self.distance_m / (self.len() - 1).as_()
    }

    /// Inclination (radians) of the line of sight from start to end.
    pub fn inclination(&self) -> T {
        (self.end_elev_m - self.start_elev_m).atan2(self.distance_m)
    }

    /// Straight-line length (meters) of the line of sight.
    pub fn path_length_m(&self) -> T {
        self.distance_m.hypot(self.end_elev_m - self.start_elev_m)
    }

    /// Ground distance from the start endpoint to each sample.
    pub fn ground_distances_m(&self) -> impl Iterator<Item = T> {
        linspace(T::zero(), self.distance_m, self.len())
    }

    /// Height of the line of sight above each sample.
    pub fn los_elev_m(&self) -> impl Iterator<Item = T> {
        linspace(self.start_elev_m, self.end_elev_m, self.len())
    }
}
