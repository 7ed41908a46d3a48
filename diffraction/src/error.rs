use num_traits::Float;
use terrain::TerrainError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffractionError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("{0}")]
    Terrain(#[from] TerrainError),

    #[error("horizon angles need at least one interior sample, profile has {0} samples")]
    TooFewInteriorSamples(usize),

    #[error("distance must be positive, got {0}m")]
    Distance(f64),

    #[error(
        "fresnel zones need distance >> wavelength \
         (distance: {distance_m:.2}m, wavelength: {wavelength_m:.2}m)"
    )]
    DistanceTooShort { distance_m: f64, wavelength_m: f64 },

    #[error("diffraction parameter {0} is below the approximation's valid range (-0.7)")]
    ParamOutOfRange(f64),

    #[error("horizon rays do not intersect (θ1: {theta1}, θ2: {theta2})")]
    DegenerateHorizon { theta1: f64, theta2: f64 },

    #[error("frequency {0}Hz is outside the foliage model's 230MHz to 95GHz range")]
    FoliageFrequency(f64),

    #[error("foliage depth {0}m is outside the foliage model's 0 to 400m range")]
    FoliageDepth(f64),
}

impl DiffractionError {
    /// Returns `true` when the inputs were well formed but violate a
    /// physical precondition of the model.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::DistanceTooShort { .. }
                | Self::ParamOutOfRange(_)
                | Self::DegenerateHorizon { .. }
                | Self::FoliageFrequency(_)
                | Self::FoliageDepth(_)
        )
    }
}

/// Lossy conversion for error reporting.
pub(crate) fn f64_of<T: Float>(val: T) -> f64 {
    val.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::DiffractionError;
    use terrain::TerrainError;

    #[test]
    fn test_taxonomy() {
        assert!(DiffractionError::ParamOutOfRange(-1.0).is_domain());
        assert!(DiffractionError::DegenerateHorizon {
            theta1: 1.6,
            theta2: 1.6
        }
        .is_domain());
        assert!(!DiffractionError::TooFewInteriorSamples(2).is_domain());
        assert!(!DiffractionError::from(TerrainError::TooFewSamples(1)).is_domain());
    }
}
