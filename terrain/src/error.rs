use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("profile needs at least 2 elevation samples, got {0}")]
    TooFewSamples(usize),

    #[error("path distance must be positive and finite, got {0}")]
    Distance(f64),

    #[error("non-finite elevation at sample {0}")]
    Elevation(usize),

    #[error("non-finite endpoint height, start: {start}, end: {end}")]
    EndpointElevation { start: f64, end: f64 },
}
