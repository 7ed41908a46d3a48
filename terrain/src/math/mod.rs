mod linspace;
mod los_distance;
mod smooth;

pub use {
    linspace::linspace,
    los_distance::{ground_distance, los_distance, MEAN_EARTH_RADIUS},
    smooth::{smooth, smooth_n},
};
