use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use geo::geometry::Point;
use std::{path::PathBuf, str::FromStr};

/// Estimate terrain diffraction loss over a point-to-point radio link.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// JSON array of evenly spaced terrain elevations (meters) from
    /// start to end, or '-' to read stdin.
    pub profile: PathBuf,

    /// Frequency of signal, in Hz.
    #[arg(short, long, default_value_t = 900e6)]
    pub frequency: f64,

    /// Start antenna height above ground, in meters.
    #[arg(long, default_value_t = 0.0)]
    pub start_alt: f64,

    /// End antenna height above ground, in meters.
    #[arg(long, default_value_t = 0.0)]
    pub end_alt: f64,

    /// Ground distance from start to end, in meters.
    #[arg(short, long, required_unless_present_all = ["start", "dest"])]
    pub distance: Option<f64>,

    /// Start "lat,lon", used to derive the distance.
    #[arg(long, requires = "dest")]
    pub start: Option<LatLon>,

    /// Destination "lat,lon", used to derive the distance.
    #[arg(long, requires = "start")]
    pub dest: Option<LatLon>,

    /// Halve the profile resolution this many times before analysis.
    #[arg(short, long, default_value_t = 0)]
    pub smooth: usize,

    /// Skip Fresnel zone checks closer than this many wavelengths to
    /// either end.
    #[arg(long, default_value_t = 10.0)]
    pub min_wavelengths: f64,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Debug, Copy)]
pub struct LatLon(pub Point<f64>);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lon = f64::from_str(lon_str.trim())?;
        Ok(Self(Point::new(lon, lat)))
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print a human readable summary.
    Report,

    /// Print the analysis as JSON.
    Json,

    /// Print per-sample geometry as CSV.
    Csv,

    /// Plot the normalized terrain and knife edges to the terminal.
    Plot,
}

#[cfg(test)]
mod tests {
    use super::LatLon;
    use std::str::FromStr;

    #[test]
    fn test_parse_lat_lon() {
        let LatLon(point) = LatLon::from_str("44.283,-71.308").unwrap();
        assert_eq!(point.y(), 44.283);
        assert_eq!(point.x(), -71.308);
        assert!(LatLon::from_str("44.283").is_err());
        assert!(LatLon::from_str("north,west").is_err());
    }
}
