mod options;

use anyhow::{anyhow, Error as AnyError};
use clap::Parser;
use diffraction::{
    fresnel::FresnelZone, Diffraction, Hertz, Link, LinkAnalysis, Meters,
};
use log::info;
use options::{Cli, Command as CliCmd, LatLon};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
};
use terrain::{
    math::{ground_distance, los_distance, smooth_n},
    NormalizedPath,
};
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    let Cli {
        profile,
        frequency,
        start_alt,
        end_alt,
        distance,
        start,
        dest,
        smooth,
        min_wavelengths,
        cmd,
    } = Cli::parse();

    env_logger::init();

    let terrain = smooth_n(smooth, &read_terrain(&profile)?);
    let distance_m = link_distance(distance, start.zip(dest), &terrain, start_alt, end_alt)?;
    info!(
        "samples: {}, distance_m: {distance_m}, frequency: {frequency}",
        terrain.len()
    );

    let link = Link::builder()
        .freq(Hertz::new(frequency))
        .distance(Meters::new(distance_m))
        .terrain(terrain)
        .start_alt(start_alt)
        .end_alt(end_alt)
        .min_wavelengths(min_wavelengths)
        .build()?;

    match cmd {
        CliCmd::Report => print_report(&link, start.zip(dest))?,
        CliCmd::Json => print_json(&link)?,
        CliCmd::Csv => print_csv(&link)?,
        CliCmd::Plot => plot_ascii(&link)?,
    };
    Ok(())
}

/// Ground distance of the link, either given directly or measured
/// between the endpoint coordinates at the antennas' mean altitude.
fn link_distance(
    distance: Option<f64>,
    coords: Option<(LatLon, LatLon)>,
    terrain: &[f64],
    start_alt: f64,
    end_alt: f64,
) -> Result<f64, AnyError> {
    match (distance, coords) {
        (Some(distance_m), _) => Ok(distance_m),
        (None, Some((LatLon(start), LatLon(dest)))) => {
            let (start_elev_m, end_elev_m) = endpoint_elevs(terrain, start_alt, end_alt)?;
            Ok(ground_distance(start, start_elev_m, dest, end_elev_m))
        }
        _ => Err(anyhow!("need --distance or both --start and --dest")),
    }
}

/// Absolute antenna heights above the first and last samples.
fn endpoint_elevs(
    terrain: &[f64],
    start_alt: f64,
    end_alt: f64,
) -> Result<(f64, f64), AnyError> {
    match (terrain.first(), terrain.last()) {
        (Some(first), Some(last)) => Ok((first + start_alt, last + end_alt)),
        _ => Err(anyhow!("terrain profile is empty")),
    }
}

/// Reads a JSON array of elevations from `path`, or stdin for `-`.
fn read_terrain(path: &Path) -> Result<Vec<f64>, AnyError> {
    let mut json = String::new();
    if path == Path::new("-") {
        io::stdin().lock().read_to_string(&mut json)?;
    } else {
        BufReader::new(File::open(path)?).read_to_string(&mut json)?;
    }
    Ok(serde_json::from_str(&json)?)
}

fn print_report(link: &Link, coords: Option<(LatLon, LatLon)>) -> Result<(), AnyError> {
    let LinkAnalysis {
        path_length_m,
        free_space_loss,
        fresnel_kirchhoff,
        bullington,
        impingement,
        clearance,
    } = link.analyze();
    let profile = link.profile();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Line of sight:     {path_length_m:.2} m")?;
    if let Some((LatLon(start), LatLon(dest))) = coords {
        let geodesic_m = los_distance(
            start,
            profile.start_elev_m(),
            dest,
            profile.end_elev_m(),
        );
        writeln!(stdout, "Geodesic LoS:      {geodesic_m:.2} m")?;
    }
    writeln!(stdout, "Free space loss:   {:.2} dB", free_space_loss.get())?;
    write_diffraction(&mut stdout, "Fresnel-Kirchhoff", &fresnel_kirchhoff)?;
    match bullington {
        Some(bullington) => write_diffraction(&mut stdout, "Bullington", &bullington)?,
        None => writeln!(stdout, "{:<19}n/a", "Bullington:")?,
    }
    writeln!(
        stdout,
        "Fresnel zone:      {:.1}% blocked at {:.2} m ({clearance:?})",
        impingement.fraction * 100.0,
        impingement.distance_m
    )?;
    Ok(())
}

fn write_diffraction<W: Write>(
    out: &mut W,
    name: &str,
    diffraction: &Diffraction,
) -> Result<(), AnyError> {
    let edge = diffraction.knife_edge;
    write!(
        out,
        "{:<19}{:.2} m at {:.2} m",
        format!("{name}:"),
        edge.height_m,
        edge.distance_m
    )?;
    match (diffraction.v, diffraction.loss) {
        (Some(v), Some(loss)) => writeln!(out, ", v = {v:.3}, loss {:.2} dB", loss.get())?,
        (Some(v), None) => writeln!(out, ", v = {v:.3}, negligible loss")?,
        _ => writeln!(out)?,
    }
    Ok(())
}

fn print_json(link: &Link) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        frequency: Hertz,
        terrain: &'a [f64],
        analysis: LinkAnalysis,
    }

    let report = JsonReport {
        frequency: link.freq(),
        terrain: link.profile().terrain_elev_m(),
        analysis: link.analyze(),
    };
    let json = serde_json::to_string(&report)?;
    println!("{json}");
    Ok(())
}

/// # Example with gnuplot
///
/// ```sh
/// cargo run -- --distance=2000 --start-alt=10 --end-alt=10 profile.json csv | tr ',' ' ' > ~/.tmp/plot && gnuplot -p -e "plot for [col=5:6] '~/.tmp/plot' using 4:col with lines"
/// ```
fn print_csv(link: &Link) -> Result<(), AnyError> {
    let profile = link.profile();
    let NormalizedPath { x, y, length_m } = profile.normalize();
    let fresnel = FresnelZone::new(1, link.freq(), Meters::new(length_m)).iter(profile.len());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Distance,Elevation,LOS,X,Y,Fresnel")?;
    for (((((distance, elevation), los), x), y), fresnel) in profile
        .ground_distances_m()
        .zip(profile.terrain_elev_m())
        .zip(profile.los_elev_m())
        .zip(x)
        .zip(y)
        .zip(fresnel)
    {
        writeln!(stdout, "{distance},{elevation},{los},{x},{y},{fresnel}")?;
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn plot_ascii(link: &Link) -> Result<(), AnyError> {
    let path = link.profile().normalize();
    let analysis = link.analyze();
    let to_f32 = |points: &[(f64, f64)]| -> Vec<(f32, f32)> {
        points
            .iter()
            .map(|&(x, y)| (x as f32, y as f32))
            .collect()
    };

    let terrain: Vec<(f64, f64)> = path.x.iter().copied().zip(path.y.iter().copied()).collect();
    let edge_outline = |edge: diffraction::KnifeEdge| {
        [
            (0.0, 0.0),
            (edge.distance_m, edge.height_m),
            (path.length_m, 0.0),
        ]
    };
    let terrain = to_f32(&terrain);
    let fk = to_f32(&edge_outline(analysis.fresnel_kirchhoff.knife_edge));
    let width = path.length_m as f32;

    match analysis.bullington {
        Some(bullington) => {
            let bullington = to_f32(&edge_outline(bullington.knife_edge));
            Chart::new(300, 150, 0.0, width)
                .lineplot(&Shape::Lines(&terrain))
                .lineplot(&Shape::Lines(&fk))
                .lineplot(&Shape::Lines(&bullington))
                .display();
        }
        None => Chart::new(300, 150, 0.0, width)
            .lineplot(&Shape::Lines(&terrain))
            .lineplot(&Shape::Lines(&fk))
            .display(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::link_distance;
    use crate::options::LatLon;
    use approx::assert_relative_eq;
    use geo::{point, HaversineDistance};
    use terrain::math::MEAN_EARTH_RADIUS;

    #[test]
    fn test_explicit_distance() {
        let distance_m = link_distance(Some(1234.0), None, &[0.0, 0.0], 0.0, 0.0).unwrap();
        assert_eq!(distance_m, 1234.0);
    }

    #[test]
    fn test_distance_from_coords() {
        let start = point!(x: -71.308, y: 44.283);
        let dest = point!(x: -71.2, y: 44.3);
        let coords = Some((LatLon(start), LatLon(dest)));
        // Antennas at 1000 m and 600 m, mean altitude 800 m.
        let terrain = [990.0, 500.0, 590.0];
        let distance_m = link_distance(None, coords, &terrain, 10.0, 10.0).unwrap();
        assert_relative_eq!(
            distance_m,
            start.haversine_distance(&dest) * (MEAN_EARTH_RADIUS + 800.0) / MEAN_EARTH_RADIUS,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_missing_distance() {
        assert!(link_distance(None, None, &[0.0, 0.0], 0.0, 0.0).is_err());
    }
}
