//! Bullington's "Figure 12" construction.
//!
//! Each endpoint looks toward the other and finds its steepest ray
//! grazing any terrain sample. Where those two horizon rays cross is
//! the equivalent knife edge.

use crate::{
    error::{f64_of, DiffractionError},
    knife_edge::KnifeEdge,
};
use log::debug;
use num_traits::{AsPrimitive, Float, FloatConst};
use terrain::{NormalizedPath, Profile};

/// The steepest elevation angles (radians) from each endpoint to any
/// interior terrain sample, measured in line-of-sight coordinates.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonAngles<T = f64> {
    /// Angle at the start endpoint.
    pub theta1: T,

    /// Angle at the end endpoint.
    pub theta2: T,
}

/// Finds both endpoints' horizon angles over `path`.
///
/// The two angles are chosen independently and need not come from the
/// same sample. Angles start from -π/2, so a clear path yields negative
/// angles. Paths without interior samples are rejected.
pub fn horizon_angles<T>(path: &NormalizedPath<T>) -> Result<HorizonAngles<T>, DiffractionError>
where
    T: Float + FloatConst,
{
    if path.len() < 3 {
        return Err(DiffractionError::TooFewInteriorSamples(path.len()));
    }
    let floor = -T::FRAC_PI_2();
    let (theta1, theta2) = path
        .interior()
        .fold((floor, floor), |(theta1, theta2), (x, y)| {
            (
                theta1.max(y.atan2(x)),
                theta2.max(y.atan2(path.length_m - x)),
            )
        });
    Ok(HorizonAngles { theta1, theta2 })
}

/// Solves the triangle formed by the line of sight (`length_m` long)
/// and the two horizon rays, returning the knife edge at their apex.
pub fn solve_knife_edge<T>(
    angles: HorizonAngles<T>,
    length_m: T,
) -> Result<KnifeEdge<T>, DiffractionError>
where
    T: Float + FloatConst,
{
    let HorizonAngles { theta1, theta2 } = angles;
    let apex = T::PI() - theta1 - theta2;
    let sin_apex = apex.sin();
    if theta1 + theta2 >= T::PI() || sin_apex.abs() < T::epsilon().sqrt() {
        return Err(DiffractionError::DegenerateHorizon {
            theta1: f64_of(theta1),
            theta2: f64_of(theta2),
        });
    }
    // Law of sines; `side` is the edge from the start endpoint to the
    // apex.
    let side = length_m / sin_apex * theta2.sin();
    let distance_m = theta1.cos() * side;
    Ok(KnifeEdge {
        distance_m,
        remaining_m: length_m - distance_m,
        height_m: theta1.sin() * side,
    })
}

/// Reduces `profile` to a single knife edge with Bullington's method.
pub fn bullington<T>(profile: &Profile<T>) -> Result<KnifeEdge<T>, DiffractionError>
where
    T: Float + FloatConst + 'static,
    usize: AsPrimitive<T>,
{
    let path = profile.normalize();
    let angles = horizon_angles(&path)?;
    let edge = solve_knife_edge(angles, path.length_m)?;
    debug!(
        "bullington; θ1: {:?}, θ2: {:?}, distance_m: {:?}, height_m: {:?}",
        angles.theta1.to_f64(),
        angles.theta2.to_f64(),
        edge.distance_m.to_f64(),
        edge.height_m.to_f64()
    );
    Ok(edge)
}

#[cfg(test)]
mod tests {
    use super::{bullington, horizon_angles, solve_knife_edge, HorizonAngles};
    use crate::{DiffractionError, Profile};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use terrain::NormalizedPath;

    #[test]
    fn test_isoceles() {
        let angles = HorizonAngles {
            theta1: FRAC_PI_4,
            theta2: FRAC_PI_4,
        };
        let edge = solve_knife_edge(angles, 10.0).unwrap();
        assert_relative_eq!(edge.height_m, 5.0, max_relative = 1e-12);
        assert_relative_eq!(edge.distance_m, 5.0, max_relative = 1e-12);
        assert_relative_eq!(edge.remaining_m, 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_right_triangle() {
        // 3-4-5 triangle with the right angle at the apex.
        let angles = HorizonAngles {
            theta1: (4.0f64 / 5.0).acos(),
            theta2: (3.0f64 / 5.0).acos(),
        };
        let edge = solve_knife_edge(angles, 5.0).unwrap();
        assert_relative_eq!(edge.distance_m, 3.2, max_relative = 1e-9);
        assert_relative_eq!(edge.height_m, 2.4, max_relative = 1e-9);
        assert_relative_eq!(edge.remaining_m, 1.8, max_relative = 1e-9);
    }

    #[test]
    fn test_degenerate_triangle() {
        for (theta1, theta2) in [(FRAC_PI_2, FRAC_PI_2), (0.0, 0.0), (-0.1, 0.1), (2.0, 1.5)] {
            let err = solve_knife_edge(HorizonAngles { theta1, theta2 }, 10.0).unwrap_err();
            assert!(matches!(err, DiffractionError::DegenerateHorizon { .. }));
            assert!(err.is_domain());
        }
        assert!(solve_knife_edge(
            HorizonAngles {
                theta1: PI / 3.0,
                theta2: PI / 3.0
            },
            10.0
        )
        .is_ok());
    }

    #[test]
    fn test_horizon_angles_pick_steepest() {
        let path = NormalizedPath {
            x: vec![0.0, 2.0, 5.0, 8.0, 10.0],
            y: vec![0.0, 2.0, 1.0, 1.0, 0.0],
            length_m: 10.0,
        };
        let HorizonAngles { theta1, theta2 } = horizon_angles(&path).unwrap();
        assert_relative_eq!(theta1, FRAC_PI_4);
        assert_relative_eq!(theta2, (2.0f64).atan2(8.0).max((1.0f64).atan2(2.0)));
    }

    #[test]
    fn test_clear_path_angles_are_negative() {
        let profile = Profile::new(20.0, 20.0, 400.0, vec![20.0, 5.0, 0.0, 5.0, 20.0]).unwrap();
        let angles = horizon_angles(&profile.normalize()).unwrap();
        assert!(angles.theta1 < 0.0 && angles.theta1 > -FRAC_PI_2);
        assert!(angles.theta2 < 0.0 && angles.theta2 > -FRAC_PI_2);
        let edge = solve_knife_edge(angles, 400.0).unwrap();
        assert!(edge.height_m < 0.0);
    }

    #[test]
    fn test_endpoints_only_profile() {
        let profile = Profile::new(10.0, 10.0, 1_000.0, vec![0.0, 0.0]).unwrap();
        assert_eq!(
            bullington(&profile),
            Err(DiffractionError::TooFewInteriorSamples(2))
        );
    }

    #[test]
    fn test_single_hill() {
        // A 10 m hill in the middle of a 1 km flat path.
        let mut terrain = vec![0.0; 11];
        terrain[5] = 10.0;
        let profile = Profile::new(0.0, 0.0, 1_000.0, terrain).unwrap();
        let edge = bullington(&profile).unwrap();
        assert_relative_eq!(edge.distance_m, 500.0, max_relative = 1e-9);
        assert_relative_eq!(edge.height_m, 10.0, max_relative = 1e-9);
    }

    #[test]
    fn test_two_hills() {
        // Hills at 200 m and 800 m, each 10 m tall; horizon rays from
        // both ends cross above the middle.
        let mut terrain = vec![0.0; 11];
        terrain[2] = 10.0;
        terrain[8] = 10.0;
        let profile = Profile::new(0.0, 0.0, 1_000.0, terrain).unwrap();
        let edge = bullington(&profile).unwrap();
        assert_relative_eq!(edge.distance_m, 500.0, max_relative = 1e-9);
        assert_abs_diff_eq!(edge.height_m, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_knife_edge_maps_back_above_terrain() {
        let terrain = vec![100.0, 104.0, 130.0, 112.0, 125.0, 108.0, 100.0];
        let profile = Profile::new(110.0, 115.0, 3_000.0, terrain).unwrap();
        let edge = bullington(&profile).unwrap();
        let (ground_m, elev_m) = profile.denormalize(edge.distance_m, edge.height_m);
        assert!(ground_m > 0.0 && ground_m < 3_000.0);
        assert!(elev_m >= 130.0 - 1e-9);
    }
}
