use geo::{CoordFloat, HaversineDistance, Point};
use num_traits::{AsPrimitive, FromPrimitive};

/// Mean earth radius in meters, matching the radius [geo] uses for
/// haversine distances.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Returns the great circle distance, in meters, between two points,
/// raised to the mean of `start_alt_m` and `end_alt_m`.
pub fn ground_distance<T>(start: Point<T>, start_alt_m: T, end: Point<T>, end_alt_m: T) -> T
where
    T: CoordFloat + FromPrimitive + 'static,
    f64: AsPrimitive<T>,
{
    let two = T::one() + T::one();
    let radius: T = MEAN_EARTH_RADIUS.as_();
    let mean_alt_m = (start_alt_m + end_alt_m) / two;
    start.haversine_distance(&end) * (radius + mean_alt_m) / radius
}

/// Returns the approximate straight-line distance, in meters, between
/// two points at `start_alt_m` and `end_alt_m` above mean sea level.
///
/// The [`ground_distance`] is combined with the altitude difference as
/// if the earth were flat. Error grows with path length.
pub fn los_distance<T>(start: Point<T>, start_alt_m: T, end: Point<T>, end_alt_m: T) -> T
where
    T: CoordFloat + FromPrimitive + 'static,
    f64: AsPrimitive<T>,
{
    ground_distance(start, start_alt_m, end, end_alt_m).hypot(end_alt_m - start_alt_m)
}

#[cfg(test)]
mod tests {
    use super::{ground_distance, los_distance, MEAN_EARTH_RADIUS};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use geo::{point, HaversineDistance};

    #[test]
    fn test_auckland_to_wellington() {
        let auckland = point!(x: 174.7633, y: -36.8485);
        let wellington = point!(x: 174.7762, y: -41.2865);
        let d = los_distance(auckland, 0.0, wellington, 0.0);
        assert_abs_diff_eq!(493.4e3, d, epsilon = 1e3);
    }

    #[test]
    fn test_ground_distance_at_altitude() {
        let auckland = point!(x: 174.7633, y: -36.8485);
        let wellington = point!(x: 174.7762, y: -41.2865);
        let sea_level = auckland.haversine_distance(&wellington);
        assert_relative_eq!(
            ground_distance(auckland, 0.0, wellington, 0.0),
            sea_level,
            max_relative = 1e-12
        );
        let raised = ground_distance(auckland, 100.0, wellington, 300.0);
        assert_relative_eq!(
            raised,
            sea_level * (MEAN_EARTH_RADIUS + 200.0) / MEAN_EARTH_RADIUS,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            los_distance(auckland, 100.0, wellington, 300.0),
            raised.hypot(200.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_vertical_separation() {
        let here = point!(x: 0.0, y: 0.0);
        let d = los_distance(here, 10.0, here, 110.0);
        assert_abs_diff_eq!(100.0, d, epsilon = 1e-9);
    }
}
