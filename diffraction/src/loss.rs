//! Closed-form path loss models.

use crate::{
    error::{f64_of, DiffractionError},
    units::{Decibels, Hertz, Meters},
    C,
};
use num_traits::{AsPrimitive, Float, FloatConst};

/// Free space path loss over `distance` at `freq`.
pub fn free_space_loss<T>(freq: Hertz<T>, distance: Meters<T>) -> Decibels<T>
where
    T: Float + FloatConst + 'static,
    usize: AsPrimitive<T>,
    f64: AsPrimitive<T>,
{
    let four: T = 4_f64.as_();
    let twenty: T = 20_f64.as_();
    Decibels::new(twenty * (four * T::PI() * distance.get() * freq.get() / C.as_()).log10())
}

/// Loss through `depth` of foliage at `freq` per Weissberger's model.
///
/// Valid from 230 MHz to 95 GHz and for depths up to 400 m.
pub fn foliage_loss<T>(freq: Hertz<T>, depth: Meters<T>) -> Result<Decibels<T>, DiffractionError>
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    let (min_hz, max_hz): (T, T) = (230e6_f64.as_(), 95e9_f64.as_());
    if freq.get() < min_hz || freq.get() > max_hz {
        return Err(DiffractionError::FoliageFrequency(f64_of(freq.get())));
    }
    let depth_m = depth.get();
    let (shallow, deep): (T, T) = (14_f64.as_(), 400_f64.as_());
    if depth_m < T::zero() || depth_m > deep {
        return Err(DiffractionError::FoliageDepth(f64_of(depth_m)));
    }
    let (near, far): (T, T) = (0.45_f64.as_(), 1.33_f64.as_());
    let (freq_exp, depth_exp): (T, T) = (0.284_f64.as_(), 0.588_f64.as_());
    let f_ghz = freq.as_ghz().powf(freq_exp);
    let loss = if depth_m <= shallow {
        near * f_ghz * depth_m
    } else {
        far * f_ghz * depth_m.powf(depth_exp)
    };
    Ok(Decibels::new(loss))
}

#[cfg(test)]
mod tests {
    use super::{foliage_loss, free_space_loss};
    use crate::{DiffractionError, Hertz, Meters};
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 0.002;

    #[test]
    fn test_free_space_loss() {
        let cases = [
            (2.4e9, 1e0, 40.052),
            (2.4e9, 1e3, 100.052),
            (2.4e9, 1e6, 160.052),
            (433e6, 1e3, 85.178),
            (433e6, 1e6, 145.178),
        ];
        for (freq, distance, expected) in cases {
            let loss = free_space_loss(Hertz::new(freq), Meters::new(distance));
            assert_abs_diff_eq!(loss.get(), expected, epsilon = EPS);
        }
    }

    #[test]
    fn test_foliage_loss() {
        let loss = foliage_loss(Hertz::from_ghz(1.0), Meters::new(10.0)).unwrap();
        assert_abs_diff_eq!(loss.get(), 4.5, epsilon = EPS);

        let loss = foliage_loss(Hertz::from_ghz(1.0), Meters::new(100.0)).unwrap();
        assert_abs_diff_eq!(loss.get(), 19.946, epsilon = EPS);

        let loss = foliage_loss(Hertz::from_ghz(2.4), Meters::new(10.0)).unwrap();
        assert_abs_diff_eq!(loss.get(), 5.770, epsilon = EPS);

        assert_eq!(
            foliage_loss(Hertz::from_ghz(1.0), Meters::new(0.0)).unwrap().get(),
            0.0
        );
    }

    #[test]
    fn test_foliage_loss_limits() {
        assert_eq!(
            foliage_loss(Hertz::from_mhz(100.0), Meters::new(10.0)),
            Err(DiffractionError::FoliageFrequency(100e6))
        );
        assert_eq!(
            foliage_loss(Hertz::from_ghz(1.0), Meters::new(401.0)),
            Err(DiffractionError::FoliageDepth(401.0))
        );
        assert!(foliage_loss(Hertz::from_ghz(1.0), Meters::new(-1.0)).is_err());
    }
}
