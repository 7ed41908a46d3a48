//! Physical quantities.
//!
//! Frequencies, distances and attenuations are distinct types so one
//! cannot be passed where another is expected. Conversion is always
//! explicit: wrap with `new`/`from_*` and unwrap with `get`.

use num_traits::{AsPrimitive, Float};

/// A frequency in Hertz.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Hertz<T = f64>(T);

/// A distance in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Meters<T = f64>(T);

/// A power ratio in decibels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Decibels<T = f64>(T);

impl<T: Copy> Hertz<T> {
    pub const fn new(hz: T) -> Self {
        Self(hz)
    }

    pub fn get(self) -> T {
        self.0
    }
}

impl<T> Hertz<T>
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    pub fn from_mhz(mhz: T) -> Self {
        Self(mhz * 1e6_f64.as_())
    }

    pub fn from_ghz(ghz: T) -> Self {
        Self(ghz * 1e9_f64.as_())
    }

    pub fn as_ghz(self) -> T {
        self.0 / 1e9_f64.as_()
    }
}

impl<T: Copy> Meters<T> {
    pub const fn new(m: T) -> Self {
        Self(m)
    }

    pub fn get(self) -> T {
        self.0
    }
}

impl<T> Meters<T>
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    pub fn from_km(km: T) -> Self {
        Self(km * 1e3_f64.as_())
    }
}

impl<T: Copy> Decibels<T> {
    pub const fn new(db: T) -> Self {
        Self(db)
    }

    pub fn get(self) -> T {
        self.0
    }
}

impl<T> Decibels<T>
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    /// Converts a power level in dBm to milliwatts (10·log10 scale).
    pub fn dbm_to_mw(self) -> T {
        let ten: T = 10_f64.as_();
        ten.powf(self.0 / ten)
    }

    /// Converts milliwatts to a power level in dBm.
    pub fn from_mw(mw: T) -> Self {
        let ten: T = 10_f64.as_();
        Self(ten * mw.log10())
    }

    /// Converts a field attenuation (20·log10 scale) to an absolute
    /// ratio.
    pub fn field_to_abs(self) -> T {
        let ten: T = 10_f64.as_();
        let twenty: T = 20_f64.as_();
        ten.powf(self.0 / twenty)
    }

    /// Converts an absolute field ratio to decibels.
    pub fn from_field_abs(abs: T) -> Self {
        let twenty: T = 20_f64.as_();
        Self(twenty * abs.log10())
    }
}
