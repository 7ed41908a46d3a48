use crate::{
    bullington::bullington,
    error::DiffractionError,
    impingement::{max_impingement, Clearance, Impingement},
    knife_edge::{fresnel_kirchhoff, KnifeEdge},
    loss::free_space_loss,
    units::{Decibels, Hertz, Meters},
    MIN_WAVELENGTHS,
};
use log::debug;
use num_traits::{AsPrimitive, Float, FloatConst};
use terrain::Profile;

/// A radio link over a terrain profile at one frequency.
#[derive(Debug, Clone)]
pub struct Link<T = f64> {
    profile: Profile<T>,
    freq: Hertz<T>,
    min_wavelengths: T,
}

/// Diffraction estimate for one knife-edge reduction.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diffraction<T = f64> {
    pub knife_edge: KnifeEdge<T>,

    /// Fresnel-Kirchhoff parameter, `None` when the edge sits on an
    /// endpoint.
    pub v: Option<T>,

    /// Estimated loss, `None` when `v` is unknown or below the
    /// approximation's valid range.
    pub loss: Option<Decibels<T>>,
}

/// Everything we can say about a link's terrain obstruction.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkAnalysis<T = f64> {
    /// Length of the line of sight (meters).
    pub path_length_m: T,

    /// Free space path loss over the line of sight.
    pub free_space_loss: Decibels<T>,

    /// Single highest obstruction.
    pub fresnel_kirchhoff: Diffraction<T>,

    /// Two horizon Bullington construction, `None` when the horizon
    /// rays don't form a triangle (grazing or endpoint-only paths).
    pub bullington: Option<Diffraction<T>>,

    /// Worst first Fresnel zone impingement.
    pub impingement: Impingement<T>,

    pub clearance: Clearance,
}

impl<T> Link<T>
where
    T: Float + FloatConst + 'static,
    usize: AsPrimitive<T>,
    u8: AsPrimitive<T>,
    f64: AsPrimitive<T>,
{
    pub fn builder() -> LinkBuilder<T> {
        LinkBuilder {
            freq_hz: None,
            distance_m: None,
            terrain_elev_m: None,
            start_alt_m: T::zero(),
            end_alt_m: T::zero(),
            min_wavelengths: MIN_WAVELENGTHS.as_(),
        }
    }

    /// Returns a link over an already validated profile.
    pub fn new(profile: Profile<T>, freq: Hertz<T>) -> Self {
        Self {
            profile,
            freq,
            min_wavelengths: MIN_WAVELENGTHS.as_(),
        }
    }

    pub fn profile(&self) -> &Profile<T> {
        &self.profile
    }

    pub fn freq(&self) -> Hertz<T> {
        self.freq
    }

    /// Runs every reduction over this link.
    ///
    /// A reduction that can't be applied to this path is reported as
    /// `None` without discarding the others.
    pub fn analyze(&self) -> LinkAnalysis<T> {
        let path_length_m = self.profile.path_length_m();
        let fresnel_kirchhoff = self.diffraction(fresnel_kirchhoff(&self.profile));
        let bullington = bullington(&self.profile)
            .map_err(|e| debug!("bullington; no knife edge: {e}"))
            .ok()
            .map(|knife_edge| self.diffraction(knife_edge));
        let impingement = max_impingement(&self.profile, self.freq, self.min_wavelengths);
        LinkAnalysis {
            path_length_m,
            free_space_loss: free_space_loss(self.freq, Meters::new(path_length_m)),
            fresnel_kirchhoff,
            bullington,
            impingement,
            clearance: Clearance::from_fraction(impingement.fraction),
        }
    }

    fn diffraction(&self, knife_edge: KnifeEdge<T>) -> Diffraction<T> {
        let v = knife_edge
            .param(self.freq)
            .map_err(|e| debug!("diffraction; no parameter: {e}"))
            .ok();
        let loss = knife_edge
            .loss(self.freq)
            .map_err(|e| debug!("diffraction; no loss: {e}"))
            .ok();
        Diffraction {
            knife_edge,
            v,
            loss,
        }
    }
}

pub struct LinkBuilder<T = f64> {
    /// Transmitter frequency (required).
    freq_hz: Option<T>,

    /// Ground distance from start to end (required).
    distance_m: Option<T>,

    /// Evenly spaced terrain elevations from start to end (required).
    terrain_elev_m: Option<Vec<T>>,

    /// Start antenna height above the first terrain sample (meters,
    /// defaults to 0).
    start_alt_m: T,

    /// End antenna height above the last terrain sample (meters,
    /// defaults to 0).
    end_alt_m: T,

    /// Shortest distance, in wavelengths, from either endpoint at
    /// which Fresnel zones are evaluated (defaults to 10).
    min_wavelengths: T,
}

impl<T> LinkBuilder<T>
where
    T: Float + FloatConst + 'static,
    usize: AsPrimitive<T>,
{
    /// Frequency of signal (Hz, required).
    #[must_use]
    pub fn freq(mut self, freq: Hertz<T>) -> Self {
        self.freq_hz = Some(freq.get());
        self
    }

    /// Ground distance from start to end (meters, required).
    #[must_use]
    pub fn distance(mut self, distance: Meters<T>) -> Self {
        self.distance_m = Some(distance.get());
        self
    }

    /// Terrain elevation samples (meters, required).
    #[must_use]
    pub fn terrain(mut self, terrain_elev_m: Vec<T>) -> Self {
        self.terrain_elev_m = Some(terrain_elev_m);
        self
    }

    /// Start antenna height above ground (meters, defaults to 0).
    #[must_use]
    pub fn start_alt(mut self, meters: T) -> Self {
        self.start_alt_m = meters;
        self
    }

    /// End antenna height above ground (meters, defaults to 0).
    #[must_use]
    pub fn end_alt(mut self, meters: T) -> Self {
        self.end_alt_m = meters;
        self
    }

    /// Fresnel zone near-field cutoff in wavelengths (defaults to 10).
    #[must_use]
    pub fn min_wavelengths(mut self, wavelengths: T) -> Self {
        self.min_wavelengths = wavelengths;
        self
    }

    pub fn build(self) -> Result<Link<T>, DiffractionError> {
        let freq_hz = self.freq_hz.ok_or(DiffractionError::Builder("freq"))?;
        let distance_m = self.distance_m.ok_or(DiffractionError::Builder("distance"))?;
        let terrain_elev_m = self
            .terrain_elev_m
            .ok_or(DiffractionError::Builder("terrain"))?;

        let ground = |elev: Option<&T>| elev.copied().unwrap_or_else(T::zero);
        let start_elev_m = ground(terrain_elev_m.first()) + self.start_alt_m;
        let end_elev_m = ground(terrain_elev_m.last()) + self.end_alt_m;
        let profile = Profile::new(start_elev_m, end_elev_m, distance_m, terrain_elev_m)?;

        debug!(
            "link; len: {}, freq_hz: {:?}, start_elev_m: {:?}, end_elev_m: {:?}",
            profile.len(),
            freq_hz.to_f64(),
            start_elev_m.to_f64(),
            end_elev_m.to_f64()
        );

        Ok(Link {
            profile,
            freq: Hertz::new(freq_hz),
            min_wavelengths: self.min_wavelengths,
        })
    }
}
