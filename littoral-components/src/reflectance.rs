//! Semi-analytical reflectance of a shallow water column over a
//! reflective bottom.
//!
//! # What This Component Does
//!
//! 1. Forms the single-scattering ratio $u = b_b / \kappa$ with
//!    $\kappa = a + b_b$ at every wavelength.
//!
//! 2. Evaluates the deep-water subsurface reflectance polynomial
//!    $r_{rs}^{dp} = (g_0 + g_1 u) u$.
//!
//! 3. Blends the deep-water signal with the bottom signal using
//!    exponential attenuation over depth and the path-elongation factors
//!    for photons scattered in the column and reflected by the bottom:
//!
//!    $$r_{rs} = r_{rs}^{dp} \left(1 - e^{-(\sec\theta_w + D_C \sec\theta_o)\,\kappa H}\right)
//!             + \frac{r_B}{\pi} e^{-(\sec\theta_w + D_B \sec\theta_o)\,\kappa H}$$
//!
//!    where $\theta_w$ and $\theta_o$ are the sub-surface solar and
//!    viewing zenith angles, refracted through the air-water interface.
//!
//! 4. Corrects the subsurface reflectance for internal reflection at the
//!    interface to give the above-surface value.
//!
//! Every formula applies per wavelength with no spectral coupling, so the
//! stage vectorises across the wavelength axis. Arbitrarily deep water
//! saturates to the deep-water polynomial through exponential underflow;
//! that path needs no special casing.

use crate::parameters::ReflectanceParameters;
use littoral_core::errors::{LittoralError, LittoralResult};
use littoral_core::spectrum::{FloatValue, Spectrum};
use ndarray::{Array1, Zip};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_PI;

/// Water column depth and observation angles for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterColumnGeometry {
    /// Water column depth in metres.
    pub depth: FloatValue,
    /// Solar zenith angle in air, degrees.
    pub solar_zenith: FloatValue,
    /// Viewing angle off nadir, degrees.
    pub view_zenith: FloatValue,
}

impl WaterColumnGeometry {
    pub fn new(depth: FloatValue, solar_zenith: FloatValue, view_zenith: FloatValue) -> Self {
        Self {
            depth,
            solar_zenith,
            view_zenith,
        }
    }

    /// Nadir viewing under a sun at `solar_zenith` degrees.
    pub fn nadir(depth: FloatValue, solar_zenith: FloatValue) -> Self {
        Self::new(depth, solar_zenith, 0.0)
    }
}

/// Benthic substrate reflectance, optionally a convex mix of two
/// substrates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    primary: Spectrum,
    secondary: Option<Spectrum>,
    fraction: FloatValue,
}

impl Substrate {
    /// A single uniform substrate.
    pub fn uniform(primary: Spectrum) -> Self {
        Self {
            primary,
            secondary: None,
            fraction: 1.0,
        }
    }

    /// A mix of two substrates: `fraction` of the primary and
    /// `1 - fraction` of the secondary.
    pub fn mixed(
        primary: Spectrum,
        secondary: Spectrum,
        fraction: FloatValue,
    ) -> LittoralResult<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(LittoralError::InvalidParameter {
                name: "substrate fraction".to_string(),
                value: fraction,
                constraint: "must lie in [0, 1]".to_string(),
            });
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
            fraction,
        })
    }

    /// Combined bottom reflectance resampled onto the working grid.
    pub fn combined(&self, grid: &Array1<FloatValue>) -> LittoralResult<Spectrum> {
        let primary = self.primary.resample(grid)?;
        match &self.secondary {
            None => Ok(primary),
            Some(secondary) => {
                let secondary = secondary.resample(grid)?;
                let values = primary.values() * self.fraction
                    + secondary.values() * (1.0 - self.fraction);
                Spectrum::from_values(values, grid.clone())
            }
        }
    }
}

/// Per-wavelength outputs of the reflectance stage.
#[derive(Debug, Clone)]
pub struct ReflectanceSpectra {
    /// Combined bottom reflectance on the working grid.
    pub substrate: Spectrum,
    /// Subsurface reflectance of an optically deep column (1/sr).
    pub deep_subsurface: Spectrum,
    /// Subsurface remote-sensing reflectance (1/sr).
    pub subsurface: Spectrum,
    /// Above-surface remote-sensing reflectance (1/sr).
    pub above_surface: Spectrum,
    /// Downwelling diffuse attenuation (1/m).
    pub downwelling_attenuation: Spectrum,
    /// Upwelling attenuation of the water-column signal (1/m).
    pub column_upwelling_attenuation: Spectrum,
    /// Upwelling attenuation of the bottom signal (1/m).
    pub bottom_upwelling_attenuation: Spectrum,
}

/// The semi-analytical reflectance model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReflectanceModel {
    parameters: ReflectanceParameters,
}

impl ReflectanceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: ReflectanceParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &ReflectanceParameters {
        &self.parameters
    }

    /// Deep-water subsurface reflectance as a function of $u$.
    pub fn deep_water_reflectance(&self, u: FloatValue) -> FloatValue {
        (self.parameters.deep_g0 + self.parameters.deep_g1 * u) * u
    }

    /// Path elongation for photons scattered in the water column.
    pub fn column_path_elongation(&self, u: FloatValue) -> FloatValue {
        self.parameters.column_elongation_scale
            * (1.0 + self.parameters.column_elongation_gain * u).sqrt()
    }

    /// Path elongation for photons reflected by the bottom.
    pub fn bottom_path_elongation(&self, u: FloatValue) -> FloatValue {
        self.parameters.bottom_elongation_scale
            * (1.0 + self.parameters.bottom_elongation_gain * u).sqrt()
    }

    /// Above-surface reflectance from its subsurface value.
    pub fn above_surface_reflectance(&self, subsurface: FloatValue) -> FloatValue {
        self.parameters.interface_transmission * subsurface
            / (1.0 - self.parameters.internal_reflection * subsurface)
    }

    /// Sub-surface zenith angle (radians) for an in-air angle in degrees.
    fn subsurface_angle(&self, zenith_degrees: FloatValue) -> FloatValue {
        (zenith_degrees.to_radians().sin() / self.parameters.refractive_index).asin()
    }

    fn validate_geometry(&self, geometry: &WaterColumnGeometry) -> LittoralResult<()> {
        if geometry.depth <= self.parameters.minimum_depth {
            return Err(LittoralError::InvalidParameter {
                name: "depth".to_string(),
                value: geometry.depth,
                constraint: format!("must exceed {} m", self.parameters.minimum_depth),
            });
        }
        for (name, angle) in [
            ("solar zenith angle", geometry.solar_zenith),
            ("view zenith angle", geometry.view_zenith),
        ] {
            if !(0.0..90.0).contains(&angle) {
                return Err(LittoralError::InvalidParameter {
                    name: name.to_string(),
                    value: angle,
                    constraint: "must lie in [0, 90) degrees".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Subsurface and above-surface reflectance spectra for one sample.
    ///
    /// `absorption` and `backscatter` must share a wavelength grid; the
    /// substrate is resampled onto it. Fails with the degenerate
    /// coefficient error at the first wavelength where both coefficients
    /// are exactly zero.
    pub fn reflectance(
        &self,
        absorption: &Spectrum,
        backscatter: &Spectrum,
        substrate: &Substrate,
        geometry: &WaterColumnGeometry,
    ) -> LittoralResult<ReflectanceSpectra> {
        self.validate_geometry(geometry)?;
        if absorption.wavelengths() != backscatter.wavelengths() {
            return Err(LittoralError::GridMismatch(
                "absorption and backscatter are sampled on different grids".to_string(),
            ));
        }

        let grid = absorption.wavelengths();
        let bottom = substrate.combined(grid)?;

        let kappa = absorption.values() + backscatter.values();
        if let Some(index) = kappa.iter().position(|&k| k == 0.0) {
            return Err(LittoralError::DegenerateCoefficients {
                wavelength: grid[index],
            });
        }
        let u = backscatter.values() / &kappa;

        let theta_w = self.subsurface_angle(geometry.solar_zenith);
        let theta_o = self.subsurface_angle(geometry.view_zenith);
        let sec_theta_w = 1.0 / theta_w.cos();
        let sec_theta_o = 1.0 / theta_o.cos();

        let deep = u.mapv(|u| self.deep_water_reflectance(u));
        let column_elongation = u.mapv(|u| self.column_path_elongation(u));
        let bottom_elongation = u.mapv(|u| self.bottom_path_elongation(u));

        let kd = &kappa * sec_theta_w;
        let kuc = &kappa * &column_elongation * sec_theta_o;
        let kub = &kappa * &bottom_elongation * sec_theta_o;

        let depth = geometry.depth;
        let subsurface = Zip::from(&deep)
            .and(&column_elongation)
            .and(&bottom_elongation)
            .and(&kappa)
            .and(bottom.values())
            .map_collect(|&deep, &d_column, &d_bottom, &kappa, &r_bottom| {
                let column_attenuation =
                    (-(sec_theta_w + d_column * sec_theta_o) * kappa * depth).exp();
                let bottom_attenuation =
                    (-(sec_theta_w + d_bottom * sec_theta_o) * kappa * depth).exp();
                deep * (1.0 - column_attenuation) + r_bottom * FRAC_1_PI * bottom_attenuation
            });
        let above_surface = subsurface.mapv(|r| self.above_surface_reflectance(r));

        Ok(ReflectanceSpectra {
            substrate: bottom,
            deep_subsurface: Spectrum::from_values(deep, grid.clone())?,
            subsurface: Spectrum::from_values(subsurface, grid.clone())?,
            above_surface: Spectrum::from_values(above_surface, grid.clone())?,
            downwelling_attenuation: Spectrum::from_values(kd, grid.clone())?,
            column_upwelling_attenuation: Spectrum::from_values(kuc, grid.clone())?,
            bottom_upwelling_attenuation: Spectrum::from_values(kub, grid.clone())?,
        })
    }
}
