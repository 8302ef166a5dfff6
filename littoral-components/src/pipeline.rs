//! Forward model façade.
//!
//! Threads one sample — concentrations, substrate, geometry — through the
//! coefficient, reflectance, and band convolution stages in sequence, and
//! collects every intermediate into a [`ForwardModelResult`]. Failures
//! from any stage propagate unchanged: each one marks invalid input, not a
//! transient condition, so there is nothing to retry.

use crate::iop;
use crate::parameters::ForwardModelParameters;
use crate::reflectance::{ReflectanceModel, Substrate, WaterColumnGeometry};
use crate::sensor;
use littoral_core::errors::LittoralResult;
use littoral_core::filter::FilterSet;
use littoral_core::siop::{Concentrations, SiopSet};
use littoral_core::spectrum::{FloatValue, Spectrum};
use log::debug;
use std::collections::BTreeMap;

/// Complete output of one forward model invocation.
///
/// Downstream consumers need the coefficient and attenuation intermediates
/// as much as the final spectrum, so everything is exposed.
#[derive(Debug, Clone)]
pub struct ForwardModelResult {
    /// Total absorption coefficient spectrum (1/m).
    pub absorption: Spectrum,
    /// Total backscattering coefficient spectrum (1/m).
    pub backscatter: Spectrum,
    /// Combined benthic substrate reflectance.
    pub substrate: Spectrum,
    /// Subsurface reflectance of an optically deep column (1/sr).
    pub deep_subsurface_reflectance: Spectrum,
    /// Subsurface remote-sensing reflectance (1/sr).
    pub subsurface_reflectance: Spectrum,
    /// Above-surface remote-sensing reflectance (1/sr).
    pub above_surface_reflectance: Spectrum,
    /// Downwelling diffuse attenuation (1/m).
    pub downwelling_attenuation: Spectrum,
    /// Upwelling attenuation of the water-column signal (1/m).
    pub column_upwelling_attenuation: Spectrum,
    /// Upwelling attenuation of the bottom signal (1/m).
    pub bottom_upwelling_attenuation: Spectrum,
    /// Simulated per-band reflectance, when a filter set was supplied.
    pub band_reflectance: Option<BTreeMap<String, FloatValue>>,
}

/// The full forward model: coefficients, reflectance, band convolution.
#[derive(Debug, Clone, Default)]
pub struct ForwardModel {
    reflectance: ReflectanceModel,
}

impl ForwardModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: ForwardModelParameters) -> Self {
        Self {
            reflectance: ReflectanceModel::from_parameters(parameters.reflectance),
        }
    }

    /// Run the forward model for one sample.
    ///
    /// Pure: identical inputs produce bit-for-bit identical outputs, and
    /// the shared SIOP and filter sets are only read.
    pub fn run(
        &self,
        siops: &SiopSet,
        concentrations: &Concentrations,
        substrate: &Substrate,
        geometry: &WaterColumnGeometry,
        filters: Option<&FilterSet>,
    ) -> LittoralResult<ForwardModelResult> {
        debug!(
            "forward model: {} wavelengths, depth {} m",
            siops.wavelengths().len(),
            geometry.depth
        );

        let (absorption, backscatter) = iop::optical_coefficients(siops, concentrations)?;
        let spectra =
            self.reflectance
                .reflectance(&absorption, &backscatter, substrate, geometry)?;
        let band_reflectance = filters
            .map(|filters| sensor::convolve(&spectra.above_surface, filters))
            .transpose()?;

        Ok(ForwardModelResult {
            absorption,
            backscatter,
            substrate: spectra.substrate,
            deep_subsurface_reflectance: spectra.deep_subsurface,
            subsurface_reflectance: spectra.subsurface,
            above_surface_reflectance: spectra.above_surface,
            downwelling_attenuation: spectra.downwelling_attenuation,
            column_upwelling_attenuation: spectra.column_upwelling_attenuation,
            bottom_upwelling_attenuation: spectra.bottom_upwelling_attenuation,
            band_reflectance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use littoral_core::errors::LittoralError;
    use littoral_core::siop::{CDOM, CHLOROPHYLL, NAP};
    use ndarray::{Array, Array1};

    fn grid() -> Array1<FloatValue> {
        Array::range(400.0, 701.0, 10.0)
    }

    fn siops() -> SiopSet {
        let grid = grid();
        SiopSet::builder()
            .water_absorption(
                Spectrum::from_values(grid.mapv(|w| 0.02 + 1.0e-4 * (w - 400.0)), grid.clone())
                    .unwrap(),
            )
            .water_backscatter(Spectrum::constant(0.001, &grid).unwrap())
            .specific_absorption(CHLOROPHYLL, Spectrum::constant(0.06, &grid).unwrap())
            .specific_absorption(CDOM, Spectrum::constant(0.4, &grid).unwrap())
            .specific_absorption(NAP, Spectrum::constant(0.004, &grid).unwrap())
            .specific_backscatter(NAP, Spectrum::constant(0.022, &grid).unwrap())
            .build()
            .unwrap()
    }

    fn sample() -> (Concentrations, Substrate, WaterColumnGeometry) {
        let concentrations = Concentrations::new()
            .with(CHLOROPHYLL, 0.8)
            .with(CDOM, 0.05)
            .with(NAP, 1.2);
        let substrate = Substrate::uniform(Spectrum::constant(0.3, &grid()).unwrap());
        let geometry = WaterColumnGeometry::new(4.0, 30.0, 10.0);
        (concentrations, substrate, geometry)
    }

    #[test]
    fn run_exposes_every_intermediate() {
        let (concentrations, substrate, geometry) = sample();
        let result = ForwardModel::new()
            .run(&siops(), &concentrations, &substrate, &geometry, None)
            .unwrap();

        let n = grid().len();
        for spectrum in [
            &result.absorption,
            &result.backscatter,
            &result.substrate,
            &result.deep_subsurface_reflectance,
            &result.subsurface_reflectance,
            &result.above_surface_reflectance,
            &result.downwelling_attenuation,
            &result.column_upwelling_attenuation,
            &result.bottom_upwelling_attenuation,
        ] {
            assert_eq!(spectrum.len(), n);
        }
        assert!(result.band_reflectance.is_none());
    }

    #[test]
    fn stage_failures_propagate_unchanged() {
        let (_, substrate, geometry) = sample();
        let negative = Concentrations::new().with(CHLOROPHYLL, -1.0);
        let result = ForwardModel::new().run(&siops(), &negative, &substrate, &geometry, None);
        assert!(matches!(
            result,
            Err(LittoralError::InvalidParameter { .. })
        ));

        let (concentrations, substrate, _) = sample();
        let dry = WaterColumnGeometry::nadir(0.0, 30.0);
        let result = ForwardModel::new().run(&siops(), &concentrations, &substrate, &dry, None);
        assert!(matches!(
            result,
            Err(LittoralError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let (concentrations, substrate, geometry) = sample();
        let model = ForwardModel::new();
        let first = model
            .run(&siops(), &concentrations, &substrate, &geometry, None)
            .unwrap();
        let second = model
            .run(&siops(), &concentrations, &substrate, &geometry, None)
            .unwrap();

        assert_eq!(
            first.above_surface_reflectance.values(),
            second.above_surface_reflectance.values()
        );
        assert_eq!(
            first.downwelling_attenuation.values(),
            second.downwelling_attenuation.values()
        );
    }
}
