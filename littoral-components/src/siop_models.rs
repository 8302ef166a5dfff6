//! Analytic SIOP spectrum parameterisations.
//!
//! Library spectra are not always available for every role; these
//! parameterisations generate the derived SIOP spectra on a working grid
//! from a handful of published constants: a power-law pure seawater
//! backscatter (Mobley 1994), exponential CDOM and non-algal particle
//! absorption slopes, and a shared power-law shape for particulate
//! backscatter.
//!
//! [`derived_siop_set`] assembles a complete [`SiopSet`] from measured
//! pure-water and phytoplankton absorption spectra plus the
//! parameterisations for every remaining role.

use crate::parameters::SiopModelParameters;
use littoral_core::errors::LittoralResult;
use littoral_core::siop::{CDOM, CHLOROPHYLL, NAP, SiopSet};
use littoral_core::spectrum::{FloatValue, Spectrum};
use ndarray::Array1;

/// Pure seawater backscattering coefficient spectrum (1/m).
pub fn water_backscatter(
    grid: &Array1<FloatValue>,
    params: &SiopModelParameters,
) -> LittoralResult<Spectrum> {
    let values = grid.mapv(|w| {
        params.water_backscatter_at_reference
            * (params.water_reference_wavelength / w).powf(params.water_backscatter_exponent)
    });
    Spectrum::from_values(values, grid.clone())
}

/// CDOM specific absorption spectrum (1/m per unit concentration).
pub fn cdom_absorption(
    grid: &Array1<FloatValue>,
    params: &SiopModelParameters,
) -> LittoralResult<Spectrum> {
    let values = grid.mapv(|w| {
        params.cdom_absorption_at_reference
            * (-params.cdom_slope * (w - params.cdom_reference_wavelength)).exp()
    });
    Spectrum::from_values(values, grid.clone())
}

/// Non-algal particle specific absorption spectrum (1/m per unit
/// concentration).
pub fn nap_absorption(
    grid: &Array1<FloatValue>,
    params: &SiopModelParameters,
) -> LittoralResult<Spectrum> {
    let values = grid.mapv(|w| {
        params.nap_absorption_at_reference
            * (-params.nap_slope * (w - params.nap_reference_wavelength)).exp()
    });
    Spectrum::from_values(values, grid.clone())
}

fn particulate_backscatter(
    grid: &Array1<FloatValue>,
    magnitude: FloatValue,
    params: &SiopModelParameters,
) -> LittoralResult<Spectrum> {
    let values = grid.mapv(|w| {
        magnitude
            * (params.particulate_reference_wavelength / w)
                .powf(params.particulate_backscatter_exponent)
    });
    Spectrum::from_values(values, grid.clone())
}

/// Phytoplankton specific backscatter spectrum (1/m per unit
/// concentration).
pub fn phytoplankton_backscatter(
    grid: &Array1<FloatValue>,
    params: &SiopModelParameters,
) -> LittoralResult<Spectrum> {
    particulate_backscatter(grid, params.phytoplankton_backscatter_at_reference, params)
}

/// Non-algal particle specific backscatter spectrum (1/m per unit
/// concentration).
pub fn nap_backscatter(
    grid: &Array1<FloatValue>,
    params: &SiopModelParameters,
) -> LittoralResult<Spectrum> {
    particulate_backscatter(grid, params.nap_backscatter_at_reference, params)
}

/// Assemble a complete SIOP set from measured pure-water and phytoplankton
/// absorption spectra, deriving every other role from the
/// parameterisations.
pub fn derived_siop_set(
    water_absorption: Spectrum,
    phytoplankton_absorption: Spectrum,
    params: &SiopModelParameters,
) -> LittoralResult<SiopSet> {
    let grid = water_absorption.wavelengths().clone();
    SiopSet::builder()
        .water_absorption(water_absorption)
        .water_backscatter(water_backscatter(&grid, params)?)
        .specific_absorption(CHLOROPHYLL, phytoplankton_absorption)
        .specific_absorption(CDOM, cdom_absorption(&grid, params)?)
        .specific_absorption(NAP, nap_absorption(&grid, params)?)
        .specific_backscatter(CHLOROPHYLL, phytoplankton_backscatter(&grid, params)?)
        .specific_backscatter(NAP, nap_backscatter(&grid, params)?)
        .build()
}
