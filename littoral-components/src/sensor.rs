//! Sensor band convolution.
//!
//! Integrates a full-resolution reflectance spectrum against each band's
//! relative spectral response, discretised as a weighted sum over the
//! shared wavelength grid and divided by the response sum. The division
//! makes the result a normalised weighted average, so raw and
//! pre-normalised responses give identical band values. Bands are
//! independent of one another.

use littoral_core::errors::{LittoralError, LittoralResult};
use littoral_core::filter::FilterSet;
use littoral_core::spectrum::{FloatValue, Spectrum};
use ndarray::Array1;
use std::collections::BTreeMap;

/// Normalised weighted average of `values` under one response curve.
pub fn band_average(values: &Array1<FloatValue>, response: &Array1<FloatValue>) -> FloatValue {
    values.dot(response) / response.sum()
}

/// Simulated band reflectance for every band of a filter set.
///
/// The spectrum and the filter set must be sampled on the same working
/// grid; alignment happens once at filter set construction, not here.
pub fn convolve(
    spectrum: &Spectrum,
    filters: &FilterSet,
) -> LittoralResult<BTreeMap<String, FloatValue>> {
    if spectrum.wavelengths() != filters.wavelengths() {
        return Err(LittoralError::GridMismatch(
            "spectrum and sensor filters are sampled on different wavelength grids".to_string(),
        ));
    }

    Ok(filters
        .iter()
        .map(|(name, response)| (name.clone(), band_average(spectrum.values(), response)))
        .collect())
}
