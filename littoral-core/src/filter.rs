//! Sensor band relative spectral response filters.
//!
//! Response curves arrive on their own wavelength grids; a [`FilterSet`]
//! samples each one onto the model's working grid at construction and
//! normalises it to unit discrete integral, so pre-normalised and raw
//! responses convolve identically.

use crate::errors::{LittoralError, LittoralResult};
use crate::spectrum::{FloatValue, Spectrum};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named sensor band responses sampled on a common wavelength grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSet {
    wavelengths: Array1<FloatValue>,
    bands: BTreeMap<String, Array1<FloatValue>>,
}

impl FilterSet {
    pub fn builder() -> FilterSetBuilder {
        FilterSetBuilder::default()
    }

    pub fn wavelengths(&self) -> &Array1<FloatValue> {
        &self.wavelengths
    }

    /// Normalised response for a band, if present.
    pub fn response(&self, band: &str) -> Option<&Array1<FloatValue>> {
        self.bands.get(band)
    }

    /// Iterate bands in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Array1<FloatValue>)> {
        self.bands.iter()
    }

    pub fn band_names(&self) -> impl Iterator<Item = &str> {
        self.bands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

/// Builder collecting band response curves before alignment.
#[derive(Debug, Default)]
pub struct FilterSetBuilder {
    bands: BTreeMap<String, Spectrum>,
}

impl FilterSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn band(mut self, name: impl Into<String>, response: Spectrum) -> Self {
        self.bands.insert(name.into(), response);
        self
    }

    /// Sample every band onto `grid` and normalise.
    ///
    /// Grid points outside a band's own tabulated support take zero
    /// response. A band whose support misses the grid entirely is a data
    /// alignment error.
    pub fn build(self, grid: &Array1<FloatValue>) -> LittoralResult<FilterSet> {
        let mut bands = BTreeMap::new();
        for (name, response) in self.bands {
            let (support_min, support_max) = response.wavelength_range();
            let mut sampled = Array1::zeros(grid.len());
            for (i, &wavelength) in grid.iter().enumerate() {
                if (support_min..=support_max).contains(&wavelength) {
                    sampled[i] = response.at(wavelength)?;
                }
            }

            let total = sampled.sum();
            if total == 0.0 {
                return Err(LittoralError::DisjointBand(name));
            }
            sampled /= total;
            bands.insert(name, sampled);
        }

        Ok(FilterSet {
            wavelengths: grid.clone(),
            bands,
        })
    }
}
