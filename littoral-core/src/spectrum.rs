use crate::errors::{LittoralError, LittoralResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Float type used throughout the model.
pub type FloatValue = f64;

/// A spectrum sampled on a strictly increasing wavelength grid (nanometres).
///
/// Immutable once constructed. Construction enforces the numeric invariants
/// the model relies on: matching lengths, at least two samples, strictly
/// increasing finite wavelengths and finite values. Queries between samples
/// interpolate linearly; queries outside the sampled range are an error
/// rather than an extrapolation, since extrapolated optical data would be
/// fabricated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    wavelengths: Array1<FloatValue>,
    values: Array1<FloatValue>,
}

impl Spectrum {
    /// Create a spectrum from a value array and its wavelength grid.
    pub fn from_values(
        values: Array1<FloatValue>,
        wavelengths: Array1<FloatValue>,
    ) -> LittoralResult<Self> {
        if values.len() != wavelengths.len() {
            return Err(LittoralError::Error(format!(
                "spectrum has {} values for {} wavelengths",
                values.len(),
                wavelengths.len()
            )));
        }
        if wavelengths.len() < 2 {
            return Err(LittoralError::Error(
                "a spectrum needs at least two samples".to_string(),
            ));
        }
        for i in 0..wavelengths.len() {
            if !wavelengths[i].is_finite() {
                return Err(LittoralError::Error(format!(
                    "wavelength at index {} is not finite",
                    i
                )));
            }
            if i > 0 && wavelengths[i] <= wavelengths[i - 1] {
                return Err(LittoralError::Error(format!(
                    "wavelengths must be strictly increasing, but {} nm follows {} nm",
                    wavelengths[i],
                    wavelengths[i - 1]
                )));
            }
            if !values[i].is_finite() {
                return Err(LittoralError::Error(format!(
                    "value at {} nm is not finite",
                    wavelengths[i]
                )));
            }
        }
        Ok(Self {
            wavelengths,
            values,
        })
    }

    /// A flat spectrum holding `value` at every point of `grid`.
    pub fn constant(value: FloatValue, grid: &Array1<FloatValue>) -> LittoralResult<Self> {
        Self::from_values(Array1::from_elem(grid.len(), value), grid.clone())
    }

    pub fn wavelengths(&self) -> &Array1<FloatValue> {
        &self.wavelengths
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// First and last sampled wavelengths.
    pub fn wavelength_range(&self) -> (FloatValue, FloatValue) {
        (self.wavelengths[0], self.wavelengths[self.len() - 1])
    }

    /// Value at `wavelength`, linearly interpolated between the two nearest
    /// samples. Exact at grid points.
    pub fn at(&self, wavelength: FloatValue) -> LittoralResult<FloatValue> {
        let (min, max) = self.wavelength_range();
        if !(min..=max).contains(&wavelength) {
            return Err(LittoralError::OutOfRange {
                target: wavelength,
                min,
                max,
            });
        }

        // Binary search for the enclosing interval
        let w = &self.wavelengths;
        let mut lo = 0;
        let mut hi = self.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if w[mid] > wavelength {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        if wavelength == w[lo] {
            return Ok(self.values[lo]);
        }
        if wavelength == w[hi] {
            return Ok(self.values[hi]);
        }
        let t = (wavelength - w[lo]) / (w[hi] - w[lo]);
        Ok(self.values[lo] + t * (self.values[hi] - self.values[lo]))
    }

    /// Resample onto `grid` by linear interpolation.
    ///
    /// Every point of `grid` must lie inside the sampled range. Resampling
    /// onto the spectrum's own grid returns the values unchanged.
    pub fn resample(&self, grid: &Array1<FloatValue>) -> LittoralResult<Spectrum> {
        if *grid == self.wavelengths {
            return Ok(self.clone());
        }
        let mut values = Array1::zeros(grid.len());
        for (i, &wavelength) in grid.iter().enumerate() {
            values[i] = self.at(wavelength)?;
        }
        Spectrum::from_values(values, grid.clone())
    }
}
