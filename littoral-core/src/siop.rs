//! Specific inherent optical property sets and constituent concentrations.
//!
//! A [`SiopSet`] holds the per-unit-concentration spectra the model combines
//! into total coefficients: the two pure-water roles plus per-constituent
//! specific absorption and backscatter registries. All spectra are aligned
//! to a single working grid once, at construction, so no model stage pays
//! for resampling per invocation.

use crate::errors::{LittoralError, LittoralResult};
use crate::spectrum::{FloatValue, Spectrum};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Constituent name used by the bundled phytoplankton parameterisations.
pub const CHLOROPHYLL: &str = "chlorophyll";
/// Coloured dissolved organic matter.
pub const CDOM: &str = "cdom";
/// Non-algal particles (tripton).
pub const NAP: &str = "nap";

/// Named constituent concentrations.
///
/// Zero is a valid, meaningful value: the constituent is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concentrations {
    values: BTreeMap<String, FloatValue>,
}

impl Concentrations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable setter for building a sample.
    pub fn with(mut self, constituent: impl Into<String>, value: FloatValue) -> Self {
        self.values.insert(constituent.into(), value);
        self
    }

    pub fn set(&mut self, constituent: impl Into<String>, value: FloatValue) {
        self.values.insert(constituent.into(), value);
    }

    pub fn get(&self, constituent: &str) -> Option<FloatValue> {
        self.values.get(constituent).copied()
    }

    /// Iterate entries in constituent-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FloatValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The fixed collection of SIOP spectra required by the forward model,
/// aligned to a common wavelength grid.
///
/// Built once (see [`SiopSetBuilder`]) and shared read-only across many
/// forward model invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiopSet {
    wavelengths: Array1<FloatValue>,
    water_absorption: Spectrum,
    water_backscatter: Spectrum,
    specific_absorption: BTreeMap<String, Spectrum>,
    specific_backscatter: BTreeMap<String, Spectrum>,
}

impl SiopSet {
    pub fn builder() -> SiopSetBuilder {
        SiopSetBuilder::default()
    }

    /// The working grid every member spectrum is sampled on.
    pub fn wavelengths(&self) -> &Array1<FloatValue> {
        &self.wavelengths
    }

    /// Pure water absorption coefficient (1/m).
    pub fn water_absorption(&self) -> &Spectrum {
        &self.water_absorption
    }

    /// Pure water backscattering coefficient (1/m).
    pub fn water_backscatter(&self) -> &Spectrum {
        &self.water_backscatter
    }

    /// Specific absorption spectrum for a constituent, if registered.
    pub fn specific_absorption(&self, constituent: &str) -> Option<&Spectrum> {
        self.specific_absorption.get(constituent)
    }

    /// Specific backscatter spectrum for a constituent, if registered.
    pub fn specific_backscatter(&self, constituent: &str) -> Option<&Spectrum> {
        self.specific_backscatter.get(constituent)
    }
}

/// Builder collecting SIOP spectra before alignment.
///
/// `build` fails if either pure-water role is missing, then resamples every
/// spectrum onto the working grid: an explicitly supplied grid, or the
/// pure-water absorption grid as the reference.
#[derive(Debug, Default)]
pub struct SiopSetBuilder {
    grid: Option<Array1<FloatValue>>,
    water_absorption: Option<Spectrum>,
    water_backscatter: Option<Spectrum>,
    specific_absorption: BTreeMap<String, Spectrum>,
    specific_backscatter: BTreeMap<String, Spectrum>,
}

impl SiopSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit working grid instead of the reference spectrum's.
    pub fn grid(mut self, grid: Array1<FloatValue>) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn water_absorption(mut self, spectrum: Spectrum) -> Self {
        self.water_absorption = Some(spectrum);
        self
    }

    pub fn water_backscatter(mut self, spectrum: Spectrum) -> Self {
        self.water_backscatter = Some(spectrum);
        self
    }

    pub fn specific_absorption(
        mut self,
        constituent: impl Into<String>,
        spectrum: Spectrum,
    ) -> Self {
        self.specific_absorption.insert(constituent.into(), spectrum);
        self
    }

    pub fn specific_backscatter(
        mut self,
        constituent: impl Into<String>,
        spectrum: Spectrum,
    ) -> Self {
        self.specific_backscatter.insert(constituent.into(), spectrum);
        self
    }

    pub fn build(self) -> LittoralResult<SiopSet> {
        let water_absorption = self
            .water_absorption
            .ok_or_else(|| LittoralError::MissingSiop("pure water absorption".to_string()))?;
        let water_backscatter = self
            .water_backscatter
            .ok_or_else(|| LittoralError::MissingSiop("pure water backscatter".to_string()))?;

        let wavelengths = self
            .grid
            .unwrap_or_else(|| water_absorption.wavelengths().clone());

        let resample_all = |spectra: BTreeMap<String, Spectrum>| {
            spectra
                .into_iter()
                .map(|(name, spectrum)| Ok((name, spectrum.resample(&wavelengths)?)))
                .collect::<LittoralResult<BTreeMap<String, Spectrum>>>()
        };

        Ok(SiopSet {
            water_absorption: water_absorption.resample(&wavelengths)?,
            water_backscatter: water_backscatter.resample(&wavelengths)?,
            specific_absorption: resample_all(self.specific_absorption)?,
            specific_backscatter: resample_all(self.specific_backscatter)?,
            wavelengths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array;

    fn grid() -> Array1<FloatValue> {
        Array::range(400.0, 701.0, 10.0)
    }

    fn flat(value: FloatValue, grid: &Array1<FloatValue>) -> Spectrum {
        Spectrum::constant(value, grid).unwrap()
    }

    #[test]
    fn build_requires_pure_water_roles() {
        let missing_absorption = SiopSet::builder()
            .water_backscatter(flat(0.001, &grid()))
            .build();
        assert!(matches!(
            missing_absorption,
            Err(LittoralError::MissingSiop(_))
        ));

        let missing_backscatter = SiopSet::builder()
            .water_absorption(flat(0.02, &grid()))
            .build();
        assert!(matches!(
            missing_backscatter,
            Err(LittoralError::MissingSiop(_))
        ));
    }

    #[test]
    fn build_aligns_to_reference_grid() {
        // Phytoplankton absorption on a coarser grid than pure water
        let coarse = Array::range(400.0, 701.0, 50.0);
        let siops = SiopSet::builder()
            .water_absorption(flat(0.02, &grid()))
            .water_backscatter(flat(0.001, &grid()))
            .specific_absorption(CHLOROPHYLL, flat(0.05, &coarse))
            .build()
            .unwrap();

        assert_eq!(siops.wavelengths(), &grid());
        let aphy = siops.specific_absorption(CHLOROPHYLL).unwrap();
        assert_eq!(aphy.wavelengths(), &grid());
        assert_eq!(aphy.len(), grid().len());
    }

    #[test]
    fn build_honours_explicit_grid() {
        let working = Array::range(450.0, 651.0, 10.0);
        let siops = SiopSet::builder()
            .grid(working.clone())
            .water_absorption(flat(0.02, &grid()))
            .water_backscatter(flat(0.001, &grid()))
            .build()
            .unwrap();
        assert_eq!(siops.wavelengths(), &working);
    }

    #[test]
    fn build_fails_when_member_cannot_cover_grid() {
        // CDOM spectrum stops at 600 nm but the reference grid runs to 700 nm
        let short = Array::range(400.0, 601.0, 10.0);
        let result = SiopSet::builder()
            .water_absorption(flat(0.02, &grid()))
            .water_backscatter(flat(0.001, &grid()))
            .specific_absorption(CDOM, flat(0.4, &short))
            .build();
        assert!(matches!(result, Err(LittoralError::OutOfRange { .. })));
    }

    #[test]
    fn concentrations_accessors() {
        let concentrations = Concentrations::new()
            .with(CHLOROPHYLL, 0.5)
            .with(CDOM, 0.01)
            .with(NAP, 0.0);

        assert_eq!(concentrations.len(), 3);
        assert_eq!(concentrations.get(CHLOROPHYLL), Some(0.5));
        assert_eq!(concentrations.get("unknown"), None);

        let names: Vec<&str> = concentrations.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![CDOM, CHLOROPHYLL, NAP], "iteration is ordered");
    }
}
