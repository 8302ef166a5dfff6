//! Total inherent optical properties from SIOPs and concentrations.
//!
//! The total coefficients are linear superpositions of the pure-water
//! spectra and the concentration-weighted specific spectra:
//!
//! $$a(\lambda) = a_w(\lambda) + \sum_c C_c \, a^*_c(\lambda)$$
//! $$b_b(\lambda) = b_{b,w}(\lambda) + \sum_c C_c \, b_b^*{}_c(\lambda)$$
//!
//! Every constituent with a concentration entry must have a specific
//! absorption spectrum registered. Specific backscatter roles are optional
//! per constituent; CDOM, for instance, absorbs without backscattering.

use littoral_core::errors::{LittoralError, LittoralResult};
use littoral_core::siop::{Concentrations, SiopSet};
use littoral_core::spectrum::Spectrum;

fn validate(concentrations: &Concentrations) -> LittoralResult<()> {
    for (name, value) in concentrations.iter() {
        if value < 0.0 {
            return Err(LittoralError::InvalidParameter {
                name: format!("concentration of {name}"),
                value,
                constraint: "must be non-negative".to_string(),
            });
        }
    }
    Ok(())
}

fn absorption(siops: &SiopSet, concentrations: &Concentrations) -> LittoralResult<Spectrum> {
    let mut total = siops.water_absorption().values().clone();
    for (name, value) in concentrations.iter() {
        let specific = siops.specific_absorption(name).ok_or_else(|| {
            LittoralError::MissingSiop(format!("specific absorption for {name}"))
        })?;
        total.scaled_add(value, specific.values());
    }
    Spectrum::from_values(total, siops.wavelengths().clone())
}

fn backscatter(siops: &SiopSet, concentrations: &Concentrations) -> LittoralResult<Spectrum> {
    let mut total = siops.water_backscatter().values().clone();
    for (name, value) in concentrations.iter() {
        if let Some(specific) = siops.specific_backscatter(name) {
            total.scaled_add(value, specific.values());
        }
    }
    Spectrum::from_values(total, siops.wavelengths().clone())
}

/// Total absorption coefficient spectrum (1/m).
pub fn total_absorption(
    siops: &SiopSet,
    concentrations: &Concentrations,
) -> LittoralResult<Spectrum> {
    validate(concentrations)?;
    absorption(siops, concentrations)
}

/// Total backscattering coefficient spectrum (1/m).
pub fn total_backscatter(
    siops: &SiopSet,
    concentrations: &Concentrations,
) -> LittoralResult<Spectrum> {
    validate(concentrations)?;
    backscatter(siops, concentrations)
}

/// Both total coefficients with a single validation pass.
pub fn optical_coefficients(
    siops: &SiopSet,
    concentrations: &Concentrations,
) -> LittoralResult<(Spectrum, Spectrum)> {
    validate(concentrations)?;
    Ok((
        absorption(siops, concentrations)?,
        backscatter(siops, concentrations)?,
    ))
}
