//! Analytic SIOP parameterisation constants.

use serde::{Deserialize, Serialize};

/// Parameters of the analytic SIOP spectrum parameterisations.
///
/// Pure seawater backscatter follows a power law in wavelength (Mobley,
/// *Radiative Transfer in Natural Waters*, 1994):
///
/// $$b_{b,w}(\lambda) = b_{b,w}(\lambda_{ref}) (\lambda_{ref} / \lambda)^{n_w}$$
///
/// CDOM and non-algal particle absorption decay exponentially from their
/// reference wavelengths:
///
/// $$a^*(\lambda) = a^*(\lambda_0) e^{-S (\lambda - \lambda_0)}$$
///
/// Particulate backscatter shares one power-law shape, scaled by a
/// per-constituent magnitude at the particulate reference wavelength:
///
/// $$b_b^*(\lambda) = X (\lambda_{0x} / \lambda)^{Y}$$
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiopModelParameters {
    /// Pure seawater backscatter at the reference wavelength (1/m).
    ///
    /// Default: 0.00097 (half the pure seawater scattering coefficient)
    pub water_backscatter_at_reference: f64,

    /// Exponent $n_w$ of the pure seawater backscatter power law.
    ///
    /// Default: 4.32
    pub water_backscatter_exponent: f64,

    /// Reference wavelength of the pure seawater power law (nm).
    ///
    /// Default: 550.0
    pub water_reference_wavelength: f64,

    /// CDOM specific absorption at its reference wavelength (1/m per unit).
    ///
    /// Default: 1.0
    pub cdom_absorption_at_reference: f64,

    /// Exponential slope $S_{CDOM}$ of CDOM absorption (1/nm).
    ///
    /// Default: 0.0168052
    pub cdom_slope: f64,

    /// Reference wavelength $\lambda_0$ of CDOM absorption (nm).
    ///
    /// Default: 550.0
    pub cdom_reference_wavelength: f64,

    /// Non-algal particle specific absorption at its reference wavelength
    /// (1/m per unit).
    ///
    /// Default: 0.00433
    pub nap_absorption_at_reference: f64,

    /// Exponential slope $S_{NAP}$ of NAP absorption (1/nm).
    ///
    /// Default: 0.00977262
    pub nap_slope: f64,

    /// Reference wavelength $\lambda_0$ of NAP absorption (nm).
    ///
    /// Default: 550.0
    pub nap_reference_wavelength: f64,

    /// Reference wavelength $\lambda_{0x}$ of the particulate backscatter
    /// power law (nm).
    ///
    /// Default: 546.0
    pub particulate_reference_wavelength: f64,

    /// Exponent $Y$ of the particulate backscatter power law.
    ///
    /// Default: 0.878138
    pub particulate_backscatter_exponent: f64,

    /// Phytoplankton specific backscatter magnitude $X_{ph}$ at the
    /// particulate reference wavelength (1/m per unit).
    ///
    /// Default: 0.00157747
    pub phytoplankton_backscatter_at_reference: f64,

    /// Non-algal particle specific backscatter magnitude $X_{NAP}$ at the
    /// particulate reference wavelength (1/m per unit).
    ///
    /// Default: 0.0225353
    pub nap_backscatter_at_reference: f64,
}

impl Default for SiopModelParameters {
    fn default() -> Self {
        Self {
            water_backscatter_at_reference: 0.00097,
            water_backscatter_exponent: 4.32,
            water_reference_wavelength: 550.0,

            cdom_absorption_at_reference: 1.0,
            cdom_slope: 0.0168052,
            cdom_reference_wavelength: 550.0,

            nap_absorption_at_reference: 0.00433,
            nap_slope: 0.00977262,
            nap_reference_wavelength: 550.0,

            particulate_reference_wavelength: 546.0,
            particulate_backscatter_exponent: 0.878138,
            phytoplankton_backscatter_at_reference: 0.00157747,
            nap_backscatter_at_reference: 0.0225353,
        }
    }
}
