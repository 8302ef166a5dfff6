//! Reflectance stage parameters.
//!
//! Constants of the Lee-style semi-analytical model: the deep-water
//! reflectance polynomial, the path-elongation factors for scattered
//! photons, and the air-water interface correction.

use serde::{Deserialize, Serialize};

/// Parameters of the subsurface and above-surface reflectance stage.
///
/// # Deep water
///
/// Subsurface reflectance of an optically deep column is a polynomial in
/// the single-scattering ratio $u = b_b / (a + b_b)$:
///
/// $$r_{rs}^{dp} = (g_0 + g_1 u) u$$
///
/// # Shallow water
///
/// The deep-water signal and the bottom signal are blended with exponential
/// attenuation over depth $H$, using path-elongation factors for photons
/// scattered in the water column ($D_C$) and reflected by the bottom
/// ($D_B$):
///
/// $$D_C = s_C \sqrt{1 + g_C u} \qquad D_B = s_B \sqrt{1 + g_B u}$$
///
/// # Interface
///
/// Above-surface reflectance follows the internal-reflection correction
///
/// $$R_{rs} = \zeta r_{rs} / (1 - \Gamma r_{rs})$$
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectanceParameters {
    /// Linear coefficient $g_0$ of the deep-water polynomial (1/sr).
    ///
    /// Default: 0.084
    pub deep_g0: f64,

    /// Quadratic coefficient $g_1$ of the deep-water polynomial (1/sr).
    ///
    /// Default: 0.17
    pub deep_g1: f64,

    /// Scale $s_C$ of the water-column path elongation.
    ///
    /// Default: 1.03
    pub column_elongation_scale: f64,

    /// Gain $g_C$ on $u$ inside the water-column elongation square root.
    ///
    /// Default: 2.4
    pub column_elongation_gain: f64,

    /// Scale $s_B$ of the bottom path elongation.
    ///
    /// Default: 1.04
    pub bottom_elongation_scale: f64,

    /// Gain $g_B$ on $u$ inside the bottom elongation square root.
    ///
    /// Default: 5.4
    pub bottom_elongation_gain: f64,

    /// Refractive index of seawater, used to refract the in-air zenith
    /// angles to their sub-surface values.
    ///
    /// Default: 1.333
    pub refractive_index: f64,

    /// Water-to-air transmission factor $\zeta$ of the interface
    /// correction.
    ///
    /// Default: 0.5
    pub interface_transmission: f64,

    /// Internal-reflection factor $\Gamma$ of the interface correction.
    ///
    /// Default: 1.5
    pub internal_reflection: f64,

    /// Depths at or below this value (metres) are rejected as invalid.
    ///
    /// Default: 0.0
    pub minimum_depth: f64,
}

impl Default for ReflectanceParameters {
    fn default() -> Self {
        Self {
            deep_g0: 0.084,
            deep_g1: 0.17,
            column_elongation_scale: 1.03,
            column_elongation_gain: 2.4,
            bottom_elongation_scale: 1.04,
            bottom_elongation_gain: 5.4,
            refractive_index: 1.333,
            interface_transmission: 0.5,
            internal_reflection: 1.5,
            minimum_depth: 0.0,
        }
    }
}
