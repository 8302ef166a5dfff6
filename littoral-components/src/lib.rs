//! Components of the littoral shallow-water optical forward model.
//!
//! The model turns constituent concentrations, a benthic substrate, a water
//! column geometry, and a set of specific inherent optical property (SIOP)
//! spectra into the remote-sensing reflectance a sensor would observe above
//! the water surface, exposing every intermediate along the way.
//!
//! # Module Organisation
//!
//! - `iop`: total absorption and backscattering coefficients by linear
//!   superposition of SIOPs and concentrations
//! - `reflectance`: semi-analytical subsurface and above-surface
//!   reflectance of a shallow water column over a reflective bottom
//! - `sensor`: band convolution against relative spectral response filters
//! - `pipeline`: the façade threading one sample through every stage
//! - `siop_models`: analytic SIOP spectrum parameterisations
//! - `parameters`: parameter structs with documented defaults
//!
//! Every stage is a pure function over immutable inputs; batch runs across
//! samples or wavelengths share the SIOP and filter sets read-only, with no
//! synchronisation.

pub mod iop;
pub mod parameters;
pub mod pipeline;
pub mod reflectance;
pub mod sensor;
pub mod siop_models;
