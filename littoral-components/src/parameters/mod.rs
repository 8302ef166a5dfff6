//! Forward model parameters.
//!
//! Each stage has an associated parameter struct with documented defaults
//! taken from the published semi-analytical model literature. The empirical
//! constants are injectable configuration, never hard-coded in the model
//! stages themselves.

mod model;
mod reflectance;
mod siop_model;

pub use model::ForwardModelParameters;
pub use reflectance::ReflectanceParameters;
pub use siop_model::SiopModelParameters;
