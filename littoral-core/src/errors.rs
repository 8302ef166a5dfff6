use thiserror::Error;

/// Error type for invalid model inputs and configurations.
///
/// Every variant indicates a condition the caller must fix; nothing here is
/// transient, so the model never retries or substitutes defaults.
#[derive(Error, Debug)]
pub enum LittoralError {
    #[error("{0}")]
    Error(String),
    #[error("invalid parameter {name}: {value} ({constraint})")]
    InvalidParameter {
        name: String,
        value: f64,
        constraint: String,
    },
    #[error("extrapolation is not allowed. Target={target} nm, sampled range=[{min}, {max}] nm")]
    OutOfRange { target: f64, min: f64, max: f64 },
    #[error("sensor band {0} has no response on the wavelength grid")]
    DisjointBand(String),
    #[error("wavelength grids differ: {0}")]
    GridMismatch(String),
    #[error("absorption and backscatter are both zero at {wavelength} nm")]
    DegenerateCoefficients { wavelength: f64 },
    #[error("SIOP set is missing the {0} spectrum")]
    MissingSiop(String),
}

/// Convenience type for `Result<T, LittoralError>`.
pub type LittoralResult<T> = Result<T, LittoralError>;
