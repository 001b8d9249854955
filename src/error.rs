use thiserror::Error;

/// Errors raised while resolving CRS definitions.
///
/// Coordinate conversion itself never fails; out-of-domain input yields
/// `NaN`/infinite coordinates instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Unknown spheroid: {0}")]
    UnknownSpheroid(String),

    #[error("Unknown datum: {0}")]
    UnknownDatum(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
