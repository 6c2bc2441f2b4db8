pub mod crd;
pub mod error;
pub mod manifest;
pub mod validation;

pub use error::AppError;

/// The full `apiVersion` value rendered into every manifest.
pub const API_GROUP_VERSION: &str = "operator.victoriametrics.com/v1beta1";
