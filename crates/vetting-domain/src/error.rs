//! Error taxonomy for company vetting.

use thiserror::Error;

/// Terminal outcome of a failed vetting run.
///
/// Exactly two kinds exist. `CompanyNotFound` is produced only when the
/// existence check yields no value, and it is the one kind that crosses
/// the public contract untouched. Everything else collapses into
/// `Generic`: the original cause is logged by the pipeline and then
/// deliberately discarded, so callers see one uniform failure shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The company could not be located in the camara de comercio.
    #[error("company not found in camara de comercio")]
    CompanyNotFound,

    /// Any other downstream failure, cause withheld.
    #[error("company validation failed")]
    Generic,
}

/// Failure surfaced by a gateway operation.
///
/// Adapters are free to carry arbitrary transport causes through the
/// `Other` variant; the pipeline never inspects them beyond logging.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The downstream service could not be reached.
    #[error("downstream service unavailable: {0}")]
    Unavailable(String),

    /// The downstream service answered with an error.
    #[error("downstream call failed: {0}")]
    Downstream(String),

    /// Any other cause from the adapter.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::CompanyNotFound.to_string(),
            "company not found in camara de comercio"
        );
        assert_eq!(
            ValidationError::Generic.to_string(),
            "company validation failed"
        );
    }

    #[test]
    fn test_gateway_error_from_anyhow() {
        let err: GatewayError = anyhow::anyhow!("socket reset").into();
        assert_eq!(err.to_string(), "socket reset");
    }
}
