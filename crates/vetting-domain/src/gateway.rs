//! Gateway contract for the four downstream company checks.
//!
//! The transport behind each operation (HTTP, queue, mainframe bridge)
//! is an adapter concern; the pipeline depends only on this trait.
//! In-memory scripted fakes are provided for testing via the `fakes`
//! module.

use async_trait::async_trait;

use crate::company::{Company, CreditRating, Report, Restriction};
use crate::error::GatewayResult;

/// The four downstream operations needed to vet a company.
///
/// Contract per operation:
/// - `validate_in_camara_comercio` may legitimately yield no value
///   (`Ok(None)`); callers treat that as "company not found".
///   `Ok(Some(false))` is a successful answer, not a failure.
/// - `get_restrictions_bancolombia` and `get_report_super_intendencia`
///   are non-blocking; their errors propagate to the caller.
/// - `get_state_data_credito` is blocking IO by contract, hence a
///   synchronous method: callers must dispatch it onto a blocking-safe
///   worker pool, never on the async executor itself. Its errors are
///   absorbed by the caller with a fixed fallback rating.
#[async_trait]
pub trait CompanyServicesGateway: Send + Sync {
    /// Whether the company exists in the camara de comercio, or no
    /// value if the registry has no answer for it.
    async fn validate_in_camara_comercio(&self, company: &Company) -> GatewayResult<Option<bool>>;

    /// Restrictions the bank holds against the company, possibly empty.
    async fn get_restrictions_bancolombia(
        &self,
        company: &Company,
    ) -> GatewayResult<Vec<Restriction>>;

    /// Credit bureau risk tier. Blocking IO: occupies the calling
    /// thread for the duration of the call.
    fn get_state_data_credito(&self, company: &Company) -> GatewayResult<CreditRating>;

    /// Regulator report for the company from the superintendencia.
    async fn get_report_super_intendencia(&self, company: &Company) -> GatewayResult<Report>;
}
