//! Company validation pipeline orchestration.

use std::sync::Arc;

use tokio::task;
use tracing::{info, warn};

use vetting_domain::{
    Company, CompanyServicesGateway, CreditRating, GatewayError, Validation, ValidationError,
};

/// Rating substituted when the blocking credit check fails. This is the
/// only locally-recovered failure in the pipeline.
pub const CREDIT_FALLBACK: CreditRating = CreditRating::MidRisk;

/// Orchestrates the three-stage vetting pipeline:
///
/// 1. Existence check against the camara de comercio. No value means
///    the run terminates with `CompanyNotFound` and nothing downstream
///    is called; a `false` answer is a successful result.
/// 2. Restriction lookup at the bank, strictly after stage 1.
/// 3. Credit check and regulator report fetched concurrently. The
///    credit check is blocking IO and runs on the blocking pool; its
///    failures are absorbed with [`CREDIT_FALLBACK`]. The stage
///    completes once both answers are in.
///
/// Every other downstream failure is logged and reclassified to
/// `ValidationError::Generic`; the cause never reaches the caller.
/// Each invocation owns its own `Validation` chain, so concurrent runs
/// share no mutable state.
pub struct ValidationPipeline {
    gateway: Arc<dyn CompanyServicesGateway>,
}

impl ValidationPipeline {
    pub fn new(gateway: Arc<dyn CompanyServicesGateway>) -> Self {
        Self { gateway }
    }

    /// Run the full pipeline for one company.
    ///
    /// Each gateway operation that is needed is invoked exactly once;
    /// nothing is retried or duplicated.
    pub async fn validate_company(
        &self,
        company: &Company,
    ) -> Result<Validation, ValidationError> {
        info!(company = %company, "Starting company validation");

        let seeded = match self.check_company_in_camara_comercio(company).await {
            Ok(Some(validation)) => validation,
            Ok(None) => {
                info!(company = %company, "Company not found in camara de comercio");
                return Err(ValidationError::CompanyNotFound);
            }
            Err(err) => return Err(reclassify(company, "camara de comercio lookup", err)),
        };

        let with_restrictions = self
            .search_restrictions_in_banco(seeded)
            .await
            .map_err(|err| reclassify(company, "bank restriction lookup", err))?;

        let complete = self
            .check_data_credito_and_super_in_parallel(with_restrictions)
            .await
            .map_err(|err| reclassify(company, "superintendencia report", err))?;

        info!(company = %company, "Company validation completed");
        Ok(complete)
    }

    /// Stage 1: seed the validation from the existence check. `None`
    /// means the registry yielded no value for this company.
    async fn check_company_in_camara_comercio(
        &self,
        company: &Company,
    ) -> Result<Option<Validation>, GatewayError> {
        let answer = self.gateway.validate_in_camara_comercio(company).await?;
        Ok(answer.map(|exists| Validation::new(company.clone(), exists)))
    }

    /// Stage 2: attach the bank's restrictions to a copy of the
    /// validation.
    async fn search_restrictions_in_banco(
        &self,
        validation: Validation,
    ) -> Result<Validation, GatewayError> {
        let restrictions = self
            .gateway
            .get_restrictions_bancolombia(&validation.company)
            .await?;
        Ok(validation.with_restrictions(restrictions))
    }

    /// Stage 3: fan out to the credit bureau and the superintendencia,
    /// join both answers, and attach them to a copy of the validation.
    ///
    /// The credit check is blocking by contract, so it is dispatched to
    /// the blocking pool instead of occupying the async executor. Its
    /// failures, including a panicked worker, fall back to
    /// [`CREDIT_FALLBACK`] and never fail the run.
    async fn check_data_credito_and_super_in_parallel(
        &self,
        validation: Validation,
    ) -> Result<Validation, GatewayError> {
        let report_future = self
            .gateway
            .get_report_super_intendencia(&validation.company);

        let gateway = Arc::clone(&self.gateway);
        let subject = validation.company.clone();
        let credit_task = task::spawn_blocking(move || gateway.get_state_data_credito(&subject));

        // Join semantics: the stage completes only once both branches
        // have produced a value, whichever finishes first.
        let (report, credit) = tokio::join!(report_future, credit_task);
        let report = report?;

        let credit_rating = match credit {
            Ok(Ok(rating)) => rating,
            Ok(Err(err)) => {
                warn!(
                    company = %validation.company,
                    error = %err,
                    "Credit check failed, using fallback rating"
                );
                CREDIT_FALLBACK
            }
            Err(err) => {
                warn!(
                    company = %validation.company,
                    error = %err,
                    "Credit check worker aborted, using fallback rating"
                );
                CREDIT_FALLBACK
            }
        };

        Ok(validation.with_credit_and_report(credit_rating, report))
    }
}

/// Collapse a downstream failure into the uniform `Generic` kind. The
/// cause is logged here and then deliberately withheld from the caller.
fn reclassify(company: &Company, operation: &str, err: GatewayError) -> ValidationError {
    warn!(
        company = %company,
        operation,
        error = %err,
        "Downstream failure reclassified as generic validation error"
    );
    ValidationError::Generic
}
