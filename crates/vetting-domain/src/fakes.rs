//! In-memory scripted gateway for testing.
//!
//! `ScriptedGateway` satisfies `CompanyServicesGateway` without any
//! external dependencies. Behavior is keyed by company name, mirroring
//! how the real downstream services answer differently per subject, and
//! every operation keeps an atomic call counter so tests can assert
//! exactly-once invocation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::company::{Company, CreditRating, Report, Restriction};
use crate::error::{GatewayError, GatewayResult};
use crate::gateway::CompanyServicesGateway;

/// Scripted in-memory gateway.
///
/// Defaults: every company exists (`Some(true)`), carries one
/// restriction named "blah", rates `LowRisk`, and has a report named
/// "foobar". Per-company overrides are configured with the builder
/// methods before the gateway is shared.
pub struct ScriptedGateway {
    existence: HashMap<String, Option<bool>>,
    failing_restrictions: HashMap<String, String>,
    failing_credit: HashMap<String, String>,
    failing_reports: HashMap<String, String>,
    default_restrictions: Vec<Restriction>,
    default_credit: CreditRating,
    default_report: Report,
    credit_delay: Duration,
    existence_calls: AtomicUsize,
    restriction_calls: AtomicUsize,
    credit_calls: AtomicUsize,
    report_calls: AtomicUsize,
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self {
            existence: HashMap::new(),
            failing_restrictions: HashMap::new(),
            failing_credit: HashMap::new(),
            failing_reports: HashMap::new(),
            default_restrictions: vec![Restriction::new("blah")],
            default_credit: CreditRating::LowRisk,
            default_report: Report::new("foobar"),
            // The credit bureau is slow blocking IO; keep a real delay
            // so the stage-3 join overlaps work in tests.
            credit_delay: Duration::from_millis(20),
            existence_calls: AtomicUsize::new(0),
            restriction_calls: AtomicUsize::new(0),
            credit_calls: AtomicUsize::new(0),
            report_calls: AtomicUsize::new(0),
        }
    }
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the existence check for one company. `None` means the
    /// registry yields no value at all.
    pub fn existence_yields(mut self, company: &str, outcome: Option<bool>) -> Self {
        self.existence.insert(company.to_string(), outcome);
        self
    }

    /// Script the restriction lookup to fail for one company.
    pub fn restrictions_fail(mut self, company: &str, cause: &str) -> Self {
        self.failing_restrictions
            .insert(company.to_string(), cause.to_string());
        self
    }

    /// Script the blocking credit check to fail for one company.
    pub fn credit_fails(mut self, company: &str, cause: &str) -> Self {
        self.failing_credit
            .insert(company.to_string(), cause.to_string());
        self
    }

    /// Script the regulator report fetch to fail for one company.
    pub fn report_fails(mut self, company: &str, cause: &str) -> Self {
        self.failing_reports
            .insert(company.to_string(), cause.to_string());
        self
    }

    /// Override the default credit bureau answer.
    pub fn default_credit(mut self, rating: CreditRating) -> Self {
        self.default_credit = rating;
        self
    }

    /// Override how long the blocking credit check occupies its thread.
    pub fn credit_delay(mut self, delay: Duration) -> Self {
        self.credit_delay = delay;
        self
    }

    pub fn existence_call_count(&self) -> usize {
        self.existence_calls.load(Ordering::SeqCst)
    }

    pub fn restriction_call_count(&self) -> usize {
        self.restriction_calls.load(Ordering::SeqCst)
    }

    pub fn credit_call_count(&self) -> usize {
        self.credit_calls.load(Ordering::SeqCst)
    }

    pub fn report_call_count(&self) -> usize {
        self.report_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompanyServicesGateway for ScriptedGateway {
    async fn validate_in_camara_comercio(&self, company: &Company) -> GatewayResult<Option<bool>> {
        self.existence_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .existence
            .get(&company.name)
            .copied()
            .unwrap_or(Some(true)))
    }

    async fn get_restrictions_bancolombia(
        &self,
        company: &Company,
    ) -> GatewayResult<Vec<Restriction>> {
        self.restriction_calls.fetch_add(1, Ordering::SeqCst);
        match self.failing_restrictions.get(&company.name) {
            Some(cause) => Err(GatewayError::Downstream(cause.clone())),
            None => Ok(self.default_restrictions.clone()),
        }
    }

    fn get_state_data_credito(&self, company: &Company) -> GatewayResult<CreditRating> {
        self.credit_calls.fetch_add(1, Ordering::SeqCst);
        // Blocking by contract: occupy the calling thread.
        std::thread::sleep(self.credit_delay);
        match self.failing_credit.get(&company.name) {
            Some(cause) => Err(GatewayError::Unavailable(cause.clone())),
            None => Ok(self.default_credit),
        }
    }

    async fn get_report_super_intendencia(&self, company: &Company) -> GatewayResult<Report> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);
        match self.failing_reports.get(&company.name) {
            Some(cause) => Err(GatewayError::Downstream(cause.clone())),
            None => Ok(self.default_report.clone()),
        }
    }
}
