//! Value records for the company vetting domain.

use serde::{Deserialize, Serialize};

/// The subject being vetted. Owned by the caller and never mutated
/// by the pipeline; stages only read it and clone it into results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Registered company name, the lookup key for every downstream check.
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Risk tier reported by the credit bureau.
///
/// `MidRisk` doubles as the sentinel substituted when the credit check
/// fails (see the pipeline's recovery policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditRating {
    LowRisk,
    MidRisk,
    HighRisk,
}

/// A constraint the bank holds against the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    pub name: String,
}

impl Restriction {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A regulator report record from the superintendencia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
}

impl Report {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Aggregate result of the vetting pipeline.
///
/// Built incrementally: each stage consumes the previous value and
/// returns a new one with more fields populated, so concurrent stages
/// never share a mutable instance. A field set by an earlier stage is
/// carried unchanged into every later copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub company: Company,
    pub exist_in_camara_comercio: bool,
    pub credit_rating: Option<CreditRating>,
    pub restrictions: Option<Vec<Restriction>>,
    pub report: Option<Report>,
}

impl Validation {
    /// Seed a validation from the existence check. A `false` existence
    /// result is a valid outcome and still produces a validation.
    pub fn new(company: Company, exist_in_camara_comercio: bool) -> Self {
        Self {
            company,
            exist_in_camara_comercio,
            credit_rating: None,
            restrictions: None,
            report: None,
        }
    }

    /// Functional update: returns a copy with the bank restrictions set.
    pub fn with_restrictions(self, restrictions: Vec<Restriction>) -> Self {
        Self {
            restrictions: Some(restrictions),
            ..self
        }
    }

    /// Functional update: returns a copy with both stage-3 results set.
    pub fn with_credit_and_report(self, credit_rating: CreditRating, report: Report) -> Self {
        Self {
            credit_rating: Some(credit_rating),
            report: Some(report),
            ..self
        }
    }

    /// Whether every pipeline stage has populated its fields.
    pub fn is_complete(&self) -> bool {
        self.credit_rating.is_some() && self.restrictions.is_some() && self.report.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_seeded_from_existence_check() {
        let validation = Validation::new(Company::new("Ferreteria Especial"), true);
        assert!(validation.exist_in_camara_comercio);
        assert!(validation.credit_rating.is_none());
        assert!(validation.restrictions.is_none());
        assert!(validation.report.is_none());
        assert!(!validation.is_complete());
    }

    #[test]
    fn test_false_existence_is_a_valid_seed() {
        let validation = Validation::new(Company::new("Sin Registro SAS"), false);
        assert!(!validation.exist_in_camara_comercio);
    }

    #[test]
    fn test_functional_update_preserves_earlier_fields() {
        let validation = Validation::new(Company::new("Ferreteria Especial"), true)
            .with_restrictions(vec![Restriction::new("blah")])
            .with_credit_and_report(CreditRating::LowRisk, Report::new("foobar"));

        assert!(validation.exist_in_camara_comercio);
        assert_eq!(
            validation.restrictions.as_deref(),
            Some(&[Restriction::new("blah")][..])
        );
        assert_eq!(validation.credit_rating, Some(CreditRating::LowRisk));
        assert_eq!(validation.report, Some(Report::new("foobar")));
        assert!(validation.is_complete());
    }

    #[test]
    fn test_credit_rating_ordering() {
        assert!(CreditRating::LowRisk < CreditRating::MidRisk);
        assert!(CreditRating::MidRisk < CreditRating::HighRisk);
    }

    #[test]
    fn test_credit_rating_serde_snake_case() {
        let json = serde_json::to_string(&CreditRating::MidRisk).unwrap();
        assert_eq!(json, "\"mid_risk\"");
        let back: CreditRating = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CreditRating::MidRisk);
    }
}
