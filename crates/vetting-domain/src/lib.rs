//! Company Vetting Domain Model
//!
//! Defines the value records, gateway contract, and error taxonomy
//! shared by the vetting pipeline and its adapters:
//! - `Company`: the subject under validation
//! - `Validation`: the aggregate result, built by functional update
//! - `CreditRating`, `Restriction`, `Report`: downstream answers
//! - `CompanyServicesGateway`: the four downstream operations
//! - `ValidationError`: the two-kind public failure taxonomy
//!
//! In-memory scripted fakes are provided for testing via the `fakes`
//! module.

mod company;
mod error;
pub mod fakes;
mod gateway;

pub use company::{Company, CreditRating, Report, Restriction, Validation};
pub use error::{GatewayError, GatewayResult, ValidationError};
pub use gateway::CompanyServicesGateway;
