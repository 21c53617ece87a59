//! Company Vetting Core
//!
//! Provides the validation pipeline that:
//! - Confirms the company exists in the camara de comercio
//! - Looks up the bank's restrictions against it
//! - Fetches the credit rating and regulator report in parallel
//! - Classifies failures into the two-kind public taxonomy

pub mod pipeline;
pub mod telemetry;

// Re-export key types
pub use pipeline::{ValidationPipeline, CREDIT_FALLBACK};
pub use telemetry::{init_tracing, LogFormat};
