//! certreq-status - condition lookup for cert-manager CertificateRequests
//!
//! Answers whether a CertificateRequest snapshot has been approved, denied
//! or issued, based on its status conditions.

// Foundational layer
pub mod error;
pub mod types;
pub mod config;
pub mod telemetry;

// Core layer
pub mod api;
pub mod conditions;
pub mod manifest;

// Interface layer
pub mod cli;

// Public key types
pub use crate::error::Error;
pub use crate::types::{OutputFormat, Result};
pub use crate::api::{
    CertificateRequest, CertificateRequestCondition, CertificateRequestConditionType, ConditionStatus,
};
pub use crate::conditions::{
    find_condition, has_condition, is_approved, is_denied, is_ready, RequestSummary,
};
