//! Decoding of CertificateRequest manifests.
//!
//! The shape is enforced by serde only; no further checks are applied.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::api::CertificateRequest;
use crate::error::Error;
use crate::types::Result;

/// Decode a request from YAML text
pub fn from_yaml_str(yaml: &str) -> Result<CertificateRequest> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Decode a request from JSON text
pub fn from_json_str(json: &str) -> Result<CertificateRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a request from a file. `.json` files are read as JSON, everything else as YAML.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CertificateRequest> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let req = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json_str(&content)?,
        Some("yaml") | Some("yml") | None => from_yaml_str(&content)?,
        Some(other) => {
            return Err(Error::UnsupportedFormat(format!(
                "{} (expected .yaml, .yml or .json)",
                other
            )))
        }
    };

    debug!(
        "Loaded {} from {} with {} condition(s)",
        req.display_name(),
        path.display(),
        req.status.conditions.len()
    );
    Ok(req)
}
