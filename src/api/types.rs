use std::collections::BTreeMap;
use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// API group/version of the resource
pub const API_VERSION: &str = "cert-manager.io/v1";

/// Kind of the resource
pub const KIND: &str = "CertificateRequest";

/// Tri-state condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionStatus {
    /// Condition holds
    True,
    /// Condition does not hold
    False,
    /// Controller cannot decide yet
    Unknown,
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionStatus::True => write!(f, "True"),
            ConditionStatus::False => write!(f, "False"),
            ConditionStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Condition type tag
///
/// Tags not known to this crate are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificateRequestConditionType {
    /// Certificate has been issued
    Ready,
    /// Request can never be fulfilled
    InvalidRequest,
    /// Request has been approved for signing
    Approved,
    /// Request has been denied and will never be signed
    Denied,
    /// Any other request-specific tag
    Other(String),
}

impl CertificateRequestConditionType {
    /// Wire name of the tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "Ready",
            Self::InvalidRequest => "InvalidRequest",
            Self::Approved => "Approved",
            Self::Denied => "Denied",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for CertificateRequestConditionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Ready" => Self::Ready,
            "InvalidRequest" => Self::InvalidRequest,
            "Approved" => Self::Approved,
            "Denied" => Self::Denied,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for CertificateRequestConditionType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<CertificateRequestConditionType> for String {
    fn from(tag: CertificateRequestConditionType) -> Self {
        match tag {
            CertificateRequestConditionType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CertificateRequestConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single status condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestCondition {
    /// Condition type
    #[serde(rename = "type")]
    pub condition_type: CertificateRequestConditionType,
    /// Condition status
    pub status: ConditionStatus,
    /// Machine readable reason for the last transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human readable details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Last time the status changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
    /// Generation the condition was set against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl CertificateRequestCondition {
    /// Create a condition with no bookkeeping fields set
    pub fn new(condition_type: impl Into<CertificateRequestConditionType>, status: ConditionStatus) -> Self {
        Self {
            condition_type: condition_type.into(),
            status,
            reason: None,
            message: None,
            last_transition_time: None,
            observed_generation: None,
        }
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Object metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// Reference to the issuer that should sign the request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Desired state of the request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestSpec {
    /// PEM encoded CSR, base64 encoded on the wire
    #[serde(default)]
    pub request: String,
    #[serde(default)]
    pub issuer_ref: IssuerReference,
    /// Requested lifetime, e.g. "2160h"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usages: Vec<String>,
    #[serde(rename = "isCA", default)]
    pub is_ca: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

/// Observed state of the request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestStatus {
    /// Ordered conditions; the first entry of a given type is authoritative
    #[serde(default)]
    pub conditions: Vec<CertificateRequestCondition>,
    /// Signed certificate, PEM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// Issuing CA, PEM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
    /// Time the request was marked failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_time: Option<DateTime<Utc>>,
}

/// A cert-manager CertificateRequest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequest {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: CertificateRequestSpec,
    #[serde(default)]
    pub status: CertificateRequestStatus,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    KIND.to_string()
}

impl Default for CertificateRequest {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta::default(),
            spec: CertificateRequestSpec::default(),
            status: CertificateRequestStatus::default(),
        }
    }
}

impl CertificateRequest {
    /// Create an empty request with the given name and namespace
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let mut req = Self::default();
        req.metadata.name = Some(name.into());
        req.metadata.namespace = Some(namespace.into());
        req
    }

    /// Replace the status conditions
    pub fn with_conditions(mut self, conditions: Vec<CertificateRequestCondition>) -> Self {
        self.status.conditions = conditions;
        self
    }

    /// `namespace/name`, or whichever part is known
    pub fn display_name(&self) -> String {
        match (&self.metadata.namespace, &self.metadata.name) {
            (Some(ns), Some(name)) => format!("{}/{}", ns, name),
            (None, Some(name)) => name.clone(),
            (Some(ns), None) => format!("{}/<unnamed>", ns),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}
