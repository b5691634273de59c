pub mod types;

// Re-export key types
pub use types::{
    CertificateRequest, CertificateRequestCondition, CertificateRequestConditionType,
    CertificateRequestSpec, CertificateRequestStatus, ConditionStatus, IssuerReference, ObjectMeta,
    API_VERSION, KIND,
};
