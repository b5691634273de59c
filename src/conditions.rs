//! Condition lookup and status predicates for CertificateRequests.
//!
//! Every query scans `status.conditions` in order and stops at the first
//! entry of the requested type. Later entries of the same type are ignored,
//! even when they disagree with the first.

use serde::Serialize;
use tracing::trace;

use crate::api::{
    CertificateRequest, CertificateRequestCondition, CertificateRequestConditionType, ConditionStatus,
};

/// Return a copy of the first condition of `condition_type`, if any.
pub fn find_condition(
    req: &CertificateRequest,
    condition_type: &CertificateRequestConditionType,
) -> Option<CertificateRequestCondition> {
    req.status
        .conditions
        .iter()
        .find(|cond| &cond.condition_type == condition_type)
        .cloned()
}

/// True if the first condition of `condition_type` has exactly `status`.
///
/// A missing request or a missing condition yields `false`.
pub fn has_condition(
    req: Option<&CertificateRequest>,
    condition_type: &CertificateRequestConditionType,
    status: ConditionStatus,
) -> bool {
    let Some(req) = req else {
        return false;
    };

    let matched = req
        .status
        .conditions
        .iter()
        .find(|cond| &cond.condition_type == condition_type)
        .map_or(false, |cond| cond.status == status);

    trace!(
        request = %req.display_name(),
        condition = %condition_type,
        %status,
        matched,
        "Checked condition"
    );
    matched
}

/// Returns true if the request carries an `Approved` condition of status `True`.
pub fn is_approved(req: Option<&CertificateRequest>) -> bool {
    has_condition(req, &CertificateRequestConditionType::Approved, ConditionStatus::True)
}

/// Returns true if the request carries a `Denied` condition of status `True`.
pub fn is_denied(req: Option<&CertificateRequest>) -> bool {
    has_condition(req, &CertificateRequestConditionType::Denied, ConditionStatus::True)
}

/// Returns true if the request carries a `Ready` condition of status `True`.
pub fn is_ready(req: Option<&CertificateRequest>) -> bool {
    has_condition(req, &CertificateRequestConditionType::Ready, ConditionStatus::True)
}

/// Point-in-time view of a request's approval state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSummary {
    /// `namespace/name` of the request
    pub name: String,
    /// Approved=True
    pub approved: bool,
    /// Denied=True
    pub denied: bool,
    /// Ready=True
    pub ready: bool,
    /// Conditions as found on the request
    pub conditions: Vec<CertificateRequestCondition>,
}

impl RequestSummary {
    /// Summarize a request snapshot
    pub fn from_request(req: &CertificateRequest) -> Self {
        Self {
            name: req.display_name(),
            approved: is_approved(Some(req)),
            denied: is_denied(Some(req)),
            ready: is_ready(Some(req)),
            conditions: req.status.conditions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(tag: &str, status: ConditionStatus) -> CertificateRequestCondition {
        CertificateRequestCondition::new(tag, status)
    }

    fn request(conditions: Vec<CertificateRequestCondition>) -> CertificateRequest {
        CertificateRequest::new("test-cr", "default").with_conditions(conditions)
    }

    #[test]
    fn test_find_condition_returns_first_match() {
        let req = request(vec![
            cond("Ready", ConditionStatus::False).with_reason("Pending"),
            cond("Approved", ConditionStatus::False).with_reason("First"),
            cond("Approved", ConditionStatus::True).with_reason("Second"),
        ]);

        let found = find_condition(&req, &CertificateRequestConditionType::Approved).unwrap();
        assert_eq!(found.status, ConditionStatus::False);
        assert_eq!(found.reason.as_deref(), Some("First"));
    }

    #[test]
    fn test_find_condition_not_found() {
        let req = request(vec![cond("Ready", ConditionStatus::True)]);
        assert!(find_condition(&req, &CertificateRequestConditionType::Denied).is_none());
    }

    #[test]
    fn test_find_condition_returns_independent_copy() {
        let mut req = request(vec![cond("Approved", ConditionStatus::True)]);

        let found = find_condition(&req, &CertificateRequestConditionType::Approved).unwrap();
        req.status.conditions[0].status = ConditionStatus::False;

        assert_eq!(found.status, ConditionStatus::True);
    }

    #[test]
    fn test_find_condition_other_type() {
        let req = request(vec![cond("example.com/Vetted", ConditionStatus::Unknown)]);

        let found = find_condition(&req, &"example.com/Vetted".into()).unwrap();
        assert_eq!(found.status, ConditionStatus::Unknown);
    }

    #[test]
    fn test_missing_request_is_neither_approved_nor_denied() {
        assert!(!is_approved(None));
        assert!(!is_denied(None));
        assert!(!is_ready(None));
    }

    #[test]
    fn test_empty_conditions() {
        let req = request(vec![]);

        assert!(find_condition(&req, &CertificateRequestConditionType::Approved).is_none());
        assert!(!is_approved(Some(&req)));
        assert!(!is_denied(Some(&req)));
    }

    #[test]
    fn test_approved_true() {
        let req = request(vec![
            cond("Ready", ConditionStatus::False),
            cond("Approved", ConditionStatus::True),
        ]);

        assert!(is_approved(Some(&req)));
        assert!(!is_denied(Some(&req)));
    }

    #[test]
    fn test_approved_requires_exact_true() {
        for status in [ConditionStatus::False, ConditionStatus::Unknown] {
            let req = request(vec![cond("Approved", status), cond("Denied", status)]);
            assert!(!is_approved(Some(&req)), "status {} counted as approved", status);
            assert!(!is_denied(Some(&req)), "status {} counted as denied", status);
        }
    }

    #[test]
    fn test_first_approved_condition_wins() {
        let req = request(vec![
            cond("Approved", ConditionStatus::False),
            cond("Approved", ConditionStatus::True),
        ]);

        assert_eq!(
            find_condition(&req, &CertificateRequestConditionType::Approved).map(|c| c.status),
            Some(ConditionStatus::False)
        );
        assert!(!is_approved(Some(&req)));
    }

    #[test]
    fn test_first_denied_condition_wins() {
        let req = request(vec![
            cond("Denied", ConditionStatus::Unknown),
            cond("Denied", ConditionStatus::True),
        ]);

        assert!(!is_denied(Some(&req)));
    }

    #[test]
    fn test_approved_and_denied_are_independent() {
        let req = request(vec![
            cond("Approved", ConditionStatus::True),
            cond("Denied", ConditionStatus::True),
        ]);

        assert!(is_approved(Some(&req)));
        assert!(is_denied(Some(&req)));
    }

    #[test]
    fn test_lowercase_tag_does_not_count() {
        let req = request(vec![cond("approved", ConditionStatus::True)]);
        assert!(!is_approved(Some(&req)));
    }

    #[test]
    fn test_summary() {
        let req = request(vec![
            cond("Approved", ConditionStatus::True),
            cond("Ready", ConditionStatus::True).with_reason("Issued"),
        ]);

        let summary = RequestSummary::from_request(&req);
        assert_eq!(summary.name, "default/test-cr");
        assert!(summary.approved);
        assert!(!summary.denied);
        assert!(summary.ready);
        assert_eq!(summary.conditions.len(), 2);
    }
}
