//! Shared confidence classification and trust-score routing.
//!
//! Every view classifies scores through these two functions; the thresholds
//! live here and nowhere else.

use serde::{Deserialize, Serialize};

/// Lower bound of the "ok / verified / auto-approve" band.
pub const PASS_THRESHOLD: u8 = 90;
/// Lower bound of the "warn / review" band.
pub const REVIEW_THRESHOLD: u8 = 70;

/// Three-way status derived from a confidence or trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    Ok,
    Warn,
    Fail,
}

impl std::fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldStatus::Ok => write!(f, "verified"),
            FieldStatus::Warn => write!(f, "review"),
            FieldStatus::Fail => write!(f, "flagged"),
        }
    }
}

/// Operator action derived from an overall trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewAction {
    AutoApprove,
    ManualReview,
    Escalate,
}

impl std::fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewAction::AutoApprove => write!(f, "auto-approve"),
            ReviewAction::ManualReview => write!(f, "manual review"),
            ReviewAction::Escalate => write!(f, "flag & escalate"),
        }
    }
}

/// Classify a score in [0, 100]: `Ok` at 90 and above, `Warn` in 70..=89,
/// `Fail` below 70.
pub fn classify(score: u8) -> FieldStatus {
    if score >= PASS_THRESHOLD {
        FieldStatus::Ok
    } else if score >= REVIEW_THRESHOLD {
        FieldStatus::Warn
    } else {
        FieldStatus::Fail
    }
}

/// Map an overall trust score to the operator action for that band. Uses
/// the same thresholds as [`classify`] so badge colors and routed actions
/// can never drift apart.
pub fn route(score: u8) -> ReviewAction {
    match classify(score) {
        FieldStatus::Ok => ReviewAction::AutoApprove,
        FieldStatus::Warn => ReviewAction::ManualReview,
        FieldStatus::Fail => ReviewAction::Escalate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundary_values() {
        assert_eq!(classify(0), FieldStatus::Fail);
        assert_eq!(classify(69), FieldStatus::Fail);
        assert_eq!(classify(70), FieldStatus::Warn);
        assert_eq!(classify(89), FieldStatus::Warn);
        assert_eq!(classify(90), FieldStatus::Ok);
        assert_eq!(classify(100), FieldStatus::Ok);
    }

    #[test]
    fn route_bands_mirror_classifier() {
        assert_eq!(route(100), ReviewAction::AutoApprove);
        assert_eq!(route(90), ReviewAction::AutoApprove);
        assert_eq!(route(89), ReviewAction::ManualReview);
        assert_eq!(route(70), ReviewAction::ManualReview);
        assert_eq!(route(69), ReviewAction::Escalate);
        assert_eq!(route(0), ReviewAction::Escalate);
    }
}
