//! Data model for the verification pipeline and dashboard seed rows.
//!
//! All entities are transient view-state: nothing outlives the session.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::score::{classify, FieldStatus};

/// One labeled value purportedly read from a certificate image, paired with
/// a confidence score. Immutable once appended to a run's field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldExtraction {
    pub label: String,
    pub value: String,
    /// Always within [0, 100].
    pub confidence: u8,
    pub status: FieldStatus,
}

impl FieldExtraction {
    pub fn new(label: impl Into<String>, value: impl Into<String>, confidence: u8) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            confidence,
            status: classify(confidence),
        }
    }
}

/// Lifecycle status of a certificate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Verified,
    Pending,
    Flagged,
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Verified => write!(f, "verified"),
            RecordStatus::Pending => write!(f, "pending"),
            RecordStatus::Flagged => write!(f, "flagged"),
        }
    }
}

/// A certificate as seen by the dashboards. Replaced on change, never
/// edited in place; history keeps them newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub date: NaiveDate,
    pub status: RecordStatus,
    /// Trust score in [0, 100]; absent while pending.
    pub score: Option<u8>,
    /// Simulated ledger hash; absent when the record was never anchored.
    pub hash: Option<String>,
}

impl CertificateRecord {
    pub fn is_verified(&self) -> bool {
        self.status == RecordStatus::Verified
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisputeStatus {
    Pending,
    UnderReview,
    Resolved,
}

impl std::fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisputeStatus::Pending => write!(f, "pending"),
            DisputeStatus::UnderReview => write!(f, "under review"),
            DisputeStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// A user-initiated ticket contesting a certificate's verification outcome.
/// Holds a non-owning reference to the certificate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeTicket {
    pub id: String,
    pub cert_id: String,
    pub reason: String,
    pub status: DisputeStatus,
    pub created_at: DateTime<Utc>,
}

/// A file handed over by the host environment's picker. The pipeline only
/// ever reads the display name, never the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ---- Read-only seed rows for the Verifier/Admin/Institution views. ----
//
// UI actions on these rows only surface a confirmation acknowledgment; the
// underlying collections are never mutated.

/// One row of a verifier batch job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRow {
    pub id: String,
    pub name: String,
    pub university: String,
    pub status: RecordStatus,
    pub trust: Option<u8>,
    pub submitted_on: NaiveDate,
    pub job: String,
}

/// An open investigation in the admin case console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    pub id: String,
    pub cert_id: String,
    pub score: u8,
    pub status: String,
    pub assignee: String,
    pub district: String,
    pub flagged_on: NaiveDate,
}

/// An institution blacklisted for repeated fraud signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    pub name: String,
    pub flagged: u32,
    pub first_seen: NaiveDate,
    pub district: String,
    pub tag: String,
    pub notes: String,
}

/// An automated enforcement rule shown in the governance panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceRule {
    pub id: u32,
    pub rule: String,
    pub description: String,
    pub enforcement: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacUser {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub department: String,
    pub active: bool,
}

/// A certificate template registered by an institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateTemplate {
    pub id: u32,
    pub name: String,
    pub fields: u32,
    pub last_updated: NaiveDate,
    pub status: String,
}

/// An institutional signing key as listed in the registrar portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    pub id: String,
    pub name: String,
    pub algorithm: String,
    pub active: bool,
    pub created: NaiveDate,
    pub expiry: NaiveDate,
}

/// A suspicious-certificate cluster surfaced in blacklist management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCluster {
    pub id: String,
    pub kind: String,
    pub district: String,
    pub count: u32,
    pub severity: String,
    pub rationale: String,
}

/// One immutable line of the admin audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLine {
    pub at: String,
    pub actor: String,
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_extraction_derives_status_from_confidence() {
        let high = FieldExtraction::new("Name", "Rahul Kumar", 96);
        assert_eq!(high.status, FieldStatus::Ok);

        let mid = FieldExtraction::new("Marks", "78%", 75);
        assert_eq!(mid.status, FieldStatus::Warn);

        let low = FieldExtraction::new("Certificate ID", "CERT-XYZ-1234", 47);
        assert_eq!(low.status, FieldStatus::Fail);
    }

    #[test]
    fn record_status_display_matches_badge_text() {
        assert_eq!(RecordStatus::Verified.to_string(), "verified");
        assert_eq!(DisputeStatus::UnderReview.to_string(), "under review");
    }
}
