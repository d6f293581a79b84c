//! Read-only seed data for the dashboards.
//!
//! Each dashboard constructs its own state from these values and never
//! mutates the seed itself. The rows mirror the government pilot demo
//! dataset.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::extraction::{FieldSpec, FieldTemplate};
use crate::model::{
    AuditLine, BatchRow, BlacklistEntry, CaseFile, CertificateRecord, CertificateTemplate,
    DisputeStatus, DisputeTicket, GovernanceRule, PatternCluster, RbacUser, RecordStatus,
    SigningKey,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

/// A labeled count, rendered as a proportional bar in the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: u32,
}

impl LabeledCount {
    fn new(label: &str, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// A dispute row in the registrar (institution) queue; richer than a
/// student [`DisputeTicket`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarDispute {
    pub id: String,
    pub cert_id: String,
    pub student: String,
    pub kind: String,
    pub date: NaiveDate,
    pub status: String,
    pub priority: String,
}

/// Registrar portal KPI block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionKpis {
    pub issued: u32,
    pub quota: u32,
    pub templates: u32,
    pub disputes: u32,
    pub trust_score: u8,
    pub retroactive: u32,
}

/// Admin console KPI block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminKpis {
    pub total_verifications: String,
    pub total_flags: u32,
    pub open_investigations: u32,
    pub auto_suspensions: u32,
    pub trust_score_avg: u8,
}

/// The five-field template used by the Student and Verifier upload flows.
/// Confidences are sampled per run.
pub fn certificate_template() -> FieldTemplate {
    FieldTemplate::new(vec![
        FieldSpec::sampled("Name", "Rahul Kumar"),
        FieldSpec::sampled("Roll No", "JH2021-0456"),
        FieldSpec::sampled("Course", "B.Tech - Computer Science"),
        FieldSpec::sampled("Marks", "78%"),
        FieldSpec::sampled("Certificate ID", "CERT-XYZ-1234"),
    ])
}

/// The four-field demo template on the landing page, with preset
/// confidences so the demo always tells the same story.
pub fn landing_template() -> FieldTemplate {
    FieldTemplate::new(vec![
        FieldSpec::preset("Name", "Rahul Kumar", 96),
        FieldSpec::preset("Roll No", "JH2021-0456", 92),
        FieldSpec::preset("Marks", "78%", 75),
        FieldSpec::preset("Certificate ID", "CERT-XYZ-1234", 99),
    ])
}

/// Initial certificate history for the student portal.
pub fn student_history() -> Vec<CertificateRecord> {
    vec![
        CertificateRecord {
            id: "CERT-001".into(),
            title: "B.Tech - Computer Science".into(),
            institution: "IIT Dhanbad".into(),
            date: date(2024, 1, 15),
            status: RecordStatus::Verified,
            score: Some(98),
            hash: Some("0xabc123...4f".into()),
        },
        CertificateRecord {
            id: "CERT-002".into(),
            title: "Higher Secondary Certificate".into(),
            institution: "Jharkhand Academic Council".into(),
            date: date(2024, 1, 10),
            status: RecordStatus::Pending,
            score: None,
            hash: None,
        },
        CertificateRecord {
            id: "CERT-003".into(),
            title: "Class 10 Board Certificate".into(),
            institution: "JAC Board".into(),
            date: date(2024, 1, 8),
            status: RecordStatus::Flagged,
            score: Some(45),
            hash: Some("0xf00df00d...9a".into()),
        },
    ]
}

pub fn student_disputes() -> Vec<DisputeTicket> {
    vec![DisputeTicket {
        id: "D-001".into(),
        cert_id: "CERT-003".into(),
        reason: "Marks mismatch reported compared to university DB".into(),
        status: DisputeStatus::UnderReview,
        created_at: timestamp(2024, 1, 9),
    }]
}

/// Monthly verification activity for the student overview.
pub fn student_timeline() -> Vec<(String, u32, u32, u32)> {
    vec![
        ("Jan".into(), 3, 1, 1),
        ("Feb".into(), 2, 1, 0),
        ("Mar".into(), 3, 0, 0),
        ("Apr".into(), 1, 1, 0),
    ]
}

/// Verifier batch job rows.
pub fn batch_rows() -> Vec<BatchRow> {
    vec![
        BatchRow {
            id: "RAJ-001".into(),
            name: "Aarav Sharma".into(),
            university: "University of Jharkhand".into(),
            status: RecordStatus::Verified,
            trust: Some(95),
            submitted_on: date(2025, 8, 23),
            job: "Software Engineer".into(),
        },
        BatchRow {
            id: "RAJ-002".into(),
            name: "Priya Meena".into(),
            university: "IIT Jodhpur".into(),
            status: RecordStatus::Verified,
            trust: Some(92),
            submitted_on: date(2025, 8, 21),
            job: "Data Analyst".into(),
        },
        BatchRow {
            id: "RAJ-003".into(),
            name: "Rohit Singh".into(),
            university: "Unknown Institute".into(),
            status: RecordStatus::Flagged,
            trust: Some(34),
            submitted_on: date(2025, 8, 19),
            job: "Administrative Asst.".into(),
        },
        BatchRow {
            id: "RAJ-004".into(),
            name: "Simran Kaur".into(),
            university: "BITS Pilani".into(),
            status: RecordStatus::Pending,
            trust: None,
            submitted_on: date(2025, 8, 18),
            job: "Research Fellow".into(),
        },
        BatchRow {
            id: "RAJ-005".into(),
            name: "Vikram Rathore".into(),
            university: "NIT Jaipur".into(),
            status: RecordStatus::Verified,
            trust: Some(88),
            submitted_on: date(2025, 8, 17),
            job: "Project Manager".into(),
        },
    ]
}

/// Trust score distribution for the verifier overview, as (band, share %).
pub fn trust_distribution() -> Vec<LabeledCount> {
    vec![
        LabeledCount::new("High (90-100)", 60),
        LabeledCount::new("Medium (70-89)", 28),
        LabeledCount::new("Low (<70)", 12),
    ]
}

/// Flagged-cases-per-month trend for the verifier overview.
pub fn flagged_trend() -> Vec<LabeledCount> {
    vec![
        LabeledCount::new("Apr", 4),
        LabeledCount::new("May", 7),
        LabeledCount::new("Jun", 3),
        LabeledCount::new("Jul", 9),
        LabeledCount::new("Aug", 12),
    ]
}

pub fn blacklist() -> Vec<BlacklistEntry> {
    vec![
        BlacklistEntry {
            name: "Unknown Institute".into(),
            flagged: 14,
            first_seen: date(2025, 3, 2),
            district: "Jaipur".into(),
            tag: "IP Cluster".into(),
            notes: "Multiple cloned certificates; IPs clustered in Jaipur".into(),
        },
        BlacklistEntry {
            name: "Fake College Jaipur".into(),
            flagged: 9,
            first_seen: date(2025, 5, 10),
            district: "Jaipur".into(),
            tag: "Template Fraud".into(),
            notes: "Uses generic template; suspicious signer".into(),
        },
        BlacklistEntry {
            name: "Unregistered Coaching Udaipur".into(),
            flagged: 5,
            first_seen: date(2025, 7, 1),
            district: "Udaipur".into(),
            tag: "Low Score History".into(),
            notes: "Repeated low-trust scores and marks mismatches".into(),
        },
    ]
}

pub fn admin_kpis() -> AdminKpis {
    AdminKpis {
        total_verifications: "145.2K".into(),
        total_flags: 893,
        open_investigations: 34,
        auto_suspensions: 7,
        trust_score_avg: 91,
    }
}

/// Fraud concentration by district for the admin heat bars.
pub fn district_fraud() -> Vec<LabeledCount> {
    vec![
        LabeledCount::new("Ranchi", 210),
        LabeledCount::new("Dhanbad", 155),
        LabeledCount::new("Jamshedpur", 120),
        LabeledCount::new("Bokaro", 80),
        LabeledCount::new("Hazaribagh", 50),
    ]
}

pub fn case_queue() -> Vec<CaseFile> {
    vec![
        CaseFile {
            id: "CASE-001".into(),
            cert_id: "JHA-4567".into(),
            score: 32,
            status: "Open".into(),
            assignee: "Singh".into(),
            district: "Ranchi".into(),
            flagged_on: date(2025, 9, 20),
        },
        CaseFile {
            id: "CASE-002".into(),
            cert_id: "JHA-8891".into(),
            score: 71,
            status: "Review".into(),
            assignee: "Verma".into(),
            district: "Dhanbad".into(),
            flagged_on: date(2025, 9, 18),
        },
        CaseFile {
            id: "CASE-003".into(),
            cert_id: "JHA-1234".into(),
            score: 55,
            status: "Open".into(),
            assignee: "Singh".into(),
            district: "Bokaro".into(),
            flagged_on: date(2025, 9, 15),
        },
    ]
}

pub fn governance_rules() -> Vec<GovernanceRule> {
    vec![
        GovernanceRule {
            id: 1,
            rule: "Auto-Flag Threshold".into(),
            description: "Trust Score ≤ 60%".into(),
            enforcement: "Auto Flag".into(),
            enabled: true,
        },
        GovernanceRule {
            id: 2,
            rule: "Auto-Investigation Trigger".into(),
            description: "3+ suspicious certs from same IP/template in 7 days".into(),
            enforcement: "Open Case".into(),
            enabled: true,
        },
        GovernanceRule {
            id: 3,
            rule: "Auto-Suspension Notice".into(),
            description: "Flagged institute count ≥ 50".into(),
            enforcement: "Send Warning".into(),
            enabled: false,
        },
    ]
}

pub fn rbac_users() -> Vec<RbacUser> {
    vec![
        RbacUser {
            id: 1,
            name: "Pratap Singh".into(),
            role: "Case Lead".into(),
            department: "Vigilance".into(),
            active: true,
        },
        RbacUser {
            id: 2,
            name: "Anjali Verma".into(),
            role: "Auditor".into(),
            department: "IT".into(),
            active: true,
        },
        RbacUser {
            id: 3,
            name: "Rajesh Kumar".into(),
            role: "Admin".into(),
            department: "HE Dept.".into(),
            active: true,
        },
    ]
}

pub fn pattern_clusters() -> Vec<PatternCluster> {
    vec![
        PatternCluster {
            id: "CL-001".into(),
            kind: "Template B Clone".into(),
            district: "Ranchi".into(),
            count: 8,
            severity: "Critical".into(),
            rationale: "8 certificates with identical template and a single-pixel tampered date field."
                .into(),
        },
        PatternCluster {
            id: "CL-002".into(),
            kind: "Marks Mismatch Ring".into(),
            district: "Dhanbad".into(),
            count: 4,
            severity: "High".into(),
            rationale: "4 candidates from the same university batch with marks mismatched against the central DB."
                .into(),
        },
    ]
}

pub fn institution_kpis() -> InstitutionKpis {
    InstitutionKpis {
        issued: 15_400,
        quota: 25_000,
        templates: 8,
        disputes: 12,
        trust_score: 92,
        retroactive: 250,
    }
}

pub fn certificate_templates() -> Vec<CertificateTemplate> {
    vec![
        CertificateTemplate {
            id: 1,
            name: "B.Tech CSE Degree".into(),
            fields: 6,
            last_updated: date(2025, 9, 10),
            status: "Active".into(),
        },
        CertificateTemplate {
            id: 2,
            name: "MBA Completion Cert.".into(),
            fields: 4,
            last_updated: date(2025, 8, 20),
            status: "Active".into(),
        },
        CertificateTemplate {
            id: 3,
            name: "B.Sc Final Marksheet".into(),
            fields: 10,
            last_updated: date(2024, 11, 5),
            status: "Archived".into(),
        },
    ]
}

pub fn signing_keys() -> Vec<SigningKey> {
    vec![
        SigningKey {
            id: "KEY-001".into(),
            name: "Primary Signing Key 2024".into(),
            algorithm: "ECDSA-P256".into(),
            active: true,
            created: date(2024, 1, 1),
            expiry: date(2025, 12, 31),
        },
        SigningKey {
            id: "KEY-002".into(),
            name: "Legacy Batch Key 2020-22".into(),
            algorithm: "RSA-2048".into(),
            active: false,
            created: date(2020, 5, 15),
            expiry: date(2022, 5, 15),
        },
    ]
}

pub fn registrar_disputes() -> Vec<RegistrarDispute> {
    vec![
        RegistrarDispute {
            id: "DISP-001".into(),
            cert_id: "CSE-1021".into(),
            student: "Ananya Sharma".into(),
            kind: "Data Error (Name)".into(),
            date: date(2025, 9, 25),
            status: "Pending Registrar".into(),
            priority: "High".into(),
        },
        RegistrarDispute {
            id: "DISP-002".into(),
            cert_id: "MECH-505".into(),
            student: "Pritam Singh".into(),
            kind: "Missing Record".into(),
            date: date(2025, 9, 20),
            status: "Investigation".into(),
            priority: "Medium".into(),
        },
        RegistrarDispute {
            id: "DISP-003".into(),
            cert_id: "MCOM-312".into(),
            student: "Kajal Devi".into(),
            kind: "Marks Mismatch".into(),
            date: date(2025, 9, 15),
            status: "Resolved".into(),
            priority: "Low".into(),
        },
    ]
}

/// Institution trust score over the last nine months, for the reputation
/// bars.
pub fn trust_score_history() -> Vec<LabeledCount> {
    vec![
        LabeledCount::new("Jan", 85),
        LabeledCount::new("Feb", 86),
        LabeledCount::new("Mar", 89),
        LabeledCount::new("Apr", 91),
        LabeledCount::new("May", 92),
        LabeledCount::new("Jun", 90),
        LabeledCount::new("Jul", 92),
        LabeledCount::new("Aug", 93),
        LabeledCount::new("Sep", 92),
    ]
}

/// Monthly issuance volume (current, retroactive) for the registrar charts.
pub fn monthly_issuance() -> Vec<(String, u32, u32)> {
    vec![
        ("Jan".into(), 1500, 100),
        ("Feb".into(), 1650, 50),
        ("Mar".into(), 1800, 0),
        ("Apr".into(), 1400, 20),
        ("May".into(), 1900, 0),
        ("Jun".into(), 2100, 80),
        ("Jul".into(), 1750, 0),
    ]
}

/// Recent lines of the immutable admin audit log.
pub fn audit_log() -> Vec<AuditLine> {
    let line = |at: &str, actor: &str, action: &str| AuditLine {
        at: at.into(),
        actor: actor.into(),
        action: action.into(),
    };
    vec![
        line("2024-03-21 14:32", "admin.priya", "Suspended key RU-KEY-007 (Ranchi University)"),
        line("2024-03-21 11:05", "system", "Auto-flagged 14 certificates matching cluster PC-002"),
        line("2024-03-20 17:48", "admin.priya", "Enabled rule: Duplicate Certificate ID Block"),
        line("2024-03-20 09:12", "ops.anil", "Assigned CASE-002 to Forensics Team B"),
        line("2024-03-19 16:30", "system", "Blacklist entry added: Shree Balaji Institute"),
    ]
}

/// The fixed itemized breakdown shown in the Student/Verifier result views.
/// Deliberately record-independent: the product renders this same mock
/// breakdown for every selected record.
pub fn mock_breakdown() -> Vec<(String, String, u8)> {
    vec![
        ("Name".into(), "Rahul Kumar".into(), 54),
        ("Roll No".into(), "JH2021-0456".into(), 93),
        ("Course".into(), "B.Tech - Computer Science".into(), 96),
        ("Marks".into(), "78%".into(), 80),
        ("Certificate ID".into(), "CERT-XYZ-1234".into(), 47),
    ]
}

/// Overall trust of the mock breakdown verdict.
pub const MOCK_BREAKDOWN_TRUST: u8 = 54;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{classify, FieldStatus};

    #[test]
    fn templates_have_the_documented_sizes() {
        assert_eq!(certificate_template().len(), 5);
        assert_eq!(landing_template().len(), 4);
    }

    #[test]
    fn seed_scores_stay_in_range_and_classify_cleanly() {
        for record in student_history() {
            if let Some(score) = record.score {
                assert!(score <= 100);
            }
        }
        for row in batch_rows() {
            if let Some(trust) = row.trust {
                assert!(trust <= 100);
            }
        }
        // the flagged seed record really classifies as a failure
        assert_eq!(classify(45), FieldStatus::Fail);
    }

    #[test]
    fn mock_breakdown_matches_its_template_fields() {
        let labels: Vec<String> = certificate_template()
            .specs()
            .iter()
            .map(|s| s.label.clone())
            .collect();
        let breakdown: Vec<String> = mock_breakdown().into_iter().map(|(l, _, _)| l).collect();
        assert_eq!(labels, breakdown);
    }
}
