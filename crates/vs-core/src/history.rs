//! Certificate history: the newest-first record collection each dashboard
//! owns, plus the quick-lookup operation.

use serde::{Deserialize, Serialize};

use crate::model::{CertificateRecord, RecordStatus};

/// Derived dashboard counters over a history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total: usize,
    pub verified: usize,
    pub pending: usize,
    pub flagged: usize,
    /// Share of verified records, rounded, in [0, 100].
    pub trust_score: u8,
}

/// Result of a certificate id lookup. A miss is an explicit outcome, not a
/// synthetic placeholder record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(CertificateRecord),
    NotFound,
}

/// Newest-first, append-only-at-the-front record collection. Seeded once
/// per view and grown only by completed extraction runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateHistory {
    records: Vec<CertificateRecord>,
}

impl CertificateHistory {
    pub fn new(seed: Vec<CertificateRecord>) -> Self {
        Self { records: seed }
    }

    /// Prepend one record; completed runs call this exactly once.
    pub fn prepend(&mut self, record: CertificateRecord) {
        self.records.insert(0, record);
    }

    pub fn records(&self) -> &[CertificateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Verified records only, for the academic wallet view.
    pub fn verified(&self) -> Vec<CertificateRecord> {
        self.records
            .iter()
            .filter(|r| r.is_verified())
            .cloned()
            .collect()
    }

    /// Case-insensitive lookup by certificate id.
    pub fn lookup(&self, id: &str) -> LookupOutcome {
        self.records
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(id))
            .map(|r| LookupOutcome::Found(r.clone()))
            .unwrap_or(LookupOutcome::NotFound)
    }

    pub fn stats(&self) -> HistoryStats {
        let total = self.records.len();
        let count = |status: RecordStatus| self.records.iter().filter(|r| r.status == status).count();
        let verified = count(RecordStatus::Verified);
        let trust_score = ((verified * 100 + total.max(1) / 2) / total.max(1)) as u8;
        HistoryStats {
            total,
            verified,
            pending: count(RecordStatus::Pending),
            flagged: count(RecordStatus::Flagged),
            trust_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{ExtractionEvent, ExtractionRun, FieldSpec, FieldTemplate};
    use crate::model::UploadedFile;
    use crate::seed;

    #[test]
    fn completed_run_grows_history_by_exactly_one_at_the_front() {
        let mut history = CertificateHistory::new(seed::student_history());
        let before = history.len();

        let template = FieldTemplate::new(vec![
            FieldSpec::sampled("Course", "B.Tech - Computer Science"),
            FieldSpec::sampled("Marks", "78%"),
        ]);
        let mut run = ExtractionRun::with_seed(UploadedFile::new("cert.pdf"), template, 21);
        let record = loop {
            match run.advance() {
                Some(ExtractionEvent::Complete(record)) => break record,
                Some(_) => continue,
                None => panic!("run ended without completing"),
            }
        };
        let id = record.id.clone();
        history.prepend(record);

        assert_eq!(history.len(), before + 1);
        assert_eq!(history.records()[0].id, id);
    }

    #[test]
    fn lookup_is_case_insensitive_and_miss_is_explicit() {
        let history = CertificateHistory::new(seed::student_history());
        assert!(matches!(history.lookup("cert-001"), LookupOutcome::Found(r) if r.id == "CERT-001"));
        assert_eq!(history.lookup("CERT-NOPE"), LookupOutcome::NotFound);
    }

    #[test]
    fn stats_count_each_status_once() {
        let history = CertificateHistory::new(seed::student_history());
        let stats = history.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.verified, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.flagged, 1);
        assert_eq!(stats.trust_score, 33);
    }

    #[test]
    fn empty_history_has_zero_trust_score() {
        let history = CertificateHistory::default();
        assert_eq!(history.stats().trust_score, 0);
        assert!(history.verified().is_empty());
    }
}
