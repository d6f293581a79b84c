//! Verification service seam.
//!
//! The dashboards talk to verification through this trait only, so the
//! timer-driven simulation can later be swapped for a real backend without
//! touching view code. [`MockVerificationService`] is the one conforming
//! implementation in this repository.

use crate::consensus::{compute_consensus, ConsensusProfile, ConsensusResult};
use crate::extraction::{ExtractionRun, FieldTemplate};
use crate::model::{CertificateRecord, UploadedFile};

pub trait VerificationService {
    /// Begin an extraction pass over an uploaded file. The returned run is
    /// stepped by the caller; dropping it cancels the pass.
    fn extract_fields(&self, file: UploadedFile) -> ExtractionRun;

    /// Draw the four consensus checks for a record being opened.
    fn compute_consensus(&self, record: &CertificateRecord) -> ConsensusResult;
}

/// Simulation-backed service: extraction confidences are sampled from fixed
/// bands and consensus checks from the configured profile.
#[derive(Debug, Clone)]
pub struct MockVerificationService {
    template: FieldTemplate,
    profile: ConsensusProfile,
    /// Fixed seed for reproducible runs; entropy when absent.
    seed: Option<u64>,
}

impl MockVerificationService {
    pub fn new(template: FieldTemplate, profile: ConsensusProfile) -> Self {
        Self {
            template,
            profile,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn template(&self) -> &FieldTemplate {
        &self.template
    }
}

impl VerificationService for MockVerificationService {
    fn extract_fields(&self, file: UploadedFile) -> ExtractionRun {
        match self.seed {
            Some(seed) => ExtractionRun::with_seed(file, self.template.clone(), seed),
            None => ExtractionRun::start(file, self.template.clone()),
        }
    }

    fn compute_consensus(&self, record: &CertificateRecord) -> ConsensusResult {
        compute_consensus(record, &self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractionEvent;
    use crate::seed;

    #[test]
    fn service_runs_are_independent() {
        let service = MockVerificationService::new(
            seed::certificate_template(),
            ConsensusProfile::student(),
        )
        .with_seed(17);

        let mut first = service.extract_fields(UploadedFile::new("a.pdf"));
        assert!(matches!(
            first.advance(),
            Some(ExtractionEvent::Field(_))
        ));

        // A second extraction starts from scratch regardless of the first.
        let second = service.extract_fields(UploadedFile::new("b.pdf"));
        assert!(second.fields().is_empty());
        assert_eq!(second.progress(), 0);
    }

    #[test]
    fn service_consensus_uses_the_record_hash() {
        let service = MockVerificationService::new(
            seed::certificate_template(),
            ConsensusProfile::student(),
        );
        let history = seed::student_history();
        let anchored = &history[0];
        assert!(anchored.hash.is_some());
        assert!(service.compute_consensus(anchored).ledger_hash_present);
    }
}
