//! VeriSure Core Verification Pipeline
//!
//! This crate provides the simulated verification pipeline behind the
//! VeriSure dashboards: staged field extraction, confidence classification,
//! consensus aggregation, trust-score routing, certificate history and
//! dispute handling. Everything here is a simulation over seed data; there
//! is no real OCR, cryptography or ledger access anywhere in the pipeline.

pub mod consensus;
pub mod dispute;
pub mod extraction;
pub mod history;
pub mod model;
pub mod score;
pub mod seed;
pub mod service;

use thiserror::Error;

pub use consensus::{compute_consensus, ConsensusProfile, ConsensusResult};
pub use dispute::DisputeLedger;
pub use extraction::{ExtractionEvent, ExtractionRun, FieldSpec, FieldTemplate, RunPhase};
pub use history::{CertificateHistory, HistoryStats, LookupOutcome};
pub use model::{
    CertificateRecord, DisputeStatus, DisputeTicket, FieldExtraction, RecordStatus, UploadedFile,
};
pub use score::{classify, route, FieldStatus, ReviewAction};
pub use service::{MockVerificationService, VerificationService};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dispute error: {0}")]
    Dispute(String),

    #[error("Intake error: {0}")]
    Intake(String),

    #[error("Simulation error: {0}")]
    Simulation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_context() {
        let err = CoreError::Dispute("no certificate selected".into());
        assert_eq!(err.to_string(), "Dispute error: no certificate selected");
    }
}
