//! Dispute tickets: user-raised challenges against a verification outcome.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::{DisputeStatus, DisputeTicket};
use crate::{CoreError, CoreResult};

/// Reason recorded when the user submits with the reason box empty.
pub const DEFAULT_REASON: &str = "Student raised dispute via UI";

/// Newest-first ticket collection; tickets are never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeLedger {
    tickets: Vec<DisputeTicket>,
}

impl DisputeLedger {
    pub fn new(seed: Vec<DisputeTicket>) -> Self {
        Self { tickets: seed }
    }

    pub fn tickets(&self) -> &[DisputeTicket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Submit a dispute against `cert_id`. A missing or blank id is
    /// rejected and creates nothing; otherwise exactly one `Pending` ticket
    /// is prepended and returned.
    pub fn submit(&mut self, cert_id: Option<&str>, reason: &str) -> CoreResult<DisputeTicket> {
        let cert_id = cert_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CoreError::Dispute("select a certificate to dispute".into()))?;

        let reason = if reason.trim().is_empty() {
            DEFAULT_REASON.to_string()
        } else {
            reason.trim().to_string()
        };

        let mut rng = StdRng::from_entropy();
        let ticket = DisputeTicket {
            id: format!("D-{}", rng.gen_range(100..9100u32)),
            cert_id: cert_id.to_string(),
            reason,
            status: DisputeStatus::Pending,
            created_at: Utc::now(),
        };
        self.tickets.insert(0, ticket.clone());
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn missing_cert_id_is_rejected_without_creating_a_ticket() {
        let mut ledger = DisputeLedger::new(seed::student_disputes());
        let before = ledger.len();

        assert!(ledger.submit(None, "marks mismatch").is_err());
        assert!(ledger.submit(Some("   "), "marks mismatch").is_err());
        assert_eq!(ledger.len(), before);
    }

    #[test]
    fn submission_prepends_exactly_one_pending_ticket() {
        let mut ledger = DisputeLedger::new(seed::student_disputes());
        let before = ledger.len();

        let ticket = ledger.submit(Some("CERT-003"), "marks mismatch").unwrap();
        assert_eq!(ledger.len(), before + 1);
        assert_eq!(ledger.tickets()[0], ticket);
        assert_eq!(ticket.status, DisputeStatus::Pending);
        assert_eq!(ticket.cert_id, "CERT-003");
    }

    #[test]
    fn blank_reason_falls_back_to_default() {
        let mut ledger = DisputeLedger::default();
        let ticket = ledger.submit(Some("CERT-001"), "  ").unwrap();
        assert_eq!(ticket.reason, DEFAULT_REASON);
    }
}
