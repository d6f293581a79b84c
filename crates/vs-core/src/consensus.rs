//! Consensus/verdict aggregation.
//!
//! Four independent boolean source checks rendered alongside a record. The
//! booleans are drawn fresh on every "open details" and are deliberately
//! NOT derived from the record's stored trust score, nor combined into it;
//! that inconsistency exists in the product today and is preserved here
//! rather than silently corrected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::CertificateRecord;

/// Outcome of the four independent source checks for one viewed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// External registry (DigiLocker) match.
    pub registry_match: bool,
    /// Issuing institution database match.
    pub institution_db_match: bool,
    /// Anchoring hash found on the simulated ledger.
    pub ledger_hash_present: bool,
    /// Forensic tamper check came back clean.
    pub forensic_clean: bool,
}

/// Per-view probabilities for the randomized checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsensusProfile {
    pub registry_p: f64,
    pub institution_db_p: f64,
    /// Used only when the record carries no hash; a present hash makes the
    /// ledger check deterministically true.
    pub ledger_fallback_p: f64,
    pub forensic_p: f64,
}

impl ConsensusProfile {
    /// Student results view profile.
    pub fn student() -> Self {
        Self {
            registry_p: 0.9,
            institution_db_p: 0.6,
            ledger_fallback_p: 0.5,
            forensic_p: 0.5,
        }
    }

    /// Verifier forensic view profile; forensic checks skew cleaner there.
    pub fn verifier() -> Self {
        Self {
            registry_p: 0.9,
            institution_db_p: 0.6,
            ledger_fallback_p: 0.5,
            forensic_p: 0.8,
        }
    }
}

/// Draw a fresh consensus for `record`. Repeated calls on the same record
/// are expected to differ; only the ledger check is pinned, and only when
/// the record already carries a hash.
pub fn compute_consensus(record: &CertificateRecord, profile: &ConsensusProfile) -> ConsensusResult {
    let mut rng = StdRng::from_entropy();
    compute_consensus_with(record, profile, &mut rng)
}

/// Seedable variant used by tests.
pub fn compute_consensus_with(
    record: &CertificateRecord,
    profile: &ConsensusProfile,
    rng: &mut StdRng,
) -> ConsensusResult {
    ConsensusResult {
        registry_match: rng.gen_bool(profile.registry_p),
        institution_db_match: rng.gen_bool(profile.institution_db_p),
        ledger_hash_present: record.hash.is_some() || rng.gen_bool(profile.ledger_fallback_p),
        forensic_clean: rng.gen_bool(profile.forensic_p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordStatus;
    use chrono::NaiveDate;

    fn record(hash: Option<&str>) -> CertificateRecord {
        CertificateRecord {
            id: "CERT-001".into(),
            title: "B.Tech - Computer Science".into(),
            institution: "IIT Dhanbad".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: RecordStatus::Verified,
            score: Some(98),
            hash: hash.map(Into::into),
        }
    }

    #[test]
    fn ledger_check_is_true_whenever_record_has_a_hash() {
        let anchored = record(Some("0xabc123"));
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let c = compute_consensus_with(&anchored, &ConsensusProfile::student(), &mut rng);
            assert!(c.ledger_hash_present);
        }
    }

    #[test]
    fn checks_vary_across_repeated_opens_of_the_same_record() {
        // Non-determinism is the contract: four independent draws per open.
        let unanchored = record(None);
        let mut rng = StdRng::seed_from_u64(9);
        let draws: Vec<ConsensusResult> = (0..64)
            .map(|_| compute_consensus_with(&unanchored, &ConsensusProfile::verifier(), &mut rng))
            .collect();
        assert!(
            draws.iter().any(|c| *c != draws[0]),
            "64 opens produced identical consensus; checks are not independent draws"
        );
    }

    #[test]
    fn checks_are_not_derived_from_the_record_score() {
        // A flagged, low-score record can still draw a full pass; the
        // aggregator never looks at the score.
        let mut low = record(Some("0xf00d"));
        low.status = RecordStatus::Flagged;
        low.score = Some(12);

        let mut rng = StdRng::seed_from_u64(3);
        let all_pass = (0..256).any(|_| {
            let c = compute_consensus_with(&low, &ConsensusProfile::student(), &mut rng);
            c.registry_match && c.institution_db_match && c.ledger_hash_present && c.forensic_clean
        });
        assert!(all_pass);
    }
}
