//! Staged extraction simulator.
//!
//! Models the progressive "OCR" pass as a cancellable stepwise run:
//! `Idle -> Extracting -> Complete`, where Idle is simply the absence of a
//! run. Views drive [`ExtractionRun::advance`] from a repeating timer and
//! drop the run to cancel it; the run itself never owns a timer, which
//! keeps it natively testable.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{CertificateRecord, FieldExtraction, RecordStatus, UploadedFile};

/// Institution stamped onto synthesized records. No registry lookup exists;
/// this is a fixed placeholder.
pub const MOCK_INSTITUTION: &str = "Mock University";

/// One entry of a field template. Confidence is either preset (the landing
/// demo uses fixed values) or sampled per run from the band distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub label: String,
    pub value: String,
    pub preset_confidence: Option<u8>,
}

impl FieldSpec {
    pub fn sampled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            preset_confidence: None,
        }
    }

    pub fn preset(label: impl Into<String>, value: impl Into<String>, confidence: u8) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            preset_confidence: Some(confidence),
        }
    }
}

/// Ordered set of fields one extraction pass produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTemplate {
    specs: Vec<FieldSpec>,
}

impl FieldTemplate {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Extracting,
    Complete,
}

/// What a single [`ExtractionRun::advance`] step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionEvent {
    /// One more field was extracted; carries the field and the new progress
    /// percentage.
    Field(FieldExtraction),
    /// The run finished and synthesized the resulting certificate record.
    /// The consumer is expected to prepend it to its history.
    Complete(CertificateRecord),
}

/// A single in-flight extraction pass over one uploaded file.
///
/// Not restartable: re-triggering an upload must construct a fresh run
/// (and cancel the timer driving the old one), so two overlapping runs can
/// never interleave their field lists.
#[derive(Debug)]
pub struct ExtractionRun {
    id: Uuid,
    file: UploadedFile,
    template: FieldTemplate,
    fields: Vec<FieldExtraction>,
    progress: u8,
    phase: RunPhase,
    rng: StdRng,
}

impl ExtractionRun {
    /// Start a run with entropy-seeded randomness.
    pub fn start(file: UploadedFile, template: FieldTemplate) -> Self {
        Self::new(file, template, None)
    }

    /// Start a run with a fixed seed for reproducible behavior.
    pub fn with_seed(file: UploadedFile, template: FieldTemplate, seed: u64) -> Self {
        Self::new(file, template, Some(seed))
    }

    fn new(file: UploadedFile, template: FieldTemplate, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            id: Uuid::new_v4(),
            file,
            template,
            fields: Vec::new(),
            progress: 0,
            phase: RunPhase::Extracting,
            rng,
        }
    }

    /// Advance the run by one step. Each of the first N steps appends
    /// exactly one field in template order and moves progress to
    /// `round(100 * n / N)`; the step after the Nth synthesizes the
    /// certificate record and completes the run. Returns `None` once
    /// complete.
    pub fn advance(&mut self) -> Option<ExtractionEvent> {
        if self.phase == RunPhase::Complete {
            return None;
        }

        let total = self.template.len();
        let next = self.fields.len();
        if next < total {
            let spec = &self.template.specs()[next];
            let confidence = match spec.preset_confidence {
                Some(c) => c,
                None => sample_confidence(&mut self.rng),
            };
            let field = FieldExtraction::new(spec.label.clone(), spec.value.clone(), confidence);
            self.fields.push(field.clone());
            self.progress = (((next + 1) * 100 + total / 2) / total) as u8;
            return Some(ExtractionEvent::Field(field));
        }

        let record = self.synthesize_record();
        self.phase = RunPhase::Complete;
        Some(ExtractionEvent::Complete(record))
    }

    /// Synthesize the one record a completed run contributes to history.
    /// Verified with 80% probability, else pending; score and hash are
    /// present exactly when verified.
    fn synthesize_record(&mut self) -> CertificateRecord {
        let verified = self.rng.gen_bool(0.8);
        let (status, score, hash) = if verified {
            (
                RecordStatus::Verified,
                Some(self.rng.gen_range(85..100)),
                Some(format!("0x{:010x}", self.rng.gen::<u64>() & 0xff_ffff_ffff)),
            )
        } else {
            (RecordStatus::Pending, None, None)
        };

        let title = self
            .template
            .specs()
            .iter()
            .find(|s| s.label == "Course")
            .map(|s| s.value.clone())
            .unwrap_or_else(|| self.file.name.clone());

        CertificateRecord {
            id: format!("CERT-{}", self.rng.gen_range(100..9100u32)),
            title,
            institution: MOCK_INSTITUTION.to_string(),
            date: Utc::now().date_naive(),
            status,
            score,
            hash,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file.name
    }

    pub fn fields(&self) -> &[FieldExtraction] {
        &self.fields
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RunPhase::Complete
    }
}

/// Per-field confidence draw: 12% fail (45-54), 24% warn (70-84),
/// remainder ok (92-97). Re-derived on every call, never reused across
/// fields.
fn sample_confidence(rng: &mut StdRng) -> u8 {
    let draw: f64 = rng.gen();
    if draw < 0.12 {
        rng.gen_range(45..55)
    } else if draw < 0.36 {
        rng.gen_range(70..85)
    } else {
        rng.gen_range(92..98)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{classify, FieldStatus};

    fn template() -> FieldTemplate {
        FieldTemplate::new(vec![
            FieldSpec::sampled("Name", "Rahul Kumar"),
            FieldSpec::sampled("Roll No", "JH2021-0456"),
            FieldSpec::sampled("Course", "B.Tech - Computer Science"),
            FieldSpec::sampled("Marks", "78%"),
            FieldSpec::sampled("Certificate ID", "CERT-XYZ-1234"),
        ])
    }

    fn run(seed: u64) -> ExtractionRun {
        ExtractionRun::with_seed(UploadedFile::new("certificate.pdf"), template(), seed)
    }

    #[test]
    fn yields_every_field_in_template_order_then_completes() {
        let mut run = run(7);
        let labels = ["Name", "Roll No", "Course", "Marks", "Certificate ID"];

        for (i, label) in labels.iter().enumerate() {
            match run.advance() {
                Some(ExtractionEvent::Field(field)) => assert_eq!(&field.label, label),
                other => panic!("expected field event at step {i}, got {other:?}"),
            }
        }
        assert_eq!(run.fields().len(), labels.len());
        assert_eq!(run.progress(), 100);
        assert_eq!(run.phase(), RunPhase::Extracting);

        match run.advance() {
            Some(ExtractionEvent::Complete(record)) => {
                assert_eq!(record.institution, MOCK_INSTITUTION);
                assert_eq!(record.title, "B.Tech - Computer Science");
            }
            other => panic!("expected completion event, got {other:?}"),
        }
        assert!(run.is_complete());
        assert_eq!(run.advance(), None);
    }

    #[test]
    fn progress_steps_by_field_count() {
        let mut run = run(11);
        let mut seen = Vec::new();
        while let Some(ExtractionEvent::Field(_)) = run.advance() {
            seen.push(run.progress());
        }
        assert_eq!(seen, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn four_field_demo_reaches_exactly_one_hundred() {
        let demo = FieldTemplate::new(vec![
            FieldSpec::preset("Name", "Rahul Kumar", 96),
            FieldSpec::preset("Roll No", "JH2021-0456", 92),
            FieldSpec::preset("Marks", "78%", 75),
            FieldSpec::preset("Certificate ID", "CERT-XYZ-1234", 99),
        ]);
        let mut run = ExtractionRun::with_seed(UploadedFile::new("demo.png"), demo, 3);
        let mut progress = Vec::new();
        while let Some(ExtractionEvent::Field(field)) = run.advance() {
            // preset confidences pass through untouched
            assert!(matches!(field.confidence, 96 | 92 | 75 | 99));
            progress.push(run.progress());
        }
        assert_eq!(progress, vec![25, 50, 75, 100]);
    }

    #[test]
    fn fresh_run_starts_empty() {
        let mut first = run(5);
        while first.advance().is_some() {}
        assert_eq!(first.fields().len(), 5);

        // Re-triggering an upload constructs a new run; nothing carries over.
        let second = run(5);
        assert!(second.fields().is_empty());
        assert_eq!(second.progress(), 0);
        assert_eq!(second.phase(), RunPhase::Extracting);
    }

    #[test]
    fn sampled_confidence_stays_inside_its_band() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let c = sample_confidence(&mut rng);
            let in_band = (45..=54).contains(&c) || (70..=84).contains(&c) || (92..=97).contains(&c);
            assert!(in_band, "confidence {c} outside every band");
            assert!(c <= 100);
            // bands map onto exactly one classification each
            match classify(c) {
                FieldStatus::Ok => assert!(c >= 92),
                FieldStatus::Warn => assert!((70..=84).contains(&c)),
                FieldStatus::Fail => assert!(c <= 54),
            }
        }
    }

    #[test]
    fn synthesized_record_couples_score_and_hash_to_status() {
        for seed in 0..64 {
            let mut run = run(seed);
            let record = loop {
                match run.advance() {
                    Some(ExtractionEvent::Complete(record)) => break record,
                    Some(_) => continue,
                    None => panic!("run ended without completing"),
                }
            };
            match record.status {
                RecordStatus::Verified => {
                    let score = record.score.expect("verified record must carry a score");
                    assert!((85..100).contains(&score));
                    assert!(record.hash.is_some());
                }
                RecordStatus::Pending => {
                    assert!(record.score.is_none());
                    assert!(record.hash.is_none());
                }
                RecordStatus::Flagged => panic!("runs never synthesize flagged records"),
            }
            assert!(record.id.starts_with("CERT-"));
        }
    }
}
