//! Hard eligibility gates: binary admit/reject rules applied before any
//! ranking. Gates run in a fixed order and short-circuit on the first
//! failure, so every rejection is attributable to exactly one gate.

mod classifier;

pub use classifier::{Classifier, DomainMatch, KeywordClassifier};

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::domain::{GateKind, GateResult, IntentContract, JobPosting};
use super::fetch::FetchedPosting;
use super::intent::normalize_location;
use super::text;

/// Fixed gate order; quality screening happens upstream and is not re-run.
const GATE_ORDER: [GateKind; 4] = [
    GateKind::CareerDomain,
    GateKind::JobType,
    GateKind::Location,
    GateKind::Seniority,
];

/// Per-gate rejection counts for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GateRejectionStats {
    pub by_gate: BTreeMap<GateKind, usize>,
}

impl GateRejectionStats {
    fn record(&mut self, gate: GateKind) {
        *self.by_gate.entry(gate).or_insert(0) += 1;
    }

    pub fn total(&self) -> usize {
        self.by_gate.values().sum()
    }
}

pub struct HardGateEngine<C = KeywordClassifier> {
    classifier: C,
}

impl HardGateEngine<KeywordClassifier> {
    pub fn new() -> Self {
        Self {
            classifier: KeywordClassifier::new(),
        }
    }
}

impl Default for HardGateEngine<KeywordClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Classifier> HardGateEngine<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Run every gate in order against one posting, stopping at the first
    /// failure.
    pub fn evaluate(&self, contract: &IntentContract, posting: &JobPosting) -> GateResult {
        for gate in GATE_ORDER {
            let result = self.run_gate(gate, contract, posting);
            if !result.passed {
                return result;
            }
        }
        GateResult::admitted("all gates passed")
    }

    /// Run a single gate in isolation. Gate composition is idempotent: each
    /// gate an admitted posting passed returns the same verdict when re-run.
    pub fn run_gate(
        &self,
        gate: GateKind,
        contract: &IntentContract,
        posting: &JobPosting,
    ) -> GateResult {
        match gate {
            GateKind::CareerDomain => self.career_domain_gate(contract, posting),
            GateKind::JobType => self.job_type_gate(contract, posting),
            GateKind::Location => self.location_gate(contract, posting),
            GateKind::Seniority => self.seniority_gate(contract, posting),
        }
    }

    /// Gate the whole candidate set, returning admitted postings and
    /// per-gate rejection counts.
    pub fn admit(
        &self,
        contract: &IntentContract,
        postings: Vec<FetchedPosting>,
    ) -> (Vec<FetchedPosting>, GateRejectionStats) {
        let mut stats = GateRejectionStats::default();
        let admitted = postings
            .into_iter()
            .filter(|fetched| {
                let result = self.evaluate(contract, &fetched.posting);
                if let Some(gate) = result.failed_gate {
                    stats.record(gate);
                    debug!(
                        posting = %fetched.posting.id.0,
                        gate = gate.label(),
                        reason = %result.reason,
                        "hard gate rejected posting"
                    );
                }
                result.passed
            })
            .collect();
        (admitted, stats)
    }

    fn career_domain_gate(&self, contract: &IntentContract, posting: &JobPosting) -> GateResult {
        if contract.career_domains.is_empty() {
            return GateResult::admitted("no career domains selected");
        }

        match self.classifier.domain_match(&contract.career_domains, posting) {
            DomainMatch::Direct(domain) => {
                GateResult::admitted(format!("matched {} keywords", domain.label()))
            }
            DomainMatch::Bridge(bridge) => {
                GateResult::admitted(format!("matched adjacent domain via '{bridge}'"))
            }
            DomainMatch::None => GateResult::rejected(
                GateKind::CareerDomain,
                "posting matches none of the selected career domains",
            ),
        }
    }

    fn job_type_gate(&self, contract: &IntentContract, posting: &JobPosting) -> GateResult {
        if contract.job_types.is_empty() {
            return GateResult::admitted("no job types selected");
        }

        match self.classifier.posting_job_type(posting) {
            None => GateResult::admitted("posting job type ambiguous, deferring to scoring"),
            Some(posting_type) if contract.job_types.contains(&posting_type) => {
                GateResult::admitted(format!("posting is {}", posting_type.label()))
            }
            Some(posting_type) => GateResult::rejected(
                GateKind::JobType,
                format!(
                    "posting is {} but user seeks {}",
                    posting_type.label(),
                    contract
                        .job_types
                        .iter()
                        .map(|t| t.label())
                        .collect::<Vec<_>>()
                        .join("/")
                ),
            ),
        }
    }

    fn location_gate(&self, contract: &IntentContract, posting: &JobPosting) -> GateResult {
        if posting.remote {
            return GateResult::admitted("remote posting");
        }
        if contract.preferred_locations.is_empty() {
            return GateResult::admitted("no location constraint");
        }

        let posting_location = text::normalize(&posting.location);
        let posting_canonical = normalize_location(&posting.location)
            .map(|normalized| text::normalize(normalized.as_str()))
            .unwrap_or_default();

        for preferred in &contract.preferred_locations {
            let preferred_full = text::normalize(preferred.as_str());
            let preferred_city = text::normalize(preferred.city());
            if posting_location == preferred_full
                || posting_canonical == preferred_full
                || text::contains_phrase(&posting_location, &preferred_city)
            {
                return GateResult::admitted(format!("location matches {preferred}"));
            }
        }

        GateResult::rejected(
            GateKind::Location,
            format!("'{}' is outside the preferred locations", posting.location),
        )
    }

    fn seniority_gate(&self, contract: &IntentContract, posting: &JobPosting) -> GateResult {
        let phase = contract.graduation.career_phase;
        match self.classifier.seniority_conflict(phase, posting) {
            Some(keyword) => GateResult::rejected(
                GateKind::Seniority,
                format!("'{keyword}' role is too senior for {} phase", phase.label()),
            ),
            None => GateResult::admitted("seniority compatible"),
        }
    }
}
