//! Multi-factor weighted scoring over gate-admitted postings. Scoring ranks
//! within the candidate universe; it never filters.

mod config;
mod rules;

pub use config::ScoringConfig;

use std::sync::Arc;

use super::domain::{IntentContract, ProfileSignals, ScoredPosting};
use super::fetch::FetchedPosting;
use super::gates::Classifier;

pub struct ScoringEngine {
    config: ScoringConfig,
    classifier: Arc<dyn Classifier>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig, classifier: Arc<dyn Classifier>) -> Self {
        Self { config, classifier }
    }

    /// Score one admitted posting. The final score is the raw component sum
    /// scaled by the query weight, clamped to [0, 100].
    pub fn score(
        &self,
        contract: &IntentContract,
        signals: &ProfileSignals,
        fetched: &FetchedPosting,
    ) -> ScoredPosting {
        let breakdown = rules::score_posting(
            contract,
            signals,
            &fetched.posting,
            self.classifier.as_ref(),
            &self.config,
        );

        let weighted = breakdown.raw_total * fetched.query_weight;
        let score = weighted.round().clamp(0.0, 100.0) as u8;

        ScoredPosting {
            posting: fetched.posting.clone(),
            score,
            components: breakdown.components,
            query_weight: fetched.query_weight,
        }
    }
}
