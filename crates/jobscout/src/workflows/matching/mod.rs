//! Intent-driven job matching pipeline.
//!
//! Stages, leaves first: intent normalization, query generation, listing
//! fetch with dedup, quality filtering, hard eligibility gates, weighted
//! scoring, and final ranking. A posting that fails any hard gate never
//! reaches the scoring engine.

pub mod domain;
pub mod fetch;
pub mod gates;
pub(crate) mod intent;
pub mod quality;
pub mod queries;
pub(crate) mod ranker;
pub(crate) mod scoring;
pub mod service;
pub(crate) mod tables;
pub(crate) mod text;

#[cfg(test)]
mod tests;

pub use domain::{
    CareerDomain, CareerPhase, ComponentScore, EducationContext, ExperienceSignal, GateKind,
    GateResult, GraduationTiming, IntentContract, JobPosting, JobType, NormalizedLocation,
    PostingId, ProfileSignals, RawProfile, ScoreFactor, ScoredPosting, SkillSignal,
};
pub use fetch::{FetchError, FetchedPosting, ListingProvider, PostingAccumulator};
pub use gates::{Classifier, GateRejectionStats, HardGateEngine, KeywordClassifier};
pub use intent::IntentNormalizer;
pub use quality::{QualityConfig, QualityFilter};
pub use queries::{BroadenStage, QueryGenerator, QueryKind, SearchQuery, MAX_QUERIES};
pub use ranker::{RankedFeed, Ranker};
pub use scoring::{ScoringConfig, ScoringEngine};
pub use service::{JobMatchService, MatchConfig, SearchMetadata, SearchOutcome, SparseSignal};
