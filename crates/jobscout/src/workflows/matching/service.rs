//! Pipeline facade: profile → intent contract → queries → fetch → quality →
//! gates → scoring → ranked feed, with the broadening ladder and the sparse
//! universe signal.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::info;

use super::domain::{GateKind, IntentContract, ProfileSignals, RawProfile, ScoredPosting};
use super::fetch::{ListingFetcher, ListingProvider, PostingAccumulator};
use super::gates::{HardGateEngine, KeywordClassifier};
use super::intent::IntentNormalizer;
use super::quality::{QualityConfig, QualityFilter};
use super::queries::{BroadenStage, QueryGenerator, SearchQuery};
use super::ranker::Ranker;
use super::scoring::{ScoringConfig, ScoringEngine};

/// Tunables for one matching deployment.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub fetch_timeout: Duration,
    pub fetch_concurrency: usize,
    /// Broadening stops once this many quality-accepted postings accumulate.
    pub broaden_floor: usize,
    /// Below this many admitted postings the sparse signal is raised.
    pub sparse_threshold: usize,
    pub quality: QualityConfig,
    pub scoring: ScoringConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(8),
            fetch_concurrency: 4,
            broaden_floor: 20,
            sparse_threshold: 10,
            quality: QualityConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// Structured "market sparse" signal; surfaced to the caller rather than
/// silently relaxing gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseSignal {
    pub admitted: usize,
    pub minimum: usize,
}

/// Run metadata returned alongside the feed.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMetadata {
    pub total_fetched: usize,
    pub total_after_quality: usize,
    pub total_after_gates: usize,
    pub gate_rejections: BTreeMap<GateKind, usize>,
    pub quality_rejected: usize,
    pub queries_used: Vec<SearchQuery>,
    pub broadened: Vec<BroadenStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse: Option<SparseSignal>,
}

/// Ordered feed plus run metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub feed: Vec<ScoredPosting>,
    pub more_available: bool,
    pub metadata: SearchMetadata,
}

/// Service composing the normalizer, fetch fan-out, quality filter, gate
/// engine, scoring engine, and ranker. One instance serves many requests;
/// every per-request artifact is built fresh inside `search`.
pub struct JobMatchService<P> {
    fetcher: ListingFetcher<P>,
    config: MatchConfig,
    gates: HardGateEngine,
    scoring: ScoringEngine,
    today: NaiveDate,
}

impl<P: ListingProvider + 'static> JobMatchService<P> {
    pub fn new(provider: Arc<P>, config: MatchConfig) -> Self {
        Self::with_today(provider, config, Local::now().date_naive())
    }

    /// Pin "today" for deterministic posting-age and graduation math in tests.
    pub fn with_today(provider: Arc<P>, config: MatchConfig, today: NaiveDate) -> Self {
        let fetcher = ListingFetcher::new(
            Arc::clone(&provider),
            config.fetch_timeout,
            config.fetch_concurrency,
        );
        let scoring = ScoringEngine::new(
            config.scoring.clone(),
            Arc::new(KeywordClassifier::new()),
        );
        Self {
            fetcher,
            config,
            gates: HardGateEngine::new(),
            scoring,
            today,
        }
    }

    /// Execute one personalized search end to end. Never fails: fetch
    /// problems degrade to fewer postings and a sparse or empty feed is
    /// reported, not raised.
    pub async fn search(&self, profile: &RawProfile, signals: &ProfileSignals) -> SearchOutcome {
        let contract = IntentNormalizer::with_today(self.today).normalize(profile);
        self.search_with_contract(&contract, signals).await
    }

    /// Same pipeline, for callers that already hold a contract.
    pub async fn search_with_contract(
        &self,
        contract: &IntentContract,
        signals: &ProfileSignals,
    ) -> SearchOutcome {
        let quality = QualityFilter::new(self.config.quality.clone(), self.today);

        let base_queries = QueryGenerator::generate(contract, signals);
        let mut queries_used = base_queries.clone();
        let mut accumulator = PostingAccumulator::new();
        accumulator.absorb(self.fetcher.dispatch(&base_queries).await);

        let (mut accepted, mut quality_rejected) =
            quality.screen(accumulator.postings().to_vec());

        // Broaden in fixed stages only while the accepted universe stays
        // below the floor; the stages never leave the user's stated
        // city/domain selections.
        let mut broadened = Vec::new();
        for stage in BroadenStage::ORDER {
            if accepted.len() >= self.config.broaden_floor {
                break;
            }
            let extra = QueryGenerator::broaden(contract, stage);
            if extra.is_empty() {
                continue;
            }
            broadened.push(stage);
            accumulator.absorb(self.fetcher.dispatch(&extra).await);
            queries_used.extend(extra);
            let (rescreened, rejected) = quality.screen(accumulator.postings().to_vec());
            accepted = rescreened;
            quality_rejected = rejected;
        }

        let total_fetched = accumulator.total_fetched();
        let total_after_quality = accepted.len();

        let (admitted, gate_stats) = self.gates.admit(contract, accepted);
        let total_after_gates = admitted.len();

        let scored: Vec<ScoredPosting> = admitted
            .iter()
            .map(|fetched| self.scoring.score(contract, signals, fetched))
            .collect();

        let ranked = Ranker::rank(scored);

        let sparse = (total_after_gates < self.config.sparse_threshold).then(|| SparseSignal {
            admitted: total_after_gates,
            minimum: self.config.sparse_threshold,
        });

        info!(
            total_fetched,
            total_after_quality,
            total_after_gates,
            feed_len = ranked.feed.len(),
            broadened = broadened.len(),
            sparse = sparse.is_some(),
            "job match search complete"
        );

        SearchOutcome {
            feed: ranked.feed,
            more_available: ranked.more_available,
            metadata: SearchMetadata {
                total_fetched,
                total_after_quality,
                total_after_gates,
                gate_rejections: gate_stats.by_gate,
                quality_rejected,
                queries_used,
                broadened,
                sparse,
            },
        }
    }
}
