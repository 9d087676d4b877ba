//! Weighted search-query generation from an [`IntentContract`] plus soft
//! profile signals, including the fixed broadening ladder used when the
//! first pass returns a sparse market.

use serde::{Deserialize, Serialize};

use super::domain::{IntentContract, ProfileSignals};
use super::tables;

/// Hard cap on queries issued per fetch round.
pub const MAX_QUERIES: usize = 6;

/// Which generation rule produced a query; kept for logs and metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    DomainTitles,
    Skills,
    Extracurricular,
    TargetCompanies,
    Remote,
    InterestFallback,
    MetroWidened,
    AdjacentDomain,
    UnrestrictedCompanies,
}

/// One provider query with its scoring weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub location: String,
    pub weight: f32,
    pub kind: QueryKind,
}

/// Broadening stages, applied in this order and only while the accumulated
/// accepted results stay under the floor. Location and domain are never
/// widened beyond the user's own selections without the sparse signal the
/// service reports alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadenStage {
    MetroSynonyms,
    AdjacentDomains,
    DropCompanyRestriction,
}

impl BroadenStage {
    pub const ORDER: [BroadenStage; 3] = [
        BroadenStage::MetroSynonyms,
        BroadenStage::AdjacentDomains,
        BroadenStage::DropCompanyRestriction,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            BroadenStage::MetroSynonyms => "metro_synonyms",
            BroadenStage::AdjacentDomains => "adjacent_domains",
            BroadenStage::DropCompanyRestriction => "drop_company_restriction",
        }
    }
}

pub struct QueryGenerator;

impl QueryGenerator {
    /// Generate the base query plan, highest-priority rule first, capped at
    /// [`MAX_QUERIES`].
    pub fn generate(contract: &IntentContract, signals: &ProfileSignals) -> Vec<SearchQuery> {
        let prefix = job_type_prefix(contract);
        let primary_domain = contract.career_domains.iter().next().copied();
        let locations = effective_locations(contract);
        let mut queries = Vec::new();

        // (1) Domain title queries, rotating every selected domain across
        // the preferred locations so no domain is left out of the base plan.
        let domain_titles: Vec<&'static str> = contract
            .career_domains
            .iter()
            .map(|domain| tables::title_keywords(*domain)[0])
            .collect();
        if !domain_titles.is_empty() {
            let pairings = domain_titles.len().max(locations.len());
            for index in 0..pairings {
                if queries.len() >= MAX_QUERIES {
                    break;
                }
                queries.push(SearchQuery {
                    query: with_prefix(&prefix, domain_titles[index % domain_titles.len()]),
                    location: locations[index % locations.len()].clone(),
                    weight: 1.2,
                    kind: QueryKind::DomainTitles,
                });
            }
        }

        // (2) Top resume skills.
        if queries.len() < MAX_QUERIES && !signals.skills.is_empty() {
            let mut skills: Vec<_> = signals.skills.iter().collect();
            skills.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
            let joined = skills
                .iter()
                .take(3)
                .map(|skill| skill.name.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            queries.push(SearchQuery {
                query: with_prefix(&prefix, &joined),
                location: locations[0].clone(),
                weight: 1.1,
                kind: QueryKind::Skills,
            });
        }

        // (3) Extracurricular/activity signal.
        if queries.len() < MAX_QUERIES {
            if let Some(activity) = signals.extracurriculars.first() {
                queries.push(SearchQuery {
                    query: with_prefix(&prefix, activity),
                    location: locations[0].clone(),
                    weight: 1.15,
                    kind: QueryKind::Extracurricular,
                });
            }
        }

        // (4) Named target companies for the domain.
        if queries.len() < MAX_QUERIES {
            if let Some(domain) = primary_domain {
                let companies = tables::target_companies(domain).join(" ");
                let title = tables::title_keywords(domain)[0];
                queries.push(SearchQuery {
                    query: with_prefix(&prefix, &format!("{title} {companies}")),
                    location: locations[0].clone(),
                    weight: 1.25,
                    kind: QueryKind::TargetCompanies,
                });
            }
        }

        // (5) Remote-specific query.
        if queries.len() < MAX_QUERIES {
            let topic = primary_domain
                .map(|domain| tables::title_keywords(domain)[0].to_string())
                .or_else(|| signals.interests.first().cloned())
                .unwrap_or_else(|| "analyst".to_string());
            queries.push(SearchQuery {
                query: with_prefix(&prefix, &format!("remote {topic}")),
                location: "Remote".to_string(),
                weight: 1.1,
                kind: QueryKind::Remote,
            });
        }

        // (6) Single-interest fallback.
        if queries.len() < MAX_QUERIES {
            if let Some(interest) = signals.interests.first() {
                queries.push(SearchQuery {
                    query: with_prefix(&prefix, interest),
                    location: locations[0].clone(),
                    weight: 1.0,
                    kind: QueryKind::InterestFallback,
                });
            }
        }

        queries.truncate(MAX_QUERIES);
        queries
    }

    /// Extra queries for one broadening stage. Stages widen strictly within
    /// the user's stated city and domain selections.
    pub fn broaden(contract: &IntentContract, stage: BroadenStage) -> Vec<SearchQuery> {
        let prefix = job_type_prefix(contract);
        let primary_domain = contract.career_domains.iter().next().copied();
        let mut queries = Vec::new();

        match stage {
            BroadenStage::MetroSynonyms => {
                let Some(domain) = primary_domain else {
                    return queries;
                };
                let title = tables::title_keywords(domain)[0];
                for location in &contract.preferred_locations {
                    for synonym in tables::metro_synonyms(location.city()) {
                        if queries.len() >= MAX_QUERIES {
                            return queries;
                        }
                        queries.push(SearchQuery {
                            query: with_prefix(&prefix, title),
                            location: (*synonym).to_string(),
                            weight: 1.2,
                            kind: QueryKind::MetroWidened,
                        });
                    }
                }
            }
            BroadenStage::AdjacentDomains => {
                for domain in &contract.career_domains {
                    for bridge in tables::adjacency_bridge(*domain) {
                        if queries.len() >= MAX_QUERIES {
                            return queries;
                        }
                        let title = tables::title_keywords(*domain)[0];
                        queries.push(SearchQuery {
                            query: with_prefix(&prefix, &format!("{bridge} {title}")),
                            location: effective_locations(contract)[0].clone(),
                            weight: 1.1,
                            kind: QueryKind::AdjacentDomain,
                        });
                    }
                }
            }
            BroadenStage::DropCompanyRestriction => {
                let Some(domain) = primary_domain else {
                    return queries;
                };
                // Drops only the named-company restriction; the location
                // stays whatever the user selected.
                for title in tables::title_keywords(domain).iter().take(2) {
                    queries.push(SearchQuery {
                        query: with_prefix(&prefix, title),
                        location: effective_locations(contract)[0].clone(),
                        weight: 1.0,
                        kind: QueryKind::UnrestrictedCompanies,
                    });
                }
            }
        }

        queries
    }
}

fn job_type_prefix(contract: &IntentContract) -> Option<&'static str> {
    contract
        .job_types
        .iter()
        .next()
        .map(|job_type| job_type.query_token())
}

fn with_prefix(prefix: &Option<&'static str>, body: &str) -> String {
    match prefix {
        Some(token) => format!("{token} {body}"),
        None => body.to_string(),
    }
}

/// Preferred locations, or the broad-market token when the user stated none.
fn effective_locations(contract: &IntentContract) -> Vec<String> {
    if contract.preferred_locations.is_empty() {
        vec![tables::BROAD_LOCATION.to_string()]
    } else {
        contract
            .preferred_locations
            .iter()
            .map(|location| location.as_str().to_string())
            .collect()
    }
}
