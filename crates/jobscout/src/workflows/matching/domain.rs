use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for fetched job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostingId(pub String);

/// Canonical career domains the pipeline can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerDomain {
    FinanceBanking,
    Technology,
    Consulting,
    Marketing,
    Sales,
    Operations,
    Healthcare,
    Education,
}

impl CareerDomain {
    pub const fn label(self) -> &'static str {
        match self {
            CareerDomain::FinanceBanking => "finance_banking",
            CareerDomain::Technology => "technology",
            CareerDomain::Consulting => "consulting",
            CareerDomain::Marketing => "marketing",
            CareerDomain::Sales => "sales",
            CareerDomain::Operations => "operations",
            CareerDomain::Healthcare => "healthcare",
            CareerDomain::Education => "education",
        }
    }
}

/// Employment arrangement a student can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Internship,
    FullTime,
}

impl JobType {
    pub const fn label(self) -> &'static str {
        match self {
            JobType::Internship => "internship",
            JobType::FullTime => "full-time",
        }
    }

    /// Token prefixed into generated search queries.
    pub const fn query_token(self) -> &'static str {
        match self {
            JobType::Internship => "internship",
            JobType::FullTime => "entry level",
        }
    }
}

/// Where the student sits relative to graduation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerPhase {
    Internship,
    NewGrad,
    Graduated,
}

impl CareerPhase {
    pub const fn label(self) -> &'static str {
        match self {
            CareerPhase::Internship => "internship",
            CareerPhase::NewGrad => "new_grad",
            CareerPhase::Graduated => "graduated",
        }
    }
}

/// Normalized "City, ST" location string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedLocation(String);

impl NormalizedLocation {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// City component (text before the comma, or the whole string).
    pub fn city(&self) -> &str {
        self.0.split(',').next().unwrap_or(&self.0).trim()
    }
}

impl std::fmt::Display for NormalizedLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Graduation timing derived from profile year/month with documented fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraduationTiming {
    pub year: i32,
    /// 1-based calendar month (May = 5).
    pub month: u32,
    pub months_until_graduation: i32,
    pub career_phase: CareerPhase,
}

/// Degree context carried through for affinity scoring and display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationContext {
    pub major: Option<String>,
    pub degree: Option<String>,
    pub university: Option<String>,
}

/// Canonical, immutable representation of one user's job-search intent.
///
/// Built fresh for each search request by the intent normalizer; downstream
/// stages never re-check raw profile shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentContract {
    pub career_domains: BTreeSet<CareerDomain>,
    pub preferred_locations: Vec<NormalizedLocation>,
    pub job_types: BTreeSet<JobType>,
    pub graduation: GraduationTiming,
    pub education: EducationContext,
    pub resume_present: bool,
}

/// Raw profile record as the profile collaborator hands it over. Every field
/// is optional; the normalizer resolves gaps with documented defaults instead
/// of erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    pub career_interests: Vec<String>,
    pub major: Option<String>,
    pub degree: Option<String>,
    pub university: Option<String>,
    pub job_types: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub graduation_year: Option<i32>,
    pub graduation_month: Option<u32>,
    pub resume_present: bool,
}

/// Resume skill with the parser's extraction confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSignal {
    pub name: String,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_confidence() -> f32 {
    1.0
}

impl SkillSignal {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

impl From<&str> for SkillSignal {
    fn from(name: &str) -> Self {
        Self::new(name, 1.0)
    }
}

/// Past role summary used for experience-relevance scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceSignal {
    pub title: String,
    pub company: String,
    pub keywords: Vec<String>,
}

/// Soft-preference inputs owned by the profile store; read-only here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSignals {
    pub skills: Vec<SkillSignal>,
    pub experiences: Vec<ExperienceSignal>,
    pub extracurriculars: Vec<String>,
    pub interests: Vec<String>,
    pub target_industries: Vec<String>,
}

impl ProfileSignals {
    /// True when any soft signal is present at all.
    pub fn any_present(&self) -> bool {
        !self.skills.is_empty()
            || !self.experiences.is_empty()
            || !self.extracurriculars.is_empty()
            || !self.interests.is_empty()
            || !self.target_industries.is_empty()
    }
}

/// Posting as produced by the external search provider; immutable within a
/// pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: PostingId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub remote: bool,
    pub posted_at: NaiveDate,
    /// Provider-reported source quality in [0, 1].
    pub source_quality: f32,
}

/// The gate that rejected a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    CareerDomain,
    JobType,
    Location,
    Seniority,
}

impl GateKind {
    pub const fn label(self) -> &'static str {
        match self {
            GateKind::CareerDomain => "career_domain",
            GateKind::JobType => "job_type",
            GateKind::Location => "location",
            GateKind::Seniority => "seniority",
        }
    }
}

/// Admit/reject verdict for one posting against one (or all) hard gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateResult {
    pub passed: bool,
    pub failed_gate: Option<GateKind>,
    pub reason: String,
}

impl GateResult {
    pub fn admitted(reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            failed_gate: None,
            reason: reason.into(),
        }
    }

    pub fn rejected(gate: GateKind, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            failed_gate: Some(gate),
            reason: reason.into(),
        }
    }
}

/// Named scoring factors, allowing transparent audits of a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    BaseRelevance,
    DomainAffinity,
    SkillsMatch,
    ExperienceRelevance,
    ExtracurricularOverlap,
    InterestMatch,
    TargetIndustry,
    TimingAlignment,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::BaseRelevance => "base_relevance",
            ScoreFactor::DomainAffinity => "domain_affinity",
            ScoreFactor::SkillsMatch => "skills_match",
            ScoreFactor::ExperienceRelevance => "experience_relevance",
            ScoreFactor::ExtracurricularOverlap => "extracurricular_overlap",
            ScoreFactor::InterestMatch => "interest_match",
            ScoreFactor::TargetIndustry => "target_industry",
            ScoreFactor::TimingAlignment => "timing_alignment",
        }
    }
}

/// Discrete contribution to a posting's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub factor: ScoreFactor,
    pub points: i16,
    pub notes: String,
}

/// Scored, gate-admitted posting ready for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPosting {
    pub posting: JobPosting,
    /// Final score, always clamped to [0, 100].
    pub score: u8,
    pub components: Vec<ComponentScore>,
    pub query_weight: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_location_exposes_city_component() {
        let loc = NormalizedLocation::new("New York, NY");
        assert_eq!(loc.city(), "New York");
        assert_eq!(loc.to_string(), "New York, NY");
    }

    #[test]
    fn raw_profile_deserializes_from_sparse_document() {
        let profile: RawProfile =
            serde_json::from_str(r#"{ "major": "Finance" }"#).expect("sparse profile parses");
        assert_eq!(profile.major.as_deref(), Some("Finance"));
        assert!(profile.career_interests.is_empty());
        assert!(!profile.resume_present);
    }

    #[test]
    fn skill_signal_defaults_confidence_when_missing() {
        let skill: SkillSignal =
            serde_json::from_str(r#"{ "name": "Excel" }"#).expect("skill parses");
        assert_eq!(skill.confidence, 1.0);
    }
}
