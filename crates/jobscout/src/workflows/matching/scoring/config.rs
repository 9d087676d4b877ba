use serde::{Deserialize, Serialize};

/// Weight and cap configuration for the ranking score. Raw component sums
/// top out at 100 before the query-weight multiplier; the final score is
/// clamped back into [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Flat points for having any profile signal at all.
    pub base_relevance_points: f32,
    /// Ceiling for the domain-affinity component (affinity in [0,1] scales it).
    pub domain_affinity_max: f32,
    pub skills_max: f32,
    pub title_skill_points: f32,
    pub description_skill_points: f32,
    /// Floor applied to a skill's confidence for description matches.
    pub description_confidence_floor: f32,
    pub skill_bonus_step: f32,
    pub skill_bonus_cap: usize,
    pub top_skills: usize,
    pub experience_max: f32,
    pub per_experience_cap: f32,
    pub top_experiences: usize,
    pub extracurricular_max: f32,
    pub interest_max: f32,
    pub industry_max: f32,
    pub timing_max: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_relevance_points: 20.0,
            domain_affinity_max: 20.0,
            skills_max: 30.0,
            title_skill_points: 6.0,
            description_skill_points: 3.0,
            description_confidence_floor: 0.8,
            skill_bonus_step: 0.03,
            skill_bonus_cap: 5,
            top_skills: 15,
            experience_max: 15.0,
            per_experience_cap: 5.0,
            top_experiences: 5,
            extracurricular_max: 6.0,
            interest_max: 4.0,
            industry_max: 3.0,
            timing_max: 2.0,
        }
    }
}
