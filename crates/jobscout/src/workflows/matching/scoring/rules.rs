use std::collections::BTreeSet;

use super::config::ScoringConfig;
use crate::workflows::matching::domain::{
    CareerPhase, ComponentScore, IntentContract, JobPosting, JobType, ProfileSignals, ScoreFactor,
};
use crate::workflows::matching::gates::Classifier;
use crate::workflows::matching::text::{self, PostingText};

pub(crate) struct ScoreBreakdown {
    pub components: Vec<ComponentScore>,
    pub raw_total: f32,
}

/// Sum every soft-signal component for one admitted posting. All hard
/// constraints are already satisfied; this only ranks.
pub(crate) fn score_posting(
    contract: &IntentContract,
    signals: &ProfileSignals,
    posting: &JobPosting,
    classifier: &dyn Classifier,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let posting_text = PostingText::new(&posting.title, &posting.description);
    let mut components = Vec::new();
    let mut raw_total = 0.0_f32;

    let mut push = |components: &mut Vec<ComponentScore>, factor, points: f32, notes: String| {
        components.push(ComponentScore {
            factor,
            points: points.round() as i16,
            notes,
        });
        points
    };

    if signals.any_present() || contract.resume_present {
        raw_total += push(
            &mut components,
            ScoreFactor::BaseRelevance,
            config.base_relevance_points,
            "profile signals present".to_string(),
        );
    }

    let affinity = classifier.domain_affinity(&contract.career_domains, posting);
    raw_total += push(
        &mut components,
        ScoreFactor::DomainAffinity,
        affinity * config.domain_affinity_max,
        format!("domain affinity multiplier {affinity:.2}"),
    );

    let (skill_points, skill_matches) = skills_match(signals, &posting_text, config);
    if skill_matches > 0 {
        raw_total += push(
            &mut components,
            ScoreFactor::SkillsMatch,
            skill_points,
            format!("{skill_matches} skill(s) matched"),
        );
    }

    let (experience_points, experiences_matched) =
        experience_relevance(signals, &posting_text, config);
    if experiences_matched > 0 {
        raw_total += push(
            &mut components,
            ScoreFactor::ExperienceRelevance,
            experience_points,
            format!("{experiences_matched} past role(s) overlap"),
        );
    }

    let extracurricular = extracurricular_overlap(signals, &posting_text, config);
    if extracurricular > 0.0 {
        raw_total += push(
            &mut components,
            ScoreFactor::ExtracurricularOverlap,
            extracurricular,
            "extracurricular keywords overlap".to_string(),
        );
    }

    let interests = interest_match(signals, &posting_text, config);
    if interests > 0.0 {
        raw_total += push(
            &mut components,
            ScoreFactor::InterestMatch,
            interests,
            "stated interests appear in posting".to_string(),
        );
    }

    let industry = target_industry_match(signals, &posting_text, config);
    if industry > 0.0 {
        raw_total += push(
            &mut components,
            ScoreFactor::TargetIndustry,
            industry,
            "target industry matched".to_string(),
        );
    }

    if let Some(notes) = timing_alignment(contract, posting, classifier) {
        raw_total += push(
            &mut components,
            ScoreFactor::TimingAlignment,
            config.timing_max,
            notes,
        );
    }

    ScoreBreakdown {
        components,
        raw_total,
    }
}

/// Skill component: title hits earn full points per skill, description hits
/// earn reduced points with a confidence floor, and a small multiplicative
/// bonus rewards breadth. Capped at `skills_max`.
fn skills_match(
    signals: &ProfileSignals,
    posting_text: &PostingText,
    config: &ScoringConfig,
) -> (f32, usize) {
    let mut ranked: Vec<_> = signals.skills.iter().collect();
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut points = 0.0_f32;
    let mut matches = 0usize;
    for skill in ranked.into_iter().take(config.top_skills) {
        if posting_text.title_has(&skill.name) {
            points += config.title_skill_points * skill.confidence;
            matches += 1;
        } else if posting_text.description_has(&skill.name) {
            points += config.description_skill_points
                * skill.confidence.max(config.description_confidence_floor);
            matches += 1;
        }
    }

    let bonus = 1.0 + config.skill_bonus_step * matches.min(config.skill_bonus_cap) as f32;
    (f32::min(points * bonus, config.skills_max), matches)
}

/// Word-overlap between past role titles/keywords and the posting text.
fn experience_relevance(
    signals: &ProfileSignals,
    posting_text: &PostingText,
    config: &ScoringConfig,
) -> (f32, usize) {
    let posting_tokens = posting_text.combined_tokens();
    let mut points = 0.0_f32;
    let mut matched = 0usize;

    for experience in signals.experiences.iter().take(config.top_experiences) {
        let mut experience_tokens = text::tokens(&experience.title);
        for keyword in &experience.keywords {
            experience_tokens.extend(text::tokens(keyword));
        }
        let overlap = experience_tokens
            .intersection(&posting_tokens)
            .filter(|token| token.len() > 2)
            .count();
        if overlap > 0 {
            matched += 1;
            points += f32::min(overlap as f32, config.per_experience_cap);
        }
    }

    (f32::min(points, config.experience_max), matched)
}

fn extracurricular_overlap(
    signals: &ProfileSignals,
    posting_text: &PostingText,
    config: &ScoringConfig,
) -> f32 {
    let posting_tokens = posting_text.combined_tokens();
    let mut points = 0.0_f32;
    for activity in &signals.extracurriculars {
        let activity_tokens: BTreeSet<_> = text::tokens(activity)
            .into_iter()
            .filter(|token| token.len() > 2)
            .collect();
        if activity_tokens
            .intersection(&posting_tokens)
            .next()
            .is_some()
        {
            points += 2.0;
        }
    }
    f32::min(points, config.extracurricular_max)
}

fn interest_match(
    signals: &ProfileSignals,
    posting_text: &PostingText,
    config: &ScoringConfig,
) -> f32 {
    let mut points = 0.0_f32;
    for interest in &signals.interests {
        if posting_text.has(interest) {
            points += 2.0;
        }
    }
    f32::min(points, config.interest_max)
}

fn target_industry_match(
    signals: &ProfileSignals,
    posting_text: &PostingText,
    config: &ScoringConfig,
) -> f32 {
    for industry in &signals.target_industries {
        if posting_text.has(industry) {
            return config.industry_max;
        }
    }
    0.0
}

/// Small ranking bonus when job type and phase are already optimal; a nuance
/// on top of the job-type gate, not a second filter.
fn timing_alignment(
    contract: &IntentContract,
    posting: &JobPosting,
    classifier: &dyn Classifier,
) -> Option<String> {
    let posting_type = classifier.posting_job_type(posting)?;
    if !contract.job_types.contains(&posting_type) {
        return None;
    }

    let phase = contract.graduation.career_phase;
    let optimal = matches!(
        (phase, posting_type),
        (CareerPhase::Internship, JobType::Internship)
            | (CareerPhase::NewGrad, JobType::FullTime)
            | (CareerPhase::Graduated, JobType::FullTime)
    );

    optimal.then(|| {
        format!(
            "{} posting aligns with {} phase",
            posting_type.label(),
            phase.label()
        )
    })
}
