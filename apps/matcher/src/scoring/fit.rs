//! Fit Scoring: four-component weighted match of a candidate profile against a requirement profile.
//!
//! Algorithm:
//! 1. skills     = 0.4 × Jaccard + 0.6 × coverage of required skills (0.5 if none required)
//! 2. experience = piecewise on candidate/required years (0.8 if none required)
//! 3. education  = 1.0 met, 0.7 one level short, 0.4 further short
//! 4. semantic   = cosine similarity of the two embeddings, clamped to [0, 1]
//! 5. overall    = Σ(weight × component); without embeddings the semantic
//!    weight is spread proportionally over the other three
//!
//! Every surfaced score is rounded to 4 decimals.

use std::collections::BTreeSet;

use crate::config::ScoringWeights;
use crate::errors::EmbeddingError;
use crate::models::{EducationLevel, ExtractedProfile, MatchBreakdown};
use crate::scoring::embedding::semantic_similarity;
use crate::scoring::round4;

// ────────────────────────────────────────────────────────────────────────────
// Component constants
// ────────────────────────────────────────────────────────────────────────────

const JACCARD_WEIGHT: f64 = 0.4;
const COVERAGE_WEIGHT: f64 = 0.6;
const NO_SKILLS_REQUIRED: f64 = 0.5;

const NO_EXPERIENCE_REQUIRED: f64 = 0.8;
const MEETS_EXPERIENCE_BASE: f64 = 0.95;
const SURPLUS_BONUS_PER_YEAR: f64 = 0.01;
const NEAR_MISS_RATIO: f64 = 0.8;

const ONE_LEVEL_SHORT: f64 = 0.7;
const FURTHER_SHORT: f64 = 0.4;

// ────────────────────────────────────────────────────────────────────────────
// Components
// ────────────────────────────────────────────────────────────────────────────

/// Skills component plus the matched/missing split of the required skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsMatch {
    pub score: f64,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

pub fn skills_match(candidate: &BTreeSet<String>, required: &BTreeSet<String>) -> SkillsMatch {
    let matched: BTreeSet<String> = required.intersection(candidate).cloned().collect();
    let missing: BTreeSet<String> = required.difference(candidate).cloned().collect();

    let score = if required.is_empty() {
        NO_SKILLS_REQUIRED
    } else {
        let union = candidate.union(required).count();
        let jaccard = matched.len() as f64 / union as f64;
        let coverage = matched.len() as f64 / required.len() as f64;
        JACCARD_WEIGHT * jaccard + COVERAGE_WEIGHT * coverage
    };

    SkillsMatch {
        score,
        matched,
        missing,
    }
}

/// Experience component. Meeting the requirement scores at least 0.95; falling
/// short drops gently down to 80% of the requirement, then steeply.
pub fn experience_match(candidate_years: f64, required_years: f64) -> f64 {
    if required_years <= 0.0 {
        return NO_EXPERIENCE_REQUIRED;
    }
    if candidate_years >= required_years {
        let surplus = candidate_years - required_years;
        return (MEETS_EXPERIENCE_BASE + SURPLUS_BONUS_PER_YEAR * surplus).min(1.0);
    }

    let ratio = candidate_years.max(0.0) / required_years;
    if ratio >= NEAR_MISS_RATIO {
        0.7 + (ratio - NEAR_MISS_RATIO) * 1.25
    } else {
        ratio * 0.875
    }
}

pub fn education_match(candidate: EducationLevel, required: EducationLevel) -> f64 {
    if candidate >= required {
        return 1.0;
    }
    match required.ordinal() - candidate.ordinal() {
        1 => ONE_LEVEL_SHORT,
        _ => FURTHER_SHORT,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FitScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct FitScorer {
    weights: ScoringWeights,
}

impl FitScorer {
    /// Weights are taken as given; `EngineConfig` validates them on load.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores `candidate` against the requirement profile `job`.
    ///
    /// `embeddings` is `(candidate, job)`. When absent the semantic component
    /// reads 0.0 and does not count towards the overall score.
    pub fn score(
        &self,
        candidate: &ExtractedProfile,
        job: &ExtractedProfile,
        embeddings: Option<(&[f32], &[f32])>,
    ) -> Result<MatchBreakdown, EmbeddingError> {
        let skills = skills_match(&candidate.skills, &job.skills);
        let experience = experience_match(candidate.experience_years, job.experience_years);
        let education = education_match(candidate.education_level, job.education_level);
        let semantic = embeddings
            .map(|(a, b)| semantic_similarity(a, b))
            .transpose()?;

        let w = &self.weights;
        let lexical = w.skills * skills.score + w.experience * experience + w.education * education;
        let overall = match semantic {
            Some(sim) => lexical + w.semantic * sim,
            None => {
                let remaining = w.skills + w.experience + w.education;
                if remaining > 0.0 {
                    lexical / remaining
                } else {
                    0.0
                }
            }
        };

        Ok(MatchBreakdown {
            overall_score: round4(overall.clamp(0.0, 1.0)),
            skills_score: round4(skills.score),
            experience_score: round4(experience),
            education_score: round4(education),
            semantic_score: round4(semantic.unwrap_or(0.0)),
            total_required_skills: job.skills.len(),
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            experience_met: candidate.experience_years >= job.experience_years,
            semantic_used: semantic.is_some(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn profile(skills: &[&str], years: f64, education: EducationLevel) -> ExtractedProfile {
        ExtractedProfile {
            skills: set(skills),
            experience_years: years,
            education_level: education,
            ..Default::default()
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_experience_no_requirement_is_neutral() {
        assert_eq!(experience_match(5.0, 0.0), 0.8);
        assert_eq!(experience_match(0.0, 0.0), 0.8);
    }

    #[test]
    fn test_experience_surplus_caps_at_one() {
        assert!(approx(experience_match(10.0, 5.0), 1.0));
        assert!(approx(experience_match(5.0, 5.0), 0.95));
        assert!(approx(experience_match(7.0, 5.0), 0.97));
    }

    #[test]
    fn test_experience_shortfall() {
        let score = experience_match(2.0, 5.0);
        assert!(approx(score, 0.35), "Score was {score}");
        // ratio 0.9 sits in the gentle band
        let score = experience_match(4.5, 5.0);
        assert!(approx(score, 0.825), "Score was {score}");
    }

    #[test]
    fn test_experience_bands_meet_at_near_miss_ratio() {
        assert!(approx(experience_match(4.0, 5.0), 0.7));
        assert!(experience_match(3.99, 5.0) < 0.7);
    }

    #[test]
    fn test_education_levels() {
        use EducationLevel::*;
        assert_eq!(education_match(Bachelor, Master), 0.7);
        assert_eq!(education_match(None, Master), 0.4);
        assert_eq!(education_match(Phd, Bachelor), 1.0);
        assert_eq!(education_match(None, None), 1.0);
    }

    #[test]
    fn test_skills_no_requirement_is_half() {
        let m = skills_match(&set(&["rust"]), &BTreeSet::new());
        assert_eq!(m.score, 0.5);
        assert!(m.matched.is_empty() && m.missing.is_empty());
    }

    #[test]
    fn test_skills_blend_jaccard_and_coverage() {
        // matched {rust, sql}; union 4; required 3
        let m = skills_match(&set(&["rust", "sql", "go"]), &set(&["rust", "sql", "kafka"]));
        let expected = 0.4 * (2.0 / 4.0) + 0.6 * (2.0 / 3.0);
        assert!(approx(m.score, expected), "Score was {}", m.score);
        assert_eq!(m.matched, set(&["rust", "sql"]));
        assert_eq!(m.missing, set(&["kafka"]));
    }

    #[test]
    fn test_full_score_with_embeddings() {
        let scorer = FitScorer::default();
        let candidate = profile(&["rust", "sql"], 6.0, EducationLevel::Master);
        let job = profile(&["rust", "sql"], 5.0, EducationLevel::Bachelor);
        let e = [0.2_f32, 0.4, 0.1];

        let b = scorer.score(&candidate, &job, Some((&e[..], &e[..]))).unwrap();
        // skills 1.0, experience 0.96, education 1.0, semantic 1.0
        assert_eq!(b.skills_score, 1.0);
        assert_eq!(b.experience_score, 0.96);
        assert_eq!(b.semantic_score, 1.0);
        assert_eq!(b.overall_score, 0.992);
        assert!(b.semantic_used);
        assert!(b.experience_met);
        assert_eq!(b.total_required_skills, 2);
    }

    #[test]
    fn test_missing_embeddings_redistribute_weight() {
        let scorer = FitScorer::default();
        let candidate = profile(&["rust"], 2.0, EducationLevel::Bachelor);
        let job = profile(&["rust", "kafka"], 5.0, EducationLevel::Master);

        let b = scorer.score(&candidate, &job, None).unwrap();
        assert!(!b.semantic_used);
        assert!(!b.experience_met);
        assert_eq!(b.semantic_score, 0.0);

        // skills 0.4·0.5 + 0.6·0.5 = 0.5, experience 0.35, education 0.7
        let expected = (0.4 * 0.5 + 0.2 * 0.35 + 0.1 * 0.7) / 0.7;
        assert_eq!(b.overall_score, round4(expected));
        assert_eq!(b.missing_skills, set(&["kafka"]));
    }

    #[test]
    fn test_negative_similarity_clamped() {
        let scorer = FitScorer::default();
        let p = profile(&[], 0.0, EducationLevel::None);
        let (a, opposite) = ([1.0_f32, 0.0], [-1.0_f32, 0.0]);
        let b = scorer.score(&p, &p, Some((&a[..], &opposite[..]))).unwrap();
        assert_eq!(b.semantic_score, 0.0);
        assert!(b.semantic_used);
        // 0.4·0.5 + 0.2·0.8 + 0.1·1.0
        assert_eq!(b.overall_score, 0.46);
    }

    #[test]
    fn test_bad_embedding_is_error_not_nan() {
        let scorer = FitScorer::default();
        let p = profile(&["rust"], 1.0, EducationLevel::None);
        let (a, short) = ([1.0_f32, 2.0], [1.0_f32]);
        let err = scorer.score(&p, &p, Some((&a[..], &short[..]))).unwrap_err();
        assert_eq!(err, EmbeddingError::DimensionMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_scores_bounded() {
        let scorer = FitScorer::default();
        let candidate = profile(&["rust", "go", "sql"], 40.0, EducationLevel::Phd);
        let job = profile(&["java"], 3.0, EducationLevel::Bachelor);
        let b = scorer.score(&candidate, &job, None).unwrap();
        for s in [b.overall_score, b.skills_score, b.experience_score, b.education_score] {
            assert!((0.0..=1.0).contains(&s), "Score was {s}");
        }
    }
}
