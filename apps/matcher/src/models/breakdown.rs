use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Job-description domain. Selects the keyword vocabulary and the overlap formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Swe,
    PmMarketing,
    General,
}

/// Result of the domain-routed keyword scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub domain: Domain,
    pub score: f64,           // 0.0 – 1.0, 4 decimals
    pub matches: Vec<String>, // job keywords the résumé covers
    pub unmatches: Vec<String>, // job keywords the résumé lacks
}

/// Full weighted match of one résumé against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub overall_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub semantic_score: f64,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub total_required_skills: usize,
    pub experience_met: bool,
    /// false when an embedding was missing and the semantic weight was redistributed.
    pub semantic_used: bool,
}
