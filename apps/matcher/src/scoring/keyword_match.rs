//! Keyword overlap scoring, routed by job domain.
//!
//! Algorithm:
//! 1. Classify the job text (`Swe`, `PmMarketing`, `General`)
//! 2. Extract domain vocabulary keywords (with suffix forms) from both texts
//! 3. Normalize each résumé/job pool pair (synonyms, then prefixes)
//! 4. `Swe`: weighted essentials/nice-to-haves; otherwise plain overlap
//!
//! Scores are in [0, 1] and rounded to 4 decimals. Empty pools score 0.0.

use std::collections::HashSet;

use tracing::debug;

use crate::keywords::{DomainClassifier, KeywordNormalizer, Vocabularies};
use crate::models::{Domain, KeywordMatch};
use crate::scoring::round4;

/// Essentials count this many times a nice-to-have.
pub const ESSENTIAL_WEIGHT: usize = 5;

/// Matched/missing split of one keyword pool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlap {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl Overlap {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// `matched = job ∩ resume`, `missing = job − resume`, both in job order.
pub fn overlap(resume: &[String], job: &[String]) -> Overlap {
    let have: HashSet<&str> = resume.iter().map(String::as_str).collect();
    let (matched, missing): (Vec<String>, Vec<String>) =
        job.iter().cloned().partition(|kw| have.contains(kw.as_str()));
    Overlap { matched, missing }
}

#[derive(Debug, Clone)]
pub struct KeywordScorer {
    normalizer: KeywordNormalizer,
    vocabularies: Vocabularies,
    classifier: DomainClassifier,
}

impl KeywordScorer {
    pub fn new(
        normalizer: KeywordNormalizer,
        vocabularies: Vocabularies,
        classifier: DomainClassifier,
    ) -> Self {
        Self {
            normalizer,
            vocabularies,
            classifier,
        }
    }

    pub fn standard() -> Result<Self, regex::Error> {
        Ok(Self::new(
            KeywordNormalizer::standard(),
            Vocabularies::standard()?,
            DomainClassifier::new()?,
        ))
    }

    pub fn normalizer(&self) -> &KeywordNormalizer {
        &self.normalizer
    }

    pub fn classify(&self, job_text: &str) -> Domain {
        self.classifier.classify(job_text)
    }

    /// Plain overlap: `|matched| / |job|`, 0.0 when the job has no keywords.
    pub fn match_basic<S: AsRef<str>>(
        &self,
        resume_keywords: &[S],
        job_keywords: &[S],
    ) -> KeywordMatch {
        let (resume, job) = self.normalizer.normalize_pair(resume_keywords, job_keywords);

        let Overlap { matched, missing } = overlap(&resume, &job);
        let score = if job.is_empty() {
            0.0
        } else {
            matched.len() as f64 / job.len() as f64
        };

        KeywordMatch {
            domain: Domain::General,
            score: round4(score),
            matches: matched,
            unmatches: missing,
        }
    }

    /// Weighted overlap: essentials count `ESSENTIAL_WEIGHT` times a nice-to-have.
    /// 0.0 when both job pools are empty.
    pub fn match_weighted<S: AsRef<str>>(
        &self,
        resume_essentials: &[S],
        resume_nice: &[S],
        job_essentials: &[S],
        job_nice: &[S],
    ) -> KeywordMatch {
        let (r_ess, j_ess) = self.normalizer.normalize_pair(resume_essentials, job_essentials);
        let (r_nice, j_nice) = self.normalizer.normalize_pair(resume_nice, job_nice);
        let essentials = overlap(&r_ess, &j_ess);
        let nice = overlap(&r_nice, &j_nice);

        let numerator = ESSENTIAL_WEIGHT * essentials.matched.len() + nice.matched.len();
        let denominator = ESSENTIAL_WEIGHT * essentials.total() + nice.total();
        let score = if denominator == 0 {
            0.0
        } else {
            numerator as f64 / denominator as f64
        };

        let mut matches = essentials.matched;
        matches.extend(nice.matched);
        let mut unmatches = essentials.missing;
        unmatches.extend(nice.missing);

        KeywordMatch {
            domain: Domain::Swe,
            score: round4(score),
            matches,
            unmatches,
        }
    }

    /// Classifies the job, extracts domain keywords from both texts and scores them.
    pub fn match_texts(&self, resume_text: &str, job_text: &str) -> KeywordMatch {
        let domain = self.classify(job_text);
        let v = &self.vocabularies;

        let result = match domain {
            Domain::Swe => self.match_weighted(
                &v.swe_essentials.extract(resume_text),
                &v.swe_nice_to_haves.extract(resume_text),
                &v.swe_essentials.extract(job_text),
                &v.swe_nice_to_haves.extract(job_text),
            ),
            Domain::PmMarketing | Domain::General => {
                let vocab = if domain == Domain::PmMarketing {
                    &v.pm_marketing
                } else {
                    &v.general
                };
                KeywordMatch {
                    domain,
                    ..self.match_basic(&vocab.extract(resume_text), &vocab.extract(job_text))
                }
            }
        };

        debug!(
            "Keyword match ({:?}): score={} matched={} missing={}",
            result.domain,
            result.score,
            result.matches.len(),
            result.unmatches.len()
        );
        result
    }
}
