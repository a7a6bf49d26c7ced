// Keyword layer: vocabularies, suffix-aware matching, normalization, domain detection.

pub mod domain;
pub mod lists;
pub mod matcher;
pub mod normalizer;

pub use domain::DomainClassifier;
pub use matcher::KeywordMatcher;
pub use normalizer::KeywordNormalizer;

use lists::{GENERAL_KEYWORDS, PM_MARKETING_KEYWORDS, SWE_ESSENTIALS, SWE_NICE_TO_HAVES};

/// One compiled matcher per curated vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabularies {
    pub general: KeywordMatcher,
    pub swe_essentials: KeywordMatcher,
    pub swe_nice_to_haves: KeywordMatcher,
    pub pm_marketing: KeywordMatcher,
}

impl Vocabularies {
    pub fn standard() -> Result<Self, regex::Error> {
        Ok(Self {
            general: KeywordMatcher::new(GENERAL_KEYWORDS)?,
            swe_essentials: KeywordMatcher::new(SWE_ESSENTIALS)?,
            swe_nice_to_haves: KeywordMatcher::new(SWE_NICE_TO_HAVES)?,
            pm_marketing: KeywordMatcher::new(PM_MARKETING_KEYWORDS)?,
        })
    }
}
