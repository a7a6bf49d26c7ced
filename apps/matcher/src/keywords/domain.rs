use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::models::Domain;

/// Stems are bounded on the left only so inflections count ("technical", "engineered").
/// Short acronyms are bounded on both sides ("ai" must not fire inside "email").
const SWE_PATTERN: &str =
    r"\b(?:engineer|develop|programm|coder|solutions architect|machine learning|tech)|\bai\b";

const PM_MARKETING_PATTERN: &str =
    r"\b(?:product|market|advertis|copywrit|social media|brand|ambassador)|\bcmo\b";

/// Assigns a job description to one domain. First match wins, engineering checked first,
/// so an engineering-titled marketing-tech role is `Swe`.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    swe: Regex,
    pm_marketing: Regex,
}

impl DomainClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            swe: RegexBuilder::new(SWE_PATTERN).case_insensitive(true).build()?,
            pm_marketing: RegexBuilder::new(PM_MARKETING_PATTERN)
                .case_insensitive(true)
                .build()?,
        })
    }

    pub fn classify(&self, job_text: &str) -> Domain {
        let domain = if self.swe.is_match(job_text) {
            Domain::Swe
        } else if self.pm_marketing.is_match(job_text) {
            Domain::PmMarketing
        } else {
            Domain::General
        };
        debug!("Classified job text ({} chars) as {:?}", job_text.len(), domain);
        domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Domain {
        DomainClassifier::new().unwrap().classify(text)
    }

    #[test]
    fn test_software_engineer_is_swe() {
        assert_eq!(classify("Senior Software Engineer, Payments"), Domain::Swe);
    }

    #[test]
    fn test_marketing_coordinator_is_pm_marketing() {
        assert_eq!(classify("Marketing Coordinator"), Domain::PmMarketing);
    }

    #[test]
    fn test_no_cue_is_general() {
        assert_eq!(classify("Warehouse associate, forklift certification"), Domain::General);
    }

    #[test]
    fn test_swe_checked_before_marketing() {
        assert_eq!(classify("Marketing Technology Developer"), Domain::Swe);
    }

    #[test]
    fn test_product_manager_is_pm_marketing() {
        assert_eq!(classify("Product Manager, Growth"), Domain::PmMarketing);
    }

    #[test]
    fn test_ai_needs_word_boundary() {
        // "ai" inside "maintain" or "email" is not an engineering cue
        assert_eq!(classify("Maintain email records for the office"), Domain::General);
        assert_eq!(classify("AI research assistant"), Domain::Swe);
    }

    #[test]
    fn test_stems_match_inflected_forms() {
        assert_eq!(classify("Technical Lead, payments platform"), Domain::Swe);
        assert_eq!(classify("Technology consultant"), Domain::Swe);
        assert_eq!(classify("We engineered data pipelines"), Domain::Swe);
        assert_eq!(classify("Production assistant for video shoots"), Domain::PmMarketing);
    }

    #[test]
    fn test_stems_need_left_boundary() {
        // "biotech", "byproduct": the cue must start a word
        assert_eq!(classify("Biotech lab byproducts handler"), Domain::General);
    }

    #[test]
    fn test_machine_learning_is_swe() {
        assert_eq!(classify("Applied machine learning scientist"), Domain::Swe);
    }
}
