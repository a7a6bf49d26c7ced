//! Attribute Extractor: regex-driven skills, experience, and education extraction.
//!
//! All patterns are compiled once in `AttributeExtractor::new` and shared by
//! every call. Matching is case-insensitive throughout.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Utc};
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

use crate::extraction::vocab::{all_skills, DEGREE_LEVELS};
use crate::models::{EducationLevel, ExperienceEntry};
use crate::text::{bounded_pattern, char_window};

/// Pooled, not ordered: every match of every pattern competes for the maximum.
const EXPERIENCE_PATTERNS: &[&str] = &[
    r"([0-9]+(?:\.[0-9]+)?)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)",
    r"experience[:\s]*([0-9]+(?:\.[0-9]+)?)\+?\s*(?:years?|yrs?)",
    r"([0-9]+(?:\.[0-9]+)?)\+?\s*(?:years?|yrs?)",
];

/// Values outside (0, 50) are treated as noise (years like "1995", OCR garbage).
const MAX_PLAUSIBLE_YEARS: f64 = 50.0;

const DATE_RANGE_PATTERN: &str = r"\b([0-9]{4}|\w{3,9}\s+[0-9]{4})\s*[-–—]\s*([0-9]{4}|\w{3,9}\s+[0-9]{4}|present|current)\b";

const MAX_EXPERIENCE_ENTRIES: usize = 10;
const ENTRY_CONTEXT_CHARS: usize = 200;

const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

#[derive(Debug, Clone)]
pub struct AttributeExtractor {
    skill_terms: Vec<&'static str>,
    skill_set: RegexSet,
    /// Highest level first.
    education_levels: Vec<(EducationLevel, Regex)>,
    degree_terms: Vec<&'static str>,
    degree_set: RegexSet,
    experience_patterns: Vec<Regex>,
    date_range: Regex,
}

impl AttributeExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let skill_terms = all_skills();
        let skill_set = case_insensitive_set(&skill_terms)?;

        let mut education_levels = Vec::with_capacity(DEGREE_LEVELS.len());
        for (level, terms) in DEGREE_LEVELS {
            let alternatives: Vec<String> = terms.iter().map(|t| bounded_pattern(t)).collect();
            let regex = RegexBuilder::new(&format!("(?:{})", alternatives.join("|")))
                .case_insensitive(true)
                .build()?;
            education_levels.push((*level, regex));
        }

        let degree_terms: Vec<&'static str> = DEGREE_LEVELS
            .iter()
            .flat_map(|(_, terms)| terms.iter().copied())
            .collect();
        let degree_set = case_insensitive_set(&degree_terms)?;

        let experience_patterns = EXPERIENCE_PATTERNS
            .iter()
            .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
            .collect::<Result<Vec<_>, _>>()?;

        let date_range = RegexBuilder::new(DATE_RANGE_PATTERN)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            skill_terms,
            skill_set,
            education_levels,
            degree_terms,
            degree_set,
            experience_patterns,
            date_range,
        })
    }

    /// Every known skill present in `text`. Each term is tested on its own,
    /// so overlapping terms ("java", "javascript") are judged independently.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        self.skill_set
            .matches(text)
            .into_iter()
            .map(|idx| self.skill_terms[idx].to_string())
            .collect()
    }

    /// Largest plausible "N years" figure in `text`, or 0.0.
    pub fn extract_experience_years(&self, text: &str) -> f64 {
        self.experience_patterns
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
            .filter(|years| *years > 0.0 && *years < MAX_PLAUSIBLE_YEARS)
            .fold(0.0, f64::max)
    }

    /// Highest degree level mentioned. First level (scanning down from PhD) with a hit wins.
    pub fn extract_education(&self, text: &str) -> EducationLevel {
        self.education_levels
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(level, _)| *level)
            .unwrap_or(EducationLevel::None)
    }

    /// Every degree keyword found, regardless of level.
    pub fn extract_degrees(&self, text: &str) -> BTreeSet<String> {
        self.degree_set
            .matches(text)
            .into_iter()
            .map(|idx| self.degree_terms[idx].to_string())
            .collect()
    }

    /// Dated roles ("2019 - 2022", "Jan 2020 – Present"), at most 10, in document order.
    pub fn extract_experience_entries(&self, text: &str) -> Vec<ExperienceEntry> {
        let today = Utc::now().date_naive();
        self.date_range
            .captures_iter(text)
            .take(MAX_EXPERIENCE_ENTRIES)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let start = caps.get(1)?.as_str().to_string();
                let end = caps.get(2)?.as_str().to_string();
                let context = char_window(text, whole.start(), whole.end(), ENTRY_CONTEXT_CHARS)
                    .trim()
                    .to_string();
                let span_years = span_in_years(&start, &end, today);
                Some(ExperienceEntry {
                    start,
                    end,
                    context,
                    span_years,
                })
            })
            .collect()
    }
}

fn case_insensitive_set(terms: &[&str]) -> Result<RegexSet, regex::Error> {
    RegexSetBuilder::new(terms.iter().map(|t| bounded_pattern(t)))
        .case_insensitive(true)
        .build()
}

/// Years between two endpoints, rounded to two decimals. None if unreadable or reversed.
fn span_in_years(start: &str, end: &str, today: NaiveDate) -> Option<f64> {
    let from = parse_endpoint(start, today)?;
    let to = parse_endpoint(end, today)?;
    if to < from {
        return None;
    }
    let years = (to - from).num_days() as f64 / 365.25;
    Some((years * 100.0).round() / 100.0)
}

/// "2020" → 2020-01-01, "March 2020" → 2020-03-01, "Present"/"Current" → today.
/// An unknown leading word falls back to January of the year.
fn parse_endpoint(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lowered = raw.trim().to_lowercase();
    if lowered == "present" || lowered == "current" {
        return Some(today);
    }

    let mut parts = lowered.split_whitespace();
    let (word, year) = match (parts.next(), parts.next()) {
        (Some(year), None) => (None, year),
        (Some(word), Some(year)) => (Some(word), year),
        _ => return None,
    };
    let year: i32 = year.parse().ok()?;
    let month = word
        .and_then(|w| {
            let prefix: String = w.chars().take(3).collect();
            MONTHS.iter().position(|m| *m == prefix)
        })
        .map(|idx| idx as u32 + 1)
        .unwrap_or(1);

    NaiveDate::from_ymd_opt(year, month, 1).filter(|d| d.year() <= today.year() + 1)
}
