//! Vocabulary matcher: finds vocabulary terms in free text, including
//! inflected forms ("managed", "deploying", "apis").
//!
//! One matcher is compiled per vocabulary at construction and reused for every
//! call. Terms are kept longest-first so that, inside one alternation, a longer
//! term wins over a shorter term starting at the same position
//! ("machine learning" before "machine").

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::text::bounded_pattern;

/// Suffixes tried after the bare terms. Stripped again from every hit.
pub const SUFFIXES: &[&str] = &["ing", "d", "ed", "s"];

#[derive(Debug, Clone)]
struct Pass {
    suffix: &'static str,
    regex: Regex,
}

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    terms: Vec<String>,
    passes: Vec<Pass>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Result<Self, regex::Error> {
        let terms = longest_first(vocabulary);

        let mut passes = Vec::with_capacity(SUFFIXES.len() + 1);
        for suffix in std::iter::once("").chain(SUFFIXES.iter().copied()) {
            if let Some(regex) = compile_alternation(&terms, suffix)? {
                passes.push(Pass { suffix, regex });
            }
        }

        Ok(Self { terms, passes })
    }

    /// Vocabulary in match-priority order (longest first).
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns every vocabulary term present in `text`, lowercased, dashes as spaces,
    /// suffixes stripped, deduplicated, in order of first occurrence.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for pass in &self.passes {
            for m in pass.regex.find_iter(text) {
                let matched = m.as_str().to_lowercase().replace('-', " ");
                // Suffixes are ASCII but may have matched a case-folded non-ASCII char.
                let keep = matched.chars().count().saturating_sub(pass.suffix.len());
                let keyword: String = matched.chars().take(keep).collect();
                first_seen
                    .entry(keyword)
                    .and_modify(|pos| *pos = (*pos).min(m.start()))
                    .or_insert(m.start());
            }
        }

        let mut found: Vec<(String, usize)> = first_seen.into_iter().collect();
        found.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        found.into_iter().map(|(kw, _)| kw).collect()
    }
}

/// Lowercased, deduplicated terms sorted by character length, longest first.
/// Ties keep vocabulary order.
fn longest_first<S: AsRef<str>>(vocabulary: &[S]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(vocabulary.len());
    for term in vocabulary {
        let term = term.as_ref().trim().to_lowercase();
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    terms
}

fn compile_alternation(terms: &[String], suffix: &str) -> Result<Option<Regex>, regex::Error> {
    if terms.is_empty() {
        return Ok(None);
    }
    let alternatives: Vec<String> = terms
        .iter()
        .map(|t| bounded_pattern(&format!("{t}{suffix}")))
        .collect();
    let pattern = format!("(?:{})", alternatives.join("|"));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(50 * (1 << 20))
        .build()
        .map(Some)
}
