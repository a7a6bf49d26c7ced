//! Keyword normalization: synonym folding followed by prefix folding.
//!
//! Both folds pick the first-encountered keyword of a group as its
//! representative, so the result depends on input order (not alphabetical).
//! Both are idempotent: folding an already-folded list changes nothing.

use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};

use crate::keywords::lists::{SYNONYM_GROUPS, WORD_PREFIXES};

#[derive(Debug, Clone)]
pub struct KeywordNormalizer {
    /// term → index of the synonym group containing it
    synonym_index: HashMap<String, usize>,
    prefixes: Vec<String>,
}

impl KeywordNormalizer {
    /// Normalizer over the curated synonym groups and word prefixes.
    pub fn standard() -> Self {
        let mut synonym_index = HashMap::new();
        for (idx, group) in SYNONYM_GROUPS.iter().enumerate() {
            for term in group.iter() {
                // Curated groups are disjoint (see lists tests); keep the first group on overlap.
                synonym_index.entry(term.to_string()).or_insert(idx);
            }
        }
        Self {
            synonym_index,
            prefixes: WORD_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Normalizer over caller-supplied tables. Rejects overlapping synonym groups.
    pub fn with_tables(groups: &[Vec<String>], prefixes: &[String]) -> Result<Self> {
        let mut synonym_index = HashMap::new();
        for (idx, group) in groups.iter().enumerate() {
            for term in group {
                let term = term.to_lowercase();
                if let Some(existing) = synonym_index.insert(term.clone(), idx) {
                    if existing != idx {
                        bail!("Synonym '{term}' appears in groups {existing} and {idx}");
                    }
                }
            }
        }
        Ok(Self {
            synonym_index,
            prefixes: prefixes.iter().map(|p| p.to_lowercase()).collect(),
        })
    }

    /// Lowercases, trims, then applies synonym and prefix folding.
    pub fn normalize<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<String> {
        let lowered = lowercase_all(keywords);
        self.fold_prefixes(&self.fold_synonyms(&lowered))
    }

    /// Normalizes a résumé pool and a job pool against one shared choice of
    /// representatives (job keywords seen first), so a synonym on one side
    /// lands on the same canonical term as its partner on the other.
    pub fn normalize_pair<S: AsRef<str>>(
        &self,
        resume: &[S],
        job: &[S],
    ) -> (Vec<String>, Vec<String>) {
        let lists = [lowercase_all(job), lowercase_all(resume)];
        let by_synonym = fold_lists(&lists, |kw| self.synonym_index.get(kw).copied());
        let mut folded = fold_lists(&by_synonym, |kw| self.prefix_of(kw)).into_iter();
        let job = folded.next().unwrap_or_default();
        let resume = folded.next().unwrap_or_default();
        (resume, job)
    }

    /// Collapses each synonym group to its first-encountered member.
    pub fn fold_synonyms<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<String> {
        fold_one(keywords, |kw| self.synonym_index.get(kw).copied())
    }

    /// Collapses keywords sharing a known prefix to the first keyword seen with that prefix.
    pub fn fold_prefixes<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<String> {
        fold_one(keywords, |kw| self.prefix_of(kw))
    }

    /// Index of the first prefix (in priority order) that `keyword` starts with.
    fn prefix_of(&self, keyword: &str) -> Option<usize> {
        self.prefixes.iter().position(|p| keyword.starts_with(p.as_str()))
    }
}

fn lowercase_all<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn fold_one<S, F>(keywords: &[S], group_of: F) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<usize>,
{
    let list: Vec<&str> = keywords.iter().map(|k| k.as_ref()).collect();
    fold_lists(&[list], group_of).pop().unwrap_or_default()
}

/// Folds several lists against one representative table.
/// A group's representative is its first member met scanning the lists in order.
fn fold_lists<S, F>(lists: &[Vec<S>], group_of: F) -> Vec<Vec<String>>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<usize>,
{
    let mut representative: HashMap<usize, &str> = HashMap::new();
    for kw in lists.iter().flatten() {
        let kw = kw.as_ref();
        if let Some(group) = group_of(kw) {
            representative.entry(group).or_insert(kw);
        }
    }

    lists
        .iter()
        .map(|list| {
            let folded = list
                .iter()
                .map(|kw| {
                    let kw = kw.as_ref();
                    group_of(kw)
                        .and_then(|g| representative.get(&g).copied())
                        .unwrap_or(kw)
                        .to_string()
                })
                .collect();
            dedup_in_order(folded)
        })
        .collect()
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|i| seen.insert(i.clone())).collect()
}
