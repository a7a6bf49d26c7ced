//! Batch ranking: one candidate profile against many job postings.
//!
//! A posting that cannot be scored is reported in `failures` and never
//! aborts the batch. Postings past the batch cap are reported, not scored.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::extraction::ProfileParser;
use crate::models::{ExtractedProfile, MatchBreakdown};
use crate::scoring::fit::FitScorer;
use crate::text::sanitize;

/// Characters of the job description carried in each ranked row.
pub const SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub url: Option<String>,
    pub embedding: Option<Vec<f32>>,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            description: description.into(),
            url: None,
            embedding: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub job_id: Uuid,
    pub title: String,
    pub company: String,
    pub url: Option<String>,
    pub score: f64,
    pub snippet: String,
    pub breakdown: MatchBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingFailure {
    pub job_id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Best first, at most `limit` rows.
    pub matches: Vec<RankedMatch>,
    pub failures: Vec<RankingFailure>,
}

/// Splits `jobs` at the batch cap; everything past it becomes a failure.
pub fn split_batch(jobs: &[JobPosting], max_jobs: usize) -> (&[JobPosting], Vec<RankingFailure>) {
    let (batch, overflow) = jobs.split_at(jobs.len().min(max_jobs));
    let failures = overflow
        .iter()
        .map(|job| RankingFailure {
            job_id: job.id,
            message: format!("Batch limit of {max_jobs} jobs exceeded"),
        })
        .collect();
    (batch, failures)
}

#[derive(Debug, Clone, Copy)]
pub struct JobRanker<'a> {
    parser: &'a ProfileParser,
    fit: &'a FitScorer,
    max_jobs: usize,
    max_text_chars: usize,
}

impl<'a> JobRanker<'a> {
    pub fn new(
        parser: &'a ProfileParser,
        fit: &'a FitScorer,
        max_jobs: usize,
        max_text_chars: usize,
    ) -> Self {
        Self {
            parser,
            fit,
            max_jobs,
            max_text_chars,
        }
    }

    /// Scores every posting (up to the batch cap), sorts descending by overall
    /// score with ties in input order, and keeps the top `limit`.
    ///
    /// Rows are only comparable under one formula, so the semantic component is
    /// used for the whole batch or for none of it. It is dropped when the
    /// candidate or any posting in the batch has no embedding.
    pub fn rank(
        &self,
        candidate: &ExtractedProfile,
        candidate_embedding: Option<&[f32]>,
        jobs: &[JobPosting],
        limit: usize,
    ) -> RankingReport {
        let (batch, mut failures) = split_batch(jobs, self.max_jobs);
        let mut matches = Vec::with_capacity(batch.len());

        let candidate_embedding =
            candidate_embedding.filter(|_| batch.iter().all(|job| job.embedding.is_some()));
        if candidate_embedding.is_none() {
            debug!("Ranking {} jobs without semantic scores", batch.len());
        }

        for job in batch {
            let description = sanitize(&job.description, self.max_text_chars);
            let requirements = self.parser.parse_job(&description);
            let embeddings = candidate_embedding.zip(job.embedding.as_deref());

            match self.fit.score(candidate, &requirements, embeddings) {
                Ok(breakdown) => matches.push(RankedMatch {
                    job_id: job.id,
                    title: job.title.clone(),
                    company: job.company.clone(),
                    url: job.url.clone(),
                    score: breakdown.overall_score,
                    snippet: description.chars().take(SNIPPET_CHARS).collect(),
                    breakdown,
                }),
                Err(e) => {
                    warn!("Skipping job {}: {}", job.id, e);
                    failures.push(RankingFailure {
                        job_id: job.id,
                        message: e.to_string(),
                    });
                }
            }
        }

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(limit);

        info!(
            "Ranked {} jobs: {} returned, {} failed",
            jobs.len(),
            matches.len(),
            failures.len()
        );
        RankingReport { matches, failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUST_JOB: &str =
        "Backend Engineer. 3+ years experience with Rust, PostgreSQL and Docker.";
    const JAVA_JOB: &str =
        "Java developer, 8 years experience, Spring and Oracle. Master's degree required.";
    const OPEN_JOB: &str = "Friendly team looking for a generalist.";

    fn candidate() -> ExtractedProfile {
        ExtractedProfile {
            skills: ["rust", "postgresql", "docker"].iter().map(|s| s.to_string()).collect(),
            experience_years: 4.0,
            ..Default::default()
        }
    }

    fn rank(jobs: &[JobPosting], limit: usize, max_jobs: usize) -> RankingReport {
        let parser = ProfileParser::new().unwrap();
        let fit = FitScorer::default();
        JobRanker::new(&parser, &fit, max_jobs, 10_000).rank(&candidate(), None, jobs, limit)
    }

    #[test]
    fn test_ranks_best_first() {
        let jobs = vec![
            JobPosting::new("Java Dev", "Globex", JAVA_JOB),
            JobPosting::new("Backend", "Acme", RUST_JOB),
            JobPosting::new("Generalist", "Initech", OPEN_JOB),
        ];
        let report = rank(&jobs, 10, 50);

        assert!(report.failures.is_empty());
        assert_eq!(report.matches.len(), 3);
        assert_eq!(report.matches[0].company, "Acme");
        assert_eq!(report.matches[2].company, "Globex");
        assert!(report.matches.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_limit_truncates() {
        let jobs = vec![
            JobPosting::new("Java Dev", "Globex", JAVA_JOB),
            JobPosting::new("Backend", "Acme", RUST_JOB),
        ];
        let report = rank(&jobs, 1, 50);
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].company, "Acme");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let jobs = vec![
            JobPosting::new("First", "A", OPEN_JOB),
            JobPosting::new("Second", "B", OPEN_JOB),
        ];
        let report = rank(&jobs, 10, 50);
        assert_eq!(report.matches[0].title, "First");
        assert_eq!(report.matches[1].title, "Second");
    }

    #[test]
    fn test_bad_embedding_isolated() {
        let parser = ProfileParser::new().unwrap();
        let fit = FitScorer::default();
        let mut broken = JobPosting::new("Broken", "Acme", RUST_JOB);
        broken.embedding = Some(vec![1.0, 2.0, 3.0]);
        let mut fine = JobPosting::new("Fine", "Acme", RUST_JOB);
        fine.embedding = Some(vec![1.0, 0.0]);
        let jobs = vec![broken, fine];

        let resume_embedding = [1.0_f32, 0.0];
        let report = JobRanker::new(&parser, &fit, 50, 10_000).rank(
            &candidate(),
            Some(&resume_embedding[..]),
            &jobs,
            10,
        );

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].title, "Fine");
        assert!(report.matches[0].breakdown.semantic_used);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].job_id, jobs[0].id);
    }

    #[test]
    fn test_mixed_embeddings_score_whole_batch_lexically() {
        let parser = ProfileParser::new().unwrap();
        let fit = FitScorer::default();
        let mut embedded = JobPosting::new("Embedded", "Acme", RUST_JOB);
        embedded.embedding = Some(vec![0.0, 1.0]);
        let plain = JobPosting::new("Plain", "Acme", RUST_JOB);
        let jobs = vec![embedded, plain];

        let resume_embedding = [1.0_f32, 0.0];
        let report = JobRanker::new(&parser, &fit, 50, 10_000).rank(
            &candidate(),
            Some(&resume_embedding[..]),
            &jobs,
            10,
        );

        assert!(report.failures.is_empty());
        assert_eq!(report.matches.len(), 2);
        assert!(report.matches.iter().all(|m| !m.breakdown.semantic_used));
        // same text, same formula, same score
        assert_eq!(report.matches[0].score, report.matches[1].score);
        assert_eq!(report.matches[0].title, "Embedded");
    }

    #[test]
    fn test_batch_cap_reports_overflow() {
        let jobs: Vec<JobPosting> = (0..5)
            .map(|i| JobPosting::new(format!("Job {i}"), "Acme", RUST_JOB))
            .collect();
        let report = rank(&jobs, 10, 3);
        assert_eq!(report.matches.len(), 3);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].job_id, jobs[3].id);
        assert!(report.failures[0].message.contains("Batch limit"));
    }

    #[test]
    fn test_snippet_is_truncated_description() {
        let long = "x".repeat(500);
        let report = rank(&[JobPosting::new("Long", "Acme", long)], 10, 50);
        assert_eq!(report.matches[0].snippet.chars().count(), SNIPPET_CHARS);
    }
}
