//! Match engine: owns every compiled pattern and scorer.
//!
//! Build one with `MatchEngine::new(config)` and pass it around (it is
//! `Send + Sync`), or use `MatchEngine::shared()` for a lazily built
//! process-wide instance configured from the environment.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::EngineConfig;
use crate::errors::{EmbeddingError, ExtractionError};
use crate::extraction::ProfileParser;
use crate::models::{ExtractedProfile, KeywordMatch, MatchBreakdown};
use crate::scoring::{FitScorer, JobPosting, JobRanker, KeywordScorer, RankingReport};
use crate::text::sanitize;

static SHARED: OnceLock<MatchEngine> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: EngineConfig,
    parser: ProfileParser,
    keywords: KeywordScorer,
    fit: FitScorer,
}

impl MatchEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.weights.validate()?;

        let parser = ProfileParser::new().context("Failed to compile attribute patterns")?;
        let keywords = KeywordScorer::standard().context("Failed to compile keyword vocabularies")?;
        let fit = FitScorer::new(config.weights);

        info!(
            "Match engine ready (weights: skills={} experience={} education={} semantic={})",
            config.weights.skills,
            config.weights.experience,
            config.weights.education,
            config.weights.semantic
        );

        Ok(Self {
            config,
            parser,
            keywords,
            fit,
        })
    }

    /// Process-wide engine built from `EngineConfig::from_env` on first use.
    /// Concurrent first calls may each build one; exactly one is kept.
    pub fn shared() -> Result<&'static MatchEngine> {
        if let Some(engine) = SHARED.get() {
            return Ok(engine);
        }
        let engine = MatchEngine::new(EngineConfig::from_env()?)?;
        Ok(SHARED.get_or_init(|| engine))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn parser(&self) -> &ProfileParser {
        &self.parser
    }

    pub fn keywords(&self) -> &KeywordScorer {
        &self.keywords
    }

    pub fn fit(&self) -> &FitScorer {
        &self.fit
    }

    pub fn ranker(&self) -> JobRanker<'_> {
        JobRanker::new(
            &self.parser,
            &self.fit,
            self.config.max_jobs_per_batch,
            self.config.max_job_text_chars,
        )
    }

    /// Caller-supplied job text with NUL bytes removed, length-capped and trimmed.
    pub fn sanitize_job_text(&self, text: &str) -> String {
        sanitize(text, self.config.max_job_text_chars)
    }

    pub fn parse_resume(&self, bytes: &[u8]) -> Result<ExtractedProfile, ExtractionError> {
        self.parser.parse_resume(bytes)
    }

    pub fn parse_job(&self, description: &str) -> ExtractedProfile {
        self.parser.parse_job(&self.sanitize_job_text(description))
    }

    pub fn score(
        &self,
        candidate: &ExtractedProfile,
        job: &ExtractedProfile,
        embeddings: Option<(&[f32], &[f32])>,
    ) -> Result<MatchBreakdown, EmbeddingError> {
        self.fit.score(candidate, job, embeddings)
    }

    pub fn keyword_match(&self, resume_text: &str, job_text: &str) -> KeywordMatch {
        self.keywords
            .match_texts(resume_text, &self.sanitize_job_text(job_text))
    }

    /// Ranks `jobs` for `candidate`. `limit` defaults to `default_match_limit`.
    pub fn rank(
        &self,
        candidate: &ExtractedProfile,
        candidate_embedding: Option<&[f32]>,
        jobs: &[JobPosting],
        limit: Option<usize>,
    ) -> RankingReport {
        let limit = limit.unwrap_or(self.config.default_match_limit);
        self.ranker().rank(candidate, candidate_embedding, jobs, limit)
    }
}
