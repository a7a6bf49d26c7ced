//! Match service: async orchestration of the engine and an optional embedding provider.
//!
//! Extraction and scoring stay synchronous; PDF decoding runs on the blocking
//! pool. Without a provider every score falls back to the lexical components.

use std::sync::Arc;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::MatchEngine;
use crate::errors::EngineError;
use crate::models::{ExtractedProfile, KeywordMatch, MatchBreakdown};
use crate::scoring::embedding::{self, EmbeddingProvider};
use crate::scoring::ranking::split_batch;
use crate::scoring::{JobPosting, RankingFailure, RankingReport};

/// A parsed résumé, ready to be matched against any number of jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub profile: ExtractedProfile,
    pub embedding: Option<Vec<f32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchReport {
    pub breakdown: MatchBreakdown,
    pub keyword_match: KeywordMatch,
}

#[derive(Clone)]
pub struct MatchService {
    engine: Arc<MatchEngine>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
}

impl MatchService {
    pub fn new(engine: Arc<MatchEngine>) -> Self {
        Self {
            engine,
            embedder: None,
        }
    }

    pub fn with_embedder(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        info!("Semantic scoring enabled (model: {})", embedder.model_name());
        self.embedder = Some(embedder);
        self
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Extracts a candidate profile from PDF bytes and embeds its text.
    pub async fn analyze_resume(&self, bytes: Vec<u8>) -> Result<ResumeAnalysis, EngineError> {
        let engine = Arc::clone(&self.engine);
        let profile = tokio::task::spawn_blocking(move || engine.parse_resume(&bytes))
            .await
            .map_err(|e| EngineError::Internal(anyhow!("Resume extraction task failed: {e}")))??;
        self.analyze_profile(profile).await
    }

    /// Same as `analyze_resume` for text that was already extracted upstream.
    pub async fn analyze_resume_text(&self, text: &str) -> Result<ResumeAnalysis, EngineError> {
        let profile = self.engine.parser().parse_resume_text(text)?;
        self.analyze_profile(profile).await
    }

    async fn analyze_profile(
        &self,
        profile: ExtractedProfile,
    ) -> Result<ResumeAnalysis, EngineError> {
        let embedding = self.embed(&profile.text).await?;
        Ok(ResumeAnalysis { profile, embedding })
    }

    /// Full breakdown plus the domain-routed keyword match for one job text.
    pub async fn match_job(
        &self,
        resume: &ResumeAnalysis,
        job_text: &str,
    ) -> Result<JobMatchReport, EngineError> {
        let job_text = self.engine.sanitize_job_text(job_text);
        let job = self.engine.parser().parse_job(&job_text);

        let job_embedding = if resume.embedding.is_some() && !job_text.is_empty() {
            self.embed(&job_text).await?
        } else {
            None
        };
        let embeddings = resume.embedding.as_deref().zip(job_embedding.as_deref());

        let breakdown = self.engine.score(&resume.profile, &job, embeddings)?;
        let keyword_match = self
            .engine
            .keywords()
            .match_texts(&resume.profile.text, &job_text);

        info!(
            "Matched job: overall={} keywords={} ({:?})",
            breakdown.overall_score, keyword_match.score, keyword_match.domain
        );
        Ok(JobMatchReport {
            breakdown,
            keyword_match,
        })
    }

    /// Ranks `postings`, embedding those that arrive without a vector.
    /// A provider failure drops only the posting it happened on.
    pub async fn rank_postings(
        &self,
        resume: &ResumeAnalysis,
        postings: Vec<JobPosting>,
        limit: Option<usize>,
    ) -> RankingReport {
        let (batch, overflow) = split_batch(&postings, self.engine.config().max_jobs_per_batch);
        let mut failures = Vec::new();
        let mut ready = Vec::with_capacity(batch.len());

        for posting in batch {
            let mut posting = posting.clone();
            if resume.embedding.is_some() && posting.embedding.is_none() {
                let text = self.engine.sanitize_job_text(&posting.description);
                match self.embed(&text).await {
                    Ok(embedding) => posting.embedding = embedding,
                    Err(e) => {
                        warn!("Failed to embed job {}: {}", posting.id, e);
                        failures.push(RankingFailure {
                            job_id: posting.id,
                            message: e.to_string(),
                        });
                        continue;
                    }
                }
            }
            ready.push(posting);
        }

        let mut report = self
            .engine
            .rank(&resume.profile, resume.embedding.as_deref(), &ready, limit);
        failures.append(&mut report.failures);
        failures.extend(overflow);
        report.failures = failures;
        report
    }

    async fn embed(&self, text: &str) -> Result<Option<Vec<f32>>, EngineError> {
        let Some(embedder) = &self.embedder else {
            return Ok(None);
        };
        let vector = embedder.embed(text).await?;
        embedding::validate(&vector)?;
        Ok(Some(vector))
    }
}
