//! Résumé/job matching engine.
//!
//! Extracts skills, experience and education from résumés and job
//! descriptions, then scores the pair on keyword overlap, weighted
//! profile fit and (optionally) embedding similarity.

pub mod config;
pub mod engine;
pub mod errors;
pub mod extraction;
pub mod keywords;
pub mod models;
pub mod scoring;
pub mod service;
pub mod telemetry;
pub mod text;

pub use config::{EngineConfig, ScoringWeights};
pub use engine::MatchEngine;
pub use errors::{EmbeddingError, EngineError, ExtractionError};
pub use models::{Domain, EducationLevel, ExtractedProfile, KeywordMatch, MatchBreakdown};
pub use scoring::{EmbeddingProvider, JobPosting, RankingReport};
pub use service::{JobMatchReport, MatchService, ResumeAnalysis};
