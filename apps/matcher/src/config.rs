use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Component weights of the full match score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub semantic: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.20,
            education: 0.10,
            semantic: 0.30,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<()> {
        let all = [self.skills, self.experience, self.education, self.semantic];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            bail!("Scoring weights must be finite and non-negative: {self:?}");
        }
        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            bail!("Scoring weights must sum to 1.0, got {sum}");
        }
        Ok(())
    }
}

/// Engine configuration loaded from environment variables.
/// Every key is optional; missing keys fall back to `Default`.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    pub max_job_text_chars: usize,
    pub max_jobs_per_batch: usize,
    pub default_match_limit: usize,
    pub rust_log: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_job_text_chars: 10_000,
            max_jobs_per_batch: 50,
            default_match_limit: 10,
            rust_log: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` is this over `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let weights = ScoringWeights {
            skills: parse_or(&lookup, "MATCH_WEIGHT_SKILLS", defaults.weights.skills)?,
            experience: parse_or(&lookup, "MATCH_WEIGHT_EXPERIENCE", defaults.weights.experience)?,
            education: parse_or(&lookup, "MATCH_WEIGHT_EDUCATION", defaults.weights.education)?,
            semantic: parse_or(&lookup, "MATCH_WEIGHT_SEMANTIC", defaults.weights.semantic)?,
        };
        weights.validate()?;

        Ok(EngineConfig {
            weights,
            max_job_text_chars: parse_or(
                &lookup,
                "MAX_JOB_TEXT_CHARS",
                defaults.max_job_text_chars,
            )?,
            max_jobs_per_batch: parse_or(
                &lookup,
                "MAX_JOBS_PER_BATCH",
                defaults.max_jobs_per_batch,
            )?,
            default_match_limit: parse_or(
                &lookup,
                "DEFAULT_MATCH_LIMIT",
                defaults.default_match_limit,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
