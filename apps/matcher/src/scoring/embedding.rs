//! Embedding seam. The engine never produces vectors itself; it only compares them.
//!
//! `EmbeddingProvider` is the pluggable backend (sentence-transformer service,
//! hosted API, test double). Implement it to swap providers without touching
//! the scorer.

use async_trait::async_trait;

use crate::errors::{EmbeddingError, EngineError};

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Fixed-length vector for `text`. Transport failures map to `EngineError::Embedder`.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EngineError>;

    fn model_name(&self) -> &str;
}

/// Checks that a vector can take part in a cosine similarity.
pub fn validate(embedding: &[f32]) -> Result<(), EmbeddingError> {
    if embedding.is_empty() {
        return Err(EmbeddingError::Empty);
    }
    if embedding.iter().any(|x| !x.is_finite()) {
        return Err(EmbeddingError::NonFinite);
    }
    if embedding.iter().all(|x| *x == 0.0) {
        return Err(EmbeddingError::ZeroVector);
    }
    Ok(())
}

/// Raw cosine similarity in [-1, 1], computed in f64.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    validate(a)?;
    validate(b)?;
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        // Subnormal components can underflow to a zero norm even when validate() passed.
        return Err(EmbeddingError::ZeroVector);
    }
    Ok((dot / denom).clamp(-1.0, 1.0))
}

/// Semantic component: cosine similarity with negatives clamped to 0.
pub fn semantic_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    Ok(cosine_similarity(a, b)?.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors_are_one() {
        let v = [0.3, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_vectors_are_zero() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_opposite_vectors_negative_raw_clamped_semantic() {
        let a = [1.0, 2.0];
        let b = [-1.0, -2.0];
        assert!((cosine_similarity(&a, &b).unwrap() + 1.0).abs() < 1e-9);
        assert_eq!(semantic_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(
            cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err(),
            EmbeddingError::DimensionMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(
            cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).unwrap_err(),
            EmbeddingError::ZeroVector
        );
    }

    #[test]
    fn test_empty_vector() {
        assert_eq!(cosine_similarity(&[], &[]).unwrap_err(), EmbeddingError::Empty);
    }

    #[test]
    fn test_nan_rejected() {
        assert_eq!(
            cosine_similarity(&[f32::NAN, 1.0], &[1.0, 1.0]).unwrap_err(),
            EmbeddingError::NonFinite
        );
    }

    #[test]
    fn test_scale_invariant() {
        let a = [1.0, 3.0, -2.0];
        let b = [10.0, 30.0, -20.0];
        assert!((cosine_similarity(&a, &b).unwrap() - 1.0).abs() < 1e-9);
    }
}
