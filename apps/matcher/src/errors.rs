use thiserror::Error;

/// A résumé document could not be turned into text.
/// Terminal for that document: retrying the same bytes gives the same result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Document is not a PDF")]
    NotPdf,

    #[error("Malformed PDF: {0}")]
    Malformed(String),

    #[error("No extractable text in document")]
    NoText,
}

/// An embedding vector that cannot take part in a cosine similarity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    #[error("Embedding has no elements")]
    Empty,

    #[error("Embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Embedding has zero norm")]
    ZeroVector,

    #[error("Embedding contains NaN or infinite values")]
    NonFinite,
}

/// Engine-level error type.
/// Every variant maps to a stable `code()` so callers can branch without matching on messages.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Invalid embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Embedding provider error: {0}")]
    Embedder(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Extraction(ExtractionError::NotPdf) => "NOT_PDF",
            EngineError::Extraction(ExtractionError::Malformed(_)) => "MALFORMED_DOCUMENT",
            EngineError::Extraction(ExtractionError::NoText) => "NO_TEXT",
            EngineError::Embedding(_) => "INVALID_EMBEDDING",
            EngineError::Embedder(_) => "EMBEDDER_ERROR",
            EngineError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Only provider failures are worth retrying; bad documents and bad vectors stay bad.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Embedder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_errors_are_not_retryable() {
        let err: EngineError = ExtractionError::NoText.into();
        assert!(!err.is_retryable());
        assert_eq!(err.code(), "NO_TEXT");
    }

    #[test]
    fn test_embedder_errors_are_retryable() {
        let err = EngineError::Embedder("timeout".to_string());
        assert!(err.is_retryable());
        assert_eq!(err.code(), "EMBEDDER_ERROR");
    }

    #[test]
    fn test_embedding_error_message_names_dimensions() {
        let err: EngineError = EmbeddingError::DimensionMismatch { left: 3, right: 4 }.into();
        assert_eq!(err.code(), "INVALID_EMBEDDING");
        assert!(err.to_string().contains("3 vs 4"), "Message was {err}");
    }
}
