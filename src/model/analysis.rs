//! Domain model for a single text analysis result

/// Structured score produced from one analysis call
///
/// `emotion` and `factuality` are semantically constrained to [-5, +5] by the
/// prompt; the type itself does not enforce the range. Immutable after
/// construction and discarded once the response is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnalysis {
    /// Emotionality score: -5 (neutral, analytical) to +5 (strongly emotional)
    pub emotion: i64,
    /// Factuality score: -5 (evidence-based) to +5 (speculative, conspiratorial)
    pub factuality: i64,
    /// Detected argumentative fallacies, or the no-fallacy sentinel
    pub notes: String,
}
