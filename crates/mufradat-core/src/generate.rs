use crate::record::SENTINEL;

/// Narrow interface over the external text-generation oracle.
///
/// Both contracts are availability-over-correctness by policy: an oracle
/// failure, timeout, or empty response degrades to a harmless value and
/// is never surfaced as an error to the caller.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Base/singular form of a possibly definite or plural word.
    ///
    /// Fail-open: when the oracle has nothing useful to say, the input
    /// word is returned unchanged.
    async fn base_form(&self, word: &str) -> String;

    /// Free-text lexical analysis of `word`, expected as labeled lines.
    ///
    /// Returns the sentinel string when the oracle produces no text, so
    /// downstream parsing yields an all-sentinel record instead of failing.
    async fn analyze(&self, word: &str) -> String;
}

/// Fallback value for a failed or empty analysis call.
pub fn empty_analysis() -> String {
    SENTINEL.to_string()
}
