use crate::record::LexicalRecord;

/// Keyed, append-only table of word profiles.
///
/// A miss is `None`, never an error. `append` is the only mutation and
/// must be compare-and-append under a single writer discipline: at most
/// one append per distinct key ever succeeds, and the loser sees
/// [`StoreError::DuplicateKey`] so it can re-lookup the winner's row.
pub trait LexicalStore: Send + Sync {
    /// Exact-match lookup by normalized word.
    fn lookup(&self, key: &str) -> Option<LexicalRecord>;

    /// Add a new record, refusing duplicates.
    fn append(&self, record: LexicalRecord) -> Result<(), StoreError>;

    /// Flush the whole table to the backing medium. Must be atomic with
    /// respect to a concurrent load or a crash: a reader never observes
    /// a truncated table.
    fn persist(&self) -> Result<(), StoreError>;

    /// Number of records currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists for \"{0}\"")]
    DuplicateKey(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store table: {0}")]
    Format(String),
}
