use std::sync::Arc;

use crate::generate::Generator;
use crate::normalize;
use crate::parser;
use crate::record::LexicalRecord;
use crate::store::{LexicalStore, StoreError};

/// The resolution pipeline: raw word in, persisted record out.
///
/// Once a word has resolved, its record is authoritative — a later
/// resolve of the same word is a pure store hit and never re-invokes
/// the analysis contract.
pub struct Resolver {
    store: Arc<dyn LexicalStore>,
    generator: Arc<dyn Generator>,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Resolver {
    pub fn new(store: Arc<dyn LexicalStore>, generator: Arc<dyn Generator>) -> Self {
        Self { store, generator }
    }

    /// Normalize, look up, and on a miss generate + parse + persist.
    ///
    /// Generation failures degrade to sentinel-filled records and are
    /// never fatal; only store I/O failures surface to the caller.
    pub async fn resolve(&self, raw_word: &str) -> Result<LexicalRecord, ResolveError> {
        let key = normalize::canonical_key(self.generator.as_ref(), raw_word).await;

        if let Some(hit) = self.store.lookup(&key) {
            tracing::debug!(word = %key, "store hit");
            return Ok(hit);
        }

        tracing::info!(word = %key, "store miss, generating analysis");
        let raw_text = self.generator.analyze(&key).await;
        let record = parser::parse_analysis(&key, &raw_text);

        match self.store.append(record.clone()) {
            Ok(()) => {
                // Persist immediately so generated knowledge survives a
                // crash; the record is already whole in memory.
                self.store.persist()?;
                Ok(record)
            }
            Err(StoreError::DuplicateKey(_)) => {
                // Lost an append race; the winner's row is authoritative.
                tracing::debug!(word = %key, "append race lost, re-reading winner");
                match self.store.lookup(&key) {
                    Some(winner) => Ok(winner),
                    // Append-only store: a duplicate key implies the row
                    // exists, so this arm is unreachable in practice.
                    None => Err(ResolveError::Store(StoreError::Format(format!(
                        "row for \"{key}\" vanished after duplicate append"
                    )))),
                }
            }
            Err(other) => Err(other.into()),
        }
    }
}
