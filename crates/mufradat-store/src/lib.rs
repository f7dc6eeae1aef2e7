//! CSV-backed lexical store.
//!
//! One header row, one row per record; column names are the record's
//! field names and column order carries no meaning. Sentinel values are
//! written out verbatim, never as empty cells.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use mufradat_core::record::LexicalRecord;
use mufradat_core::store::{LexicalStore, StoreError};

pub struct CsvStore {
    path: PathBuf,
    table: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    rows: Vec<LexicalRecord>,
    index: HashMap<String, usize>,
}

impl Table {
    fn push(&mut self, record: LexicalRecord) {
        self.index.insert(record.word.clone(), self.rows.len());
        self.rows.push(record);
    }
}

impl CsvStore {
    /// Open the store at `path`, loading the existing table if the file
    /// is present. A missing file starts an empty table.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut table = Table::default();

        if path.exists() {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::Headers)
                .from_path(&path)
                .map_err(map_csv_error)?;

            for row in reader.deserialize() {
                let record: LexicalRecord = row.map_err(map_csv_error)?;
                if table.index.contains_key(&record.word) {
                    return Err(StoreError::Format(format!(
                        "duplicate row for \"{}\" in {}",
                        record.word,
                        path.display()
                    )));
                }
                table.push(record);
            }
            tracing::info!(rows = table.rows.len(), path = %path.display(), "loaded lexical store");
        } else {
            tracing::warn!(path = %path.display(), "store file missing, starting empty");
        }

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }
}

impl LexicalStore for CsvStore {
    fn lookup(&self, key: &str) -> Option<LexicalRecord> {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        table.index.get(key).map(|&i| table.rows[i].clone())
    }

    fn append(&self, record: LexicalRecord) -> Result<(), StoreError> {
        let mut table = self.table.write().unwrap_or_else(|e| e.into_inner());
        if table.index.contains_key(&record.word) {
            return Err(StoreError::DuplicateKey(record.word));
        }
        table.push(record);
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        // Synchronous write on the caller's thread: the table is one
        // small CSV, so the stall is shorter than a single oracle call.
        // Revisit with spawn_blocking if the table outgrows that.
        //
        // Write lock held across snapshot and rename: a persist that
        // starts later always contains every earlier append, so the
        // last rename to land can never drop a row.
        let table = self.table.write().unwrap_or_else(|e| e.into_inner());

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = tempfile::NamedTempFile::new_in(dir)?;

        let mut writer = csv::Writer::from_writer(temp);
        for row in &table.rows {
            writer.serialize(row).map_err(map_csv_error)?;
        }
        let temp = writer
            .into_inner()
            .map_err(|e| StoreError::Format(e.to_string()))?;

        // Atomic replace; a concurrent open never sees a partial table.
        temp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        tracing::debug!(rows = table.rows.len(), "persisted lexical store");
        Ok(())
    }

    fn len(&self) -> usize {
        self.table.read().unwrap_or_else(|e| e.into_inner()).rows.len()
    }
}

fn map_csv_error(error: csv::Error) -> StoreError {
    match error.into_kind() {
        csv::ErrorKind::Io(io) => StoreError::Io(io),
        other => StoreError::Format(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mufradat_core::record::SENTINEL;

    use super::*;

    fn record(word: &str, level: &str) -> LexicalRecord {
        LexicalRecord {
            cefr_level: level.to_string(),
            ..LexicalRecord::sparse(word)
        }
    }

    #[test]
    fn missing_file_opens_as_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::open(dir.path().join("words.csv")).unwrap();
        assert!(store.is_empty());
        assert!(store.lookup("كتاب").is_none());
    }

    #[test]
    fn append_persist_reopen_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");

        let store = CsvStore::open(&path).unwrap();
        store.append(record("كتاب", "B1")).unwrap();
        store.append(record("قلم", "A1")).unwrap();
        store.persist().unwrap();

        let reopened = CsvStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.lookup("كتاب").unwrap().cefr_level, "B1");
        assert_eq!(reopened.lookup("قلم").unwrap().cefr_level, "A1");
    }

    #[test]
    fn sentinel_fields_are_written_verbatim_not_as_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");

        let store = CsvStore::open(&path).unwrap();
        store.append(record("كتاب", "B1")).unwrap();
        store.persist().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains(SENTINEL));
        assert!(contents.lines().next().unwrap().contains("part_of_speech"));
    }

    #[test]
    fn header_cells_are_trimmed_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");
        std::fs::write(
            &path,
            format!(
                "word , cefr_level ,field,part_of_speech,lemma,definition,synonyms,antonyms,phrase_example,context\n\
                 كتاب,B1,{s},{s},{s},{s},{s},{s},{s},{s}\n",
                s = SENTINEL
            ),
        )
        .unwrap();

        let store = CsvStore::open(&path).unwrap();
        assert_eq!(store.lookup("كتاب").unwrap().cefr_level, "B1");
    }

    #[test]
    fn column_order_is_not_significant() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");
        std::fs::write(
            &path,
            format!(
                "cefr_level,word,field,part_of_speech,lemma,definition,synonyms,antonyms,phrase_example,context\n\
                 C1,نظرية,{s},{s},{s},{s},{s},{s},{s},{s}\n",
                s = SENTINEL
            ),
        )
        .unwrap();

        let store = CsvStore::open(&path).unwrap();
        assert_eq!(store.lookup("نظرية").unwrap().cefr_level, "C1");
    }

    #[test]
    fn duplicate_append_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::open(dir.path().join("words.csv")).unwrap();

        store.append(record("كتاب", "B1")).unwrap();
        let error = store.append(record("كتاب", "C2")).unwrap_err();
        assert!(matches!(error, StoreError::DuplicateKey(word) if word == "كتاب"));

        // First writer's row is untouched.
        assert_eq!(store.lookup("كتاب").unwrap().cefr_level, "B1");
    }

    #[test]
    fn concurrent_appends_of_one_key_succeed_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CsvStore::open(dir.path().join("words.csv")).unwrap());

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.append(record("مدرسة", &format!("B{i}"))).is_ok()
            }));
        }

        let wins: usize = handles
            .into_iter()
            .map(|h| h.join().unwrap() as usize)
            .sum();
        assert_eq!(wins, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn persist_replaces_the_file_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");

        let store = CsvStore::open(&path).unwrap();
        store.append(record("كتاب", "B1")).unwrap();
        store.persist().unwrap();
        store.append(record("قلم", "A1")).unwrap();
        store.persist().unwrap();

        // No leftover temp files, and the table is whole.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("words.csv")]);
        assert_eq!(CsvStore::open(&path).unwrap().len(), 2);
    }
}
