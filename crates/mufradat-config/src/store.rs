use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the CSV lexical table; loaded at startup if present
    pub csv_file: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        let csv_file = env::var("CSV_FILE").unwrap_or_else(|_| "sorted_cefr.csv".to_string());

        Self { csv_file }
    }
}
