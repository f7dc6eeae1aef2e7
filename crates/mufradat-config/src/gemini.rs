use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    /// Model answering the base-form (normalization) prompt
    pub base_form_model: String,
    /// Model answering the full analysis prompt
    pub analysis_model: String,
}

impl GeminiConfig {
    pub fn new() -> Self {
        let api_key = env::var("GENIE_API_KEY").unwrap_or_default();
        let base_url = env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let base_form_model =
            env::var("GEMINI_BASE_FORM_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());
        let analysis_model =
            env::var("GEMINI_ANALYSIS_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

        Self {
            api_key,
            base_url,
            base_form_model,
            analysis_model,
        }
    }
}
