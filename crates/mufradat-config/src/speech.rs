use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// TTS endpoint URL
    pub tts_url: String,
    /// Synthesis language tag
    pub language: String,
}

impl SpeechConfig {
    pub fn new() -> Self {
        let tts_url = env::var("TTS_URL")
            .unwrap_or_else(|_| "https://translate.google.com/translate_tts".to_string());
        let language = env::var("TTS_LANGUAGE").unwrap_or_else(|_| "ar".to_string());

        Self { tts_url, language }
    }
}
