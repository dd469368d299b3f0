//! Narration: optional language-model text built on top of a canned recommendation.
//!
//! Carried in `AppState` as `Option<Arc<dyn Narrator>>`; `None` when no API key
//! is configured.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::recommendation::lookup::fill_placeholders;
use crate::recommendation::profile::Profile;
use crate::recommendation::prompts::{
    GROUNDING_HEADING, NARRATION_PROMPT_TEMPLATE, NARRATION_SYSTEM,
};

/// Implement this to swap narration backends without touching the handlers.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn narrate(&self, profile: &Profile, recommendation: &str) -> Result<String, AppError>;
}

/// Narrator backed by the chat-completions API.
pub struct LlmNarrator {
    llm: LlmClient,
}

impl LlmNarrator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Narrator for LlmNarrator {
    async fn narrate(&self, profile: &Profile, recommendation: &str) -> Result<String, AppError> {
        let prompt = build_narration_prompt(profile, recommendation);
        Ok(self.llm.complete(&prompt, NARRATION_SYSTEM).await?)
    }
}

pub fn build_narration_prompt(profile: &Profile, recommendation: &str) -> String {
    format!(
        "{}\n\n{GROUNDING_HEADING}\n{recommendation}",
        fill_placeholders(NARRATION_PROMPT_TEMPLATE, profile)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_profile_and_recommendation() {
        let profile = Profile {
            age: "30".to_string(),
            style: "sporty".to_string(),
            occupation: "Software engineer".to_string(),
            manufacturer: "bmw".to_string(),
        };
        let prompt = build_narration_prompt(&profile, "BMW i4 M50 - Sporty and sleek.");

        assert!(prompt.starts_with(
            "Berdasarkan umur 30, gaya sporty, pekerjaan Software engineer, dan produsen mobil Bmw, "
        ));
        assert!(prompt.ends_with("Rekomendasi dasar:\nBMW i4 M50 - Sporty and sleek."));
        assert!(!prompt.contains("{umur}"));
    }
}
