//! Prompt store — the four prompt texts driving summary and rating
//! generation, editable at runtime through the admin endpoints.
//!
//! Templates use `{vacancy_description}` and `{cv_content}` placeholders,
//! substituted by the summary service at call time. Updates live in memory
//! for the lifetime of the process; reset restores the built-in default.

pub mod handlers;

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// The four editable prompt slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptType {
    SummarySystem,
    SummaryUser,
    RatingSystem,
    RatingUser,
}

impl PromptType {
    pub const ALL: [PromptType; 4] = [
        PromptType::SummarySystem,
        PromptType::SummaryUser,
        PromptType::RatingSystem,
        PromptType::RatingUser,
    ];

    /// Resolves an identifier as used in admin URLs, e.g. `"summary-system"`.
    pub fn from_key(key: &str) -> Option<PromptType> {
        match key {
            "summary-system" => Some(PromptType::SummarySystem),
            "summary-user" => Some(PromptType::SummaryUser),
            "rating-system" => Some(PromptType::RatingSystem),
            "rating-user" => Some(PromptType::RatingUser),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            PromptType::SummarySystem => "summary-system",
            PromptType::SummaryUser => "summary-user",
            PromptType::RatingSystem => "rating-system",
            PromptType::RatingUser => "rating-user",
        }
    }

    /// The built-in default text for this slot.
    pub fn default_content(self) -> &'static str {
        match self {
            PromptType::SummarySystem => SUMMARY_SYSTEM_DEFAULT,
            PromptType::SummaryUser => SUMMARY_USER_DEFAULT,
            PromptType::RatingSystem => RATING_SYSTEM_DEFAULT,
            PromptType::RatingUser => RATING_USER_DEFAULT,
        }
    }
}

const SUMMARY_SYSTEM_DEFAULT: &str = "You are a technical recruiter assistant. \
Given a vacancy description and a candidate CV, write a concise summary of how \
well the candidate fits the vacancy. Mention concrete strengths and gaps. \
Reply with 3-4 sentences of plain text, no markdown.";

const SUMMARY_USER_DEFAULT: &str = "Vacancy description:\n{vacancy_description}\n\n\
Candidate CV:\n{cv_content}\n\nSummarize the candidate's fit for this vacancy.";

const RATING_SYSTEM_DEFAULT: &str = "You are a technical recruiter assistant. \
Rate how well a candidate CV matches a vacancy description. \
Reply with a single integer and nothing else.";

const RATING_USER_DEFAULT: &str = "Vacancy description:\n{vacancy_description}\n\n\
Candidate CV:\n{cv_content}\n\nRate this candidate's fit as a single integer.";

/// One prompt as returned by the admin API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptInfo {
    pub prompt_type: PromptType,
    pub content: String,
    pub is_default: bool,
}

/// In-memory prompt store seeded with the built-in defaults.
pub struct PromptStore {
    prompts: RwLock<HashMap<PromptType, String>>,
}

impl Default for PromptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptStore {
    pub fn new() -> Self {
        let prompts = PromptType::ALL
            .into_iter()
            .map(|t| (t, t.default_content().to_string()))
            .collect();
        Self {
            prompts: RwLock::new(prompts),
        }
    }

    /// Current content of one slot.
    pub fn get(&self, prompt_type: PromptType) -> String {
        self.prompts
            .read()
            .expect("prompt store lock poisoned")
            .get(&prompt_type)
            .cloned()
            .unwrap_or_else(|| prompt_type.default_content().to_string())
    }

    /// Replaces the content of one slot.
    pub fn set(&self, prompt_type: PromptType, content: String) {
        self.prompts
            .write()
            .expect("prompt store lock poisoned")
            .insert(prompt_type, content);
    }

    /// Restores the built-in default and returns it.
    pub fn reset(&self, prompt_type: PromptType) -> String {
        let content = prompt_type.default_content().to_string();
        self.set(prompt_type, content.clone());
        content
    }

    /// Snapshot of all four slots for the admin panel.
    pub fn all(&self) -> Vec<PromptInfo> {
        PromptType::ALL
            .into_iter()
            .map(|t| self.info(t))
            .collect()
    }

    pub fn info(&self, prompt_type: PromptType) -> PromptInfo {
        let content = self.get(prompt_type);
        let is_default = content == prompt_type.default_content();
        PromptInfo {
            prompt_type,
            content,
            is_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_seeds_defaults() {
        let store = PromptStore::new();
        for prompt_type in PromptType::ALL {
            assert_eq!(store.get(prompt_type), prompt_type.default_content());
            assert!(store.info(prompt_type).is_default);
        }
    }

    #[test]
    fn test_set_then_reset_round_trips() {
        let store = PromptStore::new();
        store.set(PromptType::RatingUser, "Rate it: {cv_content}".to_string());
        assert_eq!(store.get(PromptType::RatingUser), "Rate it: {cv_content}");
        assert!(!store.info(PromptType::RatingUser).is_default);

        let restored = store.reset(PromptType::RatingUser);
        assert_eq!(restored, PromptType::RatingUser.default_content());
        assert!(store.info(PromptType::RatingUser).is_default);
    }

    #[test]
    fn test_prompt_type_keys_round_trip() {
        for prompt_type in PromptType::ALL {
            assert_eq!(PromptType::from_key(prompt_type.key()), Some(prompt_type));
        }
        assert_eq!(PromptType::from_key("nonsense"), None);
    }

    #[test]
    fn test_user_defaults_carry_both_placeholders() {
        for prompt_type in [PromptType::SummaryUser, PromptType::RatingUser] {
            let content = prompt_type.default_content();
            assert!(content.contains("{vacancy_description}"));
            assert!(content.contains("{cv_content}"));
        }
    }
}
