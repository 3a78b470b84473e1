use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use daftar_core::model::{
    Language, TranslationRequest, TranslationResult, WordBreakdown,
};

use super::TranslationProvider;
use crate::error::TranslationError;

pub const ENV_API_KEY: &str = "DAFTAR_TRANSLATE_API_KEY";
pub const ENV_BASE_URL: &str = "DAFTAR_TRANSLATE_BASE_URL";
pub const ENV_MODEL: &str = "DAFTAR_TRANSLATE_MODEL";

#[derive(Clone)]
pub struct HttpTranslationConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for HttpTranslationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTranslationConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl HttpTranslationConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// `None` unless an API key is present.
    #[must_use]
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup(ENV_API_KEY)?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| "https://api.openai.com/v1".into());
        let model = lookup(ENV_MODEL).unwrap_or_else(|| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Translation through an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct HttpTranslationProvider {
    client: Client,
    config: Option<HttpTranslationConfig>,
}

impl HttpTranslationProvider {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(HttpTranslationConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<HttpTranslationConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl TranslationProvider for HttpTranslationProvider {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let config = self.config.as_ref().ok_or(TranslationError::Disabled)?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(request),
                },
            ],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("translation request failed: {}", response.status());
            return Err(TranslationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(TranslationError::EmptyResponse)?;

        parse_completion(request, &content)
    }
}

const SYSTEM_PROMPT: &str = "You are an Arabic tutor. Reply with a single JSON object \
with the keys: translation (string), word_breakdown (array of objects with arabic, root, \
part_of_speech, translation), example_sentence (string or null), example_translation \
(string or null). part_of_speech is one of noun, verb, adjective, adverb, preposition, \
pronoun, conjunction, interjection, particle.";

fn build_prompt(request: &TranslationRequest) -> String {
    let source = request
        .direction
        .source()
        .map_or("English or French", Language::name);
    format!(
        "Translate from {source} to {target}. Break the Arabic side into words.\n\n{text}",
        target = request.direction.target().name(),
        text = request.text.trim(),
    )
}

/// Shape the model is asked to produce.
#[derive(Debug, Deserialize)]
struct CompletionPayload {
    translation: String,
    #[serde(default)]
    word_breakdown: Vec<WordBreakdown>,
    #[serde(default)]
    example_sentence: Option<String>,
    #[serde(default)]
    example_translation: Option<String>,
}

/// Parse the model's JSON answer, tolerating a surrounding markdown code fence.
fn parse_completion(
    request: &TranslationRequest,
    content: &str,
) -> Result<TranslationResult, TranslationError> {
    let trimmed = content.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);

    let payload: CompletionPayload = serde_json::from_str(json.trim())
        .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;
    if payload.translation.trim().is_empty() {
        return Err(TranslationError::EmptyResponse);
    }

    Ok(TranslationResult {
        source_text: request.text.clone(),
        source_language: request.direction.source().unwrap_or(Language::English),
        target_language: request.direction.target(),
        translation: payload.translation.trim().to_string(),
        word_breakdown: payload.word_breakdown,
        example_sentence: payload.example_sentence,
        example_translation: payload.example_translation,
    })
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use daftar_core::model::{PartOfSpeech, TranslationDirection};

    fn request() -> TranslationRequest {
        TranslationRequest {
            text: "كتاب".into(),
            direction: TranslationDirection::ArabicToFrench,
        }
    }

    #[test]
    fn parses_fenced_json_completion() {
        let content = "```json\n{\"translation\": \"Livre\", \"word_breakdown\": [{\"arabic\": \"كتاب\", \"root\": \"ك-ت-ب\", \"part_of_speech\": \"noun\", \"translation\": \"livre\"}]}\n```";
        let result = parse_completion(&request(), content).unwrap();
        assert_eq!(result.translation, "Livre");
        assert_eq!(result.source_text, "كتاب");
        assert_eq!(result.target_language, Language::French);
        assert_eq!(
            result.word_breakdown[0].part_of_speech,
            Some(PartOfSpeech::Noun)
        );
        assert_eq!(result.example_sentence, None);
    }

    #[test]
    fn rejects_non_json_completion() {
        let err = parse_completion(&request(), "Livre").unwrap_err();
        assert!(matches!(err, TranslationError::MalformedResponse(_)));
    }

    #[test]
    fn prompt_names_both_languages() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("from Arabic to French"));
        assert!(prompt.ends_with("كتاب"));
    }

    #[test]
    fn config_requires_api_key() {
        assert!(HttpTranslationConfig::from_lookup(&|_| None).is_none());
        let config = HttpTranslationConfig::from_lookup(&|key| {
            (key == ENV_API_KEY).then(|| "secret".to_string())
        })
        .unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[tokio::test]
    async fn disabled_provider_refuses() {
        let provider = HttpTranslationProvider::new(None);
        assert!(!provider.enabled());
        let err = provider.translate(&request()).await.unwrap_err();
        assert!(matches!(err, TranslationError::Disabled));
    }
}
