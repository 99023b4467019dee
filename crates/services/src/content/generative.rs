use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use quiz_core::model::{LearningStyleResult, Question, TypeCode};

use super::prompts::{
    QUESTIONS_SYSTEM, RESULT_SYSTEM, questions_prompt, questions_schema, result_prompt,
    result_schema,
};
use super::wire::{parse_questions, parse_result};
use super::{ContentProvider, OPTIONS_PER_DIMENSION};
use crate::error::ContentError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_LANGUAGE: &str = "English";

#[derive(Clone, Debug)]
pub struct ContentConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub language: String,
}

impl ContentConfig {
    /// Read `QUIZ_AI_*` settings; `None` when no API key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("QUIZ_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("QUIZ_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("QUIZ_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let language = env::var("QUIZ_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.into());
        Some(Self {
            base_url,
            api_key,
            model,
            language,
        })
    }

    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            language: DEFAULT_LANGUAGE.into(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Content provider backed by a structured-output `generateContent` endpoint.
#[derive(Clone)]
pub struct GenerativeContentProvider {
    client: Client,
    config: Option<ContentConfig>,
}

impl GenerativeContentProvider {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ContentConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<ContentConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn config(&self) -> Option<&ContentConfig> {
        self.config.as_ref()
    }

    fn language(&self) -> &str {
        self.config
            .as_ref()
            .map_or(DEFAULT_LANGUAGE, |config| config.language.as_str())
    }

    /// Run one structured generation and return the raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` when the provider is disabled, the request fails,
    /// or the response carries no text.
    async fn generate_json(
        &self,
        system: &str,
        prompt: String,
        schema: Value,
    ) -> Result<String, ContentError> {
        let config = self.config.as_ref().ok_or(ContentError::Disabled)?;

        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        let payload = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ContentError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ContentError::EmptyResponse)?;

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl ContentProvider for GenerativeContentProvider {
    async fn fetch_questions(&self) -> Result<Vec<Question>, ContentError> {
        tracing::info!(model = ?self.config.as_ref().map(|c| &c.model), "requesting quiz questions");
        let json = self
            .generate_json(
                QUESTIONS_SYSTEM,
                questions_prompt(self.language()),
                questions_schema(),
            )
            .await?;
        let set = parse_questions(&json)?;

        if !set.is_balanced(OPTIONS_PER_DIMENSION) {
            let tally = set.option_tally();
            tracing::warn!(
                questions = set.len(),
                ?tally,
                "generated questions do not cover each dimension evenly"
            );
        }
        tracing::debug!(questions = set.len(), "received quiz questions");
        Ok(set.into_vec())
    }

    async fn fetch_result(
        &self,
        type_code: TypeCode,
    ) -> Result<LearningStyleResult, ContentError> {
        tracing::info!(%type_code, "requesting learning style result");
        let json = self
            .generate_json(
                RESULT_SYSTEM,
                result_prompt(type_code, self.language()),
                result_schema(),
            )
            .await?;
        let (returned, dto) = parse_result(&json)?;
        if returned != type_code {
            tracing::warn!(
                requested = %type_code,
                %returned,
                "provider answered for a different type code; keeping the requested one"
            );
        }
        dto.into_result(type_code)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}
