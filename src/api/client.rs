//! HTTP client for the generateContent and model-listing endpoints

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::response::{extract_generated, Generated};
use crate::api::{
    ApiError, Content, GenerateContentRequest, GenerationParams, ModelInfo, ModelsResponse,
};
use crate::core::credentials::{validate_api_key, CredentialError};
use crate::core::message::Message;
use crate::core::session::ChatBackend;
use crate::utils::url::{construct_api_url, model_method_url};

/// Everything needed to address one model.
#[derive(Clone, Debug)]
pub struct ClientSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Fails before any request can be issued when the key is blank or
    /// still the placeholder.
    pub fn new(settings: ClientSettings) -> Result<Self, CredentialError> {
        validate_api_key(&settings.api_key)?;
        Ok(Self {
            http: Client::new(),
            base_url: settings.base_url,
            model: settings.model,
            api_key: settings.api_key.trim().to_string(),
        })
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single-prompt generation.
    pub async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Generated, ApiError> {
        self.generate_contents(vec![Content::prompt(prompt)], params)
            .await
    }

    /// Multi-turn generation: every turn is sent, oldest first.
    pub async fn generate_with_context(
        &self,
        turns: &[Message],
        params: &GenerationParams,
    ) -> Result<Generated, ApiError> {
        let contents = turns.iter().filter_map(Content::from_message).collect();
        self.generate_contents(contents, params).await
    }

    async fn generate_contents(
        &self,
        contents: Vec<Content>,
        params: &GenerationParams,
    ) -> Result<Generated, ApiError> {
        let url = model_method_url(&self.base_url, &self.model, "generateContent");
        let request = GenerateContentRequest {
            contents,
            generation_config: params.into(),
        };

        debug!(
            model = %self.model,
            url = %url,
            turns = request.contents.len(),
            temperature = params.temperature,
            max_output_tokens = params.max_output_tokens,
            "Sending generateContent request"
        );

        let result = self.post_generate(url, &request).await;

        match &result {
            Ok(generated) => debug!(
                model = %self.model,
                chars = generated.text.len(),
                "generateContent succeeded"
            ),
            Err(err) => warn!(
                model = %self.model,
                kind = err.kind(),
                "generateContent failed: {err}"
            ),
        }

        result
    }

    async fn post_generate(
        &self,
        url: String,
        request: &GenerateContentRequest,
    ) -> Result<Generated, ApiError> {
        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await?;
        let raw = read_json_body(response).await?;
        extract_generated(raw)
    }

    /// Lists every model visible to the key, following page tokens.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, ApiError> {
        let url = construct_api_url(&self.base_url, "models");
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            debug!(url = %url, page_token = ?page_token, "Listing models");

            let mut request = self
                .http
                .get(&url)
                .query(&[("key", self.api_key.as_str())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let raw = match send_for_json(request).await {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(kind = err.kind(), "Model listing failed: {err}");
                    return Err(err);
                }
            };
            let page: ModelsResponse = serde_json::from_value(raw)?;
            models.extend(page.models);

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) if page_token.as_deref() == Some(token.as_str()) => {
                    warn!(page_token = %token, "Model listing repeated its page token; stopping");
                    break;
                }
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }
}

async fn send_for_json(request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
    read_json_body(request.send().await?).await
}

async fn read_json_body(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!(status = status.as_u16(), body_len = body.len(), "Request rejected");
        return Err(ApiError::http(status.as_u16(), &body));
    }
    debug!(status = status.as_u16(), body_len = body.len(), "Response received");

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn reply(
        &self,
        context: &[Message],
        params: &GenerationParams,
    ) -> Result<Generated, ApiError> {
        self.generate_with_context(context, params).await
    }
}
