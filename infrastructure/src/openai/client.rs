//! OpenAI-compatible implementation of the [`ModelClient`] port

use super::credentials::ApiKey;
use super::error::{OpenAiError, Result};
use super::protocol::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageGenerationRequest,
    ImageResponse,
};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use studio_application::{ClientError, ImageGeneration, ModelClient, TextCompletion};
use studio_domain::{Model, ReferencePhoto};
use tracing::{debug, trace};

/// HTTP client for chat completions and image generation.
///
/// Uses the reqwest default timeouts and issues exactly one HTTP request per
/// call (plus one download when an image endpoint answers with a URL).
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl OpenAiClient {
    pub fn new(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn chat(&self, request: &TextCompletion) -> Result<String> {
        let body = ChatCompletionRequest {
            model: request.model.as_str(),
            messages: vec![
                ChatMessage::system(&request.system_instruction),
                ChatMessage::user(&request.user_content),
            ],
            temperature: request.temperature,
        };

        let response = self
            .http
            .post(self.endpoint("chat/completions"))
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let parsed: ChatCompletionResponse = Self::read_json(response).await?;
        parsed
            .into_text()
            .ok_or(OpenAiError::MissingContent("message content"))
    }

    async fn image(&self, request: &ImageGeneration) -> Result<Vec<u8>> {
        let response = match &request.reference_photo {
            Some(photo) => self.send_edit(request, photo).await?,
            None => self.send_generation(request).await?,
        };

        let parsed: ImageResponse = Self::read_json(response).await?;
        let datum = parsed
            .data
            .into_iter()
            .next()
            .ok_or(OpenAiError::MissingContent("image data"))?;

        match (datum.b64_json, datum.url) {
            (Some(encoded), _) => Ok(STANDARD.decode(encoded.trim())?),
            (None, Some(url)) => self.download(&url).await,
            (None, None) => Err(OpenAiError::MissingContent("image payload")),
        }
    }

    async fn send_generation(&self, request: &ImageGeneration) -> Result<reqwest::Response> {
        let body = ImageGenerationRequest {
            model: request.model.as_str(),
            prompt: &request.prompt,
            n: 1,
            size: request.size.to_string(),
            response_format: response_format_for(&request.model),
        };

        Ok(self
            .http
            .post(self.endpoint("images/generations"))
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await?)
    }

    /// Multipart call to `/images/edits` with the reference photo attached.
    async fn send_edit(
        &self,
        request: &ImageGeneration,
        photo: &ReferencePhoto,
    ) -> Result<reqwest::Response> {
        let image = Part::bytes(photo.bytes().to_vec())
            .file_name(photo.file_name())
            .mime_str(photo.photo_type().mime_type())?;

        let mut form = Form::new()
            .text("model", request.model.as_str().to_string())
            .text("prompt", request.prompt.clone())
            .text("size", request.size.to_string())
            .part("image", image);
        if let Some(format) = response_format_for(&request.model) {
            form = form.text("response_format", format);
        }

        Ok(self
            .http
            .post(self.endpoint("images/edits"))
            .bearer_auth(self.api_key.expose())
            .multipart(form)
            .send()
            .await?)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Downloading generated image from {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::from_status(status.as_u16(), &body));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        trace!("HTTP {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(OpenAiError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| OpenAiError::ParseError {
            error: e.to_string(),
            raw: studio_domain::core::string::preview(&body, 200),
        })
    }
}

/// `gpt-image-1` always answers with base64 and rejects the parameter;
/// older models default to URLs unless asked.
fn response_format_for(model: &Model) -> Option<&'static str> {
    match model {
        Model::GptImage1 => None,
        _ => Some("b64_json"),
    }
}

#[async_trait]
impl ModelClient for OpenAiClient {
    async fn complete_text(&self, request: &TextCompletion) -> std::result::Result<String, ClientError> {
        self.chat(request).await.map_err(ClientError::from)
    }

    async fn generate_image(
        &self,
        request: &ImageGeneration,
    ) -> std::result::Result<Vec<u8>, ClientError> {
        self.image(request).await.map_err(ClientError::from)
    }
}
