use crate::{
    errors::PromptError,
    providers::ai::{into_object, AiProvider},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use tracing::debug;

#[derive(Serialize)]
struct InvokeLlmRequest<'a> {
    prompt: &'a str,
    response_json_schema: &'a Value,
}

/// A provider for an `InvokeLLM`-style endpoint.
///
/// The endpoint accepts `{ "prompt", "response_json_schema" }` and answers
/// with a JSON object approximating the schema. Authentication, retries and
/// model selection are the endpoint's business.
#[derive(Clone, Debug)]
pub struct InvokeLlmProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
}

impl InvokeLlmProvider {
    /// Creates a new `InvokeLlmProvider`.
    pub fn new(api_url: String, api_key: Option<String>) -> Result<Self, PromptError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PromptError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl AiProvider for InvokeLlmProvider {
    async fn generate(
        &self,
        prompt: &str,
        response_schema: &Value,
    ) -> Result<Value, PromptError> {
        let request_body = InvokeLlmRequest {
            prompt,
            response_json_schema: response_schema,
        };

        let mut request_builder = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(PromptError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PromptError::AiApi(format!("{status}: {error_text}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(PromptError::AiDeserialization)?;
        debug!("<-- InvokeLLM response: {}", body);

        into_object(body)
    }
}
