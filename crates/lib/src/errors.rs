use thiserror::Error;

/// Errors raised while talking to an AI provider.
///
/// These never reach the user directly. The executor logs them and collapses
/// them into [`GenerationError::ServiceUnavailable`].
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("JSON serialization/deserialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("AI provider returned a malformed response: {0}")]
    MalformedResponse(String),
    #[error("API key is missing for provider '{0}'")]
    MissingApiKey(String),
    #[error("API URL is missing for provider '{0}'")]
    MissingApiUrl(String),
    #[error("Unsupported AI provider type '{0}'")]
    UnsupportedProvider(String),
}

/// The single user-facing failure of a generation attempt.
///
/// Transport errors, provider errors and malformed payloads are deliberately
/// not distinguished.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Failed to generate {subject}. Please try again.")]
    ServiceUnavailable { subject: String },
}

/// Pre-flight validation failures for a `GenerationRequest`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("A topic is required.")]
    EmptyTopic,
    #[error("Unsupported tone '{tone}'. Expected one of: {expected}.")]
    UnsupportedTone { tone: String, expected: String },
}
