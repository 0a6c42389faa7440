//! Perplexity chat completions client.

use std::time::Duration;

use crate::core::{
    ApiKey, CompletionResponse, HttpClient, Message, PerplexityError,
    http::{default_transport, default_user_agent},
    types::CompletionRequest,
};
use crate::provider::constants::{models, perplexity};

/// Client for the chat completions endpoint.
///
/// Holds configuration only, so a single instance can serve concurrent
/// `create_completion` calls. Setters take `&mut self` and apply to the
/// next call.
#[derive(Debug, Clone)]
pub struct PerplexityClient {
    api_key: String,
    endpoint: String,
    model: String,
    http: HttpClient,
}

impl PerplexityClient {
    /// Create a client with the default endpoint, model, timeout and transport.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, PerplexityError> {
        let api_key = api_key.into().resolve()?;
        let transport = default_transport(&default_user_agent())?;

        Ok(Self {
            api_key,
            endpoint: perplexity::API_ENDPOINT.to_string(),
            model: perplexity::DEFAULT_MODEL.to_string(),
            http: HttpClient::new(transport, perplexity::DEFAULT_TIMEOUT),
        })
    }

    /// Create a client whose key is read from `PERPLEXITY_API_KEY`.
    pub fn from_env() -> Result<Self, PerplexityError> {
        Self::new(ApiKey::Default)
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Replace the transport. The configured timeout is still applied per call.
    pub fn set_http_client(&mut self, client: reqwest::Client) {
        self.http.set_client(client);
    }

    pub fn set_http_timeout(&mut self, timeout: Duration) {
        self.http.set_timeout(timeout);
    }

    pub fn http_timeout(&self) -> Duration {
        self.http.timeout()
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model_llama_3_1_sonar_small_128k_online(&mut self) {
        self.set_model(models::LLAMA_3_1_SONAR_SMALL_128K_ONLINE);
    }

    pub fn set_model_llama_3_1_sonar_large_128k_online(&mut self) {
        self.set_model(models::LLAMA_3_1_SONAR_LARGE_128K_ONLINE);
    }

    pub fn set_model_llama_3_1_sonar_huge_128k_online(&mut self) {
        self.set_model(models::LLAMA_3_1_SONAR_HUGE_128K_ONLINE);
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.set_endpoint(endpoint);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.set_model(model);
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.set_http_timeout(timeout);
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.set_http_client(client);
        self
    }

    /// Rebuild the default transport with a custom `User-Agent`.
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, PerplexityError> {
        self.set_http_client(default_transport(user_agent)?);
        Ok(self)
    }

    fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )
    }

    /// Send the conversation and return the decoded completion.
    ///
    /// Fails without touching the network when `messages` is empty.
    #[tracing::instrument(
        name = "create_completion",
        skip(self, messages),
        fields(
            model = %self.model,
            endpoint = %self.endpoint,
            message_count = messages.len()
        ),
        err
    )]
    pub async fn create_completion(
        &self,
        messages: &[Message],
    ) -> Result<CompletionResponse, PerplexityError> {
        if messages.is_empty() {
            return Err(PerplexityError::Validation(
                "Missing messages. Make sure to add at least one message.".to_string(),
            ));
        }

        let request = CompletionRequest {
            messages,
            model: &self.model,
        };

        let response: CompletionResponse = self
            .http
            .post_json(&self.endpoint, &[self.auth_header()], &request)
            .await?;

        tracing::debug!(
            id = %response.id,
            choices = response.choices.len(),
            total_tokens = response.usage.total_tokens,
            "Completion received"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PerplexityClient {
        PerplexityClient::new("apikey").unwrap()
    }

    #[test]
    fn test_defaults() {
        let client = client();
        assert_eq!(client.endpoint(), "https://api.perplexity.ai/chat/completions");
        assert_eq!(client.model(), "llama-3.1-sonar-small-128k-online");
        assert_eq!(client.http_timeout(), perplexity::DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_set_http_timeout_overrides_default() {
        let mut client = client();
        client.set_http_timeout(Duration::from_secs(1));
        assert_eq!(client.http_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_model_presets() {
        let mut client = client();

        client.set_model_llama_3_1_sonar_large_128k_online();
        assert_eq!(client.model(), "llama-3.1-sonar-large-128k-online");

        client.set_model_llama_3_1_sonar_huge_128k_online();
        assert_eq!(client.model(), "llama-3.1-sonar-huge-128k-online");

        client.set_model_llama_3_1_sonar_small_128k_online();
        assert_eq!(client.model(), "llama-3.1-sonar-small-128k-online");
    }

    #[test]
    fn test_builder_style_configuration() {
        let client = client()
            .with_endpoint("http://localhost:9999/chat/completions")
            .with_model("custom-model")
            .with_http_timeout(Duration::from_millis(250));

        assert_eq!(client.endpoint(), "http://localhost:9999/chat/completions");
        assert_eq!(client.model(), "custom-model");
        assert_eq!(client.http_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_auth_header_uses_bearer_scheme() {
        let (name, value) = client().auth_header();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer apikey");
    }

    #[tokio::test]
    async fn test_empty_messages_rejected() {
        let client = client().with_endpoint("http://127.0.0.1:1/unreachable");
        let err = client.create_completion(&[]).await.unwrap_err();
        assert!(matches!(err, PerplexityError::Validation(_)));
    }
}
