pub mod perplexity {
    use std::time::Duration;

    pub const API_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";
    pub const DEFAULT_MODEL: &str = super::models::LLAMA_3_1_SONAR_SMALL_128K_ONLINE;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const API_KEY_ENV_VAR: &str = "PERPLEXITY_API_KEY";
}

/// Model identifiers accepted by the completions endpoint.
pub mod models {
    pub const LLAMA_3_1_SONAR_SMALL_128K_ONLINE: &str = "llama-3.1-sonar-small-128k-online";
    pub const LLAMA_3_1_SONAR_LARGE_128K_ONLINE: &str = "llama-3.1-sonar-large-128k-online";
    pub const LLAMA_3_1_SONAR_HUGE_128K_ONLINE: &str = "llama-3.1-sonar-huge-128k-online";
}
