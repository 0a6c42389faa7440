use crate::provider::constants::perplexity;

use super::error::PerplexityError;

/// Where the API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read from the `PERPLEXITY_API_KEY` environment variable
    Default,
    Custom(String),
}

impl ApiKey {
    pub fn resolve(self) -> Result<String, PerplexityError> {
        match self {
            ApiKey::Custom(key) => Ok(key),
            ApiKey::Default => std::env::var(perplexity::API_KEY_ENV_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| {
                    PerplexityError::ProviderConfiguration(format!(
                        "{} not set.",
                        perplexity::API_KEY_ENV_VAR
                    ))
                }),
        }
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        ApiKey::Custom(key.to_string())
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        ApiKey::Custom(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_key_resolves_verbatim() {
        let key = ApiKey::from("pplx-123").resolve().unwrap();
        assert_eq!(key, "pplx-123");
    }
}
