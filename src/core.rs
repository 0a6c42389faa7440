pub mod api_key;
pub mod error;
pub mod http;
pub mod types;

pub use api_key::ApiKey;
pub use error::PerplexityError;
pub use http::HttpClient;
pub use types::{Choice, CompletionResponse, Message, Usage};
