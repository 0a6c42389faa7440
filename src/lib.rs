//! # perplexity
//!
//! Minimal async client for the Perplexity chat completions API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use perplexity::{ApiKey, Message, PerplexityClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = PerplexityClient::new(ApiKey::Default)?;
//!     client.set_model_llama_3_1_sonar_large_128k_online();
//!
//!     let response = client
//!         .create_completion(&[
//!             Message::system("Be precise and concise."),
//!             Message::user("What's the capital of France?"),
//!         ])
//!         .await?;
//!
//!     println!("{}", response.last_content());
//!     Ok(())
//! }
//! ```
//!
//! Each call performs exactly one POST. Failures are returned as
//! [`PerplexityError`] and are never retried by the client.

pub mod core;
pub mod provider;

pub use crate::core::{ApiKey, Choice, CompletionResponse, Message, PerplexityError, Usage};
pub use provider::constants::perplexity::DEFAULT_TIMEOUT;
pub use provider::{PerplexityClient, models};
