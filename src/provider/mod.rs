pub mod constants;
pub(crate) mod perplexity;

pub use constants::models;
pub use perplexity::PerplexityClient;
