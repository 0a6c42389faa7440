use dotenv::dotenv;
use perplexity::{ApiKey, Message, PerplexityClient, PerplexityError};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    // RUST_LOG=perplexity=debug shows the request span and status
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut client = PerplexityClient::new(ApiKey::Default)?;
    client.set_model_llama_3_1_sonar_large_128k_online();
    client.set_http_timeout(Duration::from_secs(30));

    let messages = vec![
        Message::system("Be precise and concise."),
        Message::user("How many stars are there in our galaxy?"),
    ];

    match client.create_completion(&messages).await {
        Ok(response) => {
            println!("{}", response.last_content());
            println!("{response}");
        }
        Err(PerplexityError::Timeout { timeout }) => {
            println!("No answer within {timeout:?}");
        }
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
