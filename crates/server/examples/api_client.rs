//! Examples for using the verbatim Server API
//!
//! Start the server first: `cargo run -p verbatim-server`.

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:9056";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: A contiguous lift from the reference
    println!("2. Lifted Passage:");
    let resp = client
        .post(format!("{SERVER_URL}/analysis"))
        .json(&json!({
            "input_text": "foxtrot golf hotel india juliet kilo",
            "ref_text": "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Validation failure
    println!("3. Empty Input:");
    let resp = client
        .post(format!("{SERVER_URL}/analysis"))
        .json(&json!({ "input_text": "", "ref_text": "anything" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
