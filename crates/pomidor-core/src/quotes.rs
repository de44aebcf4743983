//! Motivational quote fetching.
//!
//! Pulls a random quote from the ZenQuotes API and formats it with its
//! author. Any failure - network, HTTP status, malformed body, empty
//! response - yields a fixed fallback string, so the operation itself never
//! fails and nothing else in the crate depends on it.

use std::time::Duration;

use serde::Deserialize;

/// Shown when the quote service is unavailable.
pub const FALLBACK_QUOTE: &str = "Stay focused and productive.";

const QUOTE_API_BASE: &str = "https://zenquotes.io";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct QuoteEntry {
    /// Quote text.
    q: String,
    /// Author.
    a: String,
}

/// Fetch a random quote, falling back to [`FALLBACK_QUOTE`] on any failure.
pub async fn fetch_quote() -> String {
    fetch_quote_from(QUOTE_API_BASE).await
}

/// Same as [`fetch_quote`] against an explicit API base URL.
pub async fn fetch_quote_from(base_url: &str) -> String {
    match try_fetch(base_url).await {
        Ok(Some(quote)) => quote,
        _ => FALLBACK_QUOTE.to_string(),
    }
}

async fn try_fetch(base_url: &str) -> Result<Option<String>, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let entries: Vec<QuoteEntry> = client
        .get(format!("{base_url}/api/random"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(entries
        .into_iter()
        .next()
        .map(|entry| format!("\"{}\"\n- {}", entry.q, entry.a)))
}
