//! HTTP client for triaged

use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use serde::Deserialize;

/// Default daemon address
pub const DEFAULT_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Deserialize)]
struct ChatbotResponse {
    answer: String,
}

/// Build `<base>/api/chatbot/<message>` with the message percent-encoded as one segment
pub fn chatbot_url(base: &str, message: &str) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("invalid daemon URL {}", base))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("daemon URL cannot be a base: {}", base))?
        .pop_if_empty()
        .extend(["api", "chatbot", message]);
    Ok(url)
}

/// Send a message to the daemon and return its answer
pub async fn ask(base: &str, message: &str) -> Result<String> {
    let url = chatbot_url(base, message)?;
    let response = reqwest::get(url)
        .await
        .context("Daemon not reachable. Is triaged running?")?
        .error_for_status()?;
    let body: ChatbotResponse = response.json().await.context("invalid daemon response")?;
    Ok(body.answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chatbot_url_encodes_message() {
        let url = chatbot_url(DEFAULT_URL, "Cough and Sore Throat").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3000/api/chatbot/Cough%20and%20Sore%20Throat"
        );
    }

    #[test]
    fn test_chatbot_url_with_trailing_slash() {
        let url = chatbot_url("http://localhost:3000/", "a/b").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/chatbot/a%2Fb");
    }

    #[test]
    fn test_chatbot_url_rejects_garbage() {
        assert!(chatbot_url("not a url", "hi").is_err());
    }
}
