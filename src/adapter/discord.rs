//! Discord channel message fetcher.
//!
//! A minimal REST poll: the single most recent message of a channel,
//! authenticated with the raw token in the `Authorization` header.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::DiscordConfig;
use crate::error::{Error, Result};
use crate::port::MessageSource;

/// HTTP client for the Discord channel-messages endpoint.
pub struct DiscordClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

impl DiscordClient {
    /// Build a client from the discord section of the configuration.
    ///
    /// Returns `None` when no token is configured; channel polling is then
    /// unavailable for the run.
    #[must_use]
    pub fn from_config(config: &DiscordConfig) -> Option<Self> {
        let token = config.token.clone()?;
        Some(Self {
            client: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl MessageSource for DiscordClient {
    async fn latest_message(&self, channel_id: u64) -> Result<Option<String>> {
        let url = format!("{}/channels/{channel_id}/messages?limit=1", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.token)
            .send()
            .await
            .map_err(|e| Error::ChannelFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ChannelFetch(format!("{status}: {body}")));
        }

        let messages: Vec<Message> = response
            .json()
            .await
            .map_err(|e| Error::ChannelFetch(e.to_string()))?;

        Ok(messages.into_iter().next().map(|m| m.content))
    }

    fn name(&self) -> &'static str {
        "discord"
    }
}
