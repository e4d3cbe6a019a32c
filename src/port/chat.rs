//! Inbound chat-message port used by the symbol resolver.

use async_trait::async_trait;

use crate::error::Result;

/// A source of chat messages, polled one channel at a time.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Body text of the single most recent message in `channel_id`, or
    /// `None` when the channel is empty.
    async fn latest_message(&self, channel_id: u64) -> Result<Option<String>>;

    /// Source name for logging.
    fn name(&self) -> &'static str;
}
