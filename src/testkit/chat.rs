//! Scripted [`MessageSource`] stub.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::MessageSource;

/// Scripted message source: each fetch pops the next scripted result. Once
/// the script runs out, the last-resort behavior is an empty channel, so a
/// resolver polling an exhausted script just keeps retrying.
#[derive(Default)]
pub struct ScriptedMessages {
    results: Mutex<VecDeque<Result<Option<String>>>>,
    fetch_calls: AtomicU32,
}

impl ScriptedMessages {
    #[must_use]
    pub fn new(results: Vec<Result<Option<String>>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            fetch_calls: AtomicU32::new(0),
        }
    }

    /// Script a sequence of message bodies, most recent first per fetch.
    #[must_use]
    pub fn of_bodies(bodies: Vec<&str>) -> Self {
        Self::new(
            bodies
                .into_iter()
                .map(|b| Ok(Some(b.to_string())))
                .collect(),
        )
    }

    #[must_use]
    pub fn fetch_calls(&self) -> u32 {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageSource for ScriptedMessages {
    async fn latest_message(&self, _channel_id: u64) -> Result<Option<String>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(None))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Shorthand for a scripted transient fetch failure.
#[must_use]
pub fn fetch_error(message: &str) -> Error {
    Error::ChannelFetch(message.to_string())
}
