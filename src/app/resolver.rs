//! Symbol resolution: literal tickers or channel polling.
//!
//! An all-digit input names a chat channel to watch; anything else is taken
//! as a ticker verbatim. The polling loop runs at a fixed cadence with no
//! retry ceiling, but selects on a shutdown signal and stops within one
//! tick of cancellation. Fetches are strictly sequential: the next one only
//! starts after the previous await returns.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::domain::Resolution;
use crate::error::{Error, Result};
use crate::port::MessageSource;

/// Resolves one line of operator input into a [`Resolution`].
pub struct SymbolResolver<'a> {
    chat: Option<&'a dyn MessageSource>,
    poll_interval: Duration,
}

impl<'a> SymbolResolver<'a> {
    #[must_use]
    pub fn new(chat: Option<&'a dyn MessageSource>, poll_interval: Duration) -> Self {
        Self {
            chat,
            // tokio intervals reject a zero period.
            poll_interval: poll_interval.max(Duration::from_millis(1)),
        }
    }

    /// Resolve `input`, polling a channel when it is all digits.
    ///
    /// `shutdown` flips to `true` when the caller wants the poll loop gone;
    /// a cancelled loop yields `Resolution::Quit`.
    pub async fn resolve(
        &self,
        input: &str,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<Resolution> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Resolution::Quit);
        }

        if !input.chars().all(|c| c.is_ascii_digit()) {
            // A literal ticker resolves without any network call.
            return Ok(Resolution::Ticker(input.to_string()));
        }

        let channel_id: u64 = input
            .parse()
            .map_err(|_| Error::ChannelFetch(format!("channel id {input} out of range")))?;
        let chat = self
            .chat
            .ok_or_else(|| Error::ChannelFetch("discord is not configured".into()))?;

        info!(channel_id, source = chat.name(), "Watching channel for a $TICKER");
        self.poll(chat, channel_id, shutdown).await
    }

    async fn poll(
        &self,
        chat: &dyn MessageSource,
        channel_id: u64,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<Resolution> {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!(channel_id, "Channel polling cancelled");
                        return Ok(Resolution::Quit);
                    }
                    continue;
                }
            }

            match chat.latest_message(channel_id).await {
                Ok(Some(body)) => {
                    if let Some(symbol) = extract_ticker(&body) {
                        info!(channel_id, %symbol, "Ticker found in channel");
                        return Ok(Resolution::Ticker(symbol));
                    }
                    debug!(channel_id, "No ticker in latest message, retrying");
                }
                Ok(None) => {
                    debug!(channel_id, "Channel is empty, retrying");
                }
                Err(e) => {
                    // Transient by definition: the loop is the retry.
                    warn!(channel_id, error = %e, "Channel fetch failed, retrying");
                }
            }
        }
    }
}

/// Extract the first `$TICKER` token: a `$` immediately followed by two to
/// five ASCII alphabetic characters, leading `$` stripped. A longer run
/// yields its first five characters.
#[must_use]
pub fn extract_ticker(body: &str) -> Option<String> {
    let bytes = body.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'$' {
            continue;
        }
        let run: String = body[i + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .take(5)
            .collect();
        if run.len() >= 2 {
            return Some(run);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ticker_mid_message() {
        assert_eq!(extract_ticker("buy some $ETH now"), Some("ETH".into()));
    }

    #[test]
    fn strips_leading_dollar_only() {
        assert_eq!(extract_ticker("$DOGE"), Some("DOGE".into()));
    }

    #[test]
    fn requires_at_least_two_letters() {
        assert_eq!(extract_ticker("cost is $5 or $a"), None);
    }

    #[test]
    fn caps_at_five_letters() {
        assert_eq!(extract_ticker("watch $ABCDEFG"), Some("ABCDE".into()));
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(extract_ticker("$BTC then $ETH"), Some("BTC".into()));
    }

    #[test]
    fn skips_short_runs_for_a_later_match() {
        assert_eq!(extract_ticker("$1 off $LTC today"), Some("LTC".into()));
    }

    #[test]
    fn no_dollar_no_match() {
        assert_eq!(extract_ticker("nothing to see here"), None);
    }

    #[test]
    fn digits_break_the_run() {
        assert_eq!(extract_ticker("$B2B"), None);
    }
}
