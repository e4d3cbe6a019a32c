//! Binance spot REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ExchangeConfig;
use crate::domain::{BracketOrder, BracketPrices, FillReport, Instrument};
use crate::error::{Error, Result};
use crate::port::SpotExchange;

use super::dto::{ApiError, BookTicker, ExchangeInfo, OcoResponse, OrderResponse};
use super::sign::{timestamp_ms, ApiCredentials};

/// HTTP client for the Binance spot REST API.
///
/// Public market-data endpoints go out unsigned; order submission is signed
/// with HMAC-SHA256 over the query string and authenticated via the
/// `X-MBX-APIKEY` header.
#[derive(Debug)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
    credentials: ApiCredentials,
    recv_window_ms: u64,
}

impl BinanceClient {
    /// Build a client from the exchange section of the configuration.
    #[must_use]
    pub fn from_config(config: &ExchangeConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            credentials: ApiCredentials::new(config.api_key.clone(), config.api_secret.clone()),
            recv_window_ms: config.recv_window_ms,
        }
    }

    /// Decode a response, mapping non-2xx bodies to [`Error::Exchange`].
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiError>(&body) {
            Ok(api) => Err(Error::Exchange {
                code: api.code,
                message: api.msg,
            }),
            Err(_) => Err(Error::Exchange {
                code: status.as_u16().into(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            }),
        }
    }

    /// Sign `query` and POST it to `path`.
    async fn post_signed<T: DeserializeOwned>(&self, path: &str, query: String) -> Result<T> {
        let query = format!(
            "{query}&recvWindow={}&timestamp={}",
            self.recv_window_ms,
            timestamp_ms()
        );
        let signature = self.credentials.sign(&query);
        let url = format!("{}{path}?{query}&signature={signature}", self.base_url);

        debug!(path, "Submitting signed order request");
        let response = self
            .client
            .post(&url)
            .header("X-MBX-APIKEY", &self.credentials.api_key)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl SpotExchange for BinanceClient {
    async fn best_ask(&self, pair: &str) -> Result<Decimal> {
        let url = format!("{}/api/v3/ticker/bookTicker?symbol={pair}", self.base_url);
        let response = self.client.get(&url).send().await?;
        let ticker: BookTicker = Self::decode(response).await?;
        Ok(ticker.ask_price)
    }

    async fn instruments(&self) -> Result<Vec<Instrument>> {
        let url = format!("{}/api/v3/exchangeInfo", self.base_url);
        let response = self.client.get(&url).send().await?;
        let info: ExchangeInfo = Self::decode(response).await?;
        Ok(info.symbols.into_iter().map(Into::into).collect())
    }

    async fn market_buy(&self, pair: &str, quantity: Decimal) -> Result<FillReport> {
        let query = format!(
            "symbol={pair}&side=BUY&type=MARKET&quantity={quantity}&newOrderRespType=FULL"
        );
        let order: OrderResponse = self.post_signed("/api/v3/order", query).await?;

        Ok(FillReport::new(
            order.executed_qty,
            order.fills.into_iter().map(|f| f.price).collect(),
        ))
    }

    async fn place_bracket(
        &self,
        pair: &str,
        quantity: Decimal,
        prices: &BracketPrices,
    ) -> Result<BracketOrder> {
        let query = format!(
            "symbol={pair}&side=SELL&quantity={quantity}&price={}&stopPrice={}&stopLimitPrice={}&stopLimitTimeInForce=GTC",
            prices.take_profit_limit, prices.stop_trigger, prices.stop_limit
        );
        let oco: OcoResponse = self.post_signed("/api/v3/order/oco", query).await?;

        Ok(BracketOrder {
            order_list_id: oco.order_list_id,
            leg_order_ids: oco.orders.into_iter().map(|o| o.order_id).collect(),
            pair: pair.to_string(),
            quantity,
            prices: *prices,
        })
    }

    fn name(&self) -> &'static str {
        "binance"
    }
}
