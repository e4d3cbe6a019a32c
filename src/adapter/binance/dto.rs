//! Wire types for the Binance spot REST API.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::Instrument;

/// `GET /api/v3/ticker/bookTicker` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    pub symbol: String,
    pub ask_price: Decimal,
    pub bid_price: Decimal,
}

/// `GET /api/v3/exchangeInfo` response, reduced to the fields used.
#[derive(Debug, Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub base_asset: String,
    pub quote_asset: String,
    pub base_asset_precision: u32,
}

impl From<SymbolInfo> for Instrument {
    fn from(info: SymbolInfo) -> Self {
        Self {
            base_asset: info.base_asset,
            quote_asset: info.quote_asset,
            price_precision: info.base_asset_precision,
        }
    }
}

/// `POST /api/v3/order` response with `newOrderRespType=FULL`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    pub executed_qty: Decimal,
    #[serde(default)]
    pub fills: Vec<Fill>,
}

#[derive(Debug, Deserialize)]
pub struct Fill {
    pub price: Decimal,
    pub qty: Decimal,
}

/// `POST /api/v3/order/oco` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoResponse {
    pub order_list_id: i64,
    #[serde(default)]
    pub orders: Vec<OcoLeg>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoLeg {
    pub order_id: i64,
}

/// Error payload the exchange returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub msg: String,
}
