//! Order-cycle tests: step ordering, short-circuiting, and price pinning.

use rust_decimal_macros::dec;

use bracketeer::app::TradeExecutor;
use bracketeer::domain::{BracketRates, FillReport, Instrument, OrderOutcome};
use bracketeer::testkit::exchange::{rejection, StubExchange};

fn rates() -> BracketRates {
    BracketRates {
        take_profit: dec!(1.5),
        stop_loss: dec!(0.9),
        trigger: dec!(0.95),
    }
}

fn eth_instrument(precision: u32) -> Instrument {
    Instrument {
        base_asset: "ETH".into(),
        quote_asset: "BTC".into(),
        price_precision: precision,
    }
}

#[tokio::test]
async fn full_cycle_pins_the_bracket_prices() {
    let exchange = StubExchange::new()
        .with_asks(vec![Ok(dec!(0.05))])
        .with_instruments(vec![Ok(vec![eth_instrument(2)])])
        .with_buys(vec![Ok(FillReport::new(dec!(0.01), vec![dec!(30000)]))]);

    let executor = TradeExecutor::new(&exchange, dec!(0.01), rates(), "BTC");
    let outcome = executor.execute("ETH").await;

    assert!(outcome.is_placed(), "expected Placed, got {outcome:?}");

    let requests = exchange.bracket_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.pair, "ETHBTC");
    assert_eq!(request.quantity, dec!(0.01));
    assert_eq!(request.prices.take_profit_limit, dec!(45000.00));
    assert_eq!(request.prices.stop_trigger, dec!(28500.00));
    assert_eq!(request.prices.stop_limit, dec!(27000.00));
}

#[tokio::test]
async fn bracket_uses_the_mean_of_partial_fills() {
    let exchange = StubExchange::new()
        .with_instruments(vec![Ok(vec![eth_instrument(0)])])
        .with_buys(vec![Ok(FillReport::new(
            dec!(0.02),
            vec![dec!(100), dec!(102)],
        ))]);

    let executor = TradeExecutor::new(&exchange, dec!(0.02), rates(), "BTC");
    let outcome = executor.execute("ETH").await;
    assert!(outcome.is_placed());

    // Mean 101, precision 0: 152 / 96 / 91 (half away from zero).
    let request = &exchange.bracket_requests()[0];
    assert_eq!(request.prices.take_profit_limit, dec!(152));
    assert_eq!(request.prices.stop_trigger, dec!(96));
    assert_eq!(request.prices.stop_limit, dec!(91));
}

#[tokio::test]
async fn failed_buy_never_reaches_the_bracket() {
    let exchange = StubExchange::new()
        .with_instruments(vec![Ok(vec![eth_instrument(2)])])
        .with_buys(vec![Err(rejection(-2010, "insufficient balance"))]);

    let executor = TradeExecutor::new(&exchange, dec!(0.01), rates(), "BTC");
    let outcome = executor.execute("ETH").await;

    match outcome {
        OrderOutcome::BuyFailed(message) => assert!(message.contains("insufficient balance")),
        other => panic!("expected BuyFailed, got {other:?}"),
    }
    assert_eq!(exchange.bracket_calls(), 0);
}

#[tokio::test]
async fn failed_price_lookup_stops_the_cycle_immediately() {
    let exchange = StubExchange::new().with_asks(vec![Err(rejection(-1121, "Invalid symbol."))]);

    let executor = TradeExecutor::new(&exchange, dec!(0.01), rates(), "BTC");
    let outcome = executor.execute("NOPE").await;

    assert!(matches!(outcome, OrderOutcome::PriceLookupFailed(_)));
    assert_eq!(exchange.instrument_calls(), 0);
    assert_eq!(exchange.buy_calls(), 0);
    assert_eq!(exchange.bracket_calls(), 0);
}

#[tokio::test]
async fn unknown_instrument_stops_before_the_buy() {
    let exchange = StubExchange::new().with_instruments(vec![Ok(vec![eth_instrument(2)])]);

    let executor = TradeExecutor::new(&exchange, dec!(0.01), rates(), "BTC");
    let outcome = executor.execute("DOGE").await;

    assert!(matches!(outcome, OrderOutcome::InstrumentNotFound(_)));
    assert_eq!(exchange.buy_calls(), 0);
    assert_eq!(exchange.bracket_calls(), 0);
}

#[tokio::test]
async fn zero_fills_refuse_the_bracket() {
    let exchange = StubExchange::new()
        .with_instruments(vec![Ok(vec![eth_instrument(2)])])
        .with_buys(vec![Ok(FillReport::new(dec!(0), vec![]))]);

    let executor = TradeExecutor::new(&exchange, dec!(0.01), rates(), "BTC");
    let outcome = executor.execute("ETH").await;

    match outcome {
        OrderOutcome::BuyFailed(message) => assert!(message.contains("zero fills")),
        other => panic!("expected BuyFailed, got {other:?}"),
    }
    assert_eq!(exchange.bracket_calls(), 0);
}

#[tokio::test]
async fn rejected_bracket_reports_the_unprotected_fill() {
    let exchange = StubExchange::new()
        .with_instruments(vec![Ok(vec![eth_instrument(2)])])
        .with_buys(vec![Ok(FillReport::new(dec!(0.01), vec![dec!(30000)]))])
        .with_brackets(vec![Err(rejection(-1013, "Filter failure: PRICE_FILTER"))]);

    let executor = TradeExecutor::new(&exchange, dec!(0.01), rates(), "BTC");
    let outcome = executor.execute("ETH").await;

    match outcome {
        OrderOutcome::BracketFailed {
            message,
            filled_quantity,
            average_price,
        } => {
            assert!(message.contains("PRICE_FILTER"));
            assert_eq!(filled_quantity, dec!(0.01));
            assert_eq!(average_price, dec!(30000));
        }
        other => panic!("expected BracketFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn lowercase_ticker_is_uppercased_into_the_pair() {
    let exchange = StubExchange::new()
        .with_instruments(vec![Ok(vec![eth_instrument(2)])])
        .with_buys(vec![Ok(FillReport::new(dec!(0.01), vec![dec!(30000)]))]);

    let executor = TradeExecutor::new(&exchange, dec!(0.01), rates(), "BTC");
    let outcome = executor.execute("eth").await;

    assert!(outcome.is_placed());
    assert_eq!(exchange.bracket_requests()[0].pair, "ETHBTC");
}
