//! Operator-facing terminal output.
//!
//! The core returns outcomes; everything printed lives here.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use crate::domain::OrderOutcome;

const BANNER: &str = r"
 _                    _        _
| |__  _ __ __ _  ___| | _____| |_ ___  ___ _ __
| '_ \| '__/ _` |/ __| |/ / _ \ __/ _ \/ _ \ '__|
| |_) | | | (_| | (__|   <  __/ ||  __/  __/ |
|_.__/|_|  \__,_|\___|_|\_\___|\__\___|\___|_|
";

pub fn banner() {
    println!("{}", BANNER.cyan());
}

pub fn logged_in() {
    println!("{}", "Successfully logged in.".green());
}

pub fn prompt() {
    println!(
        "{}",
        "Enter a ticker, or a channel id to watch (empty line quits):".yellow()
    );
    print!("> ");
    let _ = io::stdout().flush();
}

/// One line of operator input, `None` on EOF.
pub fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

/// Render the terminal state of one order cycle.
pub fn report(outcome: &OrderOutcome) {
    match outcome {
        OrderOutcome::Placed(order) => {
            println!(
                "{}",
                format!(
                    "Bracket placed for {} (order list {}): take-profit {}, trigger {}, stop-limit {}",
                    order.pair,
                    order.order_list_id,
                    order.prices.take_profit_limit,
                    order.prices.stop_trigger,
                    order.prices.stop_limit
                )
                .green()
            );
        }
        OrderOutcome::PriceLookupFailed(message) => {
            println!("{}", format!("ERROR! Could not get price: {message}").red());
        }
        OrderOutcome::InstrumentNotFound(message) => {
            println!("{}", format!("ERROR! Unknown instrument: {message}").red());
        }
        OrderOutcome::BuyFailed(message) => {
            println!(
                "{}",
                format!("ERROR! Market buy not placed: {message}").red()
            );
        }
        OrderOutcome::BracketFailed {
            message,
            filled_quantity,
            average_price,
        } => {
            println!(
                "{}",
                format!("ERROR! Bracket order rejected: {message}").red()
            );
            println!(
                "{}",
                format!(
                    "WARNING! The buy of {filled_quantity} at avg {average_price} is live and UNPROTECTED. \
                     Place a stop manually."
                )
                .yellow()
            );
        }
    }
}
