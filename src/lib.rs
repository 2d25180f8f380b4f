#![doc(test(attr(deny(warnings))))]

//! Finance Core owns the transaction ledger and aggregation engine behind a
//! personal finance tracker: it records income and expense events, derives
//! balances and category breakdowns on demand, and enforces a configurable
//! minimum-balance threshold on expenses.

pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
