#![doc(test(attr(deny(warnings))))]

//! SuperPy tracks purchases and sales of perishable products against a
//! simulated current date and reports revenue and profit over date ranges.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("SuperPy tracing initialized.");
    });
}
