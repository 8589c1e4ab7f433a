#![doc(test(attr(deny(warnings))))]

//! Course Builder assembles a customized CAT preparation course from discrete
//! options and derives a live price summary for the current selection.
//!
//! The [`wizard`] module owns the step cursor and the accumulated
//! [`wizard::SelectionRecord`]; [`pricing`] turns a record into a
//! [`pricing::PriceBreakdown`]. Everything else supports a terminal front end.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod pricing;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Course Builder tracing initialized.");
    });
}
