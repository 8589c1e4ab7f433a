//! Price derivation: a declarative [`PriceTable`] and the pure
//! [`PriceEngine`] that sums it over a selection.

pub mod breakdown;
pub mod engine;
pub mod table;

pub use breakdown::{ComplimentaryValue, LineItem, PriceBreakdown, Quantity};
pub use engine::PriceEngine;
pub use table::{
    FieldPricing, PriceRule, PriceTable, PricedOption, DEFAULT_MARKUP_BASIS_POINTS,
    MAX_OPTION_PRICE,
};
