//! # fx-forwards
//!
//! FX forward-point aggregation and hedge-exposure rate enrichment.
//!
//! Raw forward-point quotes from a market-data feed are grouped into one
//! row per `(currency pair, rate date)` with a mid quote per tenor, then
//! joined against per-currency hedge exposures to derive the metrics a
//! rates grid displays: annualized forward points, premium/discount,
//! favourability, best tenor and P&L impact.
//!
//! Both passes are pure and synchronous; malformed numeric input
//! propagates as NaN rather than failing.
//!
//! ## Example
//!
//! ```rust
//! use fx_forwards::prelude::*;
//!
//! let quotes = vec![ForwardPointQuote {
//!     currency_pair: "GBPUSD".parse().unwrap(),
//!     spot_rate: 1.23058,
//!     time: "7:29:12".to_string(),
//!     tenor: Tenor::M1,
//!     bid: -2.69,
//!     ask: -2.41,
//!     rate_date: "2025-01-20".parse().unwrap(),
//!     all_in_bid: 1.230311,
//!     all_in_ask: 1.230339,
//! }];
//! let exposures = vec![HedgeExposure {
//!     currency: "GBP".parse().unwrap(),
//!     amount1: -257.6,
//!     amount2: -233.5,
//!     amount3: -262.9,
//! }];
//!
//! let rows = enrich(&quotes, &exposures);
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].one_month, Some(-2.55));
//! ```

pub mod aggregate;
pub mod currency;
pub mod enrich;
pub mod error;
pub mod quote;
pub mod rounding;
pub mod tenor;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::aggregate::{aggregate, TenorAggregator, TenorQuote, TenorRow};
    pub use crate::currency::{Currency, CurrencyPair};
    pub use crate::enrich::{
        enrich, EnrichedRateRow, ExposureRateEnricher, Favourability, PremiumDiscount,
    };
    pub use crate::error::{FxForwardsError, Result};
    pub use crate::quote::{ForwardPointQuote, HedgeExposure};
    pub use crate::tenor::Tenor;
}
