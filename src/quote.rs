//! Input record types from the market-data feed and the exposure store

use crate::currency::{Currency, CurrencyPair};
use crate::tenor::Tenor;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observed forward-point quote from the market-data feed
///
/// `bid`/`ask` are forward points in pips and may be negative;
/// `all_in_bid`/`all_in_ask` are the spot rate adjusted by those points.
/// `time` is an opaque local clock string from the feed and is not
/// sortable as a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardPointQuote {
    pub currency_pair: CurrencyPair,
    pub spot_rate: f64,
    pub time: String,
    pub tenor: Tenor,
    pub bid: f64,
    pub ask: f64,
    pub rate_date: NaiveDate,
    pub all_in_bid: f64,
    pub all_in_ask: f64,
}

/// Forecast hedge exposure for one currency
///
/// The three amounts cover three forward buckets; sign is direction
/// (positive = net long forecast, negative = net short).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeExposure {
    pub currency: Currency,
    pub amount1: f64,
    pub amount2: f64,
    pub amount3: f64,
}

impl HedgeExposure {
    /// Whether the near-bucket forecast is net long
    pub fn is_long(&self) -> bool {
        self.amount1 > 0.0
    }
}
