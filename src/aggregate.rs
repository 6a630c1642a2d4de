//! Tenor aggregation
//!
//! Reduces raw forward-point quotes to one row per `(currency_pair,
//! rate_date)` group, carrying a mid quote per tenor. Snapshot fields
//! (`spot_rate`, `time`) are set once from the first quote of the group;
//! tenor entries are last-write-wins within a group.

use crate::currency::CurrencyPair;
use crate::quote::ForwardPointQuote;
use crate::rounding::{round_to, ALL_IN_MID_DECIMALS, MID_DECIMALS};
use crate::tenor::Tenor;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Mid-point quote for one tenor within a row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenorQuote {
    /// Forward points mid, `(bid + ask) / 2`
    pub mid: f64,
    /// All-in forward rate mid, `(all_in_bid + all_in_ask) / 2`
    pub all_in_mid: f64,
}

/// Aggregated quote row for one `(currency_pair, rate_date)` group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenorRow {
    pub currency_pair: CurrencyPair,
    pub spot_rate: f64,
    pub time: String,
    pub rate_date: NaiveDate,
    /// Tenor mids in maturity order; JSON keys are the feed labels ("1M"…)
    #[serde(flatten)]
    pub tenors: BTreeMap<Tenor, TenorQuote>,
}

impl TenorRow {
    /// Mid for a tenor, if quoted on this row
    pub fn mid(&self, tenor: Tenor) -> Option<f64> {
        self.tenors.get(&tenor).map(|t| t.mid)
    }

    /// All-in mid for a tenor, if quoted on this row
    pub fn all_in_mid(&self, tenor: Tenor) -> Option<f64> {
        self.tenors.get(&tenor).map(|t| t.all_in_mid)
    }
}

/// Aggregates forward-point quotes into `TenorRow`s
///
/// Precision for the derived mids is configurable per field; the defaults
/// match the feed contract ([`MID_DECIMALS`], [`ALL_IN_MID_DECIMALS`]).
#[derive(Debug, Clone, Copy)]
pub struct TenorAggregator {
    /// Decimal places for forward-point mids
    pub mid_decimals: u32,
    /// Decimal places for all-in mids
    pub all_in_mid_decimals: u32,
}

impl Default for TenorAggregator {
    fn default() -> Self {
        Self {
            mid_decimals: MID_DECIMALS,
            all_in_mid_decimals: ALL_IN_MID_DECIMALS,
        }
    }
}

impl TenorAggregator {
    /// Create an aggregator with the default per-field precision
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with explicit per-field precision
    pub fn with_precision(mid_decimals: u32, all_in_mid_decimals: u32) -> Self {
        Self {
            mid_decimals,
            all_in_mid_decimals,
        }
    }

    /// Group quotes by `(currency_pair, rate_date)` and reduce to mid rows
    ///
    /// Rows come out in first-encounter order of their group key. Empty
    /// input yields empty output; non-finite bids/asks propagate as NaN
    /// mids rather than failing.
    pub fn aggregate(&self, quotes: &[ForwardPointQuote]) -> Vec<TenorRow> {
        let mut rows: Vec<TenorRow> = Vec::new();
        let mut index: HashMap<(CurrencyPair, NaiveDate), usize> = HashMap::new();

        for quote in quotes {
            let key = (quote.currency_pair, quote.rate_date);
            let row_idx = *index.entry(key).or_insert_with(|| {
                rows.push(TenorRow {
                    currency_pair: quote.currency_pair,
                    spot_rate: quote.spot_rate,
                    time: quote.time.clone(),
                    rate_date: quote.rate_date,
                    tenors: BTreeMap::new(),
                });
                rows.len() - 1
            });

            // Last write wins per tenor; snapshot fields stay untouched
            rows[row_idx].tenors.insert(
                quote.tenor,
                TenorQuote {
                    mid: round_to((quote.bid + quote.ask) / 2.0, self.mid_decimals),
                    all_in_mid: round_to(
                        (quote.all_in_bid + quote.all_in_ask) / 2.0,
                        self.all_in_mid_decimals,
                    ),
                },
            );
        }

        rows
    }
}

/// Aggregate with the default precision
pub fn aggregate(quotes: &[ForwardPointQuote]) -> Vec<TenorRow> {
    TenorAggregator::new().aggregate(quotes)
}
