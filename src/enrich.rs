//! Exposure rate enrichment
//!
//! Joins aggregated tenor rows against per-currency hedge exposures and
//! derives the display metrics: point scale factor (`fdv`), annualized
//! forward points, premium/discount, favourability, best tenor, the 1M
//! reference mid and annualized P&L impact.
//!
//! The whole pass is a pure transform; rows with currencies absent from
//! the exposure set come through with a zero hedged exposure rather than
//! an error.

use crate::aggregate::{TenorAggregator, TenorRow};
use crate::currency::{Currency, CurrencyPair};
use crate::quote::{ForwardPointQuote, HedgeExposure};
use crate::rounding::{round_to, ANNUALIZED_DECIMALS, PNL_DECIMALS};
use crate::tenor::Tenor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exposure amounts are quoted in thousands; P&L impacts in units
const PNL_AMOUNT_SCALE: f64 = 1_000.0;

/// Whether the forward trades above or below spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PremiumDiscount {
    Premium,
    Discount,
    Flat,
}

/// Whether the forward-point direction works for or against the hedge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Favourability {
    Favourable,
    Unfavourable,
    Neutral,
}

/// Fully enriched output row, one per aggregated tenor row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRateRow {
    #[serde(flatten)]
    pub rates: TenorRow,
    /// Point scale factor for the pair (10_000, or 100 for JPY quotes)
    pub fdv: f64,
    /// Annualized forward-point fraction per quoted tenor
    #[serde(rename = "annualizedPoints")]
    pub annualized: BTreeMap<Tenor, f64>,
    #[serde(rename = "premiumDiscount")]
    pub premium_discount: PremiumDiscount,
    /// Near-bucket exposure amount for the matched currency, 0 if unmatched
    #[serde(rename = "hedgedExposure")]
    pub hedged_exposure: f64,
    /// Which side of the pair the exposure matched on
    #[serde(rename = "hedgedCurrency")]
    pub hedged_currency: Option<Currency>,
    #[serde(rename = "forwardPointsFavourability")]
    pub favourability: Favourability,
    #[serde(rename = "bestTenor")]
    pub best_tenor: Tenor,
    /// The 1M mid, surfaced independently of `best_tenor`
    #[serde(rename = "oneMonth")]
    pub one_month: Option<f64>,
    /// Annualized P&L impact of hedging everything at 1M
    #[serde(rename = "oneMonthImpact")]
    pub one_month_impact: Option<f64>,
    /// Annualized P&L impact of hedging at the best tenor
    #[serde(rename = "bestImpact")]
    pub best_impact: Option<f64>,
    /// Absolute benefit of the best tenor over rolling 1M
    pub benefit: Option<f64>,
}

/// Enriches raw forward points with hedge-exposure metrics
///
/// Runs [`TenorAggregator`] internally, then derives the per-row metrics
/// in a single pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExposureRateEnricher {
    aggregator: TenorAggregator,
}

impl ExposureRateEnricher {
    /// Create an enricher with the default aggregation precision
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a specific aggregator configuration
    pub fn with_aggregator(aggregator: TenorAggregator) -> Self {
        Self { aggregator }
    }

    /// Aggregate forward points, then enrich each row against the exposures
    pub fn enrich(
        &self,
        forward_points: &[ForwardPointQuote],
        hedge_exposures: &[HedgeExposure],
    ) -> Vec<EnrichedRateRow> {
        let rows = self.aggregator.aggregate(forward_points);
        debug!(
            "aggregated {} quotes into {} tenor rows",
            forward_points.len(),
            rows.len()
        );

        let enriched: Vec<EnrichedRateRow> = rows
            .into_iter()
            .map(|row| self.enrich_row(row, hedge_exposures))
            .collect();
        debug!("enriched {} rows against {} exposures", enriched.len(), hedge_exposures.len());

        enriched
    }

    fn enrich_row(&self, row: TenorRow, exposures: &[HedgeExposure]) -> EnrichedRateRow {
        let fdv = row.currency_pair.point_factor();
        let annualized = annualized_points(&row, fdv);

        let matched = match_exposure(row.currency_pair, exposures);
        let hedged_currency = matched.map(|e| e.currency);
        let hedged_exposure = matched.map(|e| e.amount1).unwrap_or(0.0);

        let premium_discount = classify_premium_discount(&annualized);
        let favourability =
            classify_favourability(premium_discount, matched.map(HedgeExposure::is_long));
        let best_tenor = select_best_tenor(&annualized, matched.is_some(), favourability);

        let one_month = row.mid(Tenor::M1);
        let one_month_impact = annualized
            .get(&Tenor::M1)
            .map(|p| round_to(p * hedged_exposure * PNL_AMOUNT_SCALE, PNL_DECIMALS));
        let best_impact = annualized
            .get(&best_tenor)
            .map(|p| round_to(p * hedged_exposure * PNL_AMOUNT_SCALE, PNL_DECIMALS));
        let benefit = one_month_impact
            .zip(best_impact)
            .map(|(one, best)| round_to((one - best).abs(), PNL_DECIMALS));

        EnrichedRateRow {
            rates: row,
            fdv,
            annualized,
            premium_discount,
            hedged_exposure,
            hedged_currency,
            favourability,
            best_tenor,
            one_month,
            one_month_impact,
            best_impact,
            benefit,
        }
    }
}

/// Enrich with the default configuration
pub fn enrich(
    forward_points: &[ForwardPointQuote],
    hedge_exposures: &[HedgeExposure],
) -> Vec<EnrichedRateRow> {
    ExposureRateEnricher::new().enrich(forward_points, hedge_exposures)
}

/// Annualized forward-point fraction per tenor:
/// `mid / fdv / spot * periods_per_year`
fn annualized_points(row: &TenorRow, fdv: f64) -> BTreeMap<Tenor, f64> {
    row.tenors
        .iter()
        .map(|(tenor, quote)| {
            let fraction = quote.mid / fdv / row.spot_rate * tenor.periods_per_year();
            (*tenor, round_to(fraction, ANNUALIZED_DECIMALS))
        })
        .collect()
}

/// Prefer an exposure on the quote currency, fall back to the base
fn match_exposure(pair: CurrencyPair, exposures: &[HedgeExposure]) -> Option<&HedgeExposure> {
    exposures
        .iter()
        .find(|e| e.currency == pair.quote)
        .or_else(|| exposures.iter().find(|e| e.currency == pair.base))
}

/// Sign of the 1M annualized value (earliest quoted tenor as fallback)
fn classify_premium_discount(annualized: &BTreeMap<Tenor, f64>) -> PremiumDiscount {
    let reference = annualized
        .get(&Tenor::M1)
        .or_else(|| annualized.values().next());
    match reference {
        Some(v) if *v > 0.0 => PremiumDiscount::Premium,
        Some(v) if *v < 0.0 => PremiumDiscount::Discount,
        _ => PremiumDiscount::Flat,
    }
}

/// A discount helps a net-short forecast, a premium helps a net-long one
fn classify_favourability(
    premium_discount: PremiumDiscount,
    exposure_long: Option<bool>,
) -> Favourability {
    match (premium_discount, exposure_long) {
        (PremiumDiscount::Discount, Some(false)) | (PremiumDiscount::Premium, Some(true)) => {
            Favourability::Favourable
        }
        (PremiumDiscount::Discount, Some(true)) | (PremiumDiscount::Premium, Some(false)) => {
            Favourability::Unfavourable
        }
        _ => Favourability::Neutral,
    }
}

/// Favourable rows take the maximum annualized value, others the minimum;
/// ties resolve to the earliest tenor. Defaults to 1M absent exposure data.
fn select_best_tenor(
    annualized: &BTreeMap<Tenor, f64>,
    has_exposure: bool,
    favourability: Favourability,
) -> Tenor {
    if !has_exposure || annualized.is_empty() {
        return Tenor::M1;
    }

    let mut entries = annualized.iter().map(|(t, v)| (*t, *v));
    let (mut best, mut best_value) = entries.next().unwrap_or((Tenor::M1, 0.0));
    for (tenor, value) in entries {
        let better = match favourability {
            Favourability::Favourable => value > best_value,
            _ => value < best_value,
        };
        if better {
            best = tenor;
            best_value = value;
        }
    }
    best
}
