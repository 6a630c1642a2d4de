//! Property tests for tenor aggregation

use fx_forwards::prelude::*;
use fx_forwards::rounding::{round_to, ALL_IN_MID_DECIMALS, MID_DECIMALS};
use proptest::prelude::*;

fn quote_for(pair: &str, date: &str, tenor: Tenor, bid: f64, ask: f64) -> ForwardPointQuote {
    ForwardPointQuote {
        currency_pair: pair.parse().unwrap(),
        spot_rate: 1.2345,
        time: "9:00:00".to_string(),
        tenor,
        bid,
        ask,
        rate_date: date.parse().unwrap(),
        all_in_bid: 1.2345 + bid / 10_000.0,
        all_in_ask: 1.2345 + ask / 10_000.0,
    }
}

fn tenor_strategy() -> impl Strategy<Value = Tenor> {
    prop::sample::select(Tenor::ALL.to_vec())
}

proptest! {
    #[test]
    fn mid_is_the_rounded_mean_of_bid_and_ask(
        bid in -500.0f64..500.0,
        ask in -500.0f64..500.0,
        tenor in tenor_strategy(),
    ) {
        let quotes = vec![quote_for("GBPUSD", "2025-01-20", tenor, bid, ask)];
        let rows = aggregate(&quotes);

        prop_assert_eq!(rows.len(), 1);
        let produced = rows[0].mid(tenor).unwrap();
        prop_assert_eq!(produced, round_to((bid + ask) / 2.0, MID_DECIMALS));

        let all_in = rows[0].all_in_mid(tenor).unwrap();
        let expected = round_to(
            ((1.2345 + bid / 10_000.0) + (1.2345 + ask / 10_000.0)) / 2.0,
            ALL_IN_MID_DECIMALS,
        );
        prop_assert_eq!(all_in, expected);
    }

    #[test]
    fn one_row_per_distinct_group_key(
        picks in prop::collection::vec((0usize..4, 0usize..2, tenor_strategy()), 0..24),
    ) {
        let pairs = ["GBPUSD", "EURUSD", "GBPJPY", "USDCAD"];
        let dates = ["2025-01-20", "2025-01-22"];

        let quotes: Vec<ForwardPointQuote> = picks
            .iter()
            .map(|(p, d, tenor)| quote_for(pairs[*p], dates[*d], *tenor, -2.0, -1.5))
            .collect();

        let rows = aggregate(&quotes);

        let mut distinct: Vec<(usize, usize)> = Vec::new();
        for (p, d, _) in &picks {
            if !distinct.contains(&(*p, *d)) {
                distinct.push((*p, *d));
            }
        }

        prop_assert_eq!(rows.len(), distinct.len());
        // First-seen order of group keys is preserved
        for (row, (p, d)) in rows.iter().zip(&distinct) {
            prop_assert_eq!(row.currency_pair.code(), pairs[*p]);
            prop_assert_eq!(row.rate_date.to_string(), dates[*d]);
        }
    }

    #[test]
    fn reaggregation_is_idempotent(
        bid in -500.0f64..500.0,
        ask in -500.0f64..500.0,
        tenor in tenor_strategy(),
    ) {
        let rows = aggregate(&[quote_for("GBPUSD", "2025-01-20", tenor, bid, ask)]);
        let quote = rows[0].tenors[&tenor];

        let rebuilt = ForwardPointQuote {
            bid: quote.mid,
            ask: quote.mid,
            all_in_bid: quote.all_in_mid,
            all_in_ask: quote.all_in_mid,
            ..quote_for("GBPUSD", "2025-01-20", tenor, bid, ask)
        };
        let again = aggregate(&[rebuilt]);

        prop_assert_eq!(again[0].tenors[&tenor].mid, quote.mid);
        prop_assert_eq!(again[0].tenors[&tenor].all_in_mid, quote.all_in_mid);
    }

    #[test]
    fn enrichment_never_fails_on_unmatched_currencies(
        amount in -1000.0f64..1000.0,
        tenor in tenor_strategy(),
    ) {
        let quotes = vec![quote_for("NOKSEK", "2025-01-20", tenor, -3.0, -2.0)];
        let exposures = vec![HedgeExposure {
            currency: "CAD".parse().unwrap(),
            amount1: amount,
            amount2: amount,
            amount3: amount,
        }];

        let rows = enrich(&quotes, &exposures);
        prop_assert_eq!(rows.len(), 1);
        prop_assert_eq!(rows[0].hedged_exposure, 0.0);
        prop_assert_eq!(rows[0].best_tenor, Tenor::M1);
    }
}
