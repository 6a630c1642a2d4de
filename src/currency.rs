//! Currency and currency-pair types
//!
//! A `Currency` is a validated 3-letter ISO-4217-like code. The market feed
//! also carries offshore/non-ISO codes (e.g. CNH), so validation is by shape
//! (three ASCII letters) rather than a closed list.

use crate::error::{FxForwardsError, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Point scale factor for pairs quoted to four decimals (one pip = 0.0001)
pub const POINT_FACTOR_FOUR_DECIMAL: f64 = 10_000.0;

/// Point scale factor for pairs quoted to two decimals (one pip = 0.01)
pub const POINT_FACTOR_TWO_DECIMAL: f64 = 100.0;

/// A 3-letter currency code (ISO 4217 or market convention, e.g. CNH)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency([u8; 3]);

impl Currency {
    /// Parse from a 3-letter code; lowercase input is accepted
    pub fn from_code(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(FxForwardsError::InvalidCurrency(code.to_string()));
        }
        let mut out = [0u8; 3];
        for (o, b) in out.iter_mut().zip(bytes) {
            *o = b.to_ascii_uppercase();
        }
        Ok(Currency(out))
    }

    /// Get the uppercase 3-letter code
    pub fn code(&self) -> &str {
        // Always valid UTF-8: constructed from ASCII letters only
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Whether pairs quoted in this currency use the two-decimal convention
    pub fn is_two_decimal(&self) -> bool {
        self.code() == "JPY"
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = FxForwardsError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::from_code(s)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CurrencyVisitor;

        impl Visitor<'_> for CurrencyVisitor {
            type Value = Currency;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 3-letter currency code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Currency, E> {
                Currency::from_code(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CurrencyVisitor)
    }
}

/// A currency pair, parsed from the feed's 6-letter concatenated form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyPair {
    pub base: Currency,
    pub quote: Currency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Parse from a concatenated 6-letter code such as "GBPUSD"
    pub fn parse(code: &str) -> Result<Self> {
        if code.len() != 6 || !code.is_ascii() {
            return Err(FxForwardsError::InvalidCurrencyPair(code.to_string()));
        }
        let base = Currency::from_code(&code[..3])
            .map_err(|_| FxForwardsError::InvalidCurrencyPair(code.to_string()))?;
        let quote = Currency::from_code(&code[3..])
            .map_err(|_| FxForwardsError::InvalidCurrencyPair(code.to_string()))?;
        Ok(Self { base, quote })
    }

    /// Concatenated 6-letter code, the feed and grid representation
    pub fn code(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }

    /// Get the inverse pair
    pub fn inverse(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }

    /// Divisor converting quoted forward points into price units
    ///
    /// 100 for two-decimal (JPY-quoted) pairs, 10_000 otherwise.
    pub fn point_factor(&self) -> f64 {
        if self.quote.is_two_decimal() {
            POINT_FACTOR_TWO_DECIMAL
        } else {
            POINT_FACTOR_FOUR_DECIMAL
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = FxForwardsError;

    fn from_str(s: &str) -> Result<Self> {
        CurrencyPair::parse(s)
    }
}

impl Serialize for CurrencyPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for CurrencyPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PairVisitor;

        impl Visitor<'_> for PairVisitor {
            type Value = CurrencyPair;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 6-letter currency pair code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<CurrencyPair, E> {
                CurrencyPair::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PairVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD").unwrap().code(), "USD");
        assert_eq!(Currency::from_code("gbp").unwrap().code(), "GBP");
        assert_eq!(Currency::from_code("CNH").unwrap().code(), "CNH");
        assert!(Currency::from_code("US").is_err());
        assert!(Currency::from_code("USDX").is_err());
        assert!(Currency::from_code("U1D").is_err());
        assert!(Currency::from_code("").is_err());
    }

    #[test]
    fn test_currency_display() {
        let gbp = Currency::from_code("GBP").unwrap();
        assert_eq!(format!("{}", gbp), "GBP");
    }

    #[test]
    fn test_pair_parse() {
        let pair = CurrencyPair::parse("GBPUSD").unwrap();
        assert_eq!(pair.base.code(), "GBP");
        assert_eq!(pair.quote.code(), "USD");
        assert_eq!(pair.code(), "GBPUSD");
        assert_eq!(format!("{}", pair), "GBP/USD");
    }

    #[test]
    fn test_pair_parse_rejects_bad_shapes() {
        assert!(CurrencyPair::parse("GBPUS").is_err());
        assert!(CurrencyPair::parse("GBPUSDX").is_err());
        assert!(CurrencyPair::parse("GB1USD").is_err());
        assert!(CurrencyPair::parse("").is_err());
    }

    #[test]
    fn test_pair_inverse() {
        let pair = CurrencyPair::parse("EURUSD").unwrap();
        let inverse = pair.inverse();
        assert_eq!(inverse.code(), "USDEUR");
    }

    #[test]
    fn test_point_factor() {
        assert_eq!(
            CurrencyPair::parse("GBPUSD").unwrap().point_factor(),
            10_000.0
        );
        assert_eq!(CurrencyPair::parse("GBPJPY").unwrap().point_factor(), 100.0);
        assert_eq!(CurrencyPair::parse("USDJPY").unwrap().point_factor(), 100.0);
        assert_eq!(
            CurrencyPair::parse("JPYUSD").unwrap().point_factor(),
            10_000.0
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let pair = CurrencyPair::parse("GBPJPY").unwrap();
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"GBPJPY\"");
        let back: CurrencyPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);

        let ccy: Currency = serde_json::from_str("\"CAD\"").unwrap();
        assert_eq!(ccy.code(), "CAD");
        assert!(serde_json::from_str::<Currency>("\"CADX\"").is_err());
    }
}
