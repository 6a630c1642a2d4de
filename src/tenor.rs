//! Forward contract tenors
//!
//! The feed quotes four maturity buckets: 1M, 3M, 6M and 1Y. Ordering
//! follows maturity, so `Tenor::M1 < Tenor::M3 < Tenor::M6 < Tenor::Y1`.

use crate::error::{FxForwardsError, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Forward maturity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tenor {
    /// One month
    M1,
    /// Three months
    M3,
    /// Six months
    M6,
    /// One year
    Y1,
}

impl Tenor {
    /// All tenors in maturity order
    pub const ALL: [Tenor; 4] = [Tenor::M1, Tenor::M3, Tenor::M6, Tenor::Y1];

    /// Feed label ("1M", "3M", "6M", "1Y")
    pub fn label(&self) -> &'static str {
        match self {
            Tenor::M1 => "1M",
            Tenor::M3 => "3M",
            Tenor::M6 => "6M",
            Tenor::Y1 => "1Y",
        }
    }

    /// Maturity in months
    pub fn months(&self) -> u32 {
        match self {
            Tenor::M1 => 1,
            Tenor::M3 => 3,
            Tenor::M6 => 6,
            Tenor::Y1 => 12,
        }
    }

    /// Number of periods of this tenor per year (annualization multiplier)
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Tenor::M1 => 12.0,
            Tenor::M3 => 4.0,
            Tenor::M6 => 2.0,
            Tenor::Y1 => 1.0,
        }
    }

    /// Day-count fraction of a year (1M = 1/12, 3M = 1/4, 6M = 1/2, 1Y = 1)
    pub fn year_fraction(&self) -> f64 {
        f64::from(self.months()) / 12.0
    }

    /// Parse from a feed label
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "1M" => Ok(Tenor::M1),
            "3M" => Ok(Tenor::M3),
            "6M" => Ok(Tenor::M6),
            "1Y" => Ok(Tenor::Y1),
            _ => Err(FxForwardsError::InvalidTenor(label.to_string())),
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tenor {
    type Err = FxForwardsError;

    fn from_str(s: &str) -> Result<Self> {
        Tenor::from_label(s)
    }
}

impl Serialize for Tenor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Tenor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TenorVisitor;

        impl Visitor<'_> for TenorVisitor {
            type Value = Tenor;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a tenor label (1M, 3M, 6M or 1Y)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Tenor, E> {
                Tenor::from_label(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TenorVisitor)
    }
}
