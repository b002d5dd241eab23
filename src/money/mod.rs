//! Monetary values scaled by an asset's decimal precision.
//!
//! Amounts arrive on the wire either as integer counts of an asset's smallest
//! unit ("units") or, behind a caller-selected flag, as already-scaled decimal
//! values ("tokens"). [`Money`] stores the smallest-unit count together with
//! the resolved [`Asset`] so the two conventions can never be confused after
//! construction.

mod formatting;
pub use formatting::format_tokens;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{Asset, AssetId};

/// Decimal keeps at most 28 fractional digits; descriptors past that are
/// clamped so scaling stays total.
const MAX_SCALE: u32 = 28;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MoneyError {
    #[error("cannot parse {0:?} as a non-negative amount")]
    InvalidAmount(String),

    #[error("amount {0} does not fit the supported unit range")]
    Overflow(String),

    #[error("asset mismatch: {0:?} vs {1:?}")]
    AssetMismatch(AssetId, AssetId),
}

/// A raw amount field as it appears on the wire.
///
/// Indexers emit amounts inconsistently as JSON numbers or digit strings;
/// the untagged union accepts all three shapes and defers validation to
/// [`RawAmount::to_decimal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(u64),
    Float(f64),
    Text(String),
}

impl RawAmount {
    /// Validates the raw value into a non-negative [`Decimal`].
    ///
    /// String values are parsed directly so precision is never routed
    /// through `f64`.
    pub fn to_decimal(&self) -> Result<Decimal, MoneyError> {
        let value = match self {
            RawAmount::Number(n) => Some(Decimal::from(*n)),
            RawAmount::Float(f) => Decimal::from_f64(*f),
            RawAmount::Text(s) => Decimal::from_str(s).ok(),
        };
        match value {
            Some(v) if v >= Decimal::ZERO => Ok(v),
            _ => Err(MoneyError::InvalidAmount(self.raw_text())),
        }
    }

    fn raw_text(&self) -> String {
        match self {
            RawAmount::Number(n) => n.to_string(),
            RawAmount::Float(f) => f.to_string(),
            RawAmount::Text(s) => s.clone(),
        }
    }
}

impl From<u64> for RawAmount {
    fn from(n: u64) -> Self {
        RawAmount::Number(n)
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

/// Selects how raw amounts are interpreted for one whole parse batch.
///
/// The flag reaches only the exchange path (order price, amount, total and
/// the matcher/transaction fees); every other monetary field is always read
/// as smallest units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountFormat {
    /// Raw values are integer counts of the asset's smallest unit.
    #[default]
    Units,
    /// Raw values are already scaled to whole tokens.
    Tokens,
}

impl AmountFormat {
    /// Builds a [`Money`] from a raw wire amount under this format.
    pub fn money(&self, raw: &RawAmount, asset: &Asset) -> Result<Money, MoneyError> {
        match self {
            AmountFormat::Units => Money::from_raw_units(raw, asset),
            AmountFormat::Tokens => Money::from_raw_tokens(raw, asset),
        }
    }
}

/// An amount denominated in a resolved asset.
///
/// Internally the amount is the smallest-unit count. Conversions to the
/// human-readable token value divide by `10^decimals`; conversions from
/// token values multiply back and round half-up to a whole unit count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    units: Decimal,
    asset: Asset,
}

impl Money {
    pub fn from_units(units: Decimal, asset: Asset) -> Self {
        Self { units, asset }
    }

    /// Fails when the scaled unit count leaves the supported numeric range.
    pub fn from_tokens(tokens: Decimal, asset: Asset) -> Result<Self, MoneyError> {
        let units = tokens
            .checked_mul(scale_factor(asset.decimals))
            .ok_or_else(|| MoneyError::Overflow(tokens.to_string()))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Ok(Self { units, asset })
    }

    /// Builds a [`Money`] from a raw wire amount counted in smallest units.
    pub fn from_raw_units(raw: &RawAmount, asset: &Asset) -> Result<Self, MoneyError> {
        Ok(Self::from_units(raw.to_decimal()?, asset.clone()))
    }

    /// Builds a [`Money`] from a raw wire amount already scaled to tokens.
    pub fn from_raw_tokens(raw: &RawAmount, asset: &Asset) -> Result<Self, MoneyError> {
        Self::from_tokens(raw.to_decimal()?, asset.clone())
    }

    /// The smallest-unit count.
    pub fn units(&self) -> Decimal {
        self.units
    }

    /// The human-readable token value (`units / 10^decimals`), carrying the
    /// asset's scale (`5.00000000` for an 8-decimal asset, not `5`).
    pub fn to_tokens(&self) -> Decimal {
        self.units * token_scale(self.asset.decimals)
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// The smaller of two amounts in the same asset.
    pub fn min(self, other: Money) -> Result<Money, MoneyError> {
        if self.asset.id != other.asset.id {
            return Err(MoneyError::AssetMismatch(self.asset.id, other.asset.id));
        }
        Ok(if other.units < self.units { other } else { self })
    }
}

fn scale_factor(decimals: u32) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(decimals.min(MAX_SCALE)), 0)
}

fn token_scale(decimals: u32) -> Decimal {
    Decimal::new(1, decimals.min(MAX_SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn mock_asset(id: &str, decimals: u32) -> Asset {
        Asset {
            id: AssetId::from_raw(Some(id)),
            name: format!("Asset {}", id),
            ticker: None,
            decimals,
        }
    }

    fn native_asset() -> Asset {
        Asset {
            id: AssetId::Native,
            name: "Native".to_string(),
            ticker: Some("NAT".to_string()),
            decimals: 8,
        }
    }

    #[test]
    fn test_raw_amount_deserializes_number_string_and_float() {
        let number: RawAmount = serde_json::from_str("200000000").unwrap();
        assert_eq!(number, RawAmount::Number(200000000));

        let text: RawAmount = serde_json::from_str("\"200000000\"").unwrap();
        assert_eq!(text, RawAmount::Text("200000000".to_string()));

        let float: RawAmount = serde_json::from_str("1.5").unwrap();
        assert_eq!(float, RawAmount::Float(1.5));
    }

    #[test]
    fn test_to_decimal_parses_digit_string_exactly() {
        let raw = RawAmount::Text("92233720368547758079".to_string());
        assert_eq!(raw.to_decimal().unwrap(), dec!(92233720368547758079));
    }

    #[test]
    fn test_to_decimal_rejects_garbage() {
        let raw = RawAmount::Text("12abc".to_string());
        assert!(matches!(raw.to_decimal(), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_to_decimal_rejects_negative() {
        assert!(RawAmount::Text("-5".to_string()).to_decimal().is_err());
        assert!(RawAmount::Float(-0.5).to_decimal().is_err());
    }

    #[test]
    fn test_to_decimal_rejects_nan() {
        assert!(RawAmount::Float(f64::NAN).to_decimal().is_err());
        assert!(RawAmount::Float(f64::INFINITY).to_decimal().is_err());
    }

    #[test]
    fn test_to_decimal_accepts_zero() {
        assert_eq!(RawAmount::Number(0).to_decimal().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_from_raw_units_scales_to_tokens() {
        let money = Money::from_raw_units(&RawAmount::from("500000000"), &native_asset()).unwrap();
        assert_eq!(money.units(), dec!(500000000));
        assert_eq!(money.to_tokens(), dec!(5));
    }

    #[test]
    fn test_from_raw_tokens_multiplies_back_to_units() {
        let money = Money::from_raw_tokens(&RawAmount::from("5"), &native_asset()).unwrap();
        assert_eq!(money.units(), dec!(500000000));
    }

    #[test]
    fn test_from_tokens_rounds_half_up() {
        let asset = mock_asset("abc", 2);
        // 1.005 tokens -> 100.5 units -> 101
        let money = Money::from_tokens(dec!(1.005), asset.clone()).unwrap();
        assert_eq!(money.units(), dec!(101));
        // 1.004 tokens -> 100.4 units -> 100
        let money = Money::from_tokens(dec!(1.004), asset).unwrap();
        assert_eq!(money.units(), dec!(100));
    }

    #[test]
    fn test_from_tokens_overflow_is_an_error() {
        // 8e20 tokens at 8 decimals would need 8e28 units, past Decimal::MAX.
        let result = Money::from_tokens(dec!(800000000000000000000), native_asset());
        assert!(matches!(result, Err(MoneyError::Overflow(_))));
    }

    #[test]
    fn test_tokens_format_rejects_amounts_beyond_unit_capacity() {
        let raw = RawAmount::from("800000000000000000000");
        let result = AmountFormat::Tokens.money(&raw, &native_asset());
        assert!(matches!(result, Err(MoneyError::Overflow(_))));
    }

    #[test]
    fn test_zero_decimals_asset_keeps_units_as_tokens() {
        let asset = mock_asset("whole", 0);
        let money = Money::from_raw_units(&RawAmount::from(42u64), &asset).unwrap();
        assert_eq!(money.to_tokens(), dec!(42));
    }

    #[test]
    fn test_min_picks_smaller_amount() {
        let asset = native_asset();
        let small = Money::from_units(dec!(100), asset.clone());
        let large = Money::from_units(dec!(200), asset);
        let min = small.clone().min(large).unwrap();
        assert_eq!(min, small);
    }

    #[test]
    fn test_min_is_symmetric_on_equal_amounts() {
        let asset = native_asset();
        let a = Money::from_units(dec!(100), asset.clone());
        let b = Money::from_units(dec!(100), asset);
        assert_eq!(a.clone().min(b.clone()).unwrap(), b.min(a).unwrap());
    }

    #[test]
    fn test_min_refuses_mixed_assets() {
        let a = Money::from_units(dec!(100), native_asset());
        let b = Money::from_units(dec!(200), mock_asset("other", 8));
        assert!(matches!(a.min(b), Err(MoneyError::AssetMismatch(_, _))));
    }

    #[test]
    fn test_amount_format_units_vs_tokens() {
        let asset = native_asset();
        let raw = RawAmount::from("3");

        let units = AmountFormat::Units.money(&raw, &asset).unwrap();
        assert_eq!(units.units(), dec!(3));

        let tokens = AmountFormat::Tokens.money(&raw, &asset).unwrap();
        assert_eq!(tokens.units(), dec!(300000000));
    }

    #[test]
    fn test_money_serializes_units_as_string() {
        let money = Money::from_units(dec!(500000000), native_asset());
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["units"], serde_json::json!("500000000"));
    }
}
