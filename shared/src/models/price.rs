//! Price Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price triple of a listing
///
/// Live form state while a listing is being authored, persisted as this flat
/// snapshot on save. Amounts are whole currency units, discount is a
/// percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceState {
    /// Current selling price. `None` while a new listing has no price yet.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    /// Reference price the discount is computed from
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub original_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub discount_percent: Decimal,
}

impl PriceState {
    pub fn new(
        price: Option<Decimal>,
        original_price: Option<Decimal>,
        discount_percent: Decimal,
    ) -> Self {
        Self {
            price,
            original_price,
            discount_percent,
        }
    }

    /// Original price usable for reconciliation (present and positive)
    pub fn reference_price(&self) -> Option<Decimal> {
        self.original_price.filter(|p| *p > Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn test_reference_price_requires_positive_original() {
        let mut state = PriceState::new(Some(d(75)), Some(d(100)), d(25));
        assert_eq!(state.reference_price(), Some(d(100)));

        state.original_price = Some(Decimal::ZERO);
        assert_eq!(state.reference_price(), None);

        state.original_price = None;
        assert_eq!(state.reference_price(), None);
    }

    #[test]
    fn test_snapshot_serializes_as_numbers() {
        let state = PriceState::new(Some(d(75)), Some(d(100)), d(25));
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["price"], 75.0);
        assert_eq!(json["original_price"], 100.0);
        assert_eq!(json["discount_percent"], 25.0);
    }

    #[test]
    fn test_snapshot_missing_fields_default() {
        let state: PriceState = serde_json::from_str(r#"{"price": 40}"#).unwrap();
        assert_eq!(state.price, Some(d(40)));
        assert_eq!(state.original_price, None);
        assert_eq!(state.discount_percent, Decimal::ZERO);
    }
}
