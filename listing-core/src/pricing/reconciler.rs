//! Price Reconciler
//!
//! Keeps price, original price and discount percentage consistent while a
//! listing is authored. The last edited field (price or discount) decides
//! which of the two is derived; the derived one is always recomputed from
//! the original price and the raw value the user typed, so repeated steps
//! never compound rounding.
//!
//! Uses rust_decimal for all arithmetic. Amounts round to whole currency
//! units, half away from zero.

use rust_decimal::prelude::*;
use shared::models::PriceState;

/// Share of the original price used to seed a new listing's price (30% off)
const SEED_RATIO: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

/// Price-related form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Price,
    OriginalPrice,
    DiscountPercent,
}

/// Which field the user touched last
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    None,
    PriceEdited,
    DiscountEdited,
}

/// Authoring a brand-new listing or editing a stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    NewListing,
    Existing,
}

/// Interpreted form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceInput {
    /// Field cleared
    Empty,
    Number(Decimal),
    /// Non-numeric, NaN or infinite input
    Unusable,
}

impl PriceInput {
    /// Parse raw form text. Accepts plain and scientific notation.
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Self::Empty;
        }
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map(Self::Number)
            .unwrap_or(Self::Unusable)
    }

    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::Unusable;
        }
        Decimal::from_f64(value)
            .map(Self::Number)
            .unwrap_or(Self::Unusable)
    }
}

impl From<Decimal> for PriceInput {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<Option<Decimal>> for PriceInput {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }
}

/// Round to whole currency units
#[inline]
fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[inline]
fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[inline]
fn clamp_percent(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// `round((original - price) / original * 100)`, clamped to `[0, 100]`
///
/// `None` when the quotient leaves the decimal range.
pub fn discount_for(original: Decimal, price: Decimal) -> Option<Decimal> {
    let share = original.checked_sub(price)?.checked_div(original)?;
    let percent = share.checked_mul(Decimal::ONE_HUNDRED)?;
    Some(clamp_percent(round_whole(percent)))
}

/// `round(original * (100 - discount) / 100)`, clamped to `>= 0`
///
/// `None` when the product leaves the decimal range.
pub fn price_for(original: Decimal, discount: Decimal) -> Option<Decimal> {
    let remaining = (Decimal::ONE_HUNDRED - clamp_percent(discount)) / Decimal::ONE_HUNDRED;
    let price = original.checked_mul(remaining)?;
    Some(non_negative(round_whole(price)))
}

/// Whether the triple satisfies the price/discount relation
///
/// Always true without a usable original price, or when the relation
/// cannot be computed.
pub fn is_reconciled(state: &PriceState) -> bool {
    match state.reference_price() {
        Some(original) => price_for(original, state.discount_percent)
            .is_none_or(|expected| state.price == Some(expected)),
        None => true,
    }
}

/// Price form session
#[derive(Debug, Clone)]
pub struct PriceReconciler {
    state: PriceState,
    last_edited: EditState,
    kind: SessionKind,
    seeded: bool,
}

impl PriceReconciler {
    /// Session for a brand-new listing (empty form)
    pub fn new_listing() -> Self {
        Self {
            state: PriceState::default(),
            last_edited: EditState::None,
            kind: SessionKind::NewListing,
            seeded: false,
        }
    }

    /// Session for a stored listing
    ///
    /// Stored values are clamped into range but not reconciled; the stored
    /// triple is shown as saved until the user edits a field.
    pub fn editing(snapshot: PriceState) -> Self {
        let state = PriceState {
            price: snapshot.price.map(non_negative),
            original_price: snapshot.original_price.map(non_negative),
            discount_percent: clamp_percent(snapshot.discount_percent),
        };
        Self {
            state,
            last_edited: EditState::None,
            kind: SessionKind::Existing,
            seeded: false,
        }
    }

    pub fn state(&self) -> &PriceState {
        &self.state
    }

    pub fn last_edited(&self) -> EditState {
        self.last_edited
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Flat snapshot persisted on save
    pub fn snapshot(&self) -> PriceState {
        self.state
    }

    /// Apply raw form text for a field
    pub fn apply_input(&mut self, field: PriceField, raw: &str) -> PriceState {
        self.apply(field, PriceInput::parse(raw))
    }

    /// Apply one field edit and return the reconciled triple
    pub fn apply(&mut self, field: PriceField, input: impl Into<PriceInput>) -> PriceState {
        let input = input.into();
        match field {
            PriceField::Price => self.edit_price(input),
            PriceField::DiscountPercent => self.edit_discount(input),
            PriceField::OriginalPrice => self.edit_original(input),
        }
        tracing::trace!(?field, ?input, state = ?self.state, "Price reconciled");
        self.state
    }

    fn edit_price(&mut self, input: PriceInput) {
        self.last_edited = EditState::PriceEdited;
        match input {
            PriceInput::Number(value) => {
                self.state.price = Some(non_negative(value));
                self.derive_discount();
            }
            PriceInput::Empty => self.state.price = None,
            PriceInput::Unusable => self.state.price = Some(Decimal::ZERO),
        }
    }

    fn edit_discount(&mut self, input: PriceInput) {
        self.last_edited = EditState::DiscountEdited;
        match input {
            PriceInput::Number(value) => {
                self.state.discount_percent = clamp_percent(value);
                self.derive_price();
            }
            PriceInput::Empty | PriceInput::Unusable => {
                self.state.discount_percent = Decimal::ZERO;
            }
        }
    }

    fn edit_original(&mut self, input: PriceInput) {
        self.state.original_price = match input {
            PriceInput::Number(value) => Some(non_negative(value)),
            PriceInput::Empty => None,
            PriceInput::Unusable => Some(Decimal::ZERO),
        };

        if self.should_seed()
            && let Some(seed) = self
                .state
                .reference_price()
                .and_then(|original| original.checked_mul(SEED_RATIO))
        {
            self.state.price = Some(round_whole(seed));
            self.seeded = true;
            self.derive_discount();
            return;
        }

        match self.last_edited {
            EditState::DiscountEdited => self.derive_price(),
            EditState::PriceEdited | EditState::None => self.derive_discount(),
        }
    }

    /// Seed fires once, on new listings, while the price is still empty.
    /// A discount the user already typed takes precedence over the seed.
    fn should_seed(&self) -> bool {
        self.kind == SessionKind::NewListing
            && !self.seeded
            && self.last_edited != EditState::DiscountEdited
            && self.state.price.is_none()
            && self.state.reference_price().is_some()
    }

    fn derive_discount(&mut self) {
        let (Some(original), Some(price)) = (self.state.reference_price(), self.state.price) else {
            return;
        };
        match discount_for(original, price) {
            Some(discount) => self.state.discount_percent = discount,
            None => tracing::debug!(%original, %price, "Discount out of range, left unchanged"),
        }
    }

    fn derive_price(&mut self) {
        let Some(original) = self.state.reference_price() else {
            return;
        };
        match price_for(original, self.state.discount_percent) {
            Some(price) => self.state.price = Some(price),
            None => tracing::debug!(%original, "Price out of range, left unchanged"),
        }
    }
}
