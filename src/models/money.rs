//! Money model with an explicit currency tag.
//!
//! This module defines the [`Money`] value type used for every fee amount.
//! Cross-currency arithmetic always passes through an explicit exchange
//! rate; there is no implicit conversion anywhere in the engine.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The currency a monetary amount is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// Russian rouble.
    Rub,
    /// Euro.
    Eur,
}

/// A monetary amount tagged with its currency.
///
/// Amounts produced by the engine are never negative. Intermediate amounts
/// carry full decimal precision; [`Money::rounded`] produces the 2-decimal
/// presentation form.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tariff_engine::models::{Currency, Money};
///
/// let price = Money::rub(Decimal::from(1_310_000));
/// let rate = Decimal::from_str("103.3773").unwrap();
/// let in_euros = price.rub_to_eur(rate).rounded();
/// assert_eq!(in_euros.currency(), Currency::Eur);
/// assert_eq!(in_euros.amount(), Decimal::from_str("12672.03").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a RUB amount.
    pub fn rub(amount: Decimal) -> Self {
        Money {
            amount,
            currency: Currency::Rub,
        }
    }

    /// Creates a EUR amount.
    pub fn eur(amount: Decimal) -> Self {
        Money {
            amount,
            currency: Currency::Eur,
        }
    }

    /// Returns the amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency tag.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Converts a RUB amount to EUR through an explicit RUB-per-EUR rate.
    ///
    /// RUB divided by RUB-per-EUR yields EUR; this is the only conversion
    /// direction the engine uses when entering the EUR-denominated customs
    /// duty tables.
    pub fn rub_to_eur(&self, rub_per_eur: Decimal) -> Money {
        debug_assert_eq!(self.currency, Currency::Rub);
        Money::eur(self.amount / rub_per_eur)
    }

    /// Converts a EUR amount back to RUB through an explicit RUB-per-EUR
    /// rate.
    pub fn eur_to_rub(&self, rub_per_eur: Decimal) -> Money {
        debug_assert_eq!(self.currency, Currency::Eur);
        Money::rub(self.amount * rub_per_eur)
    }

    /// Rounds the amount to 2 decimal places, half away from zero.
    pub fn rounded(&self) -> Money {
        Money {
            amount: self
                .amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency,
        }
    }
}
