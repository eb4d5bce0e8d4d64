//! VAT calculation.

use rust_decimal::Decimal;

use crate::models::Money;
use crate::schedule;

/// Computes VAT: 20% of the declared price plus customs duty plus excise
/// duty.
///
/// Only invoked for liable owners (companies, and any electric-vehicle
/// importer); the aggregator never calls it on the exempt branch. The
/// result carries full decimal precision; the aggregator rounds the grand
/// total.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_engine::calculation::vat;
/// use tariff_engine::models::Money;
///
/// let amount = vat(
///     Decimal::from(980_000),
///     &Money::rub(Decimal::from(147_000)),
///     &Money::rub(Decimal::from(111_400)),
/// );
/// assert_eq!(amount.amount(), Decimal::from(247_680));
/// ```
pub fn vat(price_rub: Decimal, customs_duty: &Money, excise_duty: &Money) -> Money {
    let taxable = price_rub + customs_duty.amount() + excise_duty.amount();
    Money::rub(taxable * schedule::vat_rate())
}
