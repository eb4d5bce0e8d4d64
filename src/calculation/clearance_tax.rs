//! Customs clearance tax calculation.

use rust_decimal::Decimal;

use crate::error::{TariffError, TariffResult};
use crate::models::Money;
use crate::schedule;

/// Computes the customs clearance tax for a declared price in RUB.
///
/// A pure bracket lookup; the schedule amounts are whole roubles.
///
/// # Errors
///
/// Returns [`TariffError::InvalidVehiclePrice`] if the price is zero or
/// negative.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_engine::calculation::clearance_tax;
///
/// let tax = clearance_tax(Decimal::from(1_310_000)).unwrap();
/// assert_eq!(tax.amount(), Decimal::from(8_530));
/// ```
pub fn clearance_tax(price_rub: Decimal) -> TariffResult<Money> {
    if price_rub <= Decimal::ZERO {
        return Err(TariffError::InvalidVehiclePrice { price: price_rub });
    }

    Ok(Money::rub(schedule::clearance_tax_bracket(price_rub)))
}
