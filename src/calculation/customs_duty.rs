//! Customs duty calculation.

use rust_decimal::Decimal;

use crate::error::{TariffError, TariffResult};
use crate::models::{EngineType, Money, VehicleAge, VehicleOwnerType};
use crate::schedule;

/// Computes the customs duty in RUB.
///
/// The declared RUB price is divided by the RUB-per-EUR exchange rate and
/// rounded to 2 decimal places before entering the EUR-denominated formula
/// tables; the EUR result is multiplied back. The returned amount carries
/// full decimal precision; the aggregator rounds the grand total.
///
/// Electric vehicles bypass the tables for every owner class: the duty is
/// 15% of the RUB price regardless of age or capacity.
///
/// # Errors
///
/// Returns [`TariffError::InvalidVehiclePrice`],
/// [`TariffError::InvalidExchangeRate`],
/// [`TariffError::InvalidEngineCapacity`], or
/// [`TariffError::InvalidVehicleAge`] for out-of-range inputs, and
/// [`TariffError::UnsupportedEngineType`] if a company import has no
/// formula family for its engine type.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tariff_engine::calculation::customs_duty;
/// use tariff_engine::models::{EngineType, VehicleAge, VehicleOwnerType};
///
/// let duty = customs_duty(
///     VehicleOwnerType::IndividualPersonalUse,
///     EngineType::Gasoline,
///     2000,
///     VehicleAge::Years(1),
///     Decimal::from(700_000),
///     Decimal::from_str("103.3773").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(duty.rounded().amount(), Decimal::from_str("516886.50").unwrap());
/// ```
pub fn customs_duty(
    owner: VehicleOwnerType,
    engine: EngineType,
    capacity_cc: i32,
    age: VehicleAge,
    price_rub: Decimal,
    euro_exchange_rate: Decimal,
) -> TariffResult<Money> {
    if price_rub <= Decimal::ZERO {
        return Err(TariffError::InvalidVehiclePrice { price: price_rub });
    }
    if euro_exchange_rate <= Decimal::ZERO {
        return Err(TariffError::InvalidExchangeRate {
            rate: euro_exchange_rate,
        });
    }

    let band = age.band()?;

    if engine == EngineType::Electric {
        return Ok(Money::rub(price_rub * schedule::electric_duty_fraction()));
    }

    if capacity_cc <= 0 {
        return Err(TariffError::InvalidEngineCapacity {
            capacity_cc,
            engine_type: engine,
        });
    }

    let price_eur = Money::rub(price_rub)
        .rub_to_eur(euro_exchange_rate)
        .rounded();

    let duty_eur = match owner {
        VehicleOwnerType::Individual | VehicleOwnerType::IndividualPersonalUse => {
            schedule::individual_duty_eur(band, i64::from(capacity_cc), price_eur.amount())
        }
        VehicleOwnerType::Company => {
            schedule::company_duty_eur(engine, band, i64::from(capacity_cc), price_eur.amount())?
        }
    };

    Ok(Money::eur(duty_eur).eur_to_rub(euro_exchange_rate))
}
