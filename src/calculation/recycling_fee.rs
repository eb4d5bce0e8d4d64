//! Recycling fee calculation.

use crate::error::{TariffError, TariffResult};
use crate::models::{EngineType, Money, VehicleAge, VehicleOwnerType};
use crate::schedule;

/// Computes the recycling fee.
///
/// Personal-use imports of combustion vehicles below the capacity
/// exemption threshold pay a flat age-banded amount. Every other request
/// pays `base rate * coefficient`, where the base rate depends on
/// commercial status and the coefficient comes from the owner-class
/// schedule; the product is rounded to 2 decimal places.
///
/// # Errors
///
/// Returns [`TariffError::InvalidEngineCapacity`] if a combustion engine
/// declares a non-positive capacity, and
/// [`TariffError::InvalidVehicleAge`] if the age is negative.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_engine::calculation::recycling_fee;
/// use tariff_engine::models::{EngineType, VehicleAge, VehicleOwnerType};
///
/// let fee = recycling_fee(
///     VehicleOwnerType::Company,
///     EngineType::Diesel,
///     4500,
///     VehicleAge::Years(1),
///     false,
/// )
/// .unwrap();
/// assert_eq!(fee.amount(), Decimal::from(1_235_200));
/// ```
pub fn recycling_fee(
    owner: VehicleOwnerType,
    engine: EngineType,
    capacity_cc: i32,
    age: VehicleAge,
    is_commercial: bool,
) -> TariffResult<Money> {
    if engine != EngineType::Electric && capacity_cc <= 0 {
        return Err(TariffError::InvalidEngineCapacity {
            capacity_cc,
            engine_type: engine,
        });
    }

    let band = age.band()?;

    // Small personal-use combustion imports bypass the coefficient path.
    if owner == VehicleOwnerType::IndividualPersonalUse
        && engine != EngineType::Electric
        && capacity_cc < schedule::CAPACITY_EXEMPTION_CC
    {
        return Ok(Money::rub(schedule::personal_use_flat_fee(band)));
    }

    let base_rate = schedule::recycling_base_rate(is_commercial);
    let coefficient = schedule::recycling_coefficient(owner, engine, capacity_cc, band);

    Ok(Money::rub(base_rate * coefficient).rounded())
}
