//! The fee aggregator: composes independently-computed components into the
//! payable total under the owner-type inclusion rules.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::TariffResult;
use crate::models::{CalculationResult, EngineType, Money, VehicleFacts, VehicleOwnerType};

use super::{clearance_tax, customs_duty, excise_duty, recycling_fee, validate, vat};

fn round_total(total: Decimal) -> Money {
    Money::rub(total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Computes the total import cost for a set of vehicle facts.
///
/// Validates the facts, computes customs duty, recycling fee, and
/// clearance tax, then branches on liability: private importers
/// (individual and personal-use) of non-electric vehicles owe neither
/// excise duty nor VAT, so those components are never computed for them.
/// Everyone else additionally owes excise duty and VAT on price plus duty
/// plus excise.
///
/// The operation is a pure function of its inputs: no state is read or
/// written, and identical facts always produce an identical result.
///
/// # Errors
///
/// The first validation failure in field order, or an
/// [`UnsupportedEngineType`](crate::error::TariffError::UnsupportedEngineType)
/// surfaced from the customs duty calculator. No partial total is ever
/// produced.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tariff_engine::calculation::calculate;
/// use tariff_engine::models::{
///     EnginePowerUnit, EngineType, VehicleAge, VehicleFacts, VehicleOwnerType,
/// };
///
/// let facts = VehicleFacts {
///     owner_type: VehicleOwnerType::Company,
///     engine_type: EngineType::Diesel,
///     engine_power: 320,
///     engine_power_unit: EnginePowerUnit::Horsepower,
///     engine_capacity_cc: 4500,
///     vehicle_age: VehicleAge::Years(1),
///     price_rub: Decimal::from(1_310_000),
///     euro_exchange_rate: Decimal::from_str("103.3773").unwrap(),
///     is_commercial_vehicle: false,
/// };
///
/// let result = calculate(&facts).unwrap();
/// assert_eq!(result.total.amount(), Decimal::from_str("2338650.04").unwrap());
/// ```
pub fn calculate(facts: &VehicleFacts) -> TariffResult<CalculationResult> {
    validate(facts)?;

    let customs = customs_duty(
        facts.owner_type,
        facts.engine_type,
        facts.engine_capacity_cc,
        facts.vehicle_age,
        facts.price_rub,
        facts.euro_exchange_rate,
    )?;

    let recycling = recycling_fee(
        facts.owner_type,
        facts.engine_type,
        facts.engine_capacity_cc,
        facts.vehicle_age,
        facts.is_commercial_vehicle,
    )?;

    let clearance = clearance_tax(facts.price_rub)?;

    debug!(
        customs_duty = %customs.amount(),
        recycling_fee = %recycling.amount(),
        clearance_tax = %clearance.amount(),
        "base components computed"
    );

    let exempt = matches!(
        facts.owner_type,
        VehicleOwnerType::Individual | VehicleOwnerType::IndividualPersonalUse
    ) && facts.engine_type != EngineType::Electric;

    if exempt {
        debug!("private non-electric import: excise duty and VAT not owed");
        let total = customs.amount() + recycling.amount() + clearance.amount();
        return Ok(CalculationResult {
            customs_duty: customs.rounded(),
            recycling_fee: recycling.rounded(),
            clearance_tax: clearance.rounded(),
            excise_duty: None,
            vat: None,
            total: round_total(total),
        });
    }

    let excise = excise_duty(facts.engine_power_unit, facts.engine_power)?;
    let vat_amount = vat(facts.price_rub, &customs, &excise);

    debug!(
        excise_duty = %excise.amount(),
        vat = %vat_amount.amount(),
        "liable import: excise duty and VAT added"
    );

    let total = customs.amount()
        + recycling.amount()
        + clearance.amount()
        + excise.amount()
        + vat_amount.amount();

    Ok(CalculationResult {
        customs_duty: customs.rounded(),
        recycling_fee: recycling.rounded(),
        clearance_tax: clearance.rounded(),
        excise_duty: Some(excise.rounded()),
        vat: Some(vat_amount.rounded()),
        total: round_total(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnginePowerUnit, VehicleAge};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn facts(
        owner: VehicleOwnerType,
        engine: EngineType,
        power: i32,
        capacity: i32,
        years: i32,
        price: &str,
    ) -> VehicleFacts {
        VehicleFacts {
            owner_type: owner,
            engine_type: engine,
            engine_power: power,
            engine_power_unit: EnginePowerUnit::Horsepower,
            engine_capacity_cc: capacity,
            vehicle_age: VehicleAge::Years(years),
            price_rub: dec(price),
            euro_exchange_rate: dec("103.3773"),
            is_commercial_vehicle: false,
        }
    }

    /// AG-101: private non-electric imports get no excise or VAT components
    #[test]
    fn test_exempt_branch_has_no_excise_or_vat() {
        let result = calculate(&facts(
            VehicleOwnerType::Individual,
            EngineType::Gasoline,
            200,
            3_000,
            1,
            "1000000",
        ))
        .unwrap();

        assert!(result.excise_duty.is_none());
        assert!(result.vat.is_none());
        assert_eq!(result.total.amount(), dec("1933361.65"));
    }

    /// AG-102: the exempt total is exactly the sum of the three components
    #[test]
    fn test_exempt_total_is_component_sum() {
        let result = calculate(&facts(
            VehicleOwnerType::IndividualPersonalUse,
            EngineType::Gasoline,
            120,
            2_000,
            2,
            "700000",
        ))
        .unwrap();

        let component_sum = result.customs_duty.amount()
            + result.recycling_fee.amount()
            + result.clearance_tax.amount();
        assert_eq!(result.total.amount(), component_sum);
    }

    /// AG-103: electric vehicles are liable regardless of owner
    #[test]
    fn test_electric_import_is_liable_for_any_owner() {
        for owner in [
            VehicleOwnerType::Individual,
            VehicleOwnerType::IndividualPersonalUse,
            VehicleOwnerType::Company,
        ] {
            let result = calculate(&facts(owner, EngineType::Electric, 200, 0, 1, "980000"))
                .unwrap();
            assert!(result.excise_duty.is_some(), "owner {owner:?}");
            assert!(result.vat.is_some(), "owner {owner:?}");
        }
    }

    /// AG-104: company imports include excise and VAT
    #[test]
    fn test_company_import_includes_excise_and_vat() {
        let result = calculate(&facts(
            VehicleOwnerType::Company,
            EngineType::Diesel,
            320,
            4_500,
            1,
            "1310000",
        ))
        .unwrap();

        assert_eq!(result.excise_duty.unwrap().amount(), dec("497600"));
        assert_eq!(result.vat.unwrap().amount(), dec("400820.01"));
        assert_eq!(result.total.amount(), dec("2338650.04"));
    }

    /// AG-105: identical facts produce identical results
    #[test]
    fn test_calculation_is_idempotent() {
        let input = facts(
            VehicleOwnerType::Company,
            EngineType::Gasoline,
            144,
            1_980,
            6,
            "260000",
        );
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
    }

    /// AG-106: validation failure stops the calculation
    #[test]
    fn test_validation_failure_stops_calculation() {
        let mut input = facts(
            VehicleOwnerType::Company,
            EngineType::Diesel,
            320,
            4_500,
            1,
            "1310000",
        );
        input.engine_power = 0;

        let result = calculate(&input);
        assert!(matches!(
            result,
            Err(crate::error::TariffError::InvalidEnginePower { power: 0 })
        ));
    }

    /// AG-107: commercial status raises the recycling component
    #[test]
    fn test_commercial_vehicle_raises_recycling_component() {
        let mut input = facts(
            VehicleOwnerType::Company,
            EngineType::Diesel,
            320,
            4_500,
            1,
            "1310000",
        );
        let personal = calculate(&input).unwrap();

        input.is_commercial_vehicle = true;
        let commercial = calculate(&input).unwrap();

        // 150000 * 61.76 vs 20000 * 61.76
        assert_eq!(personal.recycling_fee.amount(), dec("1235200.00"));
        assert_eq!(commercial.recycling_fee.amount(), dec("9264000.00"));
        assert!(commercial.total.amount() > personal.total.amount());
    }
}
