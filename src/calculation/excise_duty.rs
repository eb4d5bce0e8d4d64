//! Excise duty calculation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{TariffError, TariffResult};
use crate::models::{EnginePowerUnit, Money};
use crate::schedule;

/// Computes the excise duty for a declared engine power.
///
/// Kilowatt figures convert to horsepower as `hp = ceil(kw * 1.3596)`
/// before the bracket lookup; the duty is `rate * hp` where the rate comes
/// from the power ladder. Engines of 90 horsepower or less owe nothing.
///
/// # Errors
///
/// Returns [`TariffError::InvalidEnginePower`] if the power is zero or
/// negative.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_engine::calculation::excise_duty;
/// use tariff_engine::models::EnginePowerUnit;
///
/// let duty = excise_duty(EnginePowerUnit::Horsepower, 320).unwrap();
/// assert_eq!(duty.amount(), Decimal::from(497_600));
/// ```
pub fn excise_duty(unit: EnginePowerUnit, power: i32) -> TariffResult<Money> {
    if power <= 0 {
        return Err(TariffError::InvalidEnginePower { power });
    }

    let horsepower = match unit {
        EnginePowerUnit::Horsepower => i64::from(power),
        EnginePowerUnit::Kilowatt => kilowatts_to_horsepower(power),
    };

    let rate = schedule::excise_rate(horsepower);
    Ok(Money::rub(rate * Decimal::from(horsepower)))
}

/// Converts kilowatts to horsepower, rounding up to the next whole unit.
fn kilowatts_to_horsepower(kilowatts: i32) -> i64 {
    let horsepower = Decimal::from(kilowatts) * schedule::kilowatt_to_horsepower_factor();
    // Any i32 input stays well within i64 after the 1.3596 factor.
    horsepower.ceil().to_i64().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ED-001: duty is rate times horsepower
    #[test]
    fn test_duty_is_rate_times_horsepower() {
        // 320 HP falls into the 1555 RUB/HP bracket
        let duty = excise_duty(EnginePowerUnit::Horsepower, 320).unwrap();
        assert_eq!(duty.amount(), Decimal::from(1_555 * 320));
    }

    /// ED-002: small engines owe nothing
    #[test]
    fn test_small_engines_owe_nothing() {
        let duty = excise_duty(EnginePowerUnit::Horsepower, 90).unwrap();
        assert_eq!(duty.amount(), Decimal::ZERO);
    }

    /// ED-003: kilowatts convert with ceiling before the lookup
    #[test]
    fn test_kilowatts_convert_with_ceiling() {
        // 100 kW * 1.3596 = 135.96 -> 136 HP, bracket rate 58
        let duty = excise_duty(EnginePowerUnit::Kilowatt, 100).unwrap();
        assert_eq!(duty.amount(), Decimal::from(58 * 136));

        // 66 kW * 1.3596 = 89.7336 -> 90 HP, still in the zero bracket
        let duty = excise_duty(EnginePowerUnit::Kilowatt, 66).unwrap();
        assert_eq!(duty.amount(), Decimal::ZERO);

        // 67 kW * 1.3596 = 91.0932 -> 92 HP, crosses into the 58 bracket
        let duty = excise_duty(EnginePowerUnit::Kilowatt, 67).unwrap();
        assert_eq!(duty.amount(), Decimal::from(58 * 92));
    }

    /// ED-004: the converted horsepower is what the rate multiplies
    #[test]
    fn test_converted_horsepower_is_multiplied() {
        // 150 kW * 1.3596 = 203.94 -> 204 HP, bracket rate 912
        let duty = excise_duty(EnginePowerUnit::Kilowatt, 150).unwrap();
        assert_eq!(duty.amount(), Decimal::from(912 * 204));
    }

    /// ED-005: zero and negative power are rejected
    #[test]
    fn test_non_positive_power_is_rejected() {
        for power in [0, -120] {
            let result = excise_duty(EnginePowerUnit::Horsepower, power);
            assert!(matches!(
                result,
                Err(TariffError::InvalidEnginePower { .. })
            ));
        }
    }
}
