//! Input validation for the aggregator.

use rust_decimal::Decimal;

use crate::error::{TariffError, TariffResult};
use crate::models::{EngineType, VehicleAge, VehicleFacts};

/// Validates a full set of vehicle facts before any fee is computed.
///
/// Checks run in a fixed order and the first violation wins: engine power,
/// engine capacity, vehicle age, vehicle price, exchange rate. Electric
/// vehicles must declare exactly zero capacity; combustion vehicles must
/// declare a positive one.
///
/// # Errors
///
/// One of the [`TariffError`] validation variants naming the violated
/// field.
pub fn validate(facts: &VehicleFacts) -> TariffResult<()> {
    if facts.engine_power <= 0 {
        return Err(TariffError::InvalidEnginePower {
            power: facts.engine_power,
        });
    }

    let capacity_valid = match facts.engine_type {
        EngineType::Electric => facts.engine_capacity_cc == 0,
        _ => facts.engine_capacity_cc > 0,
    };
    if !capacity_valid {
        return Err(TariffError::InvalidEngineCapacity {
            capacity_cc: facts.engine_capacity_cc,
            engine_type: facts.engine_type,
        });
    }

    if let VehicleAge::Years(years) = facts.vehicle_age {
        if years < 0 {
            return Err(TariffError::InvalidVehicleAge { years });
        }
    }

    if facts.price_rub <= Decimal::ZERO {
        return Err(TariffError::InvalidVehiclePrice {
            price: facts.price_rub,
        });
    }

    if facts.euro_exchange_rate <= Decimal::ZERO {
        return Err(TariffError::InvalidExchangeRate {
            rate: facts.euro_exchange_rate,
        });
    }

    Ok(())
}
