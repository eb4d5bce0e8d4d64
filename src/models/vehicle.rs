//! Vehicle fact models and related enumerations.
//!
//! This module defines the typed inputs a calculation consumes: engine and
//! owner classifications, the vehicle age with its regulatory band mapping,
//! and the [`VehicleFacts`] aggregate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TariffError, TariffResult};

/// The engine type of an imported vehicle.
///
/// Determines which customs duty formula family applies and whether the
/// excise/VAT exemption for private importers is lifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    /// Gasoline (petrol) engine.
    Gasoline,
    /// Diesel engine.
    Diesel,
    /// Electric motor. Declares zero cylinder capacity.
    Electric,
    /// Hybrid drivetrain. Shares the gasoline duty formulas.
    Hybrid,
}

/// The unit an engine power figure is declared in.
///
/// Kilowatt figures are converted to horsepower before the excise bracket
/// lookup; see [`crate::calculation::excise_duty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnginePowerUnit {
    /// Metric horsepower.
    Horsepower,
    /// Kilowatts.
    Kilowatt,
}

/// The category of the importing owner.
///
/// Individual owners (both variants) are exempt from excise duty and VAT
/// unless the vehicle is electric. Personal-use importers additionally
/// qualify for a flat recycling fee below the capacity exemption threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleOwnerType {
    /// A private individual importing for resale.
    Individual,
    /// A private individual importing for personal use.
    IndividualPersonalUse,
    /// A company (legal entity).
    Company,
}

/// One of the four regulatory age bands that select a formula row.
///
/// Band boundaries are half-open and lower-inclusive: a vehicle aged exactly
/// 3, 5, or 7 years falls into [`ThreeToFive`](AgeBand::ThreeToFive),
/// [`FiveToSeven`](AgeBand::FiveToSeven), and
/// [`SevenPlus`](AgeBand::SevenPlus) respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Less than 3 years old.
    UnderThree,
    /// From 3 years (inclusive) to 5 years (exclusive).
    ThreeToFive,
    /// From 5 years (inclusive) to 7 years (exclusive).
    FiveToSeven,
    /// 7 years old or more.
    SevenPlus,
}

/// The declared age of a vehicle: either raw years or an explicit band.
///
/// Callers that already know the regulatory band (for example from a customs
/// declaration form) can pass it directly; callers with a registration date
/// pass whole years and the engine maps them to a band.
///
/// # Examples
///
/// ```
/// use tariff_engine::models::{AgeBand, VehicleAge};
///
/// assert_eq!(VehicleAge::Years(2).band().unwrap(), AgeBand::UnderThree);
/// assert_eq!(VehicleAge::Years(3).band().unwrap(), AgeBand::ThreeToFive);
/// assert_eq!(VehicleAge::Band(AgeBand::SevenPlus).band().unwrap(), AgeBand::SevenPlus);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleAge {
    /// Whole years since first registration.
    Years(i32),
    /// An explicit regulatory age band.
    Band(AgeBand),
}

impl VehicleAge {
    /// Resolves the declared age to its regulatory band.
    ///
    /// # Errors
    ///
    /// Returns [`TariffError::InvalidVehicleAge`] if the age is a negative
    /// number of years.
    pub fn band(&self) -> TariffResult<AgeBand> {
        match *self {
            VehicleAge::Band(band) => Ok(band),
            VehicleAge::Years(years) if years < 0 => {
                Err(TariffError::InvalidVehicleAge { years })
            }
            VehicleAge::Years(years) if years < 3 => Ok(AgeBand::UnderThree),
            VehicleAge::Years(years) if years < 5 => Ok(AgeBand::ThreeToFive),
            VehicleAge::Years(years) if years < 7 => Ok(AgeBand::FiveToSeven),
            VehicleAge::Years(_) => Ok(AgeBand::SevenPlus),
        }
    }

    /// Returns true if the age is declared as a negative number of years.
    pub fn is_negative(&self) -> bool {
        matches!(*self, VehicleAge::Years(years) if years < 0)
    }
}

/// The complete set of declared facts a calculation consumes.
///
/// Constructed fresh per calculation and never mutated. The engine does not
/// infer any of these values; classification (engine type, owner category,
/// age) is the caller's responsibility.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
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
/// assert_eq!(facts.engine_capacity_cc, 4500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleFacts {
    /// The category of the importing owner.
    pub owner_type: VehicleOwnerType,
    /// The engine type.
    pub engine_type: EngineType,
    /// Engine power in the declared unit. Must be positive.
    pub engine_power: i32,
    /// The unit `engine_power` is declared in.
    pub engine_power_unit: EnginePowerUnit,
    /// Engine capacity in cubic centimetres. Positive for combustion
    /// engines, exactly zero for electric vehicles.
    pub engine_capacity_cc: i32,
    /// The declared vehicle age.
    pub vehicle_age: VehicleAge,
    /// Declared vehicle price in RUB. Must be positive.
    pub price_rub: Decimal,
    /// The RUB-per-EUR exchange rate used for customs duty conversion.
    /// Must be positive; it is an input, never fetched.
    pub euro_exchange_rate: Decimal,
    /// Whether the vehicle is imported as a commercial vehicle. Selects the
    /// higher recycling fee base rate.
    #[serde(default)]
    pub is_commercial_vehicle: bool,
}
