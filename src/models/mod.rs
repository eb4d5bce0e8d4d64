//! Core data models for the Tariff Rule Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod money;
mod vehicle;

pub use calculation_result::CalculationResult;
pub use money::{Currency, Money};
pub use vehicle::{
    AgeBand, EnginePowerUnit, EngineType, VehicleAge, VehicleFacts, VehicleOwnerType,
};
