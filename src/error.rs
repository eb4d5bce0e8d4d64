//! Error types for the Tariff Rule Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all input-validation failures that can occur during a calculation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::EngineType;

/// The main error type for the Tariff Rule Engine.
///
/// Every failure is a caller-input problem detected before any partial total
/// is produced. The variant names the violated field and carries the
/// offending value, so the caller can correct the request.
///
/// # Example
///
/// ```
/// use tariff_engine::error::TariffError;
///
/// let error = TariffError::InvalidEnginePower { power: 0 };
/// assert_eq!(error.to_string(), "engine power must be positive, got 0");
/// ```
#[derive(Debug, Error)]
pub enum TariffError {
    /// Engine power was zero or negative.
    #[error("engine power must be positive, got {power}")]
    InvalidEnginePower {
        /// The rejected power value.
        power: i32,
    },

    /// Engine capacity was inconsistent with the engine type.
    ///
    /// Non-electric vehicles must declare a positive capacity; electric
    /// vehicles must declare exactly zero.
    #[error("engine capacity {capacity_cc} cc is invalid for a {engine_type:?} engine")]
    InvalidEngineCapacity {
        /// The rejected capacity in cubic centimetres.
        capacity_cc: i32,
        /// The engine type the capacity was declared for.
        engine_type: EngineType,
    },

    /// Vehicle age was negative.
    #[error("vehicle age must be non-negative, got {years} years")]
    InvalidVehicleAge {
        /// The rejected age in years.
        years: i32,
    },

    /// Vehicle price was zero or negative.
    #[error("vehicle price must be positive, got {price} RUB")]
    InvalidVehiclePrice {
        /// The rejected price in RUB.
        price: Decimal,
    },

    /// The euro exchange rate was unset, zero, or negative.
    #[error("euro exchange rate must be positive, got {rate}")]
    InvalidExchangeRate {
        /// The rejected exchange rate.
        rate: Decimal,
    },

    /// No customs duty formula exists for this engine type and a company
    /// owner.
    #[error("no company customs duty formula for a {engine_type:?} engine")]
    UnsupportedEngineType {
        /// The engine type without a formula.
        engine_type: EngineType,
    },
}

/// A type alias for Results that return TariffError.
pub type TariffResult<T> = Result<T, TariffError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_invalid_engine_power_displays_value() {
        let error = TariffError::InvalidEnginePower { power: -30 };
        assert_eq!(error.to_string(), "engine power must be positive, got -30");
    }

    #[test]
    fn test_invalid_engine_capacity_displays_value_and_engine_type() {
        let error = TariffError::InvalidEngineCapacity {
            capacity_cc: 0,
            engine_type: EngineType::Diesel,
        };
        assert_eq!(
            error.to_string(),
            "engine capacity 0 cc is invalid for a Diesel engine"
        );
    }

    #[test]
    fn test_invalid_vehicle_age_displays_years() {
        let error = TariffError::InvalidVehicleAge { years: -1 };
        assert_eq!(
            error.to_string(),
            "vehicle age must be non-negative, got -1 years"
        );
    }

    #[test]
    fn test_invalid_vehicle_price_displays_price() {
        let error = TariffError::InvalidVehiclePrice {
            price: Decimal::ZERO,
        };
        assert_eq!(error.to_string(), "vehicle price must be positive, got 0 RUB");
    }

    #[test]
    fn test_invalid_exchange_rate_displays_rate() {
        let error = TariffError::InvalidExchangeRate {
            rate: Decimal::from_str("-103.38").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "euro exchange rate must be positive, got -103.38"
        );
    }

    #[test]
    fn test_unsupported_engine_type_displays_engine_type() {
        let error = TariffError::UnsupportedEngineType {
            engine_type: EngineType::Hybrid,
        };
        assert_eq!(
            error.to_string(),
            "no company customs duty formula for a Hybrid engine"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TariffError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_power() -> TariffResult<()> {
            Err(TariffError::InvalidEnginePower { power: 0 })
        }

        fn propagates_error() -> TariffResult<()> {
            returns_invalid_power()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
