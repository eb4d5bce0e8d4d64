//! Calculation result model for the Tariff Rule Engine.
//!
//! This module contains the [`CalculationResult`] type that captures the
//! per-component fee breakdown and the payable total.

use serde::{Deserialize, Serialize};

use super::Money;

/// The fee breakdown produced by a successful calculation.
///
/// Component amounts are rounded to 2 decimal places for presentation. The
/// total is computed from the full-precision components before rounding, so
/// it is authoritative: the displayed components may differ from the total
/// by a fraction of a kopeck in aggregate.
///
/// Excise duty and VAT are `None` when the owner is exempt (private
/// importers of non-electric vehicles). They are legally not owed for that
/// branch, which is distinct from a zero-valued line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The customs duty component, in RUB.
    pub customs_duty: Money,
    /// The recycling fee component, in RUB.
    pub recycling_fee: Money,
    /// The customs clearance tax component, in RUB.
    pub clearance_tax: Money,
    /// The excise duty component, in RUB. `None` for exempt owners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excise_duty: Option<Money>,
    /// The VAT component, in RUB. `None` for exempt owners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<Money>,
    /// The payable total, in RUB, rounded to 2 decimal places.
    pub total: Money,
}
