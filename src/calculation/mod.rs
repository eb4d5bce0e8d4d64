//! Calculation logic for the Tariff Rule Engine.
//!
//! This module contains the five fee calculators (clearance tax, excise
//! duty, recycling fee, customs duty, VAT), the input validator, and the
//! aggregator that composes the components into the payable total under
//! the owner-type inclusion rules.

mod aggregate;
mod clearance_tax;
mod customs_duty;
mod excise_duty;
mod recycling_fee;
mod validate;
mod vat;

pub use aggregate::calculate;
pub use clearance_tax::clearance_tax;
pub use customs_duty::customs_duty;
pub use excise_duty::excise_duty;
pub use recycling_fee::recycling_fee;
pub use validate::validate;
pub use vat::vat;
