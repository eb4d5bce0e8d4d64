//! Tariff Rule Engine for vehicle import cost calculation.
//!
//! This crate computes the total government-mandated cost of importing a road
//! vehicle: customs duty, customs clearance tax, recycling fee, excise duty,
//! and VAT, from a handful of declared vehicle facts (price, engine type and
//! power, capacity, owner category, age).

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod schedule;
