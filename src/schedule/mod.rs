//! The tariff schedule: every regulatory bracket and coefficient as data.
//!
//! Each fee's numeric schedule lives here as an ordered table (ascending
//! bound, first match wins) so it can be audited and replaced without
//! touching the calculators. The schedule is pure and stateless; one
//! schedule version is active at a time. The tables in this revision are
//! the schedule effective 2023-08-01.

mod clearance;
mod customs;
mod excise;
mod recycling;

pub use clearance::clearance_tax_bracket;
pub use customs::{company_duty_eur, electric_duty_fraction, individual_duty_eur};
pub use excise::{excise_rate, kilowatt_to_horsepower_factor};
pub use recycling::{
    personal_use_flat_fee, recycling_base_rate, recycling_coefficient, CAPACITY_EXEMPTION_CC,
};

use rust_decimal::Decimal;

/// Returns the base VAT rate (20%).
pub fn vat_rate() -> Decimal {
    Decimal::new(2, 1)
}
