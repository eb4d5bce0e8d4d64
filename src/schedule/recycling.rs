//! Recycling fee coefficient schedule.
//!
//! The environmental disposal levy is a base rate multiplied by a
//! coefficient keyed on owner class, engine type, capacity tier, and age
//! band (split at the 3-year boundary). Personal-use importers of small
//! non-electric vehicles pay a flat age-banded fee instead.
//!
//! Coefficients are stored scaled by 1000 to keep the tables in integers.

use rust_decimal::Decimal;

use crate::models::{AgeBand, EngineType, VehicleOwnerType};

/// Capacity threshold (cc) below which personal-use imports of combustion
/// vehicles take the flat fee path.
pub const CAPACITY_EXEMPTION_CC: i32 = 3_000;

/// Recycling fee base rate for non-commercial vehicles, RUB.
const BASE_RATE_RUB: i64 = 20_000;

/// Recycling fee base rate for commercial vehicles, RUB.
const BASE_RATE_COMMERCIAL_RUB: i64 = 150_000;

/// Flat personal-use fees, RUB: under 3 years / 3 years and older.
const PERSONAL_USE_FLAT_NEW_RUB: i64 = 3_400;
const PERSONAL_USE_FLAT_USED_RUB: i64 = 5_200;

/// A capacity-tier table: (inclusive upper capacity bound in cc,
/// coefficient scaled by 1000), plus a fallback for larger engines.
type CoefficientTiers = &'static [(i64, i64)];

// Individual (resale) owners.
const INDIVIDUAL_ELECTRIC: (i64, i64) = (1_630, 6_100); // under 3 / 3 and older
const INDIVIDUAL_NEW: CoefficientTiers = &[(1_000, 4_060), (2_000, 15_300), (3_000, 42_240), (3_500, 48_500)];
const INDIVIDUAL_NEW_TOP: i64 = 61_760;
const INDIVIDUAL_USED: CoefficientTiers = &[(1_000, 10_360), (2_000, 26_440), (3_000, 63_950), (3_500, 74_250)];
const INDIVIDUAL_USED_TOP: i64 = 81_190;

// Company owners. Differs from the resale table in a single tier
// (15.03 vs 15.3 for 1000-2000 cc under 3 years).
const COMPANY_ELECTRIC: (i64, i64) = (1_630, 6_100);
const COMPANY_NEW: CoefficientTiers = &[(1_000, 4_060), (2_000, 15_030), (3_000, 42_240), (3_500, 48_500)];
const COMPANY_NEW_TOP: i64 = 61_760;
const COMPANY_USED: CoefficientTiers = &[(1_000, 10_360), (2_000, 26_440), (3_000, 63_950), (3_500, 74_250)];
const COMPANY_USED_TOP: i64 = 81_190;

// Personal-use owners: small engines and electric vehicles share the
// reduced coefficient tier.
const PERSONAL_USE_NEW: CoefficientTiers = &[(3_000, 170), (3_500, 48_500)];
const PERSONAL_USE_NEW_TOP: i64 = 61_760;
const PERSONAL_USE_USED: CoefficientTiers = &[(3_000, 260), (3_500, 74_275)];
const PERSONAL_USE_USED_TOP: i64 = 81_190;

fn milli(scaled: i64) -> Decimal {
    Decimal::new(scaled, 3)
}

fn scan(tiers: CoefficientTiers, top: i64, capacity_cc: i64) -> Decimal {
    for &(bound, coefficient) in tiers {
        if capacity_cc <= bound {
            return milli(coefficient);
        }
    }
    milli(top)
}

/// Returns the recycling fee base rate in RUB.
pub fn recycling_base_rate(is_commercial: bool) -> Decimal {
    if is_commercial {
        Decimal::from(BASE_RATE_COMMERCIAL_RUB)
    } else {
        Decimal::from(BASE_RATE_RUB)
    }
}

/// Returns the flat age-banded recycling fee for personal-use imports of
/// combustion vehicles below [`CAPACITY_EXEMPTION_CC`].
pub fn personal_use_flat_fee(band: AgeBand) -> Decimal {
    if band == AgeBand::UnderThree {
        Decimal::from(PERSONAL_USE_FLAT_NEW_RUB)
    } else {
        Decimal::from(PERSONAL_USE_FLAT_USED_RUB)
    }
}

/// Looks up the recycling fee coefficient.
///
/// The table splits by owner class, then at the 3-year age boundary, then
/// by capacity tier, with an electric override in each half.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tariff_engine::models::{AgeBand, EngineType, VehicleOwnerType};
/// use tariff_engine::schedule::recycling_coefficient;
///
/// let coefficient = recycling_coefficient(
///     VehicleOwnerType::Company,
///     EngineType::Diesel,
///     4500,
///     AgeBand::UnderThree,
/// );
/// assert_eq!(coefficient, Decimal::from_str("61.76").unwrap());
/// ```
pub fn recycling_coefficient(
    owner: VehicleOwnerType,
    engine: EngineType,
    capacity_cc: i32,
    band: AgeBand,
) -> Decimal {
    let newer = band == AgeBand::UnderThree;
    let capacity = i64::from(capacity_cc);

    match owner {
        VehicleOwnerType::Individual => {
            if engine == EngineType::Electric {
                let (new, used) = INDIVIDUAL_ELECTRIC;
                return milli(if newer { new } else { used });
            }
            if newer {
                scan(INDIVIDUAL_NEW, INDIVIDUAL_NEW_TOP, capacity)
            } else {
                scan(INDIVIDUAL_USED, INDIVIDUAL_USED_TOP, capacity)
            }
        }
        VehicleOwnerType::Company => {
            if engine == EngineType::Electric {
                let (new, used) = COMPANY_ELECTRIC;
                return milli(if newer { new } else { used });
            }
            if newer {
                scan(COMPANY_NEW, COMPANY_NEW_TOP, capacity)
            } else {
                scan(COMPANY_USED, COMPANY_USED_TOP, capacity)
            }
        }
        VehicleOwnerType::IndividualPersonalUse => {
            // Electric vehicles share the smallest-capacity tier.
            let tiers_capacity = if engine == EngineType::Electric { 0 } else { capacity };
            if newer {
                scan(PERSONAL_USE_NEW, PERSONAL_USE_NEW_TOP, tiers_capacity)
            } else {
                scan(PERSONAL_USE_USED, PERSONAL_USE_USED_TOP, tiers_capacity)
            }
        }
    }
}
