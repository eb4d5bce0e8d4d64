//! Customs duty formula tables, EUR domain.
//!
//! The principal import tariff is piecewise: depending on owner class,
//! engine family, and age band it is a fraction of the EUR price, a per-cc
//! rate, or the maximum of both. All functions here take and return EUR
//! amounts; the calculator converts to and from RUB.
//!
//! Fractions are stored scaled by 1000 and per-cc rates by 100 to keep the
//! tables in integers.

use rust_decimal::Decimal;

use crate::error::{TariffError, TariffResult};
use crate::models::{AgeBand, EngineType};

/// Price-keyed max() table for individual imports under 3 years:
/// (exclusive upper price bound in EUR, price fraction x1000, per-cc rate
/// x100). Duty is max(price * fraction, capacity * rate).
const INDIVIDUAL_NEW: [(i64, i64, i64); 5] = [
    (8_500, 540, 250),
    (16_700, 480, 350),
    (42_300, 480, 550),
    (84_500, 480, 750),
    (169_000, 480, 1_500),
];

/// Fraction and per-cc rate above the last price bound.
const INDIVIDUAL_NEW_TOP: (i64, i64) = (480, 2_000);

/// Per-cc tables for individual imports: (inclusive upper capacity bound in
/// cc, rate x100), plus the rate for larger engines.
const INDIVIDUAL_3_TO_5: [(i64, i64); 5] =
    [(1_000, 150), (1_500, 170), (1_800, 250), (2_300, 270), (3_000, 300)];
const INDIVIDUAL_3_TO_5_TOP: i64 = 360;

const INDIVIDUAL_5_PLUS: [(i64, i64); 5] =
    [(1_000, 300), (1_500, 320), (1_800, 350), (2_300, 480), (3_000, 500)];
const INDIVIDUAL_5_PLUS_TOP: i64 = 570;

/// Company gasoline/hybrid, under 3 years: price fraction by capacity split.
const COMPANY_GASOLINE_NEW_SMALL_FRACTION: i64 = 150; // <= 3000 cc
const COMPANY_GASOLINE_NEW_LARGE_FRACTION: i64 = 125;
const COMPANY_GASOLINE_NEW_CAPACITY_SPLIT_CC: i64 = 3_000;

/// Company gasoline/hybrid, 3-7 years: max(price * 0.2, capacity * rate).
const COMPANY_GASOLINE_MID: [(i64, i64); 4] = [(1_000, 36), (1_500, 40), (1_800, 36), (3_000, 44)];
const COMPANY_GASOLINE_MID_TOP: i64 = 80;

/// Company gasoline/hybrid, 7 years and older: capacity * rate.
const COMPANY_GASOLINE_OLD: [(i64, i64); 4] =
    [(1_000, 140), (1_500, 150), (1_800, 160), (3_000, 220)];
const COMPANY_GASOLINE_OLD_TOP: i64 = 320;

/// Company diesel, under 3 years: flat price fraction.
const COMPANY_DIESEL_NEW_FRACTION: i64 = 150;

/// Company diesel, 3-7 years: max(price * 0.2, capacity * rate).
const COMPANY_DIESEL_MID: [(i64, i64); 2] = [(1_500, 32), (2_500, 40)];
const COMPANY_DIESEL_MID_TOP: i64 = 80;

/// Company diesel, 7 years and older: capacity * rate.
const COMPANY_DIESEL_OLD: [(i64, i64); 2] = [(1_500, 150), (2_500, 220)];
const COMPANY_DIESEL_OLD_TOP: i64 = 320;

/// Price fraction for the company mid-age max() formulas.
const COMPANY_MID_PRICE_FRACTION: i64 = 200;

fn fraction(scaled: i64) -> Decimal {
    Decimal::new(scaled, 3)
}

fn per_cc_rate(scaled: i64) -> Decimal {
    Decimal::new(scaled, 2)
}

fn per_cc_duty(tiers: &[(i64, i64)], top: i64, capacity_cc: i64) -> Decimal {
    let capacity = Decimal::from(capacity_cc);
    for &(bound, rate) in tiers {
        if capacity_cc <= bound {
            return capacity * per_cc_rate(rate);
        }
    }
    capacity * per_cc_rate(top)
}

fn mid_age_duty(tiers: &[(i64, i64)], top: i64, capacity_cc: i64, price_eur: Decimal) -> Decimal {
    let by_price = price_eur * fraction(COMPANY_MID_PRICE_FRACTION);
    per_cc_duty(tiers, top, capacity_cc).max(by_price)
}

/// Returns the fraction of the RUB price owed as duty for electric
/// vehicles (15%), regardless of owner class or age.
pub fn electric_duty_fraction() -> Decimal {
    Decimal::new(15, 2)
}

/// Evaluates the customs duty formula for individual owners (both resale
/// and personal use), non-electric engines. Takes and returns EUR.
///
/// Under 3 years the duty is the larger of a price fraction and a per-cc
/// amount, keyed by the EUR price bracket; older vehicles use per-cc
/// tables only (one for 3-5 years, one shared by both bands from 5 years).
pub fn individual_duty_eur(band: AgeBand, capacity_cc: i64, price_eur: Decimal) -> Decimal {
    match band {
        AgeBand::UnderThree => {
            for (bound, price_fraction, cc_rate) in INDIVIDUAL_NEW {
                if price_eur < Decimal::from(bound) {
                    return (price_eur * fraction(price_fraction))
                        .max(Decimal::from(capacity_cc) * per_cc_rate(cc_rate));
                }
            }
            let (price_fraction, cc_rate) = INDIVIDUAL_NEW_TOP;
            (price_eur * fraction(price_fraction))
                .max(Decimal::from(capacity_cc) * per_cc_rate(cc_rate))
        }
        AgeBand::ThreeToFive => per_cc_duty(&INDIVIDUAL_3_TO_5, INDIVIDUAL_3_TO_5_TOP, capacity_cc),
        AgeBand::FiveToSeven | AgeBand::SevenPlus => {
            per_cc_duty(&INDIVIDUAL_5_PLUS, INDIVIDUAL_5_PLUS_TOP, capacity_cc)
        }
    }
}

/// Evaluates the customs duty formula for company owners, non-electric
/// engines. Takes and returns EUR.
///
/// # Errors
///
/// Returns [`TariffError::UnsupportedEngineType`] for engine types without
/// a company formula family. Adding a formula for a new engine category is
/// a table edit here, not a change to the calculators.
pub fn company_duty_eur(
    engine: EngineType,
    band: AgeBand,
    capacity_cc: i64,
    price_eur: Decimal,
) -> TariffResult<Decimal> {
    match engine {
        EngineType::Gasoline | EngineType::Hybrid => Ok(match band {
            AgeBand::UnderThree => {
                let price_fraction = if capacity_cc <= COMPANY_GASOLINE_NEW_CAPACITY_SPLIT_CC {
                    COMPANY_GASOLINE_NEW_SMALL_FRACTION
                } else {
                    COMPANY_GASOLINE_NEW_LARGE_FRACTION
                };
                price_eur * fraction(price_fraction)
            }
            AgeBand::ThreeToFive | AgeBand::FiveToSeven => {
                mid_age_duty(&COMPANY_GASOLINE_MID, COMPANY_GASOLINE_MID_TOP, capacity_cc, price_eur)
            }
            AgeBand::SevenPlus => {
                per_cc_duty(&COMPANY_GASOLINE_OLD, COMPANY_GASOLINE_OLD_TOP, capacity_cc)
            }
        }),
        EngineType::Diesel => Ok(match band {
            AgeBand::UnderThree => price_eur * fraction(COMPANY_DIESEL_NEW_FRACTION),
            AgeBand::ThreeToFive | AgeBand::FiveToSeven => {
                mid_age_duty(&COMPANY_DIESEL_MID, COMPANY_DIESEL_MID_TOP, capacity_cc, price_eur)
            }
            AgeBand::SevenPlus => {
                per_cc_duty(&COMPANY_DIESEL_OLD, COMPANY_DIESEL_OLD_TOP, capacity_cc)
            }
        }),
        // Electric vehicles bypass the EUR tables entirely; reaching this
        // point with any other engine type means the schedule has no
        // formula for it.
        EngineType::Electric => Err(TariffError::UnsupportedEngineType { engine_type: engine }),
    }
}
