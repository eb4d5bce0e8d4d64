//! Excise duty rate schedule.
//!
//! A per-horsepower rate bracketed by engine power. Power declared in
//! kilowatts is converted to horsepower before the lookup; the conversion
//! factor lives here because it is part of the regulatory schedule.

use rust_decimal::Decimal;

/// Ascending power ladder: (inclusive upper horsepower bound, rate in RUB
/// per horsepower). The first row whose bound covers the power wins.
const EXCISE_LADDER: [(i64, i64); 6] = [
    (90, 0),
    (150, 58),
    (200, 557),
    (300, 912),
    (400, 1_555),
    (500, 1_609),
];

/// Rate for engines above the last ladder bound.
const EXCISE_TOP_RATE: i64 = 1_662;

/// Looks up the excise rate in RUB per horsepower.
///
/// Engines of 90 horsepower or less are rated at zero. The ladder is
/// non-decreasing in power.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_engine::schedule::excise_rate;
///
/// assert_eq!(excise_rate(90), Decimal::ZERO);
/// assert_eq!(excise_rate(320), Decimal::from(1_555));
/// ```
pub fn excise_rate(horsepower: i64) -> Decimal {
    for (bound, rate) in EXCISE_LADDER {
        if horsepower <= bound {
            return Decimal::from(rate);
        }
    }
    Decimal::from(EXCISE_TOP_RATE)
}

/// Returns the kilowatt-to-horsepower conversion factor (1.3596).
///
/// Kilowatt figures are multiplied by this factor and rounded *up* to the
/// next whole horsepower before the bracket lookup.
pub fn kilowatt_to_horsepower_factor() -> Decimal {
    Decimal::new(13_596, 4)
}
