//! Customs clearance tax schedule.
//!
//! A flat processing fee bracketed by the declared vehicle price. The
//! ladder has eleven rows; the last row is the open-ended ceiling.

use rust_decimal::Decimal;

/// Ascending price ladder: (exclusive upper price bound in RUB, flat fee in
/// RUB). The first row whose bound exceeds the price wins.
const CLEARANCE_LADDER: [(i64, i64); 10] = [
    (200_000, 775),
    (450_000, 1_550),
    (1_200_000, 3_100),
    (2_700_000, 8_530),
    (4_200_000, 12_000),
    (5_500_000, 15_500),
    (7_000_000, 20_000),
    (8_000_000, 23_000),
    (9_000_000, 25_000),
    (10_000_000, 27_000),
];

/// Flat fee for prices at or above the last ladder bound.
const CLEARANCE_CEILING: i64 = 30_000;

/// Looks up the customs clearance tax for a declared price in RUB.
///
/// The ladder is non-decreasing in price. Brackets are already whole-rouble
/// amounts, so no rounding is involved.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_engine::schedule::clearance_tax_bracket;
///
/// assert_eq!(clearance_tax_bracket(Decimal::from(1_310_000)), Decimal::from(8_530));
/// ```
pub fn clearance_tax_bracket(price_rub: Decimal) -> Decimal {
    for (bound, fee) in CLEARANCE_LADDER {
        if price_rub < Decimal::from(bound) {
            return Decimal::from(fee);
        }
    }
    Decimal::from(CLEARANCE_CEILING)
}
