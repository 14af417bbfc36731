//! MSISDN and amount normalization

use rust_decimal::{Decimal, RoundingStrategy};

/// Normalize a mobile number to the provider's digit-only form.
///
/// Strips every non-digit character. A leading `0` is treated as the
/// national trunk prefix: all leading zeros are stripped and the given
/// country calling code is prepended. Already-prefixed numbers pass
/// through unchanged, so normalization is idempotent.
pub fn normalize_msisdn(msisdn: &str, country_code: &str) -> String {
    let digits: String = msisdn.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.starts_with('0') {
        format!("{}{}", country_code, digits.trim_start_matches('0'))
    } else {
        digits
    }
}

/// Round an amount to exactly two decimal places.
///
/// Uses round-half-away-from-zero (round-half-up for positive amounts),
/// then rescales so whole numbers carry two fractional digits; the
/// serialized form is always e.g. `10.00` or `10.10` with no
/// floating-point noise.
pub fn normalize_amount(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
