//! Normalizers turning raw feed tokens into integers.
//!
//! The dealer feed encodes two business rules as shorthand quantity
//! tokens: `">10"` means "plenty in stock" and `"1"` means "only one
//! left, treat as unavailable". Prices come in a display format with
//! thousands separators, a decimal tail, and a currency label.

use crate::{Result, RestockError};

/// Quantity pushed for the `">10"` shorthand.
const PLENTY: u32 = 100;

/// Maps a raw quantity token to the count to push.
///
/// Policy, in order: `">10"` → 100; `"1"` → 0 (a single remaining unit
/// is sold as unavailable); anything else is taken as a literal count.
///
/// # Errors
///
/// Returns [`RestockError::Format`] if the fallback parse is not a
/// valid non-negative base-10 integer.
pub fn normalize_quantity(raw: &str) -> Result<u32> {
    match raw {
        ">10" => Ok(PLENTY),
        "1" => Ok(0),
        other => other
            .parse::<u32>()
            .map_err(|_| RestockError::Format(format!("invalid quantity token: {other:?}"))),
    }
}

/// Maps a raw price token to whole rubles.
///
/// Truncates at the first `.` (dropping the decimal tail and any
/// trailing currency label), strips every non-digit character, then
/// parses what remains. `"5'990.00 руб."` → `5990`.
///
/// # Errors
///
/// Returns [`RestockError::Format`] if no digits remain after
/// stripping.
pub fn normalize_price(raw: &str) -> Result<u64> {
    let truncated = raw.split('.').next().unwrap_or_default();
    let digits: String = truncated.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<u64>()
        .map_err(|_| RestockError::Format(format!("invalid price token: {raw:?}")))
}
