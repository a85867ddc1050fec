//! Bit-width arithmetic.
//!
//! Every derived `*_log` parameter goes through [`ceil_log2`]; every size that
//! must be a power of two, every exact division, and every width carved out of
//! an address goes through one of the checks below so the failure names the
//! parameter that caused it.

use super::error::Violation;

/// Returns `ceil(log2(x))`, with `ceil_log2(0) == ceil_log2(1) == 0`.
///
/// # Examples
///
/// ```
/// use anycore_params::common::ceil_log2;
///
/// assert_eq!(ceil_log2(192), 8);
/// assert_eq!(ceil_log2(256), 8);
/// assert_eq!(ceil_log2(257), 9);
/// ```
pub const fn ceil_log2(x: u64) -> u64 {
    if x <= 1 {
        0
    } else {
        (u64::BITS - (x - 1).leading_zeros()) as u64
    }
}

/// Mask with the low `bits` bits set.
pub const fn low_mask(bits: u64) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Rejects values below `min`.
pub const fn at_least(name: &'static str, value: u64, min: u64) -> Result<u64, Violation> {
    if value < min {
        Err(Violation::TooSmall { name, value, min })
    } else {
        Ok(value)
    }
}

/// Rejects zero.
pub const fn positive(name: &'static str, value: u64) -> Result<u64, Violation> {
    at_least(name, value, 1)
}

/// Rejects values above `max`.
pub const fn at_most(name: &'static str, value: u64, max: u64) -> Result<u64, Violation> {
    if value > max {
        Err(Violation::TooLarge { name, value, max })
    } else {
        Ok(value)
    }
}

/// Rejects anything that is not a power of two (zero included).
pub const fn power_of_two(name: &'static str, value: u64) -> Result<u64, Violation> {
    if value.is_power_of_two() {
        Ok(value)
    } else {
        Err(Violation::NotPowerOfTwo { name, value })
    }
}

/// Divides `value` by `divisor`, failing on a zero divisor or a remainder.
pub const fn exact_div(
    name: &'static str,
    value: u64,
    divisor_name: &'static str,
    divisor: u64,
) -> Result<u64, Violation> {
    if divisor == 0 || value % divisor != 0 {
        Err(Violation::NotDivisible {
            name,
            value,
            divisor_name,
            divisor,
        })
    } else {
        Ok(value / divisor)
    }
}

/// Computes `value << shift` without wrapping.
pub const fn shl(name: &'static str, value: u64, shift: u64) -> Result<u64, Violation> {
    if shift >= 64 || value.leading_zeros() < shift as u32 {
        Err(Violation::Overflow { name })
    } else {
        Ok(value << shift)
    }
}

/// Computes `a * b` without wrapping.
pub const fn mul(name: &'static str, a: u64, b: u64) -> Result<u64, Violation> {
    match a.checked_mul(b) {
        Some(v) => Ok(v),
        None => Err(Violation::Overflow { name }),
    }
}

/// Computes `a + b` without wrapping.
pub const fn add(name: &'static str, a: u64, b: u64) -> Result<u64, Violation> {
    match a.checked_add(b) {
        Some(v) => Ok(v),
        None => Err(Violation::Overflow { name }),
    }
}

/// Returns the bits left in `total` after `used`, which must be positive.
pub const fn remaining_width(name: &'static str, total: u64, used: u64) -> Result<u64, Violation> {
    if used >= total {
        Err(Violation::NonPositiveWidth { name, total, used })
    } else {
        Ok(total - used)
    }
}
