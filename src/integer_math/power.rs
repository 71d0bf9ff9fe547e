// src/integer_math/power.rs

use num::{BigInt, Signed, ToPrimitive};
use log::{debug, trace};
use crate::error::AlgoError;

/// base^exp for exp ≥ 0, with power(base, 0) = 1 (including 0^0).
///
/// Uses square-and-multiply; the result is the same value as multiplying
/// `base` by itself `exp` times.
///
/// # Errors
/// `AlgoError::InvalidArgument` when `exp` is negative or larger than `usize`.
pub fn power(base: &BigInt, exp: &BigInt) -> Result<BigInt, AlgoError> {
    if exp.is_negative() {
        debug!("Rejecting negative exponent {}", exp);
        return Err(AlgoError::invalid_argument(
            "exp",
            format!("must be non-negative, got {}", exp),
        ));
    }

    let exp = exp.to_usize().ok_or_else(|| {
        AlgoError::invalid_argument("exp", format!("{} does not fit in usize", exp))
    })?;

    trace!("power({}, {})", base, exp);
    Ok(num::pow(base.clone(), exp))
}

pub fn main() -> Result<BigInt, AlgoError> {
    power(&BigInt::from(2), &BigInt::from(10))
}
