// src/integer_math/gcd.rs

use num::{BigInt, Integer, Zero};
use log::trace;

/// Euclidean algorithm: gcd(a, 0) = a, otherwise gcd(b, a mod b).
///
/// The modulo is floored, so a remainder takes the sign of the divisor.
/// For non-negative operands this is the ordinary greatest common divisor;
/// negative operands follow the same reduction, e.g. gcd(-4, 6) = 2 and
/// gcd(4, -6) = -2.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    trace!("gcd({}, {})", a, b);

    let mut left = a.clone();
    let mut right = b.clone();
    while !right.is_zero() {
        let remainder = left.mod_floor(&right);
        left = std::mem::replace(&mut right, remainder);
    }
    left
}

pub fn main() -> BigInt {
    gcd(&BigInt::from(48), &BigInt::from(18))
}
