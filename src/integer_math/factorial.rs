// src/integer_math/factorial.rs

use num::{BigInt, One, Signed};
use log::{debug, trace};
use crate::error::AlgoError;

/// n! for n ≥ 0, with 0! = 1! = 1.
///
/// Computed as the running product 2 · 3 · … · n, which yields exactly the
/// value of the recursive definition `n · factorial(n - 1)` without growing
/// the stack.
///
/// # Errors
/// `AlgoError::InvalidArgument` when `n` is negative.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use algos::integer_math::factorial;
///
/// assert_eq!(factorial(&BigInt::from(5)).unwrap(), BigInt::from(120));
/// ```
pub fn factorial(n: &BigInt) -> Result<BigInt, AlgoError> {
    if n.is_negative() {
        debug!("Rejecting factorial of negative argument {}", n);
        return Err(AlgoError::invalid_argument(
            "n",
            format!("must be non-negative, got {}", n),
        ));
    }

    trace!("factorial({})", n);

    let mut result = BigInt::one();
    let mut k = BigInt::from(2);
    while &k <= n {
        result *= &k;
        k += 1;
    }
    Ok(result)
}

pub fn main() -> Result<BigInt, AlgoError> {
    factorial(&BigInt::from(5))
}
