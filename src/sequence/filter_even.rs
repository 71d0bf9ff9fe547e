// src/sequence/filter_even.rs

use num::{BigInt, Integer};
use log::trace;

/// x mod 2 == 0. Holds for zero and for negative even numbers.
pub fn is_even(x: &BigInt) -> bool {
    x.is_even()
}

/// The even elements of `xs`, in their original order.
pub fn filter_even(xs: &[BigInt]) -> Vec<BigInt> {
    trace!("filter_even over {} elements", xs.len());
    xs.iter().filter(|x| is_even(x)).cloned().collect()
}

pub fn main() -> Vec<BigInt> {
    let xs: Vec<BigInt> = (1..=6).map(BigInt::from).collect();
    filter_even(&xs)
}
