// src/sequence/sum_list.rs

use num::{BigInt, Zero};
use log::trace;

/// Left fold with `+` seeded at 0: ((0 + x1) + x2) + … + xn.
pub fn sum_list(xs: &[BigInt]) -> BigInt {
    trace!("sum_list over {} elements", xs.len());
    xs.iter().fold(BigInt::zero(), |acc, x| acc + x)
}

pub fn main() -> BigInt {
    let xs: Vec<BigInt> = (1..=5).map(BigInt::from).collect();
    sum_list(&xs)
}
