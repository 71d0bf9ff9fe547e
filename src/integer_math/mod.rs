// src/integer_math/mod.rs

pub mod factorial;
pub mod gcd;
pub mod power;

pub use factorial::factorial;
pub use gcd::gcd;
pub use power::power;
