// src/lib.rs

pub mod config;
pub mod error;
pub mod integer_math;
pub mod programs;
pub mod sequence;
pub mod text;

pub use error::AlgoError;
pub use programs::{Program, Value};
