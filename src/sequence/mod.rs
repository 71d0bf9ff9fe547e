// src/sequence/mod.rs

pub mod filter_even;
pub mod sum_list;

pub use filter_even::{filter_even, is_even};
pub use sum_list::sum_list;
