// src/text/mod.rs

pub mod palindrome;

pub use palindrome::{is_palindrome, reverse};
