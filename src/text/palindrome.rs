// src/text/palindrome.rs

use log::trace;

/// A new string holding the characters of `s` in reverse order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Exact, case-sensitive comparison of `s` against its reversal.
pub fn is_palindrome(s: &str) -> bool {
    trace!("is_palindrome({:?})", s);
    s == reverse(s)
}

pub fn main() -> bool {
    is_palindrome("racecar")
}
