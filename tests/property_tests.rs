// tests/property_tests.rs
//
// Algebraic laws checked over generated inputs.

use num::{BigInt, Integer};
use proptest::prelude::*;
use algos::integer_math::{factorial, gcd, power};
use algos::sequence::{filter_even, is_even, sum_list};
use algos::text::{is_palindrome, reverse};

fn bigints(values: &[i64]) -> Vec<BigInt> {
    values.iter().copied().map(BigInt::from).collect()
}

proptest! {
    #[test]
    fn factorial_recurrence(n in 1u32..150) {
        let n = BigInt::from(n);
        let previous = factorial(&(&n - 1)).unwrap();
        prop_assert_eq!(factorial(&n).unwrap(), &n * previous);
    }

    #[test]
    fn factorial_rejects_negative(n in i64::MIN..0) {
        prop_assert!(factorial(&BigInt::from(n)).is_err());
    }

    #[test]
    fn gcd_with_zero(a in any::<i64>()) {
        let a = BigInt::from(a);
        prop_assert_eq!(gcd(&a, &BigInt::from(0)), a);
    }

    #[test]
    fn gcd_reduction_step(a in 0i64..1_000_000, b in 1i64..1_000_000) {
        let (a, b) = (BigInt::from(a), BigInt::from(b));
        prop_assert_eq!(gcd(&a, &b), gcd(&b, &a.mod_floor(&b)));
    }

    #[test]
    fn gcd_divides_both(a in 0i64..1_000_000, b in 1i64..1_000_000) {
        let (a, b) = (BigInt::from(a), BigInt::from(b));
        let g = gcd(&a, &b);
        prop_assert!(a.is_multiple_of(&g));
        prop_assert!(b.is_multiple_of(&g));
    }

    #[test]
    fn power_zero_exponent(base in any::<i64>()) {
        prop_assert_eq!(power(&BigInt::from(base), &BigInt::from(0)).unwrap(), BigInt::from(1));
    }

    #[test]
    fn power_recurrence(base in -50i64..50, exp in 1u32..64) {
        let base = BigInt::from(base);
        let exp = BigInt::from(exp);
        let previous = power(&base, &(&exp - 1)).unwrap();
        prop_assert_eq!(power(&base, &exp).unwrap(), &base * previous);
    }

    #[test]
    fn filter_even_keeps_even_in_order(xs in prop::collection::vec(any::<i64>(), 0..64)) {
        let filtered = filter_even(&bigints(&xs));
        let expected: Vec<i64> = xs.iter().copied().filter(|x| x % 2 == 0).collect();
        prop_assert!(filtered.iter().all(is_even));
        prop_assert_eq!(filtered, bigints(&expected));
    }

    #[test]
    fn filter_even_idempotent(xs in prop::collection::vec(any::<i64>(), 0..64)) {
        let once = filter_even(&bigints(&xs));
        prop_assert_eq!(filter_even(&once), once);
    }

    #[test]
    fn sum_list_order_independent(xs in prop::collection::vec(any::<i64>(), 0..64)) {
        let forward = bigints(&xs);
        let mut backward = forward.clone();
        backward.reverse();
        let expected: i128 = xs.iter().map(|&x| x as i128).sum();
        prop_assert_eq!(sum_list(&forward), sum_list(&backward));
        prop_assert_eq!(sum_list(&forward), BigInt::from(expected));
    }

    #[test]
    fn reverse_round_trip(s in ".*") {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }

    #[test]
    fn palindrome_reversal_invariant(s in ".*") {
        prop_assert_eq!(is_palindrome(&reverse(&s)), is_palindrome(&s));
    }

    #[test]
    fn mirrored_strings_are_palindromes(s in "[a-zA-Z0-9 ]{0,32}") {
        let mirrored = format!("{}{}", s, reverse(&s));
        prop_assert!(is_palindrome(&mirrored));
    }
}
