// src/programs.rs
//
// Program registry: one entry per algorithm, each backed by the `main`
// of its module.
//
// Program          Module                       Result
// ─────────────────────────────────────────────────────────
// factorial        integer_math::factorial      120
// gcd              integer_math::gcd            6
// power            integer_math::power          1024
// filter-even      sequence::filter_even        [2, 4, 6]
// sum-list         sequence::sum_list           15
// is-palindrome    text::palindrome             true

use std::fmt;
use num::BigInt;
use log::debug;

use crate::error::AlgoError;
use crate::integer_math::{factorial, gcd, power};
use crate::sequence::{filter_even, sum_list};
use crate::text::palindrome;

/// The value a program's `main` returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(BigInt),
    Boolean(bool),
    Sequence(Vec<BigInt>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Sequence(xs) => {
                write!(f, "[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", x)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Enumeration of the available programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Factorial,
    Gcd,
    Power,
    FilterEven,
    SumList,
    IsPalindrome,
}

impl Program {
    pub const ALL: [Program; 6] = [
        Program::Factorial,
        Program::Gcd,
        Program::Power,
        Program::FilterEven,
        Program::SumList,
        Program::IsPalindrome,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Factorial => "factorial",
            Self::Gcd => "gcd",
            Self::Power => "power",
            Self::FilterEven => "filter-even",
            Self::SumList => "sum-list",
            Self::IsPalindrome => "is-palindrome",
        }
    }

    pub fn from_name(name: &str) -> Option<Program> {
        Self::ALL.iter().copied().find(|program| program.name() == name)
    }

    /// Runs the program's `main` with its fixed input.
    ///
    /// # Examples
    /// ```
    /// use num::BigInt;
    /// use algos::programs::{Program, Value};
    ///
    /// assert_eq!(Program::Power.run().unwrap(), Value::Integer(BigInt::from(1024)));
    /// ```
    pub fn run(&self) -> Result<Value, AlgoError> {
        debug!("Running program {}", self.name());

        let value = match self {
            Self::Factorial => Value::Integer(factorial::main()?),
            Self::Gcd => Value::Integer(gcd::main()),
            Self::Power => Value::Integer(power::main()?),
            Self::FilterEven => Value::Sequence(filter_even::main()),
            Self::SumList => Value::Integer(sum_list::main()),
            Self::IsPalindrome => Value::Boolean(palindrome::main()),
        };
        Ok(value)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
