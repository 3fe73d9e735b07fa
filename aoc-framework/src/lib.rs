//! Framework of traits and utilities for Advent of Code solutions.
//!
//! # Quick Start
//!
//! 1. Define a type for the parsed puzzle input and implement [`ParseData`]:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData};
//! #
//! struct Rows(Vec<Vec<char>>);
//!
//! impl ParseData for Rows {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         Ok(Self(input.lines().map(|line| line.chars().collect()).collect()))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for the part it solves:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//! #
//! # struct Rows(Vec<Vec<char>>);
//! # impl ParseData for Rows {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(input.lines().map(|line| line.chars().collect()).collect()))
//! #     }
//! # }
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = Rows;
//!     type Output = usize;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<usize> {
//!         Ok(input.0.iter().flatten().filter(|&&c| c == '#').count())
//!     }
//! }
//! ```
//!
//! 3. Run it through the [`runner`] module, optionally checking an [`Example`] first.
//!
//! # Solutions over raw input
//!
//! A solution doesn't need a parse step; set `Input = str` to receive the input string directly.
//!
//! ```
//! use aoc_framework::{DynamicResult, PartOne, Solution};
//!
//! struct Day02;
//!
//! impl Solution<PartOne> for Day02 {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().filter(|line| line.contains("XMAS")).count())
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Sealing trait, so only this crate can implement [`Part`][super::Part].
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// An enum to identify a solution part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait used to identify a part for a solution.
///
/// Types implementing this trait are used as generic parameters to [`Solution<P>`] to indicate
/// which part the solution implements.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Indicates a [`Solution`] implements part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Indicates a [`Solution`] implements part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A generic trait for a solution that solves a [`Part`].
///
/// It is expected solutions implement for the marker structs [`PartOne`] or [`PartTwo`].
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// For direct string input, set to `str`.
    type Input: ?Sized;

    /// The output data type returned from the solution.
    ///
    /// The displayed form is what gets compared against an [`Example`]'s expected output.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// A solution can encounter varying errors while solving, like invalid input or a logical
    /// error. It is returned as a dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A trait for data structures that are created by parsing string input.
///
/// Solutions can be passed parsed data constructed through this trait by setting
/// [`Solution::Input`] to the implementing struct.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}

/// A sample input from a puzzle description, paired with the answers it is known to produce.
///
/// Expected answers are compared against the [`Display`] output of each part's solution.
///
/// ```
/// use aoc_framework::{Example, PartKind};
///
/// const EXAMPLE: Example = Example::new("ab\ncd\n", "4");
///
/// assert_eq!(EXAMPLE.expected(PartKind::One), Some("4"));
/// assert_eq!(EXAMPLE.expected(PartKind::Two), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// The sample input.
    pub input: &'static str,
    /// The expected answer for part one.
    pub part_one: &'static str,
    /// The expected answer for part two, if the part is solved.
    pub part_two: Option<&'static str>,
}

impl Example {
    /// Create an example with an expected answer for part one only.
    #[must_use]
    pub const fn new(input: &'static str, part_one: &'static str) -> Self {
        Self {
            input,
            part_one,
            part_two: None,
        }
    }

    /// Add an expected answer for part two.
    #[must_use]
    pub const fn with_part_two(self, part_two: &'static str) -> Self {
        Self {
            part_two: Some(part_two),
            ..self
        }
    }

    /// Get the expected answer for a part, if there is one.
    #[must_use]
    pub fn expected(&self, part: PartKind) -> Option<&'static str> {
        match part {
            PartKind::One => Some(self.part_one),
            PartKind::Two => self.part_two,
        }
    }
}
