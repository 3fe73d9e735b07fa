//! Solutions implemented for Advent of Code 2024.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day, and [`check_day`] to
//! check a solution against the example embedded with it.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2024<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add the day to the `solutions!` invocation below `MATCH SOLUTIONS HERE`.

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner, check_example};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day04;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day, using
/// [`#[solution_runner]`][aoc_framework::runner::solution_runner]:
///
/// ```ignore
/// // in a submodule "day01.rs"
/// use aoc_framework::runner::solution_runner;
/// use aoc_framework::{Example, PartOne, Solution};
///
/// struct Day01;
/// impl Solution<PartOne> for Day01 {
///     /* ... */
/// }
///
/// const EXAMPLE: Example = Example::new("...", "42");
///
/// #[solution_runner(name = "Day 1", part_one = Day01, example = EXAMPLE)]
/// impl super::AdventOfCode2024<1> {}
/// ```
struct AdventOfCode2024<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Generate the dispatch functions over the listed days.
macro_rules! solutions {
    ($($day:literal),* $(,)?) => {
        /// Run a solution based on the day.
        ///
        /// # Errors
        ///
        /// If the solution for the given day is not available, a [`DayNotAvailable`] error is
        /// returned.
        ///
        /// Any dynamically dispatched error from running the solution is propagated.
        pub fn run_day(
            day: u8,
            input: &str,
            handler: &mut dyn OutputHandler,
            timed: bool,
        ) -> DynamicResult<()> {
            match day {
                $($day => AdventOfCode2024::<$day>::run(input, handler, timed),)*
                _ => Err(DayNotAvailable(day).into()),
            }
        }

        /// Run a day's solution on its embedded example, checking the answers it produces.
        ///
        /// # Errors
        ///
        /// If the solution for the given day is not available, a [`DayNotAvailable`] error is
        /// returned.
        ///
        /// Any error from checking the example, including a wrong answer, is propagated.
        pub fn check_day(
            day: u8,
            handler: &mut dyn OutputHandler,
            timed: bool,
        ) -> DynamicResult<()> {
            match day {
                $($day => check_example::<AdventOfCode2024<$day>>(handler, timed),)*
                _ => Err(DayNotAvailable(day).into()),
            }
        }
    };
}

// --- MATCH SOLUTIONS HERE ---
solutions!(4);
