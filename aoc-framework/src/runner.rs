//! Functions and traits for running solutions.
//!
//! # Quick Start
//!
//! A structure or impl-block can be annotated with the [`#[solution_runner]`][solution_runner]
//! attribute macro with appropriate properties:
//!
//! ```
//! # use aoc_framework::runner::{solution_runner};
//! # use aoc_framework::{DynamicResult, Example, PartOne, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(input.lines().count())
//! #    }
//! }
//!
//! #[solution_runner(name = "Day 1", part_one = Day01)]
//! struct Day01Runner;
//!
//! // or, with an example to check
//!
//! const EXAMPLE: Example = Example::new("a\nb\n", "2");
//!
//! #[solution_runner(name = "Day 1", part_one = Day01, example = EXAMPLE)]
//! impl Day01 {}
//! ```

use std::fmt::Display;
use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::{DynamicResult, Example, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// A trait for an output events handler.
///
/// When a solution runs, the steps of running the solution leads to events to output through a
/// handler as feedback and logging.
pub trait OutputHandler {
    /// Called to output the name of the solution, at the start of running the solution.
    fn solution_name(&mut self, name: &str);

    /// Called when the solution starts parsing input.
    fn parse_start(&mut self);

    /// Called when parsing input is finished.
    ///
    /// The duration taken to parse is optionally passed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called when a solution part starts, with a [`PartKind`] to identify the part.
    fn part_start(&mut self, part: PartKind);

    /// Called when a part finishes to output the result, with a [`PartKind`] to identify the part.
    ///
    /// The duration taken to run the part is optionally passed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);

    /// Called after a part's output from an example run is compared with the expected answer.
    fn example_result(&mut self, part: PartKind, expected: &str, matched: bool);
}

/// Measure the duration of an expression.
///
/// Evaluates the expression once, returning a tuple of its result and the elapsed
/// [`Duration`][std::time::Duration].
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// Evaluate an expression, measuring its duration only if `$timed` is `true`.
///
/// Returns a tuple of the result and `Some` duration when timed, or `None` otherwise.
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let (result, duration) = measure_duration!($expr);
            (result, Some(duration))
        } else {
            ($expr, None)
        }
    }};
}

/// Run a solution part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    debug!("solving {part}");
    handler.part_start(part);
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a solution's parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    debug!("parsing {} lines of input", input.lines().count());
    handler.parse_start();
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run a solution that only implements part one and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)
}

/// Run a solution that implements both parts and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Run a solution that implements part one and has a parse data step for input.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution is propagated.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Run a solution that implements both parts and has a parse data step for input.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A trait for solutions that can be run.
///
/// The trait can be implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Arguments
    ///
    /// - `input` - The input string to solve.
    /// - `handler` - The output handler to output events to.
    /// - `timed` - A flag to measure the time to process steps then output the elapsed times to the
    ///   handler.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;

    /// The example from the puzzle description, if the solution embeds one.
    #[must_use]
    fn example() -> Option<Example> {
        None
    }
}

/// An error from checking a solution against its example.
#[derive(Error, Debug)]
pub enum ExampleError {
    #[error("no example available for this solution")]
    NoExample,

    #[error("{part} of example expected {expected:?}, but found {found:?}")]
    Mismatch {
        part: PartKind,
        expected: String,
        found: String,
    },

    #[error("{0} of example has an expected answer, but the solution produced no output for it")]
    MissingOutput(PartKind),
}

/// Handler forwarding events to another handler, while keeping the displayed output of each part.
struct RecordingHandler<'h> {
    inner: &'h mut dyn OutputHandler,
    outputs: Vec<(PartKind, String)>,
}

impl OutputHandler for RecordingHandler<'_> {
    fn solution_name(&mut self, name: &str) {
        self.inner.solution_name(name);
    }

    fn parse_start(&mut self) {
        self.inner.parse_start();
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        self.inner.parse_end(duration_opt);
    }

    fn part_start(&mut self, part: PartKind) {
        self.inner.part_start(part);
    }

    fn part_output(
        &mut self,
        part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        self.inner.part_output(part, output, duration_opt);
        self.outputs.push((part, output.to_string()));
    }

    fn example_result(&mut self, part: PartKind, expected: &str, matched: bool) {
        self.inner.example_result(part, expected, matched);
    }
}

/// Run a solution on its embedded example, comparing each part's output with the expected answer.
///
/// Every part with an expected answer is reported through [`OutputHandler::example_result`] before
/// any mismatch is returned.
///
/// # Errors
///
/// - [`ExampleError::NoExample`] if the solution has no example.
/// - [`ExampleError::Mismatch`] for the first part whose output differs from the expected answer.
/// - [`ExampleError::MissingOutput`] if an expected part was never solved.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn check_example<R: SolutionRunner>(
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    let example = R::example().ok_or(ExampleError::NoExample)?;
    debug!("checking example of {} lines", example.input.lines().count());

    let mut recorder = RecordingHandler {
        inner: handler,
        outputs: Vec::new(),
    };
    R::run(example.input, &mut recorder, timed)?;

    let mut first_error = None;
    for part in [PartKind::One, PartKind::Two] {
        let Some(expected) = example.expected(part) else {
            continue;
        };
        let found_opt = recorder
            .outputs
            .iter()
            .find_map(|(output_part, found)| (*output_part == part).then_some(found));

        let error_opt = match found_opt {
            Some(found) => {
                let matched = found == expected;
                recorder.inner.example_result(part, expected, matched);
                (!matched).then(|| ExampleError::Mismatch {
                    part,
                    expected: expected.to_string(),
                    found: found.clone(),
                })
            }
            None => Some(ExampleError::MissingOutput(part)),
        };
        if first_error.is_none() {
            first_error = error_opt;
        }
    }

    match first_error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Handler keeping a readable log of events.
    #[derive(Default)]
    struct EventLog(Vec<String>);

    impl OutputHandler for EventLog {
        fn solution_name(&mut self, name: &str) {
            self.0.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.0.push("parse start".to_string());
        }

        fn parse_end(&mut self, _duration_opt: Option<Duration>) {
            self.0.push("parse end".to_string());
        }

        fn part_start(&mut self, part: PartKind) {
            self.0.push(format!("start {part}"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.0.push(format!("{part}: {output}"));
        }

        fn example_result(&mut self, part: PartKind, expected: &str, matched: bool) {
            self.0.push(format!("{part} expected {expected} matched {matched}"));
        }
    }

    struct LineCount;

    impl Solution<PartOne> for LineCount {
        type Input = str;
        type Output = usize;

        fn solve(input: &str) -> DynamicResult<usize> {
            Ok(input.lines().count())
        }
    }

    impl Solution<PartTwo> for LineCount {
        type Input = str;
        type Output = usize;

        fn solve(input: &str) -> DynamicResult<usize> {
            Ok(input.chars().filter(|c| !c.is_whitespace()).count())
        }
    }

    struct Passing;

    impl SolutionRunner for Passing {
        fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()> {
            solve_full_solution::<LineCount, LineCount>("Lines", input, handler, timed)
        }

        fn example() -> Option<Example> {
            Some(Example::new("ab\nc\n", "2").with_part_two("3"))
        }
    }

    struct Failing;

    impl SolutionRunner for Failing {
        fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()> {
            solve_half_solution::<LineCount>("Lines", input, handler, timed)
        }

        fn example() -> Option<Example> {
            Some(Example::new("ab\nc\n", "5"))
        }
    }

    struct MissingPartTwo;

    impl SolutionRunner for MissingPartTwo {
        fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()> {
            solve_half_solution::<LineCount>("Lines", input, handler, timed)
        }

        fn example() -> Option<Example> {
            Some(Example::new("ab\nc\n", "2").with_part_two("3"))
        }
    }

    struct WithoutExample;

    impl SolutionRunner for WithoutExample {
        fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()> {
            solve_half_solution::<LineCount>("Lines", input, handler, timed)
        }
    }

    #[test]
    fn check_example_reports_matching_parts() -> DynamicResult<()> {
        let mut log = EventLog::default();
        check_example::<Passing>(&mut log, false)?;
        assert_eq!(
            log.0,
            [
                "name Lines",
                "start Part 1",
                "Part 1: 2",
                "start Part 2",
                "Part 2: 3",
                "Part 1 expected 2 matched true",
                "Part 2 expected 3 matched true",
            ]
        );
        Ok(())
    }

    #[test]
    fn check_example_fails_on_mismatch() {
        let mut log = EventLog::default();
        let Err(error) = check_example::<Failing>(&mut log, false) else {
            panic!("expected example check to fail");
        };
        assert!(matches!(
            error.downcast_ref::<ExampleError>(),
            Some(ExampleError::Mismatch { part: PartKind::One, expected, found })
                if expected == "5" && found == "2"
        ));
        assert_eq!(log.0.last().map(String::as_str), Some("Part 1 expected 5 matched false"));
    }

    #[test]
    fn check_example_fails_on_unsolved_part() {
        let mut log = EventLog::default();
        let Err(error) = check_example::<MissingPartTwo>(&mut log, false) else {
            panic!("expected example check to fail");
        };
        assert!(matches!(
            error.downcast_ref::<ExampleError>(),
            Some(ExampleError::MissingOutput(PartKind::Two))
        ));
    }

    #[test]
    fn check_example_requires_example() {
        let mut log = EventLog::default();
        let Err(error) = check_example::<WithoutExample>(&mut log, false) else {
            panic!("expected example check to fail");
        };
        assert!(matches!(
            error.downcast_ref::<ExampleError>(),
            Some(ExampleError::NoExample)
        ));
        assert!(log.0.is_empty());
    }

    #[test]
    fn timed_run_still_outputs() -> DynamicResult<()> {
        let mut log = EventLog::default();
        WithoutExample::run("x\ny\nz", &mut log, true)?;
        assert_eq!(log.0, ["name Lines", "start Part 1", "Part 1: 3"]);
        Ok(())
    }
}
