//! Utility functions and errors for parsing input.

use thiserror::Error;

use crate::DynamicError;

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    /// The zero-based index of the line that failed to parse.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

/// Parse each line of input with a closure, mapping any line's error to an [`InvalidLine`].
///
/// Lines are split with [`str::lines`], so a trailing line break does not produce an empty final
/// line. The closure receives the zero-based line index along with the line.
///
/// # Errors
///
/// Each item is an [`InvalidLine`] error sourcing the closure's error if that line failed.
///
/// ```
/// use aoc_framework::parsing::parse_input_lines;
///
/// let widths = parse_input_lines("abc\nde\n", |_, line| -> Result<_, std::num::TryFromIntError> {
///     u8::try_from(line.len())
/// })
/// .collect::<Result<Vec<_>, _>>()
/// .unwrap();
/// assert_eq!(widths, [3, 2]);
/// ```
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &str) -> Result<T, E>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine {
            line_index,
            source: source.into(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("line is empty")]
    struct EmptyLine;

    #[test]
    fn reports_one_based_line_number() {
        let result = parse_input_lines("ok\n\nok", |_, line| {
            if line.is_empty() { Err(EmptyLine) } else { Ok(line.len()) }
        })
        .collect::<Result<Vec<_>, _>>();

        let Err(error) = result else {
            panic!("expected the empty line to fail");
        };
        assert_eq!(error.line_index(), 1);
        assert_eq!(error.to_string(), "failure parsing line 2");
    }

    #[test]
    fn passes_line_index_to_parser() {
        let indices = parse_input_lines("a\r\nb\nc\n", |index, _| Ok::<_, EmptyLine>(index))
            .collect::<Result<Vec<_>, _>>();
        assert!(matches!(indices.as_deref(), Ok([0, 1, 2])));
    }
}
