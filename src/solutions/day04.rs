use std::num::TryFromIntError;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, Example, ParseData, PartOne, Solution};
use log::{Level, debug, log_enabled, trace};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 4: Ceres Search",
    parsed = WordSearch,
    part_one = Day04,
    example = EXAMPLE
)]
impl super::AdventOfCode2024<4> {}

const EXAMPLE_INPUT: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

const EXAMPLE: Example = Example::new(EXAMPLE_INPUT, "18");

/*
Input is a word search: a grid of letters where words may run horizontally, vertically or
diagonally, forwards or backwards, and may overlap other words.
*/

/// Integer type for x/y coordinates in the letter grid.
type Coordinate = i32;

/// A letter grid to search for words in.
///
/// Rows are kept as given, so they don't need to share a length. Coordinates are x for the column
/// and y for the row, with the origin at the top-left letter.
#[derive(Debug, Clone)]
struct WordSearch {
    rows: Vec<Vec<char>>,
}

#[derive(thiserror::Error, Debug)]
enum ParseWordSearchError {
    #[error("too many lines to represent y-coordinate")]
    LineIndexOverflow(#[source] TryFromIntError),

    #[error("too many characters to represent x-coordinate")]
    CharIndexOverflow(#[source] TryFromIntError),
}

/// Line break characters that end a row, besides `\r\n` which counts as a single break.
const LINE_BREAKS: [char; 7] = ['\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}'];

/// Rewrite every line break (`\r\n`, lone `\r`, and Unicode line/paragraph separators) as `\n`.
fn normalize_line_breaks(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .replace(LINE_BREAKS, "\n")
}

impl ParseData for WordSearch {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let input = normalize_line_breaks(input);
        Coordinate::try_from(input.lines().count())
            .map_err(ParseWordSearchError::LineIndexOverflow)?;

        let rows = parse_input_lines(&input, |_, line| {
            let row: Vec<char> = line.chars().collect();
            Coordinate::try_from(row.len()).map_err(ParseWordSearchError::CharIndexOverflow)?;
            Ok::<_, ParseWordSearchError>(row)
        })
        .collect::<Result<Vec<_>, _>>()?;

        debug!("parsed word search with {} rows", rows.len());
        Ok(Self { rows })
    }
}

/// A straight line to read a word along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Right,
    Left,
    Up,
    Down,
    UpRight,
    DownRight,
    UpLeft,
    DownLeft,
}

impl Direction {
    const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Up,
        Self::Down,
        Self::UpRight,
        Self::DownRight,
        Self::UpLeft,
        Self::DownLeft,
    ];

    fn to_vector2(self) -> Vector2<Coordinate> {
        match self {
            Self::Right => Vector2::new(1, 0),
            Self::Left => Vector2::new(-1, 0),
            Self::Up => Vector2::new(0, -1),
            Self::Down => Vector2::new(0, 1),
            Self::UpRight => Vector2::new(1, -1),
            Self::DownRight => Vector2::new(1, 1),
            Self::UpLeft => Vector2::new(-1, -1),
            Self::DownLeft => Vector2::new(-1, 1),
        }
    }
}

/// A found word, by the position of its first letter and the direction it reads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordMatch {
    origin: Point2<Coordinate>,
    /// `None` for a single letter word, which reads the same in every direction.
    direction: Option<Direction>,
}

/*
For part 1, find how many times `XMAS` appears in the word search.
*/

impl WordSearch {
    /// Get the letter at a point, or `None` if the point lies outside the grid (or past the end of
    /// its row).
    fn get(&self, point: Point2<Coordinate>) -> Option<char> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Iterate over every letter with its point, row by row.
    fn letters(&self) -> impl Iterator<Item = (Point2<Coordinate>, char)> + '_ {
        // parsing checked every index fits a coordinate
        (0..).zip(&self.rows).flat_map(|(y, row): (Coordinate, _)| {
            (0..)
                .zip(row)
                .map(move |(x, &letter)| (Point2::new(x, y), letter))
        })
    }

    /// Check whether the letters after the first follow the origin along a direction.
    fn reads_along(&self, word: &[char], origin: Point2<Coordinate>, direction: Direction) -> bool {
        let step = direction.to_vector2();
        (1..)
            .zip(word.iter().skip(1))
            .all(|(offset, &letter): (Coordinate, _)| {
                self.get(origin + step * offset) == Some(letter)
            })
    }

    /// Find matches of a word reading in any of the given directions, ordered by origin row then
    /// column.
    fn matches_in<'a>(
        &'a self,
        word: &'a [char],
        directions: &'a [Direction],
    ) -> impl Iterator<Item = WordMatch> + 'a {
        let first_letter = word.first().copied();
        let single_letter = word.len() == 1;

        self.letters()
            .filter(move |&(_, letter)| Some(letter) == first_letter)
            .flat_map(move |(origin, _)| {
                let undirected = (single_letter && !directions.is_empty()).then_some(WordMatch {
                    origin,
                    direction: None,
                });
                let directed = directions
                    .iter()
                    .filter(move |&&direction| {
                        !single_letter && self.reads_along(word, origin, direction)
                    })
                    .map(move |&direction| WordMatch {
                        origin,
                        direction: Some(direction),
                    });
                undirected.into_iter().chain(directed)
            })
    }

    fn find_matches(&self, word: &str) -> Vec<WordMatch> {
        let letters: Vec<char> = word.chars().collect();
        self.matches_in(&letters, &Direction::ALL).collect()
    }

    fn count_occurrences_in(&self, word: &str, directions: &[Direction]) -> usize {
        let letters: Vec<char> = word.chars().collect();
        self.matches_in(&letters, directions).count()
    }

    /// Count every occurrence of a word in any direction, overlapping or not.
    ///
    /// An empty word never matches.
    fn count_occurrences(&self, word: &str) -> usize {
        self.count_occurrences_in(word, &Direction::ALL)
    }
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = WordSearch;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        if log_enabled!(Level::Trace) {
            for word_match in input.find_matches("XMAS") {
                trace!("found {word_match:?}");
            }
        }
        Ok(Self::Output::try_from(input.count_occurrences("XMAS"))?)
    }
}
