//! Line-oriented case files and answer lines.
//!
//! ```text
//! 2          number of cases
//! 1          rectangles in case 1
//! 0 0 1 1    x1 y1 x2 y2
//! 2
//! 0 0 0 0
//! 10 0 10 0
//! ```

use std::fmt::{self, Display, Write};

use crate::rect::Rectangle;
use crate::scan::Solution;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Case {
    pub rectangles: Vec<Rectangle>,
}

impl AsRef<[Rectangle]> for Case {
    fn as_ref(&self) -> &[Rectangle] {
        &self.rectangles
    }
}

/// A malformed case file. Line numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedEnd { expected: &'static str },
    InvalidInteger { line: usize, token: String },
    WrongTokenCount { line: usize, expected: usize, found: usize },
    NoRectangles { line: usize },
    InvertedRectangle { line: usize, rect: Rectangle },
    TrailingInput { line: usize },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "input ended while expecting {}", expected)
            }
            ParseError::InvalidInteger { line, token } => {
                write!(f, "line {}: '{}' is not an integer", line, token)
            }
            ParseError::WrongTokenCount {
                line,
                expected,
                found,
            } => write!(f, "line {}: expected {} values, found {}", line, expected, found),
            ParseError::NoRectangles { line } => {
                write!(f, "line {}: a case needs at least one rectangle", line)
            }
            ParseError::InvertedRectangle { line, rect } => {
                write!(f, "line {}: rectangle {} has x1 > x2 or y1 > y2", line, rect)
            }
            ParseError::TrailingInput { line } => {
                write!(f, "line {}: unexpected input after the last case", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Non-blank lines, numbered from 1.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Lines {
            inner: input.lines().enumerate(),
        }
    }

    fn next_values<const N: usize>(
        &mut self,
        expected: &'static str,
    ) -> Result<(usize, [i64; N]), ParseError> {
        let (line, text) = self.next().ok_or(ParseError::UnexpectedEnd { expected })?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != N {
            return Err(ParseError::WrongTokenCount {
                line,
                expected: N,
                found: tokens.len(),
            });
        }

        let mut values = [0; N];
        for (value, token) in values.iter_mut().zip(tokens) {
            *value = token.parse().map_err(|_| ParseError::InvalidInteger {
                line,
                token: token.to_string(),
            })?;
        }
        Ok((line, values))
    }

    fn next_count(&mut self, expected: &'static str) -> Result<(usize, usize), ParseError> {
        let (line, [n]) = self.next_values::<1>(expected)?;
        let n = usize::try_from(n).map_err(|_| ParseError::InvalidInteger {
            line,
            token: n.to_string(),
        })?;
        Ok((line, n))
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .map(|(i, text)| (i + 1, text))
            .find(|(_, text)| !text.trim().is_empty())
    }
}

/// Declared counts only size the first allocation up to these limits, the
/// rest grows as lines are actually read.
const CASES_PREALLOC: usize = 16;
const RECTANGLES_PREALLOC: usize = 1000;

pub fn parse_cases(input: &str) -> Result<Vec<Case>, ParseError> {
    let mut lines = Lines::new(input);
    let (_, num_cases) = lines.next_count("the number of cases")?;

    let mut cases = Vec::with_capacity(num_cases.min(CASES_PREALLOC));
    for _ in 0..num_cases {
        let (line, num_rects) = lines.next_count("the number of rectangles")?;
        if num_rects == 0 {
            return Err(ParseError::NoRectangles { line });
        }

        let mut rectangles = Vec::with_capacity(num_rects.min(RECTANGLES_PREALLOC));
        for _ in 0..num_rects {
            let (line, [x1, y1, x2, y2]) = lines.next_values::<4>("a rectangle")?;
            let rect = Rectangle::new(x1, y1, x2, y2);
            if x1 > x2 || y1 > y2 {
                return Err(ParseError::InvertedRectangle { line, rect });
            }
            rectangles.push(rect);
        }
        cases.push(Case { rectangles });
    }

    if let Some((line, _)) = lines.next() {
        return Err(ParseError::TrailingInput { line });
    }
    Ok(cases)
}

/// Renders cases in the format [`parse_cases`] reads.
pub fn write_cases(cases: &[Case]) -> String {
    let mut out = String::new();
    write_case_file(&mut out, cases).expect("writing to a String cannot fail");
    out
}

fn write_case_file<W: Write>(out: &mut W, cases: &[Case]) -> fmt::Result {
    writeln!(out, "{}", cases.len())?;
    for case in cases {
        writeln!(out, "{}", case.rectangles.len())?;
        for rect in &case.rectangles {
            writeln!(out, "{}", rect)?;
        }
    }
    Ok(())
}

/// `Case #n: x y d`, with `case_number` counted from 1.
pub fn format_answer(case_number: usize, solution: &Solution) -> String {
    format!("Case #{}: {}", case_number, solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2\n1\n0 0 1 1\n2\n0 0 0 0\n10 0 10 0\n";

    #[test]
    fn test_parse_sample() {
        let cases = parse_cases(SAMPLE).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].rectangles, vec![Rectangle::new(0, 0, 1, 1)]);
        assert_eq!(
            cases[1].rectangles,
            vec![Rectangle::new(0, 0, 0, 0), Rectangle::new(10, 0, 10, 0)]
        );
    }

    #[test]
    fn test_parse_tolerates_blank_lines_and_spacing() {
        let input = "1\r\n\n  1\n -3   4 -2 9 \n\n\n";
        let cases = parse_cases(input).unwrap();
        assert_eq!(cases[0].rectangles, vec![Rectangle::new(-3, 4, -2, 9)]);
    }

    #[test]
    fn test_write_then_parse() {
        let cases = parse_cases(SAMPLE).unwrap();
        assert_eq!(write_cases(&cases), SAMPLE);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_cases("").unwrap_err(),
            ParseError::UnexpectedEnd {
                expected: "the number of cases"
            }
        );
        assert_eq!(
            parse_cases("2\n1\n0 0 0 0\n").unwrap_err(),
            ParseError::UnexpectedEnd {
                expected: "the number of rectangles"
            }
        );
        assert_eq!(
            parse_cases("1\n1\n0 0 x 0\n").unwrap_err(),
            ParseError::InvalidInteger {
                line: 3,
                token: "x".to_string()
            }
        );
        assert_eq!(
            parse_cases("1\n1\n0 0 0\n").unwrap_err(),
            ParseError::WrongTokenCount {
                line: 3,
                expected: 4,
                found: 3
            }
        );
        assert_eq!(
            parse_cases("1\n0\n").unwrap_err(),
            ParseError::NoRectangles { line: 2 }
        );
        assert_eq!(
            parse_cases("1\n-1\n").unwrap_err(),
            ParseError::InvalidInteger {
                line: 2,
                token: "-1".to_string()
            }
        );
        assert_eq!(
            parse_cases("1\n1\n5 0 4 0\n").unwrap_err(),
            ParseError::InvertedRectangle {
                line: 3,
                rect: Rectangle::new(5, 0, 4, 0)
            }
        );
        assert_eq!(
            parse_cases("1\n1\n0 0 0 0\n7\n").unwrap_err(),
            ParseError::TrailingInput { line: 4 }
        );
    }

    #[test]
    fn test_huge_declared_counts_end_early() {
        assert_eq!(
            parse_cases("1\n9223372036854775807\n0 0 0 0\n").unwrap_err(),
            ParseError::UnexpectedEnd {
                expected: "a rectangle"
            }
        );
        assert_eq!(
            parse_cases("9223372036854775807\n1\n0 0 0 0\n").unwrap_err(),
            ParseError::UnexpectedEnd {
                expected: "the number of rectangles"
            }
        );
    }

    #[test]
    fn test_format_answer() {
        let solution = Solution::new(0, 0, 10);
        assert_eq!(format_answer(3, &solution), "Case #3: 0 0 10");
    }
}
