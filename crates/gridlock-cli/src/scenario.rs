//! Scenario text parsing.
//!
//! Scenarios are whitespace-separated integers, one logical row per
//! line. `#`-prefixed lines are comments and are skipped everywhere.
//!
//! Deadlock scenario:
//!
//! ```text
//! # three processes in a ring
//! 3
//! 1
//! 2
//! 0
//! ```
//!
//! First line is the process count `n`; the next `n` lines are wait
//! lists (line `i` names the processes `i` waits on). A blank line
//! means "waits on nothing", and missing trailing lines are treated as
//! blank.
//!
//! Safety scenario:
//!
//! ```text
//! # n m
//! 5 3
//! # available
//! 3 3 2
//! # max-need rows, then allocation rows
//! 7 5 3
//! ...
//! ```
//!
//! Header `n m`, then the `available` vector, then `n` max-need rows,
//! then `n` allocation rows. Blank lines are skipped; shape violations
//! inside rows are reported by the core validation layer, which names
//! the offending matrix and row.

use thiserror::Error;

/// A scenario line that could not be turned into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token on a data line is not a non-negative integer.
    #[error("line {line}: '{token}' is not a non-negative integer")]
    InvalidNumber {
        /// One-based line number in the input text.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A header line has the wrong number of fields.
    #[error("line {line}: expected {expected}, found {found} fields")]
    BadHeader {
        /// One-based line number in the input text.
        line: usize,
        /// Description of what the header should contain.
        expected: &'static str,
        /// Number of fields actually present.
        found: usize,
    },

    /// The input ended before a required section.
    #[error("input ended before the {section} section")]
    MissingSection {
        /// The section that was expected next.
        section: &'static str,
    },
}

/// Parsed deadlock scenario: per-process wait lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlockScenario {
    /// Wait lists, one row per process; entries are unvalidated indices.
    pub rows: Vec<Vec<usize>>,
}

/// Parsed safety scenario: raw vectors and matrices plus declared
/// dimensions, unvalidated (shape checking is the core's job).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyScenario {
    /// Declared process count.
    pub n: usize,
    /// Declared resource count.
    pub m: usize,
    /// Available resources, one entry per resource type.
    pub available: Vec<u64>,
    /// Maximum demand rows.
    pub max_need: Vec<Vec<u64>>,
    /// Current allocation rows.
    pub allocation: Vec<Vec<u64>>,
}

/// A line surviving comment filtering, with its original line number.
struct Line<'a> {
    num: usize,
    text: &'a str,
}

fn data_lines(input: &str) -> impl Iterator<Item = Line<'_>> {
    input
        .lines()
        .enumerate()
        .map(|(i, text)| Line {
            num: i + 1,
            text: text.trim(),
        })
        .filter(|line| !line.text.starts_with('#'))
}

fn parse_fields<T>(line: &Line<'_>) -> Result<Vec<T>, ParseError>
where
    T: std::str::FromStr,
{
    line.text
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| ParseError::InvalidNumber {
                line: line.num,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Take the next non-blank line or fail naming the missing section.
fn next_row<'b>(
    lines: &mut impl Iterator<Item = Line<'b>>,
    section: &'static str,
) -> Result<Line<'b>, ParseError> {
    lines
        .find(|line| !line.text.is_empty())
        .ok_or(ParseError::MissingSection { section })
}

/// Parse a deadlock scenario: process count, then wait lists.
///
/// # Errors
///
/// Returns a [`ParseError`] for non-numeric tokens, a malformed header,
/// or an input with no header line at all.
pub fn parse_deadlock(input: &str) -> Result<DeadlockScenario, ParseError> {
    let mut lines = data_lines(input);

    let header = next_row(&mut lines, "process count")?;
    let fields: Vec<usize> = parse_fields(&header)?;
    let [n] = fields[..] else {
        return Err(ParseError::BadHeader {
            line: header.num,
            expected: "a single process count",
            found: fields.len(),
        });
    };

    // Wait lists may legitimately be blank, so blank lines are rows
    // here, not separators. Missing trailing rows are blank rows.
    let mut rows = Vec::with_capacity(n);
    for line in lines.take(n) {
        rows.push(parse_fields(&line)?);
    }
    rows.resize(n, Vec::new());

    Ok(DeadlockScenario { rows })
}

/// Parse a safety scenario: `n m` header, available vector, `n`
/// max-need rows, `n` allocation rows.
///
/// # Errors
///
/// Returns a [`ParseError`] for non-numeric tokens, a malformed header,
/// or an input that ends before all sections are present.
pub fn parse_safety(input: &str) -> Result<SafetyScenario, ParseError> {
    let mut lines = data_lines(input);

    let header = next_row(&mut lines, "'n m' header")?;
    let fields: Vec<usize> = parse_fields(&header)?;
    let [n, m] = fields[..] else {
        return Err(ParseError::BadHeader {
            line: header.num,
            expected: "'n m' (process and resource counts)",
            found: fields.len(),
        });
    };

    let available = parse_fields(&next_row(&mut lines, "available vector")?)?;

    let mut max_need = Vec::with_capacity(n);
    for _ in 0..n {
        max_need.push(parse_fields(&next_row(&mut lines, "max-need matrix")?)?);
    }

    let mut allocation = Vec::with_capacity(n);
    for _ in 0..n {
        allocation.push(parse_fields(&next_row(&mut lines, "allocation matrix")?)?);
    }

    Ok(SafetyScenario {
        n,
        m,
        available,
        max_need,
        allocation,
    })
}
