//! Two-section rating stream parsing and prediction output.
//!
//! The reference pipeline feeds the recommender from a plain-text stream:
//!
//! ```text
//! train dataset
//! <user> <item> <rating>
//! ...
//! test dataset
//! <user> <item>
//! ...
//! ```
//!
//! Marker lines switch sections; lines before any marker parse as
//! training records. Predictions render fixed-point with exactly one
//! decimal digit, one per line, in query order.
//!
//! The prediction core only ever sees typed records; every malformed
//! line is rejected here with its line number.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{RecomendarError, Result};
use crate::store::{QueryPair, RatingRecord};

const TRAIN_MARKER: &str = "train dataset";
const TEST_MARKER: &str = "test dataset";

/// Parsed contents of a two-section rating stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainTestSplit {
    /// Training observations, in stream order.
    pub training: Vec<RatingRecord>,
    /// Prediction queries, in stream order.
    pub queries: Vec<QueryPair>,
}

/// Reads a two-section rating stream into training records and queries.
///
/// Blank lines are skipped. Section markers may repeat; each occurrence
/// switches the active section.
///
/// # Errors
///
/// Returns `Parse` for lines with missing, malformed, or trailing
/// fields, and `Io` if the underlying reader fails.
///
/// # Examples
///
/// ```
/// use recomendar::dataset::read_split;
///
/// let input = "train dataset\n1 10 4.0\n2 10 5.0\ntest dataset\n1 10\n";
/// let split = read_split(input.as_bytes()).unwrap();
/// assert_eq!(split.training.len(), 2);
/// assert_eq!(split.queries.len(), 1);
/// ```
pub fn read_split<R: BufRead>(reader: R) -> Result<TrainTestSplit> {
    let mut split = TrainTestSplit::default();
    let mut in_test = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed == TRAIN_MARKER {
            in_test = false;
            continue;
        }
        if trimmed == TEST_MARKER {
            in_test = true;
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        if in_test {
            let user = parse_field(fields.next(), line_no, "user id")?;
            let item = parse_field(fields.next(), line_no, "item id")?;
            reject_trailing(fields.next(), line_no)?;
            split.queries.push(QueryPair::new(user, item));
        } else {
            let user = parse_field(fields.next(), line_no, "user id")?;
            let item = parse_field(fields.next(), line_no, "item id")?;
            let rating = parse_field(fields.next(), line_no, "rating")?;
            reject_trailing(fields.next(), line_no)?;
            split.training.push(RatingRecord::new(user, item, rating));
        }
    }

    Ok(split)
}

fn parse_field<T: FromStr>(field: Option<&str>, line: usize, what: &str) -> Result<T> {
    let raw = field.ok_or_else(|| RecomendarError::Parse {
        line,
        message: format!("missing {what}"),
    })?;
    raw.parse().map_err(|_| RecomendarError::Parse {
        line,
        message: format!("invalid {what}: '{raw}'"),
    })
}

fn reject_trailing(field: Option<&str>, line: usize) -> Result<()> {
    match field {
        Some(extra) => Err(RecomendarError::Parse {
            line,
            message: format!("unexpected trailing field: '{extra}'"),
        }),
        None => Ok(()),
    }
}

/// Renders a prediction fixed-point with exactly one decimal digit.
///
/// # Examples
///
/// ```
/// use recomendar::dataset::format_prediction;
///
/// assert_eq!(format_prediction(4.0), "4.0");
/// assert_eq!(format_prediction(3.26), "3.3");
/// ```
#[must_use]
pub fn format_prediction(prediction: f32) -> String {
    format!("{prediction:.1}")
}

/// Writes predictions one per line, in slice order.
///
/// # Errors
///
/// Returns `Io` if the writer fails.
pub fn write_predictions<W: Write>(mut writer: W, predictions: &[f32]) -> Result<()> {
    for &prediction in predictions {
        writeln!(writer, "{}", format_prediction(prediction))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_split_two_sections() {
        let input = "train dataset\n\
                     1 10 4.0\n\
                     2 10 5.0\n\
                     1 20 3.0\n\
                     test dataset\n\
                     1 10\n\
                     99 20\n";
        let split = read_split(input.as_bytes()).expect("well-formed stream");

        assert_eq!(split.training.len(), 3);
        assert_eq!(split.training[0], RatingRecord::new(1, 10, 4.0));
        assert_eq!(split.queries, vec![QueryPair::new(1, 10), QueryPair::new(99, 20)]);
    }

    #[test]
    fn test_lines_before_marker_are_training() {
        let input = "1 10 4.0\ntest dataset\n1 10\n";
        let split = read_split(input.as_bytes()).expect("well-formed stream");
        assert_eq!(split.training.len(), 1);
        assert_eq!(split.queries.len(), 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "train dataset\n\n1 10 4.0\n\ntest dataset\n\n1 10\n";
        let split = read_split(input.as_bytes()).expect("well-formed stream");
        assert_eq!(split.training.len(), 1);
        assert_eq!(split.queries.len(), 1);
    }

    #[test]
    fn test_missing_rating_is_parse_error() {
        let input = "train dataset\n1 10\n";
        let err = read_split(input.as_bytes()).expect_err("rating missing");
        let msg = err.to_string();
        assert!(msg.contains("line 2"));
        assert!(msg.contains("rating"));
    }

    #[test]
    fn test_non_numeric_field_is_parse_error() {
        let input = "train dataset\n1 ten 4.0\n";
        let err = read_split(input.as_bytes()).expect_err("item id not numeric");
        assert!(err.to_string().contains("item id"));
    }

    #[test]
    fn test_trailing_field_is_parse_error() {
        let input = "test dataset\n1 10 4.0\n";
        let err = read_split(input.as_bytes()).expect_err("query has extra field");
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn test_format_prediction_one_decimal() {
        assert_eq!(format_prediction(4.0), "4.0");
        assert_eq!(format_prediction(3.0), "3.0");
        assert_eq!(format_prediction(2.71), "2.7");
        assert_eq!(format_prediction(-0.04), "-0.0");
    }

    #[test]
    fn test_write_predictions_one_per_line() {
        let mut out = Vec::new();
        write_predictions(&mut out, &[4.0, 3.0, 2.5]).expect("write to memory");
        assert_eq!(String::from_utf8(out).unwrap(), "4.0\n3.0\n2.5\n");
    }
}
