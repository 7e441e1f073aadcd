//! Timestamp validation and offset arithmetic.

use crate::error::AlignmentError;
use crate::types::TimedWord;
use std::time::Duration;

/// Round seconds to millisecond precision.
pub fn round_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

/// Check the aligner contract: finite non-negative spans with `start <= end`
/// and non-decreasing starts.
pub fn validate(words: &[TimedWord]) -> Result<(), AlignmentError> {
    if words.is_empty() {
        return Err(AlignmentError::Empty);
    }

    let mut previous = 0.0;

    for (index, w) in words.iter().enumerate() {
        let valid = w.start.is_finite() && w.end.is_finite() && w.start >= 0.0 && w.start <= w.end;
        if !valid {
            return Err(AlignmentError::InvalidSpan {
                index,
                word: w.word.clone(),
                start: w.start,
                end: w.end,
            });
        }

        if w.start < previous {
            return Err(AlignmentError::OutOfOrder {
                index,
                word: w.word.clone(),
                start: w.start,
                previous,
            });
        }

        previous = w.start;
    }

    Ok(())
}

/// Shift raw aligner timestamps onto the padded audio.
///
/// The offset is added first and the sum rounded to milliseconds.
pub fn shift(words: Vec<TimedWord>, offset: Duration) -> Vec<TimedWord> {
    let offset = offset.as_secs_f64();

    words
        .into_iter()
        .map(|w| TimedWord {
            start: round_millis(w.start + offset),
            end: round_millis(w.end + offset),
            ..w
        })
        .collect()
}

/// Total duration of the padded audio: last word end plus trailing silence.
pub fn total_duration(words: &[TimedWord], end_padding: Duration) -> f64 {
    let last_end = words.last().map_or(0.0, |w| w.end);
    round_millis(last_end + end_padding.as_secs_f64())
}
