use super::error::TextError;
use super::span::Span;
use super::units::{CodeUnit, LINE_FEED, SENTINEL, count_units};

/// Offset of the first content unit. Index 0 is reserved for the byte-order
/// marker and is never part of a line.
pub const CONTENT_START: usize = 1;

/// Splits `buffer` into one span per line.
///
/// Every line feed is overwritten with [`SENTINEL`], so after this call each
/// line is terminated in place. The run after the last line feed, possibly
/// empty, becomes the final span.
pub fn split_lines(buffer: &mut [CodeUnit]) -> Vec<Span> {
    let mut lines = Vec::with_capacity(count_units(buffer, LINE_FEED) + 1);
    let mut start = CONTENT_START.min(buffer.len());

    for (i, unit) in buffer.iter_mut().enumerate().skip(start) {
        if *unit == LINE_FEED {
            lines.push(Span::new(start, i - start));
            *unit = SENTINEL;
            start = i + 1;
        }
    }

    lines.push(Span::new(start, buffer.len() - start));
    lines
}

/// Drops trailing empty lines left by terminal line breaks.
///
/// Fails with [`TextError::NoLines`] when nothing non-empty remains.
pub fn trim_trailing_empty(lines: &mut Vec<Span>) -> Result<(), TextError> {
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return Err(TextError::NoLines);
    }
    Ok(())
}
