use std::cmp::Ordering;

use super::error::TextError;
use super::units::{CodeUnit, is_ignorable, ordinal_cmp, unit_len};

/// Scan direction for [`LineSlice::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards increasing index.
    Forward,
    /// Towards decreasing index, starting from a line's last unit.
    Backward,
}

impl Direction {
    fn offset(self, start: usize, i: usize) -> Option<usize> {
        match self {
            Direction::Forward => start.checked_add(i),
            Direction::Backward => start.checked_sub(i),
        }
    }
}

/// A borrowed line: a run of code units inside a line table's buffer.
///
/// Slices never own or copy their units. Ordering between slices is defined
/// only through [`LineSlice::compare`], which reads content rather than
/// position.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSlice<'a> {
    units: &'a [CodeUnit],
}

impl<'a> LineSlice<'a> {
    pub fn new(units: &'a [CodeUnit]) -> Self {
        Self { units }
    }

    /// Builds a slice ending at the first sentinel in `units`.
    pub fn from_terminated(units: &'a [CodeUnit]) -> Self {
        Self {
            units: &units[..unit_len(units)],
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Raw units of the line, without terminator.
    pub fn as_units(&self) -> &'a [CodeUnit] {
        self.units
    }

    pub fn get(&self, index: usize) -> Option<CodeUnit> {
        self.units.get(index).copied()
    }

    /// Index of the last unit, or `None` for an empty line.
    pub fn last_index(&self) -> Option<usize> {
        self.units.len().checked_sub(1)
    }

    /// True if at least one unit is not ignorable.
    pub fn has_meaningful_units(&self) -> bool {
        self.units.iter().any(|&unit| !is_ignorable(unit))
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.units)
    }

    /// Directional "less than" over two lines, skipping ignorable units.
    ///
    /// Each side is read from its own start index, stepping in `direction`.
    /// Ignorable units advance only their own cursor, so the cursors may drift
    /// apart in position while consuming the same number of meaningful units.
    /// Once either side runs out, trailing ignorables are skipped on both, and
    /// `self` is less exactly when it is exhausted and `other` is not.
    pub fn compare(
        &self,
        other: &LineSlice<'_>,
        start_self: usize,
        start_other: usize,
        direction: Direction,
    ) -> bool {
        let mut lhs = ScanCursor::new(self.units, start_self, direction);
        let mut rhs = ScanCursor::new(other.units, start_other, direction);

        while let (Some(a), Some(b)) = (lhs.peek(), rhs.peek()) {
            if lhs.skip_ignorable() || rhs.skip_ignorable() {
                continue;
            }

            lhs.bump();
            rhs.bump();

            match ordinal_cmp(a, b) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            }
        }

        lhs.skip_ignorable_run();
        rhs.skip_ignorable_run();

        lhs.eof() && !rhs.eof()
    }

    /// Front-to-back comparison.
    pub fn compare_forward(&self, other: &LineSlice<'_>) -> bool {
        self.compare(other, 0, 0, Direction::Forward)
    }

    /// Back-to-front comparison, starting from each line's last unit.
    ///
    /// An empty line has no last unit, so it is rejected with
    /// [`TextError::EmptySlice`] instead of being scanned.
    pub fn compare_reversed(&self, other: &LineSlice<'_>) -> Result<bool, TextError> {
        let (Some(start_self), Some(start_other)) = (self.last_index(), other.last_index()) else {
            return Err(TextError::EmptySlice);
        };

        Ok(self.compare(other, start_self, start_other, Direction::Backward))
    }
}

/// One side of a directional scan.
struct ScanCursor<'a> {
    units: &'a [CodeUnit],
    start: usize,
    direction: Direction,
    /// Units consumed so far.
    i: usize,
}

impl<'a> ScanCursor<'a> {
    fn new(units: &'a [CodeUnit], start: usize, direction: Direction) -> Self {
        Self {
            units,
            start,
            direction,
            i: 0,
        }
    }

    fn peek(&self) -> Option<CodeUnit> {
        if self.i >= self.units.len() {
            return None;
        }
        let index = self.direction.offset(self.start, self.i)?;
        self.units.get(index).copied()
    }

    fn eof(&self) -> bool {
        self.peek().is_none()
    }

    fn bump(&mut self) {
        self.i += 1;
    }

    fn skip_ignorable(&mut self) -> bool {
        match self.peek() {
            Some(unit) if is_ignorable(unit) => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    fn skip_ignorable_run(&mut self) {
        while self.skip_ignorable() {}
    }
}
