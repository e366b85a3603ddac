use std::cmp::Ordering;
use std::io::{Read, Write};

use super::comparator::forward;
use super::error::TextError;
use super::lines::{split_lines, trim_trailing_empty};
use super::slice::LineSlice;
use super::span::Span;
use super::units::{BYTE_ORDER_MARK, ByteOrder, CodeUnit, LINE_FEED, SENTINEL};

/// A saved ordering of a table's lines.
///
/// Holds span descriptors only, so taking or restoring an order never copies
/// line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOrder {
    lines: Box<[Span]>,
}

impl LineOrder {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn spans(&self) -> &[Span] {
        &self.lines
    }
}

impl From<&[Span]> for LineOrder {
    fn from(lines: &[Span]) -> Self {
        Self {
            lines: lines.into(),
        }
    }
}

/// A UTF-16 text held in one buffer and viewed as reorderable lines.
///
/// The buffer is filled once and never resized, so the spans in both the
/// current ordering and the original snapshot stay valid for the table's
/// lifetime. Splitting rewrites every line feed to [`SENTINEL`]; after that
/// the buffer is read-only.
#[derive(Debug)]
pub struct LineTable {
    /// Marker unit, content, then one trailing sentinel.
    buffer: Box<[CodeUnit]>,
    byte_order: ByteOrder,
    /// Current line order.
    current: Vec<Span>,
    /// Order right after splitting and trimming.
    original: LineOrder,
}

impl LineTable {
    /// Builds a table from little-endian file bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextError> {
        Self::from_bytes_with(bytes, ByteOrder::default())
    }

    pub fn from_bytes_with(bytes: &[u8], byte_order: ByteOrder) -> Result<Self, TextError> {
        let units = byte_order.decode(bytes)?;
        Self::build(units, byte_order)
    }

    /// Builds a table from code units already in memory. The units are copied
    /// into the table's own buffer.
    pub fn from_units(units: &[CodeUnit]) -> Result<Self, TextError> {
        Self::build(units.to_vec(), ByteOrder::default())
    }

    /// Reads exactly `declared_len` bytes from `reader` and builds a table.
    ///
    /// A short read is a [`TextError::ReadMismatch`]; no table is produced.
    pub fn from_reader<R: Read>(
        reader: R,
        declared_len: u64,
        byte_order: ByteOrder,
    ) -> Result<Self, TextError> {
        let mut bytes = Vec::new();
        reader.take(declared_len).read_to_end(&mut bytes)?;

        let actual = bytes.len() as u64;
        if actual != declared_len {
            log::warn!("short read: expected {declared_len} bytes, got {actual}");
            return Err(TextError::ReadMismatch {
                expected: declared_len,
                actual,
            });
        }

        Self::from_bytes_with(&bytes, byte_order)
    }

    fn build(mut units: Vec<CodeUnit>, byte_order: ByteOrder) -> Result<Self, TextError> {
        let content_len = units.len();
        units.push(SENTINEL);
        let mut buffer = units.into_boxed_slice();

        let mut current = split_lines(&mut buffer[..content_len]);
        let split_count = current.len();
        if let Err(err) = trim_trailing_empty(&mut current) {
            log::warn!("{content_len} units produced no non-empty lines");
            return Err(err);
        }
        log::debug!(
            "split {content_len} units into {} lines, dropped {} trailing empty",
            current.len(),
            split_count - current.len()
        );

        let original = LineOrder::from(current.as_slice());
        Ok(Self {
            buffer,
            byte_order,
            current,
            original,
        })
    }

    /// True when the buffer is populated and at least one line exists.
    ///
    /// Construction fails instead of producing an unhealthy table, so this
    /// holds for every value of this type.
    pub fn is_ok(&self) -> bool {
        !self.buffer.is_empty() && !self.current.is_empty()
    }

    /// Number of lines after trimming.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Number of code units read from the source, marker included.
    pub fn unit_count(&self) -> usize {
        self.buffer.len() - 1
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// The leading unit reserved for the byte-order marker.
    pub fn marker(&self) -> CodeUnit {
        self.buffer.first().copied().unwrap_or(BYTE_ORDER_MARK)
    }

    fn slice(&self, span: Span) -> LineSlice<'_> {
        LineSlice::new(&self.buffer[span.range()])
    }

    /// Line at `index` in the current order.
    pub fn line(&self, index: usize) -> Option<LineSlice<'_>> {
        self.current.get(index).map(|&span| self.slice(span))
    }

    /// Lines in the current order.
    pub fn lines(&self) -> impl Iterator<Item = LineSlice<'_>> + '_ {
        self.current.iter().map(|&span| self.slice(span))
    }

    /// Lines in the order they had in the source.
    pub fn original_lines(&self) -> impl Iterator<Item = LineSlice<'_>> + '_ {
        self.original.spans().iter().map(|&span| self.slice(span))
    }

    pub fn spans(&self) -> &[Span] {
        &self.current
    }

    pub fn original_order(&self) -> &LineOrder {
        &self.original
    }

    /// Copies out the current order for a later [`LineTable::set_order`].
    pub fn order(&self) -> LineOrder {
        LineOrder::from(self.current.as_slice())
    }

    /// Reinstates a previously saved order.
    ///
    /// The order must contain exactly this table's lines, in any arrangement.
    pub fn set_order(&mut self, order: &LineOrder) -> Result<(), TextError> {
        if order.len() != self.current.len() {
            return Err(TextError::OrderLength {
                expected: self.current.len(),
                actual: order.len(),
            });
        }

        let mut theirs = order.spans().to_vec();
        let mut ours = self.original.spans().to_vec();
        theirs.sort_unstable();
        ours.sort_unstable();
        if theirs != ours {
            return Err(TextError::ForeignOrder);
        }

        self.current.copy_from_slice(order.spans());
        Ok(())
    }

    /// Puts the lines back in source order.
    pub fn restore_original(&mut self) {
        self.current.copy_from_slice(self.original.spans());
        log::debug!("restored original order of {} lines", self.current.len());
    }

    /// Sorts with the forward comparator.
    pub fn sort(&mut self) {
        self.sort_by(forward);
    }

    /// Sorts with `comparator`, or the forward comparator when `None`.
    pub fn sort_with<F>(&mut self, comparator: Option<F>)
    where
        F: FnMut(&LineSlice<'_>, &LineSlice<'_>) -> bool,
    {
        match comparator {
            Some(less) => self.sort_by(less),
            None => self.sort(),
        }
    }

    /// Sorts the current order in place with a strict "less than" predicate.
    ///
    /// The sort is not stable. Only span descriptors move; the buffer and the
    /// original snapshot are untouched.
    pub fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&LineSlice<'_>, &LineSlice<'_>) -> bool,
    {
        let buffer = &self.buffer;
        self.current.sort_unstable_by(|a, b| {
            let a = LineSlice::new(&buffer[a.range()]);
            let b = LineSlice::new(&buffer[b.range()]);
            if less(&a, &b) {
                Ordering::Less
            } else if less(&b, &a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        log::debug!("sorted {} lines", self.current.len());
    }

    /// Writes the lines in current order, each followed by a line feed.
    /// With `write_header`, the marker unit is written first.
    pub fn write_to<W: Write>(&self, sink: &mut W, write_header: bool) -> Result<(), TextError> {
        let mut bytes = Vec::new();
        if write_header {
            self.byte_order.encode_into(&[self.marker()], &mut bytes);
        }

        for line in self.lines() {
            self.byte_order.encode_into(line.as_units(), &mut bytes);
            self.byte_order.encode_into(&[LINE_FEED], &mut bytes);
            sink.write_all(&bytes)?;
            bytes.clear();
        }
        Ok(())
    }

    /// The bytes [`LineTable::write_to`] would produce with a header.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.byte_order.encode_into(&[self.marker()], &mut bytes);
        for line in self.lines() {
            self.byte_order.encode_into(line.as_units(), &mut bytes);
            self.byte_order.encode_into(&[LINE_FEED], &mut bytes);
        }
        bytes
    }
}
