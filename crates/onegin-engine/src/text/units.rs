//! Fixed-width code unit primitives.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::error::TextError;

/// One UTF-16 storage unit.
pub type CodeUnit = u16;

/// Bytes per code unit.
pub const UNIT_WIDTH: usize = std::mem::size_of::<CodeUnit>();

pub const LINE_FEED: CodeUnit = 0x000A;

/// Written over line feeds when a buffer is split into lines.
pub const SENTINEL: CodeUnit = 0x0000;

pub const BYTE_ORDER_MARK: CodeUnit = 0xFEFF;

/// Units skipped by line comparison but kept in output.
pub const IGNORABLE: [CodeUnit; 11] = [
    b'.' as CodeUnit,
    b',' as CodeUnit,
    b'!' as CodeUnit,
    b':' as CodeUnit,
    b';' as CodeUnit,
    b'"' as CodeUnit,
    b'?' as CodeUnit,
    b'-' as CodeUnit,
    b'(' as CodeUnit,
    b')' as CodeUnit,
    b' ' as CodeUnit,
];

pub fn is_ignorable(unit: CodeUnit) -> bool {
    IGNORABLE.contains(&unit)
}

/// Number of units before the first [`SENTINEL`], or the whole slice if
/// there is none.
pub fn unit_len(units: &[CodeUnit]) -> usize {
    units
        .iter()
        .position(|&unit| unit == SENTINEL)
        .unwrap_or(units.len())
}

/// Counts occurrences of `needle` up to the first [`SENTINEL`].
pub fn count_units(units: &[CodeUnit], needle: CodeUnit) -> usize {
    units[..unit_len(units)]
        .iter()
        .filter(|&&unit| unit == needle)
        .count()
}

/// Ordinal comparison of two code units with their bytes swapped.
///
/// The low byte decides first and the high byte breaks ties, which is the
/// order a little-endian unit gets once normalised to big-endian.
pub fn ordinal_cmp(lhs: CodeUnit, rhs: CodeUnit) -> Ordering {
    lhs.swap_bytes().cmp(&rhs.swap_bytes())
}

/// Byte order of code units in files. Fixed by configuration, never detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Decodes raw file bytes into code units.
    pub fn decode(self, bytes: &[u8]) -> Result<Vec<CodeUnit>, TextError> {
        if bytes.len() % UNIT_WIDTH != 0 {
            log::warn!("rejecting input of {} bytes", bytes.len());
            return Err(TextError::OddByteLength { len: bytes.len() });
        }

        Ok(bytes
            .chunks_exact(UNIT_WIDTH)
            .map(|pair| {
                let pair = [pair[0], pair[1]];
                match self {
                    ByteOrder::Little => CodeUnit::from_le_bytes(pair),
                    ByteOrder::Big => CodeUnit::from_be_bytes(pair),
                }
            })
            .collect())
    }

    /// Appends the byte encoding of `units` to `out`.
    pub fn encode_into(self, units: &[CodeUnit], out: &mut Vec<u8>) {
        out.reserve(units.len() * UNIT_WIDTH);
        for &unit in units {
            let pair = match self {
                ByteOrder::Little => unit.to_le_bytes(),
                ByteOrder::Big => unit.to_be_bytes(),
            };
            out.extend_from_slice(&pair);
        }
    }
}
