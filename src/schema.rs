//! Field specifications and the segment layout registry.
//!
//! A [`FieldSpec`] places one named field at a fixed byte range of a segment
//! and says how to interpret those bytes. Specifications are grouped into a
//! [`Schema`] per [`SegmentKind`] and [`Encoding`], and all schemas are held
//! by a [`Registry`], which checks the layout tables once when it is built and
//! is read-only afterwards.

mod registry;
mod tables;

pub use registry::{Registry, Schema, SchemaError, UnknownField};
#[cfg(feature = "std")]
pub use registry::registry;

use core::{fmt, ops::Range};

/// A kind of segment with a tabled layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// The base (tradeline) segment.
    Base,
    /// The header record opening a file.
    Header,
    /// The trailer record closing a file.
    Trailer,
}

impl SegmentKind {
    /// All segment kinds, in registry order.
    pub const ALL: [SegmentKind; 3] = [Self::Base, Self::Header, Self::Trailer];
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Base => "base segment",
            Self::Header => "header record",
            Self::Trailer => "trailer record",
        })
    }
}

/// A physical encoding of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Every field is fixed-width text.
    Character,
    /// Numbers, dates and timestamps are binary-coded decimal.
    Packed,
}

impl Encoding {
    /// Both encodings, in registry order.
    pub const ALL: [Encoding; 2] = [Self::Character, Self::Packed];

    /// Byte written to positions of a buffer not covered by any field.
    pub const fn default_fill(self) -> u8 {
        b' '
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Character => "character",
            Self::Packed => "packed",
        })
    }
}

/// The transport framing a segment was read from or is written for. It is
/// decided by the caller; nothing in a segment's bytes signals it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Framing {
    /// Segments are not block-length-prefixed. Omitted fields are skipped.
    #[default]
    Record,
    /// Segments are block-length-prefixed. Omitted fields are interpreted in
    /// place of the fields sharing their bytes, and like every interpreted
    /// descriptor word must be populated.
    Block,
}

/// How the bytes of a field are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Free text.
    Alphanumeric,
    /// Alphabetic text.
    Alpha,
    /// Digits, right-justified.
    Numeric,
    /// `YYYYMMDDHHMMSS` digits.
    Timestamp,
    /// `YYYYMMDD` digits.
    Date,
    /// A big-endian, 4-byte unsigned length word.
    Descriptor,
    /// A timestamp packed as binary-coded decimal in 8 bytes.
    PackedTimestamp,
    /// A date packed as binary-coded decimal in 5 bytes.
    PackedDate,
    /// An unsigned integer packed as binary-coded decimal.
    PackedNumber,
}

impl FieldType {
    /// The only byte length a field of this type may have, if it is fixed.
    pub const fn fixed_length(self) -> Option<usize> {
        match self {
            Self::Timestamp => Some(14),
            Self::Date => Some(8),
            Self::Descriptor => Some(4),
            Self::PackedTimestamp => Some(8),
            Self::PackedDate => Some(5),
            _ => None,
        }
    }

    /// Whether this type is binary-coded decimal.
    pub const fn is_packed(self) -> bool {
        matches!(
            self,
            Self::PackedTimestamp | Self::PackedDate | Self::PackedNumber
        )
    }

    /// Whether this type is stored as text, and therefore has a fill
    /// character.
    pub const fn is_character(self) -> bool {
        !self.is_packed() && !matches!(self, Self::Descriptor)
    }
}

/// Per-field options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options {
    zero_fill: bool,
    omitted: bool,
}

impl Options {
    /// No options: blank-filled and always interpreted.
    pub const NONE: Self = Self {
        zero_fill: false,
        omitted: false,
    };
    /// Pad and fill absent values with `'0'` instead of a space.
    pub const ZERO_FILL: Self = Self {
        zero_fill: true,
        omitted: false,
    };
    /// Only interpreted under block-length-prefixed framing.
    pub const OMITTED: Self = Self {
        zero_fill: false,
        omitted: true,
    };

    /// Whether absent values are filled with `'0'`.
    pub const fn zero_fill(self) -> bool {
        self.zero_fill
    }

    /// Whether the field is only interpreted under block framing.
    pub const fn omitted(self) -> bool {
        self.omitted
    }
}

/// Whether a field may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Must be populated.
    Required,
    /// Populated when business rules outside the codec call for it.
    Applicable,
    /// May always be empty.
    Nullable,
}

/// The placement and interpretation of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Byte offset of the field within the segment.
    pub start: usize,
    /// Byte length of the field.
    pub length: usize,
    pub field_type: FieldType,
    pub options: Options,
    pub presence: Presence,
}

impl FieldSpec {
    pub const fn new(
        start: usize,
        length: usize,
        field_type: FieldType,
        options: Options,
        presence: Presence,
    ) -> Self {
        Self {
            start,
            length,
            field_type,
            options,
            presence,
        }
    }

    /// Exclusive end offset of the field.
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// Byte range of the field within the segment.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Fill character of a text field: `'0'` when zero-filled, otherwise a
    /// space.
    pub const fn fill(&self) -> u8 {
        if self.options.zero_fill() { b'0' } else { b' ' }
    }

    pub(crate) const fn overlaps(&self, other: &FieldSpec) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}
