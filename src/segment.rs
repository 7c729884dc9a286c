//! Conversion of whole segments between byte buffers and [`Record`]s.
//!
//! A [`Codec`] walks the fields of a schema in offset order, applying the
//! [`field`](crate::field) codec to each. Problems with individual fields do
//! not stop the walk: they are collected as [`Finding`]s beside the decoded
//! record or encoded buffer, so a caller sees every problem with a segment at
//! once and decides whether to reject or merely flag it. Only an undersized
//! buffer or an unknown field name halts a call.

pub mod presence;

use alloc::{vec, vec::Vec};

use thiserror::Error;

use crate::{
    field::{self, FieldError},
    record::{FromRecord, Record, ToRecord, ValueError},
    schema::{Encoding, Framing, Registry, SegmentKind, UnknownField},
};

/// Errors halting the decoding or encoding of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The buffer is shorter than the segment layout.
    #[error("Buffer of {actual} bytes is shorter than the segment ({required} bytes).")]
    BufferTooShort { required: usize, actual: usize },
    /// A record names a field missing from the segment layout.
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    /// A decoded record does not fit the requested type.
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// A problem with one field of a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Name of the field.
    pub field: &'static str,
    pub error: FieldError,
}

/// A decoded or encoded segment, with any problems found along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    /// The record or buffer. Fields with findings are absent from a record,
    /// and hold their absent pattern in a buffer.
    pub value: T,
    /// Problems, ordered by field offset.
    pub findings: Vec<Finding>,
}

impl<T> Outcome<T> {
    /// Whether no problems were found.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Treat any finding as a failure.
    pub fn into_result(self) -> Result<T, Vec<Finding>> {
        if self.findings.is_empty() {
            Ok(self.value)
        } else {
            Err(self.findings)
        }
    }
}

/// A struct representing one kind of segment.
///
/// Typed models of the built-in segments are provided in the
/// [`models`](crate::models) module.
pub trait Segment: FromRecord + ToRecord {
    const KIND: SegmentKind;
}

/// Decodes and encodes segments against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'r> {
    registry: &'r Registry,
    framing: Framing,
}

impl<'r> Codec<'r> {
    /// Create a codec for segments without block-length prefixes.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            framing: Framing::default(),
        }
    }

    /// Set the transport framing of the segments.
    pub fn framing(self, framing: Framing) -> Self {
        Self { framing, ..self }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Decode a segment from the front of a buffer.
    ///
    /// Bytes past the end of the segment are ignored.
    pub fn decode(
        &self,
        kind: SegmentKind,
        encoding: Encoding,
        r: &[u8],
    ) -> Result<Outcome<Record>, Error> {
        let schema = self.registry.schema(kind, encoding);

        let too_short = || Error::BufferTooShort {
            required: schema.len(),
            actual: r.len(),
        };

        if r.len() < schema.len() {
            Err(too_short())?;
        }

        let mut record = Record::new();
        let mut findings = Vec::new();

        for (name, spec) in schema.interpreted(self.framing) {
            tracing::trace!(field = name, start = spec.start, length = spec.length, "Decoding field");

            let bytes = r.get(spec.range()).ok_or_else(too_short)?;

            match field::decode(spec, bytes) {
                Ok(Some(value)) => {
                    record.insert(name, value);
                }
                Ok(None) => findings.extend(presence::check(name, spec, None)),
                Err(error) => findings.push(Finding { field: name, error }),
            }
        }

        tracing::debug!(
            %kind,
            %encoding,
            framing = ?self.framing,
            findings = findings.len(),
            "Decoded segment"
        );

        Ok(Outcome {
            value: record,
            findings,
        })
    }

    /// Encode a record as a segment.
    ///
    /// Fields absent from the record are written as their absent pattern.
    /// Fails if the record names a field the segment layout does not have.
    pub fn encode(
        &self,
        kind: SegmentKind,
        encoding: Encoding,
        record: &Record,
    ) -> Result<Outcome<Vec<u8>>, Error> {
        let schema = self.registry.schema(kind, encoding);

        for (name, _) in record.iter() {
            schema.lookup(name)?;
        }

        let mut buffer = vec![encoding.default_fill(); schema.len()];
        let mut findings = Vec::new();

        for (name, spec) in schema.interpreted(self.framing) {
            tracing::trace!(field = name, start = spec.start, length = spec.length, "Encoding field");

            let value = record.get(name);
            findings.extend(presence::check(name, spec, value));

            // Schema construction keeps every field within the segment.
            let out = &mut buffer[spec.range()];

            if let Err(error) = field::encode(spec, value, out) {
                findings.push(Finding { field: name, error });
            }
        }

        tracing::debug!(
            %kind,
            %encoding,
            framing = ?self.framing,
            findings = findings.len(),
            "Encoded segment"
        );

        Ok(Outcome {
            value: buffer,
            findings,
        })
    }

    /// Check the presence requirements of a record without encoding it.
    pub fn validate(&self, kind: SegmentKind, encoding: Encoding, record: &Record) -> Vec<Finding> {
        let schema = self.registry.schema(kind, encoding);
        presence::validate(schema, self.framing, record)
    }

    /// Decode a segment into a typed model.
    pub fn decode_as<S: Segment>(&self, encoding: Encoding, r: &[u8]) -> Result<Outcome<S>, Error> {
        let Outcome { value, findings } = self.decode(S::KIND, encoding, r)?;

        Ok(Outcome {
            value: S::from_record(&value)?,
            findings,
        })
    }

    /// Encode a typed model as a segment.
    pub fn encode_from<S: Segment>(
        &self,
        encoding: Encoding,
        segment: &S,
    ) -> Result<Outcome<Vec<u8>>, Error> {
        self.encode(S::KIND, encoding, &segment.to_record())
    }
}
