//! Construction and lookup of segment schemas.

use alloc::{string::String, vec::Vec};

use thiserror::Error;

use super::{
    Encoding, FieldSpec, FieldType, Framing, SegmentKind,
    tables::{self, Table},
};

/// An error constructing a schema or registry. Each variant is a defect in
/// the layout tables, so a registry reporting one refuses to initialize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A field has no bytes.
    #[error("Field {field} has zero length.")]
    ZeroLength { field: &'static str },
    /// A field ends past the declared segment length.
    #[error("Field {field} ends at byte {end}, past the segment length ({length}).")]
    OutOfBounds {
        field: &'static str,
        end: usize,
        length: usize,
    },
    /// A fixed-size field type has the wrong length.
    #[error("Field {field} must be {expected} bytes long, not {actual}.")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A field type is not representable in the schema's encoding.
    #[error("Field {field} of type {field_type:?} cannot appear in a {encoding} layout.")]
    EncodingMismatch {
        field: &'static str,
        field_type: FieldType,
        encoding: Encoding,
    },
    /// A field option does not apply to the field.
    #[error("Field {field} has an invalid option: {reason}.")]
    InvalidOption {
        field: &'static str,
        reason: &'static str,
    },
    /// A numeric field holds more digits than an unsigned 64-bit integer.
    #[error("Field {field} holds {digits} digits, more than an integer can.")]
    TooWide { field: &'static str, digits: usize },
    /// A field name appears twice.
    #[error("Field {field} is listed more than once.")]
    DuplicateField { field: &'static str },
    /// Fields are not listed in ascending offset order.
    #[error("Field {field} is listed before a field at a lower offset.")]
    Unordered { field: &'static str },
    /// Two fields share bytes without being descriptor-word alternatives.
    #[error("Fields {first} and {second} overlap.")]
    Overlap {
        first: &'static str,
        second: &'static str,
    },
    /// The two encodings of a segment list different fields.
    #[error("The {kind} layouts disagree: {character:?} (character) against {packed:?} (packed).")]
    AsymmetricEncodings {
        kind: SegmentKind,
        character: Option<&'static str>,
        packed: Option<&'static str>,
    },
    /// A segment kind and encoding pair has no schema.
    #[error("No {encoding} layout was supplied for the {kind}.")]
    MissingSchema {
        kind: SegmentKind,
        encoding: Encoding,
    },
    /// A segment kind and encoding pair has more than one schema.
    #[error("More than one {encoding} layout was supplied for the {kind}.")]
    DuplicateSchema {
        kind: SegmentKind,
        encoding: Encoding,
    },
}

/// A field name absent from a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No field named {name} in the {encoding} {kind} layout.")]
pub struct UnknownField {
    pub kind: SegmentKind,
    pub encoding: Encoding,
    pub name: String,
}

/// The ordered field specifications of one segment kind in one encoding.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    kind: SegmentKind,
    encoding: Encoding,
    length: usize,
    fields: Table,
}

impl Schema {
    /// Check a table of fields and wrap it as a schema.
    ///
    /// Fields must be listed in ascending offset order and fit within
    /// `length` bytes. The only overlap permitted is between an omitted field
    /// and a non-omitted field spanning exactly the same bytes.
    pub fn new(
        kind: SegmentKind,
        encoding: Encoding,
        length: usize,
        fields: &'static [(&'static str, FieldSpec)],
    ) -> Result<Self, SchemaError> {
        let mut previous_start = 0;

        for (i, &(field, spec)) in fields.iter().enumerate() {
            check_field(field, &spec, encoding)?;

            if spec.end() > length {
                Err(SchemaError::OutOfBounds {
                    field,
                    end: spec.end(),
                    length,
                })?;
            }

            if spec.start < previous_start {
                Err(SchemaError::Unordered { field })?;
            }
            previous_start = spec.start;

            for &(other, other_spec) in &fields[..i] {
                if other == field {
                    Err(SchemaError::DuplicateField { field })?;
                }

                if other_spec.overlaps(&spec) && !are_alternatives(&other_spec, &spec) {
                    Err(SchemaError::Overlap {
                        first: other,
                        second: field,
                    })?;
                }
            }
        }

        // Every omitted field must stand in for a non-omitted one.
        for &(field, spec) in fields.iter().filter(|(_, s)| s.options.omitted()) {
            if !fields.iter().any(|(_, other)| are_alternatives(other, &spec)) {
                Err(SchemaError::InvalidOption {
                    field,
                    reason: "omitted without a field sharing its bytes",
                })?;
            }
        }

        Ok(Self {
            kind,
            encoding,
            length,
            fields,
        })
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Total byte length of a segment in this layout.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Look up the specification of a named field.
    pub fn get(&self, name: &str) -> Option<&'static FieldSpec> {
        let fields: Table = self.fields;
        fields.iter().find(|(n, _)| *n == name).map(|(_, s)| s)
    }

    /// Look up the specification of a named field, failing for unknown names.
    pub fn lookup(&self, name: &str) -> Result<&'static FieldSpec, UnknownField> {
        self.get(name).ok_or_else(|| UnknownField {
            kind: self.kind,
            encoding: self.encoding,
            name: name.into(),
        })
    }

    /// All fields, in ascending offset order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &'static FieldSpec)> + use<> {
        let fields: Table = self.fields;
        fields.iter().map(|(n, s)| (*n, s))
    }

    /// The fields interpreted under a framing convention, in ascending offset
    /// order.
    ///
    /// Under [`Framing::Record`] omitted fields are skipped. Under
    /// [`Framing::Block`] omitted fields are interpreted instead of the
    /// fields they share bytes with.
    pub fn interpreted(
        &self,
        framing: Framing,
    ) -> impl Iterator<Item = (&'static str, &'static FieldSpec)> + use<> {
        let fields: Table = self.fields;

        self.fields().filter(move |(_, spec)| match framing {
            Framing::Record => !spec.options.omitted(),
            Framing::Block => {
                spec.options.omitted()
                    || !fields.iter().any(|(_, other)| are_alternatives(other, spec))
            }
        })
    }
}

fn check_field(field: &'static str, spec: &FieldSpec, encoding: Encoding) -> Result<(), SchemaError> {
    let field_type = spec.field_type;

    if spec.length == 0 {
        Err(SchemaError::ZeroLength { field })?;
    }

    if let Some(expected) = field_type.fixed_length() {
        if spec.length != expected {
            Err(SchemaError::LengthMismatch {
                field,
                expected,
                actual: spec.length,
            })?;
        }
    }

    let representable = match encoding {
        Encoding::Character => field_type.is_character(),
        Encoding::Packed => !matches!(field_type, FieldType::Date | FieldType::Timestamp),
    };
    if !representable {
        Err(SchemaError::EncodingMismatch {
            field,
            field_type,
            encoding,
        })?;
    }

    if spec.options.zero_fill() && field_type == FieldType::Descriptor {
        Err(SchemaError::InvalidOption {
            field,
            reason: "descriptor words have no fill",
        })?;
    }

    let digits = match field_type {
        FieldType::Numeric => spec.length,
        FieldType::PackedNumber => spec.length * 2,
        _ => 0,
    };
    if digits > MAX_DIGITS {
        Err(SchemaError::TooWide { field, digits })?;
    }

    Ok(())
}

/// Decimal digits that always fit in a `u64`.
const MAX_DIGITS: usize = 19;

/// Whether one of two fields is omitted and stands in for the other.
fn are_alternatives(a: &FieldSpec, b: &FieldSpec) -> bool {
    a.options.omitted() != b.options.omitted() && a.range() == b.range()
}

/// Every schema, one per segment kind and encoding.
///
/// A registry is immutable once built and may be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct Registry {
    schemas: Vec<Schema>,
}

impl Registry {
    /// Build the registry of the built-in layout tables.
    pub fn new() -> Result<Self, SchemaError> {
        let built = built_in().and_then(Self::from_schemas);

        if let Err(error) = &built {
            tracing::warn!(%error, "Refusing to build the segment registry");
        }

        built
    }

    /// Assemble a registry from one schema per segment kind and encoding,
    /// checking that both encodings of each kind list the same fields in the
    /// same order.
    pub fn from_schemas(schemas: impl IntoIterator<Item = Schema>) -> Result<Self, SchemaError> {
        let mut slots: [Option<Schema>; 6] = [None; 6];

        for schema in schemas {
            let slot = &mut slots[index(schema.kind, schema.encoding)];

            if slot.is_some() {
                Err(SchemaError::DuplicateSchema {
                    kind: schema.kind,
                    encoding: schema.encoding,
                })?;
            }

            *slot = Some(schema);
        }

        let mut schemas = Vec::with_capacity(slots.len());

        for kind in SegmentKind::ALL {
            for encoding in Encoding::ALL {
                let schema = slots[index(kind, encoding)]
                    .ok_or(SchemaError::MissingSchema { kind, encoding })?;
                schemas.push(schema);
            }

            let character = &schemas[index(kind, Encoding::Character)];
            let packed = &schemas[index(kind, Encoding::Packed)];
            check_symmetry(character, packed)?;
        }

        tracing::debug!(schemas = schemas.len(), "Built segment registry");

        Ok(Self { schemas })
    }

    /// The schema of a segment kind in an encoding.
    pub fn schema(&self, kind: SegmentKind, encoding: Encoding) -> &Schema {
        &self.schemas[index(kind, encoding)]
    }

    /// Look up the specification of a named field.
    pub fn lookup(
        &self,
        kind: SegmentKind,
        encoding: Encoding,
        name: &str,
    ) -> Result<&'static FieldSpec, UnknownField> {
        self.schema(kind, encoding).lookup(name)
    }

    /// All fields of a segment kind in an encoding, in ascending offset order.
    pub fn fields(
        &self,
        kind: SegmentKind,
        encoding: Encoding,
    ) -> impl Iterator<Item = (&'static str, &'static FieldSpec)> + use<> {
        self.schema(kind, encoding).fields()
    }
}

fn built_in() -> Result<[Schema; 6], SchemaError> {
    use Encoding::{Character, Packed};
    use SegmentKind::{Base, Header, Trailer};

    let (character, packed) = (tables::CHARACTER_LENGTH, tables::PACKED_LENGTH);

    Ok([
        Schema::new(Base, Character, character, tables::BASE_CHARACTER)?,
        Schema::new(Base, Packed, packed, tables::BASE_PACKED)?,
        Schema::new(Header, Character, character, tables::HEADER_CHARACTER)?,
        Schema::new(Header, Packed, packed, tables::HEADER_PACKED)?,
        Schema::new(Trailer, Character, character, tables::TRAILER_CHARACTER)?,
        Schema::new(Trailer, Packed, packed, tables::TRAILER_PACKED)?,
    ])
}

/// Position of a schema in a registry.
fn index(kind: SegmentKind, encoding: Encoding) -> usize {
    let kind = match kind {
        SegmentKind::Base => 0,
        SegmentKind::Header => 1,
        SegmentKind::Trailer => 2,
    };
    let encoding = match encoding {
        Encoding::Character => 0,
        Encoding::Packed => 1,
    };

    kind * 2 + encoding
}

fn check_symmetry(character: &Schema, packed: &Schema) -> Result<(), SchemaError> {
    let mut character_names = character.fields().map(|(n, _)| n);
    let mut packed_names = packed.fields().map(|(n, _)| n);

    loop {
        match (character_names.next(), packed_names.next()) {
            (None, None) => return Ok(()),
            (c, p) if c == p => continue,
            (character_name, packed_name) => Err(SchemaError::AsymmetricEncodings {
                kind: character.kind,
                character: character_name,
                packed: packed_name,
            })?,
        }
    }
}

/// The process-wide registry of the built-in layout tables, built on first
/// use.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
pub fn registry() -> Result<&'static Registry, SchemaError> {
    static REGISTRY: std::sync::OnceLock<Result<Registry, SchemaError>> =
        std::sync::OnceLock::new();

    REGISTRY.get_or_init(Registry::new).as_ref().map_err(Clone::clone)
}
