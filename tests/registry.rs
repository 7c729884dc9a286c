#![cfg(feature = "std")]

use tradeline::schema::{
    Encoding, FieldSpec, FieldType, Framing, Options, Presence, Registry, Schema, SchemaError,
    SegmentKind, registry,
};

type Table = &'static [(&'static str, FieldSpec)];

const fn field(start: usize, length: usize, field_type: FieldType, options: Options) -> FieldSpec {
    FieldSpec::new(start, length, field_type, options, Presence::Nullable)
}

#[test]
fn built_in_lengths() {
    let registry = registry().unwrap();

    for kind in SegmentKind::ALL {
        for (encoding, length) in [(Encoding::Character, 426), (Encoding::Packed, 366)] {
            let schema = registry.schema(kind, encoding);
            assert_eq!(schema.len(), length, "{encoding} {kind}");

            // Interpreted fields tile the segment under either framing.
            for framing in [Framing::Record, Framing::Block] {
                let mut end = 0;
                for (name, spec) in schema.interpreted(framing) {
                    assert_eq!(spec.start, end, "{encoding} {kind}: {name}");
                    end = spec.end();
                }
                assert_eq!(end, length, "{encoding} {kind}");
            }
        }
    }
}

#[test]
fn built_in_encodings_are_symmetric() {
    let registry = registry().unwrap();

    for kind in SegmentKind::ALL {
        let character: Vec<_> = registry.fields(kind, Encoding::Character).map(|(n, _)| n).collect();
        let packed: Vec<_> = registry.fields(kind, Encoding::Packed).map(|(n, _)| n).collect();
        assert_eq!(character, packed);
    }
}

#[test]
fn built_in_lookup() {
    let registry = registry().unwrap();

    let spec = registry
        .lookup(SegmentKind::Base, Encoding::Packed, "DateOpened")
        .unwrap();
    assert_eq!(spec.start, 69);
    assert_eq!(spec.length, 5);
    assert_eq!(spec.field_type, FieldType::PackedDate);
    assert_eq!(spec.presence, Presence::Required);

    let error = registry
        .lookup(SegmentKind::Header, Encoding::Character, "Surname")
        .unwrap_err();
    assert_eq!(error.name, "Surname");
    assert_eq!(error.kind, SegmentKind::Header);
}

#[test]
fn trailer_has_no_block_descriptor() {
    let registry = registry().unwrap();

    for encoding in Encoding::ALL {
        let schema = registry.schema(SegmentKind::Trailer, encoding);
        assert!(schema.get("BlockDescriptorWord").is_none());

        let record: Vec<_> = schema.interpreted(Framing::Record).map(|(n, _)| n).collect();
        let block: Vec<_> = schema.interpreted(Framing::Block).map(|(n, _)| n).collect();
        assert_eq!(record, block);
    }
}

#[test]
fn block_framing_swaps_descriptor_words() {
    let schema = registry()
        .unwrap()
        .schema(SegmentKind::Base, Encoding::Packed);

    let first = |framing| schema.interpreted(framing).next().map(|(n, _)| n);
    assert_eq!(first(Framing::Record), Some("RecordDescriptorWord"));
    assert_eq!(first(Framing::Block), Some("BlockDescriptorWord"));
}

#[test]
fn registry_is_shared() {
    assert!(std::ptr::eq(registry().unwrap(), registry().unwrap()));
}

fn schema_error(encoding: Encoding, length: usize, fields: Table) -> SchemaError {
    Schema::new(SegmentKind::Base, encoding, length, fields).unwrap_err()
}

#[test]
fn zero_length() {
    static FIELDS: Table = &[("A", field(0, 0, FieldType::Alphanumeric, Options::NONE))];

    assert_eq!(
        schema_error(Encoding::Character, 4, FIELDS),
        SchemaError::ZeroLength { field: "A" }
    );
}

#[test]
fn out_of_bounds() {
    static FIELDS: Table = &[
        ("A", field(0, 2, FieldType::Alphanumeric, Options::NONE)),
        ("B", field(2, 3, FieldType::Alphanumeric, Options::NONE)),
    ];

    assert_eq!(
        schema_error(Encoding::Character, 4, FIELDS),
        SchemaError::OutOfBounds {
            field: "B",
            end: 5,
            length: 4
        }
    );
}

#[test]
fn length_mismatch() {
    static FIELDS: Table = &[("A", field(0, 6, FieldType::Date, Options::NONE))];

    assert_eq!(
        schema_error(Encoding::Character, 8, FIELDS),
        SchemaError::LengthMismatch {
            field: "A",
            expected: 8,
            actual: 6
        }
    );
}

#[test]
fn encoding_mismatch() {
    static PACKED_IN_CHARACTER: Table = &[("A", field(0, 5, FieldType::PackedDate, Options::NONE))];
    static DATE_IN_PACKED: Table = &[("A", field(0, 8, FieldType::Date, Options::NONE))];

    assert_eq!(
        schema_error(Encoding::Character, 8, PACKED_IN_CHARACTER),
        SchemaError::EncodingMismatch {
            field: "A",
            field_type: FieldType::PackedDate,
            encoding: Encoding::Character
        }
    );
    assert_eq!(
        schema_error(Encoding::Packed, 8, DATE_IN_PACKED),
        SchemaError::EncodingMismatch {
            field: "A",
            field_type: FieldType::Date,
            encoding: Encoding::Packed
        }
    );
}

#[test]
fn invalid_options() {
    static ZERO_FILLED_DESCRIPTOR: Table =
        &[("A", field(0, 4, FieldType::Descriptor, Options::ZERO_FILL))];
    static LONE_OMITTED: Table = &[("A", field(0, 4, FieldType::Numeric, Options::OMITTED))];

    assert!(matches!(
        schema_error(Encoding::Packed, 4, ZERO_FILLED_DESCRIPTOR),
        SchemaError::InvalidOption { field: "A", .. }
    ));
    assert!(matches!(
        schema_error(Encoding::Character, 4, LONE_OMITTED),
        SchemaError::InvalidOption { field: "A", .. }
    ));
}

#[test]
fn too_wide() {
    static NUMERIC: Table = &[("A", field(0, 20, FieldType::Numeric, Options::NONE))];
    static PACKED: Table = &[("A", field(0, 10, FieldType::PackedNumber, Options::NONE))];

    assert_eq!(
        schema_error(Encoding::Character, 20, NUMERIC),
        SchemaError::TooWide {
            field: "A",
            digits: 20
        }
    );
    assert_eq!(
        schema_error(Encoding::Packed, 10, PACKED),
        SchemaError::TooWide {
            field: "A",
            digits: 20
        }
    );
}

#[test]
fn duplicate_field() {
    static FIELDS: Table = &[
        ("A", field(0, 2, FieldType::Alphanumeric, Options::NONE)),
        ("A", field(2, 2, FieldType::Alphanumeric, Options::NONE)),
    ];

    assert_eq!(
        schema_error(Encoding::Character, 4, FIELDS),
        SchemaError::DuplicateField { field: "A" }
    );
}

#[test]
fn unordered() {
    static FIELDS: Table = &[
        ("A", field(2, 2, FieldType::Alphanumeric, Options::NONE)),
        ("B", field(0, 2, FieldType::Alphanumeric, Options::NONE)),
    ];

    assert_eq!(
        schema_error(Encoding::Character, 4, FIELDS),
        SchemaError::Unordered { field: "B" }
    );
}

#[test]
fn overlap() {
    static FIELDS: Table = &[
        ("A", field(0, 3, FieldType::Alphanumeric, Options::NONE)),
        ("B", field(2, 2, FieldType::Alphanumeric, Options::NONE)),
    ];

    assert_eq!(
        schema_error(Encoding::Character, 4, FIELDS),
        SchemaError::Overlap {
            first: "A",
            second: "B"
        }
    );
}

#[test]
fn omitted_alternative_may_overlap() {
    static FIELDS: Table = &[
        ("A", field(0, 4, FieldType::Numeric, Options::OMITTED)),
        ("B", field(0, 4, FieldType::Numeric, Options::NONE)),
    ];

    Schema::new(SegmentKind::Base, Encoding::Character, 4, FIELDS).unwrap();
}

static CHARACTER: Table = &[
    ("A", field(0, 2, FieldType::Numeric, Options::NONE)),
    ("B", field(2, 2, FieldType::Alphanumeric, Options::NONE)),
];
static PACKED: Table = &[
    ("A", field(0, 1, FieldType::PackedNumber, Options::NONE)),
    ("B", field(1, 2, FieldType::Alphanumeric, Options::NONE)),
];
static PACKED_RENAMED: Table = &[
    ("A", field(0, 1, FieldType::PackedNumber, Options::NONE)),
    ("C", field(1, 2, FieldType::Alphanumeric, Options::NONE)),
];

/// One schema per segment kind and encoding, with `packed` as the base
/// segment's packed layout.
fn schemas(packed: Table) -> Vec<Schema> {
    SegmentKind::ALL
        .into_iter()
        .flat_map(|kind| {
            let fields = if kind == SegmentKind::Base { packed } else { PACKED };
            [
                Schema::new(kind, Encoding::Character, 4, CHARACTER).unwrap(),
                Schema::new(kind, Encoding::Packed, 3, fields).unwrap(),
            ]
        })
        .collect()
}

#[test]
fn from_schemas() {
    let registry = Registry::from_schemas(schemas(PACKED)).unwrap();
    assert_eq!(registry.schema(SegmentKind::Trailer, Encoding::Packed).len(), 3);
}

#[test]
fn asymmetric_encodings() {
    assert_eq!(
        Registry::from_schemas(schemas(PACKED_RENAMED)).unwrap_err(),
        SchemaError::AsymmetricEncodings {
            kind: SegmentKind::Base,
            character: Some("B"),
            packed: Some("C")
        }
    );
}

#[test]
fn missing_schema() {
    let mut schemas = schemas(PACKED);
    schemas.retain(|s| (s.kind(), s.encoding()) != (SegmentKind::Header, Encoding::Packed));

    assert_eq!(
        Registry::from_schemas(schemas).unwrap_err(),
        SchemaError::MissingSchema {
            kind: SegmentKind::Header,
            encoding: Encoding::Packed
        }
    );
}

#[test]
fn duplicate_schema() {
    let mut schemas = schemas(PACKED);
    let first = schemas[0];
    schemas.push(first);

    assert_eq!(
        Registry::from_schemas(schemas).unwrap_err(),
        SchemaError::DuplicateSchema {
            kind: SegmentKind::Base,
            encoding: Encoding::Character
        }
    );
}
