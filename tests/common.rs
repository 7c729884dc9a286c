#![cfg(feature = "std")]

use std::collections::BTreeMap;

use csv::Reader;
use tradeline::{
    schema::{Encoding, SegmentKind, registry},
    segment::Codec,
};

#[test]
fn decode_base_character() {
    const PATH: &str = "fixtures/base-character.dat";
    validate(PATH, Encoding::Character, "character");
}

#[test]
fn decode_base_packed() {
    const PATH: &str = "fixtures/base-packed.dat";
    validate(PATH, Encoding::Packed, "packed");
}

/// Decode a fixture, compare every field with its column of the CSV file, and
/// check that encoding the record reproduces the fixture.
fn validate(path: &str, encoding: Encoding, column: &str) {
    let data = std::fs::read(path).unwrap();
    let codec = Codec::new(registry().unwrap());

    let outcome = codec.decode(SegmentKind::Base, encoding, &data).unwrap();
    assert!(outcome.is_clean(), "{:?}", outcome.findings);

    let record = outcome.value;
    let decoded: BTreeMap<String, String> = record
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    assert_eq!(decoded, expected(column));

    let encoded = codec.encode(SegmentKind::Base, encoding, &record).unwrap();
    assert!(encoded.is_clean(), "{:?}", encoded.findings);
    assert_eq!(encoded.value, data);
}

/// Present fields of one encoding, displayed. Empty cells are absent fields.
fn expected(column: &str) -> BTreeMap<String, String> {
    let mut reader = Reader::from_path("fixtures/base.csv").unwrap();
    let headers = reader.headers().unwrap().clone();
    let index = headers.iter().position(|h| h == column).unwrap();

    reader
        .records()
        .map(|r| r.unwrap())
        .filter(|r| !r[index].is_empty())
        .map(|r| (r[0].to_string(), r[index].to_string()))
        .collect()
}
