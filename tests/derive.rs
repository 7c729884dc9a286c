#![cfg(all(feature = "derive", feature = "std"))]

use chrono::NaiveDate;
use tradeline::{
    models::{BaseSegment, HeaderRecord, TrailerRecord},
    record::{FromRecord, Record, ToRecord, ValueError},
    schema::{Encoding, Framing, registry},
    segment::Codec,
};

const CHARACTER: &str = "fixtures/base-character.dat";
const PACKED: &str = "fixtures/base-packed.dat";

#[test]
fn decode_base_segment() {
    let data = std::fs::read(CHARACTER).unwrap();
    let codec = Codec::new(registry().unwrap());

    let segment: BaseSegment = codec
        .decode_as(Encoding::Character, &data)
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(segment.record_descriptor_word, Some(426));
    assert_eq!(segment.block_descriptor_word, None);
    assert_eq!(segment.surname.as_deref(), Some("DOE"));
    assert_eq!(segment.date_opened, NaiveDate::from_ymd_opt(2019, 6, 1));
    assert_eq!(segment.credit_limit, Some(0));
    assert_eq!(segment.original_charge_off_amount, None);
    assert_eq!(segment.cycle_identifier, None);

    let encoded = codec.encode_from(Encoding::Character, &segment).unwrap();
    assert_eq!(encoded.value, data);
}

#[test]
fn base_segment_block_framing() {
    let data = std::fs::read(PACKED).unwrap();
    let codec = Codec::new(registry().unwrap()).framing(Framing::Block);

    let segment: BaseSegment = codec.decode_as(Encoding::Packed, &data).unwrap().value;
    assert_eq!(segment.block_descriptor_word, Some(366));
    assert_eq!(segment.record_descriptor_word, None);
    assert_eq!(segment.original_charge_off_amount, Some(0));
}

#[test]
fn trailer_record() {
    let codec = Codec::new(registry().unwrap());
    let trailer = TrailerRecord {
        record_descriptor_word: Some(366),
        record_identifier: Some("TRAILER".into()),
        total_base_records: Some(1),
        block_count: Some(1),
        total_status_code_11: Some(1),
        ..Default::default()
    };

    let encoded = codec
        .encode_from(Encoding::Packed, &trailer)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(&encoded[4..11], b"TRAILER");
    assert_eq!(encoded[11..16], [0x00, 0x00, 0x00, 0x00, 0x01]);

    // Packed counts decode as zero rather than absent.
    let decoded: TrailerRecord = codec.decode_as(Encoding::Packed, &encoded).unwrap().value;
    assert_eq!(decoded.total_base_records, Some(1));
    assert_eq!(decoded.total_status_code_05, Some(0));
}

#[test]
fn header_record_missing_fields() {
    let codec = Codec::new(registry().unwrap());

    let outcome = codec
        .encode_from(Encoding::Character, &HeaderRecord::default())
        .unwrap();
    assert!(!outcome.is_clean());
    assert!(outcome.value.iter().all(|&b| b == b' ' || b == b'0'));
}

#[test]
fn descriptor_out_of_range() {
    let mut record = Record::new();
    record.insert("RecordDescriptorWord", 5_000_000_000u64);

    assert_eq!(
        BaseSegment::from_record(&record),
        Err(ValueError {
            field: "RecordDescriptorWord".into(),
            expected: "32-bit integer",
            found: "integer"
        })
    );
}

#[derive(Debug, Default, PartialEq, FromRecord, ToRecord)]
struct Opening {
    #[field("DateOpened")]
    date_opened: Option<NaiveDate>,
    #[field("CreditLimit")]
    credit_limit: Option<u64>,
    note: String,
}

#[test]
fn custom_struct() {
    let mut record = Record::new();
    record.insert("DateOpened", NaiveDate::from_ymd_opt(2019, 6, 1).unwrap());
    record.insert("Surname", "DOE");

    let opening = Opening::from_record(&record).unwrap();
    assert_eq!(
        opening,
        Opening {
            date_opened: NaiveDate::from_ymd_opt(2019, 6, 1),
            credit_limit: None,
            note: String::new(),
        }
    );

    let mut expected = record.clone();
    expected.remove("Surname");
    assert_eq!(opening.to_record(), expected);
}

#[test]
fn custom_struct_type_mismatch() {
    let mut record = Record::new();
    record.insert("CreditLimit", "5000");

    assert_eq!(
        Opening::from_record(&record),
        Err(ValueError {
            field: "CreditLimit".into(),
            expected: "integer",
            found: "text"
        })
    );
}
