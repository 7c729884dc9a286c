//! Conversion of single fields between bytes and [`Value`]s.
//!
//! [`decode`] and [`encode`] handle exactly the bytes of one field, as placed
//! by a [`FieldSpec`]. An absent value is represented by `None`:
//!
//! - text fields are absent when every byte is the fill character;
//! - numeric fields are absent when blank. A zero-filled numeric field
//!   decodes to zero, and may hold nothing but digits;
//! - character dates and timestamps are absent when blank or all `'0'`;
//! - packed dates and timestamps are absent when all zero;
//! - packed numbers and descriptor words are never absent. An all-zero packed
//!   number is a zero; whether a zero is meaningful for a field is left to the
//!   caller.

pub mod bcd;

use alloc::string::String;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;
use zerocopy::byteorder::big_endian::U32;

use crate::{
    record::Value,
    schema::{FieldSpec, FieldType},
};

/// A problem with the content of one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A numeric field holds a character other than a digit or blank.
    #[error("Found {found:?} in a numeric field.")]
    InvalidNumericField { found: char },
    /// A packed field holds a nibble outside 0 to 9.
    #[error("Found nibble {nibble:#x} in a packed field.")]
    InvalidPackedDigit { nibble: u8 },
    /// A date or timestamp field does not hold a calendar date or time.
    #[error("Found an invalid date or time.")]
    InvalidDate,
    /// A value does not fit the field.
    #[error("Value of length {length} exceeds the field capacity ({capacity}).")]
    ValueTooLong { length: usize, capacity: usize },
    /// A value is of a type the field cannot hold.
    #[error("A {field_type:?} field cannot hold a {found} value.")]
    TypeMismatch {
        field_type: FieldType,
        found: &'static str,
    },
    /// A text value holds a character with no single-byte encoding.
    #[error("Character {0:?} cannot be encoded in a single byte.")]
    UnencodableCharacter(char),
    /// The bytes given for a field are not of the field's length.
    #[error("Expected {expected} bytes for the field, found {actual}.")]
    WrongLength { expected: usize, actual: usize },
    /// A required field is empty.
    #[error("A required field is empty.")]
    MissingRequiredField,
}

/// Decode the bytes of a field.
///
/// Returns `None` for an absent value.
pub fn decode(spec: &FieldSpec, r: &[u8]) -> Result<Option<Value>, FieldError> {
    if r.len() != spec.length {
        Err(FieldError::WrongLength {
            expected: spec.length,
            actual: r.len(),
        })?;
    }

    let value = match spec.field_type {
        FieldType::Alphanumeric | FieldType::Alpha => decode_text(r, spec.fill()).map(Value::Text),
        FieldType::Numeric => decode_numeric(r, spec.fill())?.map(Value::Integer),
        FieldType::Date => {
            if is_blank_or_zero(r) {
                None
            } else {
                Some(Value::Date(parse_date(r)?))
            }
        }
        FieldType::Timestamp => {
            if is_blank_or_zero(r) {
                None
            } else {
                Some(Value::Timestamp(parse_timestamp(r)?))
            }
        }
        FieldType::PackedDate => {
            let mut digits = [0; 10];
            bcd::unpack(r, &mut digits)?;
            unpadded(&digits, 8)?
                .map(parse_date)
                .transpose()?
                .map(Value::Date)
        }
        FieldType::PackedTimestamp => {
            let mut digits = [0; 16];
            bcd::unpack(r, &mut digits)?;
            unpadded(&digits, 14)?
                .map(parse_timestamp)
                .transpose()?
                .map(Value::Timestamp)
        }
        FieldType::PackedNumber => {
            let mut digits = [0; MAX_PACKED_BYTES * 2];
            check_packed_width(r.len())?;
            let n = bcd::unpack(r, &mut digits)?;
            Some(Value::Integer(parse_digits(&digits[..n])?))
        }
        FieldType::Descriptor => {
            let r: [u8; 4] = r.try_into().map_err(|_| FieldError::WrongLength {
                expected: 4,
                actual: r.len(),
            })?;
            let word: U32 = zerocopy::transmute!(r);

            Some(Value::Integer(word.get().into()))
        }
    };

    Ok(value)
}

/// Encode a value into the bytes of a field.
///
/// `None` writes the field's absent pattern: its fill character for text
/// types, and zero bytes for packed types and descriptor words. If the value
/// cannot be encoded, the absent pattern is written and an error returned.
pub fn encode(spec: &FieldSpec, value: Option<&Value>, out: &mut [u8]) -> Result<(), FieldError> {
    if out.len() != spec.length {
        Err(FieldError::WrongLength {
            expected: spec.length,
            actual: out.len(),
        })?;
    }

    let result = match value {
        Some(value) => encode_value(spec, value, out),
        None => Ok(()),
    };

    if value.is_none() || result.is_err() {
        write_absent(spec, out);
    }

    result
}

fn encode_value(spec: &FieldSpec, value: &Value, out: &mut [u8]) -> Result<(), FieldError> {
    let field_type = spec.field_type;

    match (field_type, value) {
        (FieldType::Alphanumeric | FieldType::Alpha, Value::Text(text)) => {
            encode_text(text, spec.fill(), out)
        }
        (FieldType::Numeric, Value::Integer(n)) => write_digits(*n, out),
        (FieldType::Date, Value::Date(date)) => write_date(date, out),
        (FieldType::Timestamp, Value::Timestamp(timestamp)) => write_timestamp(timestamp, out),
        (FieldType::PackedDate, Value::Date(date)) => {
            let digits = &mut [b'0'; 10];
            write_date(date, &mut digits[2..])?;
            bcd::pack(digits, out)
        }
        (FieldType::PackedTimestamp, Value::Timestamp(timestamp)) => {
            let digits = &mut [b'0'; 16];
            write_timestamp(timestamp, &mut digits[2..])?;
            bcd::pack(digits, out)
        }
        (FieldType::PackedNumber, Value::Integer(n)) => {
            check_packed_width(out.len())?;
            let mut digits = [b'0'; MAX_PACKED_BYTES * 2];
            let digits = &mut digits[..out.len() * 2];
            write_digits(*n, digits)?;
            bcd::pack(digits, out)
        }
        (FieldType::Descriptor, Value::Integer(n)) => {
            let word = u32::try_from(*n).map_err(|_| FieldError::ValueTooLong {
                length: digit_count(*n),
                capacity: digit_count(u32::MAX.into()),
            })?;
            let bytes: [u8; 4] = zerocopy::transmute!(U32::new(word));
            out.copy_from_slice(&bytes);
            Ok(())
        }
        (field_type, value) => Err(FieldError::TypeMismatch {
            field_type,
            found: value.kind(),
        }),
    }
}

/// Widest packed number, in bytes, whose digits always fit in a `u64`.
const MAX_PACKED_BYTES: usize = 9;

fn check_packed_width(length: usize) -> Result<(), FieldError> {
    if length > MAX_PACKED_BYTES {
        Err(FieldError::ValueTooLong {
            length: length * 2,
            capacity: MAX_PACKED_BYTES * 2,
        })?;
    }

    Ok(())
}

fn write_absent(spec: &FieldSpec, out: &mut [u8]) {
    let fill = if spec.field_type.is_character() {
        spec.fill()
    } else {
        0
    };

    out.fill(fill);
}

fn decode_text(r: &[u8], fill: u8) -> Option<String> {
    let end = r.iter().rposition(|&b| b != fill)? + 1;

    // Single-byte characters map to the first 256 code points.
    Some(r[..end].iter().map(|&b| b as char).collect())
}

fn encode_text(text: &str, fill: u8, out: &mut [u8]) -> Result<(), FieldError> {
    let length = text.chars().count();
    if length > out.len() {
        Err(FieldError::ValueTooLong {
            length,
            capacity: out.len(),
        })?;
    }

    out.fill(fill);
    for (slot, c) in out.iter_mut().zip(text.chars()) {
        *slot = u8::try_from(c).map_err(|_| FieldError::UnencodableCharacter(c))?;
    }

    Ok(())
}

/// Blank-filled numbers may carry spaces on either side. Zero-filled numbers
/// are digits throughout.
fn decode_numeric(r: &[u8], fill: u8) -> Result<Option<u64>, FieldError> {
    let digits = if fill == b' ' { trim_spaces(r) } else { r };

    if digits.is_empty() {
        return Ok(None);
    }

    parse_digits(digits).map(Some)
}

fn trim_spaces(r: &[u8]) -> &[u8] {
    let Some(start) = r.iter().position(|&b| b != b' ') else {
        return &[];
    };
    let end = r.iter().rposition(|&b| b != b' ').map_or(r.len(), |i| i + 1);

    &r[start..end]
}

fn parse_digits(digits: &[u8]) -> Result<u64, FieldError> {
    digits.iter().try_fold(0u64, |acc, &d| -> Result<u64, FieldError> {
        if !d.is_ascii_digit() {
            Err(FieldError::InvalidNumericField { found: d as char })?;
        }

        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(d - b'0')))
            .ok_or(FieldError::ValueTooLong {
                length: digits.len(),
                capacity: MAX_DIGITS,
            })
    })
}

/// Decimal digits that always fit in a `u64`.
const MAX_DIGITS: usize = 19;

/// Write `n` as right-justified, zero-padded ASCII digits filling `out`.
fn write_digits(n: u64, out: &mut [u8]) -> Result<(), FieldError> {
    let length = digit_count(n);

    if length > out.len() {
        Err(FieldError::ValueTooLong {
            length,
            capacity: out.len(),
        })?;
    }

    let mut n = n;
    for slot in out.iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }

    Ok(())
}

fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |l| l as usize + 1)
}

fn is_blank_or_zero(r: &[u8]) -> bool {
    r.iter().all(|&b| b == b' ') || r.iter().all(|&b| b == b'0')
}

/// Strip the zero padding from the front of unpacked date or time digits.
///
/// Returns `None` if every digit is zero.
fn unpadded(digits: &[u8], width: usize) -> Result<Option<&[u8]>, FieldError> {
    if digits.iter().all(|&d| d == b'0') {
        return Ok(None);
    }

    let (pad, digits) = digits.split_at(digits.len() - width);
    if pad.iter().any(|&d| d != b'0') {
        Err(FieldError::InvalidDate)?;
    }

    Ok(Some(digits))
}

/// Parse the integer value of an ASCII digit run, as part of a date or time.
fn date_part(digits: &[u8]) -> Result<u32, FieldError> {
    digits.iter().try_fold(0u32, |acc, &d| -> Result<u32, FieldError> {
        if !d.is_ascii_digit() {
            Err(FieldError::InvalidDate)?;
        }

        Ok(acc * 10 + u32::from(d - b'0'))
    })
}

/// Parse `YYYYMMDD`.
fn parse_date(r: &[u8]) -> Result<NaiveDate, FieldError> {
    if r.len() != 8 {
        Err(FieldError::InvalidDate)?;
    }

    // At most four digits, so always in range.
    let year = date_part(&r[..4])? as i32;
    let month = date_part(&r[4..6])?;
    let day = date_part(&r[6..8])?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(FieldError::InvalidDate)
}

/// Parse `YYYYMMDDHHMMSS`.
fn parse_timestamp(r: &[u8]) -> Result<NaiveDateTime, FieldError> {
    if r.len() != 14 {
        Err(FieldError::InvalidDate)?;
    }

    let date = parse_date(&r[..8])?;
    let hour = date_part(&r[8..10])?;
    let minute = date_part(&r[10..12])?;
    let second = date_part(&r[12..14])?;

    date.and_hms_opt(hour, minute, second)
        .ok_or(FieldError::InvalidDate)
}

fn write_date(date: &NaiveDate, out: &mut [u8]) -> Result<(), FieldError> {
    let year = u64::try_from(date.year())
        .ok()
        .filter(|&y| y <= 9999)
        .ok_or(FieldError::InvalidDate)?;

    write_digits(year, &mut out[..4])?;
    write_digits(date.month().into(), &mut out[4..6])?;
    write_digits(date.day().into(), &mut out[6..8])
}

fn write_timestamp(timestamp: &NaiveDateTime, out: &mut [u8]) -> Result<(), FieldError> {
    write_date(&timestamp.date(), &mut out[..8])?;
    write_digits(timestamp.hour().into(), &mut out[8..10])?;
    write_digits(timestamp.minute().into(), &mut out[10..12])?;
    write_digits(timestamp.second().into(), &mut out[12..14])
}
