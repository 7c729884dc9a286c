//! Checks of field presence requirements.

use alloc::vec::Vec;

use super::Finding;
use crate::{
    field::FieldError,
    record::{Record, Value},
    schema::{FieldSpec, FieldType, Framing, Presence, Schema},
};

/// Whether a value leaves a field empty.
///
/// A field is empty when the value is absent, or is text consisting only of
/// the field's fill character. Packed numbers are never empty: a zero is a
/// value.
pub fn is_empty(spec: &FieldSpec, value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::Text(text)) => text.chars().all(|c| c == char::from(spec.fill())),
        Some(_) => false,
    }
}

/// Whether an interpreted field must be populated.
///
/// Descriptor words are never optional when interpreted, whatever their
/// tabled presence. This covers omitted fields, which are only interpreted in
/// place of a descriptor word under block framing.
pub fn is_required(spec: &FieldSpec) -> bool {
    match spec.presence {
        Presence::Required => true,
        Presence::Applicable | Presence::Nullable => {
            spec.field_type == FieldType::Descriptor || spec.options.omitted()
        }
    }
}

/// Check the presence requirement of one interpreted field against its value.
pub fn check(name: &'static str, spec: &FieldSpec, value: Option<&Value>) -> Option<Finding> {
    (is_required(spec) && is_empty(spec, value)).then_some(Finding {
        field: name,
        error: FieldError::MissingRequiredField,
    })
}

/// Check the presence requirement of every field interpreted under a framing
/// convention. Findings are ordered by field offset.
pub fn validate(schema: &Schema, framing: Framing, record: &Record) -> Vec<Finding> {
    schema
        .interpreted(framing)
        .filter_map(|(name, spec)| check(name, spec, record.get(name)))
        .collect()
}
