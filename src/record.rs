//! Decoded field values and the records holding them.
//!
//! A [`Record`] maps field names to [`Value`]s. It is produced by decoding a
//! segment and consumed by encoding one; fields without an entry are absent.
//!
//! Records of a known shape can be converted to and from plain structs with
//! the [`FromRecord`] and [`ToRecord`] traits, which can be derived.

use alloc::{collections::BTreeMap, string::String};
use core::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Text of an alphanumeric or alpha field, without trailing fill.
    Text(String),
    /// A numeric, packed number, or descriptor field.
    Integer(u64),
    /// A character or packed date field.
    Date(NaiveDate),
    /// A character or packed timestamp field.
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Date(date) => write!(f, "{date}"),
            Self::Timestamp(timestamp) => write!(f, "{timestamp}"),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

/// Extract a Rust type from a [`Value`].
pub trait FromValue: Sized {
    /// Name of the expected variant, for error messages.
    const EXPECTED: &'static str;

    /// Convert a value, if it is of the expected variant and in range.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    const EXPECTED: &'static str = "text";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl FromValue for u64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for u32 {
    const EXPECTED: &'static str = "32-bit integer";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => (*n).try_into().ok(),
            _ => None,
        }
    }
}

impl FromValue for NaiveDate {
    const EXPECTED: &'static str = "date";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl FromValue for NaiveDateTime {
    const EXPECTED: &'static str = "timestamp";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Timestamp(timestamp) => Some(*timestamp),
            _ => None,
        }
    }
}

/// A record value could not be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Field {field} holds {found}, not {expected}.")]
pub struct ValueError {
    pub field: String,
    pub expected: &'static str,
    pub found: &'static str,
}

/// Field values of one segment, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning its previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Clear a field, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Get a field converted to a Rust type.
    ///
    /// Returns `Ok(None)` for an absent field, and an error if the field holds
    /// a value of another type.
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<Option<T>, ValueError> {
        let Some(value) = self.values.get(name) else {
            return Ok(None);
        };

        T::from_value(value).map(Some).ok_or_else(|| ValueError {
            field: name.into(),
            expected: T::EXPECTED,
            found: value.kind(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present fields, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self { values }
    }
}

/// Derive [`FromRecord`] for a struct representing one segment.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `field("Name")` attribute to an `Option<T>` struct field, where
/// `Name` is the field name in the layout tables and `T` implements
/// [`FromValue`]. Struct fields without the attribute are left at their
/// default.
///
/// ```
/// #[derive(Debug, Default, FromRecord, ToRecord)]
/// struct Opening {
///     #[field("DateOpened")]
///     date_opened: Option<NaiveDate>,
///     #[field("CreditLimit")]
///     credit_limit: Option<u64>,
/// }
/// ```
#[cfg(feature = "derive")]
pub use tradeline_derive::FromRecord;

/// Build a value from the fields of a record.
///
/// See the [`FromRecord`](macro@FromRecord) derive macro for an automatic
/// implementation of this trait.
pub trait FromRecord: Sized {
    fn from_record(record: &Record) -> Result<Self, ValueError>;
}

/// Derive [`ToRecord`] for a struct representing one segment.
///
/// _Requires Cargo feature `derive`._
///
/// Uses the same `field("Name")` attributes as
/// [`FromRecord`](macro@FromRecord). Fields holding `None` are left absent
/// from the record.
#[cfg(feature = "derive")]
pub use tradeline_derive::ToRecord;

/// Convert a value into the fields of a record.
///
/// See the [`ToRecord`](macro@ToRecord) derive macro for an automatic
/// implementation of this trait.
pub trait ToRecord {
    fn to_record(&self) -> Record;
}
