#![no_std]

//! A schema-driven codec for fixed-width Metro 2 style credit reporting
//! segments.
//!
//! Each segment (header record, base segment, trailer record) occupies fixed
//! byte offsets in one of two physical encodings: a _character_ format, where
//! every field is text, and a _packed_ format, where numbers, dates and
//! timestamps are compressed as binary-coded decimal. Tradeline translates
//! between these byte buffers and typed field values for both encodings,
//! driven by an immutable table of field specifications.
//!
//! Most users should begin with [`segment::Codec`], which decodes buffers into
//! [`record::Record`]s (or typed [`models`]) and encodes them back. Field-level
//! primitives are exposed in the [`field`] module, and the layout tables in
//! [`schema`].
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros and typed segment models (default).
//! - `std`: enable the process-wide registry accessor (default).

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Lets generated code name this crate as `::tradeline` from the inside too.
#[cfg(feature = "derive")]
extern crate self as tradeline;

pub mod field;
#[cfg(feature = "derive")]
pub mod models;
pub mod record;
pub mod schema;
pub mod segment;
