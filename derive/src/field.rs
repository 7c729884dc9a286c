use std::collections::HashSet;

use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericArgument, Ident, LitStr, PathArguments, Result,
    Type,
};

/// The named fields of a struct, split by whether they map to a record field.
pub(crate) struct StructFields {
    pub(crate) mapped: Vec<FieldMetadata>,
    pub(crate) unmapped: Vec<Ident>,
}

pub(crate) fn parse_struct(input: &DeriveInput, derive: &str) -> Result<StructFields> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            format!("`{derive}` may only be derived on structs."),
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            format!("`{derive}` may only be derived on structs with named fields."),
        ))?
    };

    let mut mapped = Vec::new();
    let mut unmapped = Vec::new();
    let mut keys = HashSet::new();

    for field in &fields.named {
        match FieldMetadata::parse(field)? {
            Some(metadata) => {
                if !keys.insert(metadata.key.value()) {
                    Err(Error::new(
                        metadata.key.span(),
                        "Field names must be unique.",
                    ))?
                }

                mapped.push(metadata);
            }
            None => unmapped.push(field.ident.clone().unwrap()),
        }
    }

    Ok(StructFields { mapped, unmapped })
}

#[derive(Debug)]
pub(crate) struct FieldMetadata {
    /// The struct field.
    pub(crate) name: Ident,
    /// The record field name.
    pub(crate) key: LitStr,
    /// `T` of the struct field's `Option<T>`.
    pub(crate) inner: Type,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let key: LitStr = attr.meta.require_list()?.parse_args()?;

        if key.value().is_empty() {
            Err(Error::new_spanned(&key, "Field name must not be empty."))?
        }

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have a type annotation.",
            ))?
        };

        let Some(segment) = path.path.segments.last() else {
            Err(Error::new_spanned(
                &path.path.segments,
                "Field must have a type annotation.",
            ))?
        };

        if segment.ident != "Option" {
            Err(Error::new_spanned(
                &segment.ident,
                "Field must have type `Option<T>`.",
            ))?
        }

        let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
            Err(Error::new_spanned(
                &segment.arguments,
                "Field of type `Option<T>` must have a generic parameter.",
            ))?
        };

        let Some(argument) = arguments.args.first() else {
            Err(Error::new_spanned(
                &arguments.args,
                "Field of type `Option<T>` must have a generic parameter.",
            ))?
        };

        let GenericArgument::Type(inner) = argument else {
            Err(Error::new_spanned(
                argument,
                "Generic argument of a field of type `Option<T>` must be a type.",
            ))?
        };

        Ok(Some(Self {
            name,
            key,
            inner: inner.clone(),
        }))
    }
}
