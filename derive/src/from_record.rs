use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::field::{FieldMetadata, StructFields, parse_struct};

pub(crate) fn expand_from_record(input: &DeriveInput) -> Result<TokenStream> {
    let StructFields { mapped, unmapped } = parse_struct(input, "FromRecord")?;

    let assignments = mapped.iter().map(|FieldMetadata { name, key, inner }| {
        quote! {
            #name: record.get_as::<#inner>(#key)?,
        }
    });

    // Fields without an attribute keep their default.
    let defaults = unmapped.iter().map(|name| {
        quote! {
            #name: ::core::default::Default::default(),
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::tradeline::record::FromRecord for #name #ty_generics #where_clause {
            fn from_record(
                record: &::tradeline::record::Record,
            ) -> ::core::result::Result<Self, ::tradeline::record::ValueError> {
                ::core::result::Result::Ok(Self {
                    #(#assignments)*
                    #(#defaults)*
                })
            }
        }
    };

    Ok(expanded.into())
}
