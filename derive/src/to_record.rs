use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::field::{FieldMetadata, StructFields, parse_struct};

pub(crate) fn expand_to_record(input: &DeriveInput) -> Result<TokenStream> {
    let StructFields { mapped, .. } = parse_struct(input, "ToRecord")?;

    let insertions = mapped.iter().map(|FieldMetadata { name, key, .. }| {
        quote! {
            if let ::core::option::Option::Some(value) = &self.#name {
                record.insert(#key, ::core::clone::Clone::clone(value));
            }
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::tradeline::record::ToRecord for #name #ty_generics #where_clause {
            fn to_record(&self) -> ::tradeline::record::Record {
                let mut record = ::tradeline::record::Record::new();
                #(#insertions)*
                record
            }
        }
    };

    Ok(expanded.into())
}
