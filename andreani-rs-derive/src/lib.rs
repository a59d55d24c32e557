#![warn(missing_docs)]
#![crate_name = "andreani_rs_derive"]
//! # andreani-rs-derive
//!
//! This is a set of macros to derive the traits from andreani-rs.

extern crate proc_macro;

use darling::util::Flag;
use darling::{FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

#[derive(FromDeriveInput)]
#[darling(attributes(andreani))]
struct AndreaniRequestAttributes {
    operation: String,
}

#[derive(FromField)]
#[darling(attributes(serde), allow_unknown_fields)]
struct AndreaniRequestFieldAttributes {
    ty: syn::Type,
    #[darling(default)]
    rename: Option<String>,
    flatten: Flag,
}

/// Implements `AndreaniRequest` for a struct whose fields carry the remote field names.
///
/// Every field needs a `#[serde(rename = "...")]` with the name the web service expects.
/// Fields marked `#[serde(flatten)]` splice in the field names of the nested request,
/// at the position they are declared.
///
/// ## Example
/// ```ignore
/// use andreani_rs::AndreaniRequest;
///
/// #[derive(AndreaniRequest, serde::Serialize)]
/// #[andreani(operation = "AnularEnvio")]
/// pub struct Anulacion {
///     #[serde(rename = "NumeroAndreani")]
///     pub numero_andreani: String,
/// }
///
/// impl andreani_rs::validate::Validate for Anulacion {}
/// ```
#[proc_macro_derive(AndreaniRequest, attributes(andreani))]
pub fn andreani_request_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let name = &ast.ident;
    let AndreaniRequestAttributes { operation } =
        match AndreaniRequestAttributes::from_derive_input(&ast) {
            Ok(attributes) => attributes,
            Err(err) => return err.write_errors().into(),
        };

    let fields = if let syn::Data::Struct(syn::DataStruct {
        fields: syn::Fields::Named(syn::FieldsNamed { named: fields, .. }),
        ..
    }) = &ast.data
    {
        fields
    } else {
        panic!("AndreaniRequest can only be derived for structs with named fields.");
    };

    let mut pushes = Vec::with_capacity(fields.len());
    for field in fields {
        let attributes = match AndreaniRequestFieldAttributes::from_field(field) {
            Ok(attributes) => attributes,
            Err(err) => return err.write_errors().into(),
        };
        if attributes.flatten.is_present() {
            let ty = &attributes.ty;
            pushes.push(quote! {
                names.extend(<#ty as andreani_rs::AndreaniRequest>::field_names());
            });
        } else {
            let rename = attributes
                .rename
                .expect("AndreaniRequest requires serde renames!");
            pushes.push(quote! {
                names.push(#rename);
            });
        }
    }

    let operation_ident = syn::Ident::new(&operation, name.span());

    let gen = quote! {
        impl andreani_rs::AndreaniRequest for #name {
            const OPERATION: andreani_rs::Operation = andreani_rs::Operation::#operation_ident;

            fn field_names() -> Vec<&'static str> {
                let mut names: Vec<&'static str> = Vec::new();
                #(#pushes)*
                names
            }

            fn validate(&self) -> Result<(), andreani_rs::validate::ValidationError> {
                andreani_rs::validate::Validate::validate(self)
            }
        }
    };

    gen.into()
}
