//! Derive macros for `api-transform`.
//!
//! This crate generates the `MappedType` implementation behind
//! `#[derive(Mapped)]`. It:
//! - reads container-level `#[mapping(name = "...")]` for the type name
//! - reads field-level `#[mapping(hidden, id, rename = "...")]` attributes
//! - emits the hidden and identifier property lists in declaration order
//!
//! It does **not** transform trees. That happens at runtime in the main
//! `api-transform` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_struct;
mod field;
use container::{parse_container_options, ContainerOptions};
use derive_struct::{derive_struct, StructDeriveOutput};

/// Derives `api_transform::MappedType` for structs with named fields.
///
/// # Container Attributes
///
/// - `#[mapping(name = "App\\Model\\User")]` - The type name as the serializer writes it
///   under the class-identifier key. Defaults to the Rust path of the type
///   (`module_path!()` followed by `::Ident`).
///
/// # Field Attributes
///
/// - **No annotation**: The field is neither hidden nor part of the identifier.
/// - `#[mapping(hidden)]`: The property is stripped by `delete_properties`.
/// - `#[mapping(id)]`: The property is part of the identifier. Identifier order is field order.
/// - `#[mapping(rename = "userId")]`: The property name used in the tree, when it differs from
///   the field name. Combines with the other options: `#[mapping(id, rename = "userId")]`.
///
/// Enums, unions and tuple structs are rejected at compile time.
#[proc_macro_derive(Mapped, attributes(mapping))]
pub fn derive_mapped(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the api-transform crate root.
///
/// Handles crate renaming (e.g., `transform = { package = "api-transform", ... }`)
/// and internal usage (when derive is used inside the api-transform crate itself).
fn crate_root() -> TokenStream {
    match crate_name("api-transform") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::api_transform },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { name } = parse_container_options(&attrs)?;

    let StructDeriveOutput {
        hidden_properties,
        id_properties,
    } = match data {
        Data::Struct(data) => derive_struct(data)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Mapped` can only be derived for structs with named fields",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Mapped` can only be derived for structs with named fields",
            ));
        }
    };

    let type_name = match name {
        Some(name) => quote! { #name },
        None => quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)) },
    };

    let crate_root = crate_root();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::MappedType for #ident #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }

            fn hidden_properties() -> &'static [&'static str] {
                &[#(#hidden_properties),*]
            }

            fn id_properties() -> &'static [&'static str] {
                &[#(#id_properties),*]
            }
        }
    })
}
