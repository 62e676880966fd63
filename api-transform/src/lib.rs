//! Redaction and normalization of type-tagged serializer trees.
//!
//! An upstream object serializer turns domain objects into a generic tree:
//! objects carry their logical type name under a reserved key, and primitives
//! may be wrapped in single-value carriers. This crate post-processes such
//! trees before they are assembled into API payloads:
//!
//! - **Redaction**: strip configured keys everywhere ([`delete_keys`]) or strip
//!   a type's hidden properties wherever that type appears ([`delete_properties`]).
//! - **Normalization**: unwrap carriers ([`format_scalar_values`]), collapse
//!   single-scalar containers ([`flatten_objects_with_single_key_scalars`]),
//!   extract identifier values and route placeholders
//!   ([`get_id_property_and_values`]), and derive snake_case keys from type
//!   names ([`namespace_as_array_key`]).
//!
//! What is hidden and what forms an identifier is read from a [`TypeMapping`].
//! [`Mappings`] is the bundled store; Rust types can declare their mapping with
//! `#[derive(Mapped)]`.
//!
//! What this crate does not do:
//! - build the tree from objects, or render the final payload
//! - validate trees against a schema
//! - perform I/O; integrations (`serde`, `slog`) sit behind feature flags
//!
//! Every transform is a pure, synchronous function over an owned tree. None
//! of them fail: malformed type tags never match, unknown types map to empty
//! property lists, and absent keys are skipped.

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

pub use api_transform_derive::Mapped;

// Module declarations
#[cfg(feature = "formatting")]
mod formatting;
#[cfg(feature = "serde")]
mod json;
mod mapping;
mod node;
#[cfg(feature = "redaction")]
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
#[cfg(feature = "formatting")]
pub use formatting::{
    camel_case_to_underscore, camel_case_to_underscore_with, flatten_objects_with_single_key_scalars,
    format_scalar_values, get_id_properties, get_id_property_and_values, get_id_value,
    namespace_as_array_key, IdPropertyAndValues,
};
pub use mapping::{MappedType, Mapping, Mappings, TypeMapping};
pub use node::{Map, Node, Scalar, ScalarCarrier, CLASS_IDENTIFIER_KEY, SCALAR_VALUE};
#[cfg(feature = "redaction")]
pub use redaction::{delete_keys, delete_properties};
