//! Normalization of serializer trees for payload assembly.
//!
//! - **`casing`**: type names to snake_case array keys
//! - **`scalars`**: unwrapping carriers and collapsing single-scalar containers
//! - **`identifiers`**: identifier values and route placeholders for a type

mod casing;
mod identifiers;
mod scalars;

pub use casing::{camel_case_to_underscore, camel_case_to_underscore_with, namespace_as_array_key};
pub use identifiers::{get_id_properties, get_id_property_and_values, get_id_value, IdPropertyAndValues};
pub use scalars::{flatten_objects_with_single_key_scalars, format_scalar_values};
