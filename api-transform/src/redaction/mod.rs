//! Removal of properties from serializer trees.
//!
//! Two entrypoints with different scopes:
//!
//! - **`keys`**: [`delete_keys`] strips property names everywhere, regardless of type.
//! - **`scoped`**: [`delete_properties`] strips a type's hidden properties, only on
//!   nodes tagged with that type, wherever they sit in the tree.
//!
//! The hidden-property lists come from a [`crate::TypeMapping`].

mod keys;
mod scoped;

pub use keys::delete_keys;
pub use scoped::delete_properties;
