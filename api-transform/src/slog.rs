//! Adapters for emitting serializer trees through `slog`.
//!
//! This module connects [`Node`] with `slog` by providing `slog::Value`
//! implementations that serialize trees as structured JSON via `slog`'s
//! nested-value support.
//!
//! It is responsible for:
//! - Emitting a node in the same JSON shape the serializer produced it in.
//! - Offering [`RedactedNode`], whose logged representation is derived from
//!   [`delete_properties`], so a type's hidden properties never reach a record.
//!
//! It does not configure `slog` or decide which type a node should be
//! redacted for.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{mapping::TypeMapping, node::Node, redaction::delete_properties};

impl SlogValue for Node {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(JsonValue::from(self.clone()));
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// A `slog::Value` that emits a node after type-scoped redaction.
///
/// The redacted tree is converted to a `serde_json::Value` once, when the
/// wrapper is built.
pub struct RedactedNode {
    value: JsonValue,
}

impl RedactedNode {
    /// Strips the hidden properties of `type_key` from `node` and keeps the result.
    pub fn new<M>(mappings: &M, node: Node, type_key: &str) -> Self
    where
        M: TypeMapping + ?Sized,
    {
        let redacted = delete_properties(mappings, node, type_key);
        Self {
            value: JsonValue::from(redacted),
        }
    }

    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedNode {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts nodes into a `slog::Value` that logs their redacted form.
///
/// ## Example
/// ```ignore
/// use api_transform::slog::IntoRedactedNode;
///
/// info!(logger, "user loaded"; "user" => node.into_redacted(&mappings, "App\\User"));
/// ```
pub trait IntoRedactedNode: Sized {
    fn into_redacted<M>(self, mappings: &M, type_key: &str) -> RedactedNode
    where
        M: TypeMapping + ?Sized;
}

impl IntoRedactedNode for Node {
    fn into_redacted<M>(self, mappings: &M, type_key: &str) -> RedactedNode
    where
        M: TypeMapping + ?Sized,
    {
        RedactedNode::new(mappings, self, type_key)
    }
}
