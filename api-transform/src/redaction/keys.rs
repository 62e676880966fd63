//! Type-agnostic key deletion.

use crate::node::{Map, Node, CLASS_IDENTIFIER_KEY, SCALAR_VALUE};

/// Removes every key in `unwanted_keys` from `node` and from every object nested
/// inside it, at any depth.
///
/// Scalars, absent keys and list positions are left alone. Applying the same
/// keys twice yields the same tree.
///
/// Carriers are treated as the two-key map the serializer emitted: deleting
/// [`CLASS_IDENTIFIER_KEY`] drops the carrier's scalar type, and deleting
/// [`SCALAR_VALUE`] leaves an object holding whatever remains.
#[must_use]
pub fn delete_keys<K: AsRef<str>>(mut node: Node, unwanted_keys: &[K]) -> Node {
    unset_keys(&mut node, unwanted_keys);
    node
}

fn is_unwanted<K: AsRef<str>>(key: &str, unwanted_keys: &[K]) -> bool {
    unwanted_keys.iter().any(|unwanted| unwanted.as_ref() == key)
}

fn unset_keys<K: AsRef<str>>(node: &mut Node, unwanted_keys: &[K]) {
    match node {
        Node::Object(map) => {
            map.retain(|key, _| !is_unwanted(key, unwanted_keys));
            for value in map.values_mut() {
                unset_keys(value, unwanted_keys);
            }
        }
        Node::List(items) => {
            for item in items {
                unset_keys(item, unwanted_keys);
            }
        }
        Node::Carrier(carrier) => {
            if is_unwanted(CLASS_IDENTIFIER_KEY, unwanted_keys) {
                carrier.scalar_type = None;
            }
            if is_unwanted(SCALAR_VALUE, unwanted_keys) {
                let mut remainder = Map::new();
                if let Some(scalar_type) = carrier.scalar_type.take() {
                    remainder.insert(CLASS_IDENTIFIER_KEY.to_string(), Node::from(scalar_type));
                }
                *node = Node::Object(remainder);
            }
        }
        Node::Scalar(_) => {}
    }
}
