//! Carrier unwrapping and single-scalar collapsing.
//!
//! Both passes drop container children that are, or end up, empty. Unwrapping
//! carriers is idempotent. Collapsing is not: it removes one level per pass.

use crate::node::Node;

/// Replaces every scalar carrier in the tree with the primitive it wraps.
///
/// Object and list children that are, or become, empty containers are removed.
/// The root itself is never removed, only emptied.
#[must_use]
pub fn format_scalar_values(node: Node) -> Node {
    match node {
        Node::Carrier(carrier) => Node::Scalar(carrier.value),
        Node::Object(map) => Node::Object(
            map.into_iter()
                .filter_map(|(key, value)| {
                    prune_empty(format_scalar_values(value)).map(|value| (key, value))
                })
                .collect(),
        ),
        Node::List(items) => Node::List(
            items
                .into_iter()
                .filter_map(|item| prune_empty(format_scalar_values(item)))
                .collect(),
        ),
        scalar @ Node::Scalar(_) => scalar,
    }
}

/// Collapses a container holding exactly one scalar into that scalar.
///
/// `{"id": 7}` becomes `7` and `[7]` becomes `7`, while `{"id": {"x": 1, "y": 2}}`
/// stays a container. A node is checked before its children, so a container
/// collapses only if its single entry was already a scalar: `{"a": {"b": 1}}`
/// becomes `{"a": 1}`, not `1`. Empty container children are removed, as in
/// [`format_scalar_values`].
#[must_use]
pub fn flatten_objects_with_single_key_scalars(node: Node) -> Node {
    match node {
        Node::Object(mut map) => {
            if map.len() == 1 && map.values().all(Node::is_scalar) {
                if let Some((_, value)) = map.pop() {
                    return value;
                }
            }
            Node::Object(
                map.into_iter()
                    .filter_map(|(key, value)| flatten_child(value).map(|value| (key, value)))
                    .collect(),
            )
        }
        Node::List(mut items) => {
            if items.len() == 1 && items.iter().all(Node::is_scalar) {
                if let Some(value) = items.pop() {
                    return value;
                }
            }
            Node::List(items.into_iter().filter_map(flatten_child).collect())
        }
        other => other,
    }
}

fn flatten_child(node: Node) -> Option<Node> {
    prune_empty(flatten_objects_with_single_key_scalars(node))
}

fn prune_empty(node: Node) -> Option<Node> {
    (!node.is_empty_container()).then_some(node)
}
