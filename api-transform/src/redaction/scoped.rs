//! Type-scoped redaction of hidden properties.

use crate::{
    mapping::TypeMapping,
    node::{Map, Node, CLASS_IDENTIFIER_KEY},
};

/// Removes the hidden properties of `type_key` from every node tagged with it.
///
/// Only objects carrying a class-identifier entry are inspected; anything else
/// (scalars, carriers, lists, untagged objects) is returned as-is and is not
/// searched further. A tagged object of another type is kept but its children
/// are searched for `type_key`.
///
/// On a matching node every retained child is searched as well. The
/// class-identifier entry is retained unless it is itself hidden. If every
/// entry, the identifier included, is hidden, the node is returned unchanged
/// rather than emptied.
///
/// A type unknown to `mappings` hides nothing.
#[must_use]
pub fn delete_properties<M>(mappings: &M, node: Node, type_key: &str) -> Node
where
    M: TypeMapping + ?Sized,
{
    match node {
        Node::Object(map) if map.contains_key(CLASS_IDENTIFIER_KEY) => {
            delete_matched_class_properties(mappings, map, type_key)
        }
        other => other,
    }
}

fn delete_matched_class_properties<M>(mappings: &M, map: Map, type_key: &str) -> Node
where
    M: TypeMapping + ?Sized,
{
    if Node::tag_of(&map) != Some(type_key) {
        return Node::Object(
            map.into_iter()
                .map(|(key, value)| (key, delete_properties(mappings, value, type_key)))
                .collect(),
        );
    }

    let hidden = mappings.hidden_properties(type_key);
    if hidden.is_empty() {
        return Node::Object(map);
    }

    if map.keys().all(|key| hidden.contains(key)) {
        return Node::Object(map);
    }

    Node::Object(
        map.into_iter()
            .filter(|(key, _)| !hidden.contains(key))
            .map(|(key, value)| (key, delete_properties(mappings, value, type_key)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::delete_properties;
    use crate::{
        mapping::{Mapping, Mappings},
        node::{Node, CLASS_IDENTIFIER_KEY},
    };

    fn mappings() -> Mappings {
        Mappings::new()
            .with(Mapping::new("User").with_hidden_properties(["password"]))
            .with(Mapping::new("Order").with_hidden_properties(["card"]))
    }

    #[test]
    fn strips_hidden_property_of_matching_type() {
        let user = Node::typed("User", [("name", Node::from("x")), ("password", Node::from("y"))]);
        let result = delete_properties(&mappings(), user, "User");
        assert_eq!(result, Node::typed("User", [("name", Node::from("x"))]));
    }

    #[test]
    fn other_types_keep_same_named_properties() {
        let order = Node::typed("Order", [("password", Node::from("y"))]);
        let user = Node::typed("User", [("name", Node::from("x")), ("order", order.clone())]);

        let result = delete_properties(&mappings(), user, "User");
        assert_eq!(result.get("order"), Some(&order));
    }

    #[test]
    fn finds_matching_nodes_below_other_types() {
        let tree = Node::typed(
            "Order",
            [(
                "buyer",
                Node::typed("User", [("name", Node::from("x")), ("password", Node::from("y"))]),
            )],
        );
        let result = delete_properties(&mappings(), tree, "User");
        assert_eq!(
            result,
            Node::typed(
                "Order",
                [("buyer", Node::typed("User", [("name", Node::from("x"))]))]
            )
        );
    }

    #[test]
    fn searches_retained_children_of_matching_nodes() {
        let tree = Node::typed(
            "User",
            [
                ("password", Node::from("a")),
                (
                    "manager",
                    Node::typed("User", [("name", Node::from("m")), ("password", Node::from("b"))]),
                ),
            ],
        );
        let result = delete_properties(&mappings(), tree, "User");
        assert_eq!(
            result,
            Node::typed("User", [("manager", Node::typed("User", [("name", Node::from("m"))]))])
        );
    }

    #[test]
    fn type_marker_survives_when_every_property_is_hidden() {
        let user = Node::typed("User", [("password", Node::from("y"))]);
        let result = delete_properties(&mappings(), user, "User");
        assert!(result.get("password").is_none());
        assert_eq!(result, Node::typed("User", Vec::<(String, Node)>::new()));
    }

    #[test]
    fn fully_hidden_node_is_kept_unchanged() {
        let mappings = Mappings::new().with(
            Mapping::new("Secret").with_hidden_properties([CLASS_IDENTIFIER_KEY, "token"]),
        );
        let secret = Node::typed("Secret", [("token", Node::from("t"))]);
        let result = delete_properties(&mappings, secret.clone(), "Secret");
        assert_eq!(result, secret);
    }

    #[test]
    fn unknown_type_hides_nothing() {
        let user = Node::typed("User", [("password", Node::from("y"))]);
        let result = delete_properties(&Mappings::new(), user.clone(), "User");
        assert_eq!(result, user);
    }

    #[test]
    fn untagged_nodes_stop_the_search() {
        let nested = Node::typed("User", [("name", Node::from("x")), ("password", Node::from("y"))]);
        let wrapper = Node::object([("user", nested.clone())]);
        assert_eq!(delete_properties(&mappings(), wrapper.clone(), "User"), wrapper);

        let list = Node::list([nested]);
        assert_eq!(delete_properties(&mappings(), list.clone(), "User"), list);
    }

    #[test]
    fn non_scalar_tag_never_matches() {
        let tree = Node::object([
            (CLASS_IDENTIFIER_KEY, Node::list([Node::from("User")])),
            ("password", Node::from("y")),
            (
                "child",
                Node::typed("User", [("name", Node::from("x")), ("password", Node::from("z"))]),
            ),
        ]);
        let result = delete_properties(&mappings(), tree, "User");
        assert_eq!(result.get("password"), Some(&Node::from("y")));
        assert_eq!(
            result.get("child"),
            Some(&Node::typed("User", [("name", Node::from("x"))]))
        );
    }

    #[test]
    fn keeps_property_order() {
        let user = Node::typed(
            "User",
            [
                ("b", Node::from(1)),
                ("password", Node::from("y")),
                ("a", Node::from(2)),
            ],
        );
        let result = delete_properties(&mappings(), user, "User");
        let keys: Vec<&str> = result.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, [CLASS_IDENTIFIER_KEY, "b", "a"]);
    }
}
