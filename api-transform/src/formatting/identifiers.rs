//! Identifier values and route placeholders.

use super::scalars::{flatten_objects_with_single_key_scalars, format_scalar_values};
use crate::{
    mapping::TypeMapping,
    node::{Node, CLASS_IDENTIFIER_KEY},
    redaction::delete_keys,
};

/// Identifier data of one object, as used to template resource routes.
#[derive(Clone, Debug, PartialEq)]
pub struct IdPropertyAndValues {
    /// Identifier values in declared order. A single scalar identifier is
    /// returned as that scalar; anything else is a list.
    pub values: Node,
    /// The type's identifier properties in declared order. Properties that
    /// produced a value are rewritten to their `{name}` placeholder form.
    pub placeholders: Vec<String>,
}

impl IdPropertyAndValues {
    pub fn into_parts(self) -> (Node, Vec<String>) {
        (self.values, self.placeholders)
    }
}

/// The identifier properties declared for `type_name`.
pub fn get_id_properties<'m, M>(mappings: &'m M, type_name: &str) -> &'m [String]
where
    M: TypeMapping + ?Sized,
{
    mappings.id_properties(type_name)
}

/// Collects the identifier values of `object` for `type_name`.
///
/// Properties that are missing or blank (see [`Node::is_blank`]) are skipped
/// and keep their plain name in `placeholders`.
pub fn get_id_property_and_values<M>(
    mappings: &M,
    object: &Node,
    type_name: &str,
) -> IdPropertyAndValues
where
    M: TypeMapping + ?Sized,
{
    let mut values = Vec::new();
    let mut placeholders = Vec::new();

    for property in get_id_properties(mappings, type_name) {
        match object.get(property) {
            Some(value) if !value.is_blank() => {
                values.push(get_id_value(value.clone()));
                placeholders.push(format!("{{{property}}}"));
            }
            _ => placeholders.push(property.clone()),
        }
    }

    IdPropertyAndValues {
        values: flatten_objects_with_single_key_scalars(Node::List(values)),
        placeholders,
    }
}

/// Unwraps an identifier node and strips its type markers.
///
/// Usually yields a scalar; composite identifiers stay containers.
#[must_use]
pub fn get_id_value(id: Node) -> Node {
    delete_keys(format_scalar_values(id), &[CLASS_IDENTIFIER_KEY])
}

#[cfg(test)]
mod tests {
    use super::{get_id_properties, get_id_property_and_values, get_id_value};
    use crate::{
        mapping::{Mapping, Mappings},
        node::Node,
    };

    fn mappings() -> Mappings {
        Mappings::new()
            .with(Mapping::new("User").with_id_properties(["id"]))
            .with(Mapping::new("Membership").with_id_properties(["group", "member"]))
    }

    #[test]
    fn single_identifier_collapses_to_scalar() {
        let user = Node::typed(
            "User",
            [
                ("id", Node::typed_carrier("Id", 42)),
                ("name", Node::carrier("x")),
            ],
        );
        let result = get_id_property_and_values(&mappings(), &user, "User");
        assert_eq!(result.values, Node::from(42));
        assert_eq!(result.placeholders, ["{id}"]);
    }

    #[test]
    fn composite_identifier_keeps_order() {
        let membership = Node::typed(
            "Membership",
            [
                ("member", Node::carrier(7)),
                ("group", Node::carrier("admins")),
            ],
        );
        let (values, placeholders) =
            get_id_property_and_values(&mappings(), &membership, "Membership").into_parts();
        assert_eq!(values, Node::list([Node::from("admins"), Node::from(7)]));
        assert_eq!(placeholders, ["{group}", "{member}"]);
    }

    #[test]
    fn value_object_identifier_stays_a_list() {
        let user = Node::typed(
            "User",
            [(
                "id",
                Node::typed("UserId", [("uuid", Node::typed_carrier("string", "abc"))]),
            )],
        );
        let result = get_id_property_and_values(&mappings(), &user, "User");
        assert_eq!(result.values, Node::list([Node::from("abc")]));
        assert_eq!(result.placeholders, ["{id}"]);
    }

    #[test]
    fn missing_and_blank_properties_are_skipped() {
        let membership = Node::typed("Membership", [("group", Node::from(""))]);
        let result = get_id_property_and_values(&mappings(), &membership, "Membership");
        assert_eq!(result.values, Node::list([]));
        assert_eq!(result.placeholders, ["group", "member"]);
    }

    #[test]
    fn wrapped_zero_is_still_an_identifier() {
        let user = Node::typed("User", [("id", Node::carrier(0))]);
        let result = get_id_property_and_values(&mappings(), &user, "User");
        assert_eq!(result.values, Node::from(0));
        assert_eq!(result.placeholders, ["{id}"]);
    }

    #[test]
    fn unknown_type_has_no_identifier() {
        let user = Node::typed("User", [("id", Node::carrier(1))]);
        let result = get_id_property_and_values(&mappings(), &user, "Ghost");
        assert_eq!(result.values, Node::list([]));
        assert!(result.placeholders.is_empty());
        assert!(get_id_properties(&mappings(), "Ghost").is_empty());
    }

    #[test]
    fn id_value_strips_markers_of_value_objects() {
        let id = Node::typed(
            "App\\Uuid",
            [
                ("value", Node::typed_carrier("string", "abc")),
                ("meta", Node::typed("App\\Meta", [("v", Node::carrier(1))])),
            ],
        );
        let expected = Node::object([
            ("value", Node::from("abc")),
            ("meta", Node::object([("v", Node::from(1))])),
        ]);
        let result = get_id_value(id);
        assert_eq!(result, expected);
        assert!(!result.has_type_marker());
    }

    #[test]
    fn id_value_of_carrier_is_scalar() {
        assert_eq!(get_id_value(Node::typed_carrier("integer", 9)), Node::from(9));
        assert_eq!(get_id_value(Node::from("raw")), Node::from("raw"));
    }
}
