//! `serde_json::Value` interop for serializer trees.
//!
//! The serializer's wire shape is plain JSON with reserved keys, so these
//! conversions are where the keys turn into variants and back:
//!
//! - an object whose keys are `@scalar` (holding a primitive) and optionally a
//!   string `@type` becomes a [`Node::Carrier`];
//! - every other object stays an object, its keys in document order.
//!
//! Conversions are total. Integers outside the `i64` range are read as floats,
//! and non-finite floats are written as `null`.

use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::node::{Node, Scalar, ScalarCarrier, CLASS_IDENTIFIER_KEY, SCALAR_VALUE};

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Array(items) => Node::List(items.into_iter().map(Node::from).collect()),
            JsonValue::Object(object) => match carrier_from_object(&object) {
                Some(carrier) => Node::Carrier(carrier),
                None => Node::Object(
                    object
                        .into_iter()
                        .map(|(key, value)| (key, Node::from(value)))
                        .collect(),
                ),
            },
            scalar => Node::Scalar(scalar_from_json(scalar)),
        }
    }
}

fn carrier_from_object(object: &JsonMap<String, JsonValue>) -> Option<ScalarCarrier> {
    let value = object.get(SCALAR_VALUE)?;
    if value.is_array() || value.is_object() {
        return None;
    }
    let scalar_type = match object.get(CLASS_IDENTIFIER_KEY) {
        Some(JsonValue::String(scalar_type)) => Some(scalar_type.clone()),
        Some(_) => return None,
        None => None,
    };
    let expected_len = 1 + usize::from(scalar_type.is_some());
    if object.len() != expected_len {
        return None;
    }
    Some(ScalarCarrier {
        value: scalar_from_json(value.clone()),
        scalar_type,
    })
}

fn scalar_from_json(value: JsonValue) -> Scalar {
    match value {
        JsonValue::Bool(value) => Scalar::Bool(value),
        JsonValue::Number(number) => match number.as_i64() {
            Some(value) => Scalar::Int(value),
            None => number.as_f64().map_or(Scalar::Null, Scalar::Float),
        },
        JsonValue::String(value) => Scalar::String(value),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => Scalar::Null,
    }
}

impl From<Scalar> for JsonValue {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Null => JsonValue::Null,
            Scalar::Bool(value) => JsonValue::Bool(value),
            Scalar::Int(value) => JsonValue::Number(value.into()),
            Scalar::Float(value) => Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number),
            Scalar::String(value) => JsonValue::String(value),
        }
    }
}

impl From<Node> for JsonValue {
    fn from(value: Node) -> Self {
        match value {
            Node::Scalar(scalar) => scalar.into(),
            Node::Carrier(carrier) => {
                let mut object = JsonMap::new();
                if let Some(scalar_type) = carrier.scalar_type {
                    object.insert(CLASS_IDENTIFIER_KEY.to_string(), JsonValue::String(scalar_type));
                }
                object.insert(SCALAR_VALUE.to_string(), carrier.value.into());
                JsonValue::Object(object)
            }
            Node::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect(),
            ),
            Node::List(items) => JsonValue::Array(items.into_iter().map(JsonValue::from).collect()),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(value) => serializer.serialize_bool(*value),
            Scalar::Int(value) => serializer.serialize_i64(*value),
            Scalar::Float(value) if value.is_finite() => serializer.serialize_f64(*value),
            Scalar::Float(_) => serializer.serialize_unit(),
            Scalar::String(value) => serializer.serialize_str(value),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Scalar(scalar) => scalar.serialize(serializer),
            Node::Carrier(carrier) => {
                let len = 1 + usize::from(carrier.scalar_type.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                if let Some(scalar_type) = &carrier.scalar_type {
                    map.serialize_entry(CLASS_IDENTIFIER_KEY, scalar_type)?;
                }
                map.serialize_entry(SCALAR_VALUE, &carrier.value)?;
                map.end()
            }
            Node::Object(object) => serializer.collect_map(object),
            Node::List(items) => serializer.collect_seq(items),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Node::from)
    }
}

impl Node {
    /// Parses a serializer tree from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Renders the tree as compact JSON text.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value as JsonValue};

    use crate::node::{Node, Scalar};

    #[test]
    fn reads_carriers() {
        let node = Node::from(json!({"@type": "integer", "@scalar": 5}));
        assert_eq!(node, Node::typed_carrier("integer", 5));

        let node = Node::from(json!({"@scalar": "x"}));
        assert_eq!(node, Node::carrier("x"));
    }

    #[test]
    fn extra_keys_make_an_object() {
        let node = Node::from(json!({"@scalar": 5, "other": 1}));
        assert!(matches!(node, Node::Object(_)));

        let node = Node::from(json!({"@scalar": [1]}));
        assert!(matches!(node, Node::Object(_)));

        let node = Node::from(json!({"@type": 3, "@scalar": 1}));
        assert!(matches!(node, Node::Object(_)));
    }

    #[test]
    fn keeps_document_order() {
        let node = Node::from_json_str(r#"{"z": 1, "@type": "User", "a": 2}"#).unwrap();
        let keys: Vec<&str> = node.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "@type", "a"]);
        assert_eq!(node.to_json_string().unwrap(), r#"{"z":1,"@type":"User","a":2}"#);
    }

    #[test]
    fn numbers() {
        assert_eq!(Node::from(json!(3)), Node::from(3));
        assert_eq!(Node::from(json!(1.5)), Node::from(1.5));
        assert_eq!(Node::from(json!(u64::MAX)), Node::Scalar(Scalar::Float(u64::MAX as f64)));
        assert_eq!(JsonValue::from(Node::from(f64::NAN)), JsonValue::Null);
    }

    #[test]
    fn writes_carriers_back() {
        let value = JsonValue::from(Node::typed_carrier("integer", 5));
        assert_eq!(value, json!({"@type": "integer", "@scalar": 5}));
        assert_eq!(
            serde_json::to_value(Node::carrier(true)).unwrap(),
            json!({"@scalar": true})
        );
    }
}
