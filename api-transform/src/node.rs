//! The generic, type-tagged tree produced by the upstream serializer.
//!
//! The serializer emits plain maps with two reserved keys. This module turns
//! that shape into an explicit variant type:
//!
//! | Serializer shape | Variant |
//! |------------------|---------|
//! | primitive | [`Node::Scalar`] |
//! | `{"@type": "integer", "@scalar": 5}` | [`Node::Carrier`] |
//! | `{"@type": "App\\User", "name": ...}` | [`Node::Object`] |
//! | `[...]` | [`Node::List`] |
//!
//! Objects keep their type tag as an ordinary entry under
//! [`CLASS_IDENTIFIER_KEY`] so the tag stays where the serializer put it and
//! insertion order survives every transform.

use indexmap::IndexMap;

/// Reserved key holding the logical type name of an object.
pub const CLASS_IDENTIFIER_KEY: &str = "@type";

/// Reserved key holding the primitive wrapped by a scalar carrier.
pub const SCALAR_VALUE: &str = "@scalar";

/// Ordered property map of an object node.
///
/// Note that `IndexMap` equality ignores order; compare `keys()` when order matters.
pub type Map = IndexMap<String, Node>;

/// A primitive leaf value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(value) => Some(value),
            _ => None,
        }
    }

    /// Permissive emptiness test: `null`, `false`, `0`, `0.0`, `""` and `"0"`.
    #[allow(clippy::float_cmp)]
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Bool(value) => !value,
            Scalar::Int(value) => *value == 0,
            Scalar::Float(value) => *value == 0.0,
            Scalar::String(value) => value.is_empty() || value == "0",
        }
    }
}

/// A primitive the serializer wrapped for uniformity.
///
/// `scalar_type` is the primitive's type name as emitted by the serializer
/// (e.g. `"integer"`). It is informational only and is discarded on unwrap.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarCarrier {
    pub value: Scalar,
    pub scalar_type: Option<String>,
}

/// One node of a serializer tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Carrier(ScalarCarrier),
    Object(Map),
    List(Vec<Node>),
}

impl Node {
    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// Builds an object from `(property, value)` pairs, in order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Builds an object tagged with `type_name`; the tag is the first entry.
    pub fn typed<K, I>(type_name: &str, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        let mut map = Map::new();
        map.insert(CLASS_IDENTIFIER_KEY.to_string(), Node::from(type_name));
        map.extend(entries.into_iter().map(|(key, value)| (key.into(), value)));
        Node::Object(map)
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Node::List(items.into_iter().collect())
    }

    /// Wraps a primitive in an untagged scalar carrier.
    pub fn carrier(value: impl Into<Scalar>) -> Self {
        Node::Carrier(ScalarCarrier {
            value: value.into(),
            scalar_type: None,
        })
    }

    /// Wraps a primitive in a carrier tagged with its serializer type name.
    pub fn typed_carrier(scalar_type: &str, value: impl Into<Scalar>) -> Self {
        Node::Carrier(ScalarCarrier {
            value: value.into(),
            scalar_type: Some(scalar_type.to_string()),
        })
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Objects and lists are containers; carriers are not.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Object(_) | Node::List(_))
    }

    pub fn is_empty_container(&self) -> bool {
        match self {
            Node::Object(map) => map.is_empty(),
            Node::List(items) => items.is_empty(),
            Node::Scalar(_) | Node::Carrier(_) => false,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a property of an object node. Other variants have no properties.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Whether the node carries a [`CLASS_IDENTIFIER_KEY`] entry at all.
    pub fn has_type_marker(&self) -> bool {
        self.as_object()
            .is_some_and(|map| map.contains_key(CLASS_IDENTIFIER_KEY))
    }

    /// The node's logical type name.
    ///
    /// Returns `None` when the marker is absent or is not a string scalar, so a
    /// malformed tag never matches any type.
    pub fn type_tag(&self) -> Option<&str> {
        self.as_object().and_then(Node::tag_of)
    }

    pub(crate) fn tag_of(map: &Map) -> Option<&str> {
        map.get(CLASS_IDENTIFIER_KEY)
            .and_then(Node::as_scalar)
            .and_then(Scalar::as_str)
    }

    /// Permissive emptiness test used when collecting identifier values.
    ///
    /// Blank scalars and empty containers are blank. A carrier never is: the
    /// serializer's wrapper is itself a populated container, whatever it holds.
    pub fn is_blank(&self) -> bool {
        match self {
            Node::Scalar(scalar) => scalar.is_blank(),
            Node::Carrier(_) => false,
            Node::Object(map) => map.is_empty(),
            Node::List(items) => items.is_empty(),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::null()
    }
}

macro_rules! impl_scalar_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Scalar {
            fn from(value: $ty) -> Self {
                Scalar::$variant(value.into())
            }
        }

        impl From<$ty> for Node {
            fn from(value: $ty) -> Self {
                Node::Scalar(Scalar::from(value))
            }
        }
    };
}

impl_scalar_from!(bool, Bool);
impl_scalar_from!(i8, Int);
impl_scalar_from!(i16, Int);
impl_scalar_from!(i32, Int);
impl_scalar_from!(i64, Int);
impl_scalar_from!(u8, Int);
impl_scalar_from!(u16, Int);
impl_scalar_from!(u32, Int);
impl_scalar_from!(f32, Float);
impl_scalar_from!(f64, Float);
impl_scalar_from!(String, String);
impl_scalar_from!(&str, String);

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<Map> for Node {
    fn from(value: Map) -> Self {
        Node::Object(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(value)
    }
}
