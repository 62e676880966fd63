//! Per-type configuration consumed by the transforms.
//!
//! The transforms only ever read two things about a type: which properties
//! must be hidden and which properties form its identifier. [`TypeMapping`] is
//! that read-only seam. [`Mappings`] is the in-memory store shipped with the
//! crate; callers with their own configuration layer can implement the trait
//! directly.

use std::collections::BTreeMap;

/// Read-only lookup of hidden and identifier properties by type name.
///
/// Lookups for unknown types return empty slices; they never fail.
pub trait TypeMapping {
    /// Property names to strip from nodes of `type_name`.
    fn hidden_properties(&self, type_name: &str) -> &[String];

    /// Property names forming the identifier of `type_name`, in declared order.
    fn id_properties(&self, type_name: &str) -> &[String];
}

impl<T> TypeMapping for &T
where
    T: TypeMapping + ?Sized,
{
    fn hidden_properties(&self, type_name: &str) -> &[String] {
        (**self).hidden_properties(type_name)
    }

    fn id_properties(&self, type_name: &str) -> &[String] {
        (**self).id_properties(type_name)
    }
}

/// Mapping of a single type.
///
/// With the `serde` feature a mapping reads from configuration as
/// `{ "type": "App\\Model\\User", "hidden": ["password"], "id": ["id"] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mapping {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    type_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "hidden", default))]
    hidden_properties: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "id", default))]
    id_properties: Vec<String>,
}

impl Mapping {
    /// Creates a mapping with no hidden or identifier properties.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            hidden_properties: Vec::new(),
            id_properties: Vec::new(),
        }
    }

    /// Adds properties to hide. Duplicates are ignored.
    #[must_use]
    pub fn with_hidden_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.hidden_properties, properties);
        self
    }

    /// Appends identifier properties, keeping declaration order. Duplicates are ignored.
    #[must_use]
    pub fn with_id_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.id_properties, properties);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn hidden_properties(&self) -> &[String] {
        &self.hidden_properties
    }

    pub fn id_properties(&self) -> &[String] {
        &self.id_properties
    }
}

fn push_unique<I, S>(target: &mut Vec<String>, properties: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for property in properties {
        let property = property.into();
        if !target.contains(&property) {
            target.push(property);
        }
    }
}

/// A Rust type that declares its own mapping.
///
/// Usually implemented with `#[derive(Mapped)]`:
///
/// ```text
/// #[derive(Mapped)]
/// #[mapping(name = "App\\Model\\User")]
/// struct User {
///     #[mapping(id)]
///     id: u64,
///     #[mapping(hidden)]
///     password: String,
/// }
/// ```
pub trait MappedType {
    /// Type name as it appears under the class-identifier key.
    fn type_name() -> &'static str;

    fn hidden_properties() -> &'static [&'static str];

    fn id_properties() -> &'static [&'static str];

    /// Builds the runtime [`Mapping`] for this type.
    fn mapping() -> Mapping {
        Mapping::new(Self::type_name())
            .with_hidden_properties(Self::hidden_properties().iter().copied())
            .with_id_properties(Self::id_properties().iter().copied())
    }
}

/// In-memory mapping store keyed by type name.
///
/// With the `serde` feature the store reads from a list of [`Mapping`]
/// records; later records for the same type replace earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Mapping>", into = "Vec<Mapping>")
)]
pub struct Mappings {
    by_type: BTreeMap<String, Mapping>,
}

impl Mappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `mapping`, returning the one it replaced.
    pub fn insert(&mut self, mapping: Mapping) -> Option<Mapping> {
        self.by_type.insert(mapping.type_name.clone(), mapping)
    }

    /// Builder form of [`Mappings::insert`].
    #[must_use]
    pub fn with(mut self, mapping: Mapping) -> Self {
        self.insert(mapping);
        self
    }

    /// Stores the mapping declared by `T`.
    pub fn register<T: MappedType>(&mut self) -> Option<Mapping> {
        self.insert(T::mapping())
    }

    pub fn get(&self, type_name: &str) -> Option<&Mapping> {
        self.by_type.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.by_type.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.by_type.values()
    }

    /// Reads a mapping store from a JSON list of mapping records.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl TypeMapping for Mappings {
    fn hidden_properties(&self, type_name: &str) -> &[String] {
        self.get(type_name)
            .map(Mapping::hidden_properties)
            .unwrap_or_default()
    }

    fn id_properties(&self, type_name: &str) -> &[String] {
        self.get(type_name)
            .map(Mapping::id_properties)
            .unwrap_or_default()
    }
}

impl FromIterator<Mapping> for Mappings {
    fn from_iter<I: IntoIterator<Item = Mapping>>(iter: I) -> Self {
        let mut mappings = Self::new();
        mappings.extend(iter);
        mappings
    }
}

impl Extend<Mapping> for Mappings {
    fn extend<I: IntoIterator<Item = Mapping>>(&mut self, iter: I) {
        for mapping in iter {
            self.insert(mapping);
        }
    }
}

impl From<Vec<Mapping>> for Mappings {
    fn from(value: Vec<Mapping>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Mappings> for Vec<Mapping> {
    fn from(value: Mappings) -> Self {
        value.by_type.into_values().collect()
    }
}
