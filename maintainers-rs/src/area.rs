use std::ops::Index;

use indexmap::IndexMap;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::{Mapping, Value};

/// Either a single value or an ordered list of values. MAINTAINERS files
/// accept `F: docs/*` as shorthand for `F: [docs/*]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(pattern: &str) -> Self {
        OneOrMany::One(pattern.to_owned())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(pattern: String) -> Self {
        OneOrMany::One(pattern)
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(patterns: Vec<String>) -> Self {
        OneOrMany::Many(patterns)
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(patterns: &[&str]) -> Self {
        OneOrMany::Many(patterns.iter().map(|&p| p.to_owned()).collect())
    }
}

/// Name of the field holding an area's patterns.
pub const PATTERNS_FIELD: &str = "F";

/// One area of responsibility: the file patterns it covers (`F`) plus any
/// other fields the file carries, such as maintainer names or mailing lists.
/// All fields, `F` included, are kept exactly as read and in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRecord {
    patterns: OneOrMany<String>,
    fields: Mapping,
}

impl AreaRecord {
    pub fn new(patterns: impl Into<OneOrMany<String>>) -> Self {
        let patterns = patterns.into();
        let mut fields = Mapping::new();
        fields.insert(Value::from(PATTERNS_FIELD), patterns_value(&patterns));
        Self { patterns, fields }
    }

    pub fn patterns(&self) -> &OneOrMany<String> {
        &self.patterns
    }

    /// Add a field, or replace it in place if it already exists. Setting `F`
    /// to something other than a pattern or a list of patterns is ignored.
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if name == PATTERNS_FIELD {
            match OneOrMany::deserialize(value.clone()) {
                Ok(patterns) => self.patterns = patterns,
                Err(_) => return self,
            }
        }
        self.fields.insert(Value::from(name), value);
        self
    }

    /// Look up a field by name, `F` included.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Every field in file order, `F` included.
    pub fn fields(&self) -> &Mapping {
        &self.fields
    }
}

fn patterns_value(patterns: &OneOrMany<String>) -> Value {
    match patterns {
        OneOrMany::One(pattern) => Value::from(pattern.as_str()),
        OneOrMany::Many(patterns) => {
            Value::Sequence(patterns.iter().map(|p| Value::from(p.as_str())).collect())
        }
    }
}

impl Serialize for AreaRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AreaRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Mapping::deserialize(deserializer)?;
        let patterns = fields
            .get(PATTERNS_FIELD)
            .ok_or_else(|| D::Error::missing_field(PATTERNS_FIELD))?;
        let patterns = OneOrMany::deserialize(patterns.clone())
            .map_err(|err| D::Error::custom(format!("invalid `F` field: {err}")))?;
        Ok(Self { patterns, fields })
    }
}

/// Owner-key to area mapping, as read from a MAINTAINERS file. Iteration
/// follows insertion (file) order, which keeps pattern flattening, and with it
/// tie-breaking between equally long patterns, reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnershipMap(IndexMap<String, AreaRecord>);

impl OwnershipMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert an area, returning the record previously stored under `key`.
    /// Replacing a key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, record: AreaRecord) -> Option<AreaRecord> {
        self.0.insert(key.into(), record)
    }

    pub fn get(&self, key: &str) -> Option<&AreaRecord> {
        self.0.get(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AreaRecord> {
        self.0.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, AreaRecord> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of patterns across all areas.
    pub fn pattern_count(&self) -> usize {
        self.0.values().map(|record| record.patterns().len()).sum()
    }
}

/// Panics if `key` is not in the map.
impl Index<&str> for OwnershipMap {
    type Output = AreaRecord;

    fn index(&self, key: &str) -> &AreaRecord {
        &self.0[key]
    }
}

impl<K: Into<String>> FromIterator<(K, AreaRecord)> for OwnershipMap {
    fn from_iter<I: IntoIterator<Item = (K, AreaRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a OwnershipMap {
    type Item = (&'a String, &'a AreaRecord);
    type IntoIter = indexmap::map::Iter<'a, String, AreaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
