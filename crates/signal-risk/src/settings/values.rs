use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Current form values keyed by setting name, in insertion order.
///
/// Names are free-form: entries without a rule are carried along and ignored
/// by the evaluator. Inserting an existing name replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingValues {
    entries: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingInputError {
    #[error("expected NAME=VALUE, got '{0}'")]
    MissingSeparator(String),
    #[error("setting name is empty in '{0}'")]
    EmptyName(String),
    #[error("value for '{name}' is not a number: '{value}'")]
    NotANumber { name: String, value: String },
    #[error("value for '{name}' must be finite")]
    NotFinite { name: String },
}

impl SettingValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends every entry of `other`, replacing values already present.
    pub fn merge(&mut self, other: SettingValues) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Parses a `NAME=VALUE` pair as given on the command line.
    pub fn parse_pair(raw: &str) -> Result<(String, f64), SettingInputError> {
        let (name, value) = raw
            .split_once('=')
            .ok_or_else(|| SettingInputError::MissingSeparator(raw.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(SettingInputError::EmptyName(raw.to_string()));
        }

        let value_raw = value.trim();
        let value: f64 = value_raw
            .parse()
            .map_err(|_| SettingInputError::NotANumber {
                name: name.to_string(),
                value: value_raw.to_string(),
            })?;
        if !value.is_finite() {
            return Err(SettingInputError::NotFinite {
                name: name.to_string(),
            });
        }

        Ok((name.to_string(), value))
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, SettingInputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = Self::new();
        for pair in pairs {
            let (name, value) = Self::parse_pair(pair.as_ref())?;
            values.insert(name, value);
        }
        Ok(values)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SettingValues {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl Serialize for SettingValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SettingValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = SettingValues;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of setting names to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut values = SettingValues::new();
                while let Some((name, value)) = access.next_entry::<String, f64>()? {
                    values.insert(name, value);
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
