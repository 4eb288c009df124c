//! The merged translation tree.
//!
//! A `TranslationTree` is an ordered mapping from key to value. Object values
//! are nested trees; anything else (strings, numbers, booleans, null,
//! sequences) is an opaque leaf. Key order follows the order keys were first
//! seen in the locale files.

use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TranslationTree(Map<String, Value>);

impl TranslationTree {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Deep-merge `source` into `self`. Scalars in `source` replace whatever is
    /// at the same path; mappings on both sides are merged key by key.
    pub fn merge(&mut self, source: TranslationTree) {
        merge_maps(&mut self.0, source.0);
    }

    /// Fill the gaps of `self` with `base`. Values already present in `self` win.
    pub fn merge_under(&mut self, base: TranslationTree) {
        let mut merged = base;
        merged.merge(std::mem::take(self));
        *self = merged;
    }

    /// Take the sub-tree stored under `key`, if it is a mapping.
    pub fn take_subtree(&mut self, key: &str) -> Option<TranslationTree> {
        match self.0.remove(key) {
            Some(Value::Object(map)) => Some(Self(map)),
            Some(other) => {
                self.0.insert(key.to_string(), other);
                None
            }
            None => None,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for TranslationTree {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for TranslationTree {
    type Error = anyhow::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => bail!(
                "Root of a translation tree must be a mapping, got {}",
                kind(&other)
            ),
        }
    }
}

fn merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(incoming) => match target.get_mut(&key) {
                Some(Value::Object(existing)) => merge_maps(existing, incoming),
                _ => {
                    target.insert(key, Value::Object(incoming));
                }
            },
            value => {
                target.insert(key, value);
            }
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Convert a decoded YAML document into a JSON value.
///
/// Mapping keys that are YAML scalars (`1:`, `true:`) become strings, tags are
/// dropped and non-finite floats become null.
pub fn yaml_to_json(value: serde_yaml::Value) -> Result<Value> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    Ok(match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value)?,
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
            bail!("Mapping keys must be scalars")
        }
    })
}
