//! Scope paths and the scope filter.
//!
//! A scope is a dotted path into the translation tree (`"en.date.formats"`).
//! The segment `*` matches every key at its level, so `"*.greeting"` selects
//! `greeting` under every locale.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::tree::TranslationTree;

/// The wildcard segment.
pub const WILDCARD: &str = "*";

/// Scope as written in the configuration: one dotted path or a list of them.
///
/// Lists may nest one level (`[[a.b, c], d]`); nested groups are flattened
/// into the outer list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScopePath {
    Single(String),
    Many(#[serde(deserialize_with = "flatten_one_level")] Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScopeEntry {
    Path(String),
    Group(Vec<String>),
}

fn flatten_one_level<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<ScopeEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .flat_map(|entry| match entry {
            ScopeEntry::Path(path) => vec![path],
            ScopeEntry::Group(group) => group,
        })
        .collect())
}

impl Default for ScopePath {
    fn default() -> Self {
        ScopePath::Single(WILDCARD.to_string())
    }
}

impl From<&str> for ScopePath {
    fn from(scope: &str) -> Self {
        ScopePath::Single(scope.to_string())
    }
}

impl ScopePath {
    /// Flatten into the list of dotted scopes it names.
    pub fn scopes(&self) -> Vec<&str> {
        match self {
            ScopePath::Single(scope) => vec![scope.as_str()],
            ScopePath::Many(scopes) => scopes.iter().map(String::as_str).collect(),
        }
    }

    /// Split every scope into its segments.
    pub fn normalize(&self) -> Vec<Vec<String>> {
        self.scopes().into_iter().map(split_scope).collect()
    }

    /// Normalized scopes with `locale` prepended to each path.
    pub fn with_locale(&self, locale: &str) -> Vec<Vec<String>> {
        self.normalize()
            .into_iter()
            .map(|segments| {
                let mut qualified = Vec::with_capacity(segments.len() + 1);
                qualified.push(locale.to_string());
                qualified.extend(segments);
                qualified
            })
            .collect()
    }
}

pub fn split_scope(scope: &str) -> Vec<String> {
    scope.split('.').map(str::to_string).collect()
}

/// Extract the branches of `tree` addressed by `path`, keeping the full
/// nesting from the root down to each match.
///
/// Returns an empty tree when nothing matches.
pub fn filter<S: AsRef<str>>(tree: &TranslationTree, path: &[S]) -> TranslationTree {
    TranslationTree::from(filter_map(tree.as_map(), path))
}

fn filter_map<S: AsRef<str>>(map: &Map<String, Value>, path: &[S]) -> Map<String, Value> {
    let mut result = Map::new();
    let Some((head, rest)) = path.split_first() else {
        return result;
    };
    let head = head.as_ref();

    if head == WILDCARD {
        for (key, child) in map {
            if let Some(value) = descend(child, rest) {
                result.insert(key.clone(), value);
            }
        }
    } else if let Some(child) = map.get(head)
        && let Some(value) = descend(child, rest)
    {
        result.insert(head.to_string(), value);
    }

    result
}

/// The value to keep for `child` given the remaining path segments.
fn descend<S: AsRef<str>>(child: &Value, rest: &[S]) -> Option<Value> {
    if rest.is_empty() {
        return Some(child.clone());
    }

    let Value::Object(map) = child else {
        return None;
    };

    let filtered = filter_map(map, rest);
    if filtered.is_empty() {
        None
    } else {
        Some(Value::Object(filtered))
    }
}

/// Union of `filter` applied to every path in `paths`.
pub fn scoped_translations<S: AsRef<str>>(
    tree: &TranslationTree,
    paths: &[Vec<S>],
) -> TranslationTree {
    let mut result = TranslationTree::new();
    for path in paths {
        result.merge(filter(tree, path));
    }
    result
}
