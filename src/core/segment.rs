//! Splitting the translation tree into output segments.
//!
//! A segment is one output file: a resolved path and the translations it
//! carries. Segments come from the `translations` list of the segment
//! configuration, or default to a single file holding everything.

use serde_json::{Map, Value};

use super::{
    context::ExportContext,
    scope::{ScopePath, scoped_translations},
    tree::TranslationTree,
};
use crate::config::{Fallback, SegmentSpec};

/// Placeholder replaced by the locale code in segment file patterns.
pub const LOCALE_PLACEHOLDER: &str = "%{locale}";

/// Directory of the single segment written when nothing is configured.
pub const EXPORT_DIR: &str = "public/javascripts";

/// Output path → payload, in insertion order. Payloads are never empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputSegments(Map<String, Value>);

impl OutputSegments {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.0.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Insert a segment, replacing any earlier one with the same path.
    /// Empty payloads are dropped.
    pub fn insert(&mut self, path: impl Into<String>, payload: TranslationTree) {
        if !payload.is_empty() {
            self.0.insert(path.into(), payload.into_value());
        }
    }

    /// Add all segments of `other`; `other` wins on path collisions.
    pub fn extend(&mut self, other: OutputSegments) {
        self.0.extend(other.0);
    }
}

/// The ordered list of locales segments are produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    locales: Vec<String>,
    default_locale: String,
}

impl LocaleCatalog {
    pub fn new(locales: Vec<String>, default_locale: impl Into<String>) -> Self {
        Self {
            locales,
            default_locale: default_locale.into(),
        }
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// The locale a fallback actually resolves to, or `None` when disabled.
    ///
    /// A requested locale is honoured only if it sits after the first catalog
    /// entry. Anything else, the first entry included, resolves to the default
    /// locale.
    pub fn resolve_fallback<'a>(&'a self, fallback: &'a Fallback) -> Option<&'a str> {
        match fallback {
            Fallback::Disabled => None,
            Fallback::Default => Some(self.default_locale()),
            Fallback::Locale(requested) => {
                let index = self.locales.iter().position(|l| l == requested);
                match index {
                    Some(i) if i > 0 => Some(requested.as_str()),
                    _ => Some(self.default_locale()),
                }
            }
        }
    }
}

/// Replace every `%{locale}` in `pattern` with `locale`.
pub fn resolve_pattern(pattern: &str, locale: &str) -> String {
    pattern.replace(LOCALE_PLACEHOLDER, locale)
}

/// One segment per catalog locale, scoped to that locale, with the fallback
/// locale's translations filling the gaps when a fallback is set.
pub fn segments_per_locale(
    tree: &TranslationTree,
    catalog: &LocaleCatalog,
    pattern: &str,
    scope: &ScopePath,
    fallback: &Fallback,
) -> OutputSegments {
    let mut segments = OutputSegments::new();
    let fallback_locale = catalog.resolve_fallback(fallback);

    for locale in catalog.locales() {
        let mut result = scoped_translations(tree, &scope.with_locale(locale));

        if let Some(fallback_locale) = fallback_locale {
            merge_with_fallback(&mut result, tree, locale, scope, fallback_locale);
        }

        segments.insert(resolve_pattern(pattern, locale), result);
    }

    segments
}

/// Fill `result[locale]` from the fallback locale's translations for the same scope.
///
/// `result[locale]` always exists afterwards, empty when neither side has
/// anything in scope.
fn merge_with_fallback(
    result: &mut TranslationTree,
    tree: &TranslationTree,
    locale: &str,
    scope: &ScopePath,
    fallback_locale: &str,
) {
    let mut localized = result.take_subtree(locale).unwrap_or_default();

    let mut fallback_result = scoped_translations(tree, &scope.with_locale(fallback_locale));
    if let Some(base) = fallback_result.take_subtree(fallback_locale) {
        localized.merge_under(base);
    }

    result.insert(locale, localized.into_value());
}

/// Segment for a file pattern without a locale placeholder.
pub fn segment_for_scope(tree: &TranslationTree, scope: &ScopePath) -> TranslationTree {
    scoped_translations(tree, &scope.normalize())
}

/// Plan every output segment of a run.
pub fn plan(ctx: &ExportContext) -> OutputSegments {
    match ctx.segment_specs() {
        Some(specs) => configured_segments(ctx.translations(), ctx.catalog(), specs),
        None => single_file_export(ctx.translations()),
    }
}

fn configured_segments(
    tree: &TranslationTree,
    catalog: &LocaleCatalog,
    specs: &[SegmentSpec],
) -> OutputSegments {
    let mut segments = OutputSegments::new();

    for spec in specs {
        if spec.file.contains(LOCALE_PLACEHOLDER) {
            segments.extend(segments_per_locale(
                tree,
                catalog,
                &spec.file,
                &spec.only,
                &spec.fallback,
            ));
        } else {
            segments.insert(spec.file.clone(), segment_for_scope(tree, &spec.only));
        }
    }

    segments
}

fn single_file_export(tree: &TranslationTree) -> OutputSegments {
    let mut segments = OutputSegments::new();
    segments.insert(format!("{}/translations.js", EXPORT_DIR), tree.clone());
    segments
}
