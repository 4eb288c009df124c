use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::core::tree::{TranslationTree, yaml_to_json};

/// Translations merged from every locale file under a directory.
#[derive(Debug, Default)]
pub struct LoadedTranslations {
    pub tree: TranslationTree,
    /// Files that were merged, in merge order.
    pub files: Vec<PathBuf>,
}

pub fn parse_yaml_str(content: &str) -> Result<TranslationTree> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    TranslationTree::try_from(yaml_to_json(yaml)?)
}

pub fn parse_yaml_file(path: &Path) -> Result<TranslationTree> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read YAML file: {:?}", path))?;

    parse_yaml_str(&content).with_context(|| format!("Failed to parse YAML file: {:?}", path))
}

fn is_locale_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml" | "yaml")
    )
}

/// Every `.yml` / `.yaml` file below `locale_dir`, sorted by path.
pub fn scan_locale_files(locale_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let locale_dir = locale_dir.as_ref();

    if !locale_dir.exists() {
        bail!(
            "Locale directory '{}' does not exist.\n\
             Hint: Check your 'rootPath' and 'localePath' settings.",
            locale_dir.display()
        );
    }

    if !locale_dir.is_dir() {
        bail!("'{}' is not a directory.", locale_dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(locale_dir).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Cannot access path under '{}'", locale_dir.display())
        })?;
        let path = entry.path();

        if entry.file_type().is_file() && is_locale_file(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Read every locale file below `locale_dir` and deep-merge them in path order.
///
/// Files are parsed in parallel; a file that fails to read or parse aborts the load.
pub fn load_translations(locale_dir: impl AsRef<Path>) -> Result<LoadedTranslations> {
    let files = scan_locale_files(locale_dir)?;

    let parsed = files
        .par_iter()
        .map(|path| parse_yaml_file(path))
        .collect::<Result<Vec<_>>>()?;

    let mut tree = TranslationTree::new();
    for file_tree in parsed {
        tree.merge(file_tree);
    }

    Ok(LoadedTranslations { tree, files })
}
