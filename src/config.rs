use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::scope::ScopePath;

pub const CONFIG_FILE_NAME: &str = ".i18njsrc.json";

/// Locales exported when the options don't name any. The first entry is the
/// conventional default locale.
pub const DEFAULT_LOCALES: &[&str] = &[
    "en", "de", "es", "it", "nl", "fr", "cs", "ja", "pl", "pt-br", "pt-pt", "ru", "zh", "tr", "ko",
];

/// Run options, read from `.i18njsrc.json` and overridden by CLI flags.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Root of the Rails application. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,
    #[serde(default = "default_locale_path", alias = "localeSubpath")]
    pub locale_path: String,
    #[serde(default = "default_config_file")]
    pub config_file: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
    #[serde(default, alias = "outputAsJSON")]
    pub save_as_json: bool,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_locale_path() -> String {
    "app/locales".to_string()
}

fn default_config_file() -> String {
    "config/i18n-js.yml".to_string()
}

fn default_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect()
}

fn default_default_locale() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_path: None,
            locale_path: default_locale_path(),
            config_file: default_config_file(),
            locales: default_locales(),
            default_locale: default_default_locale(),
            save_as_json: false,
            output_dir: default_output_dir(),
        }
    }
}

impl Options {
    /// Validate option values.
    ///
    /// Returns an error if the locale list is empty or has blank or duplicate codes.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            if locale.trim().is_empty() {
                bail!("'locales' contains an empty locale code");
            }
            if !seen.insert(locale.as_str()) {
                bail!("Duplicate locale in 'locales': \"{}\"", locale);
            }
        }

        if self.default_locale.trim().is_empty() {
            bail!("'defaultLocale' must not be empty");
        }

        Ok(())
    }

    /// The application root. Fails when no root path was given.
    pub fn root_dir(&self) -> Result<PathBuf> {
        match &self.root_path {
            Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
            _ => bail!(
                "You need to provide the rootPath option.\n\
                 Hint: Pass --root-path or set 'rootPath' in {}.",
                CONFIG_FILE_NAME
            ),
        }
    }

    /// Directory walked for locale files.
    pub fn locale_dir(&self, root: &Path) -> PathBuf {
        join_under(root, &self.locale_path)
    }

    /// Location of the segment configuration file.
    pub fn segment_config_path(&self, root: &Path) -> PathBuf {
        join_under(root, &self.config_file)
    }
}

/// Join `sub` below `root`. A leading `/` in `sub` is read as relative to `root`.
fn join_under(root: &Path, sub: &str) -> PathBuf {
    let sub = sub.trim_start_matches('/');
    if sub.is_empty() {
        root.to_path_buf()
    } else {
        root.join(sub)
    }
}

/// Pretty-printed default options, as written by `init`.
pub fn default_options_json() -> Result<String> {
    serde_json::to_string_pretty(&Options::default())
        .context("Failed to serialize the default options")
}

/// Look for the options file in `start_dir` and each of its ancestors.
///
/// The search stops after the first directory containing `.git`.
pub fn find_options_file(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Options together with the file they were read from.
#[derive(Debug)]
pub struct LoadedOptions {
    pub options: Options,
    /// `None` when no options file was found and defaults are used.
    pub source: Option<PathBuf>,
}

/// Load options from the nearest options file above `start_dir`.
///
/// A relative `start_dir` is made absolute first so the search can climb
/// past it.
pub fn load_options(start_dir: &Path) -> Result<LoadedOptions> {
    let start_dir = std::path::absolute(start_dir)
        .with_context(|| format!("Failed to resolve directory: {:?}", start_dir))?;

    let Some(path) = find_options_file(&start_dir) else {
        return Ok(LoadedOptions {
            options: Options::default(),
            source: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read options file: {:?}", path))?;
    let options: Options = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse options file: {:?}", path))?;
    options
        .validate()
        .with_context(|| format!("Invalid options in {:?}", path))?;

    Ok(LoadedOptions {
        options,
        source: Some(path),
    })
}

/// Whether and where a locale segment borrows missing translations from.
///
/// In YAML `fallback: false` disables it, `fallback: true` uses the default
/// locale and `fallback: de` asks for a specific locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<RawFallback>")]
pub enum Fallback {
    #[default]
    Disabled,
    Default,
    Locale(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFallback {
    Flag(bool),
    Locale(String),
}

impl From<Option<RawFallback>> for Fallback {
    fn from(raw: Option<RawFallback>) -> Self {
        match raw {
            None | Some(RawFallback::Flag(false)) => Fallback::Disabled,
            Some(RawFallback::Flag(true)) => Fallback::Default,
            Some(RawFallback::Locale(locale)) if locale.is_empty() => Fallback::Disabled,
            Some(RawFallback::Locale(locale)) => Fallback::Locale(locale),
        }
    }
}

/// One entry of the `translations` list in `config/i18n-js.yml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SegmentSpec {
    /// Output path, may contain `%{locale}`.
    pub file: String,
    #[serde(default)]
    pub only: ScopePath,
    #[serde(default)]
    pub fallback: Fallback,
}

#[derive(Debug, Default, Deserialize)]
struct SegmentConfigFile {
    #[serde(default)]
    translations: Option<Vec<SegmentSpec>>,
}

/// Load the `translations` list from the segment configuration file.
///
/// A missing file, an empty file or a file without a `translations` key all
/// yield `None`.
pub fn load_segment_specs(path: &Path) -> Result<Option<Vec<SegmentSpec>>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    parse_segment_specs(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}

fn parse_segment_specs(content: &str) -> Result<Option<Vec<SegmentSpec>>> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if value.is_null() {
        return Ok(None);
    }

    let file: SegmentConfigFile = serde_yaml::from_value(value)?;
    Ok(file.translations.filter(|specs| !specs.is_empty()))
}
