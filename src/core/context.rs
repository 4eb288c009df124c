use std::{env, path::PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Options, SegmentSpec, load_options, load_segment_specs},
    core::{
        parsers::yaml::load_translations,
        segment::LocaleCatalog,
        tree::TranslationTree,
    },
};

/// Everything one export run needs, built once and read-only afterwards.
///
/// # Configuration Priority
///
/// Options are resolved with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--root-path ../rails`)
/// 2. `.i18njsrc.json` config file
/// 3. Built-in defaults
#[derive(Debug)]
pub struct ExportContext {
    /// Merged options (CLI args > config file > defaults).
    pub options: Options,

    /// Directory segment paths are resolved against when writing.
    pub output_dir: PathBuf,

    /// Locale files that were merged into `translations`, in merge order.
    pub locale_files: Vec<PathBuf>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    translations: TranslationTree,
    segment_specs: Option<Vec<SegmentSpec>>,
    catalog: LocaleCatalog,
}

impl ExportContext {
    /// Create an `ExportContext` from command line arguments.
    ///
    /// This constructor:
    /// 1. Loads options (CLI args > config file > defaults)
    /// 2. Reads and merges every locale file under the locale directory
    /// 3. Reads the segment configuration, if present
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The options file is invalid
    /// - No root path was given
    /// - The locale directory doesn't exist
    /// - A locale file or the segment configuration is malformed
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let cwd = env::current_dir().context("Failed to read the working directory")?;
        let loaded = load_options(&cwd)?;
        if verbose {
            match &loaded.source {
                Some(path) => eprintln!("Using options from {}", path.display()),
                None => eprintln!("Note: No .i18njsrc.json found, using default options"),
            }
        }

        let mut options = loaded.options;
        common_args.apply_to(&mut options);

        Self::load(options, verbose)
    }

    /// Load translations and segment configuration for already resolved options.
    pub fn load(options: Options, verbose: bool) -> Result<Self> {
        options.validate()?;
        // Fails before touching the file system when no root was given.
        let root_dir = options.root_dir()?;

        let locale_dir = options.locale_dir(&root_dir);
        let loaded = load_translations(&locale_dir)
            .with_context(|| format!("Failed to load locales from '{}'", locale_dir.display()))?;

        if verbose {
            for file in &loaded.files {
                eprintln!("Read {}", file.display());
            }
        }

        let config_path = options.segment_config_path(&root_dir);
        let segment_specs = load_segment_specs(&config_path)?;
        if verbose && segment_specs.is_none() {
            eprintln!(
                "Note: No translations configured in {}, exporting a single file",
                config_path.display()
            );
        }

        Ok(Self {
            output_dir: PathBuf::from(&options.output_dir),
            catalog: LocaleCatalog::new(options.locales.clone(), options.default_locale.clone()),
            locale_files: loaded.files,
            translations: loaded.tree,
            segment_specs,
            options,
            verbose,
        })
    }

    /// Build a context from data already in memory.
    pub fn from_parts(
        options: Options,
        translations: TranslationTree,
        segment_specs: Option<Vec<SegmentSpec>>,
    ) -> Self {
        Self {
            output_dir: PathBuf::from(&options.output_dir),
            catalog: LocaleCatalog::new(options.locales.clone(), options.default_locale.clone()),
            locale_files: Vec::new(),
            translations,
            segment_specs,
            options,
            verbose: false,
        }
    }

    pub fn translations(&self) -> &TranslationTree {
        &self.translations
    }

    /// The configured segments, or `None` when the single-file export applies.
    pub fn segment_specs(&self) -> Option<&[SegmentSpec]> {
        self.segment_specs.as_deref()
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }
}
