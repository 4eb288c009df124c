//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `export`: Convert the Rails locale files into JSON/JS segments
//! - `init`: Initialize an i18n-js options file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Options;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Export(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Option overrides shared by commands that run an export.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Root directory of the Rails application (overrides config file)
    #[arg(long, env = "I18N_JS_ROOT_PATH")]
    pub root_path: Option<PathBuf>,

    /// Locale directory, relative to the root path (overrides config file)
    #[arg(long)]
    pub locale_path: Option<String>,

    /// Segment configuration file, relative to the root path (overrides config file)
    #[arg(long)]
    pub config_file: Option<String>,

    /// Locales to export, comma separated (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub locales: Option<Vec<String>>,

    /// Locale used when a fallback cannot be resolved (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Write raw JSON instead of a JS snippet
    #[arg(long)]
    pub json: bool,

    /// Directory segment paths are written under (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply CLI overrides on top of file/default options.
    pub fn apply_to(&self, options: &mut Options) {
        if let Some(ref root_path) = self.root_path {
            options.root_path = Some(root_path.to_string_lossy().to_string());
        }
        if let Some(ref locale_path) = self.locale_path {
            options.locale_path = locale_path.clone();
        }
        if let Some(ref config_file) = self.config_file {
            options.config_file = config_file.clone();
        }
        if let Some(ref locales) = self.locales {
            options.locales = locales.clone();
        }
        if let Some(ref default_locale) = self.default_locale {
            options.default_locale = default_locale.clone();
        }
        if self.json {
            options.save_as_json = true;
        }
        if let Some(ref output_dir) = self.output_dir {
            options.output_dir = output_dir.to_string_lossy().to_string();
        }
    }
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Plan the segments and list them without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub args: ExportArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert Rails locale files into JSON/JS translation segments
    Export(ExportCommand),
    /// Initialize a new .i18njsrc.json options file
    Init,
}
