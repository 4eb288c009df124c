//! Locale file parsers.
//!
//! - `yaml`: Rails locale YAML files (walks the locale directory)

pub mod yaml;
