//! i18n-js - Rails locale exporter for the I18n JavaScript library
//!
//! i18n-js is a CLI tool and library that reads the YAML locale files of a
//! Rails application, merges them into one translation tree and splits that
//! tree into JSON or JS files according to a segment configuration.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Options file and segment configuration loading
//! - `core`: Export engine (merge, scope filter, segment planning)
//! - `writer`: Rendering and writing output segments

pub mod cli;
pub mod config;
pub mod core;
pub mod writer;
