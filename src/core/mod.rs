//! Core export engine.
//!
//! - `tree`: the merged translation tree and deep merge
//! - `scope`: scope paths and the scope filter
//! - `segment`: per-locale segments and the segment planner
//! - `parsers`: locale file discovery and YAML decoding
//! - `context`: the per-run input shared by every phase

pub mod context;
pub mod parsers;
pub mod scope;
pub mod segment;
pub mod tree;

pub use context::ExportContext;
pub use scope::ScopePath;
pub use segment::{LocaleCatalog, OutputSegments, plan};
pub use tree::TranslationTree;
