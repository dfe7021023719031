//! Keysweep - translation key extraction for i18next projects
//!
//! Keysweep is a CLI tool and library that scans a source tree and reports the
//! distinct translation keys it references, so key inventories can be checked
//! against translation catalogs in CI.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, report printing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (find files, extract keys, union results)
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
