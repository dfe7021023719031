//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes key extraction to AI assistants as MCP tools over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific parameter and result types

mod server;
pub mod types;

pub use server::{KeysweepMcpServer, run_server};
