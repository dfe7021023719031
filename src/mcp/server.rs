use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{Config, load_config},
    core::{ExtractionProcessor, ProcessorRegistry},
};

use super::types::{
    ConfigDto, ConfigValues, ExtractKeysParams, ExtractKeysResult, GetConfigParams, Pagination,
    ProjectTypesResult, SkippedItem,
};

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 500;

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[derive(Clone)]
pub struct KeysweepMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for KeysweepMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl KeysweepMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Extract translation keys used under a directory
    #[tool(
        description = "Extract the distinct translation keys referenced in a source tree. Returns sorted keys (paginated) plus the number of scanned files and any paths that could not be read."
    )]
    pub async fn extract_keys(
        &self,
        params: Parameters<ExtractKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);
        let limit = params
            .0
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let mut config = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?
            .config;
        if let Some(project_type) = &params.0.project_type {
            config.project_type = project_type.clone();
        }

        let registry = ProcessorRegistry::from_config(&config).map_err(|e| {
            McpError::internal_error(format!("Failed to initialize: {:#}", e), None)
        })?;
        let processor = registry
            .get(&config.project_type)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let result = processor.process(root);
        let sorted = result.sorted_keys();
        let total_key_count = sorted.len();

        // Apply pagination
        let keys: Vec<String> = sorted
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(String::from)
            .collect();
        let has_more = offset + keys.len() < total_key_count;

        to_json_result(&ExtractKeysResult {
            project_type: processor.project_type().to_string(),
            total_key_count,
            scanned_file_count: result.scanned_files().len(),
            skipped: result.skipped().iter().map(SkippedItem::from).collect(),
            keys,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// List supported project types
    #[tool(description = "List the project type identifiers keysweep can extract keys for.")]
    pub async fn list_project_types(&self) -> Result<CallToolResult, McpError> {
        let registry = ProcessorRegistry::from_config(&Config::default()).map_err(|e| {
            McpError::internal_error(format!("Failed to initialize: {:#}", e), None)
        })?;

        to_json_result(&ProjectTypesResult {
            project_types: registry
                .project_types()
                .into_iter()
                .map(String::from)
                .collect(),
        })
    }

    /// Get the current keysweep configuration
    #[tool(description = "Get the keysweep configuration that applies to a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        to_json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

#[tool_handler]
impl ServerHandler for KeysweepMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Keysweep MCP reports which translation keys a project actually uses.\n\n\
                 Available tools:\n\
                 1. list_project_types - Get supported project type identifiers\n\
                 2. get_config - Get project configuration (call names, extensions, ignores)\n\
                 3. extract_keys - Get the sorted, deduplicated keys used in a source tree (paginated)\n\n\
                 Only string-literal first arguments of recognized calls (e.g. t('home.title')) are keys.\n\
                 Keys built from variables or template literals are not reported."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = KeysweepMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
