use anyhow::{anyhow, Result};
use log::{debug, error, info};
use serde_json::json;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter},
    sync::Mutex,
};

use crate::{
    config::HEADER_EXTENSION,
    protocol::{McpRequest, McpResponse},
};

pub struct SkeletonGenServer {
    pub(super) workspace_root: PathBuf,
}

impl Default for SkeletonGenServer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkeletonGenServer {
    pub fn new() -> Self {
        Self {
            workspace_root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn with_workspace(workspace_root: PathBuf) -> Self {
        Self {
            workspace_root: absolute_workspace_root(workspace_root),
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Resolves a tool-supplied header path against the workspace root.
    /// Only `.h` files are accepted.
    pub(super) fn resolve_header(&self, file_path: &str) -> Result<(PathBuf, String)> {
        let path = PathBuf::from(file_path);
        let path = if path.is_absolute() {
            path
        } else {
            self.workspace_root.join(path)
        };

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if extension != HEADER_EXTENSION {
            return Err(anyhow!(
                "Not a header file (expected .{}): {}",
                HEADER_EXTENSION,
                file_path
            ));
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return Err(anyhow!("Invalid header path: {}", file_path));
        };
        let stem = stem.to_string();

        Ok((path, stem))
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("Starting skeletongen MCP server");

        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut writer = BufWriter::new(stdout);

        // Handle shutdown signals.
        let running = Arc::new(Mutex::new(true));
        let running_clone = Arc::clone(&running);

        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
            *running_clone.lock().await = false;
        });

        loop {
            // Check if we should stop.
            if !*running.lock().await {
                break;
            }

            let mut line = String::new();
            let bytes_read = match reader.read_line(&mut line).await {
                Ok(n) => n,
                Err(e) => {
                    error!("Error reading from stdin: {}", e);
                    break;
                }
            };

            if bytes_read == 0 {
                break; // EOF
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Ok(request) = serde_json::from_str::<McpRequest>(line) else {
                debug!("Failed to parse request: {}", line);
                continue;
            };

            debug!("Received request: {}", request.method);
            let response = self.handle_request(request).await;
            let response_json = serde_json::to_string(&response)?;
            writer.write_all(response_json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        info!("Shutting down");
        Ok(())
    }

    async fn handle_request(&mut self, request: McpRequest) -> McpResponse {
        match request.method.as_str() {
            "initialize" => McpResponse::success(
                request.id,
                json!({
                    "protocolVersion": "2024-11-05",
                    "serverInfo": {
                        "name": "skeletongen-mcp",
                        "version": env!("CARGO_PKG_VERSION")
                    },
                    "capabilities": {
                        "tools": {}
                    }
                }),
            ),
            "tools/list" => McpResponse::success(
                request.id,
                json!({
                    "tools": super::tools::get_tools()
                }),
            ),
            "tools/call" => {
                let Some(params) = request.params else {
                    return McpResponse::error(request.id, -32602, "Invalid params");
                };

                let Some(tool_name) = params["name"].as_str() else {
                    return McpResponse::error(request.id, -32602, "Missing tool name");
                };

                let args = params
                    .get("arguments")
                    .cloned()
                    .unwrap_or_else(|| json!({}));

                match super::handlers::handle_tool_call(self, tool_name, args).await {
                    Ok(result) => match serde_json::to_value(result) {
                        Ok(value) => McpResponse::success(request.id, value),
                        Err(e) => McpResponse::error(request.id, -32603, e.to_string()),
                    },
                    Err(e) => {
                        error!("Tool call error: {}", e);
                        McpResponse::error(request.id, -1, e.to_string())
                    }
                }
            }
            _ => McpResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        }
    }
}

/// Canonicalizes the workspace root, falling back to making it absolute
/// against the current directory when the path does not resolve.
pub(super) fn absolute_workspace_root(workspace_root: PathBuf) -> PathBuf {
    workspace_root.canonicalize().unwrap_or_else(|_| {
        if workspace_root.is_absolute() {
            workspace_root.clone()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(&workspace_root)
        }
    })
}
