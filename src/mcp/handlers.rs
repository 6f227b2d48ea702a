use anyhow::{anyhow, Result};
use log::info;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use crate::{config::DEFINITION_EXTENSION, header, protocol::ToolResult, skeleton};

use super::server::{absolute_workspace_root, SkeletonGenServer};

/// Helper struct for extracting common tool parameters.
struct ToolParams;

impl ToolParams {
    fn extract_header_path(args: &Value) -> Result<String> {
        let Some(header_path) = args["header_path"].as_str() else {
            return Err(anyhow!("Missing header_path"));
        };
        Ok(header_path.to_string())
    }
}

pub async fn handle_tool_call(
    server: &mut SkeletonGenServer,
    tool_name: &str,
    args: Value,
) -> Result<ToolResult> {
    match tool_name {
        "skeletongen_generate" => handle_generate(server, args).await,
        "skeletongen_preview" => handle_preview(server, args).await,
        "skeletongen_class_info" => handle_class_info(server, args).await,
        "skeletongen_set_workspace" => handle_set_workspace(server, args).await,
        _ => Err(anyhow!("Unknown tool: {}", tool_name)),
    }
}

async fn handle_generate(server: &mut SkeletonGenServer, args: Value) -> Result<ToolResult> {
    let header_path = ToolParams::extract_header_path(&args)?;
    let (header_abs, stem) = server.resolve_header(&header_path)?;

    let (info, definition_path, existing) = load_pipeline_inputs(&header_abs).await?;
    let skeleton = skeleton::build(&info, &existing, &stem);

    tokio::fs::write(&definition_path, &skeleton.content)
        .await
        .map_err(|e| anyhow!("Failed to write {}: {}", definition_path.display(), e))?;

    info!(
        "Generated {} for class {} ({} stubs, {} preserved)",
        definition_path.display(),
        info.class_name,
        skeleton.generated,
        skeleton.preserved
    );

    let report = json!({
        "class": info.class_name,
        "definition_file": definition_path.display().to_string(),
        "generated": skeleton.generated,
        "preserved": skeleton.preserved,
    });

    Ok(ToolResult::text(serde_json::to_string_pretty(&report)?))
}

async fn handle_preview(server: &mut SkeletonGenServer, args: Value) -> Result<ToolResult> {
    let header_path = ToolParams::extract_header_path(&args)?;
    let (header_abs, stem) = server.resolve_header(&header_path)?;

    let (info, _, existing) = load_pipeline_inputs(&header_abs).await?;
    let skeleton = skeleton::build(&info, &existing, &stem);

    Ok(ToolResult::text(skeleton.content))
}

async fn handle_class_info(server: &mut SkeletonGenServer, args: Value) -> Result<ToolResult> {
    let header_path = ToolParams::extract_header_path(&args)?;
    let (header_abs, _) = server.resolve_header(&header_path)?;

    let source = read_header(&header_abs).await?;
    let info = header::parse(&source)?;

    Ok(ToolResult::text(serde_json::to_string_pretty(&info)?))
}

async fn handle_set_workspace(server: &mut SkeletonGenServer, args: Value) -> Result<ToolResult> {
    let Some(workspace_path) = args["workspace_path"].as_str() else {
        return Err(anyhow!("Missing workspace_path"));
    };

    server.workspace_root = absolute_workspace_root(PathBuf::from(workspace_path));

    Ok(ToolResult::text(format!(
        "Workspace set to: {}",
        server.workspace_root.display()
    )))
}

/// Reads and parses the header, and loads the neighbouring definition file
/// (empty when it does not exist yet).
async fn load_pipeline_inputs(
    header_abs: &Path,
) -> Result<(header::HeaderInfo, PathBuf, String)> {
    let source = read_header(header_abs).await?;
    let info = header::parse(&source)?;

    let definition_path = header_abs.with_extension(DEFINITION_EXTENSION);
    let existing = tokio::fs::read_to_string(&definition_path)
        .await
        .unwrap_or_default();

    Ok((info, definition_path, existing))
}

async fn read_header(header_abs: &Path) -> Result<String> {
    tokio::fs::read_to_string(header_abs)
        .await
        .map_err(|e| anyhow!("Failed to read file {}: {}", header_abs.display(), e))
}
