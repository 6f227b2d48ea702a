use crate::protocol::ToolDefinition;
use serde_json::json;

pub fn get_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "skeletongen_generate".to_string(),
            description:
                "Generate or update the .cpp implementation skeleton for a C++ header file"
                    .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "header_path": { "type": "string", "description": "Path to the header file (.h)" }
                },
                "required": ["header_path"]
            }),
        },
        ToolDefinition {
            name: "skeletongen_preview".to_string(),
            description: "Return the implementation skeleton for a header without writing any file"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "header_path": { "type": "string", "description": "Path to the header file (.h)" }
                },
                "required": ["header_path"]
            }),
        },
        ToolDefinition {
            name: "skeletongen_class_info".to_string(),
            description:
                "Parse a C++ header and return its class name, methods, constructors and operators"
                    .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "header_path": { "type": "string", "description": "Path to the header file (.h)" }
                },
                "required": ["header_path"]
            }),
        },
        ToolDefinition {
            name: "skeletongen_set_workspace".to_string(),
            description: "Set the workspace root directory against which header paths resolve"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "workspace_path": { "type": "string", "description": "Path to the workspace root" }
                },
                "required": ["workspace_path"]
            }),
        },
    ]
}
