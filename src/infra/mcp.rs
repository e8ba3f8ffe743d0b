//! MCP server integration (stdio) for first-mcp.
//!
//! Bridges the entry registry onto rmcp's `ServerHandler`: listings come from
//! entry metadata, calls go through `Registry::dispatch`, and dispatch errors
//! travel inside the response envelope rather than unwinding through the
//! transport.

use std::sync::Arc;

use rmcp::{
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam,
        GetPromptResult, Implementation, JsonObject, ListPromptsResult, ListResourcesResult, ListToolsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
        RawResource, ReadResourceRequestParam, ReadResourceResult, Resource, ResourceContents,
        ServerCapabilities, ServerInfo, Tool,
    },
    serve_server,
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};

use crate::core::{Block, DispatchError, Entry, EntryKind, Payload, Registry};

/// The MCP server handler. Owns a clone of the immutable registry.
#[derive(Clone)]
pub struct RegistrySvc {
    registry: Registry,
}

impl RegistrySvc {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }
}

fn content_of(block: &Block) -> Content {
    match block {
        Block::Text(t) => Content::text(t.clone()),
    }
}

fn tool_listing(entry: &Entry) -> Tool {
    let schema: JsonObject = match entry.schema.to_json() {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    Tool::new(entry.name, entry.description, Arc::new(schema))
}

fn resource_listing(entry: &Entry) -> Resource {
    let mut raw = RawResource::new(entry.uri.unwrap_or_default(), entry.name.to_string());
    raw.description = Some(entry.description.to_string());
    raw.mime_type = entry.mime_type.map(str::to_string);
    raw.no_annotation()
}

fn prompt_listing(entry: &Entry) -> Prompt {
    let arguments: Vec<PromptArgument> = entry
        .schema
        .fields()
        .iter()
        .map(|f| PromptArgument {
            name: f.name.to_string(),
            description: Some(f.description.to_string()),
            required: Some(true),
        })
        .collect();
    Prompt::new(
        entry.name,
        Some(entry.description),
        if arguments.is_empty() {
            None
        } else {
            Some(arguments)
        },
    )
}

/// Every prompt block becomes one user-role message.
fn prompt_messages(blocks: &[Block]) -> Vec<PromptMessage> {
    blocks
        .iter()
        .map(|b| PromptMessage::new_text(PromptMessageRole::User, b.as_text().to_string()))
        .collect()
}

/// Shape a dispatch outcome as a tool-call reply. Failures become error
/// content in the result, never a protocol-level error.
fn tool_reply(outcome: Result<Vec<Block>, DispatchError>) -> CallToolResult {
    match outcome {
        Ok(blocks) => CallToolResult::success(blocks.iter().map(content_of).collect()),
        Err(e) => CallToolResult::error(vec![Content::text(e.to_string())]),
    }
}

impl ServerHandler for RegistrySvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            instructions: Some(
                "Demo server: arithmetic and GitHub repo listing tools, a society \
                 rules resource, and a SQL explainer prompt."
                    .into(),
            ),
            server_info: Implementation {
                name: "first-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self
                .registry
                .entries(EntryKind::Tool)
                .iter()
                .map(|e| tool_listing(e))
                .collect(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let payload: Payload = request.arguments.unwrap_or_default();
        tracing::debug!(tool = %request.name, "tools/call");
        let outcome = self
            .registry
            .dispatch(EntryKind::Tool, &request.name, &payload)
            .await;
        Ok(tool_reply(outcome))
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self
                .registry
                .entries(EntryKind::Resource)
                .iter()
                .map(|e| resource_listing(e))
                .collect(),
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let entry = self.registry.resource_by_uri(&request.uri).ok_or_else(|| {
            McpError::resource_not_found(format!("unknown resource uri: {}", request.uri), None)
        })?;
        tracing::debug!(uri = %request.uri, "resources/read");
        let blocks = self
            .registry
            .dispatch(EntryKind::Resource, entry.name, &Payload::new())
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(ReadResourceResult {
            contents: blocks
                .iter()
                .map(|b| ResourceContents::TextResourceContents {
                    uri: request.uri.clone(),
                    mime_type: entry.mime_type.map(str::to_string),
                    text: b.as_text().to_string(),
                })
                .collect(),
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: self
                .registry
                .entries(EntryKind::Prompt)
                .iter()
                .map(|e| prompt_listing(e))
                .collect(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let payload: Payload = request.arguments.unwrap_or_default();
        tracing::debug!(prompt = %request.name, "prompts/get");
        match self
            .registry
            .dispatch(EntryKind::Prompt, &request.name, &payload)
            .await
        {
            Ok(blocks) => Ok(GetPromptResult {
                description: None,
                messages: prompt_messages(&blocks),
            }),
            Err(e @ DispatchError::NotFound { .. }) => {
                Err(McpError::invalid_params(e.to_string(), None))
            }
            Err(e @ DispatchError::InvalidArgument(_)) => {
                Err(McpError::invalid_params(e.to_string(), None))
            }
            Err(e) => Err(McpError::internal_error(e.to_string(), None)),
        }
    }
}

/// Speak MCP JSON-RPC over stdin/stdout until the client hangs up.
pub async fn serve_stdio(
    registry: Registry,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let svc = RegistrySvc::new(registry);
    let server = serve_server(svc, (tokio::io::stdin(), tokio::io::stdout())).await?;
    server.waiting().await?;
    Ok(())
}
