//! Protocol handler
//!
//! Adapts [`BankingService`] to the MCP `ServerHandler` trait. Each trait
//! method delegates to an inherent method that does not need a request
//! context, which keeps the mapping testable without a transport.

use super::config::ServerConfig;
use super::tools;
use crate::core::{BankingService, CompletionReference};
use crate::io::JSON_MIME_TYPE;
use crate::resource::TEMPLATES;
use rmcp::model::{
    AnnotateAble, CallToolRequestParam, CallToolResult, CompleteRequestParam, CompleteResult,
    CompletionInfo, Implementation, ListResourceTemplatesResult, ListResourcesResult,
    ListToolsResult, PaginatedRequestParam, RawResource, ReadResourceRequestParam,
    ReadResourceResult, Reference, Resource, ResourceContents, ResourceTemplate,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};

const INSTRUCTIONS: &str = "In-memory banking server. Read accounts and their transactions \
     as resources (filters go in the query string), and open accounts or book \
     transactions with the create-account and create-transaction tools.";

/// MCP server over an in-memory banking store
#[derive(Debug, Clone)]
pub struct BankingServer {
    service: BankingService,
    config: ServerConfig,
}

impl BankingServer {
    /// Create a server whose store is seeded according to the configuration
    pub fn new(config: ServerConfig) -> Self {
        let service = BankingService::new(config.initial_store());
        BankingServer { service, config }
    }

    /// The service behind every handler
    pub fn service(&self) -> &BankingService {
        &self.service
    }

    /// Every readable resource with its listing metadata
    pub async fn resources(&self) -> Vec<Resource> {
        self.service
            .list_resources()
            .await
            .into_iter()
            .map(|entry| {
                let mut raw = RawResource::new(entry.uri, entry.name);
                raw.description = Some(entry.description);
                raw.mime_type = Some(JSON_MIME_TYPE.to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// The three resource templates
    pub fn resource_templates(&self) -> Result<Vec<ResourceTemplate>, McpError> {
        TEMPLATES
            .iter()
            .map(|template| {
                serde_json::from_value(serde_json::json!({
                    "uriTemplate": template.uri_template,
                    "name": template.name,
                    "description": template.description,
                    "mimeType": JSON_MIME_TYPE,
                }))
                .map_err(|e| McpError::internal_error(e.to_string(), None))
            })
            .collect()
    }

    /// Read one resource; unknown addresses produce an error body, not a protocol error
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let text = self
            .service
            .read_resource(uri)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let mut contents = ResourceContents::text(text, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(JSON_MIME_TYPE.to_string());
        }

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }

    /// Suggest values for a template argument
    pub async fn completion(
        &self,
        reference: &CompletionReference,
        argument: &str,
        partial: &str,
    ) -> CompleteResult {
        let completion = self.service.complete(argument, partial, reference).await;

        CompleteResult {
            completion: CompletionInfo {
                values: completion.values,
                total: None,
                has_more: Some(completion.has_more),
            },
        }
    }
}

fn completion_reference(reference: &Reference) -> CompletionReference {
    match reference {
        Reference::Resource(resource) => CompletionReference::Resource {
            uri: resource.uri.clone(),
        },
        Reference::Prompt(prompt) => CompletionReference::Prompt {
            name: prompt.name.clone(),
        },
    }
}

impl ServerHandler for BankingServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_completions()
                .build(),
            server_info: Implementation {
                name: self.config.server_name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(tools::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tools::call_tool(&self.service, request.name.as_ref(), request.arguments).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(self.resources().await))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            self.resource_templates()?,
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read(&request.uri).await
    }

    async fn complete(
        &self,
        request: CompleteRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CompleteResult, McpError> {
        let reference = completion_reference(&request.r#ref);
        Ok(self
            .completion(&reference, &request.argument.name, &request.argument.value)
            .await)
    }
}
