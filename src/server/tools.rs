//! Tool definitions and dispatch
//!
//! Two tools mutate the store:
//! - `create-account`: open an account (`name`, `type`, optional `initialBalance`)
//! - `create-transaction`: book a transaction and update the account balance
//!
//! Results carry the created record as pretty JSON text. An unknown account
//! produces an `{"error": ...}` body with `isError` set; arguments that do not
//! match the input schema are rejected as invalid parameters.

use crate::core::BankingService;
use crate::io::json_format;
use crate::types::{
    AccountRequest, AccountType, BankError, TransactionRequest, TransactionType,
};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use rmcp::ErrorData as McpError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const CREATE_ACCOUNT: &str = "create-account";
pub const CREATE_TRANSACTION: &str = "create-transaction";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a `serde_json::Value::Object` to an `Arc<JsonObject>`.
fn json_schema(value: Value) -> Arc<JsonObject> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Build a `Tool` with a JSON schema.
fn make_tool(name: &'static str, description: &'static str, schema: Value) -> Tool {
    Tool::new(name, description, json_schema(schema))
}

fn enum_values<T>(all: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(as_str).collect()
}

/// Deserialize tool arguments, treating absent arguments as an empty object.
fn parse_args<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, McpError> {
    let value = Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(value).map_err(|e| McpError::invalid_params(e.to_string(), None))
}

fn internal_error(error: BankError) -> McpError {
    McpError::internal_error(error.to_string(), None)
}

/// Serialize a created record to a successful `CallToolResult`.
fn success_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = json_format::to_json_text(value).map_err(internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Render a per-request failure as an error `CallToolResult`.
fn error_result(error: &BankError) -> Result<CallToolResult, McpError> {
    let text = json_format::error_text(error).map_err(internal_error)?;
    Ok(CallToolResult::error(vec![Content::text(text)]))
}

// ---------------------------------------------------------------------------
// Tool listing and dispatch
// ---------------------------------------------------------------------------

/// Every tool the server exposes
pub fn tools() -> Vec<Tool> {
    vec![
        make_tool(
            CREATE_ACCOUNT,
            "Open a new bank account",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Account owner name"
                    },
                    "type": {
                        "type": "string",
                        "enum": enum_values(&AccountType::ALL, AccountType::as_str),
                        "description": "Account type"
                    },
                    "initialBalance": {
                        "type": "number",
                        "default": 0,
                        "description": "Opening balance"
                    }
                },
                "required": ["name", "type"]
            }),
        ),
        make_tool(
            CREATE_TRANSACTION,
            "Record a transaction against an account and update its balance",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "accountId": {
                        "type": "string",
                        "description": "Account the transaction is booked against"
                    },
                    "amount": {
                        "type": "number",
                        "description": "Signed amount added to the account balance"
                    },
                    "transactionType": {
                        "type": "string",
                        "enum": enum_values(&TransactionType::ALL, TransactionType::as_str)
                    },
                    "recipient": {
                        "type": "string",
                        "description": "Payee"
                    },
                    "sender": {
                        "type": "string",
                        "description": "Payer"
                    },
                    "description": {
                        "type": "string"
                    }
                },
                "required": ["accountId", "amount", "transactionType", "description"]
            }),
        ),
    ]
}

/// Run a tool by name
///
/// # Returns
///
/// * `Ok(CallToolResult)` - The created record, or an error body with `isError` set
/// * `Err(McpError)` - Unknown tool, malformed arguments, or an encoding failure
pub async fn call_tool(
    service: &BankingService,
    name: &str,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    debug!(tool = name, "calling tool");

    match name {
        CREATE_ACCOUNT => {
            let request: AccountRequest = parse_args(arguments)?;
            let account = service.create_account(request).await;
            success_result(&account)
        }
        CREATE_TRANSACTION => {
            let request: TransactionRequest = parse_args(arguments)?;
            match service.create_transaction(request).await {
                Ok(transaction) => success_result(&transaction),
                Err(error) => error_result(&error),
            }
        }
        _ => Err(McpError::invalid_params(
            format!("Unknown tool: {}", name),
            None,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordStore;
    use rstest::rstest;

    fn args(value: Value) -> Option<JsonObject> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    fn result_json(result: &CallToolResult) -> Value {
        let text = result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.clone())
            .unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_tools_listing() {
        let tools = tools();
        let names: Vec<&str> = tools.iter().map(|tool| tool.name.as_ref()).collect();

        assert_eq!(names, vec![CREATE_ACCOUNT, CREATE_TRANSACTION]);
        assert_eq!(
            tools[0].input_schema["properties"]["type"]["enum"],
            serde_json::json!(["checking", "savings", "credit"])
        );
        assert_eq!(
            tools[1].input_schema["required"],
            serde_json::json!(["accountId", "amount", "transactionType", "description"])
        );
    }

    #[tokio::test]
    async fn test_create_account_tool() {
        let service = BankingService::new(RecordStore::with_sample_data());

        let result = call_tool(
            &service,
            CREATE_ACCOUNT,
            args(serde_json::json!({ "name": "Jane", "type": "checking", "initialBalance": 50 })),
        )
        .await
        .unwrap();

        assert_ne!(result.is_error, Some(true));
        let json = result_json(&result);
        assert_eq!(json["id"], "acc-005");
        assert_eq!(json["status"], "active");
        assert_eq!(json["balance"], serde_json::json!(50.0));
    }

    #[tokio::test]
    async fn test_create_transaction_unknown_account() {
        let service = BankingService::new(RecordStore::with_sample_data());

        let result = call_tool(
            &service,
            CREATE_TRANSACTION,
            args(serde_json::json!({
                "accountId": "acc-999",
                "amount": -10,
                "transactionType": "payment",
                "description": "Nowhere"
            })),
        )
        .await
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_json(&result),
            serde_json::json!({ "error": "Account not found" })
        );
    }

    #[rstest]
    #[case::unknown_tool("delete-account", Some(serde_json::json!({})))]
    #[case::missing_arguments(CREATE_ACCOUNT, None)]
    #[case::bad_enum(CREATE_ACCOUNT, Some(serde_json::json!({ "name": "Jane", "type": "brokerage" })))]
    #[case::amount_as_text(
        CREATE_TRANSACTION,
        Some(serde_json::json!({
            "accountId": "acc-001",
            "amount": "ten",
            "transactionType": "deposit",
            "description": "x"
        }))
    )]
    #[tokio::test]
    async fn test_invalid_calls_are_protocol_errors(
        #[case] name: &str,
        #[case] arguments: Option<Value>,
    ) {
        let service = BankingService::new(RecordStore::with_sample_data());

        let result = call_tool(&service, name, arguments.and_then(args)).await;

        assert!(result.is_err());
        let text = service.read_resource("accounts").await.unwrap();
        let accounts: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(accounts.as_array().unwrap().len(), 4);
    }
}
