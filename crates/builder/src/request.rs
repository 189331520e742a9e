//! Transport-ready request payloads.
//!
//! Two forms, consumed by a transport collaborator this crate does not
//! provide: query parameters (document, name, and variables as separate
//! strings) and a JSON request body (the operation structurally encoded with
//! quoted keys and explicit nulls).

use graphql_value_encoder::{Encodable, EncodeError, TextEncoder, ValueEncoder};
use serde::Serialize;

use crate::config::DocumentConfig;
use crate::error::BuildError;
use crate::operation::Operation;
use crate::variable::Variable;

/// Query-parameter form of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

/// All variables of one operation, merged into a single object literal.
struct VariableSet<'a>(&'a [Variable]);

impl Encodable for VariableSet<'_> {
    fn encode(&self, encoder: &mut ValueEncoder<'_>) -> Result<(), EncodeError> {
        for variable in self.0 {
            variable.encode(encoder)?;
        }
        Ok(())
    }
}

/// Build the query-parameter form. Variables render with unquoted keys and
/// dropped nils; the field is `None` when the operation declares no
/// variables or none of them produce output.
pub fn query_params(operation: &Operation) -> Result<QueryParams, BuildError> {
    query_params_with(operation, &DocumentConfig::default())
}

pub fn query_params_with(
    operation: &Operation,
    config: &DocumentConfig,
) -> Result<QueryParams, BuildError> {
    let query = operation.render_with(config)?;

    let variables = if operation.variables().is_empty() {
        None
    } else {
        let encoder = TextEncoder::new(false, false);
        encoder.encode(&VariableSet(operation.variables()))?
    };

    Ok(QueryParams {
        query,
        operation_name: operation.name().map(str::to_owned),
        variables,
    })
}

/// Build the JSON request body
/// `{"query": "…", "operationName": "…", "variables": {…}}` by structurally
/// encoding the operation with quoted keys and explicit nulls.
pub fn body(operation: &Operation) -> Result<String, BuildError> {
    body_with(operation, DocumentConfig::default())
}

pub fn body_with(operation: &Operation, config: DocumentConfig) -> Result<String, BuildError> {
    let mut encoder = TextEncoder::new(true, true);
    encoder.user_info_mut().insert(config);
    // An operation always binds a keyed container, so output is never absent.
    Ok(encoder.encode(operation)?.unwrap_or_default())
}
