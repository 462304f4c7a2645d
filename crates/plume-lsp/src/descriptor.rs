//! Protocol default descriptor used when no base tree is supplied.

use lsp_types::{
    ClientCapabilities, CompletionClientCapabilities, TextDocumentClientCapabilities,
};
use serde_json::Value;

use crate::tree::ConfigTree;

/// Builds the standard client capability descriptor the builder starts from
/// when the caller does not hand in a base tree.
///
/// The skeleton comes from [`lsp_types::ClientCapabilities`] with an empty
/// completion block, serialized into the JSON shape the builder mutates.
/// Everything beyond the completion subtree is left for the host's own
/// connection setup to fill in.
#[must_use]
pub fn default_descriptor() -> ConfigTree {
    let capabilities = ClientCapabilities {
        text_document: Some(TextDocumentClientCapabilities {
            completion: Some(CompletionClientCapabilities::default()),
            ..TextDocumentClientCapabilities::default()
        }),
        ..ClientCapabilities::default()
    };
    match serde_json::to_value(capabilities) {
        Ok(Value::Object(map)) => map,
        _ => ConfigTree::new(),
    }
}
