//! Versioned catalogue of completion capability fields.
//!
//! This module is the single home for the protocol knowledge the builder
//! encodes: which fields exist, what their built-in defaults are, and which
//! of them are composite enumerations that merge rather than assign. The
//! catalogue targets LSP 3.17 and must be revised in lockstep with the
//! protocol version the client advertises.

use lsp_types::{CompletionItemTag, InsertTextMode};
use plume_config::OverrideSpec;
use serde_json::{Value, json};

use crate::apply::{apply_merged, apply_simple, enveloped, merge_value_set};
use crate::tree::ConfigTree;

/// Completion-item properties the client resolves lazily, in the order peers
/// should treat as preferred.
const RESOLVE_SUPPORT_PROPERTIES: [&str; 9] = [
    "documentation",
    "detail",
    "additionalTextEdits",
    "sortText",
    "filterText",
    "insertText",
    "textEdit",
    "insertTextFormat",
    "insertTextMode",
];

/// Completion-list item defaults the client understands, priority-ordered.
const ITEM_DEFAULTS: [&str; 5] = [
    "commitCharacters",
    "editRange",
    "insertTextFormat",
    "insertTextMode",
    "data",
];

fn string_list(elements: &[&str]) -> Value {
    Value::Array(
        elements
            .iter()
            .map(|element| Value::String((*element).to_owned()))
            .collect(),
    )
}

/// Applies the completion-item level of the catalogue to `item`.
pub(crate) fn populate_completion_item(item: &mut ConfigTree, spec: &OverrideSpec) {
    apply_simple(item, spec, "snippetSupport", json!(true), None);
    apply_simple(item, spec, "commitCharactersSupport", json!(true), None);
    apply_simple(item, spec, "deprecatedSupport", json!(true), None);
    apply_simple(item, spec, "preselectSupport", json!(true), None);
    apply_simple(item, spec, "insertReplaceSupport", json!(true), None);
    apply_simple(item, spec, "labelDetailsSupport", json!(true), None);
    apply_merged(
        item,
        spec,
        "tagSupport",
        enveloped("valueSet", merge_value_set),
        json!([CompletionItemTag::DEPRECATED]),
        None,
    );
    apply_merged(
        item,
        spec,
        "insertTextModeSupport",
        enveloped("valueSet", merge_value_set),
        json!([InsertTextMode::AS_IS, InsertTextMode::ADJUST_INDENTATION]),
        None,
    );
    apply_merged(
        item,
        spec,
        "resolveSupport",
        enveloped("properties", merge_value_set),
        string_list(&RESOLVE_SUPPORT_PROPERTIES),
        None,
    );
}

/// Applies the completion-block level of the catalogue to `block`.
pub(crate) fn populate_completion(block: &mut ConfigTree, spec: &OverrideSpec) {
    apply_simple(block, spec, "dynamicRegistration", json!(false), None);
    apply_simple(block, spec, "contextSupport", json!(true), None);
    apply_simple(block, spec, "insertTextMode", json!(InsertTextMode::AS_IS), None);
    apply_merged(
        block,
        spec,
        "completionList",
        enveloped("itemDefaults", merge_value_set),
        string_list(&ITEM_DEFAULTS),
        None,
    );
}
