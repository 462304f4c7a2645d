//! Capability builder orchestrating materialization and field application.

use plume_config::OverrideSpec;

use crate::catalogue;
use crate::errors::{BuildError, Subtree};
use crate::tree::{ConfigTree, materialize, refuse_reify};

/// Path of the completion-item level fields within the descriptor.
pub const COMPLETION_ITEM_PATH: [&str; 3] = ["textDocument", "completion", "completionItem"];

/// Path of the completion-block level fields within the descriptor.
pub const COMPLETION_PATH: [&str; 2] = ["textDocument", "completion"];

/// Builds the completion capability descriptor advertised to a peer.
///
/// Starts from `base` when supplied (mutated in place and returned),
/// otherwise from the protocol default descriptor. The two fixed completion
/// subtrees are materialized in turn and the versioned field catalogue is
/// applied to each, honouring the per-field directives in `spec`.
///
/// # Errors
///
/// Returns [`BuildError::Materialize`] when an existing non-container value
/// blocks either fixed path. The failure is terminal; the tree may have been
/// partially mutated and must not be advertised.
pub fn build(spec: &OverrideSpec, base: Option<ConfigTree>) -> Result<ConfigTree, BuildError> {
    let mut tree = base.unwrap_or_else(crate::descriptor::default_descriptor);

    let item = materialize(&mut tree, &COMPLETION_ITEM_PATH, refuse_reify)
        .map_err(|source| BuildError::materialize(Subtree::CompletionItem, source))?;
    catalogue::populate_completion_item(item, spec);

    let block = materialize(&mut tree, &COMPLETION_PATH, refuse_reify)
        .map_err(|source| BuildError::materialize(Subtree::Completion, source))?;
    catalogue::populate_completion(block, spec);

    Ok(tree)
}
