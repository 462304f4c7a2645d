//! Client capability construction for completion peers.
//!
//! The crate assembles the nested capability descriptor a completion client
//! advertises to a language-server peer. Callers hand [`build`] an
//! [`plume_config::OverrideSpec`] describing per-field deviations from the
//! built-in defaults; the builder materializes the fixed completion subtrees
//! and applies the versioned field catalogue to them. The finished tree is a
//! plain JSON object ready to splice into the peer connection setup.
//!
//! Structural helpers ([`materialize`], [`apply_simple`], [`apply_merged`])
//! are exported so hosts with bespoke capability blocks can reuse the same
//! merge machinery.

mod apply;
mod builder;
mod catalogue;
mod descriptor;
mod errors;
mod legacy;
mod tree;

#[cfg(test)]
mod tests;

pub use apply::{apply_merged, apply_simple, enveloped, merge_ordered, merge_value_set};
pub use builder::{COMPLETION_ITEM_PATH, COMPLETION_PATH, build};
pub use descriptor::default_descriptor;
pub use errors::{BuildError, Subtree};
#[expect(deprecated, reason = "re-exporting the legacy entry point for existing hosts")]
pub use legacy::build_with_flat_overrides;
pub use tree::{ConfigTree, MaterializeError, materialize, refuse_reify};
