//! Error types surfaced by the capability builder.

use std::fmt;

use thiserror::Error;

use crate::tree::MaterializeError;

/// Fixed capability subtree the builder visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtree {
    /// `textDocument.completion.completionItem` fields.
    CompletionItem,
    /// `textDocument.completion` fields.
    Completion,
}

impl Subtree {
    /// Returns the dotted path of the subtree within the descriptor.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CompletionItem => "textDocument.completion.completionItem",
            Self::Completion => "textDocument.completion",
        }
    }
}

impl fmt::Display for Subtree {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.path())
    }
}

/// Errors returned by [`crate::build`].
///
/// Build failures are terminal: a half-built descriptor would misrepresent
/// the client's actual capabilities to the peer, so the builder never
/// attempts partial recovery.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A fixed subtree could not be materialized because an existing
    /// non-container value blocks the path.
    #[error("cannot materialise capability subtree '{subtree}': {source}")]
    Materialize {
        /// Subtree the builder was visiting.
        subtree: Subtree,
        /// Location of the blocking value.
        #[source]
        source: MaterializeError,
    },
}

impl BuildError {
    /// Wraps a materialization failure with the subtree being visited.
    pub(crate) const fn materialize(subtree: Subtree, source: MaterializeError) -> Self {
        Self::Materialize { subtree, source }
    }
}
