//! Seam to the host's completion-source registry.

use std::fmt;

use crate::peer::CompletionSource;

/// Opaque token identifying a registered source.
///
/// Returned by [`SourceRegistry::register`] and handed back verbatim on
/// unregistration; the synchronizer never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceHandle(u64);

impl SourceHandle {
    /// Wraps a raw registry token.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SourceHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "source#{}", self.0)
    }
}

/// Host collaborator that owns the live set of completion sources.
pub trait SourceRegistry {
    /// Registers a source under `name` and returns its handle.
    fn register(&mut self, name: &str, source: Box<dyn CompletionSource>) -> SourceHandle;

    /// Removes a previously registered source.
    fn unregister(&mut self, handle: SourceHandle);
}
