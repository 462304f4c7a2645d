//! Abstractions over connected peers and the sources derived from them.

use std::fmt;

/// Opaque stable identity of a connected peer.
///
/// Wraps the host's connection handle identity; two snapshots referring to
/// the same connection always yield the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerId(u64);

impl PeerId {
    /// Wraps a raw connection handle identity.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "peer#{}", self.0)
    }
}

/// Per-peer completion source registered with the host's source registry.
///
/// The query side (candidate retrieval, ranking, triggering) is the host's
/// concern; the synchronizer only needs identity and the usability
/// predicate.
pub trait CompletionSource {
    /// Name under which the source is registered.
    fn name(&self) -> &str;

    /// Whether the peer can serve completions at all.
    ///
    /// Peer capabilities can become known after connection setup, so a
    /// `false` answer is not terminal: the synchronizer retries on the next
    /// trigger.
    fn is_available(&self) -> bool;
}

/// Behaviour required from a connected peer reference.
pub trait Peer {
    /// Stable identity of the underlying connection.
    fn id(&self) -> PeerId;

    /// Whether the peer has stopped or is shutting down.
    ///
    /// A stopped peer is an expected terminal state, not an error.
    fn is_stopped(&self) -> bool;

    /// Constructs the completion source adapter for this peer.
    fn derive_source(&self) -> Box<dyn CompletionSource>;
}

impl fmt::Debug for dyn Peer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Peer({})", self.id())
    }
}
