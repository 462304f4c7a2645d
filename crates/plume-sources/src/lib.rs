//! Completion-source lifecycle synchronization.
//!
//! The crate keeps the host's registry of completion sources in step with a
//! dynamically changing set of connected peers. On every trigger event (the
//! host's insert-mode entry) the [`SourceSynchronizer`] reconciles the
//! current peer roster against its own registrations: new usable peers gain
//! a registered source, vanished or stopped peers lose theirs. Peer
//! discovery, the event subsystem, and the source implementations themselves
//! stay behind the [`PeerRoster`], [`SourceRegistry`], and
//! [`CompletionSource`] seams so the reconciliation logic is testable with
//! lightweight doubles.

mod peer;
mod registry;
mod roster;
mod sync;

#[cfg(test)]
mod tests;

pub use peer::{CompletionSource, Peer, PeerId};
pub use registry::{SourceHandle, SourceRegistry};
pub use roster::PeerRoster;
pub use sync::SourceSynchronizer;
