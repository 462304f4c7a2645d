//! Seam to the host's peer-roster provider.

use std::rc::Rc;

use crate::peer::Peer;

/// Host collaborator that snapshots the currently connected peers.
///
/// Both snapshot methods are cheap, synchronous reads of host state; the
/// synchronizer calls them once per trigger and never holds the references
/// across triggers.
pub trait PeerRoster {
    /// All peers currently active in the session.
    fn active_peers(&self) -> Vec<Rc<dyn Peer>>;

    /// Peers attached to the current unit of work (the focused buffer).
    ///
    /// This scope can surface peers the session-wide snapshot does not list
    /// yet, enabling earlier registration.
    fn attached_peers(&self) -> Vec<Rc<dyn Peer>>;
}
