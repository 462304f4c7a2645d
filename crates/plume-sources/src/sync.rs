//! Per-trigger reconciliation of peer roster against registered sources.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::peer::{Peer, PeerId};
use crate::registry::{SourceHandle, SourceRegistry};
use crate::roster::PeerRoster;

/// Reconciles the peer roster against the source registry.
///
/// Created once at host startup and invoked once per trigger event; the host
/// event delivery serializes invocations, so the synchronizer holds its
/// registration map without locking. After every run the map's keys are a
/// subset of the peers the roster reported, and every usable reported peer
/// has a registered source.
#[derive(Debug, Default)]
pub struct SourceSynchronizer {
    registrations: HashMap<PeerId, SourceHandle>,
}

impl SourceSynchronizer {
    /// Creates a synchronizer with no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the peers that currently have a registered source.
    pub fn registered_peers(&self) -> impl Iterator<Item = PeerId> + '_ {
        self.registrations.keys().copied()
    }

    /// Returns the registered handle for a peer, when one exists.
    #[must_use]
    pub fn handle_for(&self, peer: PeerId) -> Option<SourceHandle> {
        self.registrations.get(&peer).copied()
    }

    /// Runs one reconciliation pass.
    ///
    /// Registration happens before pruning so a peer that is both new and
    /// about to be retired within the same pass is never transiently
    /// dropped. Re-running against an unchanged roster makes no registry
    /// calls.
    pub fn synchronise(&mut self, roster: &dyn PeerRoster, registry: &mut dyn SourceRegistry) {
        let allowed = Self::allowed_peers(roster);
        self.register_new(&allowed, registry);
        self.prune_stale(&allowed, registry);
    }

    /// Unions the two roster snapshots by identity.
    ///
    /// The attached-scope reference wins on collision: it is the fresher,
    /// work-scoped view of the same connection.
    fn allowed_peers(roster: &dyn PeerRoster) -> HashMap<PeerId, Rc<dyn Peer>> {
        let mut allowed: HashMap<PeerId, Rc<dyn Peer>> = HashMap::new();
        for peer in roster.active_peers() {
            allowed.insert(peer.id(), peer);
        }
        for peer in roster.attached_peers() {
            allowed.insert(peer.id(), peer);
        }
        allowed
    }

    fn register_new(
        &mut self,
        allowed: &HashMap<PeerId, Rc<dyn Peer>>,
        registry: &mut dyn SourceRegistry,
    ) {
        for (id, peer) in allowed {
            if self.registrations.contains_key(id) || peer.is_stopped() {
                continue;
            }
            let source = peer.derive_source();
            if !source.is_available() {
                debug!(peer = %id, "source not yet usable; will retry on next trigger");
                continue;
            }
            let name = source.name().to_owned();
            let handle = registry.register(&name, source);
            debug!(peer = %id, source = %name, %handle, "registered completion source");
            self.registrations.insert(*id, handle);
        }
    }

    fn prune_stale(
        &mut self,
        allowed: &HashMap<PeerId, Rc<dyn Peer>>,
        registry: &mut dyn SourceRegistry,
    ) {
        let stale: Vec<PeerId> = self
            .registrations
            .keys()
            .copied()
            .filter(|id| allowed.get(id).is_none_or(|peer| peer.is_stopped()))
            .collect();
        for id in stale {
            if let Some(handle) = self.registrations.remove(&id) {
                registry.unregister(handle);
                debug!(peer = %id, %handle, "unregistered completion source");
            }
        }
    }
}
