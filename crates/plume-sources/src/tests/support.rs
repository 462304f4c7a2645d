//! Test doubles for the roster and registry collaborators.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::peer::{CompletionSource, Peer, PeerId};
use crate::registry::{SourceHandle, SourceRegistry};
use crate::roster::PeerRoster;

/// Scriptable peer whose stopped and available flags can flip mid-test.
pub struct StubPeer {
    id: PeerId,
    name: String,
    stopped: Cell<bool>,
    available: Rc<Cell<bool>>,
}

impl StubPeer {
    /// Creates a running, available peer.
    pub fn new(id: u64, name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            id: PeerId::new(id),
            name: name.into(),
            stopped: Cell::new(false),
            available: Rc::new(Cell::new(true)),
        })
    }

    /// Creates a running peer whose derived source reports unusable.
    pub fn unavailable(id: u64, name: impl Into<String>) -> Rc<Self> {
        let peer = Self::new(id, name);
        peer.available.set(false);
        peer
    }

    /// Marks the peer as stopped.
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    /// Flips the usability answer of sources derived from this peer.
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }
}

impl Peer for StubPeer {
    fn id(&self) -> PeerId {
        self.id
    }

    fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    fn derive_source(&self) -> Box<dyn CompletionSource> {
        Box::new(StubSource {
            name: self.name.clone(),
            available: Rc::clone(&self.available),
        })
    }
}

struct StubSource {
    name: String,
    available: Rc<Cell<bool>>,
}

impl CompletionSource for StubSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available.get()
    }
}

/// Roster double returning whatever snapshots the test staged.
#[derive(Default)]
pub struct StaticRoster {
    active: RefCell<Vec<Rc<dyn Peer>>>,
    attached: RefCell<Vec<Rc<dyn Peer>>>,
}

impl StaticRoster {
    /// Replaces the session-wide snapshot.
    pub fn set_active(&self, peers: Vec<Rc<dyn Peer>>) {
        *self.active.borrow_mut() = peers;
    }

    /// Replaces the unit-of-work snapshot.
    pub fn set_attached(&self, peers: Vec<Rc<dyn Peer>>) {
        *self.attached.borrow_mut() = peers;
    }
}

impl PeerRoster for StaticRoster {
    fn active_peers(&self) -> Vec<Rc<dyn Peer>> {
        self.active.borrow().clone()
    }

    fn attached_peers(&self) -> Vec<Rc<dyn Peer>> {
        self.attached.borrow().clone()
    }
}

/// Call observed by the recording registry, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCall {
    /// A source was registered under the given name, yielding the handle.
    Register {
        /// Name the source was registered under.
        name: String,
        /// Handle returned to the synchronizer.
        handle: SourceHandle,
    },
    /// A handle was unregistered.
    Unregister(SourceHandle),
}

/// Registry double recording every call it receives.
#[derive(Default)]
pub struct RecordingRegistry {
    next_handle: u64,
    calls: Vec<RegistryCall>,
}

impl RecordingRegistry {
    /// Returns every recorded call in order.
    pub fn calls(&self) -> &[RegistryCall] {
        &self.calls
    }

    /// Number of register calls observed.
    pub fn register_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RegistryCall::Register { .. }))
            .count()
    }

    /// Number of unregister calls observed.
    pub fn unregister_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RegistryCall::Unregister(_)))
            .count()
    }

    /// Handles passed to unregister, in order.
    pub fn unregistered(&self) -> Vec<SourceHandle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RegistryCall::Unregister(handle) => Some(*handle),
                RegistryCall::Register { .. } => None,
            })
            .collect()
    }

    /// Forgets recorded calls while keeping the handle counter.
    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl SourceRegistry for RecordingRegistry {
    fn register(&mut self, name: &str, _source: Box<dyn CompletionSource>) -> SourceHandle {
        self.next_handle += 1;
        let handle = SourceHandle::new(self.next_handle);
        self.calls.push(RegistryCall::Register {
            name: name.to_owned(),
            handle,
        });
        handle
    }

    fn unregister(&mut self, handle: SourceHandle) {
        self.calls.push(RegistryCall::Unregister(handle));
    }
}
