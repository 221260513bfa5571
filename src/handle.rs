use std::{
    hash::Hash,
    sync::{
        atomic::{AtomicU64, Ordering},
        mpsc::Sender,
        Arc, Weak,
    },
};

pub type HandleId = u64;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(0);

/// Counted handle, every clone holds one strong reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) Arc<StrongHandle>);

impl Handle {
    /// Allocate a handle which is not tracked by any cache
    pub fn detached() -> Self {
        Self::alloc(None)
    }

    pub(crate) fn tracked(drop_sender: Sender<DropEvent>) -> Self {
        Self::alloc(Some(drop_sender))
    }

    fn alloc(drop_sender: Option<Sender<DropEvent>>) -> Self {
        let id = NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed);
        Self(Arc::new(StrongHandle { id, drop_sender }))
    }

    pub fn id(&self) -> HandleId {
        self.0.id
    }

    /// Number of live handles sharing this resource
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub(crate) fn downgrade(&self) -> WeakHandle {
        WeakHandle(Arc::downgrade(&self.0))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct WeakHandle(Weak<StrongHandle>);

impl WeakHandle {
    pub(crate) fn upgrade(&self) -> Option<Handle> {
        self.0.upgrade().map(Handle)
    }
}

#[derive(Debug)]
pub(crate) struct DropEvent(pub HandleId);

#[derive(Debug)]
pub(crate) struct StrongHandle {
    id: HandleId,
    drop_sender: Option<Sender<DropEvent>>,
}

impl Hash for StrongHandle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Hash::hash(&self.id, state)
    }
}

impl Eq for StrongHandle {}

impl PartialEq for StrongHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for StrongHandle {
    fn drop(&mut self) {
        if let Some(sender) = self.drop_sender.as_ref() {
            let _ = sender.send(DropEvent(self.id));
        }
    }
}
