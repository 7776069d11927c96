use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{CheckpointError, CheckpointMap, CheckpointStore};

/*----- */
// InMemoryCheckpointStore
/*----- */
#[derive(Debug, Default)]
pub struct InMemoryCheckpointStore {
    checkpoints: Mutex<CheckpointMap>,
    persist_count: AtomicUsize,
}

impl InMemoryCheckpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_checkpoints(checkpoints: CheckpointMap) -> Self {
        Self {
            checkpoints: Mutex::new(checkpoints),
            persist_count: AtomicUsize::new(0),
        }
    }

    /// Number of completed `persist` calls.
    pub fn persist_count(&self) -> usize {
        self.persist_count.load(Ordering::SeqCst)
    }
}

impl CheckpointStore for InMemoryCheckpointStore {
    fn read(&self) -> CheckpointMap {
        self.checkpoints.lock().clone()
    }

    fn persist(&self, checkpoints: &CheckpointMap) -> Result<(), CheckpointError> {
        *self.checkpoints.lock() = checkpoints.clone();
        self.persist_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/*----- */
// Tests
/*----- */
