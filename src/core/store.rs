use crate::domain::model::{GeographicRecord, MarkerSnapshot};
use std::sync::Arc;
use tokio::sync::watch;

/// Single-writer cell holding the current marker sequence. Built on a watch
/// channel so readers either see the previous complete snapshot or the new
/// one, never a mix of two fetch cycles, and renderers can subscribe to
/// replacement events.
#[derive(Debug)]
pub struct MarkerStore {
    tx: watch::Sender<Arc<MarkerSnapshot>>,
}

impl MarkerStore {
    /// Starts out holding the empty sequence.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(MarkerSnapshot::empty()));
        Self { tx }
    }

    /// Swaps the held sequence in one step.
    pub fn replace(&self, records: Vec<GeographicRecord>) {
        let snapshot = Arc::new(MarkerSnapshot::new(records));
        tracing::debug!("Marker store replaced: {} records", snapshot.records.len());
        self.tx.send_replace(snapshot);
    }

    /// Latest complete snapshot.
    pub fn current(&self) -> Arc<MarkerSnapshot> {
        self.tx.borrow().clone()
    }

    /// Receiver that resolves whenever `replace` publishes a new snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<MarkerSnapshot>> {
        self.tx.subscribe()
    }
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}
