//! Signal/slot notifications for Horizon Datepicker.
//!
//! Every observable piece of picker state (selected date, cursor date,
//! active date, current view, panel visibility) announces its changes
//! through a [`Signal`]. Embedding code and sibling components connect slots
//! (closures) to these signals instead of polling.
//!
//! # Re-entrancy
//!
//! Slots are collected under the connection lock and invoked after it is
//! released. A slot may therefore connect, disconnect or emit on the same
//! signal, or call back into the object that owns it, without deadlocking.
//! Connections added during an emission are not invoked by that emission.
//!
//! # Example
//!
//! ```
//! use horizon_datepicker_core::Signal;
//!
//! let date_changed = Signal::<String>::new();
//!
//! let conn_id = date_changed.connect(|date| {
//!     println!("Picked: {}", date);
//! });
//!
//! date_changed.emit("2021-01-07".to_string());
//! date_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// Handle to one connected slot, accepted by [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of slots invoked synchronously, in no particular order, with a
/// borrowed `Args` on each [`emit`](Self::emit).
///
/// The picker's signals carry the new value (`Signal<Option<NaiveDateTime>>`,
/// `Signal<bool>`), or `()` where listeners re-read the state themselves.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// An unconnected signal.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Register `slot`; keep the returned id to remove it again.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Remove one slot. `false` if `id` was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Number of live connections.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Invoke every slot connected at the time of the call.
    #[tracing::instrument(skip_all, target = "horizon_datepicker::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<i32>: Send, Sync);

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .finish()
    }
}
