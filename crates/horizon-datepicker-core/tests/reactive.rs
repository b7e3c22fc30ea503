//! Integration tests for signals, bindings and deferred tasks working together.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use horizon_datepicker_core::{Binding, Property, SharedTaskQueue, Signal};

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

struct Cursor {
    month: Property<u32>,
    month_changed: Signal<u32>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            month: Property::new(1),
            month_changed: Signal::new(),
        }
    }

    fn set_month(&self, month: u32) {
        if self.month.set(month) {
            self.month_changed.emit(month);
        }
    }
}

#[test]
fn binding_invalidated_by_signal_is_never_stale() {
    setup();
    let cursor = Arc::new(Cursor::new());
    let computations = Arc::new(AtomicUsize::new(0));

    let source = cursor.clone();
    let computations_clone = computations.clone();
    let days = Arc::new(Binding::new(move || {
        computations_clone.fetch_add(1, Ordering::SeqCst);
        source.month.get() * 100
    }));

    let days_clone = days.clone();
    cursor.month_changed.connect(move |_| days_clone.invalidate());

    assert_eq!(days.get(), 100);
    cursor.set_month(1);
    assert_eq!(days.get(), 100);
    assert_eq!(computations.load(Ordering::SeqCst), 1);

    cursor.set_month(2);
    assert_eq!(days.get(), 200);
    assert_eq!(computations.load(Ordering::SeqCst), 2);
}

#[test]
fn deferred_task_observes_state_at_run_time() {
    setup();
    let cursor = Arc::new(Cursor::new());
    let queue = SharedTaskQueue::new();
    let observed = Arc::new(AtomicUsize::new(0));

    let weak = Arc::downgrade(&cursor);
    let observed_clone = observed.clone();
    queue.post(move || {
        if let Some(cursor) = weak.upgrade() {
            observed_clone.store(cursor.month.get() as usize, Ordering::SeqCst);
        }
    });

    cursor.set_month(7);
    queue.process_all();
    assert_eq!(observed.load(Ordering::SeqCst), 7);
}
