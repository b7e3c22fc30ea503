//! Core systems for Horizon Datepicker.
//!
//! This crate provides the reactive building blocks the picker components
//! share:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Change-detecting values and lazily derived bindings
//! - **Task Queue**: Work deferred until the host has applied pending updates
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Example
//!
//! ```
//! use horizon_datepicker_core::{Binding, Property, Signal};
//! use std::sync::Arc;
//!
//! let month = Arc::new(Property::new(1u32));
//! let month_changed = Signal::<u32>::new();
//!
//! let source = month.clone();
//! let label = Arc::new(Binding::new(move || format!("month {}", source.get())));
//!
//! let label_clone = label.clone();
//! month_changed.connect(move |_| label_clone.invalidate());
//!
//! if month.set(2) {
//!     month_changed.emit(2);
//! }
//! assert_eq!(label.get(), "month 2");
//! ```

pub mod logging;
pub mod property;
pub mod signal;
pub mod task;

pub use logging::PerfSpan;
pub use property::{Binding, Property};
pub use signal::{ConnectionId, Signal};
pub use task::{SharedTaskQueue, TaskId, TaskQueue};
