//! Reactive properties for Horizon Datepicker.
//!
//! Properties are the data backbone of the picker state. A [`Property`]
//! reports whether a write actually changed the value so the owner can emit
//! the matching [`Signal`](crate::Signal) only on real changes. A [`Binding`]
//! caches a value derived from other state and recomputes it lazily after
//! being invalidated.
//!
//! # Example
//!
//! ```
//! use horizon_datepicker_core::{Property, Signal};
//!
//! struct Visibility {
//!     shown: Property<bool>,
//!     shown_changed: Signal<bool>,
//! }
//!
//! impl Visibility {
//!     fn set_shown(&self, shown: bool) {
//!         if self.shown.set(shown) {
//!             self.shown_changed.emit(shown);
//!         }
//!     }
//! }
//!
//! let v = Visibility { shown: Property::new(false), shown_changed: Signal::new() };
//! v.set_shown(true);
//! assert!(v.shown.get());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

/// A value cell with change detection.
///
/// Writes through [`set`](Self::set) compare against the stored value, so
/// the picker can emit its `*_changed` signals only for real transitions.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a property holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the stored value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`; `true` when it differs from the old one.
    ///
    /// Emitting the matching signal is left to the owner.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}

/// A derived value that is recomputed lazily.
///
/// `Binding<T>` caches its computed value and only recalculates after
/// [`invalidate`](Self::invalidate). Connect `invalidate` to the change
/// signals of every dependency to keep the binding from going stale.
pub struct Binding<T> {
    compute: Box<dyn Fn() -> T + Send + Sync>,
    cached: RwLock<Option<T>>,
    dirty: AtomicBool,
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Wrap `compute` in a lazily evaluated binding.
    ///
    /// The function is called lazily on the first `get()` and again after
    /// each `invalidate()`.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            compute: Box::new(compute),
            cached: RwLock::new(None),
            dirty: AtomicBool::new(true),
        }
    }

    /// The cached value, recomputed first if dirty.
    pub fn get(&self) -> T {
        if !self.dirty.load(Ordering::Acquire) {
            if let Some(value) = self.cached.read().as_ref() {
                return value.clone();
            }
        }

        let value = (self.compute)();
        *self.cached.write() = Some(value.clone());
        self.dirty.store(false, Ordering::Release);
        value
    }

    /// Drop the cached value at the next read.
    pub fn invalidate(&self) {
        self.dirty.store(true, Ordering::Release);
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("dirty", &self.dirty.load(Ordering::Acquire))
            .field("cached", &*self.cached.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_set_reports_real_changes_only() {
        let panel_shown = Property::new(false);
        assert!(!panel_shown.set(false));
        assert!(panel_shown.set(true));
        assert!(panel_shown.get());
    }

    #[test]
    fn test_optional_value_transitions() {
        let selected_day = Property::new(None);
        assert!(selected_day.set(Some(7u32)));
        assert!(!selected_day.set(Some(7)));
        assert!(selected_day.set(None));
        assert_eq!(selected_day.get(), None);
    }

    #[test]
    fn test_binding_recomputes_once_per_invalidation() {
        let month = Arc::new(Property::new(1u32));
        let computations = Arc::new(AtomicUsize::new(0));

        let source = month.clone();
        let counter = computations.clone();
        let days_in_month = Binding::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            if source.get() == 2 { 28 } else { 31 }
        });
        assert_eq!(computations.load(Ordering::SeqCst), 0);

        assert_eq!(days_in_month.get(), 31);
        assert_eq!(days_in_month.get(), 31);
        assert_eq!(computations.load(Ordering::SeqCst), 1);

        month.set(2);
        assert_eq!(days_in_month.get(), 31, "stale until invalidated");

        days_in_month.invalidate();
        assert_eq!(days_in_month.get(), 28);
        assert_eq!(computations.load(Ordering::SeqCst), 2);
    }
}
