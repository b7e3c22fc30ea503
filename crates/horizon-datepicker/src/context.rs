//! Shared picker state and the view registry.
//!
//! Every component of one picker holds an `Arc<DatePickerContext>`. The
//! context owns the selected date, the cursor date the panel displays, the
//! keyboard-active date, panel visibility and the registry of mounted views.
//! Mutators update a [`Property`] and emit the matching change signal only
//! when the value actually changed; [`DatePickerContext::update_date`] is the
//! exception and always emits `date_changed`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use horizon_datepicker_core::logging::targets;
use horizon_datepicker_core::{Property, SharedTaskQueue, Signal, TaskId};
use parking_lot::Mutex;

use crate::calendar::{self, Clock};
use crate::descriptor::{ViewDescriptor, ViewRole};
use crate::error::{DatePickerError, Result};

/// Configuration for a picker.
#[derive(Debug, Clone, Copy)]
pub struct DatePickerConfig {
    /// The initially selected date.
    pub initial_date: Option<NaiveDateTime>,
    /// The weekday the month grid starts on.
    pub first_day_of_week: Weekday,
    /// Source of "now", used when nothing is selected.
    pub clock: Clock,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            initial_date: None,
            first_day_of_week: Weekday::Sun,
            clock: calendar::system_now,
        }
    }
}

impl DatePickerConfig {
    /// Start from the defaults: nothing selected, weeks starting on Sunday,
    /// the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initially selected date.
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.initial_date = Some(date);
        self
    }

    /// Set the first day of the week.
    pub fn with_first_day_of_week(mut self, weekday: Weekday) -> Self {
        self.first_day_of_week = weekday;
        self
    }

    /// Set the clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

/// State shared by all components of one picker.
#[derive(Debug)]
pub struct DatePickerContext {
    date: Property<Option<NaiveDateTime>>,
    view_date: Property<NaiveDateTime>,
    active_date: Property<Option<NaiveDateTime>>,
    show_panel: Property<bool>,
    view: Property<Option<ViewDescriptor>>,
    views: Mutex<Vec<ViewDescriptor>>,
    trigger_focused: AtomicBool,
    first_day_of_week: Weekday,
    clock: Clock,
    deferred: SharedTaskQueue,

    /// Emitted with the new value on every commit, even if unchanged.
    pub date_changed: Signal<NaiveDateTime>,
    /// Emitted when the cursor date changes.
    pub view_date_changed: Signal<NaiveDateTime>,
    /// Emitted when the keyboard-active date changes.
    pub active_date_changed: Signal<Option<NaiveDateTime>>,
    /// Emitted when the current view changes.
    pub view_changed: Signal<Option<ViewDescriptor>>,
    /// Emitted when the panel is shown or hidden.
    pub show_panel_changed: Signal<bool>,
}

static_assertions::assert_impl_all!(DatePickerContext: Send, Sync);

impl DatePickerContext {
    /// Create a context from `config`.
    pub fn new(config: DatePickerConfig) -> Self {
        let date = config.initial_date.map(calendar::truncate_to_minute);
        let view_date = date.unwrap_or_else(|| calendar::truncate_to_minute((config.clock)()));
        Self {
            date: Property::new(date),
            view_date: Property::new(view_date),
            active_date: Property::new(date),
            show_panel: Property::new(false),
            view: Property::new(None),
            views: Mutex::new(Vec::new()),
            trigger_focused: AtomicBool::new(false),
            first_day_of_week: config.first_day_of_week,
            clock: config.clock,
            deferred: SharedTaskQueue::new(),
            date_changed: Signal::new(),
            view_date_changed: Signal::new(),
            active_date_changed: Signal::new(),
            view_changed: Signal::new(),
            show_panel_changed: Signal::new(),
        }
    }

    /// Create a shared context from `config`.
    pub fn shared(config: DatePickerConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The selected date.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date.get()
    }

    /// The cursor date the panel displays.
    pub fn view_date(&self) -> NaiveDateTime {
        self.view_date.get()
    }

    /// The keyboard-active date.
    pub fn active_date(&self) -> Option<NaiveDateTime> {
        self.active_date.get()
    }

    /// Whether the panel is visible.
    pub fn show_panel(&self) -> bool {
        self.show_panel.get()
    }

    /// The current view.
    pub fn current_view(&self) -> Option<ViewDescriptor> {
        self.view.get()
    }

    /// A snapshot of the registered views, in registration order.
    pub fn views(&self) -> Vec<ViewDescriptor> {
        self.views.lock().clone()
    }

    /// The weekday the month grid starts on.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// The current time according to the configured clock.
    pub fn now(&self) -> NaiveDateTime {
        calendar::truncate_to_minute((self.clock)())
    }

    /// The date time-only input is placed on: the selected date, else today.
    pub fn base_date(&self) -> NaiveDate {
        self.date().unwrap_or_else(|| self.now()).date()
    }

    // =========================================================================
    // Picker state
    // =========================================================================

    /// Commit `value` as the selected date.
    ///
    /// Also moves the cursor and the active date to `value`. The view is
    /// left alone; see [`commit_item`](Self::commit_item) for the variant
    /// that advances it.
    pub fn update_date(&self, value: NaiveDateTime) {
        let value = calendar::truncate_to_minute(value);
        tracing::debug!(target: targets::STATE, %value, "date committed");
        self.date.set(Some(value));
        self.update_view_date(value);
        self.update_active_date(Some(value));
        self.date_changed.emit(value);
    }

    /// Move the cursor date.
    pub fn update_view_date(&self, value: NaiveDateTime) {
        if self.view_date.set(value) {
            tracing::trace!(target: targets::STATE, %value, "view date changed");
            self.view_date_changed.emit(value);
        }
    }

    /// Move the keyboard-active date.
    pub fn update_active_date(&self, value: Option<NaiveDateTime>) {
        if self.active_date.set(value) {
            tracing::trace!(target: targets::STATE, ?value, "active date changed");
            self.active_date_changed.emit(value);
        }
    }

    /// Show or hide the panel.
    pub fn update_show_panel(&self, shown: bool) {
        if self.show_panel.set(shown) {
            tracing::debug!(target: targets::STATE, shown, "panel visibility changed");
            self.show_panel_changed.emit(shown);
        }
    }

    /// Page the cursor back by the current view's period.
    pub fn prev_view_period(&self) {
        self.shift_view_period(-1);
    }

    /// Page the cursor forward by the current view's period.
    pub fn next_view_period(&self) {
        self.shift_view_period(1);
    }

    /// Page by a month for day grids, by a year for year views; time views
    /// do not paginate.
    fn shift_view_period(&self, step: i32) {
        let view_date = self.view_date();
        let shifted = match self.current_view().and_then(|v| v.role) {
            None | Some(ViewRole::CalendarMonth) => calendar::add_months(view_date, step),
            Some(ViewRole::CalendarYear) => calendar::add_years(view_date, step),
            Some(ViewRole::Time) => return,
        };
        self.update_view_date(shifted);
    }

    /// Move the cursor back one month regardless of the current view.
    pub fn prev_view_month(&self) {
        self.update_view_date(calendar::add_months(self.view_date(), -1));
    }

    /// Move the cursor forward one month regardless of the current view.
    pub fn next_view_month(&self) {
        self.update_view_date(calendar::add_months(self.view_date(), 1));
    }

    /// React to an interaction outside the picker: forget the current view
    /// and hide the panel.
    pub fn close_from_outside(&self) {
        tracing::debug!(target: targets::STATE, "outside interaction");
        self.set_view(None);
        self.update_show_panel(false);
    }

    /// Move the active date by `days`, staying inside the visible month grid.
    ///
    /// Starts from the active date, else the selected date, else the cursor.
    pub fn adjust_active_date(&self, days: i64) {
        let view_date = self.view_date();
        let base = self
            .active_date()
            .or_else(|| self.date())
            .unwrap_or(view_date);
        let target = calendar::clamp_to_grid(
            calendar::add_days(base, days),
            view_date,
            self.first_day_of_week,
        );
        tracing::trace!(target: targets::NAVIGATION, days, %target, "active date adjusted");
        self.update_active_date(Some(target));
    }

    /// Commit `value` the way a picked item does: select it, then move to
    /// the next view if the current one asks for it.
    pub fn commit_item(&self, value: NaiveDateTime) {
        self.update_date(value);
        if self.current_view().is_some_and(|v| v.auto_next) {
            self.next_view();
        }
    }

    /// Record whether the trigger (button or input) holds focus.
    pub fn set_trigger_focused(&self, focused: bool) {
        self.trigger_focused.store(focused, Ordering::Release);
    }

    /// Whether the trigger holds focus.
    pub fn trigger_has_focus(&self) -> bool {
        self.trigger_focused.load(Ordering::Acquire)
    }

    // =========================================================================
    // View registry
    // =========================================================================

    /// Register a mounted view.
    ///
    /// The first view registered becomes the current view.
    pub fn add_view(&self, descriptor: ViewDescriptor) -> Result<()> {
        let was_empty = {
            let mut views = self.views.lock();
            if views.iter().any(|v| v.order == descriptor.order) {
                tracing::warn!(
                    target: targets::REGISTRY,
                    order = descriptor.order,
                    "duplicate view order rejected"
                );
                return Err(DatePickerError::DuplicateViewOrder(descriptor.order));
            }
            views.push(descriptor);
            views.len() == 1
        };
        tracing::debug!(target: targets::REGISTRY, order = descriptor.order, role = ?descriptor.role, "view registered");

        if was_empty {
            self.set_view(Some(descriptor));
        }
        Ok(())
    }

    /// Unregister the view with `order`.
    ///
    /// If it was current, the first remaining view takes over, or no view
    /// when the registry is now empty. Returns `false` if no such view was
    /// registered.
    pub fn remove_view(&self, order: i32) -> bool {
        let fallback = {
            let mut views = self.views.lock();
            let Some(pos) = views.iter().position(|v| v.order == order) else {
                return false;
            };
            views.remove(pos);
            views.first().copied()
        };
        tracing::debug!(target: targets::REGISTRY, order, "view unregistered");

        if self.current_view().is_some_and(|v| v.order == order) {
            self.set_view(fallback);
        }
        true
    }

    /// Make the registered view with `descriptor.order` current.
    ///
    /// Unregistered descriptors are ignored. Returns whether the view was
    /// found.
    pub fn update_view(&self, descriptor: ViewDescriptor) -> bool {
        let registered = self.view_by_order(descriptor.order);
        match registered {
            Some(view) => {
                self.set_view(Some(view));
                true
            }
            None => {
                tracing::warn!(
                    target: targets::REGISTRY,
                    order = descriptor.order,
                    "ignoring switch to unregistered view"
                );
                false
            }
        }
    }

    /// Advance to the view after the current one.
    ///
    /// That is the view with the next order, else the first registered view;
    /// with no current view, the first registered view.
    pub fn next_view(&self) {
        let next = {
            let views = self.views.lock();
            self.current_view()
                .and_then(|current| views.iter().find(|v| v.order == current.order + 1))
                .or_else(|| views.first())
                .copied()
        };
        self.set_view(next);
    }

    /// The first registered view with `role`.
    pub fn find_view(&self, role: ViewRole) -> Option<ViewDescriptor> {
        self.views
            .lock()
            .iter()
            .find(|v| v.role == Some(role))
            .copied()
    }

    /// The first registered view.
    pub fn first_view(&self) -> Option<ViewDescriptor> {
        self.views.lock().first().copied()
    }

    fn view_by_order(&self, order: i32) -> Option<ViewDescriptor> {
        self.views.lock().iter().find(|v| v.order == order).copied()
    }

    fn set_view(&self, view: Option<ViewDescriptor>) {
        if self.view.set(view) {
            tracing::debug!(target: targets::REGISTRY, order = ?view.map(|v| v.order), "current view changed");
            self.update_active_date(self.date());
            self.view_changed.emit(view);
        }
    }

    // =========================================================================
    // Deferred work
    // =========================================================================

    /// Run `task` on the next [`process_deferred`](Self::process_deferred).
    ///
    /// The task is skipped if the context has been dropped by then.
    pub fn defer<F>(self: &Arc<Self>, task: F) -> TaskId
    where
        F: FnOnce(&DatePickerContext) + Send + 'static,
    {
        let weak: Weak<Self> = Arc::downgrade(self);
        self.deferred.post(move || {
            if let Some(context) = weak.upgrade() {
                task(&context);
            }
        })
    }

    /// Drop a deferred task that has not run yet.
    pub fn cancel_deferred(&self, id: TaskId) -> bool {
        self.deferred.cancel(id)
    }

    /// Run the deferred tasks. Returns how many ran.
    pub fn process_deferred(&self) -> usize {
        self.deferred.process_all()
    }

    /// Whether deferred tasks are waiting.
    pub fn has_deferred(&self) -> bool {
        self.deferred.has_pending()
    }
}
