//! A single pickable value: a day cell, a month, an hour, a minute.

use std::sync::Arc;

use chrono::NaiveDateTime;

use super::{Component, attrs};
use crate::calendar::CalendarUnit;
use crate::context::DatePickerContext;
use crate::render::{AttrValue, Attributes, ElementKind, RenderTarget};

/// Side effects the host should perform for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemEffects {
    /// Scroll the item into the center of its view.
    pub scroll_into_view: bool,
    /// Move keyboard focus to the item.
    pub focus: bool,
}

/// One value inside a view.
///
/// `selected` and `active` compare the item's value with the picker's dates
/// at the item's [`CalendarUnit`], so a month item is selected whenever the
/// selected date falls in that month.
#[derive(Debug)]
pub struct DatePickerCalendarItem {
    context: Arc<DatePickerContext>,
    value: NaiveDateTime,
    unit: CalendarUnit,
    was_selected: bool,
    was_active: bool,
}

impl DatePickerCalendarItem {
    /// Create an item for `value`, compared by day.
    pub fn new(context: Arc<DatePickerContext>, value: NaiveDateTime) -> Self {
        Self {
            context,
            value,
            unit: CalendarUnit::default(),
            was_selected: false,
            was_active: false,
        }
    }

    /// Compare at `unit` instead of by day.
    pub fn with_unit(mut self, unit: CalendarUnit) -> Self {
        self.unit = unit;
        self
    }

    /// The value the item stands for.
    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    /// Whether the item matches the selected date.
    pub fn selected(&self) -> bool {
        self.context
            .date()
            .is_some_and(|date| self.unit.same(date, self.value))
    }

    /// Whether the item matches the keyboard-active date.
    pub fn active(&self) -> bool {
        self.context
            .active_date()
            .is_some_and(|date| self.unit.same(date, self.value))
    }

    /// Commit the item's value, moving on to the next view if the current
    /// view asks for it.
    pub fn handle_click(&self) {
        self.context.commit_item(self.value);
    }

    /// The item received focus.
    pub fn handle_focus(&self) {
        self.context.update_active_date(Some(self.value));
    }

    /// Effects due since the last poll.
    ///
    /// An item that has just become selected or active asks to be scrolled
    /// into view and focused; focus is withheld while the trigger button or
    /// input holds it.
    pub fn poll_effects(&mut self) -> ItemEffects {
        let selected = self.selected();
        let active = self.active();
        let rising = (selected && !self.was_selected) || (active && !self.was_active);
        self.was_selected = selected;
        self.was_active = active;

        ItemEffects {
            scroll_into_view: rising,
            focus: rising && !self.context.trigger_has_focus(),
        }
    }
}

impl Component for DatePickerCalendarItem {
    fn attributes(&self) -> Attributes {
        let active = self.active();
        attrs([
            ("aria-selected", AttrValue::from(self.selected())),
            ("data-active", AttrValue::from(active)),
            ("tabindex", AttrValue::from(if active { "0" } else { "-1" })),
        ])
    }

    fn default_target(&self) -> RenderTarget {
        RenderTarget::Element(ElementKind::Button)
    }
}
