//! The root picker.

use std::sync::Arc;

use chrono::NaiveDateTime;
use horizon_datepicker_core::logging::span_names;
use horizon_datepicker_core::{ConnectionId, PerfSpan};

use crate::context::{DatePickerConfig, DatePickerContext};
use crate::descriptor::ViewDescriptor;
use crate::error::Result;
use crate::format::DateFormat;
use crate::render::{self, Attributes, ElementKind, Node, RenderTarget};
use crate::widgets::{
    DatePickerButton, DatePickerCalendarItem, DatePickerInput, DatePickerNavButton,
    DatePickerPanel, DatePickerView, NavDirection,
};

/// Values the root exposes to the markup it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotProps {
    /// The selected date.
    pub date: Option<NaiveDateTime>,
    /// The cursor date.
    pub view_date: NaiveDateTime,
}

/// A date picker: the shared state plus factories for its components.
///
/// # Example
///
/// ```
/// use horizon_datepicker::prelude::*;
/// use chrono::NaiveDate;
///
/// let picker = DatePicker::new(DatePickerConfig::new());
/// let _month = picker.view(ViewDescriptor::new(0).with_role(ViewRole::CalendarMonth)).unwrap();
///
/// let picked = std::sync::Arc::new(parking_lot::Mutex::new(None));
/// let sink = picked.clone();
/// picker.on_date_changed(move |date| *sink.lock() = Some(*date));
///
/// let day = NaiveDate::from_ymd_opt(2021, 1, 7).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// picker.calendar_item(day).handle_click();
/// assert_eq!(*picked.lock(), Some(day));
/// ```
#[derive(Debug, Clone)]
pub struct DatePicker {
    context: Arc<DatePickerContext>,
}

impl DatePicker {
    /// Create a picker from `config`.
    pub fn new(config: DatePickerConfig) -> Self {
        Self {
            context: DatePickerContext::shared(config),
        }
    }

    /// The shared state.
    pub fn context(&self) -> &Arc<DatePickerContext> {
        &self.context
    }

    /// The selected date.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.context.date()
    }

    /// Observe every commit.
    pub fn on_date_changed<F>(&self, callback: F) -> ConnectionId
    where
        F: Fn(&NaiveDateTime) + Send + Sync + 'static,
    {
        self.context.date_changed.connect(callback)
    }

    /// Stop observing commits through `id`.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.context.date_changed.disconnect(id)
    }

    /// The host detected a pointer interaction outside the picker.
    pub fn handle_outside_interaction(&self) {
        self.context.close_from_outside();
    }

    /// Run deferred work. Call after applying the visual updates of the
    /// current round of events.
    pub fn process_deferred(&self) -> usize {
        let _span = PerfSpan::new(span_names::DEFERRED);
        self.context.process_deferred()
    }

    /// The values exposed to slot content.
    pub fn slot_props(&self) -> SlotProps {
        SlotProps {
            date: self.context.date(),
            view_date: self.context.view_date(),
        }
    }

    /// Move the cursor back one month.
    pub fn prev_view_month(&self) {
        self.context.prev_view_month();
    }

    /// Move the cursor forward one month.
    pub fn next_view_month(&self) {
        self.context.next_view_month();
    }

    /// A trigger button.
    pub fn button(&self) -> DatePickerButton {
        DatePickerButton::new(self.context.clone())
    }

    /// A text input reading `format`.
    pub fn input(&self, format: DateFormat) -> DatePickerInput {
        DatePickerInput::new(self.context.clone(), format)
    }

    /// The panel.
    pub fn panel(&self) -> DatePickerPanel {
        DatePickerPanel::new(self.context.clone())
    }

    /// Mount a view.
    pub fn view(&self, descriptor: ViewDescriptor) -> Result<DatePickerView> {
        DatePickerView::mount(self.context.clone(), descriptor)
    }

    /// An item for `value`.
    pub fn calendar_item(&self, value: NaiveDateTime) -> DatePickerCalendarItem {
        DatePickerCalendarItem::new(self.context.clone(), value)
    }

    /// A navigation button paging in `direction`.
    pub fn nav_button(&self, direction: NavDirection) -> DatePickerNavButton {
        DatePickerNavButton::new(self.context.clone(), direction)
    }

    /// Render the root container around `children`.
    pub fn render(&self, target: &RenderTarget, children: Vec<Node>) -> Result<Node> {
        render::render(target, Attributes::new(), children)
    }

    /// Render the root as a `div`.
    pub fn render_default(&self, children: Vec<Node>) -> Result<Node> {
        self.render(&RenderTarget::Element(ElementKind::Div), children)
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(DatePickerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_slot_props() {
        let picker = DatePicker::new(DatePickerConfig::new().with_date(at(2021, 1, 7)));
        assert_eq!(
            picker.slot_props(),
            SlotProps {
                date: Some(at(2021, 1, 7)),
                view_date: at(2021, 1, 7),
            }
        );
        picker.next_view_month();
        assert_eq!(picker.slot_props().view_date, at(2021, 2, 7));
        picker.prev_view_month();
        assert_eq!(picker.slot_props().view_date, at(2021, 1, 7));
    }

    #[test]
    fn test_disconnect_callback() {
        let picker = DatePicker::default();
        let id = picker.on_date_changed(|_| {});
        assert!(picker.disconnect(id));
        assert!(!picker.disconnect(id));
    }

    #[test]
    fn test_render_container() {
        let picker = DatePicker::default();
        let node = picker.render_default(vec![Node::text("slot")]).unwrap();
        assert_eq!(node.kind(), Some(&ElementKind::Div));
        assert_eq!(node.children().len(), 1);
    }
}
