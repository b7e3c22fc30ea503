//! The popup panel.
//!
//! The panel owns keyboard navigation while it is shown and exposes the
//! day, hour and minute sequences derived from the cursor date. The
//! sequences are cached and recomputed only after the cursor moves.

use std::sync::{Arc, Weak};

use chrono::NaiveDateTime;
use horizon_datepicker_core::logging::targets;
use horizon_datepicker_core::{Binding, ConnectionId};

use super::{Component, attrs};
use crate::calendar;
use crate::context::DatePickerContext;
use crate::events::{Key, KeyPressEvent};
use crate::render::{AttrValue, Attributes, ElementKind, RenderTarget};

type DateList = Arc<Binding<Vec<NaiveDateTime>>>;

fn derived<F>(context: &Arc<DatePickerContext>, compute: F) -> DateList
where
    F: Fn(&DatePickerContext) -> Vec<NaiveDateTime> + Send + Sync + 'static,
{
    let weak: Weak<DatePickerContext> = Arc::downgrade(context);
    Arc::new(Binding::new(move || {
        weak.upgrade()
            .map(|context| compute(&context))
            .unwrap_or_default()
    }))
}

/// The panel holding the picker's views.
#[derive(Debug)]
pub struct DatePickerPanel {
    context: Arc<DatePickerContext>,
    days: DateList,
    hours: DateList,
    minutes: DateList,
    connection: ConnectionId,
}

impl DatePickerPanel {
    /// Create a panel for `context`.
    pub fn new(context: Arc<DatePickerContext>) -> Self {
        let days = derived(&context, |c| {
            calendar::days_in_grid(c.view_date(), c.first_day_of_week())
        });
        let hours = derived(&context, |c| calendar::hours_in_day(c.view_date()));
        let minutes = derived(&context, |c| calendar::minutes_in_hour(c.view_date()));

        let bindings = [days.clone(), hours.clone(), minutes.clone()];
        let connection = context.view_date_changed.connect(move |_| {
            for binding in &bindings {
                binding.invalidate();
            }
        });

        Self {
            context,
            days,
            hours,
            minutes,
            connection,
        }
    }

    /// Whether the panel is shown.
    pub fn is_shown(&self) -> bool {
        self.context.show_panel()
    }

    /// The 35 days of the month grid around the cursor date.
    pub fn days_in_current_month(&self) -> Vec<NaiveDateTime> {
        self.days.get()
    }

    /// The 24 hours of the cursor date's day.
    pub fn hours_in_current_day(&self) -> Vec<NaiveDateTime> {
        self.hours.get()
    }

    /// The 60 minutes of the cursor date's hour.
    pub fn minutes_in_current_hour(&self) -> Vec<NaiveDateTime> {
        self.minutes.get()
    }

    /// Handle a key press while the panel is shown.
    ///
    /// Arrow keys move the active date only while the current view is a
    /// day grid (no view, a role-less view or a month view). Enter and
    /// Space commit the active date as an item click would. Returns `true`
    /// and accepts the event if it was consumed.
    pub fn handle_key_press(&self, event: &mut KeyPressEvent) -> bool {
        if !self.is_shown() || event.modifiers.any() {
            return false;
        }

        let day_grid = self
            .context
            .current_view()
            .is_none_or(|view| view.is_day_grid());

        let step = match event.key {
            Key::ArrowLeft => Some(-1),
            Key::ArrowRight => Some(1),
            Key::ArrowUp => Some(-7),
            Key::ArrowDown => Some(7),
            _ => None,
        };

        match (event.key, step) {
            (Key::Escape, _) => self.context.update_show_panel(false),
            (_, Some(days)) if day_grid => self.context.adjust_active_date(days),
            (Key::Enter | Key::Space, _) => {
                let Some(active) = self.context.active_date() else {
                    return false;
                };
                tracing::debug!(target: targets::NAVIGATION, %active, "active date committed");
                self.context.commit_item(active);
            }
            _ => return false,
        }

        event.base.accept();
        true
    }
}

impl Component for DatePickerPanel {
    fn attributes(&self) -> Attributes {
        attrs([
            ("role", AttrValue::from("dialog")),
            ("tabindex", AttrValue::from("-1")),
        ])
    }

    fn default_target(&self) -> RenderTarget {
        RenderTarget::Element(ElementKind::Div)
    }

    fn is_rendered(&self) -> bool {
        self.is_shown()
    }
}

impl Drop for DatePickerPanel {
    fn drop(&mut self) {
        self.context.view_date_changed.disconnect(self.connection);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::context::DatePickerConfig;
    use crate::descriptor::{ViewDescriptor, ViewRole};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn context() -> Arc<DatePickerContext> {
        DatePickerContext::shared(DatePickerConfig::new().with_date(at(2021, 1, 7, 13, 45)))
    }

    fn press(panel: &DatePickerPanel, key: Key) -> bool {
        panel.handle_key_press(&mut KeyPressEvent::plain(key))
    }

    #[test]
    fn test_derived_lists_follow_cursor() {
        let ctx = context();
        let panel = DatePickerPanel::new(ctx.clone());
        assert_eq!(panel.days_in_current_month()[0], at(2020, 12, 27, 0, 0));
        assert_eq!(panel.hours_in_current_day()[13], at(2021, 1, 7, 13, 0));
        assert_eq!(panel.minutes_in_current_hour()[45], at(2021, 1, 7, 13, 45));

        ctx.next_view_month();
        assert_eq!(panel.days_in_current_month()[0], at(2021, 1, 31, 0, 0));
        assert_eq!(panel.hours_in_current_day()[0], at(2021, 2, 7, 0, 0));
    }

    #[test]
    fn test_keys_ignored_while_hidden() {
        let panel = DatePickerPanel::new(context());
        assert!(!press(&panel, Key::Escape));
        assert!(panel.render(vec![]).unwrap().is_none());
    }

    #[test]
    fn test_arrow_keys_move_active_date() {
        let ctx = context();
        ctx.update_show_panel(true);
        let panel = DatePickerPanel::new(ctx.clone());

        assert!(press(&panel, Key::ArrowRight));
        assert_eq!(ctx.active_date(), Some(at(2021, 1, 8, 13, 45)));
        assert!(press(&panel, Key::ArrowUp));
        assert_eq!(ctx.active_date(), Some(at(2021, 1, 1, 13, 45)));
    }

    #[test]
    fn test_arrow_keys_gated_by_role() {
        let ctx = context();
        ctx.add_view(ViewDescriptor::new(0).with_role(ViewRole::Time))
            .unwrap();
        ctx.update_show_panel(true);
        let panel = DatePickerPanel::new(ctx.clone());

        assert!(!press(&panel, Key::ArrowRight));
        assert_eq!(ctx.active_date(), Some(at(2021, 1, 7, 13, 45)));
    }

    #[test]
    fn test_enter_commits_active_date() {
        let ctx = context();
        ctx.add_view(ViewDescriptor::new(0)).unwrap();
        ctx.add_view(ViewDescriptor::new(1)).unwrap();
        ctx.update_show_panel(true);
        let panel = DatePickerPanel::new(ctx.clone());

        press(&panel, Key::ArrowLeft);
        assert!(press(&panel, Key::Space));
        assert_eq!(ctx.date(), Some(at(2021, 1, 6, 13, 45)));
        assert_eq!(ctx.current_view().map(|v| v.order), Some(1));
    }

    #[test]
    fn test_escape_closes() {
        let ctx = context();
        ctx.update_show_panel(true);
        let panel = DatePickerPanel::new(ctx.clone());
        assert!(panel.render(vec![]).unwrap().is_some());

        let mut event = KeyPressEvent::plain(Key::Escape);
        assert!(panel.handle_key_press(&mut event));
        assert!(event.is_accepted());
        assert!(!ctx.show_panel());
    }
}
