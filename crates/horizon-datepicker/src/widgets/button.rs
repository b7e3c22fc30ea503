//! The trigger button.

use std::sync::Arc;

use horizon_datepicker_core::logging::targets;

use super::{Component, attrs};
use crate::context::DatePickerContext;
use crate::render::{Attributes, AttrValue, ElementKind, RenderTarget};

/// A button that shows and hides the panel.
#[derive(Debug, Clone)]
pub struct DatePickerButton {
    context: Arc<DatePickerContext>,
}

impl DatePickerButton {
    /// Create a button for `context`.
    pub fn new(context: Arc<DatePickerContext>) -> Self {
        Self { context }
    }

    /// Toggle the panel.
    ///
    /// When opening with no current view (after an outside interaction
    /// cleared it), the first registered view is restored.
    pub fn handle_click(&self) {
        let open = !self.context.show_panel();
        if open && self.context.current_view().is_none() {
            if let Some(first) = self.context.first_view() {
                self.context.update_view(first);
            }
        }
        tracing::debug!(target: targets::NAVIGATION, open, "button clicked");
        self.context.update_show_panel(open);
    }

    /// The button gained focus.
    pub fn handle_focus_in(&self) {
        self.context.set_trigger_focused(true);
    }

    /// The button lost focus.
    pub fn handle_focus_out(&self) {
        self.context.set_trigger_focused(false);
    }
}

impl Component for DatePickerButton {
    fn attributes(&self) -> Attributes {
        attrs([
            ("type", AttrValue::from("button")),
            ("aria-haspopup", AttrValue::from("dialog")),
            ("aria-expanded", AttrValue::from(self.context.show_panel())),
        ])
    }

    fn default_target(&self) -> RenderTarget {
        RenderTarget::Element(ElementKind::Button)
    }
}
