//! A registered view inside the panel.

use std::sync::Arc;

use horizon_datepicker_core::logging::targets;

use super::{Component, attrs};
use crate::context::DatePickerContext;
use crate::descriptor::ViewDescriptor;
use crate::error::Result;
use crate::events::WheelEvent;
use crate::render::{AttrValue, Attributes, ElementKind, RenderTarget};

/// A view mounted on the picker.
///
/// Mounting registers the descriptor; dropping the view unregisters it.
#[derive(Debug)]
pub struct DatePickerView {
    context: Arc<DatePickerContext>,
    descriptor: ViewDescriptor,
}

impl DatePickerView {
    /// Register `descriptor` and return the mounted view.
    ///
    /// Fails if a view with the same order is already mounted.
    pub fn mount(context: Arc<DatePickerContext>, descriptor: ViewDescriptor) -> Result<Self> {
        context.add_view(descriptor)?;
        Ok(Self {
            context,
            descriptor,
        })
    }

    /// The view's descriptor.
    pub fn descriptor(&self) -> ViewDescriptor {
        self.descriptor
    }

    /// Whether this is the current view of an open panel.
    pub fn is_shown(&self) -> bool {
        self.context.show_panel()
            && self
                .context
                .current_view()
                .is_some_and(|view| view.order == self.descriptor.order)
    }

    /// Make this the current view.
    pub fn show(&self) {
        self.context.update_view(self.descriptor);
    }

    /// Page the cursor when the wheel pushes past the top or bottom edge.
    ///
    /// Only views with a role paginate, and only while shown with the event
    /// target inside the view.
    pub fn handle_wheel(&self, event: &mut WheelEvent) -> bool {
        if self.descriptor.role.is_none() || !self.is_shown() || !event.inside_view {
            return false;
        }

        if event.delta_y < 0.0 && event.at_top() {
            tracing::trace!(target: targets::NAVIGATION, order = self.descriptor.order, "wheel past top edge");
            self.context.prev_view_period();
        } else if event.delta_y > 0.0 && event.at_bottom() {
            tracing::trace!(target: targets::NAVIGATION, order = self.descriptor.order, "wheel past bottom edge");
            self.context.next_view_period();
        } else {
            return false;
        }

        event.base.accept();
        true
    }
}

impl Component for DatePickerView {
    fn attributes(&self) -> Attributes {
        let role = self.descriptor.role.map_or("", |role| role.as_str());
        attrs([
            ("data-order", AttrValue::from(self.descriptor.order.to_string())),
            ("data-role", AttrValue::from(role)),
        ])
    }

    fn default_target(&self) -> RenderTarget {
        RenderTarget::Element(ElementKind::Div)
    }

    fn is_rendered(&self) -> bool {
        self.is_shown()
    }
}

impl Drop for DatePickerView {
    fn drop(&mut self) {
        self.context.remove_view(self.descriptor.order);
    }
}
