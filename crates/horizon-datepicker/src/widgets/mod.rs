//! Picker components.
//!
//! Each component holds the shared [`DatePickerContext`](crate::DatePickerContext) and translates host
//! events into context operations:
//!
//! - [`DatePickerButton`]: Toggles the panel
//! - [`DatePickerInput`]: Typed digit entry with incremental parsing
//! - [`DatePickerPanel`]: Keyboard navigation and the derived day/hour/minute lists
//! - [`DatePickerView`]: One registered view; wheel pagination
//! - [`DatePickerCalendarItem`]: A single pickable value
//! - [`DatePickerNavButton`]: Pages the cursor backward or forward

mod button;
mod calendar_item;
mod input;
mod nav_button;
mod panel;
mod view;

pub use button::DatePickerButton;
pub use calendar_item::{DatePickerCalendarItem, ItemEffects};
pub use input::DatePickerInput;
pub use nav_button::{DatePickerNavButton, NavDirection};
pub use panel::DatePickerPanel;
pub use view::DatePickerView;

use crate::error::Result;
use crate::render::{self, Attributes, Node, RenderTarget};

/// Behavior shared by every picker component.
pub trait Component {
    /// The attributes the component manages on its element.
    fn attributes(&self) -> Attributes;

    /// The target used by [`render`](Self::render).
    fn default_target(&self) -> RenderTarget;

    /// Whether the component currently renders anything.
    fn is_rendered(&self) -> bool {
        true
    }

    /// Render as `target`, wrapping `children`.
    ///
    /// Returns `None` while the component is hidden.
    fn render_as(&self, target: &RenderTarget, children: Vec<Node>) -> Result<Option<Node>> {
        if !self.is_rendered() {
            return Ok(None);
        }
        render::render(target, self.attributes(), children).map(Some)
    }

    /// Render as the default target.
    fn render(&self, children: Vec<Node>) -> Result<Option<Node>> {
        self.render_as(&self.default_target(), children)
    }
}

pub(crate) fn attrs<const N: usize>(pairs: [(&str, render::AttrValue); N]) -> Attributes {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
