//! Horizon Datepicker - a headless date picker component set.
//!
//! A [`DatePicker`] owns the shared state (selected date, cursor date,
//! keyboard-active date, panel visibility and the registry of mounted views)
//! and hands out components that turn host events into state changes:
//!
//! - [`DatePickerButton`](widgets::DatePickerButton) toggles the panel
//! - [`DatePickerInput`](widgets::DatePickerInput) parses typed digits
//!   against a [`DateFormat`] as the user types
//! - [`DatePickerPanel`](widgets::DatePickerPanel) handles keyboard
//!   navigation and lists the days, hours and minutes around the cursor
//! - [`DatePickerView`](widgets::DatePickerView) registers one view and
//!   pages on wheel events at its edges
//! - [`DatePickerCalendarItem`](widgets::DatePickerCalendarItem) commits
//!   its value when clicked
//! - [`DatePickerNavButton`](widgets::DatePickerNavButton) pages the cursor
//!
//! Nothing is drawn. Each component describes the element it wants through
//! [`render::Node`], and the host builds its own markup from that.
//!
//! # Example
//!
//! ```
//! use horizon_datepicker::prelude::*;
//! use chrono::NaiveDate;
//!
//! let picker = DatePicker::new(DatePickerConfig::new());
//! let _month = picker
//!     .view(ViewDescriptor::new(0).with_role(ViewRole::CalendarMonth))
//!     .unwrap();
//! let input = picker.input(DateFormat::Date);
//!
//! for c in "20210107".chars() {
//!     input.handle_key_press(&mut KeyPressEvent::plain(Key::Character(c)));
//! }
//!
//! let expected = NaiveDate::from_ymd_opt(2021, 1, 7).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! assert_eq!(picker.date(), Some(expected));
//! assert_eq!(input.display(), "2021-01-07");
//! ```

pub mod buffer;
pub mod calendar;
pub mod context;
pub mod debug;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod format;
pub mod parser;
pub mod picker;
pub mod render;
pub mod widgets;

pub use buffer::{InputBuffer, InputState};
pub use calendar::CalendarUnit;
pub use context::{DatePickerConfig, DatePickerContext};
pub use descriptor::{ViewDescriptor, ViewRole};
pub use error::{DatePickerError, Result};
pub use events::{Key, KeyPressEvent, KeyboardModifiers, WheelEvent};
pub use format::DateFormat;
pub use parser::{InputParser, ParseStatus};
pub use picker::{DatePicker, SlotProps};
pub use render::{Node, RenderTarget};

pub use horizon_datepicker_core::{ConnectionId, Signal};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendar::CalendarUnit;
    pub use crate::context::{DatePickerConfig, DatePickerContext};
    pub use crate::descriptor::{ViewDescriptor, ViewRole};
    pub use crate::error::{DatePickerError, Result};
    pub use crate::events::{Key, KeyPressEvent, KeyboardModifiers, WheelEvent};
    pub use crate::format::DateFormat;
    pub use crate::picker::DatePicker;
    pub use crate::render::{ElementKind, Node, RenderTarget};
    pub use crate::widgets::{
        Component, DatePickerButton, DatePickerCalendarItem, DatePickerInput, DatePickerNavButton,
        DatePickerPanel, DatePickerView, NavDirection,
    };
}
