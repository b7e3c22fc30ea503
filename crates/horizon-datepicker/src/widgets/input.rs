//! Text input with digit-mask entry.
//!
//! The input keeps only the digits the user typed. On every keystroke the
//! buffer is reparsed against the input's [`DateFormat`]; a complete match
//! is committed immediately, and Enter or blur commit whatever partial value
//! the buffer already describes. The rendered value is the format's
//! placeholder with the typed digits laid over it, so `202101` shows as
//! `2021-01-XX XX:XX`.
//!
//! Commits made elsewhere (a clicked calendar item, another input) rewrite
//! the buffer unless the user is in the middle of typing.

use std::sync::Arc;

use horizon_datepicker_core::logging::{span_names, targets};
use horizon_datepicker_core::{ConnectionId, PerfSpan, TaskId};
use parking_lot::Mutex;

use super::{Component, attrs};
use crate::buffer::{InputBuffer, InputState};
use crate::context::DatePickerContext;
use crate::descriptor::ViewRole;
use crate::error::Result;
use crate::events::{Key, KeyPressEvent};
use crate::format::DateFormat;
use crate::parser::InputParser;
use crate::render::{AttrValue, Attributes, ElementKind, RenderTarget};

/// A text input bound to the picker.
pub struct DatePickerInput {
    context: Arc<DatePickerContext>,
    parser: InputParser,
    buffer: Arc<Mutex<InputBuffer>>,
    connection: ConnectionId,
    pending_view: Mutex<Option<TaskId>>,
}

impl DatePickerInput {
    /// Create an input reading `format`.
    pub fn new(context: Arc<DatePickerContext>, format: DateFormat) -> Self {
        let digits = context
            .date()
            .map(|date| format.to_input(date))
            .unwrap_or_default();
        let buffer = Arc::new(Mutex::new(InputBuffer::new(digits)));

        let slot_buffer = buffer.clone();
        let connection = context.date_changed.connect(move |value| {
            let mut buffer = slot_buffer.lock();
            if !buffer.is_editing() {
                buffer.replace(format.to_input(*value));
                buffer.start_over();
            }
        });

        Self {
            context,
            parser: InputParser::new(format),
            buffer,
            connection,
            pending_view: Mutex::new(None),
        }
    }

    /// Create an input from a format string such as `"YYYY-MM-DD"`.
    pub fn from_format_str(context: Arc<DatePickerContext>, format: &str) -> Result<Self> {
        Ok(Self::new(context, format.parse()?))
    }

    /// The input's format.
    pub fn format(&self) -> DateFormat {
        self.parser.format()
    }

    /// The typed digits.
    pub fn digits(&self) -> String {
        self.buffer.lock().digits().to_string()
    }

    /// The editing state.
    pub fn state(&self) -> InputState {
        self.buffer.lock().state()
    }

    /// The rendered value: the placeholder overlaid with the typed digits.
    pub fn display(&self) -> String {
        self.format().overlay(self.buffer.lock().digits())
    }

    /// Whether the buffer holds digits that match no mask, not even partially.
    pub fn is_invalid(&self) -> bool {
        let digits = self.digits();
        !digits.is_empty()
            && self
                .parser
                .best(&digits, self.context.base_date(), true)
                .is_none()
    }

    /// Handle a key press.
    ///
    /// Returns `true` and accepts the event if the input consumed it. Keys
    /// with modifiers, Tab, arrows and Space are left to the host and the
    /// panel.
    pub fn handle_key_press(&self, event: &mut KeyPressEvent) -> bool {
        if event.modifiers.any() {
            return false;
        }
        let _span = PerfSpan::new(span_names::KEYSTROKE);

        match event.key {
            Key::Enter => self.commit_on_enter(),
            Key::Escape => {
                self.buffer.lock().finish();
                self.context.update_show_panel(false);
            }
            Key::Backspace => {
                let mut buffer = self.buffer.lock();
                buffer.begin_keystroke(true);
                buffer.pop();
            }
            Key::Character(c) if !c.is_ascii_digit() => {}
            key => {
                let Some(digit) = key.digit() else {
                    return false;
                };
                let digits = {
                    let mut buffer = self.buffer.lock();
                    buffer.begin_keystroke(false);
                    buffer.push_digit(digit, self.format() == DateFormat::Time);
                    buffer.digits().to_string()
                };
                self.after_digit(&digits);
            }
        }

        event.base.accept();
        true
    }

    /// Live commit plus the jump to the time view once a date is complete.
    fn after_digit(&self, digits: &str) {
        let base = self.context.base_date();
        tracing::trace!(
            target: targets::INPUT,
            digits,
            status = ?self.parser.status(digits, base),
            mask = self.parser.candidates(digits, base, true).first().map(|c| c.mask.name()),
            "digit typed"
        );

        if let Some(value) = self.parser.complete(digits, base) {
            self.context.update_date(value);
        }

        if self.parser.is_complete_date(digits) {
            if let Some(time_view) = self.context.find_view(ViewRole::Time) {
                self.context.update_view(time_view);
            }
        }
    }

    fn commit_on_enter(&self) {
        let digits = {
            let mut buffer = self.buffer.lock();
            buffer.finish();
            buffer.digits().to_string()
        };

        let Some(value) = self.parser.best(&digits, self.context.base_date(), true) else {
            tracing::debug!(target: targets::INPUT, digits, "nothing to commit on enter");
            return;
        };

        self.context.update_date(value);
        if self.context.current_view().is_some_and(|v| v.auto_next) {
            self.context.next_view();
        } else {
            self.context.update_show_panel(false);
        }
    }

    /// The input lost focus: commit any usable value and show it canonically.
    pub fn handle_blur(&self) {
        self.context.set_trigger_focused(false);

        let digits = {
            let mut buffer = self.buffer.lock();
            buffer.stop_editing();
            buffer.digits().to_string()
        };

        match self.parser.best(&digits, self.context.base_date(), true) {
            Some(value) => self.context.update_date(value),
            None => self.buffer.lock().start_over(),
        }
    }

    /// The input gained focus.
    pub fn handle_focus(&self) {
        self.context.set_trigger_focused(true);
    }

    /// Open the panel, then pick the view matching the format once the host
    /// has processed deferred work.
    ///
    /// A selection still pending from an earlier click is replaced.
    pub fn handle_click(&self) {
        self.context.update_show_panel(true);

        let mut pending = self.pending_view.lock();
        if let Some(previous) = pending.take() {
            if self.context.cancel_deferred(previous) {
                tracing::trace!(target: targets::INPUT, "superseded view selection dropped");
            }
        }

        let format = self.format();
        let id = self.context.defer(move |context| {
            let view = if format == DateFormat::Time {
                context.find_view(ViewRole::Time)
            } else {
                context
                    .find_view(ViewRole::CalendarMonth)
                    .or_else(|| context.find_view(ViewRole::CalendarYear))
            };
            if let Some(view) = view {
                context.update_view(view);
            }
        });
        *pending = Some(id);
    }
}

impl Component for DatePickerInput {
    fn attributes(&self) -> Attributes {
        attrs([
            ("type", AttrValue::from("text")),
            ("inputmode", AttrValue::from("numeric")),
            ("value", AttrValue::from(self.display())),
            ("placeholder", AttrValue::from(self.format().placeholder())),
            ("aria-invalid", AttrValue::from(self.is_invalid())),
            ("style", AttrValue::from("caret-color: transparent")),
        ])
    }

    fn default_target(&self) -> RenderTarget {
        RenderTarget::Element(ElementKind::Input)
    }
}

impl Drop for DatePickerInput {
    fn drop(&mut self) {
        self.context.date_changed.disconnect(self.connection);
    }
}

impl std::fmt::Debug for DatePickerInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePickerInput")
            .field("format", &self.format())
            .field("buffer", &*self.buffer.lock())
            .finish()
    }
}
