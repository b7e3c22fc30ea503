//! The digit buffer behind a text input.

/// Maximum number of digits a buffer holds.
pub const MAX_DIGITS: usize = 12;

/// Editing state of one input instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// Showing the committed value; no keystrokes since the last commit.
    #[default]
    Idle,
    /// The user has typed since the last commit.
    Editing,
}

/// Raw digits plus the flags that drive the input state machine.
///
/// `should_start_over` is a one-shot flag: the next accepted keystroke
/// replaces the buffer instead of appending to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    digits: String,
    editing: bool,
    should_start_over: bool,
}

impl InputBuffer {
    /// A buffer showing `digits`, waiting to be replaced by the next keystroke.
    pub fn new(digits: impl Into<String>) -> Self {
        let mut buffer = Self {
            digits: String::new(),
            editing: false,
            should_start_over: true,
        };
        buffer.replace(digits);
        buffer
    }

    /// The typed digits.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Number of digits held.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether no digits are held.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Current state.
    pub fn state(&self) -> InputState {
        if self.editing {
            InputState::Editing
        } else {
            InputState::Idle
        }
    }

    /// Whether an editing session is in progress.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the next keystroke replaces the buffer.
    pub fn should_start_over(&self) -> bool {
        self.should_start_over
    }

    /// Prepare for a keystroke and enter the editing state.
    ///
    /// The buffer is cleared first when a start-over is pending, or when a
    /// backspace arrives outside an editing session.
    pub fn begin_keystroke(&mut self, is_backspace: bool) {
        if self.should_start_over || (!self.editing && is_backspace) {
            self.digits.clear();
        }
        self.should_start_over = false;
        self.editing = true;
    }

    /// Leave the editing state and arm a start-over.
    pub fn finish(&mut self) {
        self.editing = false;
        self.should_start_over = true;
    }

    /// Leave the editing state without arming a start-over.
    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Arm a start-over without touching the editing state.
    pub fn start_over(&mut self) {
        self.should_start_over = true;
    }

    /// Append one digit (0-9).
    ///
    /// With `pad_hour`, a digit above 2 typed into an empty buffer is
    /// preceded by `0`, since no hour starts with it. Returns `false` if
    /// the digit was not accepted because the buffer is full.
    pub fn push_digit(&mut self, digit: u8, pad_hour: bool) -> bool {
        if digit > 9 || self.digits.len() >= MAX_DIGITS {
            return false;
        }
        if pad_hour && self.digits.is_empty() && digit > 2 {
            self.digits.push('0');
        }
        self.digits.push(char::from(b'0' + digit));
        true
    }

    /// Remove the last digit.
    pub fn pop(&mut self) -> Option<char> {
        self.digits.pop()
    }

    /// Replace the contents, keeping only ASCII digits up to the maximum length.
    pub fn replace(&mut self, digits: impl Into<String>) {
        let digits: String = digits.into();
        self.digits = digits
            .chars()
            .filter(char::is_ascii_digit)
            .take(MAX_DIGITS)
            .collect();
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_starts_over() {
        let mut buffer = InputBuffer::new("202101");
        assert_eq!(buffer.state(), InputState::Idle);
        assert!(buffer.should_start_over());

        buffer.begin_keystroke(false);
        assert!(buffer.is_empty());
        assert_eq!(buffer.state(), InputState::Editing);
        assert!(!buffer.should_start_over());
    }

    #[test]
    fn test_backspace_outside_session_clears() {
        let mut buffer = InputBuffer::default();
        buffer.begin_keystroke(false);
        buffer.push_digit(2, false);
        buffer.push_digit(0, false);
        buffer.stop_editing();
        assert!(!buffer.should_start_over());

        buffer.begin_keystroke(true);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_backspace_inside_session_keeps_digits() {
        let mut buffer = InputBuffer::default();
        buffer.begin_keystroke(false);
        buffer.push_digit(2, false);
        buffer.push_digit(0, false);

        buffer.begin_keystroke(true);
        buffer.pop();
        assert_eq!(buffer.digits(), "2");
    }

    #[test]
    fn test_length_cap() {
        let mut buffer = InputBuffer::default();
        for _ in 0..MAX_DIGITS {
            assert!(buffer.push_digit(1, false));
        }
        assert!(!buffer.push_digit(1, false));
        assert_eq!(buffer.len(), MAX_DIGITS);
    }

    #[test]
    fn test_hour_padding() {
        let mut buffer = InputBuffer::default();
        buffer.push_digit(3, true);
        assert_eq!(buffer.digits(), "03");
        buffer.push_digit(3, true);
        assert_eq!(buffer.digits(), "033");

        let mut buffer = InputBuffer::default();
        buffer.push_digit(2, true);
        assert_eq!(buffer.digits(), "2");

        let mut buffer = InputBuffer::default();
        buffer.push_digit(7, false);
        assert_eq!(buffer.digits(), "7");
    }

    #[test]
    fn test_replace_filters_non_digits() {
        let mut buffer = InputBuffer::default();
        buffer.replace("2021-01-07 12:00:59");
        assert_eq!(buffer.digits(), "202101071200");
    }
}
