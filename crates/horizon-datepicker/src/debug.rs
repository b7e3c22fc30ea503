//! Diagnostic formatting of the view registry.
//!
//! ```
//! use horizon_datepicker::debug::{RegistryDebug, TreeStyle};
//! use horizon_datepicker::{DatePickerConfig, DatePickerContext, ViewDescriptor};
//!
//! let context = DatePickerContext::new(DatePickerConfig::new());
//! context.add_view(ViewDescriptor::new(0)).unwrap();
//!
//! let tree = RegistryDebug::new(&context).with_style(TreeStyle::Ascii).to_string();
//! assert!(tree.contains("#0 (none) *"));
//! ```

use std::fmt;

use crate::context::DatePickerContext;

/// Branch characters used for the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

impl TreeStyle {
    fn connectors(self) -> (&'static str, &'static str) {
        match self {
            Self::Ascii => ("+--", "`--"),
            Self::Unicode => ("\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
        }
    }
}

/// Formats a picker's views as a tree, marking the current view with `*`.
#[derive(Debug, Clone, Copy)]
pub struct RegistryDebug<'a> {
    context: &'a DatePickerContext,
    style: TreeStyle,
}

impl<'a> RegistryDebug<'a> {
    /// Create a formatter for `context` with the default style.
    pub fn new(context: &'a DatePickerContext) -> Self {
        Self {
            context,
            style: TreeStyle::default(),
        }
    }

    /// Use `style` for the branches.
    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }
}

impl fmt::Display for RegistryDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let views = self.context.views();
        let current = self.context.current_view().map(|v| v.order);
        let panel = if self.context.show_panel() { "shown" } else { "hidden" };
        writeln!(f, "View Registry ({} views, panel {panel}):", views.len())?;

        if views.is_empty() {
            return writeln!(f, "  (empty)");
        }

        let (corner, last_corner) = self.style.connectors();
        for (i, view) in views.iter().enumerate() {
            let connector = if i + 1 == views.len() { last_corner } else { corner };
            let role = view.role.map_or("(none)", |r| r.as_str());
            write!(f, "{connector} #{} {role}", view.order)?;
            if !view.auto_next {
                f.write_str(" [no auto-next]")?;
            }
            if current == Some(view.order) {
                f.write_str(" *")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
