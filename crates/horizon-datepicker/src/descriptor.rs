//! View descriptors: what a mounted panel tells the registry about itself.

use std::fmt;
use std::str::FromStr;

use crate::error::{DatePickerError, Result};

/// What kind of content a view shows.
///
/// The role decides how pagination moves the cursor date and which view
/// an input jumps to when it opens the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ViewRole {
    /// A month of days; paginates by month.
    CalendarMonth,
    /// A year of months; paginates by year.
    CalendarYear,
    /// Hours and minutes of the displayed day; does not paginate.
    Time,
}

impl ViewRole {
    /// The role's identifier, e.g. `calendar-month`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CalendarMonth => "calendar-month",
            Self::CalendarYear => "calendar-year",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for ViewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewRole {
    type Err = DatePickerError;

    fn from_str(s: &str) -> Result<Self> {
        [Self::CalendarMonth, Self::CalendarYear, Self::Time]
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DatePickerError::UnknownViewRole(s.to_string()))
    }
}

/// One registered view.
///
/// Views are identified by `order`, which must be unique among the views
/// mounted on a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ViewDescriptor {
    /// Position in the view cycle.
    pub order: i32,
    /// Whether committing a value in this view moves on to the next view.
    pub auto_next: bool,
    /// What the view shows, if it declares a role.
    pub role: Option<ViewRole>,
}

impl ViewDescriptor {
    /// A role-less descriptor that advances after a commit.
    pub const fn new(order: i32) -> Self {
        Self {
            order,
            auto_next: true,
            role: None,
        }
    }

    /// Set whether a commit advances to the next view.
    pub const fn with_auto_next(mut self, auto_next: bool) -> Self {
        self.auto_next = auto_next;
        self
    }

    /// Set the view role.
    pub const fn with_role(mut self, role: ViewRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the view role from its identifier.
    pub fn with_role_str(self, role: &str) -> Result<Self> {
        Ok(self.with_role(role.parse()?))
    }

    /// Whether the month day grid is the relevant keyboard surface.
    ///
    /// True for role-less views and `CalendarMonth`.
    pub fn is_day_grid(&self) -> bool {
        matches!(self.role, None | Some(ViewRole::CalendarMonth))
    }
}
