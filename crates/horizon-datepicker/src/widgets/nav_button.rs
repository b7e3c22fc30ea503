//! Previous/next period buttons.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::{Component, attrs};
use crate::context::DatePickerContext;
use crate::error::{DatePickerError, Result};
use crate::render::{AttrValue, Attributes, ElementKind, RenderTarget};

/// Which way a navigation button pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NavDirection {
    /// Towards the past.
    Backward,
    /// Towards the future.
    Forward,
}

impl NavDirection {
    /// The direction's identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backward => "backward",
            Self::Forward => "forward",
        }
    }
}

impl fmt::Display for NavDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavDirection {
    type Err = DatePickerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "backward" => Ok(Self::Backward),
            "forward" => Ok(Self::Forward),
            other => Err(DatePickerError::UnknownDirection(other.to_string())),
        }
    }
}

/// A button paging the cursor by the current view's period.
#[derive(Debug, Clone)]
pub struct DatePickerNavButton {
    context: Arc<DatePickerContext>,
    direction: NavDirection,
}

impl DatePickerNavButton {
    /// Create a button paging in `direction`.
    pub fn new(context: Arc<DatePickerContext>, direction: NavDirection) -> Self {
        Self { context, direction }
    }

    /// Create a button from a direction string.
    pub fn from_direction_str(context: Arc<DatePickerContext>, direction: &str) -> Result<Self> {
        Ok(Self::new(context, direction.parse()?))
    }

    /// The paging direction.
    pub fn direction(&self) -> NavDirection {
        self.direction
    }

    /// Page the cursor.
    pub fn handle_click(&self) {
        match self.direction {
            NavDirection::Backward => self.context.prev_view_period(),
            NavDirection::Forward => self.context.next_view_period(),
        }
    }
}

impl Component for DatePickerNavButton {
    fn attributes(&self) -> Attributes {
        let label = match self.direction {
            NavDirection::Backward => "Previous",
            NavDirection::Forward => "Next",
        };
        attrs([
            ("type", AttrValue::from("button")),
            ("aria-label", AttrValue::from(label)),
        ])
    }

    fn default_target(&self) -> RenderTarget {
        RenderTarget::Element(ElementKind::Button)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::context::DatePickerConfig;
    use crate::descriptor::{ViewDescriptor, ViewRole};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("backward".parse::<NavDirection>(), Ok(NavDirection::Backward));
        assert_eq!(
            "up".parse::<NavDirection>(),
            Err(DatePickerError::UnknownDirection("up".to_string()))
        );
    }

    #[test]
    fn test_click_pages_by_view_role() {
        let ctx = DatePickerContext::shared(DatePickerConfig::new().with_date(at(2021, 1, 31)));
        let forward = DatePickerNavButton::from_direction_str(ctx.clone(), "forward").unwrap();
        let backward = DatePickerNavButton::new(ctx.clone(), NavDirection::Backward);

        forward.handle_click();
        assert_eq!(ctx.view_date(), at(2021, 2, 28));

        ctx.add_view(ViewDescriptor::new(0).with_role(ViewRole::CalendarYear))
            .unwrap();
        backward.handle_click();
        assert_eq!(ctx.view_date(), at(2020, 2, 28));
        assert_eq!(backward.direction(), NavDirection::Backward);
    }
}
