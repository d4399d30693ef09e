//! Display surfaces: read-only views over the persisted collection.
//!
//! A surface never writes. It loads its own snapshot through
//! [`crate::store::load_countdowns`], picks the countdown to feature, and
//! renders one of three size families. It reloads once per day so the day
//! count rolls, and whenever its selection changes.

pub mod picker;
pub mod render;
pub mod timeline;

pub use picker::{CountdownEntity, CountdownEntityQuery};
pub use render::render;
pub use timeline::{selected_countdown, CountdownEntry, CountdownProvider, Timeline};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Size variant of a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetFamily {
    /// One countdown, count only.
    #[default]
    Small,
    /// One countdown with its date.
    Medium,
    /// The nearest few countdowns as a list.
    Large,
}

impl fmt::Display for WidgetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        f.write_str(name)
    }
}

impl FromStr for WidgetFamily {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(ValidationError::InvalidValue {
                field: "family".into(),
                message: format!("'{other}' is not one of small, medium, large"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_parses_case_insensitively() {
        assert_eq!("Large".parse::<WidgetFamily>().unwrap(), WidgetFamily::Large);
        assert_eq!(" medium ".parse::<WidgetFamily>().unwrap(), WidgetFamily::Medium);
        assert!("huge".parse::<WidgetFamily>().is_err());
    }

    #[test]
    fn family_display_matches_serde() {
        for family in [WidgetFamily::Small, WidgetFamily::Medium, WidgetFamily::Large] {
            let json = serde_json::to_string(&family).unwrap();
            assert_eq!(json, format!("\"{family}\""));
        }
    }
}
