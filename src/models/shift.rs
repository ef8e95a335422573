use serde::{Deserialize, Serialize};

/// A named shift with its hour range.
///
/// `wraps` is derived from the hours and is true when the shift crosses
/// midnight (`end_hour < start_hour`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftDefinition {
    pub name: String,
    pub start_hour: u8,
    pub end_hour: u8,
    pub wraps: bool,
}

impl ShiftDefinition {
    pub fn new(name: impl Into<String>, start_hour: u8, end_hour: u8) -> Self {
        Self {
            name: name.into(),
            start_hour,
            end_hour,
            wraps: end_hour < start_hour,
        }
    }

    /// Total duration in hours, counting the part after midnight.
    pub fn total_hours(&self) -> u8 {
        if self.wraps {
            24u8.saturating_sub(self.start_hour) + self.end_hour
        } else {
            self.end_hour.saturating_sub(self.start_hour)
        }
    }
}

/// Shift entry as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSpec {
    pub name: String,
    pub start: u8,
    pub end: u8,
}

impl ShiftSpec {
    pub fn new(name: &str, start: u8, end: u8) -> Self {
        Self {
            name: name.to_string(),
            start,
            end,
        }
    }
}

impl From<&ShiftSpec> for ShiftDefinition {
    fn from(spec: &ShiftSpec) -> Self {
        ShiftDefinition::new(spec.name.clone(), spec.start, spec.end)
    }
}
