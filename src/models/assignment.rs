use crate::errors::AppError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Composite `(day, shift)` key, serialized as `"{day}_{shift}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssignmentKey {
    pub day: String,
    pub shift: String,
}

impl AssignmentKey {
    pub fn new(day: impl Into<String>, shift: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            shift: shift.into(),
        }
    }
}

impl fmt::Display for AssignmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.day, self.shift)
    }
}

/// Splits on the first underscore: the shift name may itself contain `_`.
impl FromStr for AssignmentKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('_') {
            Some((day, shift)) => Ok(AssignmentKey::new(day, shift)),
            None => Err(AppError::InvalidAssignmentKey(s.to_string())),
        }
    }
}

/// Assignment map: one entry per `(day, shift)`, each with the ordered list
/// of attendee display names. Insertion order is kept; inserting an
/// existing key replaces its names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    entries: Vec<(AssignmentKey, Vec<String>)>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from serialized `"Day_Shift"` keys.
    /// Keys without an underscore carry no day and are dropped.
    pub fn from_raw(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut out = Assignments::new();
        for (k, names) in raw {
            if let Ok(key) = k.parse::<AssignmentKey>() {
                out.insert(key, names);
            }
        }
        out
    }

    pub fn insert(&mut self, key: AssignmentKey, names: Vec<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = names,
            None => self.entries.push((key, names)),
        }
    }

    /// Convenience for tests and callers building maps by hand.
    pub fn with(mut self, day: &str, shift: &str, names: &[&str]) -> Self {
        self.insert(
            AssignmentKey::new(day, shift),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    pub fn get(&self, day: &str, shift: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k.day == day && k.shift == shift)
            .map(|(_, names)| names.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssignmentKey, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&AssignmentKey, &[String]) -> bool,
    {
        self.entries.retain(|(k, names)| keep(k, names));
    }

    /// Every distinct attendee name, sorted.
    pub fn attendees(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|(_, names)| names.iter().map(String::as_str))
            .collect()
    }
}
