use crate::models::shift::{ShiftDefinition, ShiftSpec};

/// Range applied to any shift name missing from the table.
pub const DEFAULT_START_HOUR: u8 = 8;
pub const DEFAULT_END_HOUR: u8 = 16;

/// Maps shift names to their hour ranges.
///
/// Lookup never fails: unknown names get `DEFAULT_START_HOUR..DEFAULT_END_HOUR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTable {
    shifts: Vec<ShiftDefinition>,
}

impl Default for ShiftTable {
    fn default() -> Self {
        Self::from_specs(&default_shift_specs())
    }
}

impl ShiftTable {
    pub fn new(shifts: Vec<ShiftDefinition>) -> Self {
        Self { shifts }
    }

    pub fn from_specs(specs: &[ShiftSpec]) -> Self {
        Self::new(specs.iter().map(ShiftDefinition::from).collect())
    }

    pub fn resolve(&self, name: &str) -> ShiftDefinition {
        self.lookup(name).cloned().unwrap_or_else(|| {
            ShiftDefinition::new(name, DEFAULT_START_HOUR, DEFAULT_END_HOUR)
        })
    }

    pub fn lookup(&self, name: &str) -> Option<&ShiftDefinition> {
        self.shifts.iter().find(|s| s.name == name)
    }

    /// Position in the table, used as the secondary layout order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.shifts.iter().position(|s| s.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shifts.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShiftDefinition> {
        self.shifts.iter()
    }
}

/// Built-in shifts: a morning shift and an overnight on-call shift.
pub fn default_shift_specs() -> Vec<ShiftSpec> {
    vec![ShiftSpec::new("Matin", 8, 14), ShiftSpec::new("Garde", 14, 8)]
}
