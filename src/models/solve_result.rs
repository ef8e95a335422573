use super::assignment::{AssignmentKey, Assignments};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Solver termination status.
///
/// Unknown strings are kept verbatim in `Other` so they can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SolveStatus {
    Optimal,
    Suboptimal,
    TimeLimit,
    Infeasible,
    InfeasibleOrUnbounded,
    Other(String),
}

impl SolveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Suboptimal => "suboptimal",
            SolveStatus::TimeLimit => "time_limit",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::InfeasibleOrUnbounded => "infeasible_or_unbounded",
            SolveStatus::Other(s) => s,
        }
    }

    /// A schedule exists and can be laid out.
    pub fn is_feasible(&self) -> bool {
        matches!(
            self,
            SolveStatus::Optimal | SolveStatus::Suboptimal | SolveStatus::TimeLimit
        )
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            SolveStatus::Infeasible | SolveStatus::InfeasibleOrUnbounded
        )
    }
}

impl From<String> for SolveStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "optimal" => SolveStatus::Optimal,
            "suboptimal" => SolveStatus::Suboptimal,
            "time_limit" => SolveStatus::TimeLimit,
            "infeasible" => SolveStatus::Infeasible,
            "infeasible_or_unbounded" => SolveStatus::InfeasibleOrUnbounded,
            _ => SolveStatus::Other(s),
        }
    }
}

impl From<SolveStatus> for String {
    fn from(s: SolveStatus) -> Self {
        s.as_str().to_string()
    }
}

/// Roster entry used to turn candidate ids into display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hire_cost: Option<f64>,
}

/// Output record of the external optimizer, read from JSON.
///
/// `assigns` is keyed by `"Day_Shift"` and lists candidate ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResult {
    pub status: SolveStatus,
    #[serde(default)]
    pub assigns: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub hired: Vec<String>,
    #[serde(default)]
    pub objective: Option<f64>,
    #[serde(default)]
    pub iis: Vec<String>,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl SolveResult {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Display name for a candidate id; unknown ids display as themselves.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.candidate(id).map(|c| c.name.as_str()).unwrap_or(id)
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Assignment map with ids translated to display names.
    pub fn assignments(&self) -> Assignments {
        let mut out = Assignments::new();
        for (raw_key, ids) in &self.assigns {
            let Ok(key) = raw_key.parse::<AssignmentKey>() else {
                continue;
            };
            let names = ids
                .iter()
                .map(|id| self.display_name(id).to_string())
                .collect();
            out.insert(key, names);
        }
        out
    }

    /// Diagnostics to show for an infeasible model: messages first, IIS otherwise.
    pub fn diagnostics(&self) -> &[String] {
        if self.messages.is_empty() {
            &self.iis
        } else {
            &self.messages
        }
    }
}
