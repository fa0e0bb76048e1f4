//! Decision, status and per-control outcomes recorded by the validation pipeline.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Governance outcome for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Allow,
    Block,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "ALLOW",
            Decision::Block => "BLOCK",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run status. `OkWithWarnings` is only produced alongside an ALLOW decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "OK with warnings")]
    OkWithWarnings,
    #[serde(rename = "ERROR")]
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::OkWithWarnings => "OK with warnings",
            Status::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named governance checks, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    NonEmptySelection,
    AllFieldsExist,
    ValidSourceName,
    NoDuplicates,
    SingleSource,
}

impl Control {
    /// Every control in the order the pipeline evaluates them.
    pub const ALL: [Control; 5] = [
        Control::NonEmptySelection,
        Control::AllFieldsExist,
        Control::ValidSourceName,
        Control::NoDuplicates,
        Control::SingleSource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Control::NonEmptySelection => "non_empty_selection",
            Control::AllFieldsExist => "all_fields_exist",
            Control::ValidSourceName => "valid_source_name",
            Control::NoDuplicates => "no_duplicates",
            Control::SingleSource => "single_source",
        }
    }

    /// Whether a failure of this control blocks the selection.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, Control::NoDuplicates)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ControlOutcome {
    Pass,
    Fail,
}

impl ControlOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlOutcome::Pass => "PASS",
            ControlOutcome::Fail => "FAIL",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ControlOutcome::Pass)
    }
}

impl fmt::Display for ControlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcomes of the controls that were evaluated, in evaluation order.
///
/// Controls after the first blocking failure are never evaluated and are
/// absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Controls {
    outcomes: IndexMap<Control, ControlOutcome>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, control: Control, outcome: ControlOutcome) {
        self.outcomes.insert(control, outcome);
    }

    /// Record the outcome of a check result and hand the result back.
    pub fn gate<T, E>(&mut self, control: Control, result: Result<T, E>) -> Result<T, E> {
        let outcome = if result.is_ok() {
            ControlOutcome::Pass
        } else {
            ControlOutcome::Fail
        };
        self.record(control, outcome);
        result
    }

    pub fn get(&self, control: Control) -> Option<ControlOutcome> {
        self.outcomes.get(&control).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Control, ControlOutcome)> + '_ {
        self.outcomes
            .iter()
            .map(|(control, outcome)| (*control, *outcome))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// True when no blocking control failed.
    pub fn blocking_passed(&self) -> bool {
        self.iter()
            .all(|(control, outcome)| outcome.is_pass() || !control.is_blocking())
    }
}
