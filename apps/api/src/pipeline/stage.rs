#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// A candidate's position in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

/// The linear pipeline, in progression order. `Rejected` is out-of-band.
pub const PIPELINE: [Stage; 5] = [
    Stage::Applied,
    Stage::Screening,
    Stage::Interview,
    Stage::Offer,
    Stage::Hired,
];

impl Stage {
    /// Position in the linear pipeline. `None` for `Rejected`.
    pub fn index(&self) -> Option<usize> {
        PIPELINE.iter().position(|s| s == self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::Screening => "Screening",
            Stage::Interview => "Interview",
            Stage::Offer => "Offer",
            Stage::Hired => "Hired",
            Stage::Rejected => "Rejected",
        }
    }

    /// The immediately following pipeline stage, if any.
    pub fn next(&self) -> Option<Stage> {
        PIPELINE.get(self.index()? + 1).copied()
    }
}

/// Result of checking a requested transition against the progression rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCheck {
    /// The move is permitted (next stage, any backward move, or rejection).
    Allowed,
    /// The target is more than one stage ahead of the current one.
    SkipsAhead,
    /// The candidate is already rejected; nothing leaves that state.
    FromTerminal,
}

/// Applies the sequential-progression rule.
///
/// Only forward jumps are refused. Backward moves pass — a known gap kept
/// from the source behavior, not an invariant.
pub fn check_transition(current: Stage, target: Stage) -> TransitionCheck {
    if current == Stage::Rejected {
        return TransitionCheck::FromTerminal;
    }
    if target == Stage::Rejected {
        return TransitionCheck::Allowed;
    }

    match (current.index(), target.index()) {
        (Some(from), Some(to)) if to > from + 1 => TransitionCheck::SkipsAhead,
        _ => TransitionCheck::Allowed,
    }
}
