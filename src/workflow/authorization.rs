//! Per-action authorization for inspection work against a maintenance event.
//!
//! Decisions are role-independent and evaluated per call with no ordering
//! between actions. Every denial carries a specific reason for the UI;
//! approvals carry none.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::event::{normalize, MaintenanceEvent, MaintenanceEventStatus, ParseEnumError};

/// Actions a user can attempt on the inspections of a maintenance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionAction {
    Create,
    Start,
    Complete,
    Edit,
    Delete,
    Plan,
    AssignTeam,
    DailyReport,
    FinalReport,
}

impl InspectionAction {
    /// Every action, in evaluation/display order.
    pub const ALL: [InspectionAction; 9] = [
        InspectionAction::Create,
        InspectionAction::Start,
        InspectionAction::Complete,
        InspectionAction::Edit,
        InspectionAction::Delete,
        InspectionAction::Plan,
        InspectionAction::AssignTeam,
        InspectionAction::DailyReport,
        InspectionAction::FinalReport,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InspectionAction::Create => "create",
            InspectionAction::Start => "start",
            InspectionAction::Complete => "complete",
            InspectionAction::Edit => "edit",
            InspectionAction::Delete => "delete",
            InspectionAction::Plan => "plan",
            InspectionAction::AssignTeam => "assign_team",
            InspectionAction::DailyReport => "daily_report",
            InspectionAction::FinalReport => "final_report",
        }
    }
}

impl fmt::Display for InspectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InspectionAction {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        InspectionAction::ALL
            .into_iter()
            .find(|action| action.name() == normalized)
            .ok_or_else(|| ParseEnumError::new("action", s))
    }
}

/// Outcome of an authorization check. `reason` is set exactly when the
/// action is denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDecision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ActionDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Decide whether `action` is permitted against `event` right now.
pub fn authorize(event: &MaintenanceEvent, action: InspectionAction) -> ActionDecision {
    match action {
        InspectionAction::Plan => {
            if event.is_terminal() {
                ActionDecision::deny("This event is closed to further inspection work")
            } else {
                ActionDecision::allow()
            }
        }
        InspectionAction::Create => {
            if event.in_plan_mode() {
                if event.uses_planned_inspection_workflow() {
                    ActionDecision::deny(
                        "Event is in planning phase. Use Plan Inspection to schedule \
                         inspections for this complex event.",
                    )
                } else {
                    ActionDecision::deny(
                        "Event is awaiting admin approval. Inspections can be created \
                         once the event is approved.",
                    )
                }
            } else if event.is_terminal() {
                ActionDecision::deny("This event is closed to further inspection work")
            } else {
                ActionDecision::allow()
            }
        }
        InspectionAction::Start => {
            if event.in_plan_mode() {
                ActionDecision::deny(
                    "Event is in planning phase. Inspections cannot be started until \
                     the event is approved.",
                )
            } else if event.is_active() {
                ActionDecision::allow()
            } else {
                ActionDecision::deny(
                    "Inspections can only be started while the event is in progress",
                )
            }
        }
        InspectionAction::Complete => {
            if event.in_plan_mode() {
                ActionDecision::deny(
                    "Event is in planning phase. Inspections cannot be completed until \
                     the event is approved.",
                )
            } else if event.is_active() {
                ActionDecision::allow()
            } else {
                ActionDecision::deny(
                    "Inspections can only be completed while the event is in progress",
                )
            }
        }
        InspectionAction::AssignTeam | InspectionAction::Edit => {
            if event.is_terminal() {
                ActionDecision::deny("This event is closed to further inspection work")
            } else {
                ActionDecision::allow()
            }
        }
        InspectionAction::DailyReport => {
            if event.is_active() {
                ActionDecision::allow()
            } else {
                ActionDecision::deny(
                    "Daily reports are only available while the event is in progress",
                )
            }
        }
        InspectionAction::FinalReport => {
            if event.is_active() || event.status == MaintenanceEventStatus::Completed {
                ActionDecision::allow()
            } else {
                ActionDecision::deny(
                    "Final reports are only available for in-progress or completed events",
                )
            }
        }
        InspectionAction::Delete => {
            if event.in_plan_mode() || !event.is_terminal() {
                ActionDecision::allow()
            } else {
                ActionDecision::deny("This event is closed to further inspection work")
            }
        }
    }
}
