//! Presentation helpers derived from a computed [`WorkflowState`].
//!
//! Nothing here adds new rules; first matching condition wins and everything
//! else is display text.

use serde::Serialize;

use crate::event::{MaintenanceEvent, MaintenanceEventStatus};
use crate::workflow::state::WorkflowState;

/// The single suggested next step for an event, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    Approve,
    Start,
    Complete,
    PlanInspections,
}

impl NextAction {
    pub fn label(self) -> &'static str {
        match self {
            NextAction::Approve => "Approve event",
            NextAction::Start => "Start event",
            NextAction::Complete => "Complete event",
            NextAction::PlanInspections => "Plan inspections",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NextAction::Approve => "An admin must approve this event before work can start",
            NextAction::Start => "The event is approved and ready to move into progress",
            NextAction::Complete => "Work is underway; mark the event completed when done",
            NextAction::PlanInspections => {
                "Use the planning workflow while the event awaits approval"
            }
        }
    }
}

/// Pick the most relevant next step. Priority: approval, then start, then
/// complete, then the plan-mode fallback.
pub fn next_recommended_action(state: &WorkflowState) -> Option<NextAction> {
    if state.can_approve {
        Some(NextAction::Approve)
    } else if state.can_start {
        Some(NextAction::Start)
    } else if state.can_complete {
        Some(NextAction::Complete)
    } else if state.is_in_plan_mode {
        Some(NextAction::PlanInspections)
    } else {
        None
    }
}

/// One-sentence description per status.
pub fn status_description(status: MaintenanceEventStatus) -> &'static str {
    match status {
        MaintenanceEventStatus::Planned => {
            "Scheduled and waiting to begin; inspections can be planned ahead of time"
        }
        MaintenanceEventStatus::InProgress => {
            "Work is underway; inspections and daily reports are open"
        }
        MaintenanceEventStatus::Completed => {
            "Work has finished; records stay open to admins for corrections"
        }
        MaintenanceEventStatus::Cancelled => {
            "Called off; the event can be reactivated by replanning it"
        }
        MaintenanceEventStatus::Postponed => "On hold; replan the event to get it moving again",
    }
}

/// Color family a UI maps badges onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Display metadata for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

/// Badge config per status. Total over the enum, so no caller ever needs a
/// fallback branch.
pub fn status_badge(status: MaintenanceEventStatus) -> StatusBadge {
    match status {
        MaintenanceEventStatus::Planned => StatusBadge {
            label: "Planned",
            tone: BadgeTone::Info,
        },
        MaintenanceEventStatus::InProgress => StatusBadge {
            label: "In Progress",
            tone: BadgeTone::Warning,
        },
        MaintenanceEventStatus::Completed => StatusBadge {
            label: "Completed",
            tone: BadgeTone::Success,
        },
        MaintenanceEventStatus::Cancelled => StatusBadge {
            label: "Cancelled",
            tone: BadgeTone::Danger,
        },
        MaintenanceEventStatus::Postponed => StatusBadge {
            label: "Postponed",
            tone: BadgeTone::Neutral,
        },
    }
}

/// Ordered advisory lines for the event detail view. Deterministic order,
/// possibly empty.
pub fn workflow_recommendations(event: &MaintenanceEvent, state: &WorkflowState) -> Vec<String> {
    let mut notes = Vec::new();

    if state.can_approve {
        notes.push("Approve this event so inspections can start".to_string());
    } else if state.requires_approval {
        notes.push("Waiting for admin approval before inspections can begin".to_string());
    }

    if state.is_in_plan_mode {
        notes.push(
            "Only inspection planning is available while the event awaits approval".to_string(),
        );
    }

    if state.can_start {
        notes.push("Event is approved; start it to open inspection work".to_string());
    }

    if state.is_active {
        notes.push("Record daily reports while work is underway".to_string());
    }

    if state.can_generate_final_reports && !state.is_active {
        notes.push("Final reports can be generated for this event".to_string());
    }

    if state.can_reactivate {
        notes.push("Reactivate the cancelled event by moving it back to planned".to_string());
    }

    if event.status == MaintenanceEventStatus::Postponed {
        notes.push("Replan the postponed event to resume work".to_string());
    }

    notes
}
