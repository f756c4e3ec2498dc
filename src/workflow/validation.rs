//! Advisory pre-check for a proposed status transition.
//!
//! The backend re-validates server-side; this check exists so callers can
//! reject an intent before issuing the request. Checks short-circuit in a
//! fixed order and the first failure wins.

use thiserror::Error;

use crate::event::{MaintenanceEvent, MaintenanceEventStatus, ViewerContext};
use crate::workflow::state::WorkflowState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Cannot transition from {from} to {to}")]
    IllegalTransition {
        from: MaintenanceEventStatus,
        to: MaintenanceEventStatus,
    },

    #[error("Event requires admin approval before it can be started")]
    ApprovalRequired,

    #[error("You do not have permission to {action} this event")]
    PermissionDenied { action: &'static str },
}

/// Validate moving `event` to `target` on behalf of `viewer`.
///
/// Order of checks: transition table, then approval, then the capability
/// flags for the target status. Approval is checked before `can_start` so an
/// unapproved event reports the approval error, not a permission error.
pub fn validate_transition(
    event: &MaintenanceEvent,
    target: MaintenanceEventStatus,
    viewer: &ViewerContext,
) -> Result<(), TransitionError> {
    let result = check_transition(event, target, viewer);

    match &result {
        Ok(()) => {
            tracing::debug!(event_id = event.id, from = %event.status, to = %target,
                "transition validated");
        }
        Err(err) => {
            tracing::debug!(event_id = event.id, from = %event.status, to = %target,
                error = %err, "transition rejected");
        }
    }

    result
}

fn check_transition(
    event: &MaintenanceEvent,
    target: MaintenanceEventStatus,
    viewer: &ViewerContext,
) -> Result<(), TransitionError> {
    if !event.status.can_transition_to(target) {
        return Err(TransitionError::IllegalTransition {
            from: event.status,
            to: target,
        });
    }

    let state = WorkflowState::evaluate(event, viewer);

    match target {
        MaintenanceEventStatus::InProgress => {
            if event.approved_by.is_none() {
                return Err(TransitionError::ApprovalRequired);
            }
            if !state.can_start {
                return Err(TransitionError::PermissionDenied { action: "start" });
            }
        }
        MaintenanceEventStatus::Completed => {
            if !state.can_complete {
                return Err(TransitionError::PermissionDenied { action: "complete" });
            }
        }
        MaintenanceEventStatus::Cancelled => {
            if !state.can_cancel {
                return Err(TransitionError::PermissionDenied { action: "cancel" });
            }
        }
        MaintenanceEventStatus::Planned | MaintenanceEventStatus::Postponed => {}
    }

    Ok(())
}
