//! Aggregated capability flags for one event as seen by one viewer.
//!
//! `WorkflowState::evaluate` is a pure combinational function over the event
//! snapshot and the viewer roles. It is recomputed on every call and never
//! cached; callers that need it twice call it twice.

use serde::Serialize;

use crate::event::{MaintenanceEvent, MaintenanceEventStatus, ViewerContext};
use crate::workflow::authorization::{authorize, InspectionAction};

/// Notice shown to viewers while an event sits in plan mode.
pub const PLAN_MODE_MESSAGE: &str = "Event is in planning phase. Inspections can be planned \
     but not started until the event is approved.";

/// Restrictions surfaced while an event is in plan mode. Outside plan mode
/// every field is false and the message is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanModeRestrictions {
    pub can_only_plan_inspections: bool,
    pub cannot_start_inspections: bool,
    pub cannot_complete_inspections: bool,
    pub message: String,
}

impl PlanModeRestrictions {
    fn for_plan_mode() -> Self {
        Self {
            can_only_plan_inspections: true,
            cannot_start_inspections: true,
            cannot_complete_inspections: true,
            message: PLAN_MODE_MESSAGE.to_string(),
        }
    }
}

/// The full capability record the UI consumes. Field names serialize in
/// camelCase because the record crosses into UI-facing JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_cancel: bool,
    pub can_start: bool,
    pub can_complete: bool,
    pub can_approve: bool,
    pub can_reopen: bool,
    pub can_revert: bool,
    pub can_reactivate: bool,
    pub can_create_planned_inspections: bool,
    pub can_create_unplanned_inspections: bool,
    pub can_create_direct_inspections: bool,
    pub can_assign_inspection_team: bool,
    pub can_create_daily_reports: bool,
    pub can_generate_final_reports: bool,
    pub can_add_sub_events: bool,
    pub can_plan_inspections: bool,
    pub can_start_inspections: bool,
    pub can_edit_inspections: bool,
    pub requires_approval: bool,
    pub is_in_plan_mode: bool,
    pub is_active: bool,
    pub is_terminal: bool,
    pub plan_mode_restrictions: PlanModeRestrictions,
}

impl WorkflowState {
    /// Compute every capability flag for `event` as seen by `viewer`.
    ///
    /// Deletion of in-progress events is excluded on purpose even though
    /// editing them is allowed. `can_start` and `can_complete` ignore the
    /// viewer roles; starting is gated on approval alone and completing on
    /// the event being active.
    pub fn evaluate(event: &MaintenanceEvent, viewer: &ViewerContext) -> Self {
        use MaintenanceEventStatus::{Cancelled, Completed, InProgress, Planned};

        let admin = viewer.is_admin;
        let elevated = viewer.is_owner || viewer.is_admin;
        let status = event.status;
        let approved = event.approved_and_ready();
        let active = event.is_active();
        let plan_mode = event.in_plan_mode();
        let complex = event.supports_sub_events();

        let state = Self {
            can_edit: (matches!(status, Planned | InProgress | Cancelled) && elevated)
                || (status == Completed && admin),
            can_delete: (matches!(status, Planned | Cancelled) && elevated)
                || (status == Completed && admin),
            can_cancel: status != Cancelled && elevated,
            can_start: approved,
            can_complete: active,
            can_approve: event.requires_admin_approval() && admin,
            can_reopen: status == Completed && admin,
            can_revert: active && elevated,
            can_reactivate: status == Cancelled && elevated,
            can_create_planned_inspections: matches!(status, Planned | InProgress)
                || (status == Completed && admin),
            can_create_unplanned_inspections: active,
            can_create_direct_inspections: (!complex && (approved || active))
                || (complex && active),
            can_assign_inspection_team: authorize(event, InspectionAction::AssignTeam).allowed,
            can_create_daily_reports: authorize(event, InspectionAction::DailyReport).allowed,
            can_generate_final_reports: authorize(event, InspectionAction::FinalReport).allowed,
            can_add_sub_events: complex && matches!(status, Planned | InProgress),
            can_plan_inspections: authorize(event, InspectionAction::Plan).allowed,
            can_start_inspections: authorize(event, InspectionAction::Start).allowed,
            can_edit_inspections: authorize(event, InspectionAction::Edit).allowed,
            requires_approval: event.requires_admin_approval(),
            is_in_plan_mode: plan_mode,
            is_active: active,
            is_terminal: event.is_terminal(),
            plan_mode_restrictions: if plan_mode {
                PlanModeRestrictions::for_plan_mode()
            } else {
                PlanModeRestrictions::default()
            },
        };

        tracing::debug!(
            event_id = event.id,
            status = %status,
            category = %event.event_category,
            is_admin = admin,
            is_owner = viewer.is_owner,
            can_start = state.can_start,
            can_complete = state.can_complete,
            in_plan_mode = plan_mode,
            "evaluated workflow state"
        );

        state
    }
}
