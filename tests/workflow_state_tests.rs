//! Full role-by-status sweeps over the workflow capability record.
//!
//! The unit tests next to `WorkflowState` pin individual rules; these tests
//! walk the whole matrix so a rule change in one arm cannot silently leak
//! into another status.

use gaffer::{
    EventCategory, MaintenanceEvent, MaintenanceEventStatus, PlanModeRestrictions, ViewerContext,
    WorkflowState,
};

fn event(status: MaintenanceEventStatus) -> MaintenanceEvent {
    MaintenanceEvent::new(42, "Substation overhaul", status)
}

const NOBODY: ViewerContext = ViewerContext {
    is_admin: false,
    is_owner: false,
};
const OWNER: ViewerContext = ViewerContext {
    is_admin: false,
    is_owner: true,
};
const ADMIN: ViewerContext = ViewerContext {
    is_admin: true,
    is_owner: false,
};
const ADMIN_OWNER: ViewerContext = ViewerContext {
    is_admin: true,
    is_owner: true,
};

const ALL_VIEWERS: [ViewerContext; 4] = [NOBODY, OWNER, ADMIN, ADMIN_OWNER];

#[test]
fn test_edit_matrix_across_all_statuses() {
    // (status, nobody, owner, admin)
    let matrix = [
        (MaintenanceEventStatus::Planned, false, true, true),
        (MaintenanceEventStatus::InProgress, false, true, true),
        (MaintenanceEventStatus::Completed, false, false, true),
        (MaintenanceEventStatus::Cancelled, false, true, true),
        (MaintenanceEventStatus::Postponed, false, false, false),
    ];

    for (status, nobody, owner, admin) in matrix {
        let event = event(status);
        assert_eq!(
            WorkflowState::evaluate(&event, &NOBODY).can_edit,
            nobody,
            "nobody editing {status}"
        );
        assert_eq!(
            WorkflowState::evaluate(&event, &OWNER).can_edit,
            owner,
            "owner editing {status}"
        );
        assert_eq!(
            WorkflowState::evaluate(&event, &ADMIN).can_edit,
            admin,
            "admin editing {status}"
        );
    }
}

#[test]
fn test_delete_matrix_excludes_in_progress() {
    // Deleting tracks editing except for in-progress events, which can be
    // edited but never deleted.
    let matrix = [
        (MaintenanceEventStatus::Planned, true, true),
        (MaintenanceEventStatus::InProgress, false, false),
        (MaintenanceEventStatus::Completed, false, true),
        (MaintenanceEventStatus::Cancelled, true, true),
        (MaintenanceEventStatus::Postponed, false, false),
    ];

    for (status, owner, admin) in matrix {
        let event = event(status);
        assert!(
            !WorkflowState::evaluate(&event, &NOBODY).can_delete,
            "nobody deleting {status}"
        );
        assert_eq!(
            WorkflowState::evaluate(&event, &OWNER).can_delete,
            owner,
            "owner deleting {status}"
        );
        assert_eq!(
            WorkflowState::evaluate(&event, &ADMIN).can_delete,
            admin,
            "admin deleting {status}"
        );
    }
}

#[test]
fn test_cancel_allowed_everywhere_except_cancelled() {
    for status in MaintenanceEventStatus::ALL {
        let event = event(status);
        let expected = status != MaintenanceEventStatus::Cancelled;

        assert_eq!(
            WorkflowState::evaluate(&event, &OWNER).can_cancel,
            expected,
            "owner cancelling {status}"
        );
        assert_eq!(
            WorkflowState::evaluate(&event, &ADMIN).can_cancel,
            expected,
            "admin cancelling {status}"
        );
        assert!(
            !WorkflowState::evaluate(&event, &NOBODY).can_cancel,
            "nobody cancelling {status}"
        );
    }
}

#[test]
fn test_start_ignores_roles_and_follows_approval() {
    // Given a planned event before and after admin approval
    let unapproved = event(MaintenanceEventStatus::Planned);
    let approved = event(MaintenanceEventStatus::Planned).with_approval("admin1");

    // Then every viewer sees the same answer both times
    for viewer in ALL_VIEWERS {
        assert!(!WorkflowState::evaluate(&unapproved, &viewer).can_start);
        assert!(WorkflowState::evaluate(&approved, &viewer).can_start);
    }

    // And approval recorded on a non-planned event does not re-enable start
    let done = event(MaintenanceEventStatus::Completed).with_approval("admin1");
    assert!(!WorkflowState::evaluate(&done, &ADMIN).can_start);
}

#[test]
fn test_approve_is_admin_only_and_plan_mode_only() {
    let unapproved = event(MaintenanceEventStatus::Planned);
    assert!(WorkflowState::evaluate(&unapproved, &ADMIN).can_approve);
    assert!(!WorkflowState::evaluate(&unapproved, &OWNER).can_approve);
    assert!(!WorkflowState::evaluate(&unapproved, &NOBODY).can_approve);

    // Nothing left to approve once the approval is recorded
    let approved = unapproved.with_approval("admin1");
    assert!(!WorkflowState::evaluate(&approved, &ADMIN).can_approve);

    // Approval only applies to planned events
    let active = event(MaintenanceEventStatus::InProgress);
    assert!(!WorkflowState::evaluate(&active, &ADMIN).can_approve);
}

#[test]
fn test_plan_mode_restrictions_populated_only_in_plan_mode() {
    for status in MaintenanceEventStatus::ALL {
        for approved in [false, true] {
            let mut event = event(status);
            if approved {
                event = event.with_approval("admin1");
            }

            let state = WorkflowState::evaluate(&event, &OWNER);
            let plan_mode = status == MaintenanceEventStatus::Planned && !approved;

            assert_eq!(state.is_in_plan_mode, plan_mode);
            if plan_mode {
                assert!(state.plan_mode_restrictions.can_only_plan_inspections);
                assert!(state.plan_mode_restrictions.cannot_start_inspections);
                assert!(state.plan_mode_restrictions.cannot_complete_inspections);
                assert!(!state.plan_mode_restrictions.message.is_empty());
            } else {
                assert_eq!(state.plan_mode_restrictions, PlanModeRestrictions::default());
            }
        }
    }
}

#[test]
fn test_complex_category_changes_only_the_category_sensitive_flags() {
    // Given the same snapshot in both categories
    for status in MaintenanceEventStatus::ALL {
        let simple = event(status);
        let complex = event(status).with_category(EventCategory::Complex);

        let simple_state = WorkflowState::evaluate(&simple, &OWNER);
        let complex_state = WorkflowState::evaluate(&complex, &OWNER);

        // Lifecycle and record flags never depend on the category
        assert_eq!(simple_state.can_edit, complex_state.can_edit);
        assert_eq!(simple_state.can_delete, complex_state.can_delete);
        assert_eq!(simple_state.can_cancel, complex_state.can_cancel);
        assert_eq!(simple_state.can_start, complex_state.can_start);
        assert_eq!(simple_state.can_complete, complex_state.can_complete);
        assert_eq!(simple_state.requires_approval, complex_state.requires_approval);

        // Sub-events exist only for complex events
        assert!(!simple_state.can_add_sub_events);
        assert_eq!(
            complex_state.can_add_sub_events,
            matches!(
                status,
                MaintenanceEventStatus::Planned | MaintenanceEventStatus::InProgress
            )
        );
    }
}

#[test]
fn test_direct_inspection_creation_per_category() {
    // Simple: approved-planned or active. Complex: active only.
    let simple_approved = event(MaintenanceEventStatus::Planned).with_approval("admin1");
    assert!(WorkflowState::evaluate(&simple_approved, &NOBODY).can_create_direct_inspections);

    let complex_approved = event(MaintenanceEventStatus::Planned)
        .with_category(EventCategory::Complex)
        .with_approval("admin1");
    assert!(!WorkflowState::evaluate(&complex_approved, &ADMIN).can_create_direct_inspections);

    for category in [EventCategory::Simple, EventCategory::Complex] {
        let active = event(MaintenanceEventStatus::InProgress).with_category(category);
        assert!(
            WorkflowState::evaluate(&active, &NOBODY).can_create_direct_inspections,
            "direct inspections while active ({category:?})"
        );
    }
}

#[test]
fn test_inspection_flags_are_role_independent() {
    // Inspection-level permissions come from the event snapshot alone, so
    // all four viewers must agree on them.
    for status in MaintenanceEventStatus::ALL {
        let event = event(status).with_category(EventCategory::Complex);
        let baseline = WorkflowState::evaluate(&event, &NOBODY);

        for viewer in ALL_VIEWERS {
            let state = WorkflowState::evaluate(&event, &viewer);
            assert_eq!(state.can_plan_inspections, baseline.can_plan_inspections);
            assert_eq!(state.can_start_inspections, baseline.can_start_inspections);
            assert_eq!(state.can_edit_inspections, baseline.can_edit_inspections);
            assert_eq!(
                state.can_assign_inspection_team,
                baseline.can_assign_inspection_team
            );
            assert_eq!(
                state.can_create_daily_reports,
                baseline.can_create_daily_reports
            );
            assert_eq!(
                state.can_generate_final_reports,
                baseline.can_generate_final_reports
            );
        }
    }
}

#[test]
fn test_completed_events_keep_admin_correction_paths_open() {
    let done = event(MaintenanceEventStatus::Completed);

    let as_admin = WorkflowState::evaluate(&done, &ADMIN);
    assert!(as_admin.can_edit);
    assert!(as_admin.can_delete);
    assert!(as_admin.can_reopen);
    assert!(as_admin.can_create_planned_inspections);

    let as_owner = WorkflowState::evaluate(&done, &OWNER);
    assert!(!as_owner.can_edit);
    assert!(!as_owner.can_delete);
    assert!(!as_owner.can_reopen);
    assert!(!as_owner.can_create_planned_inspections);

    // Completed is still not terminal; final reports stay open to everyone
    assert!(!as_owner.is_terminal);
    assert!(as_owner.can_generate_final_reports);
}

#[test]
fn test_no_status_is_terminal_for_any_viewer() {
    for status in MaintenanceEventStatus::ALL {
        for viewer in ALL_VIEWERS {
            let state = WorkflowState::evaluate(&event(status), &viewer);
            assert!(!state.is_terminal, "{status} must not be terminal");
        }
    }
}

#[test]
fn test_repeated_evaluation_returns_deep_equal_records() {
    // The evaluation is pure; two calls over the same inputs must agree on
    // every field, including the nested restrictions struct.
    for status in MaintenanceEventStatus::ALL {
        for category in [EventCategory::Simple, EventCategory::Complex] {
            for approved in [false, true] {
                let mut event = event(status).with_category(category);
                if approved {
                    event = event.with_approval("admin1");
                }

                for viewer in ALL_VIEWERS {
                    let first = WorkflowState::evaluate(&event, &viewer);
                    let second = WorkflowState::evaluate(&event, &viewer);
                    assert_eq!(first, second, "{status} {category:?} approved={approved}");
                }
            }
        }
    }
}

#[test]
fn test_viewer_context_resolution_matches_creator() {
    let event = event(MaintenanceEventStatus::Planned).with_creator("svetlana");

    let as_creator = ViewerContext::resolve(&event, Some("svetlana"), false);
    assert!(as_creator.is_owner);
    assert!(!as_creator.is_admin);

    let as_other = ViewerContext::resolve(&event, Some("marcus"), false);
    assert!(!as_other.is_owner);

    let anonymous = ViewerContext::resolve(&event, None, true);
    assert!(!anonymous.is_owner);
    assert!(anonymous.is_admin);
}
