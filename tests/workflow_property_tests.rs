//! Property-based coverage for the workflow engine.
//!
//! Random event snapshots and viewers are generated and the structural
//! invariants are asserted over the whole input space instead of
//! hand-picked cases.

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use gaffer::{
    authorize, status_badge, validate_transition, EventCategory, InspectionAction,
    MaintenanceEvent, MaintenanceEventStatus, PlanModeRestrictions, TransitionError,
    ViewerContext, WorkflowState,
};

fn status_strategy() -> impl Strategy<Value = MaintenanceEventStatus> {
    prop_oneof![
        Just(MaintenanceEventStatus::Planned),
        Just(MaintenanceEventStatus::InProgress),
        Just(MaintenanceEventStatus::Completed),
        Just(MaintenanceEventStatus::Cancelled),
        Just(MaintenanceEventStatus::Postponed),
    ]
}

fn category_strategy() -> impl Strategy<Value = EventCategory> {
    prop_oneof![Just(EventCategory::Simple), Just(EventCategory::Complex)]
}

/// Shape of a randomly generated event snapshot.
#[derive(Debug, Clone, Arbitrary)]
struct EventInputs {
    #[proptest(strategy = "1u64..=5000")]
    id: u64,
    #[proptest(strategy = "status_strategy()")]
    status: MaintenanceEventStatus,
    #[proptest(strategy = "category_strategy()")]
    category: EventCategory,
    approved: bool,
}

impl EventInputs {
    fn build(&self) -> MaintenanceEvent {
        let mut event =
            MaintenanceEvent::new(self.id, "Generated event", self.status).with_category(self.category);
        if self.approved {
            event = event.with_approval("admin1");
        }
        event
    }
}

proptest! {
    #[test]
    fn prop_transition_validity_matches_the_table(
        inputs in any::<EventInputs>(),
        target in status_strategy(),
    ) {
        let event = inputs.build();
        let legal = inputs.status.valid_next_states().contains(&target);

        prop_assert_eq!(inputs.status.can_transition_to(target), legal);

        // Pairs off the table always fail with the table error, regardless
        // of roles and approval
        if !legal {
            let result = validate_transition(&event, target, &ViewerContext::new(true, true));
            prop_assert_eq!(
                result,
                Err(TransitionError::IllegalTransition { from: inputs.status, to: target })
            );
        }
    }

    #[test]
    fn prop_self_transitions_are_never_legal(status in status_strategy()) {
        prop_assert!(!status.can_transition_to(status));
    }

    #[test]
    fn prop_every_status_has_an_exit(status in status_strategy()) {
        // No dead ends anywhere in the graph
        prop_assert!(!status.valid_next_states().is_empty());
    }

    #[test]
    fn prop_evaluation_is_pure(
        inputs in any::<EventInputs>(),
        is_admin in any::<bool>(),
        is_owner in any::<bool>(),
    ) {
        let event = inputs.build();
        let viewer = ViewerContext::new(is_admin, is_owner);

        let first = WorkflowState::evaluate(&event, &viewer);
        let second = WorkflowState::evaluate(&event, &viewer);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_nothing_is_ever_terminal(
        inputs in any::<EventInputs>(),
        is_admin in any::<bool>(),
        is_owner in any::<bool>(),
    ) {
        let event = inputs.build();
        let state = WorkflowState::evaluate(&event, &ViewerContext::new(is_admin, is_owner));

        prop_assert!(!state.is_terminal);
        // The always-open inspection actions follow directly
        prop_assert!(state.can_plan_inspections);
        prop_assert!(state.can_edit_inspections);
        prop_assert!(state.can_assign_inspection_team);
    }

    #[test]
    fn prop_plan_mode_implications(
        inputs in any::<EventInputs>(),
        is_admin in any::<bool>(),
        is_owner in any::<bool>(),
    ) {
        let event = inputs.build();
        let state = WorkflowState::evaluate(&event, &ViewerContext::new(is_admin, is_owner));

        if state.is_in_plan_mode {
            prop_assert!(state.requires_approval);
            prop_assert!(!state.can_start);
            prop_assert!(!state.can_start_inspections);
            prop_assert!(state.plan_mode_restrictions.can_only_plan_inspections);
            prop_assert!(state.plan_mode_restrictions.cannot_start_inspections);
            prop_assert!(!state.plan_mode_restrictions.message.is_empty());
        } else {
            prop_assert_eq!(
                state.plan_mode_restrictions,
                PlanModeRestrictions::default()
            );
        }
    }

    #[test]
    fn prop_start_implies_approved_planned(
        inputs in any::<EventInputs>(),
        is_admin in any::<bool>(),
        is_owner in any::<bool>(),
    ) {
        let event = inputs.build();
        let state = WorkflowState::evaluate(&event, &ViewerContext::new(is_admin, is_owner));

        if state.can_start {
            prop_assert_eq!(inputs.status, MaintenanceEventStatus::Planned);
            prop_assert!(inputs.approved);
            prop_assert!(!state.is_in_plan_mode);
        }
    }

    #[test]
    fn prop_in_progress_events_are_never_deletable(
        inputs in any::<EventInputs>(),
        is_admin in any::<bool>(),
        is_owner in any::<bool>(),
    ) {
        let event = inputs.build();
        let state = WorkflowState::evaluate(&event, &ViewerContext::new(is_admin, is_owner));

        if inputs.status == MaintenanceEventStatus::InProgress {
            prop_assert!(!state.can_delete);
            prop_assert!(state.can_complete);
        }
    }

    #[test]
    fn prop_roleless_viewers_hold_no_record_capabilities(inputs in any::<EventInputs>()) {
        let event = inputs.build();
        let state = WorkflowState::evaluate(&event, &ViewerContext::new(false, false));

        prop_assert!(!state.can_edit);
        prop_assert!(!state.can_delete);
        prop_assert!(!state.can_cancel);
        prop_assert!(!state.can_approve);
        prop_assert!(!state.can_reopen);
        prop_assert!(!state.can_revert);
        prop_assert!(!state.can_reactivate);
    }

    #[test]
    fn prop_denials_carry_reasons_and_approvals_do_not(inputs in any::<EventInputs>()) {
        let event = inputs.build();

        for action in InspectionAction::ALL {
            let decision = authorize(&event, action);
            prop_assert_eq!(
                decision.allowed,
                decision.reason.is_none(),
                "{} on {}", action, inputs.status
            );
        }
    }

    #[test]
    fn prop_capability_record_serializes_in_camel_case(
        inputs in any::<EventInputs>(),
        is_admin in any::<bool>(),
        is_owner in any::<bool>(),
    ) {
        let event = inputs.build();
        let state = WorkflowState::evaluate(&event, &ViewerContext::new(is_admin, is_owner));

        let json = serde_json::to_value(&state).unwrap();
        let map = json.as_object().unwrap();

        prop_assert!(!map.is_empty());
        for key in map.keys() {
            prop_assert!(!key.contains('_'), "snake_case key leaked: {}", key);
        }
    }
}

#[test]
fn badge_and_display_labels_agree_for_every_status() {
    for status in MaintenanceEventStatus::ALL {
        assert_eq!(status_badge(status).label, status.to_string());
    }
}
