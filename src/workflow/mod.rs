//! The workflow engine: transition table, action authorization, capability
//! aggregation, transition validation, and presentation helpers.
//!
//! Everything in this module is a pure function over an event snapshot and a
//! viewer context. The backend owns every write; callers use these functions
//! to pre-validate intent and to drive UI state.

pub mod authorization;
pub mod recommendations;
pub mod state;
pub mod transitions;
pub mod validation;

pub use authorization::{authorize, ActionDecision, InspectionAction};
pub use recommendations::{
    next_recommended_action, status_badge, status_description, workflow_recommendations,
    BadgeTone, NextAction, StatusBadge,
};
pub use state::{PlanModeRestrictions, WorkflowState, PLAN_MODE_MESSAGE};
pub use validation::{validate_transition, TransitionError};
