// Gaffer Library - Maintenance Event Workflow Engine
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod event;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use config::{config, init_config, GafferConfig, OutputFormat};
pub use event::{
    EventCategory, MaintenanceEvent, MaintenanceEventStatus, ParseEnumError, ViewerContext,
};
pub use telemetry::{evaluation_span, init_telemetry};
pub use workflow::{
    authorize, next_recommended_action, status_badge, status_description, validate_transition,
    workflow_recommendations, ActionDecision, BadgeTone, InspectionAction, NextAction,
    PlanModeRestrictions, StatusBadge, TransitionError, WorkflowState,
};
