use anyhow::Result;
use std::path::PathBuf;

use crate::cli::commands::{flag_mark, load_event, resolve_format, resolve_viewer};
use crate::config::OutputFormat;
use crate::event::{MaintenanceEvent, ViewerContext};
use crate::workflow::{
    next_recommended_action, status_badge, status_description, workflow_recommendations,
    WorkflowState,
};

pub struct StateCommand {
    pub event_path: PathBuf,
    pub admin: bool,
    pub owner: bool,
    pub user: Option<String>,
    pub format: Option<OutputFormat>,
}

impl StateCommand {
    pub fn new(event_path: PathBuf) -> Self {
        Self {
            event_path,
            admin: false,
            owner: false,
            user: None,
            format: None,
        }
    }

    pub fn with_viewer(mut self, admin: bool, owner: bool, user: Option<String>) -> Self {
        self.admin = admin;
        self.owner = owner;
        self.user = user;
        self
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn execute(&self) -> Result<()> {
        let event = load_event(&self.event_path)?;
        let span = crate::telemetry::evaluation_span("state", Some(event.id));
        let _guard = span.enter();

        let viewer = resolve_viewer(&event, self.admin, self.owner, self.user.as_deref())?;
        let state = WorkflowState::evaluate(&event, &viewer);

        match resolve_format(self.format)? {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
            OutputFormat::Text => {
                render_text(&event, &viewer, &state);
            }
        }

        Ok(())
    }
}

fn render_text(event: &MaintenanceEvent, viewer: &ViewerContext, state: &WorkflowState) {
    let badge = status_badge(event.status);

    println!("📊 EVENT WORKFLOW STATE");
    println!("=======================");
    println!();
    println!("📋 Event #{}: {}", event.id, event.title);
    println!("   🏷️  Status: {} ({:?})", badge.label, badge.tone);
    println!("   📄 {}", status_description(event.status));
    println!("   📂 Category: {}", event.event_category);
    match &event.approved_by {
        Some(approver) => println!("   ✔️  Approved by: {}", approver),
        None => println!("   ⏳ Approval: none recorded"),
    }
    println!(
        "   👤 Viewer: admin={} owner={}",
        viewer.is_admin, viewer.is_owner
    );
    println!();

    println!("🔄 LIFECYCLE:");
    println!("─────────────");
    println!("   {} Start", flag_mark(state.can_start));
    println!("   {} Complete", flag_mark(state.can_complete));
    println!("   {} Approve", flag_mark(state.can_approve));
    println!("   {} Cancel", flag_mark(state.can_cancel));
    println!("   {} Reopen", flag_mark(state.can_reopen));
    println!("   {} Revert to planned", flag_mark(state.can_revert));
    println!("   {} Reactivate", flag_mark(state.can_reactivate));
    println!();

    println!("✏️  RECORD MANAGEMENT:");
    println!("─────────────────────");
    println!("   {} Edit event", flag_mark(state.can_edit));
    println!("   {} Delete event", flag_mark(state.can_delete));
    println!("   {} Add sub-events", flag_mark(state.can_add_sub_events));
    println!();

    println!("🔍 INSPECTIONS:");
    println!("───────────────");
    println!(
        "   {} Create planned inspections",
        flag_mark(state.can_create_planned_inspections)
    );
    println!(
        "   {} Create unplanned inspections",
        flag_mark(state.can_create_unplanned_inspections)
    );
    println!(
        "   {} Create direct inspections",
        flag_mark(state.can_create_direct_inspections)
    );
    println!("   {} Plan inspections", flag_mark(state.can_plan_inspections));
    println!("   {} Start inspections", flag_mark(state.can_start_inspections));
    println!("   {} Edit inspections", flag_mark(state.can_edit_inspections));
    println!(
        "   {} Assign inspection team",
        flag_mark(state.can_assign_inspection_team)
    );
    println!();

    println!("📑 REPORTS:");
    println!("───────────");
    println!(
        "   {} Daily reports",
        flag_mark(state.can_create_daily_reports)
    );
    println!(
        "   {} Final reports",
        flag_mark(state.can_generate_final_reports)
    );
    println!();

    if state.is_in_plan_mode {
        println!("📐 PLAN MODE:");
        println!("─────────────");
        println!("   ⚠️  {}", state.plan_mode_restrictions.message);
        println!();
    }

    if let Some(action) = next_recommended_action(state) {
        println!("🎯 NEXT STEP: {}", action.label());
        println!("   💡 {}", action.description());
        println!();
    }

    let notes = workflow_recommendations(event, state);
    if !notes.is_empty() {
        println!("📝 RECOMMENDATIONS:");
        println!("───────────────────");
        for note in notes {
            println!("   → {}", note);
        }
    }
}
