use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::commands::{flag_mark, load_event, resolve_format};
use crate::config::OutputFormat;
use crate::event::MaintenanceEvent;
use crate::workflow::{authorize, ActionDecision, InspectionAction};

pub struct ActionsCommand {
    pub event_path: PathBuf,
    pub action: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct ActionReport<'a> {
    action: &'a str,
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

impl<'a> ActionReport<'a> {
    fn new(action: &'a str, decision: &'a ActionDecision) -> Self {
        Self {
            action,
            allowed: decision.allowed,
            reason: decision.reason.as_deref(),
        }
    }
}

impl ActionsCommand {
    pub fn new(event_path: PathBuf) -> Self {
        Self {
            event_path,
            action: None,
            format: None,
        }
    }

    pub fn with_action(mut self, action: Option<String>) -> Self {
        self.action = action;
        self
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn execute(&self) -> Result<()> {
        let event = load_event(&self.event_path)?;
        let span = crate::telemetry::evaluation_span("actions", Some(event.id));
        let _guard = span.enter();

        let format = resolve_format(self.format)?;

        match &self.action {
            Some(raw) => render_single(&event, raw, format),
            None => render_all(&event, format),
        }
    }
}

fn render_single(event: &MaintenanceEvent, raw: &str, format: OutputFormat) -> Result<()> {
    // An unrecognized action is a denial, not a crash: nothing permitted.
    let decision = match raw.parse::<InspectionAction>() {
        Ok(action) => authorize(event, action),
        Err(_) => ActionDecision::deny("Unknown action"),
    };

    match format {
        OutputFormat::Json => {
            let report = ActionReport::new(raw, &decision);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print!("{} {}", flag_mark(decision.allowed), raw);
            match &decision.reason {
                Some(reason) => println!("  → {}", reason),
                None => println!(),
            }
        }
    }

    Ok(())
}

fn render_all(event: &MaintenanceEvent, format: OutputFormat) -> Result<()> {
    let decisions: Vec<(InspectionAction, ActionDecision)> = InspectionAction::ALL
        .into_iter()
        .map(|action| (action, authorize(event, action)))
        .collect();

    match format {
        OutputFormat::Json => {
            let reports: Vec<ActionReport> = decisions
                .iter()
                .map(|(action, decision)| ActionReport::new(action.name(), decision))
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            println!("🔍 INSPECTION ACTION AUTHORIZATION");
            println!("==================================");
            println!();
            println!(
                "📋 Event #{}: {} (status: {}, category: {})",
                event.id, event.title, event.status, event.event_category
            );
            println!();
            for (action, decision) in &decisions {
                print!("   {} {:<13}", flag_mark(decision.allowed), action.name());
                match &decision.reason {
                    Some(reason) => println!(" → {}", reason),
                    None => println!(),
                }
            }
        }
    }

    Ok(())
}
