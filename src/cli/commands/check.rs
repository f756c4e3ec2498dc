use anyhow::Result;
use std::path::PathBuf;

use crate::cli::commands::{load_event, resolve_format, resolve_viewer};
use crate::config::OutputFormat;
use crate::event::MaintenanceEventStatus;
use crate::workflow::validate_transition;

pub struct CheckCommand {
    pub event_path: PathBuf,
    pub target: String,
    pub admin: bool,
    pub owner: bool,
    pub user: Option<String>,
    pub format: Option<OutputFormat>,
}

impl CheckCommand {
    pub fn new(event_path: PathBuf, target: String) -> Self {
        Self {
            event_path,
            target,
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

    /// Exits nonzero when the transition is rejected so scripts can gate on
    /// the result.
    pub fn execute(&self) -> Result<()> {
        let event = load_event(&self.event_path)?;
        let span = crate::telemetry::evaluation_span("check", Some(event.id));
        let _guard = span.enter();

        let target: MaintenanceEventStatus = self.target.parse()?;
        let viewer = resolve_viewer(&event, self.admin, self.owner, self.user.as_deref())?;
        let format = resolve_format(self.format)?;

        match validate_transition(&event, target, &viewer) {
            Ok(()) => {
                match format {
                    OutputFormat::Json => {
                        let report = serde_json::json!({
                            "from": event.status,
                            "to": target,
                            "valid": true,
                        });
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    }
                    OutputFormat::Text => {
                        println!("✅ Transition allowed: {} → {}", event.status, target);
                        println!("   📋 Event #{}: {}", event.id, event.title);
                    }
                }
                Ok(())
            }
            Err(err) => {
                match format {
                    OutputFormat::Json => {
                        let report = serde_json::json!({
                            "from": event.status,
                            "to": target,
                            "valid": false,
                            "error": err.to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    }
                    OutputFormat::Text => {
                        println!("❌ Transition rejected: {} → {}", event.status, target);
                        println!("   📋 Event #{}: {}", event.id, event.title);
                        println!("   💬 {}", err);
                    }
                }
                std::process::exit(1);
            }
        }
    }
}
