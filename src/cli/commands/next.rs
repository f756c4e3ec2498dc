use anyhow::Result;
use std::path::PathBuf;

use crate::cli::commands::{load_event, resolve_format};
use crate::config::OutputFormat;
use crate::event::MaintenanceEventStatus;
use crate::workflow::status_description;

pub struct NextCommand {
    pub event_path: Option<PathBuf>,
    pub status: Option<String>,
    pub format: Option<OutputFormat>,
}

impl NextCommand {
    pub fn new(event_path: Option<PathBuf>, status: Option<String>) -> Self {
        Self {
            event_path,
            status,
            format: None,
        }
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn execute(&self) -> Result<()> {
        let status: MaintenanceEventStatus = match (&self.event_path, &self.status) {
            (Some(path), _) => load_event(path)?.status,
            (None, Some(raw)) => raw.parse()?,
            (None, None) => {
                anyhow::bail!("Provide an event snapshot with --event or a status with --status")
            }
        };

        let next = status.valid_next_states();

        match resolve_format(self.format)? {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "status": status,
                    "description": status_description(status),
                    "next": next,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                println!("➡️  NEXT STATUSES");
                println!("================");
                println!();
                println!("🏷️  Current: {}", status);
                println!("📄 {}", status_description(status));
                println!();
                println!("Legal transitions:");
                for target in next {
                    println!("   → {}", target);
                }
            }
        }

        Ok(())
    }
}
