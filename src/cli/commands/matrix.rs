use anyhow::Result;

use crate::cli::commands::resolve_format;
use crate::config::OutputFormat;
use crate::event::MaintenanceEventStatus;

pub struct MatrixCommand {
    pub format: Option<OutputFormat>,
}

impl MatrixCommand {
    pub fn new() -> Self {
        Self { format: None }
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn execute(&self) -> Result<()> {
        match resolve_format(self.format)? {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = MaintenanceEventStatus::ALL
                    .into_iter()
                    .map(|status| {
                        serde_json::json!({
                            "from": status,
                            "to": status.valid_next_states(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
            OutputFormat::Text => {
                println!("🗺️  STATUS TRANSITION TABLE");
                println!("===========================");
                println!();
                for status in MaintenanceEventStatus::ALL {
                    let targets: Vec<String> = status
                        .valid_next_states()
                        .iter()
                        .map(|target| target.to_string())
                        .collect();
                    println!("   {:<11} → {}", status.to_string(), targets.join(", "));
                }
                println!();
                println!("   Self-transitions are never legal; no status is terminal.");
            }
        }

        Ok(())
    }
}
