// Core types for the maintenance-event workflow engine

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a maintenance event, as reported by the backend.
///
/// The set is closed: snapshots carrying any other status string fail to
/// deserialize instead of flowing into the engine as an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceEventStatus {
    /// Scheduled but not yet underway; may still be awaiting approval.
    Planned,
    /// Work is actively happening on site.
    InProgress,
    /// Work finished; remains editable for corrections.
    Completed,
    /// Called off; can be brought back to Planned.
    Cancelled,
    /// Pushed out; will be rescheduled or restarted.
    Postponed,
}

impl MaintenanceEventStatus {
    /// Every status, in display order. Used for table printing and
    /// exhaustive checks.
    pub const ALL: [MaintenanceEventStatus; 5] = [
        MaintenanceEventStatus::Planned,
        MaintenanceEventStatus::InProgress,
        MaintenanceEventStatus::Completed,
        MaintenanceEventStatus::Cancelled,
        MaintenanceEventStatus::Postponed,
    ];
}

impl fmt::Display for MaintenanceEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaintenanceEventStatus::Planned => "Planned",
            MaintenanceEventStatus::InProgress => "In Progress",
            MaintenanceEventStatus::Completed => "Completed",
            MaintenanceEventStatus::Cancelled => "Cancelled",
            MaintenanceEventStatus::Postponed => "Postponed",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for MaintenanceEventStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "planned" => Ok(MaintenanceEventStatus::Planned),
            "in_progress" | "inprogress" => Ok(MaintenanceEventStatus::InProgress),
            "completed" => Ok(MaintenanceEventStatus::Completed),
            "cancelled" | "canceled" => Ok(MaintenanceEventStatus::Cancelled),
            "postponed" => Ok(MaintenanceEventStatus::Postponed),
            _ => Err(ParseEnumError::new("status", s)),
        }
    }
}

/// Classification controlling whether sub-events and the planned-inspection
/// workflow apply to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Standalone event; inspections are created directly.
    #[default]
    Simple,
    /// Umbrella event with sub-events and planned inspections.
    Complex,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventCategory::Simple => "Simple",
            EventCategory::Complex => "Complex",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for EventCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "simple" => Ok(EventCategory::Simple),
            "complex" => Ok(EventCategory::Complex),
            _ => Err(ParseEnumError::new("category", s)),
        }
    }
}

/// Error for status/category/action strings arriving from the CLI or other
/// text boundaries. Snapshots use serde and fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Snapshot of a maintenance event as the backend reports it.
///
/// The engine reads only `status`, `approved_by`, and `event_category`;
/// the remaining fields ride along for display. Snapshots are never
/// written back; the backend owns every state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub status: MaintenanceEventStatus,
    /// Set when an admin has approved the event; the value is the
    /// approver's backend identifier.
    #[serde(default)]
    pub approved_by: Option<String>,
    /// Absent and `null` both mean `Simple`; older events predate categories.
    #[serde(default, deserialize_with = "category_or_simple")]
    pub event_category: EventCategory,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub starts_on: Option<NaiveDate>,
    #[serde(default)]
    pub ends_on: Option<NaiveDate>,
}

fn category_or_simple<'de, D>(deserializer: D) -> Result<EventCategory, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let category = Option::<EventCategory>::deserialize(deserializer)?;
    Ok(category.unwrap_or_default())
}

impl MaintenanceEvent {
    pub fn new(id: u64, title: impl Into<String>, status: MaintenanceEventStatus) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            approved_by: None,
            event_category: EventCategory::default(),
            created_by: None,
            starts_on: None,
            ends_on: None,
        }
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.event_category = category;
        self
    }

    pub fn with_approval(mut self, approver: impl Into<String>) -> Self {
        self.approved_by = Some(approver.into());
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.created_by = Some(creator.into());
        self
    }

    /// Planned but not yet approved: inspections may be planned, not run.
    pub fn in_plan_mode(&self) -> bool {
        self.status == MaintenanceEventStatus::Planned && self.approved_by.is_none()
    }

    /// Planned and approved, cleared to start.
    pub fn approved_and_ready(&self) -> bool {
        self.status == MaintenanceEventStatus::Planned && self.approved_by.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.status == MaintenanceEventStatus::InProgress
    }

    /// No status is terminal: completed and cancelled events stay open to
    /// corrections and reactivation. Deliberate, not an oversight.
    pub fn is_terminal(&self) -> bool {
        false
    }

    pub fn requires_admin_approval(&self) -> bool {
        self.in_plan_mode()
    }

    pub fn supports_sub_events(&self) -> bool {
        self.event_category == EventCategory::Complex
    }

    pub fn uses_planned_inspection_workflow(&self) -> bool {
        self.event_category == EventCategory::Complex
    }
}

/// Who is looking at the event. Supplied per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewerContext {
    pub is_admin: bool,
    pub is_owner: bool,
}

impl ViewerContext {
    pub fn new(is_admin: bool, is_owner: bool) -> Self {
        Self { is_admin, is_owner }
    }

    /// Derive ownership by comparing a username against the event creator.
    pub fn resolve(event: &MaintenanceEvent, username: Option<&str>, is_admin: bool) -> Self {
        let is_owner = match (username, event.created_by.as_deref()) {
            (Some(user), Some(creator)) => user == creator,
            _ => false,
        };
        Self { is_admin, is_owner }
    }
}

pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}
