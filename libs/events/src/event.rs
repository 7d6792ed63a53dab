//! The operational event observed by upstream producers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EventError;

/// One observed user action against a managed resource.
///
/// Values are constructed once by the producer and only read afterwards.
/// String fields that are absent in serialized form decode as empty strings.
/// `project_id` has no default and must be present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommonEvent {
    /// Identity of the actor. Empty for system-initiated actions.
    #[serde(default)]
    pub operator: String,

    /// Project (tenant) owning the resource.
    pub project_id: i64,

    /// When the action happened. `None` means the producer never set it.
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,

    /// Verb describing the action (e.g. "pull", "push", "create", "delete").
    #[serde(default)]
    pub operation: String,

    /// Free-form serialized context, usually JSON.
    #[serde(default)]
    pub payload: String,

    /// Network origin of the actor in IPv4 or IPv6 text form, or empty.
    #[serde(default)]
    pub source_ip: String,

    /// Category of the acted-upon resource.
    #[serde(default)]
    pub resource_type: String,

    /// Fully-qualified identifier of the resource.
    #[serde(default)]
    pub resource_name: String,

    /// Human-readable description of the action.
    #[serde(default)]
    pub operation_description: String,

    /// Whether the action succeeded.
    #[serde(default)]
    pub is_successful: bool,
}

impl CommonEvent {
    /// Creates a new event builder.
    pub fn builder() -> CommonEventBuilder {
        CommonEventBuilder::default()
    }

    /// Decodes an event from its JSON form.
    pub fn from_json(s: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Builder for [`CommonEvent`].
///
/// Unset fields keep their empty defaults; nothing is validated until the
/// event is resolved.
#[derive(Debug, Default)]
pub struct CommonEventBuilder {
    event: CommonEvent,
}

impl CommonEventBuilder {
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.event.operator = operator.into();
        self
    }

    pub fn project_id(mut self, project_id: i64) -> Self {
        self.event.project_id = project_id;
        self
    }

    pub fn occurred_at(mut self, ts: DateTime<Utc>) -> Self {
        self.event.occurred_at = Some(ts);
        self
    }

    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.event.operation = operation.into();
        self
    }

    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.event.payload = payload.into();
        self
    }

    pub fn source_ip(mut self, source_ip: impl Into<String>) -> Self {
        self.event.source_ip = source_ip.into();
        self
    }

    pub fn resource(
        mut self,
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
    ) -> Self {
        self.event.resource_type = resource_type.into();
        self.event.resource_name = resource_name.into();
        self
    }

    pub fn operation_description(mut self, description: impl Into<String>) -> Self {
        self.event.operation_description = description.into();
        self
    }

    pub fn successful(mut self, is_successful: bool) -> Self {
        self.event.is_successful = is_successful;
        self
    }

    pub fn build(self) -> CommonEvent {
        self.event
    }
}
