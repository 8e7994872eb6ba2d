//! Requests routed through a chain.

use serde::Serialize;

use super::capability::CapabilityLevel;
use super::ids::RequestId;

/// A unit of work waiting for a capable handler.
///
/// Owned by the caller. Only the dispatcher flips `resolved`, and only from
/// false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    id: RequestId,
    required_capability: CapabilityLevel,
    label: String,
    resolved: bool,
}

impl Request {
    pub fn new(id: RequestId, required_capability: CapabilityLevel, label: impl Into<String>) -> Self {
        Self {
            id,
            required_capability,
            label: label.into(),
            resolved: false,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn required_capability(&self) -> CapabilityLevel {
        self.required_capability
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.resolved = true;
    }
}
