//! Terminal result of one dispatch.

use serde::{Deserialize, Serialize};

use super::ids::HandlerId;

/// Either a handler claimed the request or the chain ran out.
///
/// `Unresolved` is a normal result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchOutcome {
    Claimed { handler_id: HandlerId },
    Unresolved,
}

impl DispatchOutcome {
    pub fn claimed(handler_id: HandlerId) -> Self {
        Self::Claimed { handler_id }
    }

    pub fn is_claimed(&self) -> bool {
        matches!(self, Self::Claimed { .. })
    }

    pub fn handler_id(&self) -> Option<HandlerId> {
        match self {
            Self::Claimed { handler_id } => Some(*handler_id),
            Self::Unresolved => None,
        }
    }
}
