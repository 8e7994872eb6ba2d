//! Events - ディスパッチ中に発生するイベント
//!
//! Dispatcher が生成して `EventSink` に渡します。Dispatcher 自身は保存しません。
//!
//! # イベント種類
//! - Claimed: handler がリクエストを引き受けた
//! - Skipped: handler が見送った（理由つき）
//! - Unresolved: チェーンを最後まで走査しても引き受け手がいない

use serde::{Deserialize, Serialize};

use super::ids::{HandlerId, RequestId};

/// Why a handler passed on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The handler already took a request.
    Busy,
    /// The handler's capability is below the requirement.
    Underqualified,
}

/// One step of a dispatch.
///
/// Serialized with an `outcome` tag, e.g.
/// `{"outcome":"skipped","handler_id":"...","request_id":"...","reason":"busy"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchEvent {
    Claimed {
        handler_id: HandlerId,
        request_id: RequestId,
    },
    Skipped {
        handler_id: HandlerId,
        request_id: RequestId,
        reason: SkipReason,
    },
    Unresolved {
        request_id: RequestId,
    },
}

impl DispatchEvent {
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::Claimed { request_id, .. }
            | Self::Skipped { request_id, .. }
            | Self::Unresolved { request_id } => *request_id,
        }
    }

    /// The handler involved, if any.
    pub fn handler_id(&self) -> Option<HandlerId> {
        match self {
            Self::Claimed { handler_id, .. } | Self::Skipped { handler_id, .. } => {
                Some(*handler_id)
            }
            Self::Unresolved { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;

    #[test]
    fn skipped_event_has_tagged_shape() {
        let handler_id = HandlerId::from_ulid(Ulid::new());
        let request_id = RequestId::from_ulid(Ulid::new());
        let event = DispatchEvent::Skipped {
            handler_id,
            request_id,
            reason: SkipReason::Underqualified,
        };

        let v = serde_json::to_value(&event).unwrap();
        assert_eq!(v["outcome"], "skipped");
        assert_eq!(v["reason"], "underqualified");
        assert_eq!(v["handler_id"], handler_id.as_ulid().to_string());
        assert_eq!(v["request_id"], request_id.as_ulid().to_string());
    }

    #[test]
    fn unresolved_event_has_no_handler() {
        let request_id = RequestId::from_ulid(Ulid::new());
        let event = DispatchEvent::Unresolved { request_id };

        assert_eq!(event.request_id(), request_id);
        assert_eq!(event.handler_id(), None);
        assert_eq!(serde_json::to_value(&event).unwrap()["outcome"], "unresolved");
    }
}
