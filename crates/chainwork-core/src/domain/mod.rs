//! Domain model（ids, capability, request, handler, events, outcome, errors）
//!
//! 外部依存（ログ出力、ID 生成の時刻源など）は持たず、ports 経由で受け取ります。

pub mod capability;
pub mod errors;
pub mod events;
pub mod handler;
pub mod ids;
pub mod outcome;
pub mod request;

pub use self::capability::CapabilityLevel;
pub use self::errors::{CapabilityError, ConfigurationError};
pub use self::events::{DispatchEvent, SkipReason};
pub use self::handler::Handler;
pub use self::ids::{HandlerId, Id, IdMarker, RequestId};
pub use self::outcome::DispatchOutcome;
pub use self::request::Request;
