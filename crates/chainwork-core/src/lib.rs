//! chainwork-core
//!
//! Chain of Responsibility 型のディスパッチエンジン。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, capability, request, handler, events, outcome, errors）
//! - **ports**: 抽象化レイヤー（EventSink, Clock, IdGenerator）
//! - **impls**: ports の実装（NoopEventSink, TracingEventSink, RecordingEventSink）
//! - **registry**: Chain / ChainBuilder（handler の順序付き列）
//! - **dispatcher**: Dispatcher（チェーンを先頭から走査）
//! - **status**: ChainStatus（idle / busy の集計）

pub mod domain;
pub mod ports;
pub mod impls;
pub mod registry;
pub mod dispatcher;
pub mod status;

pub use crate::dispatcher::Dispatcher;
pub use crate::domain::{
    CapabilityError, CapabilityLevel, ConfigurationError, DispatchEvent, DispatchOutcome, Handler,
    HandlerId, Request, RequestId, SkipReason,
};
pub use crate::registry::{Chain, ChainBuilder};
pub use crate::status::ChainStatus;
