//! Errors - エラー型
//!
//! # 分類
//! - ConfigurationError: チェーン構築時のエラー（空、重複）
//! - CapabilityError: capability の解析エラー
//!
//! 引き受け手がいないことはエラーではなく `DispatchOutcome::Unresolved` で返します。

use thiserror::Error;

use super::ids::HandlerId;

/// The handler sequence cannot form a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("a chain needs at least one handler")]
    EmptyChain,

    #[error("handler {0} appears more than once in the chain")]
    DuplicateHandler(HandlerId),
}

/// A capability level could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("capability rank must be at least 1")]
    ZeroRank,

    #[error("unknown capability level '{0}'")]
    Unknown(String),
}
