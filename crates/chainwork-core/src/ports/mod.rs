//! Ports - 抽象化レイヤー
//!
//! ディスパッチの中核と外部の協調者（ログ、メトリクス、テスト）との境界を定義します。
//!
//! # 含まれる trait
//! - **EventSink**: DispatchEvent の受け取り手
//! - **Clock**: 現在時刻（ID の timestamp 部分）
//! - **IdGenerator**: RequestId / HandlerId の生成

pub mod clock;
pub mod event_sink;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
