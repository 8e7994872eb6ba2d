//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **NoopEventSink**
//! - **TracingEventSink**
//! - **RecordingEventSink**

pub mod event_sink;

pub use self::event_sink::{NoopEventSink, RecordingEventSink, TracingEventSink};
