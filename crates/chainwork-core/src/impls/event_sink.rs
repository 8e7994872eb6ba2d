//! EventSink implementations.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::domain::{DispatchEvent, RequestId};
use crate::ports::EventSink;

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &DispatchEvent) {}
}

/// Logs events through `tracing`.
///
/// Claims go to `info`, skips to `debug`, and an unresolved request to
/// `warn` since someone should look at it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &DispatchEvent) {
        match event {
            DispatchEvent::Claimed {
                handler_id,
                request_id,
            } => info!(handler = %handler_id, request = %request_id, "request claimed"),
            DispatchEvent::Skipped {
                handler_id,
                request_id,
                reason,
            } => debug!(
                handler = %handler_id,
                request = %request_id,
                reason = ?reason,
                "handler skipped"
            ),
            DispatchEvent::Unresolved { request_id } => {
                warn!(request = %request_id, "no handler available")
            }
        }
    }
}

/// RecordingEventSink はイベントを発生順にメモリへ記録
///
/// # 用途
/// - テストでのイベント検証
/// - CLI のチケットごとのレポート（`drain` で 1 件分ずつ取り出す）
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<DispatchEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<DispatchEvent> {
        self.lock().clone()
    }

    /// Events belonging to one request; the skip trace for an unresolved
    /// request comes from here.
    pub fn events_for(&self, request_id: RequestId) -> Vec<DispatchEvent> {
        self.lock()
            .iter()
            .filter(|event| event.request_id() == request_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<DispatchEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DispatchEvent>> {
        // a panicking emitter cannot leave a half-written Vec behind
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &DispatchEvent) {
        self.lock().push(event.clone());
    }
}
