//! EventSink port - イベント記録の抽象化
//!
//! Dispatcher はイベントを保持せず、発生するたびにここへ渡します。
//!
//! # 実装（impls::event_sink）
//! - NoopEventSink: 何もしない
//! - TracingEventSink: tracing でログ出力
//! - RecordingEventSink: メモリに記録（テスト、レポート用）

use std::sync::Arc;

use crate::domain::DispatchEvent;

/// EventSink は DispatchEvent を発生順に受け取る
///
/// # 制約
/// - `emit` はディスパッチと同じスレッドで同期的に呼ばれる（失敗しない、長く止めない）
///
/// # Thread Safety
/// - `Send + Sync` を要求（共有された Dispatcher から並行に呼ばれる）
/// - `&S` と `Arc<S>` にも実装済み（Dispatcher に渡した後も呼び出し側で参照できる）
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &DispatchEvent);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn emit(&self, event: &DispatchEvent) {
        (**self).emit(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, event: &DispatchEvent) {
        (**self).emit(event)
    }
}
