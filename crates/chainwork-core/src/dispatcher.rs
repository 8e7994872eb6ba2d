//! Dispatcher - チェーンを先頭から走査してリクエストを割り当てる
//!
//! # アルゴリズム
//! 1. 先頭の handler から順に見る
//! 2. capability が足りなければ Skipped(Underqualified)
//! 3. compare-and-set で busy を取れなければ Skipped(Busy)
//! 4. 取れたら Claimed で終了（以降の handler は見ない）
//! 5. 最後まで誰もいなければ Unresolved
//!
//! # Tie-break
//! チェーン上の位置だけで決まる。後ろにいる senior は、前の junior が
//! 引き受けられる仕事を見ることはない。

use tracing::debug;

use crate::domain::{DispatchEvent, DispatchOutcome, Handler, Request};
use crate::ports::EventSink;

/// Dispatcher はリクエストをチェーンに流し、各ステップを `S` に通知する
///
/// # Thread Safety
/// - `dispatch` は `&self` と共有スライスを取るので、複数スレッドから同時に呼べる
/// - handler ごとの compare-and-set により、同じ handler が二度 claim されることはない
pub struct Dispatcher<S> {
    sink: S,
}

impl<S: EventSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Route one request.
    ///
    /// On a claim the handler becomes busy for good, `request` is marked
    /// resolved, and the walk stops. On exhaustion `request` is left as it
    /// was and `Unresolved` is returned.
    ///
    /// Callers must not pass a request that is already resolved; it would be
    /// handed to a second handler.
    pub fn dispatch(&self, request: &mut Request, chain: &[Handler]) -> DispatchOutcome {
        let request_id = request.id();
        let required = request.required_capability();
        debug!(
            request = %request_id,
            label = request.label(),
            required = %required,
            handlers = chain.len(),
            "dispatching"
        );

        for handler in chain {
            match handler.try_claim(required) {
                Ok(()) => {
                    request.mark_resolved();
                    self.sink.emit(&DispatchEvent::Claimed {
                        handler_id: handler.id(),
                        request_id,
                    });
                    return DispatchOutcome::claimed(handler.id());
                }
                Err(reason) => self.sink.emit(&DispatchEvent::Skipped {
                    handler_id: handler.id(),
                    request_id,
                    reason,
                }),
            }
        }

        self.sink.emit(&DispatchEvent::Unresolved { request_id });
        DispatchOutcome::Unresolved
    }

    /// Route a batch in order; later requests see the claims of earlier ones.
    pub fn dispatch_all(&self, requests: &mut [Request], chain: &[Handler]) -> Vec<DispatchOutcome> {
        requests
            .iter_mut()
            .map(|request| self.dispatch(request, chain))
            .collect()
    }
}
