//! Report - チケットごとの作業ログ
//!
//! Dispatcher が出す `DispatchEvent` を開発者名つきの 1 行に変換します。
//! イベントは handler_id（ULID）しか持たないので、名前は `Chain::find` で引きます。
//!
//! # 出力例
//! ```text
//! Alper(junior) is busy
//! Yani(junior) does not have enough experience for this ticket
//! Andreas(senior) has started to work on ticket called: Fix memory leaks
//! ```

use chainwork_core::impls::{RecordingEventSink, TracingEventSink};
use chainwork_core::ports::EventSink;
use chainwork_core::{Chain, DispatchEvent, DispatchOutcome, Dispatcher, HandlerId, Request, SkipReason};

/// 1 チケット分の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketReport {
    pub ticket: String,
    pub outcome: DispatchOutcome,
    /// チェーン順のイベント（skip 理由を含む）
    pub lines: Vec<String>,
}

/// チケットを順番に処理し、各チケットのトレースを返す
///
/// 同じイベントは `TracingEventSink` にも流すので、`RUST_LOG` での構造化ログも残ります。
pub fn work_through(chain: &Chain, tickets: &mut [Request]) -> Vec<TicketReport> {
    let recorder = RecordingEventSink::new();
    let dispatcher = Dispatcher::new(&recorder);

    tickets
        .iter_mut()
        .map(|ticket| {
            let outcome = dispatcher.dispatch(ticket, chain.handlers());
            let ticket: &Request = ticket;
            let lines = recorder
                .drain()
                .iter()
                .map(|event| {
                    TracingEventSink.emit(event);
                    describe(chain, ticket, event)
                })
                .collect();
            TicketReport {
                ticket: ticket.label().to_string(),
                outcome,
                lines,
            }
        })
        .collect()
}

fn describe(chain: &Chain, ticket: &Request, event: &DispatchEvent) -> String {
    match event {
        DispatchEvent::Claimed { handler_id, .. } => format!(
            "{} has started to work on ticket called: {}",
            developer(chain, *handler_id),
            ticket.label()
        ),
        DispatchEvent::Skipped {
            handler_id,
            reason: SkipReason::Busy,
            ..
        } => format!("{} is busy", developer(chain, *handler_id)),
        DispatchEvent::Skipped {
            handler_id,
            reason: SkipReason::Underqualified,
            ..
        } => format!(
            "{} does not have enough experience for this ticket",
            developer(chain, *handler_id)
        ),
        DispatchEvent::Unresolved { .. } => "No one is available for this ticket".to_string(),
    }
}

fn developer(chain: &Chain, handler_id: HandlerId) -> String {
    match chain.find(handler_id) {
        Some(handler) => format!("{}({})", handler.name(), handler.capability()),
        None => handler_id.to_string(),
    }
}
