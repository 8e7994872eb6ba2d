//! Domain identifiers (strongly-typed IDs).
//!
//! # ULID ベースの ID + ジェネリック実装
//! Request と Handler の ID は ULID を `Id<T>` で包んだものです。
//! `T` は PhantomData のマーカー型で、実行時にはメモリを消費しません。
//!
//! ## ULID の特性
//! - **時刻でソート可能**: イベントログが生成順に並ぶ
//! - **分散生成可能**: 中央のカウンタが不要
//!
//! ## Phantom Type パターン
//! - RequestId と HandlerId は別の型なので混同できない
//! - 実装は 1 つ（Display のプレフィックスだけがマーカーごとに異なる）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"req-", "handler-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    /// Prefix used by `Display` (e.g. "req-").
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
///
/// # Serialize
/// - `#[serde(transparent)]` で ULID 文字列そのものとして出力
/// - マーカーはワイヤ形式に含まれない
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Marker for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestKind {}

impl IdMarker for RequestKind {
    fn prefix() -> &'static str {
        "req-"
    }
}

/// Marker for handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandlerKind {}

impl IdMarker for HandlerKind {
    fn prefix() -> &'static str {
        "handler-"
    }
}

/// Identifier of a request travelling through a chain.
pub type RequestId = Id<RequestKind>;

/// Identifier of a handler within a chain.
pub type HandlerId = Id<HandlerKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_kind_prefix() {
        let ulid = Ulid::new();

        let request = RequestId::from_ulid(ulid);
        let handler = HandlerId::from_ulid(ulid);

        assert_eq!(request.as_ulid(), ulid);
        assert_eq!(handler.as_ulid(), ulid);
        assert_eq!(request.to_string(), format!("req-{ulid}"));
        assert_eq!(handler.to_string(), format!("handler-{ulid}"));

        // let _: HandlerId = request; // <- does not compile
    }

    #[test]
    fn ulid_ids_are_sortable() {
        let id1 = RequestId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = RequestId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id3 = RequestId::from_ulid(Ulid::new());

        assert!(id1 < id2);
        assert!(id2 < id3);
    }

    #[test]
    fn ids_serialize_as_bare_ulid_string() {
        let ulid = Ulid::new();
        let id = HandlerId::from(ulid);

        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, format!("\"{ulid}\""));

        let back: HandlerId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn phantom_marker_is_zero_sized() {
        use std::mem::size_of;

        assert_eq!(size_of::<RequestId>(), size_of::<Ulid>());
        assert_eq!(size_of::<HandlerId>(), 16);
    }
}
