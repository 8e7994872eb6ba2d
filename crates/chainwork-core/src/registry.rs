//! Registry - handler の順序付きチェーン
//!
//! # 設計
//! - handler は Chain が所有する 1 本の `Vec` に並ぶ（arena + index）
//! - 走査順 = Vec の順序。handler 同士は互いを参照しない
//! - Dispatcher はスライスだけを受け取ればよい

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{ConfigurationError, Handler, HandlerId};
use crate::status::ChainStatus;

/// Chain は空でない handler の順序付き列
///
/// # 設計
/// - 構築時に一度だけ検証（空、ID 重複）
/// - ディスパッチ中は読み取りのみ（変わるのは各 handler の atomic な busy だけ）
///
/// # Thread Safety
/// - ロックなしでスレッド間共有できる（`Arc<Chain>`）
#[derive(Debug)]
pub struct Chain {
    handlers: Vec<Handler>,
}

impl Chain {
    /// Build a chain, keeping the input order.
    ///
    /// Fails on an empty sequence or when two handlers share an id.
    pub fn build(handlers: Vec<Handler>) -> Result<Self, ConfigurationError> {
        if handlers.is_empty() {
            return Err(ConfigurationError::EmptyChain);
        }

        let mut seen = HashSet::with_capacity(handlers.len());
        for handler in &handlers {
            if !seen.insert(handler.id()) {
                return Err(ConfigurationError::DuplicateHandler(handler.id()));
            }
        }

        debug!(handlers = handlers.len(), "chain built");
        Ok(Self { handlers })
    }

    /// Handlers in traversal order.
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Handler> {
        self.handlers.iter()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Always false for a built chain; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Handler> {
        self.handlers.get(index)
    }

    /// Chain position of a handler.
    pub fn position(&self, id: HandlerId) -> Option<usize> {
        self.handlers.iter().position(|h| h.id() == id)
    }

    pub fn find(&self, id: HandlerId) -> Option<&Handler> {
        self.handlers.iter().find(|h| h.id() == id)
    }

    pub fn status(&self) -> ChainStatus {
        ChainStatus::from_handlers(&self.handlers)
    }
}

impl AsRef<[Handler]> for Chain {
    fn as_ref(&self) -> &[Handler] {
        &self.handlers
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Handler;
    type IntoIter = std::slice::Iter<'a, Handler>;

    fn into_iter(self) -> Self::IntoIter {
        self.handlers.iter()
    }
}

/// ChainBuilder は Chain を組み立てる
///
/// # 使用例
///
/// ```ignore
/// let chain = ChainBuilder::new()
///     .handler(Handler::new(id_gen.generate_handler_id(), "Alper", CapabilityLevel::JUNIOR))
///     .handler(Handler::new(id_gen.generate_handler_id(), "Matej", CapabilityLevel::SENIOR))
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ChainBuilder {
    handlers: Vec<Handler>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler at the end of the chain.
    pub fn handler(mut self, handler: Handler) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn handlers(mut self, handlers: impl IntoIterator<Item = Handler>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    pub fn build(self) -> Result<Chain, ConfigurationError> {
        Chain::build(self.handlers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CapabilityLevel;
    use ulid::Ulid;

    fn handler(name: &str, capability: CapabilityLevel) -> Handler {
        Handler::new(HandlerId::from_ulid(Ulid::new()), name, capability)
    }

    #[test]
    fn build_preserves_input_order() {
        let chain = Chain::build(vec![
            handler("Alper", CapabilityLevel::JUNIOR),
            handler("Yani", CapabilityLevel::JUNIOR),
            handler("Andreas", CapabilityLevel::SENIOR),
        ])
        .unwrap();

        let names: Vec<&str> = chain.iter().map(Handler::name).collect();
        assert_eq!(names, vec!["Alper", "Yani", "Andreas"]);
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
    }

    #[test]
    fn build_rejects_empty_sequence() {
        let err = Chain::build(Vec::new()).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyChain);
    }

    #[test]
    fn build_rejects_duplicate_ids() {
        let id = HandlerId::from_ulid(Ulid::new());
        let err = Chain::build(vec![
            Handler::new(id, "Alper", CapabilityLevel::JUNIOR),
            Handler::new(id, "Alper again", CapabilityLevel::SENIOR),
        ])
        .unwrap_err();

        assert_eq!(err, ConfigurationError::DuplicateHandler(id));
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn lookup_by_id_and_index() {
        let andreas = handler("Andreas", CapabilityLevel::SENIOR);
        let andreas_id = andreas.id();
        let chain = Chain::build(vec![handler("Alper", CapabilityLevel::JUNIOR), andreas]).unwrap();

        assert_eq!(chain.position(andreas_id), Some(1));
        assert_eq!(chain.find(andreas_id).map(Handler::name), Some("Andreas"));
        assert_eq!(chain.get(0).map(Handler::name), Some("Alper"));
        assert!(chain.get(2).is_none());
        assert_eq!(chain.position(HandlerId::from_ulid(Ulid::new())), None);
    }

    #[test]
    fn builder_appends_in_call_order() {
        let chain = ChainBuilder::new()
            .handler(handler("Alper", CapabilityLevel::JUNIOR))
            .handlers([
                handler("Yani", CapabilityLevel::JUNIOR),
                handler("Matej", CapabilityLevel::SENIOR),
            ])
            .build()
            .unwrap();

        let names: Vec<&str> = (&chain).into_iter().map(Handler::name).collect();
        assert_eq!(names, vec!["Alper", "Yani", "Matej"]);
    }

    #[test]
    fn builder_without_handlers_fails() {
        assert!(matches!(
            ChainBuilder::new().build(),
            Err(ConfigurationError::EmptyChain)
        ));
    }
}
