//! Handlers: the links of a chain.

use std::sync::atomic::{AtomicBool, Ordering};

use super::capability::CapabilityLevel;
use super::events::SkipReason;
use super::ids::HandlerId;

/// Handler は生涯で最大 1 件のリクエストを引き受ける
///
/// # busy フラグ
/// - `AtomicBool`。複数の dispatcher が同じ handler を取り合っても、
///   [`Handler::try_claim`] の compare-and-set で勝つのは 1 つだけ
/// - 一度立ったら戻らない（解放の仕組みはない）
#[derive(Debug)]
pub struct Handler {
    id: HandlerId,
    name: String,
    capability: CapabilityLevel,
    busy: AtomicBool,
}

impl Handler {
    pub fn new(id: HandlerId, name: impl Into<String>, capability: CapabilityLevel) -> Self {
        Self {
            id,
            name: name.into(),
            capability,
            busy: AtomicBool::new(false),
        }
    }

    /// Start the handler in the given busy state.
    pub fn with_busy(self, busy: bool) -> Self {
        self.busy.store(busy, Ordering::Relaxed);
        self
    }

    pub fn id(&self) -> HandlerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capability(&self) -> CapabilityLevel {
        self.capability
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the handler for work requiring `required`.
    ///
    /// Capability is checked first, so a handler that is both busy and
    /// underqualified reports `Underqualified`.
    pub(crate) fn try_claim(&self, required: CapabilityLevel) -> Result<(), SkipReason> {
        if !self.capability.satisfies(required) {
            return Err(SkipReason::Underqualified);
        }
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| SkipReason::Busy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;

    fn handler(capability: CapabilityLevel) -> Handler {
        Handler::new(HandlerId::from_ulid(Ulid::new()), "Alper", capability)
    }

    #[test]
    fn claim_marks_handler_busy_once() {
        let h = handler(CapabilityLevel::JUNIOR);

        assert_eq!(h.try_claim(CapabilityLevel::JUNIOR), Ok(()));
        assert!(h.is_busy());
        assert_eq!(h.try_claim(CapabilityLevel::JUNIOR), Err(SkipReason::Busy));
        assert!(h.is_busy());
    }

    #[test]
    fn underqualified_handler_stays_idle() {
        let h = handler(CapabilityLevel::JUNIOR);

        assert_eq!(
            h.try_claim(CapabilityLevel::SENIOR),
            Err(SkipReason::Underqualified)
        );
        assert!(!h.is_busy());
    }

    #[test]
    fn underqualified_wins_over_busy() {
        let h = handler(CapabilityLevel::JUNIOR).with_busy(true);

        assert_eq!(
            h.try_claim(CapabilityLevel::SENIOR),
            Err(SkipReason::Underqualified)
        );
    }
}
