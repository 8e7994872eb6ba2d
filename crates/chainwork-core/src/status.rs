//! Status views.

use serde::{Deserialize, Serialize};

use crate::domain::Handler;

/// Snapshot of how many handlers are still free.
///
/// # Example
/// ```ignore
/// let status = chain.status();
/// println!("{:?}", status);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStatus {
    pub handlers: usize,
    pub idle: usize,
    pub busy: usize,
}

impl ChainStatus {
    pub fn from_handlers(handlers: &[Handler]) -> Self {
        let busy = handlers.iter().filter(|h| h.is_busy()).count();
        Self {
            handlers: handlers.len(),
            idle: handlers.len() - busy,
            busy,
        }
    }

    /// True when every handler has taken a request.
    pub fn is_saturated(&self) -> bool {
        self.idle == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CapabilityLevel, HandlerId};
    use ulid::Ulid;

    #[test]
    fn counts_idle_and_busy() {
        let handlers = vec![
            Handler::new(HandlerId::from_ulid(Ulid::new()), "Alper", CapabilityLevel::JUNIOR),
            Handler::new(HandlerId::from_ulid(Ulid::new()), "Yani", CapabilityLevel::JUNIOR)
                .with_busy(true),
        ];

        let status = ChainStatus::from_handlers(&handlers);
        assert_eq!(status, ChainStatus { handlers: 2, idle: 1, busy: 1 });
        assert!(!status.is_saturated());
    }

    #[test]
    fn empty_slice_is_saturated() {
        let status = ChainStatus::from_handlers(&[]);
        assert_eq!(status, ChainStatus::default());
        assert!(status.is_saturated());
    }
}
