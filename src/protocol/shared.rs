use crate::protocol::decoder::Decoder;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Decoder whose handlers can change while other threads decode.
///
/// Readers take an immutable snapshot and decode from it without holding any
/// lock. Writers copy the current table, modify the copy, and publish it; a
/// reader holding an older snapshot keeps decoding with the old handlers.
#[derive(Debug, Clone)]
pub struct SharedDecoder {
    current: Arc<RwLock<Arc<Decoder>>>,
}

impl Default for SharedDecoder {
    fn default() -> Self {
        Self::new(Decoder::new())
    }
}

impl SharedDecoder {
    pub fn new(decoder: Decoder) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(decoder))),
        }
    }

    /// Current table.
    pub fn snapshot(&self) -> Arc<Decoder> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Apply `change` to a copy of the table and publish the copy.
    ///
    /// The published table is replaced only after `change` returns. If it
    /// panics, the previous table stays current and later calls proceed
    /// normally.
    pub fn update<F>(&self, change: F)
    where
        F: FnOnce(&mut Decoder),
    {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        let mut next = Decoder::clone(&current);
        change(&mut next);
        debug!(handlers = next.registered_count(), "publishing decoder snapshot");
        *current = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;
    use crate::protocol::event::Event;
    use crate::protocol::messages::{LevelTransition, LobbyStart};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_old_snapshot_keeps_old_handlers() {
        let shared = SharedDecoder::default();
        shared.update(|d| d.register_handler(0x0B, |_| LobbyStart { countdown: 3 }.into()));
        let before = shared.snapshot();

        shared.update(|d| d.register_handler(0x0B, |_| LevelTransition { level_number: 2 }.into()));
        let after = shared.snapshot();

        assert_eq!(before.decode(&[0x0B]), Event::LobbyStart(LobbyStart { countdown: 3 }));
        assert_eq!(
            after.decode(&[0x0B]),
            Event::LevelTransition(LevelTransition { level_number: 2 })
        );
    }

    #[test]
    fn test_clones_share_the_table() {
        let shared = SharedDecoder::default();
        let other = shared.clone();
        other.update(|d| d.register_handler(0x01, |_| Event::Empty));
        assert!(shared.snapshot().is_registered(0x01));
    }

    #[test]
    fn test_panicking_update_keeps_previous_table() {
        let shared = SharedDecoder::default();
        shared.update(|d| d.register_handler(0x0B, |_| LobbyStart { countdown: 3 }.into()));

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            shared.update(|d| {
                d.unregister(0x0B);
                panic!("handler setup failed");
            });
        }));
        assert!(outcome.is_err());

        assert_eq!(
            shared.snapshot().decode(&[0x0B]),
            Event::LobbyStart(LobbyStart { countdown: 3 })
        );
        shared.update(|d| d.register_handler(0x01, |_| Event::Empty));
        let after = shared.snapshot();
        assert!(after.is_registered(0x01));
        assert!(after.is_registered(0x0B));
    }
}
