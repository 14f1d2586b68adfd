//! Entry id assignment

use crate::types::EntryId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// How fresh ids are derived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdStrategy {
    /// Milliseconds since the Unix epoch
    Clock,
    /// Plain counter
    Counter,
}

/// Source of strictly increasing entry ids.
///
/// With [`IdStrategy::Clock`] an id is the current wall-clock millisecond,
/// bumped past the previous id when two entries land in the same
/// millisecond or the clock steps backwards. Either way an id is never
/// handed out twice by the same source.
#[derive(Debug)]
pub struct IdSource {
    strategy: IdStrategy,
    last: AtomicU64,
}

impl IdSource {
    /// Clock-based ids
    pub fn clock() -> Self {
        Self {
            strategy: IdStrategy::Clock,
            last: AtomicU64::new(0),
        }
    }

    /// Counter ids, the first one being `start`
    pub fn counter(start: u64) -> Self {
        Self {
            strategy: IdStrategy::Counter,
            last: AtomicU64::new(start.saturating_sub(1)),
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Hand out the next id
    pub fn next_id(&self) -> EntryId {
        let floor = match self.strategy {
            IdStrategy::Clock => now_millis(),
            IdStrategy::Counter => 0,
        };
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = floor.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return EntryId(candidate),
                Err(observed) => current = observed,
            }
        }
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::clock()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
