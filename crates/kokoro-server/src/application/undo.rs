//! Mood-save undo window
//!
//! Saving a mood opens a short window in which the save can be undone,
//! restoring the previous same-date record (or removing the save when none
//! existed). There is exactly one pending cancelable timer: arming a new
//! window aborts the previous one.

use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use kokoro::MoodRecord;

/// How long an undo stays available
pub const UNDO_WINDOW: Duration = Duration::from_secs(2);

struct Pending {
    generation: u64,
    date: NaiveDate,
    previous: Option<MoodRecord>,
    expiry: JoinHandle<()>,
}

/// Single-slot undo buffer with a self-clearing timer
#[derive(Default)]
pub struct MoodUndoBuffer {
    pending: Arc<Mutex<Option<Pending>>>,
    generation: Mutex<u64>,
}

impl MoodUndoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the undo window for a save on `date`. `previous` is the record
    /// the undo would restore (None removes the save outright). Any
    /// previously pending window is cancelled.
    pub fn arm(&self, date: NaiveDate, previous: Option<MoodRecord>) {
        let generation = {
            let mut counter = self.generation.lock().expect("undo buffer poisoned");
            *counter += 1;
            *counter
        };

        let slot = Arc::clone(&self.pending);
        let expiry = tokio::spawn(async move {
            tokio::time::sleep(UNDO_WINDOW).await;
            let mut pending = slot.lock().expect("undo buffer poisoned");
            if pending.as_ref().is_some_and(|p| p.generation == generation) {
                *pending = None;
            }
        });

        let mut pending = self.pending.lock().expect("undo buffer poisoned");
        if let Some(stale) = pending.take() {
            stale.expiry.abort();
        }
        *pending = Some(Pending {
            generation,
            date,
            previous,
            expiry,
        });
    }

    /// Consume the pending undo, if its window is still open.
    pub fn take(&self) -> Option<(NaiveDate, Option<MoodRecord>)> {
        let mut pending = self.pending.lock().expect("undo buffer poisoned");
        pending.take().map(|p| {
            p.expiry.abort();
            (p.date, p.previous)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, score: i8) -> MoodRecord {
        MoodRecord {
            date: date.parse().unwrap(),
            score,
            emoji: "🙂".to_string(),
        }
    }

    #[tokio::test]
    async fn test_take_within_window() {
        let buffer = MoodUndoBuffer::new();
        buffer.arm("2025-06-01".parse().unwrap(), Some(record("2025-06-01", 2)));

        let (date, previous) = buffer.take().expect("undo should be pending");
        assert_eq!(date.to_string(), "2025-06-01");
        assert_eq!(previous.unwrap().score, 2);
        // Consumed: a second take finds nothing
        assert!(buffer.take().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_expires() {
        let buffer = MoodUndoBuffer::new();
        buffer.arm("2025-06-01".parse().unwrap(), None);

        tokio::time::sleep(UNDO_WINDOW + Duration::from_millis(100)).await;
        tokio::task::yield_now().await;

        assert!(buffer.take().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_save_replaces_pending_undo() {
        let buffer = MoodUndoBuffer::new();
        buffer.arm("2025-06-01".parse().unwrap(), Some(record("2025-06-01", 1)));
        // Overlapping save: the earlier timer must not clear the new window
        buffer.arm("2025-06-01".parse().unwrap(), Some(record("2025-06-01", 3)));

        tokio::time::sleep(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;

        let (_, previous) = buffer.take().expect("newest undo should be pending");
        assert_eq!(previous.unwrap().score, 3);
    }
}
