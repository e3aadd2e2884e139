//! # Event Queue
//!
//! The single merge point between the terminal input path and the device
//! worker. Any number of producers push concurrently; the main loop is the
//! only consumer. FIFO holds per producer; no ordering is promised across
//! producers.
//!
//! Two push disciplines, one per producer kind:
//!
//! - [`EventSender::push`] never blocks. The worker must not stall on a
//!   slow consumer, so a full queue drops the notification; a later one
//!   re-triggers the repaint.
//! - [`EventSender::send`] blocks on a full queue. Keystrokes are not
//!   droppable, and the input pump has nothing better to do than wait.

use std::sync::mpsc::{Receiver, RecvError, SyncSender, TrySendError, sync_channel};

use log::warn;

use crate::core::event::Event;

/// What happened to a non-blocking push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Queued,
    Dropped,
}

/// Cloneable producer handle.
#[derive(Clone)]
pub struct EventSender {
    tx: SyncSender<Event>,
}

impl EventSender {
    /// Non-blocking push. A full queue (or a vanished consumer) drops the
    /// event and reports it.
    pub fn push(&self, event: Event) -> PushOutcome {
        match self.tx.try_send(event) {
            Ok(()) => PushOutcome::Queued,
            Err(TrySendError::Full(dropped)) => {
                warn!("event queue full, dropping {dropped:?}");
                PushOutcome::Dropped
            }
            Err(TrySendError::Disconnected(_)) => PushOutcome::Dropped,
        }
    }

    /// Blocking push for lossless producers. Returns `false` once the
    /// consumer is gone, which is the producer's cue to wind down.
    pub fn send(&self, event: Event) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Consumer handle. Exactly one exists per queue.
pub struct EventQueue {
    rx: Receiver<Event>,
}

impl EventQueue {
    /// Sleep until an event arrives. Errs only when every producer has
    /// hung up, at which point nothing further can ever arrive.
    pub fn blocking_pop(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }

    /// Drain one buffered event without blocking.
    pub fn try_pop(&self) -> Option<Event> {
        self.rx.try_recv().ok()
    }
}

/// Build a queue with the given capacity.
pub fn channel(capacity: usize) -> (EventSender, EventQueue) {
    let (tx, rx) = sync_channel(capacity);
    (EventSender { tx }, EventQueue { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Key;

    #[test]
    fn test_fifo_within_one_producer() {
        let (tx, queue) = channel(16);
        for c in ['a', 'b', 'c'] {
            assert_eq!(tx.push(Event::KeyPress(Key::char(c))), PushOutcome::Queued);
        }
        assert_eq!(queue.try_pop(), Some(Event::KeyPress(Key::char('a'))));
        assert_eq!(queue.try_pop(), Some(Event::KeyPress(Key::char('b'))));
        assert_eq!(queue.try_pop(), Some(Event::KeyPress(Key::char('c'))));
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_push_on_full_queue_drops_without_blocking() {
        let (tx, queue) = channel(2);
        assert_eq!(tx.push(Event::Redraw), PushOutcome::Queued);
        assert_eq!(tx.push(Event::Redraw), PushOutcome::Queued);
        // Third push finds the buffer full and must return, not block.
        assert_eq!(tx.push(Event::Redraw), PushOutcome::Dropped);
        // The buffered two are intact.
        assert_eq!(queue.try_pop(), Some(Event::Redraw));
        assert_eq!(queue.try_pop(), Some(Event::Redraw));
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_push_after_consumer_dropped_reports_dropped() {
        let (tx, queue) = channel(4);
        drop(queue);
        assert_eq!(tx.push(Event::Redraw), PushOutcome::Dropped);
        assert!(!tx.send(Event::Redraw));
    }

    #[test]
    fn test_blocking_pop_wakes_on_cross_thread_push() {
        let (tx, queue) = channel(4);
        let handle = std::thread::spawn(move || {
            tx.send(Event::WorkerStatus(true));
        });
        assert_eq!(queue.blocking_pop(), Ok(Event::WorkerStatus(true)));
        handle.join().unwrap();
    }

    #[test]
    fn test_blocking_pop_errs_when_all_producers_gone() {
        let (tx, queue) = channel(4);
        drop(tx);
        assert!(queue.blocking_pop().is_err());
    }

    #[test]
    fn test_concurrent_producers_preserve_their_own_order() {
        let (tx, queue) = channel(256);
        let keys = tx.clone();
        let key_thread = std::thread::spawn(move || {
            for i in 0..50u16 {
                keys.send(Event::Resize(i, 0));
            }
        });
        let status_thread = std::thread::spawn(move || {
            for i in 0..50u16 {
                tx.send(Event::WorkerStatus(i % 2 == 0));
            }
        });
        key_thread.join().unwrap();
        status_thread.join().unwrap();

        let mut resizes = Vec::new();
        let mut statuses = Vec::new();
        while let Some(event) = queue.try_pop() {
            match event {
                Event::Resize(i, _) => resizes.push(i),
                Event::WorkerStatus(active) => statuses.push(active),
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert_eq!(resizes, (0..50).collect::<Vec<_>>());
        assert_eq!(statuses.len(), 50);
        assert!(statuses.iter().step_by(2).all(|&a| a));
    }
}
