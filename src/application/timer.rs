//! Cancellable one-shot timer bookkeeping.
//!
//! A `TimerSlot` lives inside the state it guards. Arming it hands out a
//! ticket; the spawned task must present that ticket to `fire` while holding
//! the same lock. Re-arming or cancelling changes the current ticket, so a
//! task that already woke up but lost the race for the lock becomes a no-op.

use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub(crate) struct TimerSlot {
    ticket: u64,
    pending: Option<JoinHandle<()>>,
}

impl TimerSlot {
    /// Cancels any pending timer and returns the ticket for a new one.
    pub(crate) fn arm(&mut self) -> u64 {
        self.cancel();
        self.ticket
    }

    /// Registers the task spawned for `ticket`. A handle for an outdated
    /// ticket is aborted immediately.
    pub(crate) fn set_handle(&mut self, ticket: u64, handle: JoinHandle<()>) {
        if ticket == self.ticket {
            self.pending = Some(handle);
        } else {
            handle.abort();
        }
    }

    /// Invalidates the current ticket. Returns true if a timer was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.ticket = self.ticket.wrapping_add(1);
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Claims the pending timer for `ticket`. Returns false when the ticket
    /// is stale or the timer was already claimed.
    pub(crate) fn fire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.pending.is_none() {
            return false;
        }
        // Dropping the handle detaches the task that is calling us.
        self.pending = None;
        true
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_task() -> JoinHandle<()> {
        tokio::spawn(std::future::pending::<()>())
    }

    #[tokio::test]
    async fn fire_claims_current_ticket_once() {
        let mut slot = TimerSlot::default();
        let ticket = slot.arm();
        slot.set_handle(ticket, idle_task());

        assert!(slot.is_pending());
        assert!(slot.fire(ticket));
        assert!(!slot.fire(ticket));
        assert!(!slot.is_pending());
    }

    #[tokio::test]
    async fn cancel_makes_ticket_stale() {
        let mut slot = TimerSlot::default();
        let ticket = slot.arm();
        slot.set_handle(ticket, idle_task());

        assert!(slot.cancel());
        assert!(!slot.fire(ticket));
        assert!(!slot.cancel());
    }

    #[tokio::test]
    async fn rearming_supersedes_previous_timer() {
        let mut slot = TimerSlot::default();
        let first = slot.arm();
        let first_handle = idle_task();
        slot.set_handle(first, first_handle);

        let second = slot.arm();
        slot.set_handle(second, idle_task());

        assert_ne!(first, second);
        assert!(!slot.fire(first));
        assert!(slot.fire(second));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_aborts_the_task() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;
        use std::time::Duration;

        let fired = Arc::new(AtomicBool::new(false));
        let mut slot = TimerSlot::default();
        let ticket = slot.arm();
        let flag = Arc::clone(&fired);
        slot.set_handle(
            ticket,
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(1)).await;
                flag.store(true, Ordering::SeqCst);
            }),
        );

        slot.cancel();
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(!fired.load(Ordering::SeqCst));
    }
}
