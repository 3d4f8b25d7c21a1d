//! Trailing-edge debouncer, independent of any timer implementation.
//!
//! The caller owns the timer. Each `schedule` replaces the pending value and
//! hands out a new ticket; when a timer started for a ticket elapses the
//! caller calls `fire(ticket)`, which yields the value only if that ticket is
//! still the latest one. Superseded timers therefore fire nothing, and the
//! pending value is delivered exactly once.

/// Identifies one scheduled edit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Replace the pending value, invalidating every earlier ticket
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Take the pending value if `ticket` is the latest one
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Take the pending value regardless of ticket
    pub fn flush(&mut self) -> Option<T> {
        self.generation += 1;
        self.pending.take()
    }

    /// Drop the pending value; outstanding tickets fire nothing
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_edit_fires_once() {
        let mut d = Debouncer::new();
        let t = d.schedule("a");
        assert_eq!(d.fire(t), Some("a"));
        assert_eq!(d.fire(t), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_rapid_edits_coalesce_to_last() {
        let mut d = Debouncer::new();
        let t1 = d.schedule("h");
        let t2 = d.schedule("he");
        let t3 = d.schedule("hel");

        // Timers elapse in order; only the latest delivers
        assert_eq!(d.fire(t1), None);
        assert_eq!(d.fire(t2), None);
        assert_eq!(d.fire(t3), Some("hel"));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut d = Debouncer::new();
        let t = d.schedule(1);
        d.cancel();
        assert_eq!(d.fire(t), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_flush_delivers_and_invalidates_ticket() {
        let mut d = Debouncer::new();
        let t = d.schedule(7);
        assert_eq!(d.pending(), Some(&7));
        assert_eq!(d.flush(), Some(7));
        assert_eq!(d.fire(t), None);
    }

    #[test]
    fn test_schedule_after_fire_starts_fresh() {
        let mut d = Debouncer::new();
        let t1 = d.schedule(1);
        assert_eq!(d.fire(t1), Some(1));
        let t2 = d.schedule(2);
        assert_ne!(t1, t2);
        assert_eq!(d.fire(t2), Some(2));
    }
}
