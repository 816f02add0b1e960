use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerStatus {
    Armed,
    Fired,
    Cancelled,
}

/// One-shot deadline owned by a pressed gesture.
///
/// The timer does not schedule anything itself; its owner polls it with the
/// current time. Firing and cancelling both happen at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongPressTimer {
    deadline: Duration,
    status: TimerStatus,
}

impl LongPressTimer {
    pub fn arm(now: Duration, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            status: TimerStatus::Armed,
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.status == TimerStatus::Armed
    }

    pub fn has_fired(&self) -> bool {
        self.status == TimerStatus::Fired
    }

    /// Disarm. No-op once fired or already cancelled.
    pub fn cancel(&mut self) {
        if self.status == TimerStatus::Armed {
            self.status = TimerStatus::Cancelled;
        }
    }

    /// Returns true exactly once, the first time `now` reaches the deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.status == TimerStatus::Armed && now >= self.deadline {
            self.status = TimerStatus::Fired;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(600);

    #[test]
    fn test_fires_once_at_deadline() {
        let mut timer = LongPressTimer::arm(Duration::from_millis(100), DELAY);
        assert!(!timer.poll(Duration::from_millis(699)));
        assert!(timer.poll(Duration::from_millis(700)));
        assert!(!timer.poll(Duration::from_millis(800)));
        assert!(timer.has_fired());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timer = LongPressTimer::arm(Duration::ZERO, DELAY);
        timer.cancel();
        assert!(!timer.poll(Duration::from_secs(5)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = LongPressTimer::arm(Duration::ZERO, DELAY);
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.has_fired());
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let mut timer = LongPressTimer::arm(Duration::ZERO, DELAY);
        assert!(timer.poll(DELAY));
        timer.cancel();
        assert!(timer.has_fired());
    }
}
