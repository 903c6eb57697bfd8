/*
 * Clock abstraction. The state machine never reads a clock itself: the owner
 * passes `now` in and gets the next deadline back. This keeps the phase logic
 * testable on the host with simulated time, while the firmware plugs in
 * embassy-time.
 */

/// A span of time, as used for the dwell unit and debounce.
pub trait TimeDuration: Copy + PartialEq {
    const ZERO: Self;

    fn from_millis(millis: u64) -> Self;
}

/// A point in time on a monotonic clock.
pub trait TimeInstant: Copy + PartialOrd {
    type Duration: TimeDuration;

    /// `None` when the clock would wrap.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

/// The earlier of two optional deadlines.
pub(crate) fn earliest<I: TimeInstant>(a: Option<I>, b: Option<I>) -> Option<I> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b < a { b } else { a }),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
