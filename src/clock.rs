/*
 * embassy-time behind the state machine's clock traits.
 */

use embassy_time::{Duration, Instant};
use tricolor::{TimeDuration, TimeInstant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EmbassyDuration(pub Duration);

impl TimeDuration for EmbassyDuration {
    const ZERO: Self = EmbassyDuration(Duration::from_ticks(0));

    fn from_millis(millis: u64) -> Self {
        EmbassyDuration(Duration::from_millis(millis))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EmbassyInstant(pub Instant);

impl EmbassyInstant {
    pub fn now() -> Self {
        EmbassyInstant(Instant::now())
    }
}

impl TimeInstant for EmbassyInstant {
    type Duration = EmbassyDuration;

    fn checked_add(self, duration: EmbassyDuration) -> Option<Self> {
        self.0.checked_add(duration.0).map(EmbassyInstant)
    }
}
