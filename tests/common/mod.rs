//! Shared test infrastructure: simulated time, recording lights and a small
//! driver that services the traffic light at its deadlines.

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use tricolor::{
    Channel, Composite, Config, Input, Lights, ModeRegister, TimeDuration, TimeInstant,
    TrafficLight,
};

pub const UNIT: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn checked_add(self, duration: TestDuration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

/// Light channels that remember every level written to them.
#[derive(Debug, Default)]
pub struct MockLights {
    pub levels: [bool; 3],
    pub writes: usize,
}

impl MockLights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lit(levels: [bool; 3]) -> Self {
        MockLights { levels, writes: 0 }
    }
}

impl Lights for MockLights {
    fn set(&mut self, channel: Channel, on: bool) {
        self.levels[channel as usize] = on;
        self.writes += 1;
    }

    fn get(&self, channel: Channel) -> bool {
        self.levels[channel as usize]
    }
}

pub fn trafficlight(mode: &ModeRegister) -> TrafficLight<'_, TestInstant, MockLights> {
    TrafficLight::new(mode, MockLights::new(), &Config::default()).unwrap()
}

/// Drives a traffic light the way the firmware's main loop does: service at
/// every deadline, and right after every input.
pub struct Sim<'m> {
    pub light: TrafficLight<'m, TestInstant, MockLights>,
    pub now: u64,
    next: Option<TestInstant>,
}

impl<'m> Sim<'m> {
    /// Starts at t=0 and services once, like the firmware does on boot.
    pub fn start(mode: &'m ModeRegister) -> Self {
        let mut light = trafficlight(mode);
        let next = light.service(TestInstant(0));
        Sim { light, now: 0, next }
    }

    pub fn run_until(&mut self, t: u64) {
        while let Some(TestInstant(deadline)) = self.next {
            if deadline > t {
                break;
            }
            self.now = deadline;
            self.next = self.light.service(TestInstant(deadline));
        }
        self.now = t;
    }

    pub fn advance(&mut self, millis: u64) {
        self.run_until(self.now + millis);
    }

    pub fn press(&mut self, input: Input) {
        self.light.dispatch(input);
        self.next = self.light.service(TestInstant(self.now));
    }

    pub fn lit(&self) -> Composite {
        self.light.lit()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.next.map(|TestInstant(t)| t)
    }
}
