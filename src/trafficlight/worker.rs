/*
 * A phase worker owns one mode. Whenever its mode is current and it is not
 * already dwelling, it drives the lights and dwells for one unit. When a cycle
 * worker's dwell ends it advances the mode to the next phase. The blink worker
 * never advances; it re-checks its mode and flips the yellow composite on or
 * off.
 *
 * A dwell belongs to one stretch of the worker's mode. As soon as the worker
 * sees another mode, the dwell is dropped and can no longer advance anything;
 * if the mode comes back later, the worker starts over with a fresh dwell.
 *
 * A worker does not sleep by itself. The owner calls `service` at the
 * deadline it returned, and `observe` or `service` after every input.
 */

use crate::lights::{self, Channel, Composite, Lights};
use crate::mode::{Mode, ModeRegister};
use crate::time::TimeInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Red,
    Yellow,
    Green,
    Blink,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Red, Phase::Yellow, Phase::Green, Phase::Blink];

    pub fn mode(&self) -> Mode {
        match self {
            Phase::Red => Mode::Red,
            Phase::Yellow => Mode::Yellow,
            Phase::Green => Mode::Green,
            Phase::Blink => Mode::Blinking,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State<I> {
    Waiting,
    Dwelling { until: I },
}

#[derive(Debug)]
pub struct PhaseWorker<I: TimeInstant> {
    phase: Phase,
    state: State<I>,
}

impl<I: TimeInstant> PhaseWorker<I> {
    pub fn new(phase: Phase) -> Self {
        PhaseWorker {
            phase,
            state: State::Waiting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dwelling_until(&self) -> Option<I> {
        match self.state {
            State::Waiting => None,
            State::Dwelling { until } => Some(until),
        }
    }

    /// Drops the dwell if `current` is not this worker's mode.
    pub fn observe(&mut self, current: Mode) {
        if let State::Dwelling { .. } = self.state {
            if current != self.phase.mode() {
                debug!("{:?} worker diverted to {:?}", self.phase, current);
                self.state = State::Waiting;
            }
        }
    }

    /// Runs the worker at `now`. Returns the end of its dwell, if it is
    /// dwelling afterwards.
    pub fn service<L: Lights + ?Sized>(
        &mut self,
        now: I,
        unit: I::Duration,
        mode: &ModeRegister,
        lights: &mut L,
    ) -> Option<I> {
        self.observe(mode.read());

        if let State::Dwelling { until } = self.state {
            if now < until {
                return Some(until);
            }
            self.finish(mode);
            self.state = State::Waiting;
        }

        if mode.read() != self.phase.mode() {
            return None;
        }

        self.enter(lights);
        // A wrapped clock ends the dwell right away.
        let until = now.checked_add(unit).unwrap_or(now);
        self.state = State::Dwelling { until };
        Some(until)
    }

    fn enter<L: Lights + ?Sized>(&self, lights: &mut L) {
        match self.phase {
            Phase::Red => lights::show(lights, Composite::Red),
            Phase::Yellow => lights::show(lights, Composite::Yellow),
            Phase::Green => lights::show(lights, Composite::Green),
            Phase::Blink => {
                if Composite::of(lights) == Composite::Yellow {
                    lights::reset(lights);
                } else {
                    lights.set(Channel::Red, true);
                    lights.set(Channel::Green, true);
                }
            }
        }
        debug!("{:?} worker lit {:?}", self.phase, Composite::of(lights));
    }

    fn finish(&self, mode: &ModeRegister) {
        let owned = self.phase.mode();
        let Some(next) = owned.next() else {
            return;
        };

        if mode.advance(owned, next) {
            info!("{:?} -> {:?}", owned, next);
        }
    }
}
