/*
 * The traffic light: the single owner of the mode's writers and the lights.
 *
 * Inputs arrive through `dispatch`, the four phase workers run in `service`.
 * Because only this struct touches the lights, and only through `&mut self`,
 * a worker and an input can never interleave halfway through a change. The
 * owning task loops over: service, sleep until the returned deadline or the
 * next input, dispatch that input.
 */

pub mod worker;
pub use worker::{Phase, PhaseWorker};

use crate::config::{Config, ConfigError};
use crate::dispatcher::Dispatcher;
use crate::input::Input;
use crate::lights::{Composite, Lights};
use crate::mode::{Mode, ModeRegister};
use crate::time::{TimeInstant, earliest};

pub struct TrafficLight<'m, I: TimeInstant, L: Lights> {
    mode: &'m ModeRegister,
    lights: L,
    dispatcher: Dispatcher,
    workers: [PhaseWorker<I>; Phase::ALL.len()],
    unit: I::Duration,
}

impl<'m, I: TimeInstant, L: Lights> TrafficLight<'m, I, L> {
    pub fn new(
        mode: &'m ModeRegister,
        lights: L,
        config: &Config<I::Duration>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(TrafficLight {
            mode,
            lights,
            dispatcher: Dispatcher::new(),
            workers: Phase::ALL.map(PhaseWorker::new),
            unit: config.unit,
        })
    }

    pub fn dispatch(&mut self, input: Input) {
        self.dispatcher.dispatch(input, self.mode, &mut self.lights);

        let current = self.mode.read();
        for worker in self.workers.iter_mut() {
            worker.observe(current);
        }
    }

    /*
     * Runs every worker at `now` and returns the earliest dwell deadline.
     *
     * A worker that advances the mode makes another worker's precondition
     * true, and that worker may come earlier in the order. So we pass over
     * the workers until a pass leaves the mode alone. A worker advances at
     * most once per call, which bounds the number of passes.
     */
    pub fn service(&mut self, now: I) -> Option<I> {
        let mut next = None;
        for _ in 0..=self.workers.len() {
            let mut changed = false;
            next = None;
            for worker in self.workers.iter_mut() {
                let before = self.mode.read();
                let deadline = worker.service(now, self.unit, self.mode, &mut self.lights);
                changed |= self.mode.read() != before;
                next = earliest(next, deadline);
            }
            if !changed {
                break;
            }
        }
        next
    }

    pub fn mode(&self) -> Mode {
        self.mode.read()
    }

    pub fn lit(&self) -> Composite {
        Composite::of(&self.lights)
    }

    pub fn workers(&self) -> &[PhaseWorker<I>] {
        &self.workers
    }
}
