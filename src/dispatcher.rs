/*
 * The input dispatcher: what each input does to the mode and the lights.
 *
 * Every action here is bounded and non-blocking. The colour inputs do nothing
 * unless the light is paused.
 *
 * Note the asymmetry between the two ways out of the cycle. Pause remembers
 * the mode it interrupted and resume goes back to it. The blink toggle does
 * not remember anything: leaving blink lands in PAUSED with nothing saved, and
 * the next resume starts the cycle over at RED. A pause taken while blinking
 * also resumes at RED, never back into BLINKING.
 */

use crate::input::Input;
use crate::lights::{self, Channel, Composite, Lights};
use crate::mode::{Mode, ModeRegister};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Saved {
    mode: Mode,
    lit: Composite,
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    saved: Option<Saved>,
}

impl Dispatcher {
    pub const fn new() -> Self {
        Dispatcher { saved: None }
    }

    pub fn dispatch<L: Lights + ?Sized>(&mut self, input: Input, mode: &ModeRegister, lights: &mut L) {
        debug!("dispatch {:?} in {:?}", input, mode.read());
        match input {
            Input::PauseResume => self.pause_resume(mode, lights),
            Input::Force(color) => force(Composite::from(color), mode, lights),
            Input::ToggleBlink => self.toggle_blink(mode, lights),
        }
    }

    fn pause_resume<L: Lights + ?Sized>(&mut self, mode: &ModeRegister, lights: &mut L) {
        let current = mode.read();
        if current != Mode::Paused {
            self.saved = Some(Saved {
                mode: current,
                lit: Composite::of(lights),
            });
            mode.write(Mode::Paused);
            info!("paused in {:?}", current);
            return;
        }

        let resumed = match self.saved.take() {
            Some(saved) => {
                lights::show(lights, saved.lit);
                resume_target(saved.mode)
            }
            None => Mode::Red,
        };
        mode.write(resumed);
        info!("resumed to {:?}", resumed);
    }

    fn toggle_blink<L: Lights + ?Sized>(&mut self, mode: &ModeRegister, lights: &mut L) {
        let toggled = match mode.read() {
            Mode::Blinking => Mode::Paused,
            Mode::Red | Mode::Yellow | Mode::Green | Mode::Paused => Mode::Blinking,
        };

        if toggled == Mode::Blinking {
            self.saved = None;
        } else {
            lights::reset(lights);
        }
        mode.write(toggled);
        info!("blink toggled to {:?}", toggled);
    }
}

fn resume_target(saved: Mode) -> Mode {
    match saved {
        Mode::Blinking => Mode::Red,
        Mode::Red | Mode::Yellow | Mode::Green | Mode::Paused => saved,
    }
}

/*
 * A forced colour toggles: pressing it again turns it off. Any other colour
 * that is lit is cleared first.
 */
fn force<L: Lights + ?Sized>(target: Composite, mode: &ModeRegister, lights: &mut L) {
    if mode.read() != Mode::Paused {
        return;
    }

    if Composite::of(lights) != target {
        lights::reset(lights);
    }

    if target.red() {
        lights.toggle(Channel::Red);
    }
    if target.green() {
        lights.toggle(Channel::Green);
    }
}
