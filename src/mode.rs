/*
 * The mode register: the single source of truth for what the light is doing.
 *
 * The register is an atomic holding the ordinal of a `Mode`, so any task may
 * read it without a lock. Workers advance their own phase with `advance`,
 * which is a compare-and-exchange: if an input diverted the mode while the
 * worker was dwelling, the advance does not happen and the diversion stands.
 */

use core::sync::atomic::{AtomicU8, Ordering};
use enum_ordinalize::Ordinalize;

#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    Red,
    Yellow,
    Green,
    Paused,
    Blinking,
}

impl Mode {
    /*
     * The automatic cycle. Only the three cycle phases have a successor.
     */
    pub fn next(self) -> Option<Mode> {
        match self {
            Mode::Red => Some(Mode::Yellow),
            Mode::Yellow => Some(Mode::Green),
            Mode::Green => Some(Mode::Red),
            Mode::Paused | Mode::Blinking => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Red => "RED",
            Mode::Yellow => "YELLOW",
            Mode::Green => "GREEN",
            Mode::Paused => "PAUSED",
            Mode::Blinking => "BLINKING",
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

pub struct ModeRegister {
    raw: AtomicU8,
}

impl ModeRegister {
    pub const fn new(initial: Mode) -> Self {
        ModeRegister {
            raw: AtomicU8::new(initial as u8),
        }
    }

    pub fn read(&self) -> Mode {
        // Only ever stores ordinals written by `write` and `advance`.
        Mode::from_ordinal(self.raw.load(Ordering::Acquire)).unwrap_or(Mode::Red)
    }

    pub fn write(&self, mode: Mode) {
        self.raw.store(mode.ordinal(), Ordering::Release);
    }

    /// Replaces `from` with `to`, unless the register no longer holds `from`.
    /// Returns whether the write happened.
    pub fn advance(&self, from: Mode, to: Mode) -> bool {
        self.raw
            .compare_exchange(
                from.ordinal(),
                to.ordinal(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

impl Default for ModeRegister {
    fn default() -> Self {
        ModeRegister::new(Mode::Red)
    }
}
