/*
 * The light channels and the composites they form.
 *
 * The hardware has three independently switched channels. Red and green
 * together show as yellow, so the state machine reasons in composites (off,
 * red, yellow, green), while the driver only knows channels. Blue is never
 * lit but is cleared along with the others.
 */

use enum_ordinalize::Ordinalize;

#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(usize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/*
 * The light channel driver. Implementations deal with active-high or
 * active-low wiring, so that `true` always means lit.
 */
pub trait Lights {
    fn set(&mut self, channel: Channel, on: bool);

    fn get(&self, channel: Channel) -> bool;

    fn toggle(&mut self, channel: Channel) {
        let on = self.get(channel);
        self.set(channel, !on);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Composite {
    Off,
    Red,
    Yellow,
    Green,
}

impl Composite {
    /// Reads back which composite the red and green channels currently show.
    pub fn of<L: Lights + ?Sized>(lights: &L) -> Self {
        match (lights.get(Channel::Red), lights.get(Channel::Green)) {
            (false, false) => Composite::Off,
            (true, false) => Composite::Red,
            (true, true) => Composite::Yellow,
            (false, true) => Composite::Green,
        }
    }

    pub fn red(&self) -> bool {
        match self {
            Composite::Red | Composite::Yellow => true,
            Composite::Off | Composite::Green => false,
        }
    }

    pub fn green(&self) -> bool {
        match self {
            Composite::Yellow | Composite::Green => true,
            Composite::Off | Composite::Red => false,
        }
    }
}

/// Forces every channel off.
pub fn reset<L: Lights + ?Sized>(lights: &mut L) {
    for channel in Channel::VARIANTS {
        lights.set(*channel, false);
    }
}

/// Resets, then lights exactly `composite`.
pub fn show<L: Lights + ?Sized>(lights: &mut L, composite: Composite) {
    reset(lights);
    if composite.red() {
        lights.set(Channel::Red, true);
    }
    if composite.green() {
        lights.set(Channel::Green, true);
    }
}
