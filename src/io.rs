/*
 * The I/O module for the indicator light.
 *
 * This module is responsible for the actual I/O pins on the device. The
 * intention is for this module to be the only part of the program that is
 * device-specific.
 *
 * It exports the GPIO implementation of the light channels and a task per
 * button that turns debounced rising edges into inputs on `INPUTS`.
 */

use embassy_futures::select::{Either, select};
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Level, Output},
};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_time::{Duration, Timer};
use enum_ordinalize::Ordinalize;
use tricolor::{Channel, InputQueue, Lights, lights};

pub static INPUTS: InputQueue<ThreadModeRawMutex> = InputQueue::new();

/*
 * Outputs are indexed by channel ordinal: red, green, blue.
 */
pub struct GpioLights {
    outputs: [Output<'static>; Channel::VARIANT_COUNT],
    active_low: bool,
}

impl GpioLights {
    pub fn new(outputs: [Output<'static>; Channel::VARIANT_COUNT], active_low: bool) -> Self {
        let mut gpio_lights = GpioLights {
            outputs,
            active_low,
        };
        lights::reset(&mut gpio_lights);
        defmt::info!("lights initialized");
        gpio_lights
    }
}

// `on` is the lamp, not the pin. Writes and read-backs both go through the
// polarity flip, so `Composite::of` sees what is actually lit.
impl Lights for GpioLights {
    fn set(&mut self, channel: Channel, on: bool) {
        let high = on != self.active_low;
        self.outputs[channel.ordinal()].set_level(if high { Level::High } else { Level::Low });
    }

    fn get(&self, channel: Channel) -> bool {
        self.outputs[channel.ordinal()].is_set_high() != self.active_low
    }
}

// A mechanical button makes brief contact several times per press. Only the
// first rising edge counts; after that the line has to stay quiet for the
// whole debounce period before we look for the next press.
#[embassy_executor::task(pool_size = 5)]
pub async fn button_task(mut button: ExtiInput<'static>, line: u8, debounce: Duration) -> ! {
    defmt::info!("button {} task started", line);

    loop {
        button.wait_for_rising_edge().await;

        if let Err(e) = INPUTS.on_rising_edge(line) {
            defmt::warn!("button {}: {}", line, e);
        }

        'debounce_loop: loop {
            match select(button.wait_for_any_edge(), Timer::after(debounce)).await {
                Either::First(_) => {}
                Either::Second(_) => break 'debounce_loop,
            }
        }
    }
}
