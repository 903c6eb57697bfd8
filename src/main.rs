#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_stm32::exti::{Channel, ExtiInput};
use embassy_stm32::gpio::{Level, Output, Pin, Pull, Speed};
use embassy_stm32::usart::{Config as UartConfig, Uart};
use embassy_stm32::{bind_interrupts, peripherals, usart};
use embassy_time::{Instant, Timer};
use tricolor::{Config, INPUT_LINES, Mode, ModeRegister, TrafficLight};
use {defmt_rtt as _, panic_halt as _};

mod clock;
mod io;

use clock::{EmbassyDuration, EmbassyInstant};
use io::{GpioLights, INPUTS, button_task};

static MODE: ModeRegister = ModeRegister::new(Mode::Red);

bind_interrupts!(struct Irqs {
    USART1 => usart::InterruptHandler<peripherals::USART1>;
});

type StatusUart = Uart<'static, embassy_stm32::mode::Async>;

// One text line per mode change, so the light can be followed on a terminal.
async fn report(usart: &mut StatusUart, mode: Mode) {
    defmt::info!("mode: {}", mode);
    for part in [b"mode: ".as_slice(), mode.name().as_bytes(), b"\n".as_slice()] {
        if usart.write(part).await.is_err() {
            defmt::warn!("status line write failed");
            return;
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());
    let config = Config::<EmbassyDuration>::default();

    let mut usart = Uart::new(
        peripherals.USART1,
        peripherals.PA10,
        peripherals.PA9,
        Irqs,
        peripherals.DMA1_CH4,
        peripherals.DMA1_CH5,
        UartConfig::default(), // 115200 baud
    )
    .unwrap();

    let lights = GpioLights::new(
        [
            Output::new(peripherals.PB10.degrade(), Level::Low, Speed::Low),
            Output::new(peripherals.PB14.degrade(), Level::Low, Speed::Low),
            Output::new(peripherals.PB12.degrade(), Level::Low, Speed::Low),
        ],
        false,
    );

    // Line order: pause/resume, red, yellow, green, blink.
    let buttons: [ExtiInput<'static>; INPUT_LINES] = [
        ExtiInput::new(peripherals.PE2.degrade(), peripherals.EXTI2.degrade(), Pull::Down),
        ExtiInput::new(peripherals.PE3.degrade(), peripherals.EXTI3.degrade(), Pull::Down),
        ExtiInput::new(peripherals.PE4.degrade(), peripherals.EXTI4.degrade(), Pull::Down),
        ExtiInput::new(peripherals.PE5.degrade(), peripherals.EXTI5.degrade(), Pull::Down),
        ExtiInput::new(peripherals.PE6.degrade(), peripherals.EXTI6.degrade(), Pull::Down),
    ];
    for (line, button) in buttons.into_iter().enumerate() {
        spawner
            .spawn(button_task(button, line as u8, config.debounce.0))
            .unwrap();
    }

    let mut trafficlight = TrafficLight::new(&MODE, lights, &config).unwrap();
    let mut reported: Option<Mode> = None;

    loop {
        let deadline = trafficlight.service(EmbassyInstant::now());

        let mode = trafficlight.mode();
        if reported != Some(mode) {
            report(&mut usart, mode).await;
            reported = Some(mode);
        }

        let wake = deadline.map_or(Instant::MAX, |deadline| deadline.0);
        if let Either::First(input) = select(INPUTS.receive(), Timer::at(wake)).await {
            trafficlight.dispatch(input);
        }
    }
}
