//! Logs key gestures, with an extra handler on key1 double/long presses.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use hexpad::*;

esp_bootloader_esp_idf::esp_app_desc!();

fn on_key1_gesture(name: &'static str, event: KeyEvent) {
    info!("custom handler: {} fired {}", name, event);
}

#[embassy_executor::task]
async fn keypad_task(keypad: &'static mut BoardKeypad) {
    info!("Keypad task started — press any key");

    loop {
        keypad.process();
        Timer::after(Duration::from_millis(20)).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = hexpad::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let keypad = mk_static!(BoardKeypad, resources.keys.into());
    keypad
        .attach("key1", KeyEvents::DOUBLE | KeyEvents::LONG, on_key1_gesture)
        .unwrap();
    spawner.must_spawn(keypad_task(keypad));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
