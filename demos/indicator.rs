//! Cycles the status indicator through its color presets.

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

#[embassy_executor::task]
async fn indicator_task(indicator: &'static mut BoardIndicator) {
    info!("Indicator task started — preset cycle");

    loop {
        indicator.red();
        Timer::after(Duration::from_secs(1)).await;
        indicator.green();
        Timer::after(Duration::from_secs(1)).await;
        indicator.blue();
        Timer::after(Duration::from_secs(1)).await;
        indicator.yellow();
        Timer::after(Duration::from_secs(1)).await;
        indicator.magenta();
        Timer::after(Duration::from_secs(1)).await;
        indicator.cyan();
        Timer::after(Duration::from_secs(1)).await;
        indicator.all_on();
        Timer::after(Duration::from_secs(1)).await;
        indicator.all_off();
        Timer::after(Duration::from_secs(1)).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = hexpad::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let indicator = mk_static!(BoardIndicator, resources.indicator.into());
    spawner.must_spawn(indicator_task(indicator));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
