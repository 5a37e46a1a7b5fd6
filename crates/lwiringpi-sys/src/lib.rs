//! Raw bindings to `libwiringPi`.
//!
//! Only the routines re-exported by the `lwiringpi` binding table are
//! declared here. Thread creation, `piLock`/`piUnlock` and `wiringPiISR`
//! are left out on purpose: they take callbacks or hand out lock keys that a
//! script caller cannot hold.

#![allow(non_upper_case_globals)]

use std::os::raw::{c_char, c_int, c_uint};

/// Length of `piModelNames`.
pub const PI_MODEL_NAMES_LEN: usize = 7;
/// Length of `piRevisionNames`.
pub const PI_REVISION_NAMES_LEN: usize = 5;
/// Length of `piMakerNames`.
pub const PI_MAKER_NAMES_LEN: usize = 5;

#[link(name = "wiringPi")]
extern "C" {
    // Setup
    pub fn wiringPiSetup() -> c_int;
    pub fn wiringPiSetupSys() -> c_int;
    pub fn wiringPiSetupGpio() -> c_int;
    pub fn wiringPiSetupPhys() -> c_int;

    // Core
    pub fn pinModeAlt(pin: c_int, mode: c_int);
    pub fn pinMode(pin: c_int, mode: c_int);
    pub fn pullUpDnControl(pin: c_int, pud: c_int);
    pub fn digitalRead(pin: c_int) -> c_int;
    pub fn digitalWrite(pin: c_int, value: c_int);
    pub fn pwmWrite(pin: c_int, value: c_int);
    pub fn analogRead(pin: c_int) -> c_int;
    pub fn analogWrite(pin: c_int, value: c_int);

    // On-board hardware
    pub fn piBoardRev() -> c_int;
    pub fn piBoardId(
        model: *mut c_int,
        rev: *mut c_int,
        mem: *mut c_int,
        maker: *mut c_int,
        over_volted: *mut c_int,
    );
    pub fn wpiPinToGpio(wpi_pin: c_int) -> c_int;
    pub fn physPinToGpio(phys_pin: c_int) -> c_int;
    pub fn setPadDrive(group: c_int, value: c_int);
    pub fn getAlt(pin: c_int) -> c_int;
    pub fn pwmToneWrite(pin: c_int, freq: c_int);
    pub fn digitalWriteByte(value: c_int);
    pub fn pwmSetMode(mode: c_int);
    pub fn pwmSetRange(range: c_uint);
    pub fn pwmSetClock(divisor: c_int);
    pub fn gpioClockSet(pin: c_int, freq: c_int);

    // Interrupts
    pub fn waitForInterrupt(pin: c_int, ms: c_int) -> c_int;

    // Scheduling priority
    pub fn piHiPri(pri: c_int) -> c_int;

    // Timing
    pub fn delay(how_long: c_uint);
    pub fn delayMicroseconds(how_long: c_uint);
    pub fn millis() -> c_uint;
    pub fn micros() -> c_uint;

    // Board name tables
    pub static piModelNames: [*const c_char; PI_MODEL_NAMES_LEN];
    pub static piRevisionNames: [*const c_char; PI_REVISION_NAMES_LEN];
    pub static piMakerNames: [*const c_char; PI_MAKER_NAMES_LEN];
}
