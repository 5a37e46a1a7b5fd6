use super::{RawBoardId, WiringPi};
use lwiringpi_sys as sys;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

/// Forwards every call to `libwiringPi`.
///
/// wiringPi keeps its state in process globals, so this type carries none and
/// any number of handles may exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeBackend;

impl NativeBackend {
    pub fn new() -> Self {
        NativeBackend
    }
}

fn table_entry(table: &[*const c_char], index: i32) -> Option<String> {
    let ptr = *table.get(usize::try_from(index).ok()?)?;
    if ptr.is_null() {
        return None;
    }
    // SAFETY: wiringPi's name tables hold static NUL-terminated literals.
    let name = unsafe { CStr::from_ptr(ptr) };
    Some(name.to_string_lossy().into_owned())
}

// SAFETY (whole impl): every routine below takes plain integers and is safe to
// call at any time; wiringPi itself handles the uninitialised case.
impl WiringPi for NativeBackend {
    fn label(&self) -> &'static str {
        "native"
    }

    fn wiring_pi_setup(&self) -> i32 {
        unsafe { sys::wiringPiSetup() }
    }
    fn wiring_pi_setup_sys(&self) -> i32 {
        unsafe { sys::wiringPiSetupSys() }
    }
    fn wiring_pi_setup_gpio(&self) -> i32 {
        unsafe { sys::wiringPiSetupGpio() }
    }
    fn wiring_pi_setup_phys(&self) -> i32 {
        unsafe { sys::wiringPiSetupPhys() }
    }

    fn pin_mode_alt(&self, pin: i32, mode: i32) {
        unsafe { sys::pinModeAlt(pin, mode) }
    }
    fn pin_mode(&self, pin: i32, mode: i32) {
        unsafe { sys::pinMode(pin, mode) }
    }
    fn pull_up_dn_control(&self, pin: i32, pud: i32) {
        unsafe { sys::pullUpDnControl(pin, pud) }
    }
    fn digital_read(&self, pin: i32) -> i32 {
        unsafe { sys::digitalRead(pin) }
    }
    fn digital_write(&self, pin: i32, value: i32) {
        unsafe { sys::digitalWrite(pin, value) }
    }
    fn pwm_write(&self, pin: i32, value: i32) {
        unsafe { sys::pwmWrite(pin, value) }
    }
    fn analog_read(&self, pin: i32) -> i32 {
        unsafe { sys::analogRead(pin) }
    }
    fn analog_write(&self, pin: i32, value: i32) {
        unsafe { sys::analogWrite(pin, value) }
    }

    fn pi_board_rev(&self) -> i32 {
        unsafe { sys::piBoardRev() }
    }

    fn pi_board_id(&self) -> RawBoardId {
        let (mut model, mut rev, mut mem, mut maker, mut over_volted): (c_int, c_int, c_int, c_int, c_int) =
            (0, 0, 0, 0, 0);
        // SAFETY: all five pointers are to live locals.
        unsafe { sys::piBoardId(&mut model, &mut rev, &mut mem, &mut maker, &mut over_volted) };
        RawBoardId {
            model,
            rev,
            mem,
            maker,
            over_volted,
        }
    }

    fn wpi_pin_to_gpio(&self, wpi_pin: i32) -> i32 {
        unsafe { sys::wpiPinToGpio(wpi_pin) }
    }
    fn phys_pin_to_gpio(&self, phys_pin: i32) -> i32 {
        unsafe { sys::physPinToGpio(phys_pin) }
    }
    fn set_pad_drive(&self, group: i32, value: i32) {
        unsafe { sys::setPadDrive(group, value) }
    }
    fn get_alt(&self, pin: i32) -> i32 {
        unsafe { sys::getAlt(pin) }
    }
    fn pwm_tone_write(&self, pin: i32, freq: i32) {
        unsafe { sys::pwmToneWrite(pin, freq) }
    }
    fn digital_write_byte(&self, value: i32) {
        unsafe { sys::digitalWriteByte(value) }
    }
    fn pwm_set_mode(&self, mode: i32) {
        unsafe { sys::pwmSetMode(mode) }
    }
    fn pwm_set_range(&self, range: u32) {
        unsafe { sys::pwmSetRange(range) }
    }
    fn pwm_set_clock(&self, divisor: i32) {
        unsafe { sys::pwmSetClock(divisor) }
    }
    fn gpio_clock_set(&self, pin: i32, freq: i32) {
        unsafe { sys::gpioClockSet(pin, freq) }
    }

    fn wait_for_interrupt(&self, pin: i32, ms: i32) -> i32 {
        unsafe { sys::waitForInterrupt(pin, ms) }
    }

    fn pi_hi_pri(&self, pri: i32) -> i32 {
        unsafe { sys::piHiPri(pri) }
    }

    fn delay(&self, ms: u32) {
        unsafe { sys::delay(ms) }
    }
    fn delay_microseconds(&self, us: u32) {
        unsafe { sys::delayMicroseconds(us) }
    }
    fn millis(&self) -> u32 {
        unsafe { sys::millis() }
    }
    fn micros(&self) -> u32 {
        unsafe { sys::micros() }
    }

    fn model_name(&self, index: i32) -> Option<String> {
        // SAFETY: the table is an immutable static array in libwiringPi.
        let table = unsafe { &*std::ptr::addr_of!(sys::piModelNames) };
        table_entry(table, index)
    }
    fn revision_name(&self, index: i32) -> Option<String> {
        let table = unsafe { &*std::ptr::addr_of!(sys::piRevisionNames) };
        table_entry(table, index)
    }
    fn maker_name(&self, index: i32) -> Option<String> {
        let table = unsafe { &*std::ptr::addr_of!(sys::piMakerNames) };
        table_entry(table, index)
    }
}
