//! The native GPIO library, seen from the binding table.
//!
//! One method per wiringPi routine, with the routine's native argument
//! types. Methods are infallible here: wiringPi reports device faults through
//! its own channels (return codes the caller sees verbatim, or process exit),
//! never through this layer.

#[cfg(feature = "native")]
pub mod native;
pub mod simulated;

#[cfg(feature = "native")]
pub use native::NativeBackend;
pub use simulated::{NativeCall, SimulatedBackend, CALL_LOG_LIMIT};

/// The five raw outputs of `piBoardId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawBoardId {
    pub model: i32,
    pub rev: i32,
    pub mem: i32,
    pub maker: i32,
    pub over_volted: i32,
}

pub trait WiringPi {
    /// Short label used in log lines.
    fn label(&self) -> &'static str;

    // Setup
    fn wiring_pi_setup(&self) -> i32;
    fn wiring_pi_setup_sys(&self) -> i32;
    fn wiring_pi_setup_gpio(&self) -> i32;
    fn wiring_pi_setup_phys(&self) -> i32;

    // Core
    fn pin_mode_alt(&self, pin: i32, mode: i32);
    fn pin_mode(&self, pin: i32, mode: i32);
    fn pull_up_dn_control(&self, pin: i32, pud: i32);
    fn digital_read(&self, pin: i32) -> i32;
    fn digital_write(&self, pin: i32, value: i32);
    fn pwm_write(&self, pin: i32, value: i32);
    fn analog_read(&self, pin: i32) -> i32;
    fn analog_write(&self, pin: i32, value: i32);

    // On-board hardware
    fn pi_board_rev(&self) -> i32;
    fn pi_board_id(&self) -> RawBoardId;
    fn wpi_pin_to_gpio(&self, wpi_pin: i32) -> i32;
    fn phys_pin_to_gpio(&self, phys_pin: i32) -> i32;
    fn set_pad_drive(&self, group: i32, value: i32);
    fn get_alt(&self, pin: i32) -> i32;
    fn pwm_tone_write(&self, pin: i32, freq: i32);
    fn digital_write_byte(&self, value: i32);
    fn pwm_set_mode(&self, mode: i32);
    fn pwm_set_range(&self, range: u32);
    fn pwm_set_clock(&self, divisor: i32);
    fn gpio_clock_set(&self, pin: i32, freq: i32);

    // Interrupts
    fn wait_for_interrupt(&self, pin: i32, ms: i32) -> i32;

    // Scheduling priority
    fn pi_hi_pri(&self, pri: i32) -> i32;

    // Timing
    fn delay(&self, ms: u32);
    fn delay_microseconds(&self, us: u32);
    fn millis(&self) -> u32;
    fn micros(&self) -> u32;

    // Name tables (`piModelNames`, `piRevisionNames`, `piMakerNames`).
    // `None` when the index is outside the table.
    fn model_name(&self, index: i32) -> Option<String>;
    fn revision_name(&self, index: i32) -> Option<String>;
    fn maker_name(&self, index: i32) -> Option<String>;
}

impl<T: WiringPi + ?Sized> WiringPi for Box<T> {
    fn label(&self) -> &'static str {
        (**self).label()
    }
    fn wiring_pi_setup(&self) -> i32 {
        (**self).wiring_pi_setup()
    }
    fn wiring_pi_setup_sys(&self) -> i32 {
        (**self).wiring_pi_setup_sys()
    }
    fn wiring_pi_setup_gpio(&self) -> i32 {
        (**self).wiring_pi_setup_gpio()
    }
    fn wiring_pi_setup_phys(&self) -> i32 {
        (**self).wiring_pi_setup_phys()
    }
    fn pin_mode_alt(&self, pin: i32, mode: i32) {
        (**self).pin_mode_alt(pin, mode)
    }
    fn pin_mode(&self, pin: i32, mode: i32) {
        (**self).pin_mode(pin, mode)
    }
    fn pull_up_dn_control(&self, pin: i32, pud: i32) {
        (**self).pull_up_dn_control(pin, pud)
    }
    fn digital_read(&self, pin: i32) -> i32 {
        (**self).digital_read(pin)
    }
    fn digital_write(&self, pin: i32, value: i32) {
        (**self).digital_write(pin, value)
    }
    fn pwm_write(&self, pin: i32, value: i32) {
        (**self).pwm_write(pin, value)
    }
    fn analog_read(&self, pin: i32) -> i32 {
        (**self).analog_read(pin)
    }
    fn analog_write(&self, pin: i32, value: i32) {
        (**self).analog_write(pin, value)
    }
    fn pi_board_rev(&self) -> i32 {
        (**self).pi_board_rev()
    }
    fn pi_board_id(&self) -> RawBoardId {
        (**self).pi_board_id()
    }
    fn wpi_pin_to_gpio(&self, wpi_pin: i32) -> i32 {
        (**self).wpi_pin_to_gpio(wpi_pin)
    }
    fn phys_pin_to_gpio(&self, phys_pin: i32) -> i32 {
        (**self).phys_pin_to_gpio(phys_pin)
    }
    fn set_pad_drive(&self, group: i32, value: i32) {
        (**self).set_pad_drive(group, value)
    }
    fn get_alt(&self, pin: i32) -> i32 {
        (**self).get_alt(pin)
    }
    fn pwm_tone_write(&self, pin: i32, freq: i32) {
        (**self).pwm_tone_write(pin, freq)
    }
    fn digital_write_byte(&self, value: i32) {
        (**self).digital_write_byte(value)
    }
    fn pwm_set_mode(&self, mode: i32) {
        (**self).pwm_set_mode(mode)
    }
    fn pwm_set_range(&self, range: u32) {
        (**self).pwm_set_range(range)
    }
    fn pwm_set_clock(&self, divisor: i32) {
        (**self).pwm_set_clock(divisor)
    }
    fn gpio_clock_set(&self, pin: i32, freq: i32) {
        (**self).gpio_clock_set(pin, freq)
    }
    fn wait_for_interrupt(&self, pin: i32, ms: i32) -> i32 {
        (**self).wait_for_interrupt(pin, ms)
    }
    fn pi_hi_pri(&self, pri: i32) -> i32 {
        (**self).pi_hi_pri(pri)
    }
    fn delay(&self, ms: u32) {
        (**self).delay(ms)
    }
    fn delay_microseconds(&self, us: u32) {
        (**self).delay_microseconds(us)
    }
    fn millis(&self) -> u32 {
        (**self).millis()
    }
    fn micros(&self) -> u32 {
        (**self).micros()
    }
    fn model_name(&self, index: i32) -> Option<String> {
        (**self).model_name(index)
    }
    fn revision_name(&self, index: i32) -> Option<String> {
        (**self).revision_name(index)
    }
    fn maker_name(&self, index: i32) -> Option<String> {
        (**self).maker_name(index)
    }
}
