//! An in-memory Raspberry Pi for running scripts off-device and for tests.
//!
//! Only what a script can read back is modelled: output levels, analog
//! values, alt modes and the PWM range. Pins are addressed through whichever
//! numbering scheme the last `wiringPiSetup*` call selected. Routine calls go
//! to a bounded call log.

use super::{RawBoardId, WiringPi};
use crate::constants::*;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

const GPIO_COUNT: usize = 64;

/// Entries kept in the call log; older calls are dropped first.
pub const CALL_LOG_LIMIT: usize = 1024;

// wiringPi pin -> BCM GPIO, board revision 2 and later.
#[rustfmt::skip]
const WPI_TO_GPIO: [i32; GPIO_COUNT] = [
    17, 18, 27, 22, 23, 24, 25,  4, // 0..7
     2,  3,                         // I2C
     8,  7,                         // SPI CE0, CE1
    10,  9, 11,                     // SPI MOSI, MISO, SCLK
    14, 15,                         // UART
    28, 29, 30, 31,                 // P5 header
     5,  6, 13, 19, 26,             // B+ header
    12, 16, 20, 21,
     0,  1,                         // ID EEPROM
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

// Physical header pin -> BCM GPIO, board revision 2 and later.
#[rustfmt::skip]
const PHYS_TO_GPIO: [i32; GPIO_COUNT] = [
    -1,                 // 0
    -1, -1,             // 1, 2
     2, -1,
     3, -1,
     4, 14,
    -1, 15,
    17, 18,
    27, -1,
    22, 23,
    -1, 24,
    10, -1,
     9, 25,
    11,  8,
    -1,  7,             // 25, 26
     0,  1,
     5, -1,
     6, 12,
    13, -1,
    19, 16,
    26, 20,
    -1, 21,             // 39, 40
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    28, 29, 30, 31,     // P5 header, 51..54
    -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

/// One routine invocation as the simulated library saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCall {
    pub routine: &'static str,
    pub args: Vec<i64>,
}

struct Board {
    numbering: i32,
    level: [i32; GPIO_COUNT],
    analog: [i32; GPIO_COUNT],
    alt: [i32; GPIO_COUNT],
    pwm_range: u32,
    // Edges latch per pin until a wait consumes them.
    pending_edge: [bool; GPIO_COUNT],
    calls: VecDeque<NativeCall>,
}

impl Board {
    fn new() -> Self {
        Board {
            numbering: WPI_MODE_UNINITIALISED,
            level: [LOW; GPIO_COUNT],
            analog: [0; GPIO_COUNT],
            alt: [0; GPIO_COUNT],
            pwm_range: 1024,
            pending_edge: [false; GPIO_COUNT],
            calls: VecDeque::with_capacity(CALL_LOG_LIMIT),
        }
    }

    fn record(&mut self, routine: &'static str, args: &[i64]) {
        if self.calls.len() == CALL_LOG_LIMIT {
            self.calls.pop_front();
        }
        self.calls.push_back(NativeCall {
            routine,
            args: args.to_vec(),
        });
    }

    /// Map a caller pin number to a BCM GPIO under the current numbering.
    fn resolve(&self, pin: i32) -> Option<usize> {
        let slot = usize::try_from(pin).ok().filter(|p| *p < GPIO_COUNT)?;
        let gpio = match self.numbering {
            WPI_MODE_PINS => WPI_TO_GPIO[slot],
            WPI_MODE_GPIO | WPI_MODE_GPIO_SYS => pin,
            WPI_MODE_PHYS => PHYS_TO_GPIO[slot],
            _ => {
                log::warn!("simulated wiringPi used before setup (pin {pin})");
                return None;
            }
        };
        usize::try_from(gpio).ok()
    }

    fn setup(&mut self, routine: &'static str, numbering: i32) -> i32 {
        self.record(routine, &[]);
        self.numbering = numbering;
        0
    }
}

fn lookup_name(table: &[&str], index: i32) -> Option<String> {
    let slot = usize::try_from(index).ok()?;
    table.get(slot).map(|s| s.to_string())
}

pub struct SimulatedBackend {
    identity: RawBoardId,
    epoch: Instant,
    board: Mutex<Board>,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedBackend {
    /// A Model B, revision 1.2, 512 MB, made by Sony.
    pub fn new() -> Self {
        Self::with_identity(RawBoardId {
            model: PI_MODEL_B,
            rev: PI_VERSION_1_2,
            mem: 512,
            maker: PI_MAKER_SONY,
            over_volted: 0,
        })
    }

    pub fn with_identity(identity: RawBoardId) -> Self {
        SimulatedBackend {
            identity,
            epoch: Instant::now(),
            board: Mutex::new(Board::new()),
        }
    }

    fn board(&self) -> MutexGuard<'_, Board> {
        // A panic mid-call leaves plain integers behind; keep going.
        self.board.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The most recent routine calls, oldest first, at most [`CALL_LOG_LIMIT`].
    pub fn calls(&self) -> Vec<NativeCall> {
        self.board().calls.iter().cloned().collect()
    }

    pub fn clear_calls(&self) {
        self.board().calls.clear();
    }

    /// Numbering scheme selected by the last setup call (`WPI_MODE_*`).
    pub fn numbering(&self) -> i32 {
        self.board().numbering
    }

    pub fn set_analog(&self, gpio: usize, value: i32) {
        if let Some(slot) = self.board().analog.get_mut(gpio) {
            *slot = value;
        }
    }

    /// Latch an edge on `gpio`; the next `waitForInterrupt` on it returns at once.
    pub fn trigger_interrupt(&self, gpio: usize) {
        if let Some(slot) = self.board().pending_edge.get_mut(gpio) {
            *slot = true;
        }
    }

    pub fn level(&self, gpio: usize) -> Option<i32> {
        self.board().level.get(gpio).copied()
    }

    pub fn pwm_range(&self) -> u32 {
        self.board().pwm_range
    }
}

impl WiringPi for SimulatedBackend {
    fn label(&self) -> &'static str {
        "simulated"
    }

    fn wiring_pi_setup(&self) -> i32 {
        self.board().setup("wiringPiSetup", WPI_MODE_PINS)
    }

    fn wiring_pi_setup_sys(&self) -> i32 {
        self.board().setup("wiringPiSetupSys", WPI_MODE_GPIO_SYS)
    }

    fn wiring_pi_setup_gpio(&self) -> i32 {
        self.board().setup("wiringPiSetupGpio", WPI_MODE_GPIO)
    }

    fn wiring_pi_setup_phys(&self) -> i32 {
        self.board().setup("wiringPiSetupPhys", WPI_MODE_PHYS)
    }

    fn pin_mode_alt(&self, pin: i32, mode: i32) {
        let mut board = self.board();
        board.record("pinModeAlt", &[pin.into(), mode.into()]);
        if let Some(g) = board.resolve(pin) {
            board.alt[g] = mode & 7;
        }
    }

    fn pin_mode(&self, pin: i32, mode: i32) {
        self.board().record("pinMode", &[pin.into(), mode.into()]);
    }

    fn pull_up_dn_control(&self, pin: i32, pud: i32) {
        self.board().record("pullUpDnControl", &[pin.into(), pud.into()]);
    }

    fn digital_read(&self, pin: i32) -> i32 {
        let mut board = self.board();
        board.record("digitalRead", &[pin.into()]);
        board.resolve(pin).map_or(LOW, |g| board.level[g])
    }

    fn digital_write(&self, pin: i32, value: i32) {
        let mut board = self.board();
        board.record("digitalWrite", &[pin.into(), value.into()]);
        if let Some(g) = board.resolve(pin) {
            board.level[g] = if value == LOW { LOW } else { HIGH };
        }
    }

    fn pwm_write(&self, pin: i32, value: i32) {
        self.board().record("pwmWrite", &[pin.into(), value.into()]);
    }

    fn analog_read(&self, pin: i32) -> i32 {
        let mut board = self.board();
        board.record("analogRead", &[pin.into()]);
        board.resolve(pin).map_or(0, |g| board.analog[g])
    }

    fn analog_write(&self, pin: i32, value: i32) {
        let mut board = self.board();
        board.record("analogWrite", &[pin.into(), value.into()]);
        if let Some(g) = board.resolve(pin) {
            board.analog[g] = value;
        }
    }

    fn pi_board_rev(&self) -> i32 {
        self.board().record("piBoardRev", &[]);
        match self.identity.rev {
            PI_VERSION_1 | PI_VERSION_1_1 => 1,
            _ => 2,
        }
    }

    fn pi_board_id(&self) -> RawBoardId {
        self.board().record("piBoardId", &[]);
        self.identity
    }

    fn wpi_pin_to_gpio(&self, wpi_pin: i32) -> i32 {
        self.board().record("wpiPinToGpio", &[wpi_pin.into()]);
        WPI_TO_GPIO[(wpi_pin & 63) as usize]
    }

    fn phys_pin_to_gpio(&self, phys_pin: i32) -> i32 {
        self.board().record("physPinToGpio", &[phys_pin.into()]);
        PHYS_TO_GPIO[(phys_pin & 63) as usize]
    }

    fn set_pad_drive(&self, group: i32, value: i32) {
        self.board().record("setPadDrive", &[group.into(), value.into()]);
    }

    fn get_alt(&self, pin: i32) -> i32 {
        let mut board = self.board();
        board.record("getAlt", &[pin.into()]);
        board.resolve(pin).map_or(0, |g| board.alt[g])
    }

    fn pwm_tone_write(&self, pin: i32, freq: i32) {
        self.board().record("pwmToneWrite", &[pin.into(), freq.into()]);
    }

    fn digital_write_byte(&self, value: i32) {
        let mut board = self.board();
        board.record("digitalWriteByte", &[value.into()]);
        // Always wiringPi pins 0..7, whatever the numbering scheme.
        for (bit, gpio) in WPI_TO_GPIO.iter().take(8).enumerate() {
            board.level[*gpio as usize] = (value >> bit) & 1;
        }
    }

    fn pwm_set_mode(&self, mode: i32) {
        self.board().record("pwmSetMode", &[mode.into()]);
    }

    fn pwm_set_range(&self, range: u32) {
        let mut board = self.board();
        board.record("pwmSetRange", &[range.into()]);
        board.pwm_range = range;
    }

    fn pwm_set_clock(&self, divisor: i32) {
        self.board().record("pwmSetClock", &[divisor.into()]);
    }

    fn gpio_clock_set(&self, pin: i32, freq: i32) {
        self.board().record("gpioClockSet", &[pin.into(), freq.into()]);
    }

    fn wait_for_interrupt(&self, pin: i32, ms: i32) -> i32 {
        {
            let mut board = self.board();
            board.record("waitForInterrupt", &[pin.into(), ms.into()]);
            if let Some(g) = board.resolve(pin) {
                if std::mem::take(&mut board.pending_edge[g]) {
                    return 1;
                }
            }
        }
        // Nothing latched: sit out the timeout. A negative timeout would block
        // forever on hardware; with no one to raise an edge here, return.
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms as u64));
        }
        0
    }

    fn pi_hi_pri(&self, pri: i32) -> i32 {
        self.board().record("piHiPri", &[pri.into()]);
        0
    }

    fn delay(&self, ms: u32) {
        self.board().record("delay", &[ms.into()]);
        thread::sleep(Duration::from_millis(ms.into()));
    }

    fn delay_microseconds(&self, us: u32) {
        self.board().record("delayMicroseconds", &[us.into()]);
        thread::sleep(Duration::from_micros(us.into()));
    }

    fn millis(&self) -> u32 {
        self.board().record("millis", &[]);
        // 32-bit wrap, like the native counter.
        self.epoch.elapsed().as_millis() as u32
    }

    fn micros(&self) -> u32 {
        self.board().record("micros", &[]);
        self.epoch.elapsed().as_micros() as u32
    }

    fn model_name(&self, index: i32) -> Option<String> {
        lookup_name(&MODEL_NAMES, index)
    }

    fn revision_name(&self, index: i32) -> Option<String> {
        lookup_name(&REVISION_NAMES, index)
    }

    fn maker_name(&self, index: i32) -> Option<String> {
        lookup_name(&MAKER_NAMES, index)
    }
}
