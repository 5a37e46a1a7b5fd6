use crate::native::NativeFn;
use crate::ops::{board, pins, timing};
use crate::schema::{ParamKind, ReturnShape};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use ParamKind::{Integer, Number};

/// One exported operation: external name, positional parameters, result
/// shape and the function that forwards it.
#[derive(Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub params: &'static [ParamKind],
    pub returns: ReturnShape,
    pub func: NativeFn,
}

impl Operation {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .finish()
    }
}

const NONE: &[ParamKind] = &[];
const INT: &[ParamKind] = &[Integer];
const INT_INT: &[ParamKind] = &[Integer, Integer];
const NUM: &[ParamKind] = &[Number];

const fn op(name: &'static str, params: &'static [ParamKind], returns: ReturnShape, func: NativeFn) -> Operation {
    Operation {
        name,
        params,
        returns,
        func,
    }
}

// THE SINGLE SOURCE OF TRUTH
// External names are the wiringPi symbol names. Order is registration order.
// Not exported: piThreadCreate, piLock, piUnlock, wiringPiISR (callbacks and
// lock keys) and the deprecated wiringPiSetupPiFace.
pub const OPERATIONS: &[Operation] = &[
    // Setup
    op("wiringPiSetup", NONE, ReturnShape::Integer, pins::native_setup),
    op("wiringPiSetupSys", NONE, ReturnShape::Integer, pins::native_setup_sys),
    op("wiringPiSetupGpio", NONE, ReturnShape::Integer, pins::native_setup_gpio),
    op("wiringPiSetupPhys", NONE, ReturnShape::Integer, pins::native_setup_phys),
    // Core
    op("pinModeAlt", INT_INT, ReturnShape::None, pins::native_pin_mode_alt),
    op("pinMode", INT_INT, ReturnShape::None, pins::native_pin_mode),
    op("pullUpDnControl", INT_INT, ReturnShape::None, pins::native_pull_up_dn_control),
    op("digitalWrite", INT_INT, ReturnShape::None, pins::native_digital_write),
    op("pwmWrite", INT_INT, ReturnShape::None, pins::native_pwm_write),
    op("analogWrite", INT_INT, ReturnShape::None, pins::native_analog_write),
    // On-board hardware
    op("piBoardRev", NONE, ReturnShape::Integer, board::native_pi_board_rev),
    op("setPadDrive", INT_INT, ReturnShape::None, board::native_set_pad_drive),
    op("pwmToneWrite", INT_INT, ReturnShape::None, board::native_pwm_tone_write),
    op("gpioClockSet", INT_INT, ReturnShape::None, board::native_gpio_clock_set),
    // Interrupts
    op("waitForInterrupt", INT_INT, ReturnShape::None, timing::native_wait_for_interrupt),
    // Timing
    op("millis", NONE, ReturnShape::Number, timing::native_millis),
    op("micros", NONE, ReturnShape::Number, timing::native_micros),
    // Readers
    op("digitalRead", INT, ReturnShape::Integer, pins::native_digital_read),
    op("analogRead", INT, ReturnShape::Integer, pins::native_analog_read),
    op("wpiPinToGpio", INT, ReturnShape::Integer, board::native_wpi_pin_to_gpio),
    op("physPinToGpio", INT, ReturnShape::Integer, board::native_phys_pin_to_gpio),
    op("getAlt", INT, ReturnShape::Integer, board::native_get_alt),
    op("digitalWriteByte", INT, ReturnShape::None, pins::native_digital_write_byte),
    // PWM generator
    op("pwmSetMode", INT, ReturnShape::None, board::native_pwm_set_mode),
    op("pwmSetRange", NUM, ReturnShape::None, board::native_pwm_set_range),
    op("pwmSetClock", INT, ReturnShape::None, board::native_pwm_set_clock),
    // Scheduling priority
    op("piHiPri", INT, ReturnShape::Integer, timing::native_pi_hi_pri),
    op("delayMicroseconds", NUM, ReturnShape::None, timing::native_delay_microseconds),
    op("delay", NUM, ReturnShape::None, timing::native_delay),
    op("piBoardId", NONE, ReturnShape::Record, board::native_pi_board_id),
];

// Expected operation count. Update this when adding/removing operations.
pub const OPERATION_COUNT: usize = 30;
const _: () = assert!(
    OPERATIONS.len() == OPERATION_COUNT,
    "OPERATIONS length changed, update OPERATION_COUNT"
);

static BY_NAME: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    OPERATIONS
        .iter()
        .enumerate()
        .map(|(i, op)| (op.name, i))
        .collect()
});

/// Find an operation by its external name.
pub fn find(name: &str) -> Option<&'static Operation> {
    BY_NAME.get(name).map(|&i| &OPERATIONS[i])
}
