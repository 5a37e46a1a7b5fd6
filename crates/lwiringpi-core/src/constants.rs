//! Mirror of the `#define`s in `wiringPi.h` (2.2x series).
//!
//! Each name becomes a `pub const` and an entry in [`CONSTANTS`], in header
//! order. The values are copied verbatim; nothing here is computed.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantEntry {
    pub name: &'static str,
    pub value: i32,
}

macro_rules! wiring_constants {
    ($( $(#[$meta:meta])* $name:ident = $value:expr, )*) => {
        $(
            $(#[$meta])*
            pub const $name: i32 = $value;
        )*

        /// Every exported constant, in header order.
        pub const CONSTANTS: &[ConstantEntry] = &[
            $( ConstantEntry { name: stringify!($name), value: $name }, )*
        ];
    };
}

wiring_constants! {
    /// Deprecated in wiringPi, still exported.
    NUM_PINS = 17,

    WPI_MODE_PINS = 0,
    WPI_MODE_GPIO = 1,
    WPI_MODE_GPIO_SYS = 2,
    WPI_MODE_PHYS = 3,
    WPI_MODE_PIFACE = 4,
    WPI_MODE_UNINITIALISED = -1,

    // Pin modes
    INPUT = 0,
    OUTPUT = 1,
    PWM_OUTPUT = 2,
    GPIO_CLOCK = 3,
    SOFT_PWM_OUTPUT = 4,
    SOFT_TONE_OUTPUT = 5,
    PWM_TONE_OUTPUT = 6,

    LOW = 0,
    HIGH = 1,

    // Pull up/down/none
    PUD_OFF = 0,
    PUD_DOWN = 1,
    PUD_UP = 2,

    // PWM
    PWM_MODE_MS = 0,
    PWM_MODE_BAL = 1,

    // Interrupt levels
    INT_EDGE_SETUP = 0,
    INT_EDGE_FALLING = 1,
    INT_EDGE_RISING = 2,
    INT_EDGE_BOTH = 3,

    // Pi model types and version numbers
    PI_MODEL_UNKNOWN = 0,
    PI_MODEL_A = 1,
    PI_MODEL_B = 2,
    PI_MODEL_BP = 3,
    PI_MODEL_CM = 4,
    PI_MODEL_AP = 5,
    PI_MODEL_2 = 6,

    PI_VERSION_UNKNOWN = 0,
    PI_VERSION_1 = 1,
    PI_VERSION_1_1 = 2,
    PI_VERSION_1_2 = 3,
    PI_VERSION_2 = 4,

    PI_MAKER_UNKNOWN = 0,
    PI_MAKER_EGOMAN = 1,
    PI_MAKER_SONY = 2,
    PI_MAKER_QISDA = 3,
    PI_MAKER_MBEST = 4,
}

// Expected constant count. Update this when the header mirror changes.
pub const CONSTANT_COUNT: usize = 42;
const _: () = assert!(
    CONSTANTS.len() == CONSTANT_COUNT,
    "CONSTANTS length changed, update CONSTANT_COUNT"
);

/// Same content as the native `piModelNames`, indexed by `PI_MODEL_*`.
pub const MODEL_NAMES: [&str; 7] = [
    "Unknown",
    "Model A",
    "Model B",
    "Model B+",
    "Compute Module",
    "Model A+",
    "Model 2",
];

/// Same content as the native `piRevisionNames`, indexed by `PI_VERSION_*`.
pub const REVISION_NAMES: [&str; 5] = ["Unknown", "1", "1.1", "1.2", "2"];

/// Same content as the native `piMakerNames`, indexed by `PI_MAKER_*`.
pub const MAKER_NAMES: [&str; 5] = ["Unknown", "Egoman", "Sony", "Qisda", "MBest"];

static BY_NAME: Lazy<HashMap<&'static str, i32>> =
    Lazy::new(|| CONSTANTS.iter().map(|c| (c.name, c.value)).collect());

/// Look up a constant by its exported name.
pub fn lookup(name: &str) -> Option<i32> {
    BY_NAME.get(name).copied()
}
