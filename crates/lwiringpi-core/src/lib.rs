//! Binding table between a dynamically typed script caller and the wiringPi
//! GPIO library.
//!
//! Each exported operation is a one-to-one forward: coerce the script
//! arguments against the operation's declared parameters, call the wiringPi
//! routine, hand the result back as a [`Value`]. Alongside the operations the
//! module namespace carries every wiringPi constant, copied verbatim.
//!
//! ```
//! use lwiringpi_core::{Binding, SimulatedBackend, Value};
//!
//! let wpi = Binding::new(SimulatedBackend::new());
//! wpi.call("wiringPiSetupGpio", &[]).unwrap();
//! wpi.call("pinMode", &[Value::Integer(17), Value::Integer(1)]).unwrap();
//! wpi.call("digitalWrite", &[Value::Integer(17), Value::Integer(1)]).unwrap();
//! assert_eq!(wpi.call("digitalRead", &[Value::Integer(17)]).unwrap(), Some(Value::Integer(1)));
//! ```

pub mod backend;
pub mod binding;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod native;
pub mod ops;
pub mod schema;
pub mod specs;
pub mod value;

#[cfg(feature = "native")]
pub use backend::NativeBackend;
pub use backend::{NativeCall, RawBoardId, SimulatedBackend, WiringPi};
pub use binding::{exports, Binding, Export, ExportSink};
pub use board::BoardIdentity;
pub use config::{BackendKind, Config, SetupMode};
pub use constants::{ConstantEntry, CONSTANTS};
pub use error::{ArgumentFault, BindingError, BindingResult};
pub use native::NativeFn;
pub use schema::{ParamKind, ReturnShape};
pub use specs::{Operation, OPERATIONS};
pub use value::{Record, Value};
