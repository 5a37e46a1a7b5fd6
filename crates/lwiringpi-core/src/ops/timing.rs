use crate::backend::WiringPi;
use crate::error::BindingResult;
use crate::schema::Args;
use crate::value::Value;

/// Blocks the caller until the edge arrives or `ms` elapses. The native
/// return code is not passed back.
pub fn native_wait_for_interrupt(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    let (pin, ms) = (args.int(0)?, args.int(1)?);
    let code = wp.wait_for_interrupt(pin, ms);
    log::trace!("waitForInterrupt({pin}, {ms}) -> {code}");
    Ok(None)
}

pub fn native_pi_hi_pri(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.pi_hi_pri(args.int(0)?).into()))
}

pub fn native_delay(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.delay(args.uint(0)?);
    Ok(None)
}

pub fn native_delay_microseconds(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.delay_microseconds(args.uint(0)?);
    Ok(None)
}

// Elapsed-time counters come back as script numbers, not integers.
pub fn native_millis(wp: &dyn WiringPi, _args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(Value::Number(f64::from(wp.millis()))))
}

pub fn native_micros(wp: &dyn WiringPi, _args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(Value::Number(f64::from(wp.micros()))))
}
