use crate::backend::WiringPi;
use crate::board::BoardIdentity;
use crate::error::BindingResult;
use crate::schema::Args;
use crate::value::Value;

pub fn native_pi_board_rev(wp: &dyn WiringPi, _args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.pi_board_rev().into()))
}

pub fn native_pi_board_id(wp: &dyn WiringPi, _args: &Args) -> BindingResult<Option<Value>> {
    let identity = BoardIdentity::resolve(wp, wp.pi_board_id());
    Ok(Some(identity.to_record().into()))
}

pub fn native_wpi_pin_to_gpio(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.wpi_pin_to_gpio(args.int(0)?).into()))
}

pub fn native_phys_pin_to_gpio(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.phys_pin_to_gpio(args.int(0)?).into()))
}

pub fn native_set_pad_drive(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.set_pad_drive(args.int(0)?, args.int(1)?);
    Ok(None)
}

pub fn native_get_alt(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.get_alt(args.int(0)?).into()))
}

pub fn native_pwm_tone_write(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.pwm_tone_write(args.int(0)?, args.int(1)?);
    Ok(None)
}

pub fn native_pwm_set_mode(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.pwm_set_mode(args.int(0)?);
    Ok(None)
}

pub fn native_pwm_set_range(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.pwm_set_range(args.uint(0)?);
    Ok(None)
}

pub fn native_pwm_set_clock(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.pwm_set_clock(args.int(0)?);
    Ok(None)
}

pub fn native_gpio_clock_set(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.gpio_clock_set(args.int(0)?, args.int(1)?);
    Ok(None)
}
