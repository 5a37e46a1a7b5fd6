use crate::backend::WiringPi;
use crate::error::BindingResult;
use crate::schema::Args;
use crate::value::Value;

pub fn native_setup(wp: &dyn WiringPi, _args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.wiring_pi_setup().into()))
}

pub fn native_setup_sys(wp: &dyn WiringPi, _args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.wiring_pi_setup_sys().into()))
}

pub fn native_setup_gpio(wp: &dyn WiringPi, _args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.wiring_pi_setup_gpio().into()))
}

pub fn native_setup_phys(wp: &dyn WiringPi, _args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.wiring_pi_setup_phys().into()))
}

pub fn native_pin_mode_alt(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.pin_mode_alt(args.int(0)?, args.int(1)?);
    Ok(None)
}

pub fn native_pin_mode(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.pin_mode(args.int(0)?, args.int(1)?);
    Ok(None)
}

pub fn native_pull_up_dn_control(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.pull_up_dn_control(args.int(0)?, args.int(1)?);
    Ok(None)
}

pub fn native_digital_read(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.digital_read(args.int(0)?).into()))
}

pub fn native_digital_write(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.digital_write(args.int(0)?, args.int(1)?);
    Ok(None)
}

pub fn native_digital_write_byte(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.digital_write_byte(args.int(0)?);
    Ok(None)
}

pub fn native_pwm_write(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.pwm_write(args.int(0)?, args.int(1)?);
    Ok(None)
}

pub fn native_analog_read(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    Ok(Some(wp.analog_read(args.int(0)?).into()))
}

pub fn native_analog_write(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>> {
    wp.analog_write(args.int(0)?, args.int(1)?);
    Ok(None)
}
