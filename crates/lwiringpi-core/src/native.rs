use crate::backend::WiringPi;
use crate::error::BindingResult;
use crate::schema::Args;
use crate::value::Value;

// The unified signature for every exported operation.
// args: already coerced to the operation's declared parameter kinds.
// Return: Ok(None) for no-return routines, Ok(Some(v)) otherwise.
pub type NativeFn = fn(wp: &dyn WiringPi, args: &Args) -> BindingResult<Option<Value>>;
