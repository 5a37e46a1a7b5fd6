//! Validate-then-coerce: turn loosely typed script values into the native
//! arguments an operation declares, or fail before anything is called.

use crate::error::{ArgumentFault, BindingError, BindingResult};
use crate::specs::Operation;
use crate::value::Value;

/// Semantic type of one positional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Native `int`. Accepts integers, integral floats and numeric strings.
    Integer,
    /// Native `unsigned int` fed from a float. Fractions are truncated toward
    /// zero, out-of-range values saturate.
    Number,
}

impl ParamKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape {
    None,
    Integer,
    Number,
    Record,
}

impl ReturnShape {
    pub fn describe(&self) -> &'static str {
        match self {
            ReturnShape::None => "none",
            ReturnShape::Integer => "integer",
            ReturnShape::Number => "number",
            ReturnShape::Record => "record",
        }
    }
}

/// A coerced native argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Int(i32),
    Uint(u32),
}

/// Coerced arguments for one call, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    operation: &'static str,
    values: Vec<Arg>,
}

impl Args {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Arg] {
        &self.values
    }

    pub fn int(&self, index: usize) -> BindingResult<i32> {
        match self.values.get(index) {
            Some(Arg::Int(v)) => Ok(*v),
            other => Err(self.layout_error(index, "Integer", other)),
        }
    }

    pub fn uint(&self, index: usize) -> BindingResult<u32> {
        match self.values.get(index) {
            Some(Arg::Uint(v)) => Ok(*v),
            other => Err(self.layout_error(index, "Number", other)),
        }
    }

    fn layout_error(&self, index: usize, wanted: &str, found: Option<&Arg>) -> BindingError {
        BindingError::Internal(format!(
            "{}: argument {} read as {wanted}, descriptor has {found:?}",
            self.operation,
            index + 1
        ))
    }
}

/// Validate every declared position of `op` against `raw`, then coerce.
///
/// All positions are checked before returning, so a failure means no native
/// call happens. The first failing position is the one reported. Extra
/// trailing values are ignored.
pub fn coerce(op: &Operation, raw: &[Value]) -> BindingResult<Args> {
    static NIL: Value = Value::Nil;
    let mut values = Vec::with_capacity(op.params.len());
    for (i, kind) in op.params.iter().enumerate() {
        let value = raw.get(i).unwrap_or(&NIL);
        let missing = i >= raw.len();
        let arg = match kind {
            ParamKind::Integer => to_integer(value, missing).map(Arg::Int),
            ParamKind::Number => to_unsigned(value, missing).map(Arg::Uint),
        }
        .map_err(|fault| BindingError::argument(op.name, i + 1, fault))?;
        values.push(arg);
    }
    Ok(Args {
        operation: op.name,
        values,
    })
}

fn type_error(value: &Value, missing: bool) -> ArgumentFault {
    let got = if missing { "no value" } else { value.type_name() };
    ArgumentFault::TypeMismatch { got }
}

/// Coerce to a native `int`.
pub fn to_integer(value: &Value, missing: bool) -> Result<i32, ArgumentFault> {
    let number = numeric(value).ok_or_else(|| type_error(value, missing))?;
    let whole = match number {
        Numeric::Int(i) => i,
        Numeric::Float(f) => float_to_integer(f).ok_or(ArgumentFault::NotInteger)?,
    };
    i32::try_from(whole).map_err(|_| ArgumentFault::OutOfRange(whole))
}

/// Coerce to a native `unsigned int`, truncating toward zero.
pub fn to_unsigned(value: &Value, missing: bool) -> Result<u32, ArgumentFault> {
    let number = numeric(value).ok_or_else(|| type_error(value, missing))?;
    Ok(match number {
        Numeric::Int(i) => u32::try_from(i.max(0)).unwrap_or(u32::MAX),
        // `as` truncates toward zero and saturates; NaN becomes 0.
        Numeric::Float(f) => f as u32,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Int(i64),
    Float(f64),
}

fn numeric(value: &Value) -> Option<Numeric> {
    match value {
        Value::Integer(i) => Some(Numeric::Int(*i)),
        Value::Number(n) => Some(Numeric::Float(*n)),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    // 2^63 is exact in f64; anything at or past it does not fit.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() != 0.0 || !(-LIMIT..LIMIT).contains(&f) {
        return None;
    }
    Some(f as i64)
}

/// Script-style string to number conversion: surrounding whitespace is
/// allowed, hex integers take a `0x` prefix after the sign, `inf` and `nan`
/// are rejected.
fn parse_numeric(s: &str) -> Option<Numeric> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let (negative, body) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        // from_str_radix takes its own sign; the digits after 0x must not.
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let magnitude = i64::from_str_radix(hex, 16).ok()?;
        return Some(Numeric::Int(if negative { -magnitude } else { magnitude }));
    }
    if let Ok(i) = t.parse::<i64>() {
        return Some(Numeric::Int(i));
    }
    if body.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    t.parse::<f64>().ok().map(Numeric::Float)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs;
    use proptest::prelude::*;

    fn op(name: &str) -> &'static Operation {
        specs::find(name).expect("operation in table")
    }

    fn mismatch(got: &'static str) -> Result<i32, ArgumentFault> {
        Err(ArgumentFault::TypeMismatch { got })
    }

    #[test]
    fn integer_accepts_integral_values() {
        assert_eq!(to_integer(&Value::Integer(7), false), Ok(7));
        assert_eq!(to_integer(&Value::Number(7.0), false), Ok(7));
        assert_eq!(to_integer(&Value::from(" 12 "), false), Ok(12));
        assert_eq!(to_integer(&Value::from("0x1F"), false), Ok(31));
        assert_eq!(to_integer(&Value::from("-3"), false), Ok(-3));
        assert_eq!(to_integer(&Value::from("4e1"), false), Ok(40));
    }

    #[test]
    fn integer_rejects_fractions_and_non_numbers() {
        assert_eq!(to_integer(&Value::Number(1.5), false), Err(ArgumentFault::NotInteger));
        assert_eq!(to_integer(&Value::from("pin"), false), mismatch("string"));
        assert_eq!(to_integer(&Value::Boolean(true), false), mismatch("boolean"));
        assert_eq!(to_integer(&Value::Nil, true), mismatch("no value"));
        assert_eq!(to_integer(&Value::Nil, false), mismatch("nil"));
        assert!(to_integer(&Value::from("inf"), false).is_err());
        assert!(to_integer(&Value::from("nan"), false).is_err());
        for malformed in ["0x-5", "-0x-7", "0x+5", "+0x-1", "0x", "-0x", "0x 5", "0x5g"] {
            assert_eq!(to_integer(&Value::from(malformed), false), mismatch("string"), "{malformed}");
        }
        assert_eq!(to_integer(&Value::from("-0x7"), false), Ok(-7));
    }

    #[test]
    fn integer_rejects_values_outside_native_int() {
        assert_eq!(
            to_integer(&Value::Integer(i64::from(i32::MAX) + 1), false),
            Err(ArgumentFault::OutOfRange(2_147_483_648))
        );
        assert!(to_integer(&Value::Number(1e300), false).is_err());
    }

    #[test]
    fn unsigned_truncates_and_saturates() {
        assert_eq!(to_unsigned(&Value::Number(3.9), false), Ok(3));
        assert_eq!(to_unsigned(&Value::Number(0.999), false), Ok(0));
        assert_eq!(to_unsigned(&Value::Number(-2.5), false), Ok(0));
        assert_eq!(to_unsigned(&Value::Integer(-1), false), Ok(0));
        assert_eq!(to_unsigned(&Value::Number(f64::NAN), false), Ok(0));
        assert_eq!(to_unsigned(&Value::Number(1e12), false), Ok(u32::MAX));
        assert_eq!(to_unsigned(&Value::from("10.7"), false), Ok(10));
    }

    #[test]
    fn coerce_reports_first_bad_position() {
        let err = coerce(op("pinMode"), &[Value::Integer(1), Value::from("out")]).unwrap_err();
        assert_eq!(err.position(), Some(2));
        assert_eq!(
            err.to_string(),
            "bad argument #2 to 'pinMode' (number expected, got string)"
        );

        let err = coerce(op("pinMode"), &[Value::Nil, Value::from("out")]).unwrap_err();
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn coerce_reports_missing_arguments() {
        let err = coerce(op("digitalWrite"), &[Value::Integer(1)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad argument #2 to 'digitalWrite' (number expected, got no value)"
        );
    }

    #[test]
    fn coerce_ignores_extra_arguments() {
        let args = coerce(op("digitalRead"), &[Value::Integer(3), Value::from("extra")]).unwrap();
        assert_eq!(args.values(), &[Arg::Int(3)]);
    }

    #[test]
    fn args_accessors_check_layout() {
        let args = coerce(op("delay"), &[Value::Number(2.2)]).unwrap();
        assert_eq!(args.uint(0), Ok(2));
        assert!(matches!(args.int(0), Err(BindingError::Internal(_))));
        assert!(matches!(args.uint(1), Err(BindingError::Internal(_))));
    }

    proptest! {
        #[test]
        fn durations_truncate_toward_zero(x in 0.0f64..4_000_000_000.0) {
            let got = to_unsigned(&Value::Number(x), false).unwrap();
            prop_assert_eq!(got, x.trunc() as u32);
            prop_assert_eq!(got, to_unsigned(&Value::Number(x.trunc()), false).unwrap());
        }

        #[test]
        fn integers_in_range_pass_through(i in any::<i32>()) {
            prop_assert_eq!(to_integer(&Value::Integer(i.into()), false), Ok(i));
            prop_assert_eq!(to_integer(&Value::Number(f64::from(i)), false), Ok(i));
            prop_assert_eq!(to_integer(&Value::String(i.to_string()), false), Ok(i));
        }

        #[test]
        fn fractional_floats_never_coerce_to_integer(i in -1_000_000i32..1_000_000, frac in 0.01f64..0.99) {
            prop_assert!(to_integer(&Value::Number(f64::from(i) + frac), false).is_err());
        }
    }
}
