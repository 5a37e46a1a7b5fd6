use anyhow::{Context, Result};
use lwiringpi_core::{Binding, Value, WiringPi};
use std::io::Write;

/// Shell word to script value: integer, then float, else the text itself.
pub fn parse_arg(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(n) = raw.parse::<f64>() {
        return Value::Number(n);
    }
    Value::String(raw.to_string())
}

pub fn call_command<B: WiringPi>(
    binding: &Binding<B>,
    op: &str,
    args: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let values: Vec<Value> = args.iter().map(|a| parse_arg(a)).collect();
    let result = binding.call(op, &values).with_context(|| format!("{op} failed"))?;

    if json {
        serde_json::to_writer(&mut *out, &result)?;
        writeln!(out)?;
    } else if let Some(value) = result {
        writeln!(out, "{value}")?;
    }
    Ok(())
}
