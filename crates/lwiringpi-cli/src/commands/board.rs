use anyhow::{anyhow, Context, Result};
use lwiringpi_core::{Binding, Value, WiringPi};
use std::io::Write;

pub fn board_command<B: WiringPi>(binding: &Binding<B>, json: bool, out: &mut dyn Write) -> Result<()> {
    let id = binding.call("piBoardId", &[]).context("piBoardId failed")?;
    let Some(Value::Record(record)) = id else {
        return Err(anyhow!("piBoardId returned no record"));
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &record)?;
        writeln!(out)?;
    } else {
        for (name, value) in record.iter() {
            writeln!(out, "{name:<11} {value}")?;
        }
    }
    Ok(())
}
