use anyhow::Result;
use lwiringpi_core::CONSTANTS;
use std::io::Write;

pub fn list_constants(json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = CONSTANTS
            .iter()
            .map(|c| (c.name.to_string(), c.value.into()))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &map)?;
        writeln!(out)?;
        return Ok(());
    }

    for c in CONSTANTS {
        writeln!(out, "{}={}", c.name, c.value)?;
    }
    Ok(())
}
