use anyhow::Result;
use lwiringpi_core::OPERATIONS;
use serde_json::json;
use std::io::Write;

pub fn list_operations(json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let ops: Vec<_> = OPERATIONS
            .iter()
            .map(|op| {
                json!({
                    "name": op.name,
                    "params": op.params.iter().map(|p| p.describe()).collect::<Vec<_>>(),
                    "returns": op.returns.describe(),
                })
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &ops)?;
        writeln!(out)?;
        return Ok(());
    }

    for op in OPERATIONS {
        let params: Vec<_> = op.params.iter().map(|p| p.describe()).collect();
        writeln!(
            out,
            "{:<22} ({}) -> {}",
            op.name,
            params.join(", "),
            op.returns.describe()
        )?;
    }
    Ok(())
}
