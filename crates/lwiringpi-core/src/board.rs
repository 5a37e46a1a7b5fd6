use crate::backend::{RawBoardId, WiringPi};
use crate::value::Record;

/// `piBoardId` output with the model, revision and maker indices resolved
/// through the native name tables. Memory size and the over-volt flag stay
/// numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardIdentity {
    pub model: String,
    pub rev: String,
    pub mem: i32,
    pub maker: String,
    pub over_volted: i32,
}

impl BoardIdentity {
    pub fn resolve(wp: &dyn WiringPi, raw: RawBoardId) -> Self {
        BoardIdentity {
            model: resolve_name("model", raw.model, |i| wp.model_name(i)),
            rev: resolve_name("revision", raw.rev, |i| wp.revision_name(i)),
            mem: raw.mem,
            maker: resolve_name("maker", raw.maker, |i| wp.maker_name(i)),
            over_volted: raw.over_volted,
        }
    }

    /// Script-facing record: `model`, `rev`, `mem`, `maker`, `overVolted`.
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("model", self.model.as_str())
            .with("rev", self.rev.as_str())
            .with("mem", f64::from(self.mem))
            .with("maker", self.maker.as_str())
            .with("overVolted", f64::from(self.over_volted))
    }
}

// An index past the end of a table falls back to entry 0 ("Unknown").
fn resolve_name(table: &str, index: i32, lookup: impl Fn(i32) -> Option<String>) -> String {
    lookup(index)
        .or_else(|| {
            log::warn!("board {table} index {index} is outside the name table");
            lookup(0)
        })
        .unwrap_or_else(|| "Unknown".to_string())
}
