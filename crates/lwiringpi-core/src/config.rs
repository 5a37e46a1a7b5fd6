//! Optional TOML configuration: which backend to forward to, whether to run
//! a setup routine when the binding is built, and the identity the simulated
//! board reports.
//!
//! ```toml
//! backend = "simulated"
//! setup = "gpio"
//!
//! [board]
//! model = 6      # PI_MODEL_2
//! rev = 4        # PI_VERSION_2
//! mem = 1024
//! maker = 1      # PI_MAKER_EGOMAN
//! over_volted = 0
//! ```

use crate::backend::{RawBoardId, SimulatedBackend, WiringPi};
use crate::binding::Binding;
use crate::constants::{PI_MAKER_SONY, PI_MODEL_B, PI_VERSION_1_2};
use crate::error::{BindingError, BindingResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "LWIRINGPI_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Native,
    Simulated,
}

impl Default for BackendKind {
    fn default() -> Self {
        if cfg!(feature = "native") {
            BackendKind::Native
        } else {
            BackendKind::Simulated
        }
    }
}

/// Which `wiringPiSetup*` routine to run when the binding is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupMode {
    #[default]
    None,
    Pins,
    Sys,
    Gpio,
    Phys,
}

impl SetupMode {
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            SetupMode::None => None,
            SetupMode::Pins => Some("wiringPiSetup"),
            SetupMode::Sys => Some("wiringPiSetupSys"),
            SetupMode::Gpio => Some("wiringPiSetupGpio"),
            SetupMode::Phys => Some("wiringPiSetupPhys"),
        }
    }
}

/// Identity reported by the simulated board's `piBoardId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub model: i32,
    pub rev: i32,
    pub mem: i32,
    pub maker: i32,
    pub over_volted: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            model: PI_MODEL_B,
            rev: PI_VERSION_1_2,
            mem: 512,
            maker: PI_MAKER_SONY,
            over_volted: 0,
        }
    }
}

impl From<BoardConfig> for RawBoardId {
    fn from(b: BoardConfig) -> Self {
        RawBoardId {
            model: b.model,
            rev: b.rev,
            mem: b.mem,
            maker: b.maker,
            over_volted: b.over_volted,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub backend: BackendKind,
    pub setup: SetupMode,
    pub board: BoardConfig,
}

impl Config {
    pub fn parse(text: &str) -> BindingResult<Self> {
        toml::from_str(text).map_err(|e| BindingError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> BindingResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| BindingError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::parse(&text)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `LWIRINGPI_CONFIG`, or defaults when unset.
    pub fn from_env() -> BindingResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> BindingResult<String> {
        toml::to_string_pretty(self).map_err(|e| BindingError::Config(e.to_string()))
    }

    pub fn open_backend(&self) -> BindingResult<Box<dyn WiringPi>> {
        match self.backend {
            BackendKind::Simulated => Ok(Box::new(SimulatedBackend::with_identity(self.board.into()))),
            BackendKind::Native => native_backend(),
        }
    }

    /// Build the binding and run the configured setup routine, if any.
    pub fn open(&self) -> BindingResult<Binding> {
        let binding = Binding::new(self.open_backend()?);
        if let Some(name) = self.setup.operation() {
            let status = binding.call(name, &[])?;
            log::info!("{name}() -> {}", status.unwrap_or(crate::Value::Nil));
        }
        Ok(binding)
    }
}

#[cfg(feature = "native")]
fn native_backend() -> BindingResult<Box<dyn WiringPi>> {
    Ok(Box::new(crate::backend::NativeBackend::new()))
}

#[cfg(not(feature = "native"))]
fn native_backend() -> BindingResult<Box<dyn WiringPi>> {
    Err(BindingError::NativeFault {
        code: -1,
        message: "libwiringPi support not compiled in (build with the `native` feature)".into(),
    })
}
