//! `require "lwiringpi"`: the wiringPi binding table as a Lua module.
//!
//! The module table holds one function per exported operation followed by
//! every wiringPi constant as an integer field:
//!
//! ```lua
//! local wpi = require "lwiringpi"
//! wpi.wiringPiSetupGpio()
//! wpi.pinMode(17, wpi.OUTPUT)
//! wpi.digitalWrite(17, wpi.HIGH)
//! wpi.delay(500)
//! print(wpi.piBoardId().model)
//! ```
//!
//! The backend comes from the file named by `LWIRINGPI_CONFIG` (see
//! [`lwiringpi_core::Config`]).

use lwiringpi_core::{Binding, BindingError, Config, ConstantEntry, ExportSink, Operation, Value, WiringPi};
use mlua::{Lua, MultiValue, Table, Value as LuaValue, Variadic};
use std::rc::Rc;

pub mod convert;

pub use convert::{from_lua, to_lua};

/// Build the module table from the configured backend.
pub fn open(lua: &Lua) -> mlua::Result<Table> {
    let config = Config::from_env().map_err(into_lua_error)?;
    log::debug!("lwiringpi: {:?} backend, setup {:?}", config.backend, config.setup);
    let binding = config.open().map_err(into_lua_error)?;
    register(lua, binding)
}

/// Build the module table over an explicit binding.
pub fn register<B: WiringPi + 'static>(lua: &Lua, binding: Binding<B>) -> mlua::Result<Table> {
    register_shared(lua, Rc::new(binding))
}

/// Like [`register`], for callers that keep their own handle on the binding.
pub fn register_shared<B: WiringPi + 'static>(lua: &Lua, binding: Rc<Binding<B>>) -> mlua::Result<Table> {
    let mut module = ModuleBuilder {
        lua,
        table: lua.create_table()?,
        binding,
    };
    module.bootstrap_exports()?;
    Ok(module.table)
}

pub fn into_lua_error(err: BindingError) -> mlua::Error {
    mlua::Error::RuntimeError(err.to_string())
}

struct ModuleBuilder<'a, B: WiringPi> {
    lua: &'a Lua,
    table: Table,
    binding: Rc<Binding<B>>,
}

impl<B: WiringPi + 'static> ExportSink for ModuleBuilder<'_, B> {
    type Error = mlua::Error;

    fn define_operation(&mut self, op: &'static Operation) -> mlua::Result<()> {
        let binding = Rc::clone(&self.binding);
        let func = self.lua.create_function(move |lua, args: MultiValue| {
            let raw: Vec<Value> = args.iter().map(from_lua).collect();
            let result = binding.invoke(op, &raw).map_err(into_lua_error)?;
            let mut out: Variadic<LuaValue> = Variadic::new();
            if let Some(value) = result {
                out.push(to_lua(lua, &value)?);
            }
            Ok(out)
        })?;
        self.table.set(op.name, func)
    }

    fn define_constant(&mut self, constant: &'static ConstantEntry) -> mlua::Result<()> {
        self.table.set(constant.name, constant.value)
    }
}

#[cfg(feature = "module")]
#[mlua::lua_module]
fn lwiringpi(lua: &Lua) -> mlua::Result<Table> {
    open(lua)
}
