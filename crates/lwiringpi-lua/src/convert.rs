use lwiringpi_core::Value;
use mlua::{Lua, Value as LuaValue};

/// Lua value to binding value. Tables, functions and the like only keep
/// their type name; no operation accepts them.
pub fn from_lua(value: &LuaValue) -> Value {
    match value {
        LuaValue::Nil => Value::Nil,
        LuaValue::Boolean(b) => Value::Boolean(*b),
        LuaValue::Integer(i) => Value::Integer(*i),
        LuaValue::Number(n) => Value::Number(*n),
        LuaValue::String(s) => Value::String(s.to_string_lossy().to_string()),
        other => Value::Opaque(other.type_name()),
    }
}

/// Binding value to Lua value. Records become fresh tables.
pub fn to_lua(lua: &Lua, value: &Value) -> mlua::Result<LuaValue> {
    Ok(match value {
        Value::Nil | Value::Opaque(_) => LuaValue::Nil,
        Value::Boolean(b) => LuaValue::Boolean(*b),
        Value::Integer(i) => LuaValue::Integer(*i),
        Value::Number(n) => LuaValue::Number(*n),
        Value::String(s) => LuaValue::String(lua.create_string(s)?),
        Value::Record(record) => {
            let table = lua.create_table()?;
            for (name, field) in record.iter() {
                table.set(name, to_lua(lua, field)?)?;
            }
            LuaValue::Table(table)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lwiringpi_core::Record;

    #[test]
    fn scalars_keep_their_lua_subtype() {
        let lua = Lua::new();
        assert_eq!(from_lua(&LuaValue::Integer(3)), Value::Integer(3));
        assert_eq!(from_lua(&LuaValue::Number(3.5)), Value::Number(3.5));
        let s = lua.create_string("17").unwrap();
        assert_eq!(from_lua(&LuaValue::String(s)), Value::from("17"));
        let t = lua.create_table().unwrap();
        assert_eq!(from_lua(&LuaValue::Table(t)), Value::Opaque("table"));
    }

    #[test]
    fn record_becomes_table() {
        let lua = Lua::new();
        let record = Record::new().with("model", "Model A").with("mem", 256.0);
        let value = to_lua(&lua, &Value::Record(record)).unwrap();
        let LuaValue::Table(table) = value else {
            panic!("expected a table");
        };
        assert_eq!(table.get::<String>("model").unwrap(), "Model A");
        assert_eq!(table.get::<f64>("mem").unwrap(), 256.0);
    }
}
