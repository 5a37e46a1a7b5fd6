use lwiringpi::register_shared;
use lwiringpi_core::constants::{HIGH, PI_MAKER_EGOMAN, PI_MODEL_A, PI_VERSION_1_1};
use lwiringpi_core::{Binding, RawBoardId, SimulatedBackend, CONSTANTS, OPERATIONS};
use mlua::Lua;
use std::rc::Rc;

/// Lua state with the module installed as global `wpi`.
fn lua_with(binding: Binding<SimulatedBackend>) -> (Lua, Rc<Binding<SimulatedBackend>>) {
    let lua = Lua::new();
    let binding = Rc::new(binding);
    let module = register_shared(&lua, Rc::clone(&binding)).unwrap();
    lua.globals().set("wpi", module).unwrap();
    (lua, binding)
}

fn lua_gpio() -> (Lua, Rc<Binding<SimulatedBackend>>) {
    let (lua, binding) = lua_with(Binding::new(SimulatedBackend::new()));
    lua.load("wpi.wiringPiSetupGpio()").exec().unwrap();
    binding.backend().clear_calls();
    (lua, binding)
}

#[test]
fn blink_script_drives_the_pin() {
    let (lua, binding) = lua_gpio();
    lua.load(
        r#"
        wpi.pinMode(17, wpi.OUTPUT)
        wpi.digitalWrite(17, wpi.HIGH)
        "#,
    )
    .exec()
    .unwrap();
    assert_eq!(binding.backend().level(17), Some(HIGH));
    let read: i64 = lua.load("return wpi.digitalRead(17)").eval().unwrap();
    assert_eq!(read, 1);
}

#[test]
fn module_table_holds_every_export() {
    let (lua, _binding) = lua_gpio();
    let table: mlua::Table = lua.globals().get("wpi").unwrap();
    for op in OPERATIONS {
        assert!(table.get::<mlua::Function>(op.name).is_ok(), "{}", op.name);
    }
    for c in CONSTANTS {
        assert_eq!(table.get::<i64>(c.name).unwrap(), i64::from(c.value), "{}", c.name);
    }
    let omitted: bool = lua
        .load("return wpi.piLock == nil and wpi.wiringPiISR == nil and wpi.piThreadCreate == nil")
        .eval()
        .unwrap();
    assert!(omitted);
}

#[test]
fn constants_are_lua_integers() {
    let (lua, _binding) = lua_gpio();
    let kind: String = lua.load("return math.type(wpi.INT_EDGE_BOTH)").eval().unwrap();
    assert_eq!(kind, "integer");
}

#[test]
fn bad_argument_raises_lua_error() {
    let (lua, binding) = lua_gpio();
    let err = lua.load("wpi.digitalWrite(17, 'on')").exec().unwrap_err();
    assert!(
        err.to_string()
            .contains("bad argument #2 to 'digitalWrite' (number expected, got string)"),
        "{err}"
    );
    assert!(binding.backend().calls().is_empty());

    let caught: bool = lua
        .load("local ok = pcall(wpi.pinMode, {}, 1); return ok")
        .eval()
        .unwrap();
    assert!(!caught);
}

#[test]
fn operations_without_result_push_nothing() {
    let (lua, _binding) = lua_gpio();
    let counts: (i64, i64, i64) = lua
        .load(
            r#"
            return select('#', wpi.pinMode(4, 1)),
                   select('#', wpi.digitalRead(4)),
                   select('#', wpi.waitForInterrupt(4, 0))
            "#,
        )
        .eval()
        .unwrap();
    assert_eq!(counts, (0, 1, 0));
}

#[test]
fn delay_truncates_fractional_milliseconds() {
    let (lua, binding) = lua_gpio();
    lua.load("wpi.delay(3.9)").exec().unwrap();
    let calls = binding.backend().calls();
    assert_eq!(calls.last().map(|c| c.args.clone()), Some(vec![3]));
}

#[test]
fn millis_is_a_float() {
    let (lua, _binding) = lua_gpio();
    let kind: String = lua.load("return math.type(wpi.millis())").eval().unwrap();
    assert_eq!(kind, "float");
}

#[test]
fn board_id_is_a_table() {
    let (lua, _binding) = lua_with(Binding::new(SimulatedBackend::with_identity(RawBoardId {
        model: PI_MODEL_A,
        rev: PI_VERSION_1_1,
        mem: 256,
        maker: PI_MAKER_EGOMAN,
        over_volted: 0,
    })));
    let (model, rev, mem, maker, over_volted): (String, String, f64, String, f64) = lua
        .load(
            r#"
            local b = wpi.piBoardId()
            return b.model, b.rev, b.mem, b.maker, b.overVolted
            "#,
        )
        .eval()
        .unwrap();
    assert_eq!(model, "Model A");
    assert_eq!(rev, "1.1");
    assert_eq!(mem, 256.0);
    assert_eq!(maker, "Egoman");
    assert_eq!(over_volted, 0.0);
}

#[test]
fn numeric_strings_coerce_like_lua() {
    let (lua, binding) = lua_gpio();
    lua.load("wpi.pinMode('27', 1); wpi.digitalWrite('27', '1')")
        .exec()
        .unwrap();
    assert_eq!(binding.backend().level(27), Some(HIGH));
}
