use lwiringpi_cli::commands::{board, call, constants, ops};
use lwiringpi_cli::load_config;
use lwiringpi_core::{BackendKind, Binding, RawBoardId, SetupMode, SimulatedBackend, OPERATIONS};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp_config(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::with_suffix(".toml").unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn gpio_binding() -> Binding<SimulatedBackend> {
    let binding = Binding::new(SimulatedBackend::new());
    binding.call("wiringPiSetupGpio", &[]).unwrap();
    binding
}

fn words(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

// ======================================================================
// call
// ======================================================================

#[test]
fn call_prints_scalar_result() {
    let binding = gpio_binding();
    let mut buf = Vec::new();
    call::call_command(&binding, "pinMode", &words(&["17", "1"]), false, &mut buf).unwrap();
    call::call_command(&binding, "digitalWrite", &words(&["17", "1"]), false, &mut buf).unwrap();
    assert!(buf.is_empty(), "no-return operations print nothing");

    call::call_command(&binding, "digitalRead", &words(&["17"]), false, &mut buf).unwrap();
    assert_eq!(output(buf), "1\n");
}

#[test]
fn call_json_prints_null_for_no_result() {
    let binding = gpio_binding();
    let mut buf = Vec::new();
    call::call_command(&binding, "delay", &words(&["1"]), true, &mut buf).unwrap();
    assert_eq!(output(buf), "null\n");
}

#[test]
fn call_reports_bad_argument() {
    let binding = gpio_binding();
    let mut buf = Vec::new();
    let err = call::call_command(&binding, "digitalWrite", &words(&["17", "on"]), false, &mut buf)
        .unwrap_err();
    let chain = format!("{err:#}");
    assert!(
        chain.contains("bad argument #2 to 'digitalWrite' (number expected, got string)"),
        "got: {chain}"
    );
}

#[test]
fn call_unknown_operation_fails() {
    let binding = gpio_binding();
    let mut buf = Vec::new();
    let err = call::call_command(&binding, "piLock", &words(&["0"]), false, &mut buf).unwrap_err();
    assert!(format!("{err:#}").contains("no such operation: 'piLock'"));
}

#[test]
fn call_truncates_float_durations() {
    let binding = gpio_binding();
    binding.backend().clear_calls();
    let mut buf = Vec::new();
    call::call_command(&binding, "delay", &words(&["2.7"]), false, &mut buf).unwrap();
    assert_eq!(binding.backend().calls()[0].args, vec![2]);
}

// ======================================================================
// ops / constants
// ======================================================================

#[test]
fn ops_lists_every_operation() {
    let mut buf = Vec::new();
    ops::list_operations(false, &mut buf).unwrap();
    let text = output(buf);
    assert_eq!(text.lines().count(), OPERATIONS.len());
    assert!(text.contains("waitForInterrupt       (integer, integer) -> none"));
    assert!(text.contains("delay                  (number) -> none"));
}

#[test]
fn ops_json_is_an_array_of_descriptors() {
    let mut buf = Vec::new();
    ops::list_operations(true, &mut buf).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), OPERATIONS.len());
    let board_id = arr.iter().find(|o| o["name"] == "piBoardId").unwrap();
    assert_eq!(board_id["returns"], "record");
    assert_eq!(board_id["params"].as_array().unwrap().len(), 0);
}

#[test]
fn constants_text_and_json() {
    let mut buf = Vec::new();
    constants::list_constants(false, &mut buf).unwrap();
    let text = output(buf);
    assert_eq!(text.lines().next(), Some("NUM_PINS=17"));
    assert!(text.lines().any(|l| l == "WPI_MODE_UNINITIALISED=-1"));

    let mut buf = Vec::new();
    constants::list_constants(true, &mut buf).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed["PI_MAKER_MBEST"], 4);
}

// ======================================================================
// board
// ======================================================================

#[test]
fn board_prints_identity() {
    let binding = Binding::new(SimulatedBackend::with_identity(RawBoardId {
        model: 6,
        rev: 4,
        mem: 1024,
        maker: 2,
        over_volted: 0,
    }));
    let mut buf = Vec::new();
    board::board_command(&binding, true, &mut buf).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed["model"], "Model 2");
    assert_eq!(parsed["rev"], "2");
    assert_eq!(parsed["mem"], 1024.0);
    assert_eq!(parsed["maker"], "Sony");

    let mut buf = Vec::new();
    board::board_command(&binding, false, &mut buf).unwrap();
    let text = output(buf);
    assert!(text.lines().any(|l| l == "model       Model 2"));
    assert!(text.lines().any(|l| l == "overVolted  0.0"));
}

// ======================================================================
// load_config
// ======================================================================

#[test]
fn backend_flag_overrides_file() {
    let file = write_temp_config("backend = \"native\"\nsetup = \"phys\"\n");
    let config = load_config(Some(file.path()), Some(BackendKind::Simulated)).unwrap();
    assert_eq!(config.backend, BackendKind::Simulated);
    assert_eq!(config.setup, SetupMode::Phys);
}

#[test]
fn missing_config_file_has_context() {
    let err = load_config(Some(std::path::Path::new("/nonexistent/wpi.toml")), None).unwrap_err();
    assert!(err.to_string().contains("Failed to load configuration"));
}
