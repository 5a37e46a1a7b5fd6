use lwiringpi_core::{BackendKind, BindingError, Config, SetupMode, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp_config(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::with_suffix(".toml").unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn load_from_file() {
    let file = write_temp_config(
        "backend = \"simulated\"\nsetup = \"phys\"\n\n[board]\nmodel = 6\nrev = 4\nmem = 1024\nmaker = 1\n",
    );
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.backend, BackendKind::Simulated);
    assert_eq!(config.setup, SetupMode::Phys);
    assert_eq!(config.board.mem, 1024);
}

#[test]
fn missing_file_is_a_config_error() {
    let err = Config::load(std::path::Path::new("/nonexistent/lwiringpi.toml")).unwrap_err();
    assert!(matches!(err, BindingError::Config(_)));
    assert!(err.to_string().contains("/nonexistent/lwiringpi.toml"));
}

#[test]
fn malformed_toml_is_a_config_error() {
    let file = write_temp_config("backend = [\n");
    assert!(matches!(Config::load(file.path()), Err(BindingError::Config(_))));
}

#[test]
fn open_runs_configured_setup() {
    let file = write_temp_config("backend = \"simulated\"\nsetup = \"gpio\"\n");
    let binding = Config::load(file.path()).unwrap().open().unwrap();
    binding
        .call("digitalWrite", &[Value::Integer(17), Value::Integer(1)])
        .unwrap();
    // Without setup the simulated board ignores pins, so the read would be 0.
    assert_eq!(
        binding.call("digitalRead", &[Value::Integer(17)]).unwrap(),
        Some(Value::Integer(1))
    );
}

#[test]
fn board_identity_comes_from_config() {
    let file = write_temp_config("backend = \"simulated\"\n[board]\nmodel = 4\nmaker = 4\n");
    let binding = Config::load(file.path()).unwrap().open().unwrap();
    let id = binding.call("piBoardId", &[]).unwrap().unwrap();
    let record = id.as_record().unwrap();
    assert_eq!(record.get("model"), Some(&Value::from("Compute Module")));
    assert_eq!(record.get("maker"), Some(&Value::from("MBest")));
}
