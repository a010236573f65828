use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use dex_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let table = root
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.expect("Template config must include the requested section.");

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("dex_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> dex_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = dex_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn expect_validation_message(payload: String, expected: &str) {
	let err = load_payload(payload).expect_err("Expected validation error.");
	let message = err.to_string();

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error: {err:?}");
	assert!(message.contains(expected), "Unexpected error message: {message}");
}

#[test]
fn sample_config_loads() {
	let cfg = load_payload(SAMPLE_CONFIG_TEMPLATE_TOML.to_string()).expect("Failed to load.");

	assert_eq!(cfg.browse.request_items_size, 10);
	assert_eq!(cfg.view.rank_by, "POKEDEX_NUMBER");
	assert!(cfg.view.display.show_index);
	assert!(!cfg.view.display.show_sprite_bounty);
	assert_eq!(cfg.browse.id_range.map(|range| range.ids().len()), Some(25));
}

#[test]
fn request_items_size_must_be_positive() {
	let payload = sample_toml_with("browse", "request_items_size", Value::Integer(0));

	expect_validation_message(payload, "browse.request_items_size must be greater than zero.");
}

#[test]
fn rank_by_is_normalized_and_checked() {
	let cfg = load_payload(sample_toml_with("view", "rank_by", Value::String(" name ".into())))
		.expect("Failed to load.");

	assert_eq!(cfg.view.rank_by, "NAME");

	let payload = sample_toml_with("view", "rank_by", Value::String("POPULARITY".into()));

	expect_validation_message(payload, "view.rank_by must be one of");
}

#[test]
fn timeout_must_be_positive() {
	let payload = sample_toml_with("source", "timeout_ms", Value::Integer(0));

	expect_validation_message(payload, "source.timeout_ms must be greater than zero.");
}

#[test]
fn api_base_must_be_non_empty() {
	let payload = sample_toml_with("source", "api_base", Value::String("  ".into()));

	expect_validation_message(payload, "source.api_base must be non-empty.");
}

#[test]
fn descending_id_range_is_rejected() {
	let mut range = toml::map::Map::new();

	range.insert("start".to_string(), Value::Integer(10));
	range.insert("end".to_string(), Value::Integer(2));

	let payload = sample_toml_with("browse", "id_range", Value::Table(range));

	expect_validation_message(payload, "browse.id_range.start");
}

#[test]
fn missing_file_reports_read_error() {
	let err = dex_config::load(&env::temp_dir().join("dex_config_missing.toml"))
		.expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error: {err:?}");
}
