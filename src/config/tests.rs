use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;

use crate::config::Config;
use crate::config::constants::{DEFAULT_GEMINI_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::config::environment::{env_f32, env_string, env_u32, env_u64};

const CONFIG_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "FITCOACH_BASE_URL",
    "FITCOACH_MODEL",
    "FITCOACH_TIMEOUT_SECS",
    "FITCOACH_MAX_OUTPUT_TOKENS",
    "FITCOACH_TEMPERATURE",
];

fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn new(vars: &[(&str, Option<&str>)]) -> Self {
        let saved = vars
            .iter()
            .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
            .collect::<Vec<_>>();
        for (key, value) in vars {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
        Self { saved }
    }

    /// Point HOME at `home` and clear every config variable not listed.
    fn isolated(home: &str, vars: &[(&str, Option<&str>)]) -> Self {
        let mut all: Vec<(&str, Option<&str>)> = vec![("HOME", Some(home))];
        for key in CONFIG_VARS {
            let value = vars
                .iter()
                .find(|(name, _)| name == key)
                .and_then(|(_, value)| *value);
            all.push((*key, value));
        }
        Self::new(&all)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

fn write_config(home: &TempDir, contents: &str) {
    let config_dir = home.path().join(".fitcoach");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config"), contents).unwrap();
}

#[test]
fn load_without_file_uses_defaults() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

    let config = Config::load().unwrap();
    assert!(!config.api.has_api_key());
    assert_eq!(config.api.base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(config.api.model, DEFAULT_MODEL);
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.generation.temperature, DEFAULT_TEMPERATURE);
    assert_eq!(config.generation.top_k, 40);
    assert_eq!(config.generation.max_output_tokens, 2048);
}

#[test]
fn load_from_env_only() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let _env = EnvGuard::isolated(
        temp_home.path().to_str().unwrap(),
        &[
            ("GEMINI_API_KEY", Some("env-key")),
            ("FITCOACH_TIMEOUT_SECS", Some("45")),
            ("FITCOACH_MAX_OUTPUT_TOKENS", Some("4096")),
            ("FITCOACH_MODEL", Some("gemini-1.5-flash")),
            ("FITCOACH_TEMPERATURE", Some("0.2")),
        ],
    );

    let config = Config::load().unwrap();
    assert_eq!(config.api.api_key, "env-key");
    assert_eq!(config.api.timeout_secs, 45);
    assert_eq!(config.api.model, "gemini-1.5-flash");
    assert_eq!(config.generation.max_output_tokens, 4096);
    assert!((config.generation.temperature - 0.2).abs() < f32::EPSILON);
}

#[test]
fn load_prefers_env_over_file() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    write_config(
        &temp_home,
        r#"{
            "api": { "api_key": "file-key", "timeout_secs": 20, "model": "file-model" },
            "generation": { "max_output_tokens": 1024, "top_k": 10 }
        }"#,
    );

    let _env = EnvGuard::isolated(
        temp_home.path().to_str().unwrap(),
        &[
            ("GEMINI_API_KEY", Some("env-key")),
            ("FITCOACH_TIMEOUT_SECS", Some("40")),
        ],
    );

    let config = Config::load().unwrap();
    assert_eq!(config.api.api_key, "env-key");
    assert_eq!(config.api.timeout_secs, 40);
    assert_eq!(config.api.model, "file-model");
    assert_eq!(config.generation.max_output_tokens, 1024);
    assert_eq!(config.generation.top_k, 10);
}

#[test]
fn load_rejects_out_of_range_values() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    write_config(&temp_home, r#"{ "generation": { "top_p": 1.5 } }"#);
    let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

    let err = Config::load().unwrap_err();
    assert!(err.to_string().contains("top_p"));
}

#[test]
fn load_reports_malformed_file() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    write_config(&temp_home, "{ api: ");
    let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

    let err = Config::load().unwrap_err();
    assert!(err.to_string().contains("Failed parsing JSON config"));
}

#[test]
fn blank_file_is_ignored() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    write_config(&temp_home, "   \n");
    let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

    assert_eq!(Config::load().unwrap().api.model, DEFAULT_MODEL);
}

#[test]
fn builder_rejects_zero_timeout() {
    let err = Config::builder()
        .with_api(|api| api.timeout_secs = 0)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("Timeout"));
}

#[test]
fn save_persists_nested_structure() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

    let mut config = Config::builder().build().unwrap();
    config.api.api_key = "test-key".to_string();
    config.api.timeout_secs = 55;
    config.api.model = "custom-model".to_string();
    config.generation.max_output_tokens = 999;
    config.save().unwrap();

    let persisted = std::fs::read_to_string(Config::config_path().unwrap()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
    assert_eq!(json["api"]["api_key"], "test-key");
    assert_eq!(json["api"]["timeout_secs"], 55);
    assert_eq!(json["api"]["model"], "custom-model");
    assert_eq!(json["generation"]["max_output_tokens"], 999);

    let reloaded = Config::load().unwrap();
    assert_eq!(reloaded.api.api_key, "test-key");
    assert_eq!(reloaded.generation, config.generation);
}

#[test]
fn test_env_string() {
    let _lock = env_lock();
    let _env = EnvGuard::new(&[("FITCOACH_TEST_VAR", Some("test_value"))]);

    assert_eq!(
        env_string("FITCOACH_TEST_VAR").unwrap(),
        Some("test_value".to_string())
    );
    assert_eq!(env_string("FITCOACH_NONEXISTENT_VAR").unwrap(), None);
}

#[test]
fn test_env_numbers() {
    let _lock = env_lock();
    let _env = EnvGuard::new(&[
        ("FITCOACH_TEST_U64", Some("123")),
        ("FITCOACH_TEST_U32", Some("456")),
        ("FITCOACH_TEST_F32", Some("0.5")),
        ("FITCOACH_TEST_BAD", Some("lots")),
    ]);

    assert_eq!(env_u64("FITCOACH_TEST_U64").unwrap(), Some(123));
    assert_eq!(env_u32("FITCOACH_TEST_U32").unwrap(), Some(456));
    assert_eq!(env_f32("FITCOACH_TEST_F32").unwrap(), Some(0.5));
    assert!(env_u32("FITCOACH_TEST_BAD").is_err());
    assert_eq!(env_u64("FITCOACH_NONEXISTENT_VAR").unwrap(), None);
}
