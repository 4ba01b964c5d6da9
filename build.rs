use std::env;
use std::fs;
use std::path::Path;

/// Claves que lee `AppConfig::from_env`
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "AUTH_POLL_INTERVAL_MS",
    "ACCESS_TOKEN_KEY",
    "REFRESH_TOKEN_KEY",
    "SSO_SERVER_URL",
    "LOGIN_PATH",
    "NOTICE_TIMEOUT_MS",
    "DEFAULT_LANGUAGE",
];

fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file, sidebar config uses built-in defaults (see .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_entry) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env: clave desconocida {}", key);
            continue;
        }
        // El entorno real manda sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
