//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Base name of the optional config file (any format the `config` crate knows).
const CONFIG_FILE_NAME: &str = "cuts-site";

/// Get config directory (CUTS_CONFIG_DIR or the working directory)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("CUTS_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("host", default_host())?
        .set_default("port", default_port() as i64)?
        .add_source(
            ::config::File::with_name(&config_dir.join(CONFIG_FILE_NAME).to_string_lossy())
                .required(false),
        )
        // CUTS_PORT, CUTS_HOST
        .add_source(::config::Environment::with_prefix("CUTS").try_parsing(true));

    // Platform PORT (container hosts) applies only when CUTS_PORT is absent
    if std::env::var("CUTS_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port_num) => builder = builder.set_override("port", port_num as i64)?,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var("CUTS_PORT");
        env::remove_var("CUTS_HOST");
        env::remove_var("PORT");
        env::remove_var("CUTS_CONFIG_DIR");
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        env::set_var("CUTS_CONFIG_DIR", "/tmp/cuts-site-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    #[serial]
    fn reads_config_file_from_config_dir() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("cuts-site.toml"),
            "host = \"127.0.0.1\"\nport = 8181\n",
        )
        .unwrap();
        env::set_var("CUTS_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8181);
    }

    #[test]
    #[serial]
    fn cuts_port_wins_over_platform_port() {
        clear_env();
        env::set_var("CUTS_CONFIG_DIR", "/tmp/cuts-site-test-nonexistent");
        env::set_var("CUTS_PORT", "4100");
        env::set_var("PORT", "5100");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 4100);
    }

    #[test]
    #[serial]
    fn platform_port_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cuts-site.toml"), "port = 8181\n").unwrap();
        env::set_var("CUTS_CONFIG_DIR", dir.path());
        env::set_var("PORT", "5100");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 5100);
    }

    #[test]
    #[serial]
    fn invalid_platform_port_is_ignored() {
        clear_env();
        env::set_var("CUTS_CONFIG_DIR", "/tmp/cuts-site-test-nonexistent");
        env::set_var("PORT", "not-a-port");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 3000);
    }
}
