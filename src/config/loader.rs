//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DatabaseTarget, RegistryConfig};
use super::secret_string;
use crate::domain::errors::RegistryError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "REGISTRY_GUARD_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RegistryConfig
/// 4. Applies environment variable overrides (REGISTRY_GUARD_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsing or substitution
/// fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use registry_guard::config::loader::load_config;
///
/// let config = load_config("registry-guard.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RegistryConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RegistryError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RegistryError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: RegistryConfig = toml::from_str(&contents)
        .map_err(|e| RegistryError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        RegistryError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// Environment overrides and validation still apply to the defaults, so a
/// plain `DATABASE_PATH`-style setup works without any config file.
///
/// # Errors
///
/// Returns an error if an existing file is invalid or the resulting
/// configuration fails validation.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<RegistryConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");

    let mut config = RegistryConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        RegistryError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| RegistryError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Comment lines are left alone
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(RegistryError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Applies environment variable overrides using the REGISTRY_GUARD_* prefix
///
/// Variables follow the pattern REGISTRY_GUARD_<SECTION>_<KEY>, for example
/// REGISTRY_GUARD_SQLITE_PATH or REGISTRY_GUARD_GENERATOR_LOCALE.
fn apply_env_overrides(config: &mut RegistryConfig) -> Result<()> {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("DATABASE_TARGET") {
        config.database_target = match val.to_lowercase().as_str() {
            "sqlite" => DatabaseTarget::Sqlite,
            "postgresql" => DatabaseTarget::PostgreSQL,
            other => {
                return Err(RegistryError::Configuration(format!(
                    "Invalid {ENV_PREFIX}DATABASE_TARGET '{other}'. Must be one of: sqlite, postgresql"
                )))
            }
        };
    }

    if let Some(val) = env_override("SQLITE_PATH") {
        config.sqlite.path = val;
    }
    if let Some(val) = env_override("SQLITE_BUSY_TIMEOUT_MS") {
        if let Ok(timeout) = val.parse() {
            config.sqlite.busy_timeout_ms = timeout;
        }
    }

    if let Some(val) = env_override("POSTGRESQL_CONNECTION_STRING") {
        match config.postgresql {
            Some(ref mut pg) => pg.connection_string = secret_string(val),
            None => {
                config.postgresql = Some(super::schema::PostgreSQLConfig {
                    connection_string: secret_string(val),
                    max_connections: 4,
                    connection_timeout_seconds: 30,
                    statement_timeout_seconds: 60,
                    ssl_mode: "prefer".to_string(),
                })
            }
        }
    }
    if let Some(ref mut pg) = config.postgresql {
        if let Some(val) = env_override("POSTGRESQL_MAX_CONNECTIONS") {
            if let Ok(max) = val.parse() {
                pg.max_connections = max;
            }
        }
        if let Some(val) = env_override("POSTGRESQL_SSL_MODE") {
            pg.ssl_mode = val;
        }
    }

    if let Some(val) = env_override("GENERATOR_LOCALE") {
        config.generator.locale = val;
    }
    if let Some(val) = env_override("GENERATOR_DEFAULT_SEED_COUNT") {
        if let Ok(count) = val.parse() {
            config.generator.default_seed_count = count;
        }
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
