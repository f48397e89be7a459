// Server configuration
use crate::error::{AppError, AppResult};
use std::path::PathBuf;

pub const HOST_VAR: &str = "ENERGY_LOAD_HOST";
pub const PORT_VAR: &str = "ENERGY_LOAD_PORT";
pub const ARTIFACT_VAR: &str = "ENERGY_LOAD_ARTIFACT";
pub const STATIC_DIR_VAR: &str = "ENERGY_LOAD_STATIC_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Bincode-encoded (scaler, model) pair, relative to the working directory.
    pub artifact_path: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            artifact_path: PathBuf::from("model.bin"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    /// Defaults, overridden by any of the `ENERGY_LOAD_*` variables that are set.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("{PORT_VAR}={port:?} is not a valid port")))?;
        }
        if let Some(path) = lookup(ARTIFACT_VAR) {
            config.artifact_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.artifact_path, PathBuf::from("model.bin"));
    }

    #[test]
    fn variables_override_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "9000"),
            (ARTIFACT_VAR, "/srv/heating.bin"),
            (STATIC_DIR_VAR, "/srv/assets"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), ("0.0.0.0", 9000));
        assert_eq!(config.artifact_path, PathBuf::from("/srv/heating.bin"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
