//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the listener binds to (`BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Directory holding the built frontend (`STATIC_DIR`)
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.into());

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir),
        })
    }

    /// Page served for any path without a matching file
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.index_file(), PathBuf::from("static/index.html"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("BIND_ADDR", "127.0.0.1:8080"), ("STATIC_DIR", "dist")]).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_blank_static_dir_uses_default() {
        let config = config_from(&[("STATIC_DIR", "  ")]).unwrap();
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
