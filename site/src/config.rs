use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Trunk output; holds `index.html` and the wasm bundle
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: lookup("SITE_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port,
            dist_dir: lookup("SITE_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../dist")),
            assets_dir: lookup("SITE_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../assets")),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert!(cfg.dist_dir.ends_with("../dist"));
        assert!(cfg.assets_dir.ends_with("../assets"));
        assert!(cfg.index_file().ends_with("dist/index.html"));
    }

    #[test]
    fn overrides_are_honoured() {
        let cfg = load(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST_DIR", "/srv/dist"),
            ("SITE_ASSETS_DIR", "/srv/assets"),
        ])
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/dist"));
        assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
        assert_eq!(cfg.index_file(), PathBuf::from("/srv/dist/index.html"));
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = load(&[("SITE_PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"), "{err}");

        assert!(load(&[("SITE_PORT", "70000")]).is_err());
    }
}
