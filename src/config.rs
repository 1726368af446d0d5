use std::path::{Path, PathBuf};

use crate::models::Config;

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config file already exists")]
    Exists,
    #[error("no config files specified")]
    Empty,
}

/// Load and merge one or more config files, in order.
pub fn load_all(paths: &[PathBuf]) -> Result<Config, ConfigError> {
    let mut config: Option<Config> = None;

    for path in paths {
        log::info!("loading config: {}", path.display());
        let c = read_file(path)?;
        if let Some(ref mut existing) = config {
            merge(existing, c);
        } else {
            config = Some(c);
        }
    }

    config.ok_or(ConfigError::Empty)
}

/// Generate sample config file.
pub fn generate_sample(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::Exists);
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

/// Load configuration from a given TOML file.
fn read_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn parse(s: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(s)?)
}

/// Merge the given src config into the dest config struct.
fn merge(dest: &mut Config, src: Config) {
    if !src.app.address.is_empty() {
        dest.app.address = src.app.address;
    }

    if src.autocomplete.limit > 0 {
        dest.autocomplete.limit = src.autocomplete.limit;
    }
    if src.autocomplete.max_limit > 0 {
        dest.autocomplete.max_limit = src.autocomplete.max_limit;
    }
    if src.autocomplete.max_term_len.is_some() {
        dest.autocomplete.max_term_len = src.autocomplete.max_term_len;
    }
    if !src.autocomplete.seed_file.is_empty() {
        dest.autocomplete.seed_file = src.autocomplete.seed_file;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_parses() {
        let c = parse(SAMPLE_CONFIG).unwrap();
        assert_eq!(c.app.address, "0.0.0.0:9000");
        assert_eq!(c.autocomplete.limit, 5);
        assert_eq!(c.autocomplete.max_limit, 50);
        assert_eq!(c.autocomplete.max_term_len, Some(256));
    }

    #[test]
    fn merge_overrides_set_values() {
        let mut base = parse(SAMPLE_CONFIG).unwrap();
        let over = parse(
            r#"
            [autocomplete]
            limit = 8
            max_term_len = 0
            "#,
        )
        .unwrap();

        merge(&mut base, over);
        assert_eq!(base.app.address, "0.0.0.0:9000");
        assert_eq!(base.autocomplete.limit, 8);
        assert_eq!(base.autocomplete.max_limit, 50);
        assert_eq!(base.autocomplete.max_term_len, Some(0));
    }

    #[test]
    fn load_and_generate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        generate_sample(&path).unwrap();
        assert!(matches!(generate_sample(&path), Err(ConfigError::Exists)));

        let local = dir.path().join("local.toml");
        std::fs::write(&local, "[app]\naddress = \"127.0.0.1:8080\"\n").unwrap();

        let c = load_all(&[path, local]).unwrap();
        assert_eq!(c.app.address, "127.0.0.1:8080");
        assert_eq!(c.autocomplete.limit, 5);

        assert!(matches!(load_all(&[]), Err(ConfigError::Empty)));
    }
}
