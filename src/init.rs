use std::path::{Path, PathBuf};

use crate::{
    autocomplete::{Autocomplete, Settings, DEFAULT_LIMIT},
    config,
    importer::{self, ImportError},
    models::{AutocompleteConfig, Config},
};

const DEFAULT_ADDRESS: &str = "0.0.0.0:9000";

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Load and merge config files. Exits on error.
pub fn init_config(paths: &[PathBuf]) -> Config {
    let mut cfg = match config::load_all(paths) {
        Ok(c) => c,
        Err(e) => {
            log::error!("error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if cfg.app.address.is_empty() {
        cfg.app.address = DEFAULT_ADDRESS.to_string();
    }
    cfg
}

/// Generate a new config file.
pub fn generate_config(path: &Path) -> Result<(), config::ConfigError> {
    config::generate_sample(path)
}

/// Engine settings from config, with defaults for unset values.
pub fn settings(cfg: &AutocompleteConfig) -> Settings {
    let def = Settings::default();

    let limit = if cfg.limit == 0 {
        DEFAULT_LIMIT
    } else {
        cfg.limit
    };
    let max_limit = if cfg.max_limit == 0 {
        def.max_limit
    } else {
        cfg.max_limit
    };

    if limit > max_limit {
        log::warn!(
            "autocomplete.limit ({}) is above max_limit ({}), capping",
            limit,
            max_limit
        );
    }

    Settings {
        limit: limit.min(max_limit),
        max_limit,
        max_term_len: cfg.max_term_len.unwrap_or(def.max_term_len),
    }
}

/// Build the engine and load the seed file, if any. `seed` overrides the
/// seed file in the config.
pub fn init_autocomplete(
    cfg: &AutocompleteConfig,
    seed: Option<&Path>,
) -> Result<Autocomplete, ImportError> {
    let s = settings(cfg);
    log::info!(
        "autocomplete: limit={} max_limit={} max_term_len={}",
        s.limit,
        s.max_limit,
        s.max_term_len
    );

    let ac = Autocomplete::new(s);

    let seed = seed.map(Path::to_path_buf).or_else(|| {
        (!cfg.seed_file.is_empty()).then(|| PathBuf::from(&cfg.seed_file))
    });
    if let Some(path) = seed {
        importer::import_csv(&path, &ac)?;
    }

    Ok(ac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let s = settings(&AutocompleteConfig::default());
        assert_eq!(s.limit, 5);
        assert_eq!(s.max_limit, 50);
        assert_eq!(s.max_term_len, 256);
    }

    #[test]
    fn settings_caps_limit() {
        let s = settings(&AutocompleteConfig {
            limit: 80,
            max_limit: 20,
            max_term_len: Some(0),
            ..Default::default()
        });
        assert_eq!(s.limit, 20);
        assert_eq!(s.max_term_len, 0);
    }

    #[test]
    fn seed_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_seed = dir.path().join("a.csv");
        let flag_seed = dir.path().join("b.csv");
        std::fs::write(&cfg_seed, "alpha\n").unwrap();
        std::fs::write(&flag_seed, "beta\n").unwrap();

        let cfg = AutocompleteConfig {
            seed_file: cfg_seed.to_string_lossy().to_string(),
            ..Default::default()
        };

        let ac = init_autocomplete(&cfg, None).unwrap();
        assert!(ac.get("alpha").is_some());

        let ac = init_autocomplete(&cfg, Some(&flag_seed)).unwrap();
        assert!(ac.get("alpha").is_none());
        assert!(ac.get("beta").is_some());
    }
}
