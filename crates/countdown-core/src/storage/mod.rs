mod config;
pub mod kv;

pub use config::{Config, LoggingConfig, StorageConfig, WidgetConfig};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use std::path::{Component, Path, PathBuf};

use crate::error::{ConfigError, CoreError};

/// Key the countdown collection is persisted under.
pub const COUNTDOWNS_KEY: &str = "countdowns";

/// Returns the data directory holding `config.toml` and shared containers.
///
/// `COUNTDOWN_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/countdown-widget[-dev]/`, with COUNTDOWN_ENV=dev selecting the
/// development directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the directory fails.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let dir = match std::env::var_os("COUNTDOWN_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join(".config");

            let env = std::env::var("COUNTDOWN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("countdown-widget-dev")
            } else {
                base_dir.join("countdown-widget")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Directory shared between the owning process and display surfaces.
///
/// # Errors
/// Same as [`data_dir`].
/// Fails if `app_group` is not a plain directory name.
pub fn shared_container_dir(app_group: &str) -> Result<PathBuf, CoreError> {
    validate_app_group(app_group)?;
    Ok(data_dir()?.join(app_group))
}

/// An app group names a single directory directly under the data dir.
///
/// # Errors
/// Returns [`ConfigError::InvalidValue`] for empty names, path separators,
/// `.` and `..`.
pub fn validate_app_group(app_group: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        key: "storage.app_group".to_string(),
        message: message.to_string(),
    };

    if app_group.trim().is_empty() {
        return Err(invalid("must not be empty"));
    }
    if app_group.contains(['/', '\\']) {
        return Err(invalid("must not contain path separators"));
    }
    let mut components = Path::new(app_group).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("must be a plain directory name")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_group_must_be_a_plain_name() {
        assert!(validate_app_group("group.com.countdownwidget").is_ok());
        assert!(validate_app_group("group.other").is_ok());

        for bad in ["", "  ", ".", "..", "../../x", "a/b", "/abs", "a\\b"] {
            let err = validate_app_group(bad).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "storage.app_group"),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn container_rejects_escaping_group() {
        assert!(matches!(
            shared_container_dir("../outside"),
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
    }
}
