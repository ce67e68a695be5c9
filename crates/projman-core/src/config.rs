//! Environment-driven settings.
//!
//! projman is configured entirely through the environment:
//! - `PROJMAN_TEMPLATES` — colon-delimited directories scanned for template
//!   definition files. Required; missing configuration is fatal at startup.
//! - `PROJMAN_LOCATION` — base path for created projects; defaults to
//!   `<home>/projman/projects`.
//!
//! The project manifest lives at a fixed user-scoped path,
//! `<config-dir>/projman/project_list.yaml`.

use std::env;
use std::path::PathBuf;

use camino::Utf8PathBuf;

use crate::error::{Error, Result};

/// Environment variable naming the template search directories
pub const TEMPLATES_ENV: &str = "PROJMAN_TEMPLATES";

/// Environment variable overriding the default projects base path
pub const LOCATION_ENV: &str = "PROJMAN_LOCATION";

/// Directory under the user config dir holding projman state
const CONFIG_DIR_NAME: &str = "projman";

/// Manifest file name (kept for compatibility with existing manifests)
const MANIFEST_FILE_NAME: &str = "project_list.yaml";

/// Resolved projman settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directories scanned (non-recursively) for template definition files
    pub template_dirs: Vec<Utf8PathBuf>,

    /// Base path under which new projects are created
    pub projects_dir: Utf8PathBuf,

    /// Path of the persisted project manifest
    pub manifest_path: Utf8PathBuf,
}

impl Settings {
    /// Build settings explicitly (test seam; no environment access)
    pub fn new(
        template_dirs: Vec<Utf8PathBuf>,
        projects_dir: Utf8PathBuf,
        manifest_path: Utf8PathBuf,
    ) -> Self {
        Self {
            template_dirs,
            projects_dir,
            manifest_path,
        }
    }

    /// Resolve settings from the process environment
    pub fn from_env() -> Result<Self> {
        let raw = env::var(TEMPLATES_ENV).map_err(|_| Error::missing_env(TEMPLATES_ENV))?;
        let template_dirs: Vec<Utf8PathBuf> = raw
            .split(':')
            .filter(|part| !part.is_empty())
            .map(Utf8PathBuf::from)
            .collect();
        if template_dirs.is_empty() {
            return Err(Error::missing_env(TEMPLATES_ENV));
        }

        let projects_dir = match env::var(LOCATION_ENV) {
            Ok(location) if !location.is_empty() => Utf8PathBuf::from(location),
            _ => home_dir()?.join("projman").join("projects"),
        };

        let manifest_path = config_dir()?
            .join(CONFIG_DIR_NAME)
            .join(MANIFEST_FILE_NAME);

        Ok(Self {
            template_dirs,
            projects_dir,
            manifest_path,
        })
    }
}

/// Get the user home directory as a UTF-8 path
pub fn home_dir() -> Result<Utf8PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    into_utf8(home)
}

/// Get the user configuration directory as a UTF-8 path
pub fn config_dir() -> Result<Utf8PathBuf> {
    let config = dirs::config_dir().ok_or(Error::NoHomeDir)?;
    into_utf8(config)
}

fn into_utf8(path: PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|p| Error::invalid_config(format!("Path is not valid UTF-8: {}", p.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(TEMPLATES_ENV);
        env::remove_var(LOCATION_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_requires_templates() {
        clear_env();
        let err = Settings::from_env().unwrap_err();
        assert!(
            matches!(err, Error::MissingEnv { ref var } if var == TEMPLATES_ENV),
            "Expected MissingEnv, got: {:?}",
            err
        );
    }

    #[test]
    #[serial]
    fn test_from_env_splits_template_dirs_on_colons() {
        clear_env();
        env::set_var(TEMPLATES_ENV, "/etc/projman/templates:/opt/templates");
        env::set_var(LOCATION_ENV, "/srv/projects");

        let settings = Settings::from_env().unwrap();
        assert_eq!(
            settings.template_dirs,
            vec![
                Utf8PathBuf::from("/etc/projman/templates"),
                Utf8PathBuf::from("/opt/templates"),
            ]
        );
        assert_eq!(settings.projects_dir, Utf8PathBuf::from("/srv/projects"));
        assert!(settings.manifest_path.ends_with("projman/project_list.yaml"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_empty_path_segments() {
        clear_env();
        env::set_var(TEMPLATES_ENV, ":/opt/templates:");

        let settings = Settings::from_env().unwrap();
        assert_eq!(
            settings.template_dirs,
            vec![Utf8PathBuf::from("/opt/templates")]
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_blank_templates_value() {
        clear_env();
        env::set_var(TEMPLATES_ENV, "");
        assert!(Settings::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_location_falls_back_under_home() {
        clear_env();
        env::set_var(TEMPLATES_ENV, "/opt/templates");

        let settings = Settings::from_env().unwrap();
        assert!(settings.projects_dir.ends_with("projman/projects"));
        clear_env();
    }
}
