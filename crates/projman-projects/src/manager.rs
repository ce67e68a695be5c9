//! Project orchestration: create, list, delete, types, describe.
//!
//! `ProjectManager` combines the template store (loaded once, read-only),
//! the filesystem materializer, and the manifest store. It owns the two
//! cross-component invariants: a create target must not already exist, and
//! a project is only recorded in the manifest after its tree materialized
//! successfully.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};

use projman_core::Settings;

use crate::error::{Error, Result};
use crate::manifest::{ManifestEntry, ManifestStore};
use crate::materialize;
use crate::templates::TemplateStore;

/// Orchestrates project operations over the template and manifest stores
pub struct ProjectManager {
    templates: TemplateStore,
    manifest: ManifestStore,
    settings: Settings,
}

impl ProjectManager {
    /// Build a manager from already-loaded parts
    pub fn new(templates: TemplateStore, manifest: ManifestStore, settings: Settings) -> Self {
        Self {
            templates,
            manifest,
            settings,
        }
    }

    /// Load the template store from the settings' search path and build a
    /// manager over the settings' manifest location
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let templates = TemplateStore::load(&settings.template_dirs)?;
        let manifest = ManifestStore::new(settings.manifest_path.clone());
        Ok(Self::new(templates, manifest, settings))
    }

    /// The loaded template store
    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Create a project of the given type.
    ///
    /// The target path is `(path override or configured base) / name`; it
    /// must not already exist. On success the project is recorded in the
    /// manifest and its path returned. If materialization fails partway the
    /// partial tree stays on disk and no manifest entry is written.
    pub fn create(
        &self,
        name: &str,
        project_type: &str,
        path: Option<&Utf8Path>,
    ) -> Result<Utf8PathBuf> {
        let definition = self.templates.get(project_type).ok_or_else(|| {
            Error::unknown_type(project_type, self.templates.types().join(", "))
        })?;

        let base = path.unwrap_or_else(|| self.settings.projects_dir.as_path());
        let target = base.join(name);
        if target.exists() {
            return Err(Error::already_exists(target.as_str()));
        }

        debug!("Creating project '{}' ({}) at {}", name, project_type, target);
        materialize::create_dir(&target, definition.permission)?;
        materialize::materialize(&definition.nodes, definition.permission, &target)?;

        self.manifest.append(
            project_type,
            ManifestEntry {
                name: name.to_string(),
                path: target.clone(),
            },
        )?;

        Ok(target)
    }

    /// Project names recorded in the manifest, optionally restricted to a
    /// comma-delimited list of types
    pub fn list(&self, types: Option<&str>) -> Result<Vec<String>> {
        let filter: Option<Vec<String>> = types.map(|raw| {
            raw.split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        });
        self.manifest.query(filter.as_deref())
    }

    /// Delete every project named `name` (optionally within one type) from
    /// the manifest and best-effort remove its directory tree.
    ///
    /// A path missing on disk is expected (the project may have been removed
    /// out-of-band); other per-path failures are logged and swallowed. The
    /// manifest update persists regardless. Returns the number of manifest
    /// entries removed.
    pub fn delete(&self, name: &str, project_type: Option<&str>) -> Result<usize> {
        let removed = self.manifest.remove_by_name(project_type, name)?;

        for entry in &removed {
            match fs::remove_dir_all(&entry.path) {
                Ok(()) => debug!("Deleted {}", entry.path),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    debug!("Path {} already gone", entry.path);
                }
                Err(err) => warn!("Failed to delete {}: {}", entry.path, err),
            }
        }

        Ok(removed.len())
    }

    /// Sorted names of the loaded template types
    pub fn types(&self) -> Vec<String> {
        self.templates.types()
    }

    /// Printable ASCII tree of the given type's template
    pub fn describe(&self, project_type: &str) -> Result<Vec<String>> {
        self.templates.describe(project_type)
    }
}
