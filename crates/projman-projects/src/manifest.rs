//! The project manifest: a persisted mapping from project type to the list
//! of created projects and their filesystem locations.
//!
//! The manifest is the single source of truth for "what projects exist and
//! where". Every operation reloads it from disk, mutates it in memory, and
//! rewrites the whole file — a single-user, single-process tool needs no
//! locking, and concurrent invocations are last-writer-wins.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// One created project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Project name
    pub name: String,

    /// Absolute path of the project directory
    pub path: Utf8PathBuf,
}

/// Type name → ordered bucket of created projects.
///
/// Bucket order and insertion order within a bucket are both observable
/// through `list`, so the map must preserve insertion order.
pub type Manifest = LinkedHashMap<String, Vec<ManifestEntry>>;

/// Persisted manifest storage
#[derive(Debug, Clone)]
pub struct ManifestStore {
    manifest_path: Utf8PathBuf,
}

impl ManifestStore {
    /// Create a store over the given manifest file path
    pub fn new(manifest_path: Utf8PathBuf) -> Self {
        Self { manifest_path }
    }

    /// Path of the manifest file
    pub fn path(&self) -> &Utf8Path {
        &self.manifest_path
    }

    /// Load the manifest, bootstrapping an empty one on first use
    pub fn load(&self) -> Result<Manifest> {
        if !self.manifest_path.exists() {
            debug!("Manifest {} missing, bootstrapping", self.manifest_path);
            let manifest = Manifest::new();
            self.save(&manifest)?;
            return Ok(manifest);
        }

        let content = fs::read_to_string(&self.manifest_path)?;
        if content.trim().is_empty() {
            return Ok(Manifest::new());
        }
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// Rewrite the whole manifest file
    fn save(&self, manifest: &Manifest) -> Result<()> {
        if let Some(parent) = self.manifest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(manifest)?;
        fs::write(&self.manifest_path, content)?;
        Ok(())
    }

    /// Append an entry to the type's bucket (created if absent) and persist
    pub fn append(&self, project_type: &str, entry: ManifestEntry) -> Result<()> {
        let mut manifest = self.load()?;
        manifest
            .entry(project_type.to_string())
            .or_insert_with(Vec::new)
            .push(entry);
        self.save(&manifest)?;
        debug!("Recorded project under '{}' in manifest", project_type);
        Ok(())
    }

    /// Remove every entry named `name`, optionally restricted to one type's
    /// bucket, and persist. Returns the removed entries so the caller can
    /// clean up their filesystem paths.
    ///
    /// With an explicit type the bucket must exist; a name matching nothing
    /// is not an error (the removal count is simply zero).
    pub fn remove_by_name(
        &self,
        project_type: Option<&str>,
        name: &str,
    ) -> Result<Vec<ManifestEntry>> {
        let mut manifest = self.load()?;
        let mut removed = Vec::new();

        match project_type {
            Some(ptype) => {
                let available = manifest.keys().cloned().collect::<Vec<_>>().join(", ");
                let bucket = manifest
                    .get_mut(ptype)
                    .ok_or_else(|| Error::unknown_type(ptype, available))?;
                drain_matches(bucket, name, &mut removed);
            }
            None => {
                for bucket in manifest.values_mut() {
                    drain_matches(bucket, name, &mut removed);
                }
            }
        }

        self.save(&manifest)?;
        debug!("Removed {} manifest entries named '{}'", removed.len(), name);
        Ok(removed)
    }

    /// Project names, bucket order then insertion order, optionally
    /// restricted to the requested types. Unknown requested types silently
    /// contribute nothing.
    pub fn query(&self, types: Option<&[String]>) -> Result<Vec<String>> {
        let manifest = self.load()?;

        let names = match types {
            None => manifest
                .values()
                .flatten()
                .map(|entry| entry.name.clone())
                .collect(),
            Some(filter) => manifest
                .iter()
                .filter(|(ptype, _)| filter.iter().any(|requested| requested == *ptype))
                .flat_map(|(_, bucket)| bucket)
                .map(|entry| entry.name.clone())
                .collect(),
        };

        Ok(names)
    }
}

fn drain_matches(bucket: &mut Vec<ManifestEntry>, name: &str, removed: &mut Vec<ManifestEntry>) {
    let mut kept = Vec::with_capacity(bucket.len());
    for entry in bucket.drain(..) {
        if entry.name == name {
            removed.push(entry);
        } else {
            kept.push(entry);
        }
    }
    *bucket = kept;
}
