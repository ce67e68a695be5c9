//! Template store: loading and lookup of named template definitions.
//!
//! Definitions are loaded once at startup from every `*.yaml`/`*.yml` file in
//! the configured directories. Any unreadable or malformed source fails the
//! whole load; a partial template set is never used.

use std::collections::HashMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

use super::parser::{self, TemplateDefinition, TemplateNode};

/// Immutable set of loaded template definitions, keyed by type name
#[derive(Debug, Default)]
pub struct TemplateStore {
    templates: HashMap<String, TemplateDefinition>,
}

impl TemplateStore {
    /// Load definitions from every template file in the given directories.
    ///
    /// Directories are scanned non-recursively; files are read in sorted
    /// order per directory so the load is deterministic. A type name defined
    /// twice anywhere on the search path is an error.
    pub fn load(dirs: &[Utf8PathBuf]) -> Result<Self> {
        let mut store = Self::default();

        for dir in dirs {
            for path in definition_files(dir)? {
                let yaml = fs::read_to_string(&path)
                    .map_err(|e| Error::template_load(path.as_str(), e.to_string()))?;
                store.merge(path.as_str(), &yaml)?;
            }
        }

        debug!("Loaded {} template definition(s)", store.templates.len());
        Ok(store)
    }

    /// Parse definitions from a single YAML string (test seam).
    ///
    /// `source` labels the origin in error messages.
    pub fn from_yaml(source: &str, yaml: &str) -> Result<Self> {
        let mut store = Self::default();
        store.merge(source, yaml)?;
        Ok(store)
    }

    fn merge(&mut self, source: &str, yaml: &str) -> Result<()> {
        for definition in parser::parse_str(source, yaml)? {
            if self.templates.contains_key(&definition.name) {
                return Err(Error::duplicate_template(&definition.name, source));
            }
            debug!("Loaded template '{}' from {}", definition.name, source);
            self.templates.insert(definition.name.clone(), definition);
        }
        Ok(())
    }

    /// Whether the given type name is loaded
    pub fn contains(&self, project_type: &str) -> bool {
        self.templates.contains_key(project_type)
    }

    /// Get a definition by type name
    pub fn get(&self, project_type: &str) -> Option<&TemplateDefinition> {
        self.templates.get(project_type)
    }

    /// All loaded type names, sorted
    pub fn types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.templates.keys().cloned().collect();
        types.sort();
        types
    }

    /// Whether no templates are loaded
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render a type's tree as printable lines.
    ///
    /// Depth-first pre-order; each line is `"|   "` repeated per depth level,
    /// then `"---"`, then the node name.
    pub fn describe(&self, project_type: &str) -> Result<Vec<String>> {
        let definition = self
            .get(project_type)
            .ok_or_else(|| Error::unknown_type(project_type, self.types().join(", ")))?;

        let mut lines = Vec::new();
        describe_nodes(&definition.nodes, 0, &mut lines);
        Ok(lines)
    }
}

fn describe_nodes(nodes: &[TemplateNode], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        lines.push(format!("{}---{}", "|   ".repeat(depth), node.name()));
        if let TemplateNode::Branch { children, .. } = node {
            describe_nodes(children, depth + 1, lines);
        }
    }
}

/// Template definition files directly inside `dir`, sorted
fn definition_files(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();

    for pattern in ["*.yaml", "*.yml"] {
        let matcher = dir.join(pattern);
        let entries = glob::glob(matcher.as_str())
            .map_err(|e| Error::template_load(dir.as_str(), e.to_string()))?;
        for entry in entries {
            let path = entry.map_err(|e| Error::template_load(dir.as_str(), e.to_string()))?;
            let path = Utf8PathBuf::from_path_buf(path).map_err(|p| {
                Error::template_load(
                    dir.as_str(),
                    format!("template path is not valid UTF-8: {}", p.display()),
                )
            })?;
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NESTED: &str = r#"
- value:
    houdini:
      - value: README.md
      - value:
          shots:
            - value:
                comp:
                  - value: v001
            - value: shot.hip
  permission: "0755"
"#;

    fn write_template(dir: &std::path::Path, file: &str, yaml: &str) {
        std::fs::write(dir.join(file), yaml).unwrap();
    }

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).expect("path should be valid UTF-8")
    }

    #[test]
    fn test_load_scans_yaml_and_yml() {
        let tmp = TempDir::new().unwrap();
        write_template(
            tmp.path(),
            "a.yaml",
            "- value:\n    one:\n      - value: a.txt\n  permission: \"0755\"\n",
        );
        write_template(
            tmp.path(),
            "b.yml",
            "- value:\n    two:\n      - value: b.txt\n  permission: \"0755\"\n",
        );
        write_template(tmp.path(), "ignored.txt", "not a template");

        let store = TemplateStore::load(&[utf8(tmp.path())]).unwrap();
        assert_eq!(store.types(), vec!["one", "two"]);
        assert!(store.contains("one"));
        assert!(!store.contains("ignored"));
    }

    #[test]
    fn test_load_missing_directory_yields_empty_store() {
        let store = TemplateStore::load(&[Utf8PathBuf::from("/nonexistent/projman-test")]).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_fails_on_malformed_file() {
        let tmp = TempDir::new().unwrap();
        write_template(tmp.path(), "bad.yaml", "value: [unclosed");

        let err = TemplateStore::load(&[utf8(tmp.path())]).unwrap_err();
        assert!(matches!(err, Error::TemplateLoad { .. }));
    }

    #[test]
    fn test_duplicate_type_across_files_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let record = "- value:\n    maya:\n      - value: a.txt\n  permission: \"0755\"\n";
        write_template(tmp.path(), "a.yaml", record);
        write_template(tmp.path(), "b.yaml", record);

        let err = TemplateStore::load(&[utf8(tmp.path())]).unwrap_err();
        assert!(
            matches!(err, Error::DuplicateTemplate { ref name, .. } if name == "maya"),
            "Expected DuplicateTemplate, got: {:?}",
            err
        );
    }

    #[test]
    fn test_describe_prefixes_match_depth() {
        let store = TemplateStore::from_yaml("test.yaml", NESTED).unwrap();
        let lines = store.describe("houdini").unwrap();
        assert_eq!(
            lines,
            vec![
                "---README.md",
                "---shots",
                "|   ---comp",
                "|   |   ---v001",
                "|   ---shot.hip",
            ]
        );
    }

    #[test]
    fn test_describe_unknown_type() {
        let store = TemplateStore::from_yaml("test.yaml", NESTED).unwrap();
        let err = store.describe("nuke").unwrap_err();
        assert!(
            matches!(err, Error::UnknownType { ref project_type, .. } if project_type == "nuke"),
            "Expected UnknownType, got: {:?}",
            err
        );
        assert!(err.to_string().contains("houdini"));
    }
}
