//! Filesystem materialization of template trees.
//!
//! Walks a parsed template tree and creates the corresponding directories
//! and empty files on disk, applying inherited octal permissions. A leaf
//! whose display name contains a `.` is treated as a file; every other node
//! becomes a directory. Paths that already exist are left untouched. There
//! is no rollback: an I/O failure propagates and siblings created so far
//! stay on disk.

use std::fs;

use camino::Utf8Path;
use tracing::debug;

use projman_core::Mode;

use crate::error::{Error, Result};
use crate::templates::TemplateNode;

/// Create every node of `nodes` under `root`.
///
/// `base` is the permission inherited by nodes without their own override;
/// a branch's effective permission propagates to its children.
pub fn materialize(nodes: &[TemplateNode], base: Mode, root: &Utf8Path) -> Result<()> {
    for node in nodes {
        materialize_node(node, base, root)?;
    }
    Ok(())
}

fn materialize_node(node: &TemplateNode, inherited: Mode, parent: &Utf8Path) -> Result<()> {
    let mode = node.permission().unwrap_or(inherited);
    let path = parent.join(node.name());

    match node {
        TemplateNode::Leaf { name, .. } => {
            if is_file_name(name) {
                create_file(&path, mode)
            } else {
                create_dir(&path, mode)
            }
        }
        TemplateNode::Branch { children, .. } => {
            create_dir(&path, mode)?;
            for child in children {
                materialize_node(child, mode, &path)?;
            }
            Ok(())
        }
    }
}

/// Display names with an extension are files; everything else is a directory
fn is_file_name(name: &str) -> bool {
    name.contains('.')
}

fn create_file(path: &Utf8Path, mode: Mode) -> Result<()> {
    if path.exists() {
        // Existing content is preserved.
        return Ok(());
    }
    debug!("Creating file {} (mode {})", path, mode);
    fs::File::create(path).map_err(|e| Error::filesystem(path.as_str(), e))?;
    apply_mode(path, mode)
}

/// Create a directory (parents included) with the given mode.
///
/// Also used by the project manager to create the project root itself.
pub(crate) fn create_dir(path: &Utf8Path, mode: Mode) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    debug!("Creating directory {} (mode {})", path, mode);
    fs::create_dir_all(path).map_err(|e| Error::filesystem(path.as_str(), e))?;
    apply_mode(path, mode)
}

#[cfg(unix)]
fn apply_mode(path: &Utf8Path, mode: Mode) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode.bits()))
        .map_err(|e| Error::filesystem(path.as_str(), e))
}

#[cfg(not(unix))]
fn apply_mode(_path: &Utf8Path, _mode: Mode) -> Result<()> {
    // Octal modes do not map onto non-POSIX filesystems.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    use crate::templates::TemplateStore;

    fn root_of(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("path should be valid UTF-8")
    }

    fn nodes_of(yaml: &str, ptype: &str) -> (Vec<TemplateNode>, Mode) {
        let store = TemplateStore::from_yaml("test.yaml", yaml).unwrap();
        let def = store.get(ptype).expect("template should exist");
        (def.nodes.clone(), def.permission)
    }

    #[cfg(unix)]
    fn mode_bits(path: &Utf8Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o7777
    }

    #[test]
    fn test_materialize_reproduces_template_paths() {
        let yaml = r#"
- value:
    basic:
      - value: README.md
      - value:
          src:
            - value: main.go
  permission: "0755"
"#;
        let tmp = TempDir::new().unwrap();
        let root = root_of(&tmp);
        let (nodes, base) = nodes_of(yaml, "basic");

        materialize(&nodes, base, &root).unwrap();

        assert!(root.join("README.md").is_file());
        assert!(root.join("src").is_dir());
        assert!(root.join("src/main.go").is_file());
    }

    #[test]
    fn test_leaf_without_dot_becomes_directory() {
        let yaml = r#"
- value:
    dirs:
      - value: logs
      - value: notes.txt
  permission: "0755"
"#;
        let tmp = TempDir::new().unwrap();
        let root = root_of(&tmp);
        let (nodes, base) = nodes_of(yaml, "dirs");

        materialize(&nodes, base, &root).unwrap();

        assert!(root.join("logs").is_dir());
        assert!(root.join("notes.txt").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions_applied_and_inherited() {
        let yaml = r#"
- value:
    secure:
      - value: open.txt
      - value:
          private:
            - value: key.pem
        permission: "0700"
  permission: "0755"
"#;
        let tmp = TempDir::new().unwrap();
        let root = root_of(&tmp);
        let (nodes, base) = nodes_of(yaml, "secure");

        materialize(&nodes, base, &root).unwrap();

        assert_eq!(mode_bits(&root.join("open.txt")), 0o755);
        assert_eq!(mode_bits(&root.join("private")), 0o700);
        // The override propagates downward as the new inherited mode.
        assert_eq!(mode_bits(&root.join("private/key.pem")), 0o700);
    }

    #[test]
    fn test_existing_file_is_preserved() {
        let yaml = r#"
- value:
    keep:
      - value: README.md
  permission: "0755"
"#;
        let tmp = TempDir::new().unwrap();
        let root = root_of(&tmp);
        fs::write(root.join("README.md"), "hands off").unwrap();
        let (nodes, base) = nodes_of(yaml, "keep");

        materialize(&nodes, base, &root).unwrap();

        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "hands off");
    }

    #[test]
    fn test_io_failure_surfaces_as_filesystem_error() {
        let yaml = r#"
- value:
    broken:
      - value: out.txt
  permission: "0755"
"#;
        let (nodes, base) = nodes_of(yaml, "broken");
        let missing_root = Utf8PathBuf::from("/nonexistent/projman-materialize-test");

        let err = materialize(&nodes, base, &missing_root).unwrap_err();
        assert!(
            matches!(err, Error::Filesystem { .. }),
            "Expected Filesystem, got: {:?}",
            err
        );
    }
}
