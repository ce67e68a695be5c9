//! # projman-projects
//!
//! Project management library for the projman CLI providing:
//! - Template definition loading and lookup (`templates`)
//! - Filesystem materialization of template trees (`materialize`)
//! - The persisted project manifest (`manifest`)
//! - Orchestration of create/list/delete/types/describe (`manager`)
//!
//! # Examples
//!
//! ## Describe a template
//!
//! ```
//! use projman_projects::templates::TemplateStore;
//!
//! # fn example() -> projman_projects::Result<()> {
//! let yaml = r#"
//! - value:
//!     basic:
//!       - value: README.md
//!       - value:
//!           src:
//!             - value: main.go
//!   permission: "0755"
//! "#;
//!
//! let store = TemplateStore::from_yaml("inline", yaml)?;
//! assert_eq!(
//!     store.describe("basic")?,
//!     vec!["---README.md", "---src", "|   ---main.go"]
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod manager;
pub mod manifest;
pub mod materialize;
pub mod templates;

pub use error::{Error, Result};

// Re-export the main entry points for convenience
pub use manager::ProjectManager;
pub use manifest::{Manifest, ManifestEntry, ManifestStore};
pub use templates::{TemplateDefinition, TemplateNode, TemplateStore};
