//! Template definition parsing.
//!
//! Parses the on-disk template format into tagged tree structures. The file
//! format is a sequence of records, each carrying a single-key `value`
//! mapping (the type name) and a root `permission`:
//!
//! ```yaml
//! - value:
//!     maya:
//!       - value: README.md
//!       - value:
//!           src:
//!             - value: main.go
//!         permission: "0700"
//!   permission: "0755"
//! ```
//!
//! The leaf-or-branch ambiguity of a node's `value` (string vs. mapping) is
//! resolved here, once, into `TemplateNode::Leaf` / `TemplateNode::Branch` —
//! traversal code never re-inspects raw YAML shapes.

use std::collections::HashSet;

use hashlink::LinkedHashMap;
use serde::Deserialize;

use projman_core::Mode;

use crate::error::{Error, Result};

/// A single node of a template tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    /// A file (name contains a `.`) or an empty directory
    Leaf {
        name: String,
        permission: Option<Mode>,
    },
    /// A directory with children
    Branch {
        name: String,
        permission: Option<Mode>,
        children: Vec<TemplateNode>,
    },
}

impl TemplateNode {
    /// The node's display name
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf { name, .. } | Self::Branch { name, .. } => name,
        }
    }

    /// The node's own permission override, if any
    pub fn permission(&self) -> Option<Mode> {
        match self {
            Self::Leaf { permission, .. } | Self::Branch { permission, .. } => *permission,
        }
    }
}

/// A named, permission-annotated template tree; immutable after load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDefinition {
    /// The project type this template creates
    pub name: String,

    /// Root permission inherited by nodes without an override
    pub permission: Mode,

    /// Top-level nodes, in file order
    pub nodes: Vec<TemplateNode>,
}

// Raw serde shapes, converted (and validated) into the types above.

#[derive(Debug, Deserialize)]
struct RawTemplate {
    value: LinkedHashMap<String, Vec<RawNode>>,
    permission: String,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    value: RawValue,
    #[serde(default)]
    permission: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Name(String),
    Tree(LinkedHashMap<String, Vec<RawNode>>),
}

/// Parse one template definition source into its definitions.
///
/// `source` labels the origin (a file path) in error messages.
pub(crate) fn parse_str(source: &str, yaml: &str) -> Result<Vec<TemplateDefinition>> {
    let raw: Vec<RawTemplate> = serde_yaml_ng::from_str(yaml)
        .map_err(|e| Error::template_load(source, e.to_string()))?;

    raw.into_iter()
        .map(|template| convert_template(source, template))
        .collect()
}

fn convert_template(source: &str, raw: RawTemplate) -> Result<TemplateDefinition> {
    let (name, children) = single_entry(source, raw.value, "template")?;
    let permission = parse_mode(source, &raw.permission)?;
    let nodes = convert_nodes(source, &name, children)?;

    Ok(TemplateDefinition {
        name,
        permission,
        nodes,
    })
}

fn convert_nodes(source: &str, parent: &str, raw: Vec<RawNode>) -> Result<Vec<TemplateNode>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut nodes = Vec::with_capacity(raw.len());

    for raw_node in raw {
        let node = convert_node(source, raw_node)?;
        if !seen.insert(node.name().to_string()) {
            return Err(Error::template_load(
                source,
                format!(
                    "duplicate sibling name '{}' under '{}' would collide on disk",
                    node.name(),
                    parent
                ),
            ));
        }
        nodes.push(node);
    }

    Ok(nodes)
}

fn convert_node(source: &str, raw: RawNode) -> Result<TemplateNode> {
    let permission = match raw.permission {
        Some(value) => Some(parse_mode(source, &value)?),
        None => None,
    };

    match raw.value {
        RawValue::Name(name) => Ok(TemplateNode::Leaf { name, permission }),
        RawValue::Tree(tree) => {
            let (name, children) = single_entry(source, tree, "directory")?;
            let children = convert_nodes(source, &name, children)?;
            Ok(TemplateNode::Branch {
                name,
                permission,
                children,
            })
        }
    }
}

fn parse_mode(source: &str, raw: &str) -> Result<Mode> {
    raw.parse()
        .map_err(|e: projman_core::Error| Error::template_load(source, e.to_string()))
}

fn single_entry<T>(
    source: &str,
    map: LinkedHashMap<String, T>,
    what: &str,
) -> Result<(String, T)> {
    let len = map.len();
    let mut entries = map.into_iter();
    match (entries.next(), entries.next()) {
        (Some(entry), None) => Ok(entry),
        _ => Err(Error::template_load(
            source,
            format!("{what} mapping must have exactly one key, found {len}"),
        )),
    }
}
