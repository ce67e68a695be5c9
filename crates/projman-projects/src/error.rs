//! Error types for projman-projects

use thiserror::Error;

/// Result type alias using projman-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project management error types
#[derive(Error, Debug)]
pub enum Error {
    /// Template source unreadable or malformed
    #[error("Failed to load templates from {path}: {message}")]
    TemplateLoad { path: String, message: String },

    /// Type name defined more than once across the template search path
    #[error("Duplicate template type: {name} (redefined in {path})")]
    DuplicateTemplate { name: String, path: String },

    /// Unknown project type
    #[error("Unknown project type: {project_type}. Available types: {available}")]
    UnknownType {
        project_type: String,
        available: String,
    },

    /// Project create target collides with an existing path
    #[error("Project already exists at: {path}")]
    AlreadyExists { path: String },

    /// I/O failure during materialization
    #[error("Filesystem operation failed at {path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] projman_core::Error),
}

impl Error {
    /// Create a template load error
    pub fn template_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TemplateLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate template error
    pub fn duplicate_template(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::DuplicateTemplate {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create an unknown project type error
    pub fn unknown_type(project_type: impl Into<String>, available: impl Into<String>) -> Self {
        let available = available.into();
        Self::UnknownType {
            project_type: project_type.into(),
            available: if available.is_empty() {
                "(none)".to_string()
            } else {
                available
            },
        }
    }

    /// Create an already exists error
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a filesystem error
    pub fn filesystem(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a configuration or template-load problem.
    ///
    /// The CLI maps these to a distinct exit code so wrapper scripts can
    /// tell a broken setup apart from a failed operation.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::TemplateLoad { .. } | Self::DuplicateTemplate { .. } | Self::Core(_)
        )
    }
}
