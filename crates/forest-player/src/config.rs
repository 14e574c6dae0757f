//! Player configuration, read from TOML.
//!
//! ```toml
//! kind = "avl"
//! reset_when_empty = true
//! emit_trace = false
//! ```
//!
//! Every field is optional. `FOREST_KIND` in the environment overrides
//! `kind`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use step_forest::{ParseTreeKindError, TreeKind};
use thiserror::Error;

/// Environment variable that overrides [`PlayerConfig::kind`].
pub const KIND_ENV: &str = "FOREST_KIND";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Variant a new session starts with.
    pub kind: TreeKind,
    /// Replace the tree with a fresh one after a removal empties it.
    pub reset_when_empty: bool,
    /// Include the step trace with every command's output.
    pub emit_trace: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            kind: TreeKind::Bst,
            reset_when_empty: true,
            emit_trace: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("FOREST_KIND: {0}")]
    Kind(#[from] ParseTreeKindError),
}

impl PlayerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Applies an override of the tree kind, as read from [`KIND_ENV`].
    /// Blank values are ignored.
    pub fn with_kind_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.kind = v.parse()?;
        }
        Ok(self)
    }

    /// Loads `path` if given, else the defaults, then applies the
    /// environment override.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        let env = std::env::var(KIND_ENV).ok();
        base.with_kind_override(env.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(PlayerConfig::from_toml_str("").unwrap(), PlayerConfig::default());
    }

    #[test]
    fn reads_every_field() {
        let config = PlayerConfig::from_toml_str(
            "kind = \"splay\"\nreset_when_empty = false\nemit_trace = false\n",
        )
        .unwrap();
        assert_eq!(
            config,
            PlayerConfig {
                kind: TreeKind::Splay,
                reset_when_empty: false,
                emit_trace: false,
            }
        );
    }

    #[test]
    fn rejects_unknown_fields_and_kinds() {
        assert!(matches!(
            PlayerConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PlayerConfig::from_toml_str("kind = \"btree\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn kind_override() {
        let base = PlayerConfig::default();
        assert_eq!(
            base.clone().with_kind_override(Some("AVL")).unwrap().kind,
            TreeKind::Avl
        );
        assert_eq!(base.clone().with_kind_override(Some(" ")).unwrap(), base);
        assert_eq!(base.clone().with_kind_override(None).unwrap(), base);
        assert!(matches!(
            base.with_kind_override(Some("heap")),
            Err(ConfigError::Kind(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PlayerConfig::load(Path::new("/nonexistent/forest.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/forest.toml"));
    }
}
